use super::tree::{FPNode, Item, NodeId, PrefixTree};
use log::trace;

impl<T: Item> PrefixTree<T> {
    pub fn get_child(&self, node: NodeId, item: &T) -> Option<NodeId> {
        self.node(node).children.get(item).copied()
    }

    /// Returns the child of `node` labelled `item`, creating it with count 1
    /// when it does not exist yet. Existing children are never duplicated.
    pub fn add_child(&mut self, node: NodeId, item: T) -> NodeId {
        if let Some(child) = self.get_child(node, &item) {
            return child;
        }

        let child = self.push(FPNode::new_item(item.clone(), node));
        self.node_mut(node).children.insert(item, child);
        child
    }

    /// Walks one canonicalized transaction down from the root, bumping the
    /// counts of shared prefixes and creating the missing suffix. `on_new_node`
    /// is called for every created node, in creation order.
    pub fn insert_transaction<F>(&mut self, transaction: &[T], mut on_new_node: F)
    where
        F: FnMut(&T, NodeId),
    {
        let mut current_index = self.root();

        for item in transaction {
            current_index = match self.get_child(current_index, item) {
                Some(child_index) => {
                    self.node_mut(child_index).count += 1;
                    child_index
                }
                None => {
                    let new_index = self.add_child(current_index, item.clone());
                    trace!("created node {} under {}", new_index, current_index);
                    on_new_node(item, new_index);
                    new_index
                }
            };
        }
    }

    /// Ancestors of `node`, nearest first, stopping before the root.
    pub fn ancestors(&self, node: NodeId) -> Ancestors<'_, T> {
        Ancestors {
            tree: self,
            next: self.node(node).parent,
        }
    }

    pub fn children(&self, node: NodeId) -> impl Iterator<Item = &FPNode<T>> {
        self.node(node)
            .children
            .values()
            .map(move |&child| self.node(child))
    }
}

pub struct Ancestors<'a, T> {
    tree: &'a PrefixTree<T>,
    next: Option<NodeId>,
}

impl<'a, T> Iterator for Ancestors<'a, T> {
    type Item = &'a FPNode<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.tree.node(self.next?);
        if node.is_root() {
            self.next = None;
            return None;
        }
        self.next = node.parent;
        Some(node)
    }
}
