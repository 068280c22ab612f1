use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

/// Stable handle of a node inside a [`PrefixTree`] arena.
pub type NodeId = usize;

/// Anything usable as a transaction item.
pub trait Item: Eq + Hash + Clone + Send + Sync {}

impl<T: Eq + Hash + Clone + Send + Sync> Item for T {}

#[derive(Debug, Clone)]
pub struct FPNode<T> {
    /// `None` only for the root sentinel.
    pub item: Option<T>,
    pub count: usize,
    pub parent: Option<NodeId>,
    pub children: HashMap<T, NodeId>,
}

/// Arena-backed prefix tree. Parents own their children through the arena;
/// the `parent` field is a plain index back-reference.
#[derive(Debug, Clone)]
pub struct PrefixTree<T> {
    nodes: Vec<FPNode<T>>,
    root_index: NodeId,
}

impl<T> FPNode<T> {
    pub fn new_root() -> Self {
        Self {
            item: None,
            count: 0,
            parent: None,
            children: HashMap::new(),
        }
    }

    pub fn new_item(item: T, parent: NodeId) -> Self {
        Self {
            item: Some(item),
            count: 1,
            parent: Some(parent),
            children: HashMap::new(),
        }
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

impl<T: fmt::Display> fmt::Display for FPNode<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.item {
            Some(item) => write!(f, "{},{}", item, self.count),
            None => write!(f, "none,{}", self.count),
        }
    }
}

impl<T> Default for PrefixTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PrefixTree<T> {
    pub fn new() -> Self {
        Self {
            nodes: vec![FPNode::new_root()],
            root_index: 0,
        }
    }

    pub fn root(&self) -> NodeId {
        self.root_index
    }

    pub fn node(&self, id: NodeId) -> &FPNode<T> {
        &self.nodes[id]
    }

    pub fn nodes(&self) -> &[FPNode<T>] {
        &self.nodes
    }

    /// Number of nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when the tree holds nothing but the root.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut FPNode<T> {
        &mut self.nodes[id]
    }

    pub(crate) fn push(&mut self, node: FPNode<T>) -> NodeId {
        self.nodes.push(node);
        self.nodes.len() - 1
    }
}
