use super::tree::{Item, NodeId};
use std::collections::HashMap;

/// Transaction counts of the frequent items, kept in first-seen order.
#[derive(Debug, Clone)]
pub struct FrequencyTable<T> {
    entries: Vec<(T, usize)>,
    index: HashMap<T, usize>,
}

/// One header slot: the item, its frequency and every tree node carrying it.
#[derive(Debug, Clone)]
pub struct HeaderEntry<T> {
    pub item: T,
    pub frequency: usize,
    pub nodes: Vec<NodeId>,
}

/// Frequent items in descending frequency order, each linked to its chain of
/// tree nodes in creation order.
#[derive(Debug, Clone)]
pub struct HeaderTable<T> {
    entries: Vec<HeaderEntry<T>>,
    ranks: HashMap<T, usize>,
}

impl<T: Item> Default for FrequencyTable<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<T: Item> FrequencyTable<T> {
    /// Keeps the counts reaching `min_support`, preserving the input order.
    pub(crate) fn from_counts(counts: Vec<(T, usize)>, min_support: usize) -> Self {
        let entries: Vec<(T, usize)> = counts
            .into_iter()
            .filter(|&(_, count)| count >= min_support)
            .collect();
        let index = entries
            .iter()
            .enumerate()
            .map(|(position, (item, _))| (item.clone(), position))
            .collect();

        Self { entries, index }
    }

    pub fn get(&self, item: &T) -> Option<usize> {
        self.index.get(item).map(|&position| self.entries[position].1)
    }

    pub fn contains(&self, item: &T) -> bool {
        self.index.contains_key(item)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&T, usize)> {
        self.entries.iter().map(|(item, count)| (item, *count))
    }

    pub fn items(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().map(|(item, _)| item)
    }
}

impl<T: Item> Default for HeaderTable<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            ranks: HashMap::new(),
        }
    }
}

impl<T: Item> HeaderTable<T> {
    /// Orders items by descending frequency. The sort is stable, so ties keep
    /// the first-seen order of the frequency table.
    pub(crate) fn from_frequencies(frequencies: &FrequencyTable<T>) -> Self {
        let mut entries: Vec<HeaderEntry<T>> = frequencies
            .iter()
            .map(|(item, frequency)| HeaderEntry {
                item: item.clone(),
                frequency,
                nodes: Vec::new(),
            })
            .collect();
        entries.sort_by(|a, b| b.frequency.cmp(&a.frequency));

        let ranks = entries
            .iter()
            .enumerate()
            .map(|(rank, entry)| (entry.item.clone(), rank))
            .collect();

        Self { entries, ranks }
    }

    pub(crate) fn link(&mut self, item: &T, node: NodeId) {
        if let Some(&rank) = self.ranks.get(item) {
            self.entries[rank].nodes.push(node);
        }
    }

    /// Position of `item` in the global item order.
    pub fn rank(&self, item: &T) -> Option<usize> {
        self.ranks.get(item).copied()
    }

    /// First node created for `item`, `None` while it has not appeared in the tree.
    pub fn head(&self, item: &T) -> Option<NodeId> {
        self.chain(item).first().copied()
    }

    pub fn chain(&self, item: &T) -> &[NodeId] {
        self.rank(item)
            .map_or(&[][..], |rank| self.entries[rank].nodes.as_slice())
    }

    pub fn items(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().map(|entry| &entry.item)
    }

    pub fn iter(&self) -> impl Iterator<Item = &HeaderEntry<T>> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
