use super::tree::Item;
use std::collections::HashMap;

/// Ancestor items of one frequent item with their aggregated co-occurrence
/// counts, in the order the ancestors were first met.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConditionalPatternBase<T> {
    entries: Vec<(T, usize)>,
}

/// Frequent patterns keyed by the ordered item tuple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternTable<T: Item> {
    patterns: HashMap<Vec<T>, usize>,
}

impl<T: Item> ConditionalPatternBase<T> {
    pub(crate) fn new(entries: Vec<(T, usize)>) -> Self {
        Self { entries }
    }

    pub fn get(&self, item: &T) -> Option<usize> {
        self.entries
            .iter()
            .find(|(candidate, _)| candidate == item)
            .map(|&(_, count)| count)
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

    pub(crate) fn entry(&self, idx: usize) -> &(T, usize) {
        &self.entries[idx]
    }
}

impl<T: Item> Default for PatternTable<T> {
    fn default() -> Self {
        Self {
            patterns: HashMap::new(),
        }
    }
}

impl<T: Item> PatternTable<T> {
    pub(crate) fn insert(&mut self, pattern: Vec<T>, frequency: usize) {
        self.patterns.insert(pattern, frequency);
    }

    pub fn get(&self, pattern: &[T]) -> Option<usize> {
        self.patterns.get(pattern).copied()
    }

    pub fn contains(&self, pattern: &[T]) -> bool {
        self.patterns.contains_key(pattern)
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Patterns in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&[T], usize)> {
        self.patterns
            .iter()
            .map(|(pattern, &frequency)| (pattern.as_slice(), frequency))
    }

    /// Patterns made of exactly `size` items.
    pub fn of_len(&self, size: usize) -> impl Iterator<Item = (&[T], usize)> {
        self.iter().filter(move |(pattern, _)| pattern.len() == size)
    }

    pub fn max_len(&self) -> usize {
        self.patterns.keys().map(Vec::len).max().unwrap_or(0)
    }

    pub fn into_map(self) -> HashMap<Vec<T>, usize> {
        self.patterns
    }
}
