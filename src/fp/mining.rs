use super::combinations::for_each_subset;
use super::header::{FrequencyTable, HeaderTable};
use super::storage::{ConditionalPatternBase, PatternTable};
use super::tree::{Item, PrefixTree};
use log::{debug, info};
use rayon::prelude::*;
use std::collections::HashMap;

/// Aggregates, over every tree occurrence of `item`, the occurrence count onto
/// each ancestor above it, then keeps the ancestors reaching `min_support`.
pub fn conditional_pattern_base<T: Item>(
    tree: &PrefixTree<T>,
    header: &HeaderTable<T>,
    item: &T,
    min_support: usize,
) -> ConditionalPatternBase<T> {
    let mut positions: HashMap<&T, usize> = HashMap::new();
    let mut accumulated: Vec<(&T, usize)> = Vec::new();

    for &node_index in header.chain(item) {
        let count = tree.node(node_index).count;

        for ancestor in tree.ancestors(node_index) {
            let Some(ancestor_item) = ancestor.item.as_ref() else {
                continue;
            };
            match positions.get(ancestor_item) {
                Some(&position) => accumulated[position].1 += count,
                None => {
                    positions.insert(ancestor_item, accumulated.len());
                    accumulated.push((ancestor_item, count));
                }
            }
        }
    }

    ConditionalPatternBase::new(
        accumulated
            .into_iter()
            .filter(|&(_, count)| count >= min_support)
            .map(|(ancestor, count)| (ancestor.clone(), count))
            .collect(),
    )
}

/// Conditional pattern bases of every frequent item, in frequency-table order.
pub fn conditional_pattern_bases<T: Item>(
    tree: &PrefixTree<T>,
    header: &HeaderTable<T>,
    frequencies: &FrequencyTable<T>,
    min_support: usize,
    parallel: bool,
) -> Vec<(T, ConditionalPatternBase<T>)> {
    let items: Vec<&T> = frequencies.items().collect();

    let build = |item: &&T| {
        let base = conditional_pattern_base(tree, header, item, min_support);
        ((*item).clone(), base)
    };

    let bases: Vec<(T, ConditionalPatternBase<T>)> = if parallel {
        items.par_iter().map(build).collect()
    } else {
        items.iter().map(build).collect()
    };

    debug!(
        "Computed {} conditional pattern bases (parallel: {})",
        bases.len(),
        parallel
    );
    bases
}

/// Emits `(item, S...)` for every non-empty subset `S` of each base, valued at
/// the smallest base count in `S`, then sets singletons to the item frequencies.
pub fn enumerate_patterns<T: Item>(
    bases: &[(T, ConditionalPatternBase<T>)],
    frequencies: &FrequencyTable<T>,
) -> PatternTable<T> {
    let mut table = PatternTable::default();

    for (item, base) in bases {
        for_each_subset(base.len(), |combination| {
            let mut pattern = Vec::with_capacity(combination.len() + 1);
            pattern.push(item.clone());

            let mut frequency = usize::MAX;
            for &idx in combination {
                let (other, count) = base.entry(idx);
                pattern.push(other.clone());
                frequency = frequency.min(*count);
            }

            table.insert(pattern, frequency);
        });
    }

    for (item, frequency) in frequencies.iter() {
        table.insert(vec![item.clone()], frequency);
    }

    info!(
        "Extracted {} frequent patterns (longest: {} items)",
        table.len(),
        table.max_len()
    );
    table
}
