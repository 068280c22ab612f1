use super::header::{FrequencyTable, HeaderTable};
use super::tree::{Item, PrefixTree};
use log::{debug, info};
use std::collections::{HashMap, HashSet};

/// Collapses duplicates, keeping each item at its first occurrence.
pub fn dedup_transaction<T, J>(transaction: J) -> Vec<T>
where
    T: Item,
    J: IntoIterator<Item = T>,
{
    let mut seen = HashSet::new();
    transaction
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

/// Counts, for every item, the number of transactions containing it and keeps
/// the ones reaching `min_support`. Transactions must already be deduplicated.
pub fn count_item_frequencies<T: Item>(
    transactions: &[Vec<T>],
    min_support: usize,
) -> FrequencyTable<T> {
    let mut positions: HashMap<T, usize> = HashMap::new();
    let mut counts: Vec<(T, usize)> = Vec::new();

    for transaction in transactions {
        for item in transaction {
            match positions.get(item) {
                Some(&position) => counts[position].1 += 1,
                None => {
                    positions.insert(item.clone(), counts.len());
                    counts.push((item.clone(), 1));
                }
            }
        }
    }

    let distinct = counts.len();
    let frequencies = FrequencyTable::from_counts(counts, min_support);
    debug!(
        "{} of {} distinct items reach min_support {}",
        frequencies.len(),
        distinct,
        min_support
    );
    frequencies
}

/// Drops infrequent items and sorts the rest by the header's global order.
pub fn canonicalize<T: Item>(transactions: &[Vec<T>], header: &HeaderTable<T>) -> Vec<Vec<T>> {
    transactions
        .iter()
        .map(|transaction| {
            let mut ranked: Vec<(usize, &T)> = transaction
                .iter()
                .filter_map(|item| header.rank(item).map(|rank| (rank, item)))
                .collect();
            ranked.sort_unstable_by_key(|&(rank, _)| rank);
            ranked.into_iter().map(|(_, item)| item.clone()).collect()
        })
        .collect()
}

/// Inserts every canonicalized transaction, linking created nodes into the
/// header chains.
pub fn build_prefix_tree<T: Item>(
    transactions: &[Vec<T>],
    header: &mut HeaderTable<T>,
) -> PrefixTree<T> {
    let mut tree = PrefixTree::new();

    for transaction in transactions.iter().filter(|t| !t.is_empty()) {
        tree.insert_transaction(transaction, |item, node| header.link(item, node));
    }

    info!(
        "Built prefix tree with {} nodes from {} transactions",
        tree.len(),
        transactions.len()
    );
    tree
}
