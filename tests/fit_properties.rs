use fptree::{mine_patterns, FPTree, TreeConfig};
use std::collections::HashSet;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn grocery_transactions() -> Vec<Vec<&'static str>> {
    vec![
        vec!["bread", "milk"],
        vec!["bread", "diapers", "beer", "eggs"],
        vec!["milk", "diapers", "beer", "cola"],
        vec!["bread", "milk", "diapers", "beer"],
        vec!["bread", "milk", "diapers", "cola"],
        vec!["milk", "milk", "bread"],
        vec![],
    ]
}

fn fitted(min_support: usize) -> FPTree<&'static str> {
    init_logger();
    let mut fp_tree = FPTree::new(min_support).unwrap();
    fp_tree.fit(grocery_transactions());
    fp_tree
}

#[cfg(test)]
mod frequency_tests {
    use super::*;

    #[test]
    fn test_frequencies_count_distinct_transactions() {
        let fp_tree = fitted(3);
        let transactions = grocery_transactions();

        for (item, frequency) in fp_tree.item_frequencies().iter() {
            let expected = transactions
                .iter()
                .filter(|transaction| transaction.contains(item))
                .count();
            assert_eq!(frequency, expected);
            assert!(frequency >= 3);
        }
        assert_eq!(fp_tree.item_frequencies().get(&"milk"), Some(5));
        assert_eq!(fp_tree.item_frequencies().get(&"eggs"), None);
        assert_eq!(fp_tree.item_frequencies().get(&"cola"), None);
    }

    #[test]
    fn test_header_order_is_non_increasing() {
        let fp_tree = fitted(2);
        let frequencies: Vec<usize> = fp_tree.header_table().iter().map(|e| e.frequency).collect();

        assert!(frequencies.windows(2).all(|pair| pair[0] >= pair[1]));
        // bread and milk tie at 5, bread is seen first.
        let order: Vec<_> = fp_tree.header_table().items().copied().collect();
        assert_eq!(&order[..2], &["bread", "milk"]);
    }
}

#[cfg(test)]
mod tree_tests {
    use super::*;

    #[test]
    fn test_canonical_transactions_follow_item_order() {
        let fp_tree = fitted(2);
        let header = fp_tree.header_table();

        assert_eq!(fp_tree.transactions().len(), grocery_transactions().len());
        for transaction in fp_tree.transactions() {
            let distinct: HashSet<_> = transaction.iter().collect();
            assert_eq!(distinct.len(), transaction.len());

            let ranks: Vec<usize> = transaction.iter().map(|item| header.rank(item).unwrap()).collect();
            assert!(ranks.windows(2).all(|pair| pair[0] < pair[1]));
        }
    }

    #[test]
    fn test_root_children_cover_non_empty_transactions() {
        let fp_tree = fitted(2);
        let tree = fp_tree.tree().unwrap();

        let root_total: usize = tree.children(tree.root()).map(|node| node.count).sum();
        let non_empty = fp_tree.transactions().iter().filter(|t| !t.is_empty()).count();
        assert_eq!(root_total, non_empty);
    }

    #[test]
    fn test_chain_counts_match_item_frequencies() {
        let fp_tree = fitted(2);
        let tree = fp_tree.tree().unwrap();

        for (item, frequency) in fp_tree.item_frequencies().iter() {
            let chain = fp_tree.header_table().chain(item);
            assert!(chain.iter().all(|&idx| tree.node(idx).item.as_ref() == Some(item)));

            let total: usize = chain.iter().map(|&idx| tree.node(idx).count).sum();
            assert_eq!(total, frequency);
        }
    }
}

#[cfg(test)]
mod pattern_tests {
    use super::*;

    #[test]
    fn test_singletons_match_item_frequencies() {
        let fp_tree = fitted(2);
        let patterns = fp_tree.frequent_patterns();

        for (item, frequency) in fp_tree.item_frequencies().iter() {
            assert_eq!(patterns.get(&[*item]), Some(frequency));
        }
        assert_eq!(patterns.of_len(1).count(), fp_tree.item_frequencies().len());
    }

    #[test]
    fn test_patterns_start_with_item_and_respect_bases() {
        let fp_tree = fitted(2);

        for (pattern, frequency) in fp_tree.frequent_patterns().of_len(2) {
            let base = fp_tree.conditional_pattern_base(&pattern[0]).unwrap();
            assert_eq!(base.get(&pattern[1]), Some(frequency));
            assert!(frequency >= 2);
        }
    }

    #[test]
    fn test_refitting_fresh_instances_is_deterministic() {
        let first = fitted(2);
        let second = fitted(2);

        assert_eq!(first.transactions(), second.transactions());
        assert_eq!(first.frequent_patterns(), second.frequent_patterns());
        let first_items: Vec<_> = first.item_frequencies().iter().collect();
        let second_items: Vec<_> = second.item_frequencies().iter().collect();
        assert_eq!(first_items, second_items);
    }

    #[test]
    fn test_mine_patterns_matches_fit() {
        init_logger();
        let patterns = mine_patterns(grocery_transactions(), 2).unwrap();
        assert_eq!(&patterns, fitted(2).frequent_patterns());

        let map = patterns.into_map();
        assert_eq!(map.get(&vec!["beer"]), Some(&3));
    }

    #[test]
    fn test_parallel_config() {
        init_logger();
        let mut fp_tree = FPTree::with_config(TreeConfig::new(2).with_parallel(true)).unwrap();
        fp_tree.fit(grocery_transactions());

        assert!(fp_tree.config().parallel);
        assert_eq!(fp_tree.frequent_patterns(), fitted(2).frequent_patterns());
    }
}
