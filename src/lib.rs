//! Frequent pattern mining with an FP-tree.
//!
//! Transactions are reduced to their frequent items, compacted into a prefix
//! tree, and patterns are read back from per-item conditional pattern bases.
//!
//! ```
//! use fptree::FPTree;
//!
//! let mut fp_tree = FPTree::new(2).unwrap();
//! fp_tree.fit(vec![vec!["a", "b"], vec!["a", "b", "c"], vec!["a"]]);
//!
//! assert_eq!(fp_tree.item_frequencies().get(&"a"), Some(3));
//! assert_eq!(fp_tree.frequent_patterns().get(&["b", "a"]), Some(2));
//! ```

pub mod config;
pub mod error;
pub mod fp;

pub use config::TreeConfig;
pub use error::FpError;
pub use fp::{
    mine_patterns, transactions_from_dense, ConditionalPatternBase, FPNode, FPTree,
    FrequencyTable, HeaderEntry, HeaderTable, Item, NodeId, PatternTable, PrefixTree,
};
