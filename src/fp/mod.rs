pub mod builder;
pub mod combinations;
pub mod dense;
pub mod fp_tree;
pub mod header;
pub mod mining;
pub mod storage;
pub mod tree;


pub use dense::transactions_from_dense;
pub use fp_tree::{mine_patterns, FPTree};
pub use header::{FrequencyTable, HeaderEntry, HeaderTable};
pub use storage::{ConditionalPatternBase, PatternTable};
pub use tree::{FPNode, Item, NodeId, PrefixTree};
