// Tree module - arena nodes and prefix-tree operations

mod tree;
mod tree_ops;

pub use tree::{FPNode, Item, NodeId, PrefixTree};
pub use tree_ops::Ancestors;
