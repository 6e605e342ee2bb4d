// Tree module - FP-Tree arena, header table and traversal operations

mod tree;
mod tree_ops;

pub use tree::{FPNode, FPTree, HeaderEntry, HeaderTable, NodeIndex};
pub use tree_ops::SameItemChain;
