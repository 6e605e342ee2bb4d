pub mod builder;
pub mod combinations;
pub mod mining;
pub mod storage;
pub mod transactions;
pub mod tree;


pub use builder::{build_fp_tree, count_items};
pub use mining::{FpGrowth, mine, mine_frequent_itemsets};
pub use storage::{FrequentItemset, FrequentItemsets, FrequentLevel};
pub use transactions::{Item, Itemset, TransactionMultiset};
pub use tree::{FPNode, FPTree, HeaderEntry, HeaderTable, NodeIndex};
