//! FP-Growth frequent itemset mining.
//!
//! Transactions are weighted sets of items collected in a
//! [`TransactionMultiset`]. The builder compresses them into an [`FPTree`]
//! whose paths share prefixes, ordered by descending item support, and a
//! [`HeaderTable`] that chains together every node of the same item. The miner
//! then walks the items from least to most frequent, derives each item's
//! conditional pattern base from its chain, builds a smaller tree from it and
//! recurses, emitting every itemset that reaches the minimum support.
//!
//! ```
//! use fpminer::{TransactionMultiset, mine_frequent_itemsets};
//!
//! let transactions = TransactionMultiset::from_transactions(vec![
//!     vec!["bread", "milk"],
//!     vec!["bread", "butter"],
//!     vec!["bread", "milk", "butter"],
//! ]);
//! let itemsets = mine_frequent_itemsets(&transactions, 2).unwrap();
//!
//! assert_eq!(itemsets.len(), 5);
//! assert!(itemsets.iter().any(|set| set.as_slice() == ["bread", "milk"]));
//! ```
//!
//! [`FpGrowth`] adds relative thresholds, a maximum itemset length, parallel
//! mining of sibling items and the single-path shortcut.

pub mod config;
pub mod error;
pub mod fp;

pub use config::{MinSupport, MiningConfig};
pub use error::{MiningError, Result};
pub use fp::{
    FPNode, FPTree, FpGrowth, FrequentItemset, FrequentItemsets, FrequentLevel, HeaderEntry, HeaderTable, Item,
    Itemset, NodeIndex, TransactionMultiset, build_fp_tree, mine, mine_frequent_itemsets,
};

/// Builds the FP-tree and header table of `transactions`, or `None` when no
/// item reaches `min_support`.
pub fn build_tree<I: Item>(
    transactions: &TransactionMultiset<I>,
    min_support: u64,
) -> Result<Option<(FPTree<I>, HeaderTable<I>)>> {
    build_fp_tree(transactions, min_support)
}
