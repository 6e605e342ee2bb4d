use super::transactions::{Item, TransactionMultiset};
use super::tree::{FPTree, HeaderTable};
use crate::error::{MiningError, Result};
use std::collections::HashMap;
use tracing::debug;

/// Weighted support of every item in `transactions`. Supports saturate; a
/// validated multiset never reaches the bound.
pub fn count_items<I: Item>(transactions: &TransactionMultiset<I>) -> HashMap<I, u64> {
    let mut item_counts: HashMap<I, u64> = HashMap::new();

    for (items, count) in transactions.iter() {
        for item in items {
            let support = item_counts.entry(item.clone()).or_insert(0);
            *support = support.saturating_add(count);
        }
    }
    item_counts
}

/// Builds the FP-tree and header table of `transactions`.
///
/// Returns `Ok(None)` when no item reaches `min_support`. Input is validated
/// before anything is built.
pub fn build_fp_tree<I: Item>(
    transactions: &TransactionMultiset<I>,
    min_support: u64,
) -> Result<Option<(FPTree<I>, HeaderTable<I>)>> {
    if min_support == 0 {
        return Err(MiningError::ZeroMinSupport);
    }
    transactions.validate()?;

    let built = build_conditional_fp_tree(transactions, min_support);
    if let Some((tree, header)) = &built {
        debug!(
            transactions = transactions.len(),
            frequent_items = header.len(),
            nodes = tree.node_count(),
            "built fp-tree"
        );
    }
    Ok(built)
}

/// The two construction passes without validation. Conditional pattern
/// bases are non-empty and positively weighted by construction.
pub(crate) fn build_conditional_fp_tree<I: Item>(
    transactions: &TransactionMultiset<I>,
    min_support: u64,
) -> Option<(FPTree<I>, HeaderTable<I>)> {
    let mut item_counts = count_items(transactions);
    item_counts.retain(|_, &mut count| count >= min_support);
    if item_counts.is_empty() {
        return None;
    }

    let mut header = HeaderTable::with_supports(item_counts);
    let mut tree = FPTree::new();

    for (items, count) in transactions.iter() {
        let ordered = header.insertion_order(items);
        if !ordered.is_empty() {
            tree.insert_transaction(&mut header, &ordered, count);
        }
    }

    Some((tree, header))
}
