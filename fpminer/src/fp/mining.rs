use super::builder::{build_conditional_fp_tree, build_fp_tree};
use super::combinations::generate_combinations_from_path;
use super::storage::FrequentItemsets;
use super::transactions::{Item, Itemset, TransactionMultiset};
use super::tree::{FPTree, HeaderEntry, HeaderTable};
use crate::config::MiningConfig;
use crate::error::Result;
use rayon::prelude::*;
use tracing::{debug, debug_span, trace};

#[derive(Debug, Clone, Copy)]
struct GrowthParams {
    min_support: u64,
    max_len: Option<usize>,
    parallel: bool,
    single_path_shortcut: bool,
}

impl GrowthParams {
    fn plain(min_support: u64) -> Self {
        Self {
            min_support,
            max_len: None,
            parallel: false,
            single_path_shortcut: false,
        }
    }

    fn allows(&self, len: usize) -> bool {
        self.max_len.is_none_or(|max_len| len <= max_len)
    }
}

/// Appends to `output` every frequent itemset of `tree` extended by `prefix`.
///
/// Items are visited ascending by support, ties by item; each one is emitted,
/// then its conditional tree is built and mined with the extended prefix.
pub fn mine<I: Item>(
    tree: &FPTree<I>,
    header: &HeaderTable<I>,
    min_support: u64,
    prefix: &Itemset<I>,
    output: &mut Vec<Itemset<I>>,
) {
    let mut found = FrequentItemsets::new();
    fp_growth_recursive(tree, header, &GrowthParams::plain(min_support), prefix, &mut found);
    output.extend(found.into_itemsets());
}

/// Builds the tree of `transactions` once and mines it from an empty prefix.
pub fn mine_frequent_itemsets<I: Item>(
    transactions: &TransactionMultiset<I>,
    min_support: u64,
) -> Result<Vec<Itemset<I>>> {
    let mut output = Vec::new();
    if let Some((tree, header)) = build_fp_tree(transactions, min_support)? {
        mine(&tree, &header, min_support, &Itemset::empty(), &mut output);
    }
    Ok(output)
}

/// FP-Growth with the options of a [`MiningConfig`].
#[derive(Debug, Clone, Default)]
pub struct FpGrowth {
    config: MiningConfig,
}

impl FpGrowth {
    pub fn new(config: MiningConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MiningConfig {
        &self.config
    }

    pub fn mine<I: Item>(&self, transactions: &TransactionMultiset<I>) -> Result<FrequentItemsets<I>> {
        self.config.validate()?;
        let min_support = self
            .config
            .min_support
            .resolve(transactions.total_multiplicity())?;

        let _span = debug_span!("fp_growth", min_support).entered();
        let mut found = FrequentItemsets::new();

        if let Some((tree, header)) = build_fp_tree(transactions, min_support)? {
            let params = GrowthParams {
                min_support,
                max_len: self.config.max_len,
                parallel: self.config.parallel,
                single_path_shortcut: self.config.single_path_shortcut,
            };
            fp_growth_recursive(&tree, &header, &params, &Itemset::empty(), &mut found);
        }

        debug!(itemsets = found.len(), "mining finished");
        Ok(found)
    }
}

fn fp_growth_recursive<I: Item>(
    tree: &FPTree<I>,
    header: &HeaderTable<I>,
    params: &GrowthParams,
    prefix: &Itemset<I>,
    result: &mut FrequentItemsets<I>,
) {
    if params.single_path_shortcut && tree.has_single_path() {
        let path = tree.single_path();
        let longest = params
            .max_len
            .map_or(path.len(), |max_len| max_len.saturating_sub(prefix.len()).min(path.len()));
        for k in 1..=longest {
            generate_combinations_from_path(&path, k, prefix, result);
        }
        return;
    }

    let order = header.mining_order();

    if params.parallel {
        let branches: Vec<FrequentItemsets<I>> = order
            .par_iter()
            .map(|(item, entry)| {
                let mut branch = FrequentItemsets::new();
                grow_item(tree, params, prefix, item, entry, &mut branch);
                branch
            })
            .collect();

        for branch in branches {
            result.extend(branch);
        }
    } else {
        for (item, entry) in &order {
            grow_item(tree, params, prefix, item, entry, result);
        }
    }
}

fn grow_item<I: Item>(
    tree: &FPTree<I>,
    params: &GrowthParams,
    prefix: &Itemset<I>,
    item: &I,
    entry: &HeaderEntry,
    result: &mut FrequentItemsets<I>,
) {
    let new_pattern = prefix.with(item.clone());
    if !params.allows(new_pattern.len()) {
        return;
    }
    result.push(&new_pattern, entry.support);

    if !params.allows(new_pattern.len() + 1) {
        return;
    }

    let prefix_paths = tree.prefix_paths(item, entry.head);
    if prefix_paths.is_empty() {
        trace!(pattern = ?new_pattern.as_slice(), "empty conditional pattern base");
        return;
    }

    if let Some((cond_tree, cond_header)) = build_conditional_fp_tree(&prefix_paths, params.min_support) {
        trace!(
            pattern = ?new_pattern.as_slice(),
            frequent_items = cond_header.len(),
            "conditional tree:\n{}",
            cond_tree
        );
        fp_growth_recursive(&cond_tree, &cond_header, params, &new_pattern, result);
    }
}
