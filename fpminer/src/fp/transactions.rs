use crate::error::{MiningError, Result};
use ndarray::ArrayView2;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// Anything usable as an item identifier.
///
/// `Ord` supplies the tie-break between items of equal support, which keeps
/// tree shape and emission order reproducible.
pub trait Item: Clone + Eq + Hash + Ord + Debug + Send + Sync {}

impl<T: Clone + Eq + Hash + Ord + Debug + Send + Sync> Item for T {}

/// Sorted, duplicate-free set of items.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Itemset<I>(Vec<I>);

impl<I: Item> Itemset<I> {
    pub fn new(items: impl IntoIterator<Item = I>) -> Self {
        let mut items: Vec<I> = items.into_iter().collect();
        items.sort_unstable();
        items.dedup();
        Self(items)
    }

    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn as_slice(&self) -> &[I] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, item: &I) -> bool {
        self.0.binary_search(item).is_ok()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, I> {
        self.0.iter()
    }

    /// Every item of `self` is also in `other`.
    pub fn is_subset(&self, other: &Itemset<I>) -> bool {
        self.0.iter().all(|item| other.contains(item))
    }

    /// Copy of `self` with `item` added.
    pub fn with(&self, item: I) -> Self {
        let mut items = self.0.clone();
        if let Err(pos) = items.binary_search(&item) {
            items.insert(pos, item);
        }
        Self(items)
    }

    pub fn into_vec(self) -> Vec<I> {
        self.0
    }
}

impl<I: Item> FromIterator<I> for Itemset<I> {
    fn from_iter<T: IntoIterator<Item = I>>(iter: T) -> Self {
        Self::new(iter)
    }
}

impl<'a, I> IntoIterator for &'a Itemset<I> {
    type Item = &'a I;
    type IntoIter = std::slice::Iter<'a, I>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Distinct transactions with their multiplicities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionMultiset<I: Item> {
    counts: HashMap<Itemset<I>, u64>,
    /// Set when accumulating a multiplicity ran past `u64::MAX`.
    overflowed: bool,
}

impl<I: Item> Default for TransactionMultiset<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: Item> TransactionMultiset<I> {
    pub fn new() -> Self {
        Self {
            counts: HashMap::new(),
            overflowed: false,
        }
    }

    /// One entry per transaction, each counted once. Duplicate items inside a
    /// transaction collapse; identical transactions accumulate.
    pub fn from_transactions<T, It>(transactions: T) -> Self
    where
        T: IntoIterator<Item = It>,
        It: IntoIterator<Item = I>,
    {
        let mut multiset = Self::new();
        for transaction in transactions {
            multiset.add(Itemset::new(transaction), 1);
        }
        multiset
    }

    /// Adds `multiplicity` occurrences of `items`. A count that would exceed
    /// `u64::MAX` saturates and makes [`TransactionMultiset::validate`] fail.
    pub fn add(&mut self, items: Itemset<I>, multiplicity: u64) {
        let count = self.counts.entry(items).or_insert(0);
        match count.checked_add(multiplicity) {
            Some(sum) => *count = sum,
            None => {
                *count = u64::MAX;
                self.overflowed = true;
            }
        }
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn multiplicity(&self, items: &Itemset<I>) -> Option<u64> {
        self.counts.get(items).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Itemset<I>, u64)> {
        self.counts.iter().map(|(items, &count)| (items, count))
    }

    /// Summed multiplicities, saturating at `u64::MAX`.
    pub fn total_multiplicity(&self) -> u64 {
        self.counts
            .values()
            .fold(0u64, |total, &count| total.saturating_add(count))
    }

    /// Weighted number of transactions containing every item of `items`.
    pub fn support_of(&self, items: &Itemset<I>) -> u64 {
        self.iter()
            .filter(|(transaction, _)| items.is_subset(transaction))
            .fold(0u64, |total, (_, count)| total.saturating_add(count))
    }

    /// Checks that every transaction is non-empty and weighted, and that the
    /// total weight fits in `u64`. Every item support and node count derived
    /// from the multiset is bounded by that total.
    pub fn validate(&self) -> Result<()> {
        if self.overflowed {
            return Err(MiningError::SupportOverflow);
        }

        let mut total: u64 = 0;
        for (items, count) in self.iter() {
            if items.is_empty() {
                return Err(MiningError::EmptyTransaction);
            }
            if count == 0 {
                return Err(MiningError::ZeroMultiplicity {
                    transaction: format!("{:?}", items.as_slice()),
                });
            }
            total = total.checked_add(count).ok_or(MiningError::SupportOverflow)?;
        }
        Ok(())
    }
}

impl TransactionMultiset<usize> {
    /// Reads a binary transaction matrix: rows are transactions, columns are
    /// items, any nonzero cell marks the column's item as present. Rows with
    /// no items are skipped.
    pub fn from_dense(transactions: ArrayView2<'_, i32>) -> Self {
        let mut multiset = Self::new();
        for row in transactions.rows() {
            let items: Itemset<usize> = row
                .iter()
                .enumerate()
                .filter(|&(_, &cell)| cell != 0)
                .map(|(item, _)| item)
                .collect();
            if !items.is_empty() {
                multiset.add(items, 1);
            }
        }
        multiset
    }
}

impl<I: Item> FromIterator<(Itemset<I>, u64)> for TransactionMultiset<I> {
    fn from_iter<T: IntoIterator<Item = (Itemset<I>, u64)>>(iter: T) -> Self {
        let mut multiset = Self::new();
        for (items, count) in iter {
            multiset.add(items, count);
        }
        multiset
    }
}
