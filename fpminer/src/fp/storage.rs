use super::transactions::{Item, Itemset};

/// Frequent itemsets in emission order, stored in flat arrays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequentItemsets<I> {
    items: Vec<I>,
    offsets: Vec<(usize, usize)>,
    supports: Vec<u64>,
}

/// Borrowed view of one stored itemset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrequentItemset<'a, I> {
    pub items: &'a [I],
    pub support: u64,
}

/// All frequent itemsets of one size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequentLevel<I> {
    pub storage: FrequentItemsets<I>,
    pub itemset_size: usize,
}

impl<I: Item> Default for FrequentItemsets<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: Item> FrequentItemsets<I> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            offsets: Vec::new(),
            supports: Vec::new(),
        }
    }

    pub fn push(&mut self, itemset: &Itemset<I>, support: u64) -> usize {
        let start = self.items.len();
        self.items.extend_from_slice(itemset.as_slice());
        self.offsets.push((start, itemset.len()));
        self.supports.push(support);
        self.offsets.len() - 1
    }

    pub fn get(&self, idx: usize) -> FrequentItemset<'_, I> {
        let (start, len) = self.offsets[idx];
        FrequentItemset {
            items: &self.items[start..start + len],
            support: self.supports[idx],
        }
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = FrequentItemset<'_, I>> {
        (0..self.len()).map(move |idx| self.get(idx))
    }

    /// Appends `other` after the itemsets already stored.
    pub fn extend(&mut self, other: FrequentItemsets<I>) {
        let shift = self.items.len();
        self.items.extend(other.items);
        self.offsets
            .extend(other.offsets.into_iter().map(|(start, len)| (start + shift, len)));
        self.supports.extend(other.supports);
    }

    /// Support recorded for exactly this (sorted) set of items.
    pub fn support_of(&self, items: &[I]) -> Option<u64> {
        self.iter()
            .find(|itemset| itemset.items == items)
            .map(|itemset| itemset.support)
    }

    pub fn into_itemsets(self) -> Vec<Itemset<I>> {
        self.iter()
            .map(|itemset| Itemset::new(itemset.items.iter().cloned()))
            .collect()
    }

    /// Groups the itemsets by size; level `k` sits at index `k - 1`, and
    /// sizes with no itemsets give empty levels.
    pub fn into_levels(self) -> Vec<FrequentLevel<I>> {
        let mut levels: Vec<FrequentLevel<I>> = Vec::new();

        for itemset in self.iter() {
            let size = itemset.items.len();
            if size == 0 {
                continue;
            }
            while levels.len() < size {
                levels.push(FrequentLevel::new(levels.len() + 1));
            }
            levels[size - 1]
                .storage
                .push(&Itemset::new(itemset.items.iter().cloned()), itemset.support);
        }
        levels
    }
}

impl<I: Item> FrequentLevel<I> {
    pub fn new(itemset_size: usize) -> Self {
        Self {
            storage: FrequentItemsets::new(),
            itemset_size,
        }
    }

    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    pub fn iter_itemsets(&self) -> impl Iterator<Item = &[I]> {
        self.storage.iter().map(|itemset| itemset.items)
    }
}
