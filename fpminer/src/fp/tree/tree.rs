use crate::fp::transactions::{Item, Itemset};
use std::cmp::Reverse;
use std::collections::HashMap;

/// Position of a node in the tree's arena.
pub type NodeIndex = usize;

#[derive(Debug, Clone)]
pub struct FPNode<I> {
    /// `None` only for the root sentinel.
    pub item: Option<I>,
    pub count: u64,
    pub parent: Option<NodeIndex>,
    pub children: HashMap<I, NodeIndex>,
    /// Next node elsewhere in the tree carrying the same item.
    pub next_same: Option<NodeIndex>,
}

#[derive(Debug, Clone)]
pub struct FPTree<I> {
    pub nodes: Vec<FPNode<I>>,
    pub root_index: NodeIndex,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderEntry {
    pub support: u64,
    /// First node created for the item, `None` until one exists.
    pub head: Option<NodeIndex>,
}

/// Frequent items of one tree build with their supports and chain heads.
#[derive(Debug, Clone)]
pub struct HeaderTable<I> {
    entries: HashMap<I, HeaderEntry>,
}

impl<I> FPNode<I> {
    pub fn new_root() -> Self {
        Self {
            item: None,
            count: 0,
            parent: None,
            children: HashMap::new(),
            next_same: None,
        }
    }

    pub fn new_item(item: I, count: u64, parent: NodeIndex) -> Self {
        Self {
            item: Some(item),
            count,
            parent: Some(parent),
            children: HashMap::new(),
            next_same: None,
        }
    }
}

impl<I: Item> HeaderTable<I> {
    /// Entries for `supports`, none of them linked to a node yet.
    pub fn with_supports(supports: HashMap<I, u64>) -> Self {
        let entries = supports
            .into_iter()
            .map(|(item, support)| (item, HeaderEntry { support, head: None }))
            .collect();
        Self { entries }
    }

    pub fn get(&self, item: &I) -> Option<&HeaderEntry> {
        self.entries.get(item)
    }

    pub fn support(&self, item: &I) -> Option<u64> {
        self.entries.get(item).map(|entry| entry.support)
    }

    pub fn contains(&self, item: &I) -> bool {
        self.entries.contains_key(item)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&I, &HeaderEntry)> {
        self.entries.iter()
    }

    /// Items ascending by support, ties by item. This is the order the miner
    /// visits them in.
    pub fn mining_order(&self) -> Vec<(I, HeaderEntry)> {
        let mut order: Vec<(I, HeaderEntry)> = self
            .entries
            .iter()
            .map(|(item, &entry)| (item.clone(), entry))
            .collect();
        order.sort_unstable_by(|a, b| a.1.support.cmp(&b.1.support).then_with(|| a.0.cmp(&b.0)));
        order
    }

    /// The frequent items of `transaction` in insertion order: descending
    /// support, ties by item.
    pub fn insertion_order(&self, transaction: &Itemset<I>) -> Vec<I> {
        let mut ranked: Vec<(u64, &I)> = transaction
            .iter()
            .filter_map(|item| self.support(item).map(|support| (support, item)))
            .collect();
        ranked.sort_unstable_by_key(|&(support, item)| (Reverse(support), item));
        ranked.into_iter().map(|(_, item)| item.clone()).collect()
    }

    fn head_mut(&mut self, item: &I) -> Option<&mut Option<NodeIndex>> {
        self.entries.get_mut(item).map(|entry| &mut entry.head)
    }
}

impl<I: Item> Default for FPTree<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: Item> FPTree<I> {
    pub fn new() -> Self {
        Self {
            nodes: vec![FPNode::new_root()],
            root_index: 0,
        }
    }

    pub fn root(&self) -> &FPNode<I> {
        &self.nodes[self.root_index]
    }

    pub fn node(&self, index: NodeIndex) -> &FPNode<I> {
        &self.nodes[index]
    }

    /// Number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Inserts `items`, already in insertion order, with weight
    /// `multiplicity`. New nodes are appended to the tail of their item's
    /// same-item chain in `header`.
    pub fn insert_transaction(&mut self, header: &mut HeaderTable<I>, items: &[I], multiplicity: u64) {
        let mut current_index = self.root_index;

        for item in items {
            if let Some(&child_index) = self.nodes[current_index].children.get(item) {
                let count = &mut self.nodes[child_index].count;
                *count = count.saturating_add(multiplicity);
                current_index = child_index;
            } else {
                let new_index = self.nodes.len();
                self.nodes
                    .push(FPNode::new_item(item.clone(), multiplicity, current_index));
                self.nodes[current_index]
                    .children
                    .insert(item.clone(), new_index);
                self.link_same_item(header, item, new_index);
                current_index = new_index;
            }
        }
    }

    fn link_same_item(&mut self, header: &mut HeaderTable<I>, item: &I, new_index: NodeIndex) {
        let Some(head) = header.head_mut(item) else {
            return;
        };
        let Some(first) = *head else {
            *head = Some(new_index);
            return;
        };

        let mut tail = first;
        while let Some(next) = self.nodes[tail].next_same {
            tail = next;
        }
        self.nodes[tail].next_same = Some(new_index);
    }
}
