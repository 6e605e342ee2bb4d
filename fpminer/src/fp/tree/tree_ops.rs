use super::tree::{FPTree, NodeIndex};
use crate::fp::transactions::{Item, Itemset, TransactionMultiset};
use std::fmt;

/// Walks a same-item chain from its head.
pub struct SameItemChain<'a, I> {
    tree: &'a FPTree<I>,
    next: Option<NodeIndex>,
}

impl<I> Iterator for SameItemChain<'_, I> {
    type Item = NodeIndex;

    fn next(&mut self) -> Option<NodeIndex> {
        let current = self.next?;
        self.next = self.tree.nodes[current].next_same;
        Some(current)
    }
}

impl<I: Item> FPTree<I> {
    pub fn same_item_chain(&self, head: Option<NodeIndex>) -> SameItemChain<'_, I> {
        SameItemChain { tree: self, next: head }
    }

    /// Items on the path from `index` up to the root, excluding both ends.
    pub fn ancestor_items(&self, index: NodeIndex) -> Vec<I> {
        let mut path = Vec::new();
        let mut current = self.nodes[index].parent;

        while let Some(i) = current {
            if let Some(item) = &self.nodes[i].item {
                path.push(item.clone());
            }
            current = self.nodes[i].parent;
        }
        path
    }

    /// Conditional pattern base of `item`: the ancestor set of every
    /// occurrence reachable from `head`, weighted by the occurrence's count.
    /// Occurrences with identical ancestor sets add up.
    pub fn prefix_paths(&self, item: &I, head: Option<NodeIndex>) -> TransactionMultiset<I> {
        let mut base = TransactionMultiset::new();

        for index in self.same_item_chain(head) {
            let node = &self.nodes[index];
            debug_assert_eq!(node.item.as_ref(), Some(item));

            let path = self.ancestor_items(index);
            if !path.is_empty() {
                base.add(Itemset::new(path), node.count);
            }
        }
        base
    }

    pub fn has_single_path(&self) -> bool {
        let mut current_index = self.root_index;

        loop {
            let current_node = &self.nodes[current_index];
            let mut children = current_node.children.values();

            match (children.next(), children.next()) {
                (None, _) => return true,
                (Some(&child), None) => current_index = child,
                (Some(_), Some(_)) => return false,
            }
        }
    }

    /// Items and counts from the root down along first children. Only
    /// meaningful when [`FPTree::has_single_path`] holds.
    pub fn single_path(&self) -> Vec<(I, u64)> {
        let mut path = Vec::new();
        let mut current_index = self.root_index;

        while let Some(&child_index) = self.nodes[current_index].children.values().next() {
            let child_node = &self.nodes[child_index];
            if let Some(item) = &child_node.item {
                path.push((item.clone(), child_node.count));
            }
            current_index = child_index;
        }
        path
    }

    /// Sum of the counts of the root's children, i.e. the total weight of
    /// transactions that kept at least one frequent item.
    pub fn root_children_count(&self) -> u64 {
        self.root()
            .children
            .values()
            .map(|&idx| self.nodes[idx].count)
            .sum()
    }

    fn fmt_subtree(&self, f: &mut fmt::Formatter<'_>, index: NodeIndex, depth: usize) -> fmt::Result {
        let node = &self.nodes[index];
        match &node.item {
            Some(item) => writeln!(f, "{:indent$}{:?} {}", "", item, node.count, indent = depth * 2)?,
            None => writeln!(f, "{:indent$}<root> {}", "", self.root_children_count(), indent = depth * 2)?,
        }

        let mut children: Vec<(&I, &NodeIndex)> = node.children.iter().collect();
        children.sort_unstable_by(|a, b| a.0.cmp(b.0));
        for (_, &child) in children {
            self.fmt_subtree(f, child, depth + 1)?;
        }
        Ok(())
    }
}

impl<I: Item> fmt::Display for FPTree<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_subtree(f, self.root_index, 0)
    }
}
