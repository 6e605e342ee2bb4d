use super::storage::FrequentItemsets;
use super::transactions::{Item, Itemset};

/// Emits every `k`-combination of `path` joined with `alpha`. Counts along a
/// tree path never increase, so a combination's support is the count of its
/// deepest node.
pub fn generate_combinations_from_path<I: Item>(
    path: &[(I, u64)],
    k: usize,
    alpha: &Itemset<I>,
    result: &mut FrequentItemsets<I>,
) {
    if k == 0 || k > path.len() {
        return;
    }

    let indices: Vec<usize> = (0..path.len()).collect();
    let mut callback = |combination: &[usize]| {
        let mut pattern = alpha.clone();
        let mut support = u64::MAX;
        for &idx in combination {
            let (item, count) = &path[idx];
            pattern = pattern.with(item.clone());
            support = support.min(*count);
        }
        result.push(&pattern, support);
    };
    generate_combinations_recursive(&indices, k, 0, &mut Vec::new(), &mut callback);
}

fn generate_combinations_recursive<F>(
    items: &[usize],
    k: usize,
    start: usize,
    current: &mut Vec<usize>,
    callback: &mut F,
) where
    F: FnMut(&[usize]),
{
    if current.len() == k {
        callback(current);
        return;
    }

    for i in start..items.len() {
        current.push(items[i]);
        generate_combinations_recursive(items, k, i + 1, current, callback);
        current.pop();
    }
}
