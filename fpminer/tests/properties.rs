use fpminer::{
    FpGrowth, Itemset, MinSupport, MiningConfig, TransactionMultiset, build_tree, mine_frequent_itemsets,
};
use proptest::prelude::*;
use std::collections::{BTreeSet, HashMap};

fn arb_transactions() -> impl Strategy<Value = TransactionMultiset<u8>> {
    prop::collection::vec(
        (prop::collection::btree_set(0u8..6, 1..5), 1u64..4),
        1..9,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .map(|(items, count)| (Itemset::new(items), count))
            .collect()
    })
}

/// Every itemset reaching `min_support`, with its support, found by checking
/// all subsets of the items present.
fn brute_force(transactions: &TransactionMultiset<u8>, min_support: u64) -> HashMap<Itemset<u8>, u64> {
    let items: Vec<u8> = transactions
        .iter()
        .flat_map(|(set, _)| set.iter().copied())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    (1u32..(1 << items.len()))
        .map(|mask| {
            Itemset::new(
                items
                    .iter()
                    .enumerate()
                    .filter(|(bit, _)| mask & (1 << bit) != 0)
                    .map(|(_, &item)| item),
            )
        })
        .map(|set| {
            let support = transactions.support_of(&set);
            (set, support)
        })
        .filter(|&(_, support)| support >= min_support)
        .collect()
}

fn mine_with(config: MiningConfig, transactions: &TransactionMultiset<u8>) -> Vec<(Itemset<u8>, u64)> {
    FpGrowth::new(config)
        .mine(transactions)
        .unwrap()
        .iter()
        .map(|found| (Itemset::new(found.items.iter().copied()), found.support))
        .collect()
}

proptest! {
    #[test]
    fn output_matches_brute_force(transactions in arb_transactions(), min_support in 1u64..6) {
        let expected = brute_force(&transactions, min_support);
        let mined = mine_with(MiningConfig::new(MinSupport::Count(min_support)), &transactions);

        prop_assert_eq!(mined.len(), expected.len(), "duplicate or missing itemsets");
        for (set, support) in &mined {
            prop_assert_eq!(expected.get(set), Some(support), "wrong support for {:?}", set);
        }
    }

    #[test]
    fn every_subset_of_a_frequent_itemset_is_emitted(transactions in arb_transactions(), min_support in 1u64..6) {
        let mined: BTreeSet<Itemset<u8>> = mine_frequent_itemsets(&transactions, min_support)
            .unwrap()
            .into_iter()
            .collect();

        for set in &mined {
            for item in set {
                let rest = Itemset::new(set.iter().copied().filter(|other| other != item));
                if !rest.is_empty() {
                    prop_assert!(mined.contains(&rest), "{:?} missing under {:?}", rest, set);
                }
            }
        }
    }

    #[test]
    fn every_item_is_a_singleton_at_support_one(transactions in arb_transactions()) {
        let mined = mine_frequent_itemsets(&transactions, 1).unwrap();

        for (set, _) in transactions.iter() {
            for &item in set {
                prop_assert!(mined.iter().any(|found| found.as_slice() == [item]));
            }
        }
    }

    #[test]
    fn mining_is_reproducible(transactions in arb_transactions(), min_support in 1u64..4) {
        let first = mine_frequent_itemsets(&transactions, min_support).unwrap();
        let second = mine_frequent_itemsets(&transactions.clone(), min_support).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn parallel_matches_sequential(transactions in arb_transactions(), min_support in 1u64..4) {
        let config = MiningConfig::new(MinSupport::Count(min_support));
        let sequential = mine_with(config.clone(), &transactions);
        let parallel = mine_with(config.with_parallel(true), &transactions);
        prop_assert_eq!(sequential, parallel);
    }

    #[test]
    fn single_path_shortcut_finds_the_same_itemsets(transactions in arb_transactions(), min_support in 1u64..4) {
        let config = MiningConfig::new(MinSupport::Count(min_support));
        let plain: BTreeSet<_> = mine_with(config.clone(), &transactions).into_iter().collect();
        let shortcut: BTreeSet<_> = mine_with(config.with_single_path_shortcut(true), &transactions)
            .into_iter()
            .collect();
        prop_assert_eq!(plain, shortcut);
    }

    #[test]
    fn max_len_filters_by_size(transactions in arb_transactions(), max_len in 1usize..4) {
        let config = MiningConfig::new(MinSupport::Count(1));
        let unlimited: BTreeSet<_> = mine_with(config.clone(), &transactions)
            .into_iter()
            .filter(|(set, _)| set.len() <= max_len)
            .collect();
        let limited: BTreeSet<_> = mine_with(config.with_max_len(max_len), &transactions)
            .into_iter()
            .collect();
        prop_assert_eq!(unlimited, limited);
    }

    #[test]
    fn root_children_hold_all_surviving_weight(transactions in arb_transactions(), min_support in 1u64..6) {
        if let Some((tree, header)) = build_tree(&transactions, min_support).unwrap() {
            let surviving: u64 = transactions
                .iter()
                .filter(|(set, _)| set.iter().any(|item| header.contains(item)))
                .map(|(_, count)| count)
                .sum();
            prop_assert_eq!(tree.root_children_count(), surviving);
        }
    }
}

#[test]
fn nothing_frequent_gives_empty_output() {
    let transactions = TransactionMultiset::from_transactions(vec![vec!["a", "b"], vec!["c"]]);
    assert!(mine_frequent_itemsets(&transactions, 2).unwrap().is_empty());
}

#[test]
fn single_transaction_at_threshold_yields_all_subsets() {
    let mut transactions = TransactionMultiset::new();
    transactions.add(Itemset::new(["a", "b", "c", "d"]), 4);

    let mined = mine_frequent_itemsets(&transactions, 4).unwrap();
    let distinct: BTreeSet<_> = mined.iter().cloned().collect();
    assert_eq!(mined.len(), 15);
    assert_eq!(distinct.len(), 15);
}
