use dpal_core::traits::FixedConcentration;
use dpal_core::types::{CategoryCounts, Likelihoods, Prior};
use dpal_pool::strategies::{dirichlet, entropy};
use dpal_pool::{Pool, Strategy as Selection};
use proptest::prelude::*;
use test_fixtures::TableClassifier;

const CATEGORIES: [&str; 3] = ["a", "b", "c"];

fn arb_likelihoods() -> impl Strategy<Value = (Vec<f64>, f64)> {
    (prop::collection::vec(0.0f64..1.0, 3), 0.0f64..1.0)
}

fn arb_strategy() -> impl Strategy<Value = Selection> {
    (0..Selection::ALL.len()).prop_map(|i| Selection::ALL[i])
}

fn build_pool(rows: &[(Vec<f64>, f64)], seed: u64) -> Pool<String> {
    let mut classifier = TableClassifier::new()
        .category("a", 2.0)
        .category("b", 1.0)
        .category("c", 5.0);
    let mut pool = Pool::with_seed(FixedConcentration::new(1.5), seed);
    for (i, (known, unseen)) in rows.iter().enumerate() {
        let name = format!("s{i}");
        let pairs: Vec<(&str, f64)> = CATEGORIES
            .iter()
            .copied()
            .zip(known.iter().copied())
            .collect();
        classifier = classifier.sample_with(&name, &pairs, *unseen);
        pool.store(name, Some(format!("id{}", i % 2)));
    }
    pool.update(&classifier, true).unwrap();
    pool
}

proptest! {
    // Every selection removes exactly one entity, and nothing is lost or duplicated.
    #[test]
    fn size_and_partition_invariants(
        rows in prop::collection::vec(arb_likelihoods(), 1..12),
        strategies in prop::collection::vec(arb_strategy(), 1..12),
        seed in any::<u64>(),
    ) {
        let mut pool = build_pool(&rows, seed);
        let mut before: Vec<String> = pool.data().iter().map(|e| e.sample.clone()).collect();
        let mut selected = Vec::new();

        for strategy in strategies {
            if pool.is_empty() {
                break;
            }
            let size = pool.size();
            let picked = pool.select_strategy(strategy).unwrap();
            prop_assert_eq!(pool.size(), size - 1);
            prop_assert!(pool.data().iter().all(|e| e.sample != picked.sample));
            selected.push(picked.sample);
        }

        let mut after: Vec<String> = pool.data().iter().map(|e| e.sample.clone()).collect();
        after.extend(selected);
        before.sort();
        after.sort();
        prop_assert_eq!(before, after);
    }

    #[test]
    fn entropy_bounded_by_ln_k(known in prop::collection::vec(0.0f64..1.0, 1..8)) {
        let k = known.len();
        let pairs = known.iter().enumerate().map(|(i, p)| (format!("c{i}"), *p));
        let l = Likelihoods::from_pairs(pairs, 0.0);
        if let Some(h) = entropy::entropy(&l, &Prior::Uniform, 1e-6) {
            prop_assert!(h >= 0.0);
            prop_assert!(h <= (k as f64).ln() + 1e-9);
        }
    }

    #[test]
    fn zero_concentration_has_no_new_mass(
        (known, unseen) in arb_likelihoods(),
    ) {
        let l = Likelihoods::from_pairs(CATEGORIES.iter().copied().zip(known), unseen);
        let counts: CategoryCounts = CATEGORIES.iter().map(|c| (*c, 1.0)).collect();
        prop_assert_eq!(dirichlet::p_new(&l, &counts, 0.0), 0.0);
    }

    #[test]
    fn deterministic_strategies_are_reproducible(
        rows in prop::collection::vec(arb_likelihoods(), 1..10),
    ) {
        for strategy in [
            Selection::Outlier,
            Selection::Entropy,
            Selection::PNewHard,
            Selection::PWrongHardPcat,
        ] {
            let mut a = build_pool(&rows, 1);
            let mut b = build_pool(&rows, 2);
            prop_assert_eq!(
                a.select_strategy(strategy).unwrap().sample,
                b.select_strategy(strategy).unwrap().sample
            );
        }
    }
}
