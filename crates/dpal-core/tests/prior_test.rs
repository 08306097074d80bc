use dpal_core::types::Prior;
use proptest::prelude::*;

#[test]
fn equal_weights_normalize_to_half() {
    let prior = Prior::normalized([("a", 2.0), ("b", 2.0)]).unwrap();
    let weights = prior.weights().unwrap();
    assert_eq!(weights.len(), 2);
    assert!((weights["a"] - 0.5).abs() < 1e-12);
    assert!((weights["b"] - 0.5).abs() < 1e-12);
}

proptest! {
    #[test]
    fn normalized_weights_sum_to_one(
        weights in prop::collection::vec(0.001f64..1000.0, 1..20),
    ) {
        let pairs = weights
            .iter()
            .enumerate()
            .map(|(i, w)| (format!("cat{i}"), *w));
        let prior = Prior::normalized(pairs).unwrap();
        let total: f64 = prior.weights().unwrap().values().sum();
        prop_assert!((total - 1.0).abs() < 1e-9);
    }
}
