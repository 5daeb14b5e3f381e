//! Property tests for the partition invariants: splits are exhaustive and
//! disjoint, and group sizes follow the documented tie conventions.

use proptest::prelude::*;
use snoo_core::split::{median_split, tertile_split};

fn finite_column(max_len: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1000.0..1000.0f64, 1..max_len)
}

proptest! {
    #[test]
    fn median_split_recovers_every_row(feature in finite_column(200)) {
        let target: Vec<f64> = (0..feature.len()).map(|i| i as f64).collect();
        let split = median_split(&feature, &target).unwrap();

        // Exhaustive and disjoint: indices were used as targets, so the
        // union of both groups must be a permutation of 0..n.
        let mut seen: Vec<f64> = split.high.iter().chain(&split.low).copied().collect();
        seen.sort_by(|a, b| a.partial_cmp(b).unwrap());
        let expected: Vec<f64> = (0..feature.len()).map(|i| i as f64).collect();
        prop_assert_eq!(seen, expected);

        // "high" holds exactly the strictly-greater-than-median rows.
        let strictly_greater = feature.iter().filter(|&&f| f > split.threshold).count();
        prop_assert_eq!(split.high.len(), strictly_greater);
    }

    #[test]
    fn tertile_split_sizes_are_near_thirds(feature in finite_column(300)) {
        prop_assume!(feature.len() >= 3);

        // Deduplicate-heavy inputs can legitimately skew tertiles, so use
        // distinct feature values to exercise the size contract.
        let mut distinct = feature.clone();
        distinct.sort_by(|a, b| a.partial_cmp(b).unwrap());
        distinct.dedup();
        prop_assume!(distinct.len() >= 3);

        let target = vec![1.0; distinct.len()];
        let split = tertile_split(&distinct, &target).unwrap();

        let n = distinct.len();
        let sizes = [split.low.len(), split.medium.len(), split.high.len()];
        prop_assert_eq!(sizes.iter().sum::<usize>(), n);
        for size in sizes {
            let deviation = (size as i64 - (n / 3) as i64).abs();
            prop_assert!(deviation <= 1, "group size {} too far from {}/3", size, n);
        }
    }
}
