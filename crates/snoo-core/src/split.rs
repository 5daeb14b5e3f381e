//! Group partitioning of a target column by a derived feature
//!
//! Every split is exhaustive and disjoint: each target value lands in
//! exactly one group. Ties at the median threshold go to "low" (`<=`),
//! the convention used by every two-group analysis here. The mean-band
//! split used by the sentiment analysis assigns `>=` mean to "high".

use crate::error::{Error, Result};
use crate::math::{self, reject_nonfinite};

/// Target values partitioned into two groups around a threshold.
#[derive(Debug, Clone)]
pub struct TwoGroupSplit {
    /// Threshold the feature was compared against
    pub threshold: f64,
    /// Target values whose feature exceeded the threshold
    pub high: Vec<f64>,
    /// Target values whose feature did not exceed the threshold
    pub low: Vec<f64>,
}

/// Target values partitioned into three groups by tertile boundaries.
#[derive(Debug, Clone)]
pub struct ThreeGroupSplit {
    /// 33rd percentile of the feature
    pub lower_bound: f64,
    /// 66th percentile of the feature
    pub upper_bound: f64,
    pub low: Vec<f64>,
    pub medium: Vec<f64>,
    pub high: Vec<f64>,
}

fn check_paired(feature: &[f64], target: &[f64]) -> Result<()> {
    if feature.is_empty() {
        return Err(Error::empty_input());
    }
    if feature.len() != target.len() {
        return Err(Error::size_mismatch(
            feature.len(),
            target.len(),
            "feature/target columns",
        ));
    }
    reject_nonfinite(feature, "feature column")?;
    reject_nonfinite(target, "target column")
}

/// Median split: feature values strictly greater than the sample median go
/// to "high", everything else (including ties) to "low".
pub fn median_split(feature: &[f64], target: &[f64]) -> Result<TwoGroupSplit> {
    check_paired(feature, target)?;
    let threshold = math::median(feature)?;
    Ok(split_at(feature, target, threshold, false))
}

/// Mean-band split: feature values at or above the sample mean go to
/// "high". Used where the population is banded around its average rather
/// than its median.
pub fn mean_band_split(feature: &[f64], target: &[f64]) -> Result<TwoGroupSplit> {
    check_paired(feature, target)?;
    let threshold = math::mean(feature)?;
    Ok(split_at(feature, target, threshold, true))
}

fn split_at(feature: &[f64], target: &[f64], threshold: f64, ties_high: bool) -> TwoGroupSplit {
    let mut high = Vec::new();
    let mut low = Vec::new();
    for (&f, &t) in feature.iter().zip(target) {
        let is_high = if ties_high { f >= threshold } else { f > threshold };
        if is_high {
            high.push(t);
        } else {
            low.push(t);
        }
    }
    TwoGroupSplit {
        threshold,
        high,
        low,
    }
}

/// Tertile split on the 33rd/66th percentiles of the feature.
///
/// Bucket assignment follows right-closed quantile bins: `low` up to and
/// including the 33rd percentile, `medium` up to and including the 66th,
/// `high` above it.
pub fn tertile_split(feature: &[f64], target: &[f64]) -> Result<ThreeGroupSplit> {
    check_paired(feature, target)?;
    if feature.len() < 3 {
        return Err(Error::InsufficientData {
            expected: 3,
            actual: feature.len(),
        });
    }

    let lower_bound = math::quantile(feature, 1.0 / 3.0)?;
    let upper_bound = math::quantile(feature, 2.0 / 3.0)?;

    let mut low = Vec::new();
    let mut medium = Vec::new();
    let mut high = Vec::new();
    for (&f, &t) in feature.iter().zip(target) {
        if f <= lower_bound {
            low.push(t);
        } else if f <= upper_bound {
            medium.push(t);
        } else {
            high.push(t);
        }
    }

    Ok(ThreeGroupSplit {
        lower_bound,
        upper_bound,
        low,
        medium,
        high,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_median_split_end_to_end_fixture() {
        // Scores [2,3,4,5,6] with comment counts [1,1,2,2,3] (the row with
        // zero comments already filtered out): median comment count is 2,
        // high group is scores with count > 2, low is the rest.
        let comments = [1.0, 1.0, 2.0, 2.0, 3.0];
        let scores = [2.0, 3.0, 4.0, 5.0, 6.0];
        let split = median_split(&comments, &scores).unwrap();

        assert_abs_diff_eq!(split.threshold, 2.0);
        assert_eq!(split.high, vec![6.0]);
        assert_eq!(split.low, vec![2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn test_median_split_high_size_is_strictly_greater_count() {
        let feature = [1.0, 2.0, 2.0, 3.0, 4.0, 5.0];
        let target = [10.0, 20.0, 30.0, 40.0, 50.0, 60.0];
        let split = median_split(&feature, &target).unwrap();

        let median = 2.5;
        let strictly_greater = feature.iter().filter(|&&f| f > median).count();
        assert_eq!(split.high.len(), strictly_greater);
        assert_eq!(split.high.len() + split.low.len(), feature.len());
    }

    #[test]
    fn test_mean_band_split_ties_go_high() {
        // Mean of [1, 2, 3] is 2; the tied value belongs to "high"
        let split = mean_band_split(&[1.0, 2.0, 3.0], &[10.0, 20.0, 30.0]).unwrap();
        assert_eq!(split.high, vec![20.0, 30.0]);
        assert_eq!(split.low, vec![10.0]);
    }

    #[test]
    fn test_tertile_split_even_thirds() {
        let feature: Vec<f64> = (1..=9).map(f64::from).collect();
        let target = feature.clone();
        let split = tertile_split(&feature, &target).unwrap();

        assert_eq!(split.low, vec![1.0, 2.0, 3.0]);
        assert_eq!(split.medium, vec![4.0, 5.0, 6.0]);
        assert_eq!(split.high, vec![7.0, 8.0, 9.0]);
    }

    #[test]
    fn test_tertile_split_sizes_sum() {
        let feature: Vec<f64> = (0..100).map(f64::from).collect();
        let target = vec![0.0; 100];
        let split = tertile_split(&feature, &target).unwrap();
        let sizes = [split.low.len(), split.medium.len(), split.high.len()];
        assert_eq!(sizes.iter().sum::<usize>(), 100);
        for size in sizes {
            assert!((size as i64 - 33).abs() <= 1, "group size {size} not ~N/3");
        }
    }

    #[test]
    fn test_size_mismatch_rejected() {
        assert!(median_split(&[1.0, 2.0], &[1.0]).is_err());
    }
}
