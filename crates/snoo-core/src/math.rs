//! Descriptive statistics and transforms over `f64` columns
//!
//! Everything here is f64-only and deterministic. Non-finite input is
//! rejected rather than silently propagated, so every downstream test
//! statistic is well defined.

use crate::error::{Error, Result};

/// Reject NaN / Inf inputs before any statistic is computed.
#[inline]
pub fn reject_nonfinite(xs: &[f64], name: &str) -> Result<()> {
    if xs.iter().any(|v| !v.is_finite()) {
        Err(Error::non_finite(name))
    } else {
        Ok(())
    }
}

/// Arithmetic mean.
pub fn mean(xs: &[f64]) -> Result<f64> {
    if xs.is_empty() {
        return Err(Error::empty_input());
    }
    reject_nonfinite(xs, "mean input")?;
    Ok(xs.iter().sum::<f64>() / xs.len() as f64)
}

/// Sample variance (ddof = 1).
pub fn sample_variance(xs: &[f64]) -> Result<f64> {
    if xs.len() < 2 {
        return Err(Error::InsufficientData {
            expected: 2,
            actual: xs.len(),
        });
    }
    reject_nonfinite(xs, "variance input")?;
    let m = xs.iter().sum::<f64>() / xs.len() as f64;
    let ss: f64 = xs.iter().map(|&v| (v - m) * (v - m)).sum();
    Ok(ss / (xs.len() - 1) as f64)
}

/// Sample standard deviation (ddof = 1).
pub fn sample_std(xs: &[f64]) -> Result<f64> {
    Ok(sample_variance(xs)?.sqrt())
}

/// Biased central moment of order `k`, with the mean precomputed by the caller.
pub fn central_moment(xs: &[f64], mean: f64, k: u32) -> f64 {
    let s: f64 = xs.iter().map(|&v| (v - mean).powi(k as i32)).sum();
    s / xs.len() as f64
}

/// Median: the average of the two middle order statistics for even n.
pub fn median(xs: &[f64]) -> Result<f64> {
    quantile(xs, 0.5)
}

/// Quantile with linear interpolation between order statistics.
///
/// Matches the "linear" interpolation convention: the quantile sits at
/// position `(n - 1) * p` in the sorted sample.
pub fn quantile(xs: &[f64], p: f64) -> Result<f64> {
    if xs.is_empty() {
        return Err(Error::empty_input());
    }
    if !(0.0..=1.0).contains(&p) {
        return Err(Error::invalid_probability(p));
    }
    reject_nonfinite(xs, "quantile input")?;

    let mut sorted = xs.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let pos = (sorted.len() - 1) as f64 * p;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    if lo == hi {
        return Ok(sorted[lo]);
    }
    let frac = pos - lo as f64;
    Ok(sorted[lo] + (sorted[hi] - sorted[lo]) * frac)
}

/// Element-wise `ln(x + 1)` transform.
pub fn log1p(xs: &[f64]) -> Vec<f64> {
    xs.iter().map(|&v| (v + 1.0).ln()).collect()
}

/// Element-wise square root transform.
pub fn sqrt(xs: &[f64]) -> Vec<f64> {
    xs.iter().map(|&v| v.sqrt()).collect()
}

/// Element-wise square transform.
pub fn square(xs: &[f64]) -> Vec<f64> {
    xs.iter().map(|&v| v * v).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_mean() {
        assert_abs_diff_eq!(mean(&[1.0, 2.0, 3.0, 4.0]).unwrap(), 2.5);
    }

    #[test]
    fn test_mean_empty() {
        assert!(mean(&[]).is_err());
    }

    #[test]
    fn test_mean_rejects_nan() {
        assert!(mean(&[1.0, f64::NAN]).is_err());
    }

    #[test]
    fn test_sample_variance() {
        // Known value: var([1, 2, 3, 4], ddof=1) = 5/3
        assert_abs_diff_eq!(
            sample_variance(&[1.0, 2.0, 3.0, 4.0]).unwrap(),
            5.0 / 3.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_median_odd_even() {
        assert_abs_diff_eq!(median(&[3.0, 1.0, 2.0]).unwrap(), 2.0);
        assert_abs_diff_eq!(median(&[4.0, 1.0, 3.0, 2.0]).unwrap(), 2.5);
    }

    #[test]
    fn test_median_spec_fixture() {
        // Median of the remaining 5 comment counts (1, 1, 2, 2, 3) is 2
        assert_abs_diff_eq!(median(&[1.0, 1.0, 2.0, 2.0, 3.0]).unwrap(), 2.0);
    }

    #[test]
    fn test_quantile_interpolation() {
        let xs: Vec<f64> = (1..=9).map(f64::from).collect();
        assert_abs_diff_eq!(quantile(&xs, 1.0 / 3.0).unwrap(), 11.0 / 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(quantile(&xs, 2.0 / 3.0).unwrap(), 19.0 / 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(quantile(&xs, 0.0).unwrap(), 1.0);
        assert_abs_diff_eq!(quantile(&xs, 1.0).unwrap(), 9.0);
    }

    #[test]
    fn test_quantile_rejects_bad_probability() {
        assert!(quantile(&[1.0], 1.5).is_err());
    }

    #[test]
    fn test_log1p() {
        let out = log1p(&[0.0, std::f64::consts::E - 1.0]);
        assert_abs_diff_eq!(out[0], 0.0);
        assert_abs_diff_eq!(out[1], 1.0, epsilon = 1e-12);
    }
}
