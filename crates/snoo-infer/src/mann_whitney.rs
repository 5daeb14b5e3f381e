//! Mann-Whitney U test for two independent samples
//!
//! Two-sided, using the normal approximation with tie correction and
//! continuity correction. The returned statistic is U of the first sample,
//! so `u(x, y) + u(y, x) == n1 * n2`.

use snoo_core::math::reject_nonfinite;
use snoo_core::{Error, Result};
use statrs::distribution::{ContinuousCDF, Normal};

use crate::types::ALPHA;
use crate::Significance;

/// Outcome of a Mann-Whitney U test.
#[derive(Debug, Clone, Copy)]
pub struct MannWhitneyResult {
    /// U statistic of the first sample
    pub statistic: f64,
    /// Two-sided p-value
    pub p_value: f64,
}

impl MannWhitneyResult {
    pub fn significance(&self) -> Significance {
        Significance::from_p_value(self.p_value, ALPHA)
    }
}

/// Assign 1-based average ranks to the combined sample and accumulate the
/// tie term `sum(t^3 - t)` over tie groups.
fn average_ranks(values: &[f64]) -> (Vec<f64>, f64) {
    let n = values.len();
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| {
        values[a]
            .partial_cmp(&values[b])
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut ranks = vec![0.0; n];
    let mut tie_term = 0.0;
    let mut i = 0;
    while i < n {
        let mut j = i + 1;
        while j < n && values[order[j]] == values[order[i]] {
            j += 1;
        }
        // ranks i+1 ..= j averaged over the tie group
        let avg = (i + 1 + j) as f64 / 2.0;
        for &idx in &order[i..j] {
            ranks[idx] = avg;
        }
        let t = (j - i) as f64;
        tie_term += t * t * t - t;
        i = j;
    }
    (ranks, tie_term)
}

/// Two-sided Mann-Whitney U test of `x` against `y`.
pub fn mann_whitney_u(x: &[f64], y: &[f64]) -> Result<MannWhitneyResult> {
    if x.is_empty() || y.is_empty() {
        return Err(Error::empty_input());
    }
    reject_nonfinite(x, "first sample")?;
    reject_nonfinite(y, "second sample")?;

    let n1 = x.len() as f64;
    let n2 = y.len() as f64;
    let n = n1 + n2;

    let mut combined = Vec::with_capacity(x.len() + y.len());
    combined.extend_from_slice(x);
    combined.extend_from_slice(y);
    let (ranks, tie_term) = average_ranks(&combined);

    let r1: f64 = ranks[..x.len()].iter().sum();
    let u1 = r1 - n1 * (n1 + 1.0) / 2.0;

    let mean_u = n1 * n2 / 2.0;
    let variance = n1 * n2 / 12.0 * ((n + 1.0) - tie_term / (n * (n - 1.0)));
    if variance <= 0.0 {
        return Err(Error::Computation(
            "all values identical, U distribution is degenerate".to_string(),
        ));
    }

    // Continuity correction pulls the numerator half a rank toward zero.
    let mut numerator = u1 - mean_u;
    if numerator > 0.0 {
        numerator -= 0.5;
    } else if numerator < 0.0 {
        numerator += 0.5;
    }
    let z = numerator / variance.sqrt();

    let normal = Normal::new(0.0, 1.0)
        .map_err(|e| Error::Computation(format!("normal distribution: {e}")))?;
    let p_value = (2.0 * (1.0 - normal.cdf(z.abs()))).clamp(0.0, 1.0);

    Ok(MannWhitneyResult {
        statistic: u1,
        p_value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_fully_separated_samples() {
        let x: Vec<f64> = (1..=20).map(f64::from).collect();
        let y: Vec<f64> = (21..=40).map(f64::from).collect();
        let result = mann_whitney_u(&x, &y).unwrap();
        assert_abs_diff_eq!(result.statistic, 0.0);
        assert!(result.p_value < 1e-6);
        assert!(result.significance().is_significant());
    }

    #[test]
    fn test_statistics_are_complementary() {
        let x = [1.0, 4.0, 2.0, 9.0];
        let y = [3.0, 5.0, 8.0, 7.0, 6.0];
        let fwd = mann_whitney_u(&x, &y).unwrap();
        let rev = mann_whitney_u(&y, &x).unwrap();
        assert_abs_diff_eq!(fwd.statistic + rev.statistic, 4.0 * 5.0);
        assert_abs_diff_eq!(fwd.p_value, rev.p_value, epsilon = 1e-12);
    }

    #[test]
    fn test_spec_fixture_value() {
        // high = [6], low = [2, 3, 4, 5]: U = 4, z = 1.5 / sqrt(2)
        let result = mann_whitney_u(&[6.0], &[2.0, 3.0, 4.0, 5.0]).unwrap();
        assert_abs_diff_eq!(result.statistic, 4.0);
        assert_abs_diff_eq!(result.p_value, 0.289, epsilon = 5e-3);
        assert!(!result.significance().is_significant());
    }

    #[test]
    fn test_ties_shrink_variance_but_stay_finite() {
        let x = [1.0, 2.0, 2.0, 3.0];
        let y = [2.0, 2.0, 4.0, 5.0];
        let result = mann_whitney_u(&x, &y).unwrap();
        assert!(result.p_value > 0.0 && result.p_value <= 1.0);
    }

    #[test]
    fn test_degenerate_input_rejected() {
        assert!(mann_whitney_u(&[1.0, 1.0], &[1.0, 1.0]).is_err());
        assert!(mann_whitney_u(&[], &[1.0]).is_err());
    }
}
