//! D'Agostino-Pearson omnibus normality test
//!
//! Combines the skewness and kurtosis z-scores into the K² statistic,
//! chi-squared with two degrees of freedom under the null. Needs at least
//! eight observations for the transformed z-scores to be defined.

use snoo_core::math::{central_moment, reject_nonfinite};
use snoo_core::{Error, Result};
use statrs::distribution::{ChiSquared, ContinuousCDF};

use crate::types::NormalityVerdict;

/// Outcome of the omnibus normality test.
#[derive(Debug, Clone, Copy)]
pub struct NormalityResult {
    /// K² statistic
    pub statistic: f64,
    pub p_value: f64,
}

impl NormalityResult {
    pub fn verdict(&self) -> NormalityVerdict {
        NormalityVerdict::from_p_value(self.p_value)
    }
}

const MIN_SAMPLES: usize = 8;

/// z-score of the sample skewness (D'Agostino 1970).
fn skewness_z(xs: &[f64], mean: f64, n: f64) -> Result<f64> {
    let m2 = central_moment(xs, mean, 2);
    let m3 = central_moment(xs, mean, 3);
    if m2 <= 0.0 {
        return Err(Error::Computation(
            "zero variance, skewness is undefined".to_string(),
        ));
    }
    let g1 = m3 / m2.powf(1.5);

    let y = g1 * (((n + 1.0) * (n + 3.0)) / (6.0 * (n - 2.0))).sqrt();
    let beta2 = 3.0 * (n * n + 27.0 * n - 70.0) * (n + 1.0) * (n + 3.0)
        / ((n - 2.0) * (n + 5.0) * (n + 7.0) * (n + 9.0));
    let w2 = -1.0 + (2.0 * (beta2 - 1.0)).sqrt();
    let delta = 1.0 / (0.5 * w2.ln()).sqrt();
    let alpha = (2.0 / (w2 - 1.0)).sqrt();

    Ok(delta * (y / alpha).asinh())
}

/// z-score of the sample kurtosis (Anscombe & Glynn 1983).
fn kurtosis_z(xs: &[f64], mean: f64, n: f64) -> Result<f64> {
    let m2 = central_moment(xs, mean, 2);
    let m4 = central_moment(xs, mean, 4);
    if m2 <= 0.0 {
        return Err(Error::Computation(
            "zero variance, kurtosis is undefined".to_string(),
        ));
    }
    let b2 = m4 / (m2 * m2);

    let expected = 3.0 * (n - 1.0) / (n + 1.0);
    let variance =
        24.0 * n * (n - 2.0) * (n - 3.0) / ((n + 1.0) * (n + 1.0) * (n + 3.0) * (n + 5.0));
    let x = (b2 - expected) / variance.sqrt();

    let sqrt_beta1 = 6.0 * (n * n - 5.0 * n + 2.0) / ((n + 7.0) * (n + 9.0))
        * ((6.0 * (n + 3.0) * (n + 5.0)) / (n * (n - 2.0) * (n - 3.0))).sqrt();
    let a = 6.0 + 8.0 / sqrt_beta1 * (2.0 / sqrt_beta1 + (1.0 + 4.0 / (sqrt_beta1 * sqrt_beta1)).sqrt());

    let term1 = 1.0 - 2.0 / (9.0 * a);
    let denom = 1.0 + x * (2.0 / (a - 4.0)).sqrt();
    if denom == 0.0 {
        return Err(Error::Computation(
            "kurtosis transform degenerate".to_string(),
        ));
    }
    let term2 = ((1.0 - 2.0 / a) / denom).cbrt();

    Ok((term1 - term2) / (2.0 / (9.0 * a)).sqrt())
}

/// D'Agostino-Pearson K² test for departure from normality.
pub fn normality_test(xs: &[f64]) -> Result<NormalityResult> {
    if xs.len() < MIN_SAMPLES {
        return Err(Error::InsufficientData {
            expected: MIN_SAMPLES,
            actual: xs.len(),
        });
    }
    reject_nonfinite(xs, "normality input")?;

    let n = xs.len() as f64;
    let mean = xs.iter().sum::<f64>() / n;
    let zs = skewness_z(xs, mean, n)?;
    let zk = kurtosis_z(xs, mean, n)?;

    let statistic = zs * zs + zk * zk;
    let chi2 = ChiSquared::new(2.0)
        .map_err(|e| Error::Computation(format!("chi-squared distribution: {e}")))?;
    let p_value = (1.0 - chi2.cdf(statistic)).clamp(0.0, 1.0);

    Ok(NormalityResult { statistic, p_value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use statrs::distribution::Normal;

    /// Probit-spaced sample: the shape of a perfect normal draw without
    /// randomness.
    fn normal_shaped(n: usize) -> Vec<f64> {
        let normal = Normal::new(0.0, 1.0).unwrap();
        (1..=n)
            .map(|i| normal.inverse_cdf((i as f64 - 0.5) / n as f64))
            .collect()
    }

    #[test]
    fn test_normal_shaped_sample_passes() {
        let result = normality_test(&normal_shaped(200)).unwrap();
        assert!(
            result.p_value > 0.05,
            "p = {} for normal-shaped data",
            result.p_value
        );
        assert_eq!(result.verdict(), NormalityVerdict::Normal);
    }

    #[test]
    fn test_heavily_skewed_sample_fails() {
        // Geometric growth: a long right tail no normal sample has
        let xs: Vec<f64> = (1..=100).map(|i| 1.08f64.powi(i)).collect();
        let result = normality_test(&xs).unwrap();
        assert!(result.p_value < 0.05, "p = {}", result.p_value);
        assert_eq!(result.verdict(), NormalityVerdict::NotNormal);
    }

    #[test]
    fn test_too_few_samples_rejected() {
        let xs = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];
        assert!(matches!(
            normality_test(&xs),
            Err(Error::InsufficientData { expected: 8, .. })
        ));
    }

    #[test]
    fn test_constant_sample_rejected() {
        assert!(normality_test(&[3.0; 20]).is_err());
    }
}
