//! Welch's t-test for two independent samples with unequal variances

use snoo_core::math::{mean, reject_nonfinite, sample_variance};
use snoo_core::{Error, Result};
use statrs::distribution::{ContinuousCDF, StudentsT};

use crate::types::ALPHA;
use crate::Significance;

/// Outcome of a Welch's t-test.
#[derive(Debug, Clone, Copy)]
pub struct TTestResult {
    pub statistic: f64,
    /// Two-sided p-value
    pub p_value: f64,
    /// Welch-Satterthwaite degrees of freedom
    pub df: f64,
}

impl TTestResult {
    pub fn significance(&self) -> Significance {
        Significance::from_p_value(self.p_value, ALPHA)
    }
}

/// Two-sided Welch's t-test of `x` against `y`.
pub fn welch_t_test(x: &[f64], y: &[f64]) -> Result<TTestResult> {
    if x.len() < 2 || y.len() < 2 {
        return Err(Error::InsufficientData {
            expected: 2,
            actual: x.len().min(y.len()),
        });
    }
    reject_nonfinite(x, "first sample")?;
    reject_nonfinite(y, "second sample")?;

    let n1 = x.len() as f64;
    let n2 = y.len() as f64;
    let m1 = mean(x)?;
    let m2 = mean(y)?;
    let v1 = sample_variance(x)?;
    let v2 = sample_variance(y)?;

    let se1 = v1 / n1;
    let se2 = v2 / n2;
    let pooled = se1 + se2;
    if pooled <= 0.0 {
        return Err(Error::Computation(
            "both samples are constant, t statistic is undefined".to_string(),
        ));
    }

    let statistic = (m1 - m2) / pooled.sqrt();
    let df = pooled * pooled / (se1 * se1 / (n1 - 1.0) + se2 * se2 / (n2 - 1.0));

    let t_dist = StudentsT::new(0.0, 1.0, df)
        .map_err(|e| Error::Computation(format!("t-distribution: {e}")))?;
    let p_value = (2.0 * (1.0 - t_dist.cdf(statistic.abs()))).clamp(0.0, 1.0);

    Ok(TTestResult {
        statistic,
        p_value,
        df,
    })
}
