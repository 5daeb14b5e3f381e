//! Simple linear regression of one response on one predictor

use snoo_core::math::reject_nonfinite;
use snoo_core::{Error, Result};
use statrs::distribution::{ContinuousCDF, StudentsT};

use crate::types::ALPHA;
use crate::Significance;

/// Guard against division by zero when the fit is exact.
const TINY: f64 = 1e-20;

/// A fitted least-squares line with its inference statistics.
#[derive(Debug, Clone, Copy)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
    /// Pearson correlation coefficient of x and y
    pub r_value: f64,
    /// Two-sided p-value for the null hypothesis of zero slope
    pub p_value: f64,
    /// Standard error of the slope estimate
    pub stderr: f64,
}

impl LinearFit {
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    pub fn r_squared(&self) -> f64 {
        self.r_value * self.r_value
    }

    pub fn significance(&self) -> Significance {
        Significance::from_p_value(self.p_value, ALPHA)
    }
}

/// Least-squares fit of `y` on `x`.
pub fn linear_regression(x: &[f64], y: &[f64]) -> Result<LinearFit> {
    if x.len() != y.len() {
        return Err(Error::size_mismatch(x.len(), y.len(), "regression columns"));
    }
    if x.len() < 3 {
        return Err(Error::InsufficientData {
            expected: 3,
            actual: x.len(),
        });
    }
    reject_nonfinite(x, "predictor")?;
    reject_nonfinite(y, "response")?;

    let n = x.len() as f64;
    let mx = x.iter().sum::<f64>() / n;
    let my = y.iter().sum::<f64>() / n;

    let mut sxx = 0.0;
    let mut syy = 0.0;
    let mut sxy = 0.0;
    for (&xi, &yi) in x.iter().zip(y) {
        let dx = xi - mx;
        let dy = yi - my;
        sxx += dx * dx;
        syy += dy * dy;
        sxy += dx * dy;
    }
    if sxx <= 0.0 {
        return Err(Error::Computation(
            "constant predictor, slope is undefined".to_string(),
        ));
    }

    let slope = sxy / sxx;
    let intercept = my - slope * mx;
    let df = n - 2.0;

    // Flat response: zero slope by construction, nothing to infer.
    if syy <= 0.0 {
        return Ok(LinearFit {
            slope: 0.0,
            intercept: my,
            r_value: 0.0,
            p_value: 1.0,
            stderr: 0.0,
        });
    }

    let r_value = (sxy / (sxx * syy).sqrt()).clamp(-1.0, 1.0);
    let statistic = r_value * (df / ((1.0 - r_value) * (1.0 + r_value) + TINY)).sqrt();
    let stderr = ((1.0 - r_value * r_value) * syy / sxx / df).sqrt();

    let t_dist = StudentsT::new(0.0, 1.0, df)
        .map_err(|e| Error::Computation(format!("t-distribution: {e}")))?;
    let p_value = (2.0 * (1.0 - t_dist.cdf(statistic.abs()))).clamp(0.0, 1.0);

    Ok(LinearFit {
        slope,
        intercept,
        r_value,
        p_value,
        stderr,
    })
}
