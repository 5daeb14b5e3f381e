//! Pearson correlation between two columns

use snoo_core::math::reject_nonfinite;
use snoo_core::{Error, Result};

/// Pearson correlation coefficient of two equally long columns.
pub fn pearson_r(x: &[f64], y: &[f64]) -> Result<f64> {
    if x.len() != y.len() {
        return Err(Error::size_mismatch(x.len(), y.len(), "correlation columns"));
    }
    if x.len() < 2 {
        return Err(Error::InsufficientData {
            expected: 2,
            actual: x.len(),
        });
    }
    reject_nonfinite(x, "first column")?;
    reject_nonfinite(y, "second column")?;

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
    if sxx <= 0.0 || syy <= 0.0 {
        return Err(Error::Computation(
            "constant column, correlation is undefined".to_string(),
        ));
    }

    Ok((sxy / (sxx * syy).sqrt()).clamp(-1.0, 1.0))
}
