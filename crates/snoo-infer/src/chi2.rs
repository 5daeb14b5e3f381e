//! Chi-squared test of independence on a contingency table

use snoo_core::{Error, Result};
use statrs::distribution::{ChiSquared, ContinuousCDF};

use crate::types::ALPHA;
use crate::Significance;

/// Outcome of a chi-squared independence test.
#[derive(Debug, Clone)]
pub struct Chi2Result {
    pub statistic: f64,
    pub p_value: f64,
    pub dof: usize,
    /// Expected frequencies under independence, same shape as the input
    pub expected: Vec<Vec<f64>>,
}

impl Chi2Result {
    pub fn significance(&self) -> Significance {
        Significance::from_p_value(self.p_value, ALPHA)
    }
}

/// Chi-squared test of independence over an r x c table of observed
/// counts. Yates continuity correction is applied when the table has one
/// degree of freedom (2 x 2), matching the usual convention.
pub fn chi2_independence(table: &[Vec<f64>]) -> Result<Chi2Result> {
    let rows = table.len();
    if rows < 2 {
        return Err(Error::InvalidInput(
            "contingency table needs at least 2 rows".to_string(),
        ));
    }
    let cols = table[0].len();
    if cols < 2 {
        return Err(Error::InvalidInput(
            "contingency table needs at least 2 columns".to_string(),
        ));
    }
    for row in table {
        if row.len() != cols {
            return Err(Error::size_mismatch(cols, row.len(), "contingency row"));
        }
        for &v in row {
            if !v.is_finite() || v < 0.0 {
                return Err(Error::InvalidInput(
                    "contingency counts must be finite and non-negative".to_string(),
                ));
            }
        }
    }

    let row_sums: Vec<f64> = table.iter().map(|r| r.iter().sum()).collect();
    let col_sums: Vec<f64> = (0..cols)
        .map(|j| table.iter().map(|r| r[j]).sum())
        .collect();
    let total: f64 = row_sums.iter().sum();
    if total <= 0.0 {
        return Err(Error::InvalidInput(
            "contingency table sums to zero".to_string(),
        ));
    }

    let expected: Vec<Vec<f64>> = (0..rows)
        .map(|i| (0..cols).map(|j| row_sums[i] * col_sums[j] / total).collect())
        .collect();

    let dof = (rows - 1) * (cols - 1);
    let yates = dof == 1;

    let mut statistic = 0.0;
    for i in 0..rows {
        for j in 0..cols {
            let e = expected[i][j];
            if e <= 0.0 {
                continue;
            }
            let mut d = (table[i][j] - e).abs();
            if yates {
                d = (d - 0.5).max(0.0);
            }
            statistic += d * d / e;
        }
    }

    let chi2 = ChiSquared::new(dof as f64)
        .map_err(|e| Error::Computation(format!("chi-squared distribution: {e}")))?;
    let p_value = (1.0 - chi2.cdf(statistic)).clamp(0.0, 1.0);

    Ok(Chi2Result {
        statistic,
        p_value,
        dof,
        expected,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_2x3_known_value() {
        // Row sums 60/60, column sums 30/40/50; for df = 2 the survival
        // function is exp(-x/2), so the p-value is exactly exp(-8/3).
        let table = vec![vec![10.0, 20.0, 30.0], vec![20.0, 20.0, 20.0]];
        let result = chi2_independence(&table).unwrap();
        assert_abs_diff_eq!(result.statistic, 16.0 / 3.0, epsilon = 1e-10);
        assert_eq!(result.dof, 2);
        assert_abs_diff_eq!(result.p_value, (-8.0f64 / 3.0).exp(), epsilon = 1e-9);
        assert_eq!(result.expected[0], vec![15.0, 20.0, 25.0]);
        assert_eq!(result.expected[1], vec![15.0, 20.0, 25.0]);
    }

    #[test]
    fn test_2x2_applies_yates_correction() {
        let table = vec![vec![10.0, 20.0], vec![30.0, 40.0]];
        let result = chi2_independence(&table).unwrap();
        assert_eq!(result.dof, 1);
        assert_abs_diff_eq!(result.statistic, 0.446428, epsilon = 1e-5);
        assert_abs_diff_eq!(result.p_value, 0.5043, epsilon = 2e-3);
    }

    #[test]
    fn test_independent_table_not_significant() {
        // Perfectly proportional rows: statistic 0, p 1
        let table = vec![vec![10.0, 20.0, 30.0], vec![20.0, 40.0, 60.0]];
        let result = chi2_independence(&table).unwrap();
        assert_abs_diff_eq!(result.statistic, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(result.p_value, 1.0, epsilon = 1e-12);
        assert!(!result.significance().is_significant());
    }

    #[test]
    fn test_bad_tables_rejected() {
        assert!(chi2_independence(&[vec![1.0, 2.0]]).is_err());
        assert!(chi2_independence(&[vec![1.0, 2.0], vec![1.0]]).is_err());
        assert!(chi2_independence(&[vec![1.0, -2.0], vec![1.0, 2.0]]).is_err());
        assert!(chi2_independence(&[vec![0.0, 0.0], vec![0.0, 0.0]]).is_err());
    }
}
