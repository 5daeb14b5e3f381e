//! One-way analysis of variance for k independent groups

use snoo_core::math::reject_nonfinite;
use snoo_core::{Error, Result};
use statrs::distribution::{ContinuousCDF, FisherSnedecor};

use crate::types::ALPHA;
use crate::Significance;

/// Outcome of a one-way ANOVA.
#[derive(Debug, Clone, Copy)]
pub struct AnovaResult {
    pub f_statistic: f64,
    pub p_value: f64,
    pub df_between: f64,
    pub df_within: f64,
}

impl AnovaResult {
    pub fn significance(&self) -> Significance {
        Significance::from_p_value(self.p_value, ALPHA)
    }
}

/// One-way ANOVA over two or more independent groups.
pub fn one_way_anova(groups: &[&[f64]]) -> Result<AnovaResult> {
    if groups.len() < 2 {
        return Err(Error::InvalidParameter(
            "ANOVA needs at least two groups".to_string(),
        ));
    }
    for group in groups {
        if group.is_empty() {
            return Err(Error::empty_input());
        }
        reject_nonfinite(group, "group")?;
    }

    let k = groups.len() as f64;
    let n: usize = groups.iter().map(|g| g.len()).sum();
    let n_f = n as f64;
    if n_f <= k {
        return Err(Error::InsufficientData {
            expected: groups.len() + 1,
            actual: n,
        });
    }

    let grand_sum: f64 = groups.iter().flat_map(|g| g.iter()).sum();
    let grand_mean = grand_sum / n_f;

    let mut ss_between = 0.0;
    let mut ss_within = 0.0;
    for group in groups {
        let gn = group.len() as f64;
        let gm = group.iter().sum::<f64>() / gn;
        ss_between += gn * (gm - grand_mean) * (gm - grand_mean);
        ss_within += group.iter().map(|&v| (v - gm) * (v - gm)).sum::<f64>();
    }

    let df_between = k - 1.0;
    let df_within = n_f - k;
    let ms_within = ss_within / df_within;
    if ms_within <= 0.0 {
        return Err(Error::Computation(
            "zero within-group variance, F statistic is undefined".to_string(),
        ));
    }

    let f_statistic = (ss_between / df_between) / ms_within;
    let f_dist = FisherSnedecor::new(df_between, df_within)
        .map_err(|e| Error::Computation(format!("F distribution: {e}")))?;
    let p_value = (1.0 - f_dist.cdf(f_statistic)).clamp(0.0, 1.0);

    Ok(AnovaResult {
        f_statistic,
        p_value,
        df_between,
        df_within,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_known_value() {
        // SSB = 6, SSW = 6, F = 3; for d1 = 2 the survival function is
        // (1 + F/3)^-3, so p is exactly 1/8.
        let a = [1.0, 2.0, 3.0];
        let b = [2.0, 3.0, 4.0];
        let c = [3.0, 4.0, 5.0];
        let result = one_way_anova(&[&a, &b, &c]).unwrap();
        assert_abs_diff_eq!(result.f_statistic, 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(result.p_value, 0.125, epsilon = 1e-9);
        assert_abs_diff_eq!(result.df_between, 2.0);
        assert_abs_diff_eq!(result.df_within, 6.0);
    }

    #[test]
    fn test_identical_groups_give_zero_f() {
        let g = [1.0, 2.0, 3.0];
        let result = one_way_anova(&[&g, &g, &g]).unwrap();
        assert_abs_diff_eq!(result.f_statistic, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(result.p_value, 1.0, epsilon = 1e-12);
        assert!(!result.significance().is_significant());
    }

    #[test]
    fn test_separated_groups_significant() {
        let a = [1.0, 2.0, 1.5, 1.2];
        let b = [10.0, 11.0, 10.5, 10.2];
        let c = [20.0, 21.0, 20.5, 20.2];
        let result = one_way_anova(&[&a, &b, &c]).unwrap();
        assert!(result.significance().is_significant());
    }

    #[test]
    fn test_degenerate_inputs_rejected() {
        let g = [1.0, 2.0];
        assert!(one_way_anova(&[&g]).is_err());
        assert!(one_way_anova(&[&g, &[]]).is_err());
        let constant = [5.0, 5.0];
        assert!(one_way_anova(&[&constant, &constant]).is_err());
    }
}
