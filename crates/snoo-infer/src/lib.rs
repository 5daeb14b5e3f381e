//! Hypothesis tests for submission analysis
//!
//! Every test here follows the same contract: f64 slices in, a
//! fixed-shape result out, deterministic, NaN/Inf rejected. p-values come
//! from `statrs` distributions; interpretation is a strict `p < alpha`
//! comparison (see [`Significance`]).
//!
//! | Scenario | Test |
//! |---|---|
//! | 2 independent groups, non-normal | [`mann_whitney::mann_whitney_u`] |
//! | 3 independent groups | [`anova::one_way_anova`] |
//! | 2 independent groups, unequal variances | [`ttest::welch_t_test`] |
//! | normality check | [`normality::normality_test`] |
//! | categorical association | [`chi2::chi2_independence`] |
//! | trend | [`regression::linear_regression`] |

pub mod anova;
pub mod chi2;
pub mod correlation;
pub mod mann_whitney;
pub mod normality;
pub mod regression;
pub mod ttest;
pub mod types;

pub use anova::{one_way_anova, AnovaResult};
pub use chi2::{chi2_independence, Chi2Result};
pub use correlation::pearson_r;
pub use mann_whitney::{mann_whitney_u, MannWhitneyResult};
pub use normality::{normality_test, NormalityResult};
pub use regression::{linear_regression, LinearFit};
pub use ttest::{welch_t_test, TTestResult};
pub use types::{NormalityVerdict, Significance, ALPHA};
