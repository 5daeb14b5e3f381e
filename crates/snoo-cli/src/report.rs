//! Canned interpretation sentences printed after each test

use snoo_infer::{NormalityVerdict, Significance};

/// Conclusion for a two-group comparison of `target` split by `factor`.
pub fn two_group_conclusion(significance: Significance, factor: &str, target: &str) -> String {
    match significance {
        Significance::Significant => format!(
            "The distributions of the two groups are significantly different:\n \
             the {factor} may have an impact on the {target}"
        ),
        Significance::NotSignificant => format!(
            "The distributions of the two groups are not significantly different:\n \
             the {factor} does not have a significant impact on the {target}"
        ),
    }
}

/// Conclusion for a three-group comparison of `target` split by `factor`.
pub fn three_group_conclusion(significance: Significance, factor: &str, target: &str) -> String {
    match significance {
        Significance::Significant => format!(
            "The distributions of the three groups are significantly different:\n \
             the {factor} may have an impact on the {target}"
        ),
        Significance::NotSignificant => format!(
            "The distributions of the three groups are not significantly different:\n \
             the {factor} does not have a significant impact on the {target}"
        ),
    }
}

/// One-line normality verdict with its p-value band.
pub fn normality_band(verdict: NormalityVerdict) -> &'static str {
    match verdict {
        NormalityVerdict::NotNormal => "< 0.05: Not a normal distribution",
        NormalityVerdict::Borderline => "> 0.05 & < 0.1: Normal enough",
        NormalityVerdict::Normal => "> 0.1: Normal",
    }
}

/// Whole-column normality sentence for a named feature.
pub fn column_normality(column: &str, p_value: f64) -> String {
    if p_value < 0.05 {
        format!("The column {column} is not normally distributed (p-value < 0.05).")
    } else {
        format!("The column {column} is approximately normally distributed (p-value >= 0.05).")
    }
}

/// Verdict line for a two-sample t-test.
pub fn ttest_band(significance: Significance) -> &'static str {
    match significance {
        Significance::Significant => {
            "< 0.05: There is a significant difference between the groups"
        }
        Significance::NotSignificant => {
            ">= 0.05: There is no significant difference between the groups"
        }
    }
}

/// Correlation strength line against the reporting threshold.
pub fn correlation_band(r: f64, threshold: f64) -> String {
    if r.abs() > threshold {
        format!("> {threshold}: There is a significant correlation.")
    } else {
        format!("<= {threshold}: There is no significant correlation.")
    }
}
