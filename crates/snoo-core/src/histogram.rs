//! Fixed-width histograms for chart rendering
//!
//! A deliberately small histogram: equal-width bins over [min, max], last
//! bin right-inclusive so the maximum is always counted.

use crate::error::{Error, Result};
use crate::math::reject_nonfinite;

/// A single histogram bin. Left edge inclusive, right edge exclusive
/// except for the last bin.
#[derive(Debug, Clone, PartialEq)]
pub struct Bin {
    pub left: f64,
    pub right: f64,
    pub count: usize,
}

impl Bin {
    pub fn width(&self) -> f64 {
        self.right - self.left
    }
}

/// Build `num_bins` equal-width bins over the sample range.
///
/// All-equal samples collapse into a single bin spanning that value.
pub fn fixed_width_bins(sample: &[f64], num_bins: usize) -> Result<Vec<Bin>> {
    if sample.is_empty() {
        return Err(Error::empty_input());
    }
    if num_bins == 0 {
        return Err(Error::InvalidParameter(
            "histogram needs at least one bin".to_string(),
        ));
    }
    reject_nonfinite(sample, "histogram input")?;

    let mut sorted = sample.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let min = sorted[0];
    let max = sorted[sorted.len() - 1];

    if (max - min).abs() < 1e-10 {
        return Ok(vec![Bin {
            left: min,
            right: max,
            count: sorted.len(),
        }]);
    }

    let width = (max - min) / num_bins as f64;
    let mut bins: Vec<Bin> = (0..num_bins)
        .map(|i| Bin {
            left: min + i as f64 * width,
            // last bin ends exactly at max
            right: if i == num_bins - 1 {
                max
            } else {
                min + (i + 1) as f64 * width
            },
            count: 0,
        })
        .collect();

    let mut current = 0;
    for &value in &sorted {
        while current < num_bins - 1 && value >= bins[current].right {
            current += 1;
        }
        bins[current].count += 1;
    }

    Ok(bins)
}
