//! Chart rendering for submission analysis results
//!
//! Every chart is a fixed 1200x800 PNG written through plotters' bitmap
//! backend with its default fonts, so rendering works in headless
//! environments. No chart returns data a later pipeline step consumes.

use plotters::style::RGBColor;

pub mod bar;
pub mod contingency;
pub mod error;
pub mod histogram;
pub mod trend;

pub use bar::mean_bar_chart;
pub use contingency::grouped_bar_with_table;
pub use error::{PlotError, Result};
pub use histogram::{histogram, overlaid_histograms};
pub use trend::trend_with_fit;

/// Chart resolution in pixels.
pub const CHART_SIZE: (u32, u32) = (1200, 800);

pub const SKY_BLUE: RGBColor = RGBColor(135, 206, 235);
pub const PALE_GREEN: RGBColor = RGBColor(152, 251, 152);
pub const LIGHT_CORAL: RGBColor = RGBColor(240, 128, 128);

/// Series palette, cycled by index.
pub fn palette_color(index: usize) -> RGBColor {
    const PALETTE: [RGBColor; 3] = [SKY_BLUE, PALE_GREEN, LIGHT_CORAL];
    PALETTE[index % PALETTE.len()]
}
