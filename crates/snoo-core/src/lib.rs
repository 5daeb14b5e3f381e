//! Core types for Reddit submission analysis
//!
//! This crate provides the shared foundation for the snoo workspace:
//! a unified error type, f64 descriptive statistics, fixed-width
//! histograms, and the group-partitioning primitives (median, tertile
//! and mean-band splits) every analysis pipeline is built from.
//!
//! # Design Philosophy
//!
//! - **Pure transforms**: every operation takes slices and returns new
//!   values; nothing mutates shared state.
//! - **f64 only, deterministic**: no randomness, no resampling.
//! - **Reject, don't propagate**: NaN/Inf input is an error, so every
//!   downstream statistic is well defined.
//!
//! # Example
//!
//! ```rust
//! use snoo_core::split::median_split;
//!
//! let comments = [1.0, 1.0, 2.0, 2.0, 3.0];
//! let scores = [2.0, 3.0, 4.0, 5.0, 6.0];
//!
//! let split = median_split(&comments, &scores)?;
//! assert_eq!(split.high, vec![6.0]);
//! # Ok::<(), snoo_core::Error>(())
//! ```

pub mod error;
pub mod histogram;
pub mod math;
pub mod split;

pub use error::{Error, Result};
pub use histogram::{fixed_width_bins, Bin};
pub use split::{mean_band_split, median_split, tertile_split, ThreeGroupSplit, TwoGroupSplit};
