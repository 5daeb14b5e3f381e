//! Submission records, dataset loading and the bulk cleaning job
//!
//! The cleaned dataset is a directory of gzip-compressed JSON-lines part
//! files, one object per submission. This crate loads them into an
//! immutable in-memory [`Dataset`], provides the row filter predicates the
//! analyses share, and implements the cleaning/sampling job that produces
//! those part files from raw Reddit dumps in the first place.

pub mod clean;
pub mod dataset;
pub mod filters;
pub mod loader;
pub mod submission;

pub use dataset::Dataset;
pub use loader::{load_dir, load_files};
pub use submission::Submission;
