//! Text-derived features for submission analysis
//!
//! Two feature families: compound sentiment polarity (VADER lexicon) with
//! its three-way categorization, and Flesch readability/grade scores.
//! Both assume the caller has already filtered out empty and sentinel
//! text rows.

pub mod readability;
pub mod sentiment;

pub use readability::{flesch_kincaid_grade, flesch_reading_ease, syllable_count};
pub use sentiment::{SentimentAnalyzer, SentimentCategory};
