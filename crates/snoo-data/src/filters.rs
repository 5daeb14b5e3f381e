//! Row filter predicates
//!
//! Pure predicates over a single submission; no cross-row state. The
//! analyses apply these before any derived feature is computed, so the
//! feature code never sees missing or sentinel text.

use crate::submission::Submission;

/// Sentinel bodies Reddit substitutes for moderated content.
const SENTINELS: [&str; 2] = ["[removed]", "[deleted]"];

/// True when the text carries at least one word and is not a moderation
/// sentinel. Whitespace-only strings are rejected.
pub fn is_meaningful_text(text: &str) -> bool {
    let trimmed = text.trim();
    !trimmed.is_empty() && !SENTINELS.contains(&trimmed)
}

/// Number of whitespace-separated words after trimming.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Selftext present, non-empty and not `[removed]`/`[deleted]`.
pub fn has_meaningful_selftext(sub: &Submission) -> bool {
    sub.selftext.as_deref().is_some_and(is_meaningful_text)
}

/// Title present, non-empty and not a sentinel.
pub fn has_meaningful_title(sub: &Submission) -> bool {
    sub.title.as_deref().is_some_and(is_meaningful_text)
}

/// Comment count at or above a lower bound.
pub fn min_comments(sub: &Submission, bound: i64) -> bool {
    sub.num_comments >= bound
}

/// Subreddit name present.
pub fn has_subreddit(sub: &Submission) -> bool {
    sub.subreddit.as_deref().map(str::trim).is_some_and(|s| !s.is_empty())
}

/// Timestamp present.
pub fn has_datetime(sub: &Submission) -> bool {
    sub.datetime.is_some()
}
