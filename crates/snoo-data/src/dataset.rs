//! The in-memory dataset: an ordered, immutable collection of submissions
//!
//! Transforms return new datasets rather than mutating in place, so each
//! pipeline step stays independently testable.

use std::collections::HashMap;

use crate::submission::Submission;

/// An ordered collection of submissions, loaded fresh per run.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    rows: Vec<Submission>,
}

impl Dataset {
    pub fn new(rows: Vec<Submission>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Submission] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Submission> {
        self.rows.iter()
    }

    /// Keep only rows matching the predicate; returns a new dataset.
    pub fn filter<P>(&self, predicate: P) -> Dataset
    where
        P: Fn(&Submission) -> bool,
    {
        Dataset::new(self.rows.iter().filter(|s| predicate(s)).cloned().collect())
    }

    /// Project each row to a value.
    pub fn project<T, F>(&self, f: F) -> Vec<T>
    where
        F: Fn(&Submission) -> T,
    {
        self.rows.iter().map(f).collect()
    }

    /// Score column as f64.
    pub fn scores(&self) -> Vec<f64> {
        self.project(|s| s.score as f64)
    }

    /// Comment-count column as f64.
    pub fn comment_counts(&self) -> Vec<f64> {
        self.project(|s| s.num_comments as f64)
    }

    /// Selftext character length per row. Callers must have filtered out
    /// rows without meaningful selftext first.
    pub fn selftext_lengths(&self) -> Vec<f64> {
        self.project(|s| s.selftext_len().unwrap_or(0) as f64)
    }

    /// Submission count of each row's subreddit, mapped back onto the rows.
    /// Rows without a subreddit get popularity 0; filter them out first.
    pub fn subreddit_popularity(&self) -> Vec<f64> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for sub in &self.rows {
            if let Some(name) = sub.subreddit.as_deref() {
                *counts.entry(name).or_insert(0) += 1;
            }
        }
        self.project(|s| {
            s.subreddit
                .as_deref()
                .and_then(|name| counts.get(name))
                .copied()
                .unwrap_or(0) as f64
        })
    }
}

impl From<Vec<Submission>> for Dataset {
    fn from(rows: Vec<Submission>) -> Self {
        Self::new(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make(subreddit: &str, score: i64, num_comments: i64) -> Submission {
        Submission {
            subreddit: Some(subreddit.to_string()),
            score,
            num_comments,
            title: None,
            selftext: None,
            datetime: None,
        }
    }

    #[test]
    fn test_filter_returns_new_dataset() {
        let ds = Dataset::new(vec![make("a", 1, 0), make("a", 2, 3)]);
        let kept = ds.filter(|s| s.num_comments >= 1);
        assert_eq!(kept.len(), 1);
        assert_eq!(ds.len(), 2);
    }

    #[test]
    fn test_subreddit_popularity_maps_counts_back() {
        let ds = Dataset::new(vec![
            make("tea", 1, 0),
            make("tea", 2, 0),
            make("coffee", 3, 0),
        ]);
        assert_eq!(ds.subreddit_popularity(), vec![2.0, 2.0, 1.0]);
    }

    #[test]
    fn test_scores_projection() {
        let ds = Dataset::new(vec![make("a", -4, 0), make("a", 9, 0)]);
        assert_eq!(ds.scores(), vec![-4.0, 9.0]);
    }
}
