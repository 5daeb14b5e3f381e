//! The cleaned submission record

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One Reddit post from the cleaned dataset.
///
/// Only the fields the analyses consume are deserialized; everything else
/// in the JSON object is ignored. Text fields and the timestamp stay
/// optional because upstream cleaning does not guarantee them for every
/// historical dump. Filters deal with absence, features assume presence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
    pub subreddit: Option<String>,
    #[serde(default)]
    pub score: i64,
    #[serde(default)]
    pub num_comments: i64,
    pub title: Option<String>,
    pub selftext: Option<String>,
    pub datetime: Option<DateTime<Utc>>,
}

impl Submission {
    /// Character length of the selftext, if present.
    pub fn selftext_len(&self) -> Option<usize> {
        self.selftext.as_ref().map(|t| t.chars().count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_ignores_unknown_fields() {
        let line = r#"{"subreddit":"tea","score":12,"num_comments":3,
            "title":"a","selftext":"b","datetime":"2016-11-01T12:34:56Z",
            "gilded":0,"author":"someone"}"#;
        let sub: Submission = serde_json::from_str(line).unwrap();
        assert_eq!(sub.subreddit.as_deref(), Some("tea"));
        assert_eq!(sub.score, 12);
        assert_eq!(sub.num_comments, 3);
        assert!(sub.datetime.is_some());
    }

    #[test]
    fn test_missing_optionals_deserialize_as_none() {
        let sub: Submission = serde_json::from_str(r#"{"score":1}"#).unwrap();
        assert!(sub.subreddit.is_none());
        assert!(sub.selftext.is_none());
        assert!(sub.datetime.is_none());
        assert_eq!(sub.num_comments, 0);
    }

    #[test]
    fn test_selftext_len_counts_chars() {
        let sub: Submission =
            serde_json::from_str(r#"{"score":0,"selftext":"héllo"}"#).unwrap();
        assert_eq!(sub.selftext_len(), Some(5));
    }
}
