//! Compound sentiment polarity and categorization
//!
//! Wraps the VADER lexicon analyzer. The compound score is a single
//! normalized scalar in [-1, 1]; categorization uses the conventional
//! +-0.05 thresholds, both boundaries inclusive toward their pole.

use std::fmt;

/// Sentiment category derived from a compound score.
///
/// Every real number maps to exactly one category: `>= 0.05` is positive,
/// `<= -0.05` is negative, the open interval between them is neutral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SentimentCategory {
    Positive,
    Neutral,
    Negative,
}

impl SentimentCategory {
    pub fn from_compound(compound: f64) -> Self {
        if compound >= 0.05 {
            Self::Positive
        } else if compound <= -0.05 {
            Self::Negative
        } else {
            Self::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Neutral => "neutral",
            Self::Negative => "negative",
        }
    }
}

impl fmt::Display for SentimentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Lexicon-based sentiment analyzer. Construct once and reuse across rows.
pub struct SentimentAnalyzer {
    inner: vader_sentiment::SentimentIntensityAnalyzer<'static>,
}

impl SentimentAnalyzer {
    pub fn new() -> Self {
        Self {
            inner: vader_sentiment::SentimentIntensityAnalyzer::new(),
        }
    }

    /// Compound polarity of the text in [-1, 1]. Empty text scores 0.
    pub fn compound(&self, text: &str) -> f64 {
        self.inner
            .polarity_scores(text)
            .get("compound")
            .copied()
            .unwrap_or(0.0)
    }

    /// Category of the text's compound polarity.
    pub fn category(&self, text: &str) -> SentimentCategory {
        SentimentCategory::from_compound(self.compound(text))
    }
}

impl Default for SentimentAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_boundaries() {
        assert_eq!(
            SentimentCategory::from_compound(0.05),
            SentimentCategory::Positive
        );
        assert_eq!(
            SentimentCategory::from_compound(-0.05),
            SentimentCategory::Negative
        );
        assert_eq!(
            SentimentCategory::from_compound(0.049999),
            SentimentCategory::Neutral
        );
        assert_eq!(
            SentimentCategory::from_compound(-0.049999),
            SentimentCategory::Neutral
        );
        assert_eq!(
            SentimentCategory::from_compound(1.0),
            SentimentCategory::Positive
        );
        assert_eq!(
            SentimentCategory::from_compound(-1.0),
            SentimentCategory::Negative
        );
        assert_eq!(SentimentCategory::from_compound(0.0), SentimentCategory::Neutral);
    }

    #[test]
    fn test_analyzer_polarity_direction() {
        let analyzer = SentimentAnalyzer::new();
        assert!(analyzer.compound("I love this, it is absolutely wonderful!") > 0.05);
        assert!(analyzer.compound("I hate this, it is absolutely terrible.") < -0.05);
    }

    #[test]
    fn test_factual_text_is_neutral() {
        let analyzer = SentimentAnalyzer::new();
        assert_eq!(
            analyzer.category("The table has four legs."),
            SentimentCategory::Neutral
        );
    }

    #[test]
    fn test_empty_text_is_neutral() {
        let analyzer = SentimentAnalyzer::new();
        assert_eq!(analyzer.category(""), SentimentCategory::Neutral);
    }
}
