//! Flesch readability scores
//!
//! Formula-only readability metrics over plain text: Flesch Reading Ease
//! (higher is easier) and the Flesch-Kincaid grade level (higher needs
//! more schooling). Syllables come from a vowel-group heuristic, which is
//! what the usual readability packages do under the hood.

/// Count syllables in one word: vowel groups, minus a trailing silent 'e',
/// never below one.
pub fn syllable_count(word: &str) -> usize {
    let letters: String = word
        .chars()
        .filter(|c| c.is_alphabetic())
        .collect::<String>()
        .to_lowercase();
    if letters.is_empty() {
        return 0;
    }

    let is_vowel = |c: char| "aeiouy".contains(c);
    let mut groups = 0;
    let mut prev_vowel = false;
    for c in letters.chars() {
        let vowel = is_vowel(c);
        if vowel && !prev_vowel {
            groups += 1;
        }
        prev_vowel = vowel;
    }

    if groups > 1 && letters.ends_with('e') && !letters.ends_with("le") {
        groups -= 1;
    }
    groups.max(1)
}

fn words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Number of sentences: runs of text separated by '.', '!' or '?'.
/// Text without a terminator still counts as one sentence.
pub fn sentence_count(text: &str) -> usize {
    text.split(['.', '!', '?'])
        .filter(|s| s.chars().any(|c| c.is_alphanumeric()))
        .count()
        .max(1)
}

fn syllables_in(text: &str) -> usize {
    words(text).iter().map(|w| syllable_count(w)).sum()
}

/// Flesch Reading Ease: 206.835 - 1.015 (words/sentence) - 84.6 (syllables/word).
///
/// Returns 0 for text without words; callers filter empty rows first.
pub fn flesch_reading_ease(text: &str) -> f64 {
    let word_count = words(text).len();
    if word_count == 0 {
        return 0.0;
    }
    let sentences = sentence_count(text) as f64;
    let syllables = syllables_in(text) as f64;
    let words_f = word_count as f64;

    206.835 - 1.015 * (words_f / sentences) - 84.6 * (syllables / words_f)
}

/// Flesch-Kincaid grade level: 0.39 (words/sentence) + 11.8 (syllables/word) - 15.59.
pub fn flesch_kincaid_grade(text: &str) -> f64 {
    let word_count = words(text).len();
    if word_count == 0 {
        return 0.0;
    }
    let sentences = sentence_count(text) as f64;
    let syllables = syllables_in(text) as f64;
    let words_f = word_count as f64;

    0.39 * (words_f / sentences) + 11.8 * (syllables / words_f) - 15.59
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_syllable_counts() {
        assert_eq!(syllable_count("cat"), 1);
        assert_eq!(syllable_count("make"), 1); // silent e
        assert_eq!(syllable_count("table"), 2); // -le keeps its syllable
        assert_eq!(syllable_count("statistics"), 3);
        assert_eq!(syllable_count("readability"), 5);
        assert_eq!(syllable_count("I"), 1);
        assert_eq!(syllable_count("..."), 0);
    }

    #[test]
    fn test_sentence_count() {
        assert_eq!(sentence_count("One. Two! Three?"), 3);
        assert_eq!(sentence_count("No terminator here"), 1);
        assert_eq!(sentence_count("Trailing dots..."), 1);
    }

    #[test]
    fn test_reading_ease_monosyllabic_sentence() {
        // 6 words, 1 sentence, 6 syllables
        let score = flesch_reading_ease("The cat sat on the mat.");
        assert_abs_diff_eq!(score, 116.145, epsilon = 1e-9);
    }

    #[test]
    fn test_reading_ease_rewards_short_sentences() {
        // Same six monosyllables over two sentences
        let score = flesch_reading_ease("One two three. Four five six.");
        assert_abs_diff_eq!(score, 206.835 - 1.015 * 3.0 - 84.6, epsilon = 1e-9);
    }

    #[test]
    fn test_grade_tracks_word_complexity() {
        let simple = flesch_kincaid_grade("The cat sat on the mat.");
        let complex = flesch_kincaid_grade("Incomprehensibilities notwithstanding, proceed.");
        assert!(complex > simple);
        assert_abs_diff_eq!(simple, 0.39 * 6.0 + 11.8 - 15.59, epsilon = 1e-9);
    }

    #[test]
    fn test_empty_text_scores_zero() {
        assert_abs_diff_eq!(flesch_reading_ease(""), 0.0);
        assert_abs_diff_eq!(flesch_kincaid_grade("   "), 0.0);
    }
}
