//! Word lookup command
//!
//! Normalizes a word the way guesses are normalized and looks it up in a
//! dictionary, optionally scoring it against a secret word.

use crate::core::{Feedback, normalize};
use crate::language::Language;

/// Result of checking a word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub input: String,
    pub normalized: String,
    pub language: String,
    pub present: bool,
    /// Feedback against the secret, when one was given
    pub feedback: Option<Feedback>,
}

#[must_use]
pub fn check_word(language: &Language, word: &str, against: Option<&str>) -> CheckResult {
    let normalized = normalize(word);
    let present = language.is_word_present(&normalized);

    let feedback = against
        .map(normalize)
        .filter(|secret| secret.chars().count() == normalized.chars().count())
        .map(|secret| Feedback::calculate(&normalized, &secret));

    CheckResult {
        input: word.to_string(),
        normalized,
        language: language.code().to_string(),
        present,
        feedback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::fixtures;

    #[test]
    fn check_normalizes_before_lookup() {
        let language = fixtures::portuguese();
        let result = check_word(&language, "Ações", None);

        assert_eq!(result.normalized, "acoes");
        assert!(result.present);
        assert!(result.feedback.is_none());
    }

    #[test]
    fn check_scores_against_a_secret() {
        let language = fixtures::english();
        let result = check_word(&language, "amado", Some("AMIGO"));

        assert_eq!(result.feedback.unwrap().to_emoji(), "🟩🟩🟨⬛🟩");
    }

    #[test]
    fn check_skips_feedback_on_length_mismatch() {
        let language = fixtures::english();
        let result = check_word(&language, "amadoo", Some("amigo"));

        assert!(!result.present);
        assert!(result.feedback.is_none());
    }
}
