//! Letter-match feedback for a guess
//!
//! Each position of a guess is classified against the secret word:
//! - Exact: same letter at the same position (🟩)
//! - Present: the secret contains the letter somewhere else (🟨)
//! - Absent: the secret does not contain the letter (⬛)
//!
//! Presence is not frequency-aware: a guess repeating a letter gets a
//! present mark for every repetition, however many times the secret holds it.

use std::fmt;

/// Classification of a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterMatch {
    Exact,
    Present,
    Absent,
}

impl LetterMatch {
    /// Emoji used in rendered feedback rows
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Exact => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬛',
        }
    }
}

/// Feedback row for one guess
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback(Vec<LetterMatch>);

impl Feedback {
    /// Calculate the feedback when `guess` is compared with `secret`
    ///
    /// Both words are expected to be normalized and of equal length.
    ///
    /// # Examples
    /// ```
    /// use wordin::core::Feedback;
    ///
    /// let feedback = Feedback::calculate("amado", "amigo");
    /// assert_eq!(feedback.to_emoji(), "🟩🟩🟨⬛🟩");
    /// ```
    #[must_use]
    pub fn calculate(guess: &str, secret: &str) -> Self {
        let secret: Vec<char> = secret.chars().collect();

        let matches = guess
            .chars()
            .enumerate()
            .map(|(position, letter)| {
                if secret.get(position) == Some(&letter) {
                    LetterMatch::Exact
                } else if secret.contains(&letter) {
                    LetterMatch::Present
                } else {
                    LetterMatch::Absent
                }
            })
            .collect();

        Self(matches)
    }

    /// All exact matches for a word of `len` letters
    #[must_use]
    pub fn perfect(len: usize) -> Self {
        Self(vec![LetterMatch::Exact; len])
    }

    #[must_use]
    pub fn matches(&self) -> &[LetterMatch] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Render the row as emoji, one per letter
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|m| m.symbol()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}
