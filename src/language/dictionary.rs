//! Word dictionary and secret word selection

use crate::core::Word;
use chrono::NaiveDate;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;
use rustc_hash::FxHashSet;
use sha2::{Digest, Sha256};

/// Ordered list of words of one language, immutable after load
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: Vec<Word>,
    present: FxHashSet<String>,
}

impl Dictionary {
    #[must_use]
    pub fn new(words: Vec<Word>) -> Self {
        let present = words.iter().map(|w| w.text().to_string()).collect();
        Self { words, present }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Word> {
        self.words.get(index)
    }

    /// Exact lookup against normalized forms only
    #[must_use]
    pub fn is_word_present(&self, normalized: &str) -> bool {
        self.present.contains(normalized)
    }

    /// The word of the day
    ///
    /// A pure function of the dictionary and the calendar date.
    #[must_use]
    pub fn daily_word(&self, date: NaiveDate) -> Option<&Word> {
        let sample = daily_sample(&date_seed(date));
        daily_index(sample, self.len()).and_then(|index| self.get(index))
    }

    /// A uniformly random word
    #[must_use]
    pub fn random_word(&self) -> Option<&Word> {
        self.random_word_with(&mut rand::rng())
    }

    /// A uniformly random word drawn from `rng`
    pub fn random_word_with<R: Rng>(&self, rng: &mut R) -> Option<&Word> {
        if self.words.is_empty() {
            return None;
        }

        self.get(rng.random_range(0..self.words.len()))
    }
}

/// Calendar date string the daily generator is seeded with, e.g. `Fri Oct 16 2026`
#[must_use]
pub fn date_seed(date: NaiveDate) -> String {
    date.format("%a %b %d %Y").to_string()
}

/// First draw in `[0, 1)` of a generator seeded by `seed`
#[must_use]
pub fn daily_sample(seed: &str) -> f64 {
    let digest = Sha256::digest(seed.as_bytes());

    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest[..8]);

    let mut rng = Pcg64Mcg::seed_from_u64(u64::from_le_bytes(bytes));
    rng.random::<f64>()
}

/// Map a sample into `[0, len - 1)`
///
/// The last index is never selected. An empty dictionary yields `None`, a
/// single word dictionary always yields index 0.
#[must_use]
pub fn daily_index(sample: f64, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }

    Some((sample * (len - 1) as f64).floor() as usize)
}
