//! Daily word command

use crate::core::Word;
use crate::error::{Error, Result};
use crate::language::{Language, daily_index, daily_sample, date_seed};
use chrono::NaiveDate;

/// The word of the day and how it was picked
#[derive(Debug, Clone, PartialEq)]
pub struct DailyWordResult {
    pub date: NaiveDate,
    pub seed: String,
    pub sample: f64,
    pub index: usize,
    pub dictionary_size: usize,
    pub language: String,
    pub word: Word,
}

/// Pick the word of the day for `date`
///
/// # Errors
/// Returns [`Error::EmptyDictionary`] if the language has no words.
pub fn daily_word(language: &Language, date: NaiveDate) -> Result<DailyWordResult> {
    let dictionary = language.dictionary();
    let seed = date_seed(date);
    let sample = daily_sample(&seed);

    let (index, word) = daily_index(sample, dictionary.len())
        .and_then(|index| dictionary.get(index).map(|word| (index, word.clone())))
        .ok_or_else(|| Error::EmptyDictionary(language.code().to_string()))?;

    Ok(DailyWordResult {
        date,
        seed,
        sample,
        index,
        dictionary_size: dictionary.len(),
        language: language.code().to_string(),
        word,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::fixtures;

    #[test]
    fn daily_word_matches_the_game() {
        let language = fixtures::english();
        let date = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();

        let result = daily_word(&language, date).unwrap();

        assert_eq!(result.seed, "Fri Oct 16 2026");
        assert_eq!(&result.word, language.daily_word(date).unwrap());
        assert!(result.index < result.dictionary_size - 1);
    }
}
