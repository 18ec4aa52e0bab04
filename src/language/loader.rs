//! Language file loading
//!
//! A language code resolves to `<dir>/<code>.json`:
//!
//! ```json
//! {
//!     "id": "pt_BR",
//!     "name": "Português (Brasil)",
//!     "words": "dictionary/pt_BR.txt",
//!     "messages": { "game.start": "...", "help": ["line", "line"] }
//! }
//! ```
//!
//! `words` points to either a JSON array of dictionary entries or a plain
//! text list with one word per line.

use super::{Dictionary, Language, Messages};
use crate::core::{WORD_LENGTH, Word};
use crate::error::{Error, Result};
use rustc_hash::FxHashSet;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// On-disk language record
#[derive(Debug, Clone, Deserialize)]
pub struct LanguageFile {
    pub id: String,
    pub name: String,
    pub words: String,
    #[serde(default)]
    pub messages: Messages,
}

/// Path of the language file for `code`, falling back to `default_code`
///
/// # Errors
/// Returns [`Error::LanguageLoad`] if neither file exists.
pub fn resolve_language_file(dir: &Path, code: &str, default_code: &str) -> Result<PathBuf> {
    let requested = dir.join(format!("{code}.json"));
    if requested.is_file() {
        return Ok(requested);
    }

    let fallback = dir.join(format!("{default_code}.json"));
    if fallback.is_file() {
        debug!("language {code} not found, using {default_code}");
        return Ok(fallback);
    }

    Err(Error::LanguageLoad {
        code: code.to_string(),
        path: requested,
        reason: format!("no {code}.json or {default_code}.json in directory"),
    })
}

/// Load the language for `code`, or the default language when it has no file
///
/// # Errors
/// Returns [`Error::LanguageLoad`] if no file is resolvable or it cannot be
/// read or parsed, and [`Error::EmptyDictionary`] if it lists no words.
pub fn load_for_code(dir: &Path, code: &str, default_code: &str) -> Result<Language> {
    let path = resolve_language_file(dir, code, default_code)?;
    load_language_file(&path)
}

/// Load a single language file and its word list
///
/// # Errors
/// See [`load_for_code`].
pub fn load_language_file(path: &Path) -> Result<Language> {
    let code = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();

    let content = fs::read_to_string(path).map_err(|e| load_error(&code, path, &e))?;
    let file: LanguageFile =
        serde_json::from_str(&content).map_err(|e| load_error(&code, path, &e))?;

    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let words_path = dir.join(&file.words);
    let words = load_words(&words_path).map_err(|e| load_error(&file.id, &words_path, &e))?;

    if words.is_empty() {
        return Err(Error::EmptyDictionary(file.id));
    }

    let missing = file.messages.missing_keys();
    if !missing.is_empty() {
        warn!("language {} does not define messages {missing:?}", file.id);
    }

    debug!("loaded language {} with {} words", file.id, words.len());

    Ok(Language::new(
        file.id,
        file.name,
        Dictionary::new(words),
        file.messages,
    ))
}

/// Load a word list, JSON entries or plain text by extension
///
/// # Errors
/// Returns an error if the file cannot be read or the JSON is malformed.
pub fn load_words(path: &Path) -> Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;

    if path.extension().is_some_and(|ext| ext == "json") {
        return Ok(serde_json::from_str(&content)?);
    }

    Ok(parse_word_list(&content))
}

/// Parse a plain text word list
///
/// Skips blank lines, entries that are not [`WORD_LENGTH`] letters long and
/// repeated entries.
#[must_use]
pub fn parse_word_list(content: &str) -> Vec<Word> {
    let mut seen = FxHashSet::default();

    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| {
            if line.chars().count() != WORD_LENGTH {
                warn!("word {line} has a length different than {WORD_LENGTH}");
                return false;
            }

            if !seen.insert(*line) {
                warn!("word {line} is repeated");
                return false;
            }

            true
        })
        .map(Word::new)
        .collect()
}

fn load_error(code: &str, path: &Path, reason: &dyn std::fmt::Display) -> Error {
    Error::LanguageLoad {
        code: code.to_string(),
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::MessageKey;

    const PT_BR: &str = r#"{
        "id": "pt_BR",
        "name": "Português",
        "words": "dictionary/pt_BR.txt",
        "messages": { "help": ["Ajuda", "Use /start"] }
    }"#;

    fn write(dir: &Path, name: &str, content: &str) {
        let path = dir.join(name);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn parse_word_list_filters_entries() {
        let words = parse_word_list("amigo\n  Lápis \n\ncasa\namigo\nabacaxi\n");

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "amigo");
        assert_eq!(words[1].text(), "lapis");
        assert_eq!(words[1].original(), "Lápis");
    }

    #[test]
    fn parse_word_list_empty() {
        assert!(parse_word_list("").is_empty());
    }

    #[test]
    fn load_for_code_reads_text_dictionary() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "pt_BR.json", PT_BR);
        write(dir.path(), "dictionary/pt_BR.txt", "amigo\ncarta\n");

        let language = load_for_code(dir.path(), "pt_BR", "pt_BR").unwrap();
        assert_eq!(language.code(), "pt_BR");
        assert_eq!(language.dictionary().len(), 2);
        assert_eq!(
            language.message(MessageKey::Help, &[]).unwrap(),
            "Ajuda\nUse /start"
        );
    }

    #[test]
    fn load_for_code_reads_json_dictionary() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "en_US.json",
            r#"{"id": "en_US", "name": "English", "words": "dictionary/en_US.json", "messages": {}}"#,
        );
        write(
            dir.path(),
            "dictionary/en_US.json",
            r#"[{"word": "crane", "originalWord": "crane", "difficulty": 2}]"#,
        );

        let language = load_for_code(dir.path(), "en_US", "pt_BR").unwrap();
        assert_eq!(language.dictionary().get(0).unwrap().difficulty(), 2);
    }

    #[test]
    fn load_for_code_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "pt_BR.json", PT_BR);
        write(dir.path(), "dictionary/pt_BR.txt", "amigo\n");

        let language = load_for_code(dir.path(), "xx_XX", "pt_BR").unwrap();
        assert_eq!(language.code(), "pt_BR");
    }

    #[test]
    fn load_for_code_without_any_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            load_for_code(dir.path(), "xx_XX", "pt_BR"),
            Err(Error::LanguageLoad { .. })
        ));
    }

    #[test]
    fn load_for_code_missing_word_list_fails() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "pt_BR.json", PT_BR);

        assert!(matches!(
            load_for_code(dir.path(), "pt_BR", "pt_BR"),
            Err(Error::LanguageLoad { .. })
        ));
    }

    #[test]
    fn load_for_code_empty_word_list_fails() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "pt_BR.json", PT_BR);
        write(dir.path(), "dictionary/pt_BR.txt", "toolongword\n");

        assert!(matches!(
            load_for_code(dir.path(), "pt_BR", "pt_BR"),
            Err(Error::EmptyDictionary(code)) if code == "pt_BR"
        ));
    }
}
