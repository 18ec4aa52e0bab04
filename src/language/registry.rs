//! Process-wide language cache
//!
//! Languages are loaded once at startup and shared read-only between sessions.

use super::{Language, loader};
use crate::error::Result;
use rustc_hash::FxHashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

/// Every loaded language, keyed by code
#[derive(Debug, Clone)]
pub struct LanguageRegistry {
    default: Arc<Language>,
    languages: FxHashMap<String, Arc<Language>>,
}

impl LanguageRegistry {
    /// Build a registry from already loaded languages
    #[must_use]
    pub fn new(default: Language, others: impl IntoIterator<Item = Language>) -> Self {
        let default = Arc::new(default);

        let mut languages = FxHashMap::default();
        languages.insert(default.code().to_string(), Arc::clone(&default));
        for language in others {
            languages
                .entry(language.code().to_string())
                .or_insert_with(|| Arc::new(language));
        }

        Self { default, languages }
    }

    /// Load the default language and every other language file in `dir`
    ///
    /// The default language is required; other files that fail to load are
    /// skipped with a warning.
    ///
    /// # Errors
    /// Returns an error if the default language cannot be loaded.
    pub fn load(dir: &Path, default_code: &str) -> Result<Self> {
        let default = loader::load_for_code(dir, default_code, default_code)?;

        let mut others = Vec::new();
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();

            let is_language_file = path.is_file()
                && path.extension().is_some_and(|ext| ext == "json")
                && path.file_stem().is_some_and(|stem| stem != default_code);

            if !is_language_file {
                continue;
            }

            match loader::load_language_file(&path) {
                Ok(language) => others.push(language),
                Err(e) => warn!("skipping language file {}: {e}", path.display()),
            }
        }

        let registry = Self::new(default, others);
        info!(
            "loaded {} language(s), default is {}",
            registry.languages.len(),
            registry.default.code()
        );

        Ok(registry)
    }

    /// The language for `code`, or the default one if it is unknown
    #[must_use]
    pub fn get(&self, code: &str) -> Arc<Language> {
        self.languages
            .get(code)
            .map_or_else(|| Arc::clone(&self.default), Arc::clone)
    }

    #[must_use]
    pub fn default_language(&self) -> Arc<Language> {
        Arc::clone(&self.default)
    }

    #[must_use]
    pub fn default_code(&self) -> &str {
        self.default.code()
    }

    /// Every language ordered by code
    #[must_use]
    pub fn languages(&self) -> Vec<Arc<Language>> {
        let mut languages: Vec<_> = self.languages.values().cloned().collect();
        languages.sort_by(|a, b| a.code().cmp(b.code()));
        languages
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.languages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::fixtures;

    #[test]
    fn get_falls_back_to_default() {
        let registry = LanguageRegistry::new(fixtures::portuguese(), [fixtures::english()]);

        assert_eq!(registry.get("en_US").code(), "en_US");
        assert_eq!(registry.get("").code(), "pt_BR");
        assert_eq!(registry.get("xx_XX").code(), "pt_BR");
        assert_eq!(registry.default_code(), "pt_BR");
    }

    #[test]
    fn languages_are_sorted_by_code() {
        let registry = LanguageRegistry::new(fixtures::portuguese(), [fixtures::english()]);
        let codes: Vec<_> = registry
            .languages()
            .iter()
            .map(|l| l.code().to_string())
            .collect();

        assert_eq!(codes, ["en_US", "pt_BR"]);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn duplicate_codes_keep_the_first() {
        let registry = LanguageRegistry::new(fixtures::english(), [fixtures::english()]);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn load_reads_every_language_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("dictionary")).unwrap();
        fs::write(dir.path().join("dictionary/words.txt"), "amigo\n").unwrap();
        for code in ["pt_BR", "en_US"] {
            fs::write(
                dir.path().join(format!("{code}.json")),
                format!(r#"{{"id": "{code}", "name": "{code}", "words": "dictionary/words.txt"}}"#),
            )
            .unwrap();
        }
        fs::write(dir.path().join("broken.json"), "not json").unwrap();

        let registry = LanguageRegistry::load(dir.path(), "pt_BR").unwrap();
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get("en_US").code(), "en_US");
    }

    #[test]
    fn load_without_default_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(LanguageRegistry::load(dir.path(), "pt_BR").is_err());
    }
}
