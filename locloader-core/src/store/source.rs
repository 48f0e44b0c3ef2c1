use std::collections::HashMap;

use tracing::debug;

use super::TermStore;
use crate::model::language::Language;
use crate::model::term::{Term, TermType};

/// A named collection of languages and terms.
///
/// Keeps two maps from key to position: `positions` is maintained on every
/// insert and serves writers, `dictionary` serves translation lookups and is
/// only refreshed by [`TermStore::rebuild_index`].
#[derive(Debug, Clone, Default)]
pub struct LanguageSource {
    name: String,
    languages: Vec<Language>,
    terms: Vec<Term>,
    positions: HashMap<String, usize>,
    dictionary: HashMap<String, usize>,
}

impl LanguageSource {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Creates a source that already knows the given languages.
    pub fn with_languages<I, S>(name: impl Into<String>, languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut source = Self::new(name);
        for language in languages {
            source.add_language(language.as_ref());
        }
        source
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Resolves a key through the lookup index.
    ///
    /// Terms added since the last index rebuild are not visible here.
    pub fn lookup(&self, key: &str, language: &str) -> Option<&str> {
        let language = self.language_index(language)?;
        let term = self.dictionary.get(key).and_then(|&i| self.terms.get(i))?;
        term.translation(language)
    }
}

impl TermStore for LanguageSource {
    fn languages(&self) -> &[Language] {
        &self.languages
    }

    fn terms(&self) -> &[Term] {
        &self.terms
    }

    fn language_index(&self, name: &str) -> Option<usize> {
        self.languages.iter().position(|l| l.name == name)
    }

    fn add_language(&mut self, name: &str) -> usize {
        self.languages.push(Language::new(name));
        let count = self.languages.len();

        for term in self.terms.iter_mut() {
            term.translations.resize(count, None);
        }

        debug!(source = %self.name, language = name, "added language");
        count - 1
    }

    fn term_index(&self, key: &str) -> Option<usize> {
        self.positions.get(key).copied()
    }

    fn add_term(&mut self, key: &str, term_type: TermType) -> usize {
        let index = self.terms.len();
        self.terms
            .push(Term::new(key, term_type, self.languages.len()));
        self.positions.insert(key.to_string(), index);
        index
    }

    fn set_translation(&mut self, term: usize, language: usize, translation: String) {
        if let Some(slot) = self
            .terms
            .get_mut(term)
            .and_then(|t| t.translations.get_mut(language))
        {
            *slot = Some(translation);
        }
    }

    fn rebuild_index(&mut self) {
        self.dictionary = self
            .terms
            .iter()
            .enumerate()
            .map(|(i, t)| (t.key.clone(), i))
            .collect();
    }
}
