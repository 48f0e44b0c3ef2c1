//! Term storage: the abstraction the importer and exporter work against, an
//! in-memory source implementing it, and the manager that owns all sources.

mod manager;
mod source;

pub use manager::LocalizationManager;
pub use source::LanguageSource;

use crate::model::language::Language;
use crate::model::term::{Term, TermType};

/// Operations the loader needs from a term table.
///
/// Implementations keep every term's translation array as long as the
/// language list.
pub trait TermStore {
    fn languages(&self) -> &[Language];

    fn terms(&self) -> &[Term];

    /// Exact, case-sensitive lookup by language name.
    fn language_index(&self, name: &str) -> Option<usize>;

    /// Appends a language and grows every term. Returns the new index.
    fn add_language(&mut self, name: &str) -> usize;

    /// Exact lookup by term key.
    fn term_index(&self, key: &str) -> Option<usize>;

    /// Appends a term sized to the current language count. Returns its index.
    fn add_term(&mut self, key: &str, term_type: TermType) -> usize;

    fn set_translation(&mut self, term: usize, language: usize, translation: String);

    /// Refreshes the key lookup index used for translation queries.
    fn rebuild_index(&mut self);

    fn get_or_create_language(&mut self, name: &str) -> usize {
        match self.language_index(name) {
            Some(index) => index,
            None => self.add_language(name),
        }
    }

    fn get_or_create_term(&mut self, key: &str) -> usize {
        match self.term_index(key) {
            Some(index) => index,
            None => self.add_term(key, TermType::Text),
        }
    }

    fn term(&self, key: &str) -> Option<&Term> {
        self.term_index(key).map(|i| &self.terms()[i])
    }

    fn language_names(&self) -> Vec<String> {
        self.languages().iter().map(|l| l.name.clone()).collect()
    }
}
