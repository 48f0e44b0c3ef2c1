use tracing::{info, warn};

use super::{LanguageSource, TermStore};
use crate::error::{LoaderError, Result};

/// Owns every registered language source and the active language.
///
/// Imports and exports go to the first registered source.
#[derive(Debug, Default)]
pub struct LocalizationManager {
    sources: Vec<LanguageSource>,
    current_language: Option<String>,
}

impl LocalizationManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_source(&mut self, source: LanguageSource) {
        info!(source = source.name(), languages = source.languages().len(), "registered language source");
        self.sources.push(source);
    }

    pub fn sources(&self) -> &[LanguageSource] {
        &self.sources
    }

    pub fn has_sources(&self) -> bool {
        !self.sources.is_empty()
    }

    pub fn primary(&self) -> Option<&LanguageSource> {
        self.sources.first()
    }

    pub fn primary_mut(&mut self) -> Option<&mut LanguageSource> {
        self.sources.first_mut()
    }

    /// Names of all languages across all sources, in source order.
    pub fn current_languages(&self) -> Vec<String> {
        if self.sources.is_empty() {
            info!("no language sources found");
            return Vec::new();
        }

        self.sources
            .iter()
            .flat_map(|s| s.languages().iter().map(|l| l.name.clone()))
            .collect()
    }

    pub fn has_language(&self, name: &str) -> bool {
        self.sources.iter().any(|s| s.language_index(name).is_some())
    }

    pub fn current_language(&self) -> Option<&str> {
        self.current_language.as_deref()
    }

    pub fn set_current_language(&mut self, name: &str) -> Result<()> {
        if !self.has_language(name) {
            warn!(language = name, "language not found");
            return Err(LoaderError::language_not_found(name));
        }

        self.current_language = Some(name.to_string());
        info!(language = name, "set current language");
        Ok(())
    }

    /// Resolves a key in the current language, first source that has it wins.
    pub fn translate(&self, key: &str) -> Option<&str> {
        let language = self.current_language.as_deref()?;
        self.sources.iter().find_map(|s| s.lookup(key, language))
    }
}
