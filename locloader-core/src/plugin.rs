use std::path::PathBuf;

use serde::Serialize;
use tracing::{info, warn};

use crate::config::Config;
use crate::error::{LoaderError, Result};
use crate::services::reload::{self, ReloadReport};
use crate::services::{curator, exporter, files};
use crate::store::{LocalizationManager, TermStore};

/// Settings surface that shows the selectable languages.
pub trait LanguageDisplay {
    fn set_available_languages(&mut self, languages: Vec<String>);
}

/// User or host requests the loader can act on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Host sources are registered; prepare the language folder and load it
    Initialize,
    Reload,
    ExportEnglish,
    SetLanguage(String),
    ListLanguages,
    CuratedLanguages,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub path: PathBuf,
    pub terms: usize,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    Reloaded(ReloadReport),
    Exported(ExportSummary),
    LanguageSet { language: String },
    Languages { languages: Vec<String> },
}

pub struct Plugin {
    config: Config,
    manager: LocalizationManager,
    display: Option<Box<dyn LanguageDisplay>>,
}

impl Plugin {
    pub fn new(config: Config) -> Self {
        Self::with_manager(config, LocalizationManager::new())
    }

    pub fn with_manager(config: Config, manager: LocalizationManager) -> Self {
        Self {
            config,
            manager,
            display: None,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn manager(&self) -> &LocalizationManager {
        &self.manager
    }

    pub fn manager_mut(&mut self) -> &mut LocalizationManager {
        &mut self.manager
    }

    /// Every reload pushes the curated list to this display.
    pub fn attach_display(&mut self, display: Box<dyn LanguageDisplay>) {
        self.display = Some(display);
    }

    pub fn dispatch(&mut self, action: Action) -> Result<Outcome> {
        match action {
            Action::Initialize => self.initialize().map(Outcome::Reloaded),
            Action::Reload => self.reload().map(Outcome::Reloaded),
            Action::ExportEnglish => self.export_english().map(Outcome::Exported),
            Action::SetLanguage(language) => {
                self.manager.set_current_language(&language)?;
                Ok(Outcome::LanguageSet { language })
            }
            Action::ListLanguages => Ok(Outcome::Languages {
                languages: self.manager.current_languages(),
            }),
            Action::CuratedLanguages => Ok(Outcome::Languages {
                languages: self.curated_languages(),
            }),
        }
    }

    /// Runs once the host has registered its own language sources.
    pub fn initialize(&mut self) -> Result<ReloadReport> {
        if !self.manager.has_sources() {
            return Err(LoaderError::HostNotReady);
        }

        files::ensure_dir(&self.config.language_dir)?;
        self.reload()
    }

    /// Imports the language directory and refreshes the attached display.
    ///
    /// The display is refreshed even when the directory cannot be read, since
    /// the host languages are still valid.
    pub fn reload(&mut self) -> Result<ReloadReport> {
        let result = reload::reload_language_files(&mut self.manager, &self.config.language_dir);
        if let Err(e) = &result {
            warn!(dir = %self.config.language_dir.display(), "reload failed: {e}");
        }

        if let Some(mut display) = self.display.take() {
            self.refresh_display(display.as_mut());
            self.display = Some(display);
        }

        result
    }

    /// Writes the English terms of the primary source to the export file.
    ///
    /// Without a source or an English language the file is still written,
    /// empty.
    pub fn export_english(&self) -> Result<ExportSummary> {
        let (csv, terms) = match self.manager.primary() {
            Some(source) => exporter::english_terms_export(source),
            None => {
                warn!("{}", LoaderError::NoSources);
                (String::new(), 0)
            }
        };

        files::write_atomic(&self.config.export_file, csv.as_bytes())?;
        info!(file = %self.config.export_file.display(), terms, "exported english terms");

        Ok(ExportSummary {
            path: self.config.export_file.clone(),
            terms,
        })
    }

    pub fn curated_languages(&self) -> Vec<String> {
        curator::curate_languages(self.manager.current_languages())
    }

    pub fn refresh_display(&self, display: &mut dyn LanguageDisplay) {
        display.set_available_languages(self.curated_languages());
    }

    pub fn translate(&self, key: &str) -> Option<&str> {
        self.manager.translate(key)
    }

    pub fn term_count(&self) -> usize {
        self.manager.primary().map(|s| s.terms().len()).unwrap_or(0)
    }
}
