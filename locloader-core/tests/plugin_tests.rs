//! Reload, export and display flows through the plugin facade

use locloader_core::error::LoaderError;
use locloader_core::store::{LanguageSource, LocalizationManager, TermStore};
use locloader_core::{Action, Config, LanguageDisplay, Outcome, Plugin};
use pretty_assertions::assert_eq;
use std::cell::RefCell;
use std::fs;
use std::rc::Rc;
use tempfile::TempDir;

#[derive(Clone, Default)]
struct RecordingDisplay {
    shown: Rc<RefCell<Vec<Vec<String>>>>,
}

impl LanguageDisplay for RecordingDisplay {
    fn set_available_languages(&mut self, languages: Vec<String>) {
        self.shown.borrow_mut().push(languages);
    }
}

fn plugin_in(dir: &TempDir) -> Plugin {
    let mut manager = LocalizationManager::new();
    let mut source = LanguageSource::with_languages("game", ["English", "German", "French", "Arabic"]);
    for (key, english) in [("Greeting", "Hi"), ("DemoOnly", "x"), ("Farewell", "Bye, then")] {
        let term = source.get_or_create_term(key);
        source.set_translation(term, 0, english.to_string());
    }
    source.rebuild_index();
    manager.register_source(source);

    Plugin::with_manager(Config::with_root(dir.path()), manager)
}

#[test]
fn test_initialize_creates_language_dir_and_reloads() {
    let dir = TempDir::new().unwrap();
    let mut plugin = plugin_in(&dir);

    let report = plugin.initialize().unwrap();

    assert!(dir.path().join("i18n").is_dir());
    assert!(report.imported.is_empty());
    assert_eq!(report.languages, vec!["English", "German", "French", "Arabic"]);
}

#[test]
fn test_initialize_before_host_sources_is_rejected() {
    let dir = TempDir::new().unwrap();
    let mut plugin = Plugin::new(Config::with_root(dir.path()));
    assert!(matches!(plugin.initialize(), Err(LoaderError::HostNotReady)));
}

#[test]
fn test_reload_without_language_dir_fails_but_refreshes_display() {
    let dir = TempDir::new().unwrap();
    let display = RecordingDisplay::default();
    let mut plugin = plugin_in(&dir);
    plugin.attach_display(Box::new(display.clone()));

    assert!(matches!(
        plugin.dispatch(Action::Reload),
        Err(LoaderError::MissingResource { .. })
    ));
    assert_eq!(*display.shown.borrow(), vec![vec!["English".to_string()]]);
}

#[test]
fn test_reload_without_sources_skips_every_file() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("i18n")).unwrap();
    fs::write(dir.path().join("i18n/es.csv"), "Key,Spanish\nGreeting,Hola\n").unwrap();

    let mut plugin = Plugin::new(Config::with_root(dir.path()));
    let report = plugin.reload().unwrap();

    assert!(report.imported.is_empty());
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].file, "es.csv");
    assert_eq!(report.failed[0].message, LoaderError::NoSources.to_string());
    assert!(report.languages.is_empty());
    assert!(!plugin.manager().has_language("Spanish"));
}

#[test]
fn test_export_without_sources_writes_empty_file() {
    let dir = TempDir::new().unwrap();
    let plugin = Plugin::new(Config::with_root(dir.path()));

    let summary = plugin.export_english().unwrap();

    assert_eq!(summary.terms, 0);
    assert_eq!(fs::read_to_string(&summary.path).unwrap(), "");
}

#[test]
fn test_export_counts_terms_not_lines() {
    let dir = TempDir::new().unwrap();
    let mut manager = LocalizationManager::new();
    let mut source = LanguageSource::with_languages("game", ["English"]);
    let term = source.get_or_create_term("Intro");
    source.set_translation(term, 0, "Line one\nLine two".to_string());
    manager.register_source(source);
    let plugin = Plugin::with_manager(Config::with_root(dir.path()), manager);

    let summary = plugin.export_english().unwrap();

    assert_eq!(summary.terms, 1);
}

#[test]
fn test_reload_continues_past_broken_files_in_name_order() {
    let dir = TempDir::new().unwrap();
    let i18n = dir.path().join("i18n");
    fs::create_dir_all(i18n.join("drafts")).unwrap();
    fs::write(i18n.join("a_spanish.csv"), "Key,Spanish\nGreeting,Hola\n").unwrap();
    fs::write(i18n.join("b_broken.csv"), "Name,Spanish\nGreeting,Oops\n").unwrap();
    fs::write(i18n.join("c_spanish.csv"), "Key,Spanish\nGreeting,Buenas\n").unwrap();
    fs::write(i18n.join("readme.txt"), "Key,Dutch\nGreeting,Hoi\n").unwrap();
    fs::write(i18n.join("drafts/d.csv"), "Key,Polish\nGreeting,Cześć\n").unwrap();

    let mut plugin = plugin_in(&dir);
    let report = match plugin.dispatch(Action::Reload).unwrap() {
        Outcome::Reloaded(report) => report,
        other => panic!("unexpected outcome {other:?}"),
    };

    let imported: Vec<_> = report.imported.iter().map(|f| f.file.as_str()).collect();
    assert_eq!(imported, vec!["a_spanish.csv", "c_spanish.csv"]);
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].file, "b_broken.csv");

    plugin.dispatch(Action::SetLanguage("Spanish".into())).unwrap();
    assert_eq!(plugin.translate("Greeting"), Some("Buenas"));
    assert!(!plugin.manager().has_language("Dutch"));
    assert!(!plugin.manager().has_language("Polish"));
}

#[test]
fn test_reload_pushes_curated_list_to_display() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("i18n")).unwrap();
    fs::write(dir.path().join("i18n/es.csv"), "Key,Spanish\nGreeting,Hola\n").unwrap();

    let display = RecordingDisplay::default();
    let mut plugin = plugin_in(&dir);
    plugin.attach_display(Box::new(display.clone()));

    plugin.reload().unwrap();

    assert_eq!(*display.shown.borrow(), vec![vec!["English".to_string(), "Spanish".to_string()]]);
}

#[test]
fn test_export_english_skips_demo_and_quotes() {
    let dir = TempDir::new().unwrap();
    let plugin = plugin_in(&dir);

    let summary = plugin.export_english().unwrap();

    assert_eq!(summary.path, dir.path().join("EnglishTerms.csv"));
    assert_eq!(summary.terms, 2);
    assert_eq!(
        fs::read_to_string(&summary.path).unwrap(),
        "Key,English\nGreeting,Hi\nFarewell,\"Bye, then\"\n"
    );
}

#[test]
fn test_export_without_english_writes_empty_file() {
    let dir = TempDir::new().unwrap();
    let mut manager = LocalizationManager::new();
    manager.register_source(LanguageSource::with_languages("game", ["French"]));
    let plugin = Plugin::with_manager(Config::with_root(dir.path()), manager);

    let summary = plugin.export_english().unwrap();

    assert_eq!(summary.terms, 0);
    assert_eq!(fs::read_to_string(&summary.path).unwrap(), "");
}

#[test]
fn test_list_and_curated_languages() {
    let dir = TempDir::new().unwrap();
    let mut plugin = plugin_in(&dir);

    let all = plugin.dispatch(Action::ListLanguages).unwrap();
    assert_eq!(
        all,
        Outcome::Languages {
            languages: vec!["English".into(), "German".into(), "French".into(), "Arabic".into()]
        }
    );

    let curated = plugin.dispatch(Action::CuratedLanguages).unwrap();
    assert_eq!(curated, Outcome::Languages { languages: vec!["English".into()] });
    assert_eq!(plugin.term_count(), 3);
}
