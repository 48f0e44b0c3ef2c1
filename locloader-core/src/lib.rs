//! Loads CSV translation files into a localization store and curates the
//! language list shown by the host's settings screen.

pub mod config;
pub mod error;
pub mod model;
pub mod parsers;
pub mod plugin;
pub mod protocol;
pub mod services;
pub mod store;

pub use config::Config;
pub use error::{LoaderError, Result};
pub use plugin::{Action, LanguageDisplay, Outcome, Plugin};
