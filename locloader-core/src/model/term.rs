use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Term {
    pub key: String,

    #[serde(default)]
    pub term_type: TermType,

    /// One slot per language, indexed parallel to the source's language list
    #[serde(default)]
    pub translations: Vec<Option<String>>,
}

impl Term {
    pub fn new(key: impl Into<String>, term_type: TermType, language_count: usize) -> Self {
        Self {
            key: key.into(),
            term_type,
            translations: vec![None; language_count],
        }
    }

    pub fn translation(&self, language_index: usize) -> Option<&str> {
        self.translations
            .get(language_index)
            .and_then(|slot| slot.as_deref())
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TermType {
    Text,
    Font,
    Texture,
    AudioClip,
    Sprite,
}

impl Default for TermType {
    fn default() -> Self {
        TermType::Text
    }
}
