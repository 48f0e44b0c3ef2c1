#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Ping,
    RegisterSource,
    Initialize,
    Reload,
    ExportEnglish,
    ListLanguages,
    CuratedLanguages,
    SetLanguage,
    Translate,
    Unknown,
}

impl From<&str> for Command {
    fn from(s: &str) -> Self {
        match s {
            "ping" => Command::Ping,
            "source.register" => Command::RegisterSource,
            "initialize" => Command::Initialize,
            "reload" => Command::Reload,
            "export_english" => Command::ExportEnglish,
            "languages.list" => Command::ListLanguages,
            "languages.curated" => Command::CuratedLanguages,
            "language.set" => Command::SetLanguage,
            "translate" => Command::Translate,
            _ => Command::Unknown,
        }
    }
}
