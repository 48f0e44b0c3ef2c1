/// Hidden from the language selector in every case.
const SENTINEL: &str = "Arabic";

/// Hidden only when they are listed before the sentinel.
const HIDDEN_WHEN_BEFORE_SENTINEL: [&str; 2] = ["German", "French"];

/// Builds the list shown in the settings language selector.
pub fn curate_languages(mut languages: Vec<String>) -> Vec<String> {
    if let Some(sentinel) = position(&languages, SENTINEL) {
        if sentinel > 0 {
            let mut doomed: Vec<usize> = HIDDEN_WHEN_BEFORE_SENTINEL
                .iter()
                .filter_map(|name| position(&languages, name))
                .filter(|&i| i < sentinel)
                .collect();

            // later entries first so earlier indices stay valid
            doomed.sort_unstable_by(|a, b| b.cmp(a));
            for i in doomed {
                languages.remove(i);
            }
        }
    }

    if let Some(i) = position(&languages, SENTINEL) {
        languages.remove(i);
    }

    languages
}

fn position(languages: &[String], name: &str) -> Option<usize> {
    languages.iter().position(|l| l == name)
}
