use serde_json::{json, Value};

use crate::model::term::Term;
use crate::plugin::{Action, Outcome, Plugin};
use crate::store::{LanguageSource, TermStore};

mod command;
use command::Command;

fn get_cmd(req: &Value) -> &str {
    req.get("cmd").and_then(|v| v.as_str()).unwrap_or("")
}

fn get_id(req: &Value) -> Value {
    req.get("id").cloned().unwrap_or(Value::Null)
}

fn get_payload<'a>(req: &'a Value) -> &'a Value {
    static EMPTY: Value = Value::Null;
    req.get("payload").unwrap_or(&EMPTY)
}

fn ok(id: Value, payload: Value) -> String {
    json!({
        "id": id,
        "status": "ok",
        "payload": payload
    })
    .to_string()
}

fn err(id: Value, message: impl Into<String>) -> String {
    json!({
        "id": id,
        "status": "error",
        "message": message.into()
    })
    .to_string()
}

fn source_from_payload(payload: &Value) -> Result<LanguageSource, String> {
    let name = payload.get("name").and_then(|v| v.as_str()).unwrap_or("");
    if name.is_empty() {
        return Err("payload.name is required".to_string());
    }

    let languages: Vec<String> = match payload.get("languages") {
        None | Some(Value::Null) => Vec::new(),
        Some(v) => serde_json::from_value(v.clone())
            .map_err(|e| format!("invalid payload.languages: {e}"))?,
    };

    let terms: Vec<Term> = match payload.get("terms") {
        None | Some(Value::Null) => Vec::new(),
        Some(v) => {
            serde_json::from_value(v.clone()).map_err(|e| format!("invalid payload.terms: {e}"))?
        }
    };

    let mut source = LanguageSource::with_languages(name, &languages);
    for term in terms {
        let index = match source.term_index(&term.key) {
            Some(i) => i,
            None => source.add_term(&term.key, term.term_type),
        };
        for (language, translation) in term.translations.into_iter().enumerate() {
            if let Some(translation) = translation {
                source.set_translation(index, language, translation);
            }
        }
    }
    source.rebuild_index();

    Ok(source)
}

fn run(id: Value, plugin: &mut Plugin, action: Action) -> String {
    match plugin.dispatch(action) {
        Ok(Outcome::Languages { languages }) => ok(id, json!({ "languages": languages })),
        Ok(outcome) => ok(id, serde_json::to_value(outcome).unwrap_or(json!({}))),
        Err(e) => err(id, e.to_string()),
    }
}

pub fn handle(plugin: &mut Plugin, input: &str) -> String {
    let req: Value = match serde_json::from_str(input) {
        Ok(v) => v,
        Err(_) => {
            return json!({
                "status": "error",
                "message": "invalid json"
            })
            .to_string();
        }
    };

    let id = get_id(&req);
    let payload = get_payload(&req);

    match Command::from(get_cmd(&req)) {
        Command::Ping => ok(id, json!({ "message": "locloader-core alive" })),

        Command::RegisterSource => match source_from_payload(payload) {
            Ok(source) => {
                let name = source.name().to_string();
                let terms = source.terms().len();
                plugin.manager_mut().register_source(source);
                ok(id, json!({ "source": name, "terms": terms }))
            }
            Err(e) => err(id, e),
        },

        Command::Initialize => run(id, plugin, Action::Initialize),
        Command::Reload => run(id, plugin, Action::Reload),
        Command::ExportEnglish => run(id, plugin, Action::ExportEnglish),
        Command::ListLanguages => run(id, plugin, Action::ListLanguages),
        Command::CuratedLanguages => run(id, plugin, Action::CuratedLanguages),

        Command::SetLanguage => {
            let language = payload.get("language").and_then(|v| v.as_str()).unwrap_or("");
            if language.is_empty() {
                return err(id, "payload.language is required");
            }
            run(id, plugin, Action::SetLanguage(language.to_string()))
        }

        Command::Translate => {
            let key = payload.get("key").and_then(|v| v.as_str()).unwrap_or("");
            if key.is_empty() {
                return err(id, "payload.key is required");
            }
            ok(id, json!({ "key": key, "text": plugin.translate(key) }))
        }

        Command::Unknown => err(id, "unknown command"),
    }
}
