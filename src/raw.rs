//! Helpers for surveys handled as raw JSON.
//!
//! Stored surveys carry more keys than the typed model declares (triggers,
//! styling, image URLs, ...). Translation runs on the typed model and its
//! output is written back over a copy of the stored JSON, so undeclared keys
//! survive at the survey, question, choice and card levels.

use serde_json::Value;

pub(crate) fn survey_id(survey: &Value) -> String {
    survey
        .get("id")
        .and_then(Value::as_str)
        .unwrap_or("<unknown>")
        .to_string()
}

/// Write `translated` over a copy of `original`.
pub(crate) fn overlay_survey(original: &Value, translated: Value) -> Value {
    let mut merged = original.clone();
    overlay(&mut merged, translated, Level::Survey);
    merged
}

/// Position in the survey object graph.
#[derive(Debug, Clone, Copy)]
enum Level {
    Survey,
    Question,
    Item,
}

impl Level {
    /// Level reached through `key`, if that key holds nested survey objects.
    ///
    /// Every other key is replaced wholesale, so languages dropped from a
    /// localized field stay dropped.
    fn child(self, key: &str) -> Option<Level> {
        match (self, key) {
            (Level::Survey, "questions") => Some(Level::Question),
            (Level::Survey, "welcomeCard" | "thankYouCard") => Some(Level::Item),
            (Level::Question, "choices") => Some(Level::Item),
            _ => None,
        }
    }
}

fn overlay(target: &mut Value, source: Value, level: Level) {
    match (target, source) {
        (Value::Object(target), Value::Object(source)) => {
            for (key, value) in source {
                match (level.child(&key), target.get_mut(&key)) {
                    (Some(child), Some(existing)) => overlay(existing, value, child),
                    _ => {
                        target.insert(key, value);
                    }
                }
            }
        }
        (Value::Array(target), Value::Array(source)) if target.len() == source.len() => {
            for (existing, value) in target.iter_mut().zip(source) {
                overlay(existing, value, level);
            }
        }
        (target, source) => *target = source,
    }
}
