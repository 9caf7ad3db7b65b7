use crate::error::{AssessorError, Result};
use crate::types::assessment::{AssessmentDocument, Responses};
use indexmap::IndexMap;
use serde_json::Value;
use std::fs;
use std::path::Path;

fn read_existing(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(AssessorError::PathNotFound(path.display().to_string()));
    }
    Ok(fs::read_to_string(path)?)
}

fn is_toml(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"))
}

/// Loads a document as TOML when the extension says so, JSON otherwise.
pub fn load_document(path: &Path) -> Result<AssessmentDocument> {
    let content = read_existing(path)?;
    let parsed: std::result::Result<AssessmentDocument, String> = if is_toml(path) {
        toml::from_str(&content).map_err(|e| e.to_string())
    } else {
        serde_json::from_str(&content).map_err(|e| e.to_string())
    };
    parsed.map_err(|e| AssessorError::DocumentParse(format!("{}: {e}", path.display())))
}

pub fn load_responses(path: &Path) -> Result<Responses> {
    let content = read_existing(path)?;
    parse_responses(&content)
        .map_err(|e| AssessorError::DocumentParse(format!("{}: {e}", path.display())))
}

/// Accepts `{"id": "letter"}` objects in file order; numeric answers are
/// stringified and nulls skipped.
pub fn parse_responses(raw: &str) -> std::result::Result<Responses, String> {
    let entries: IndexMap<String, Value> = serde_json::from_str(raw)
        .map_err(|e| format!("responses must be a JSON object of question id to answer ({e})"))?;

    let mut responses = Responses::with_capacity(entries.len());
    for (id, answer) in entries {
        let answer = match answer {
            Value::String(text) => text,
            Value::Number(number) => number.to_string(),
            Value::Null => continue,
            other => return Err(format!("answer for '{id}' must be a string, got {other}")),
        };
        responses.insert(id, answer);
    }
    Ok(responses)
}
