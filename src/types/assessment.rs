//! Configuration document consumed by the generic scoring engine.
//!
//! Wire names are camelCase so documents authored for the web collaborators
//! parse without translation.

use crate::types::scoring::{Level, Thresholds};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

/// Question id -> selected option letter. Partial completion is legal.
pub type Responses = IndexMap<String, String>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentDocument {
    pub questions: Vec<Question>,
    #[serde(default)]
    pub assessment_metadata: AssessmentMetadata,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentMetadata {
    #[serde(default)]
    pub scoring_dimensions: Vec<ScoringDimension>,
    #[serde(default)]
    pub result_profiles: Vec<ResultProfile>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default)]
    pub options: Vec<AnswerOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scoring_logic: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScoringLogic {
    Sum,
    Unrecognized(String),
}

impl Question {
    pub fn logic(&self) -> ScoringLogic {
        match self.scoring_logic.as_deref().map(str::trim) {
            None | Some("") => ScoringLogic::Sum,
            Some(tag) if tag.eq_ignore_ascii_case("sum") => ScoringLogic::Sum,
            Some(other) => ScoringLogic::Unrecognized(other.to_string()),
        }
    }

    /// Exact letter match first, then a case-insensitive pass.
    pub fn find_option(&self, selected: &str) -> Option<&AnswerOption> {
        let selected = selected.trim();
        self.options
            .iter()
            .find(|option| option.letter == selected)
            .or_else(|| {
                self.options
                    .iter()
                    .find(|option| option.letter.eq_ignore_ascii_case(selected))
            })
    }

    pub fn max_option_score(&self) -> Option<i64> {
        self.options.iter().map(|option| option.score).max()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    #[serde(alias = "key")]
    pub letter: String,
    pub score: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringDimension {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub thresholds: Thresholds,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultProfile {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub conditions: IndexMap<String, LevelCondition>,
}

/// Required level for one dimension: `"high"` or a hyphenated OR-set such as `"low-medium"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LevelCondition(String);

impl LevelCondition {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn accepts(&self, level: Level) -> bool {
        let actual = level.as_str();
        if self.0 == actual {
            return true;
        }
        self.0.contains('-') && self.0.split('-').any(|token| token == actual)
    }

    pub fn unknown_tokens(&self) -> Vec<&str> {
        self.0
            .split('-')
            .filter(|token| Level::parse(token).is_none())
            .collect()
    }
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(text) => text,
        RawId::Number(number) => number.to_string(),
    })
}
