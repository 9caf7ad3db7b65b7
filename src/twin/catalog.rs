use crate::error::{AssessorError, Result};
use crate::twin::scale::scale_score;
use crate::types::twin::{TwinInsight, TwinQuestion};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

pub const QUESTION_COUNT: u8 = 10;

const STANDARD_CATALOG: &str = include_str!("../../data/digital_twin.toml");

/// Read-only question metadata and `(question, option)` insights.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TwinCatalog {
    pub questions: Vec<TwinQuestion>,
    #[serde(default)]
    pub insights: Vec<TwinInsight>,
}

impl TwinCatalog {
    pub fn standard() -> Result<Self> {
        Self::from_toml_str(STANDARD_CATALOG)
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(AssessorError::PathNotFound(path.display().to_string()));
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let mut catalog: TwinCatalog = toml::from_str(raw)
            .map_err(|e| AssessorError::DocumentParse(format!("twin catalog: {e}")))?;
        catalog.questions.sort_by_key(|question| question.id);
        for insight in &mut catalog.insights {
            insight.option = insight.option.trim().to_ascii_lowercase();
        }
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn validate(&self) -> Result<()> {
        let ids = self
            .questions
            .iter()
            .map(|question| question.id)
            .collect::<Vec<_>>();
        let expected = (1..=QUESTION_COUNT).collect::<Vec<_>>();
        if ids != expected {
            return Err(AssessorError::DocumentParse(format!(
                "twin catalog must define questions 1..={QUESTION_COUNT} exactly once (found {ids:?})"
            )));
        }

        let mut seen = HashSet::new();
        for insight in &self.insights {
            if !(1..=QUESTION_COUNT).contains(&insight.question) {
                return Err(AssessorError::DocumentParse(format!(
                    "twin insight references unknown question {}",
                    insight.question
                )));
            }
            if scale_score(&insight.option).is_none() {
                return Err(AssessorError::DocumentParse(format!(
                    "twin insight for question {} uses option '{}' outside a..=j",
                    insight.question, insight.option
                )));
            }
            if !seen.insert((insight.question, insight.option.as_str())) {
                return Err(AssessorError::DocumentParse(format!(
                    "duplicate twin insight for question {} option '{}'",
                    insight.question, insight.option
                )));
            }
        }

        Ok(())
    }

    pub fn insight(&self, question: u8, option: &str) -> Option<&TwinInsight> {
        self.insights
            .iter()
            .find(|insight| insight.question == question && insight.option == option)
    }
}
