use crate::types::assessment::ResultProfile;
use crate::types::scoring::Level;
use indexmap::IndexMap;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionScore {
    pub raw_score: i64,
    pub max_possible_score: i64,
    pub percentage_score: u32,
    pub level: Level,
    pub dimension_name: String,
    pub dimension_description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationKind {
    Dimension,
    Profile,
    General,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: RecommendationKind,
    pub title: String,
    pub description: String,
    pub priority: Priority,
}

impl Recommendation {
    pub fn new(
        id: &str,
        kind: RecommendationKind,
        title: &str,
        description: &str,
        priority: Priority,
    ) -> Self {
        Self {
            id: id.to_string(),
            kind,
            title: title.to_string(),
            description: description.to_string(),
            priority,
        }
    }
}

/// Everything computed from one `(document, responses)` pair before summarising.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentScores {
    pub dimension_scores: IndexMap<String, DimensionScore>,
    pub all_matching_profiles: Vec<ResultProfile>,
    pub primary_profile: Option<ResultProfile>,
    pub recommendations: Vec<Recommendation>,
    pub answered_count: usize,
    pub total_questions: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionHighlight {
    pub dimension: String,
    pub dimension_name: String,
    pub percentage_score: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchedProfile {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryReport {
    pub summary: String,
    pub profile_name: String,
    pub profile_id: Option<String>,
    pub completion_percentage: u32,
    pub dimension_scores: IndexMap<String, DimensionScore>,
    pub strengths: Vec<DimensionHighlight>,
    pub improvement_areas: Vec<DimensionHighlight>,
    pub all_matching_profiles: Vec<MatchedProfile>,
    pub recommendations: Vec<Recommendation>,
    pub all_recommendations: Vec<Recommendation>,
}

/// Document lint result; `blocking` findings make the document unusable as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub id: String,
    pub title: String,
    pub body: String,
    pub blocking: bool,
}

impl Finding {
    pub fn warning(id: &str, title: &str, body: String) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            body,
            blocking: false,
        }
    }

    pub fn blocking(id: &str, title: &str, body: String) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            body,
            blocking: true,
        }
    }
}
