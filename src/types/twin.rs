use serde::{Deserialize, Serialize};

/// One of the ten fixed Digital Twin questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TwinQuestion {
    pub id: u8,
    pub dimension: String,
    pub index_name: String,
    pub score_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MicroActions {
    #[serde(rename = "hours24", alias = "hours_24", default)]
    pub hours_24: String,
    #[serde(rename = "days7", alias = "days_7", default)]
    pub days_7: String,
    #[serde(rename = "days30", alias = "days_30", default)]
    pub days_30: String,
}

/// Narrative attached to a specific `(question, option)` answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TwinInsight {
    pub question: u8,
    pub option: String,
    pub title: String,
    pub insight: String,
    pub growth_blocker: String,
    pub archetype: String,
    pub recommendation: String,
    #[serde(default)]
    pub micro_actions: MicroActions,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DigitalTwinScore {
    pub question_id: u8,
    pub dimension_name: String,
    pub index_name: String,
    pub score_type: String,
    pub user_score: u32,
    pub max_score: u32,
    pub percentage_score: u32,
    pub selected_option: String,
    pub title: String,
    pub description: String,
    pub growth_blocker: String,
    pub recommendation: String,
    pub archetype: String,
    pub micro_actions: MicroActions,
    pub answered: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionPlan {
    pub immediate: Vec<String>,
    pub short_term: Vec<String>,
    pub long_term: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DigitalTwinResult {
    pub scores: Vec<DigitalTwinScore>,
    pub overall_score: u32,
    pub readiness_level: String,
    pub primary_archetype: String,
    pub overall_insight: String,
    pub key_insights: Vec<String>,
    pub action_plan: ActionPlan,
    pub lowest_score: DigitalTwinScore,
    pub highest_score: DigitalTwinScore,
    pub answered_count: usize,
}
