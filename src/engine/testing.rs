//! Builders shared by the engine unit tests.

use crate::types::assessment::{
    AnswerOption, AssessmentDocument, AssessmentMetadata, LevelCondition, Question, ResultProfile,
    Responses, ScoringDimension,
};
use crate::types::scoring::Thresholds;

pub fn question(id: &str, category: &str, options: &[(&str, i64)]) -> Question {
    Question {
        id: id.to_string(),
        category: category.to_string(),
        text: None,
        options: options
            .iter()
            .map(|(letter, score)| AnswerOption {
                letter: letter.to_string(),
                score: *score,
                text: None,
            })
            .collect(),
        scoring_logic: None,
    }
}

pub fn dimension(name: &str, medium: f64, high: f64) -> ScoringDimension {
    ScoringDimension {
        name: name.to_string(),
        description: format!("{name} description"),
        thresholds: Thresholds { medium, high },
    }
}

pub fn profile(id: &str, conditions: &[(&str, &str)]) -> ResultProfile {
    ResultProfile {
        id: id.to_string(),
        name: format!("{id} name"),
        description: format!("{id} description"),
        conditions: conditions
            .iter()
            .map(|(dimension, level)| (dimension.to_string(), LevelCondition::new(*level)))
            .collect(),
    }
}

pub fn responses(pairs: &[(&str, &str)]) -> Responses {
    pairs
        .iter()
        .map(|(id, letter)| (id.to_string(), letter.to_string()))
        .collect()
}

/// Two clarity questions (max 10 each) and one confidence question (max 5).
pub fn career_document() -> AssessmentDocument {
    AssessmentDocument {
        questions: vec![
            question("q1", "clarity", &[("a", 2), ("b", 5), ("c", 8), ("d", 10)]),
            question("q2", "clarity", &[("a", 3), ("b", 6), ("c", 9), ("d", 10)]),
            question("q3", "confidence", &[("a", 1), ("b", 3), ("c", 5)]),
        ],
        assessment_metadata: AssessmentMetadata {
            scoring_dimensions: vec![
                dimension("clarity", 50.0, 75.0),
                dimension("confidence", 40.0, 80.0),
            ],
            result_profiles: vec![
                profile("focused-achiever", &[("clarity", "high"), ("confidence", "high")]),
                profile("explorer", &[("clarity", "low-medium")]),
                profile("builder", &[("clarity", "high")]),
            ],
        },
    }
}
