//! Generic assessment scoring pipeline.
//!
//! `responses + document` flow through accumulation, classification, profile
//! matching and recommendation before being summarised. Every entry point is
//! a pure function of its arguments; the document is only ever borrowed.

pub mod accumulate;
pub mod classify;
pub mod profiles;
pub mod recommend;
pub mod summary;

#[cfg(test)]
pub(crate) mod testing;

use crate::error::ScoringError;
use crate::types::assessment::{AssessmentDocument, Responses};
use crate::types::config::{AssessorConfig, DEFAULT_TOP_RECOMMENDATIONS};
use crate::types::report::{AssessmentScores, SummaryReport};
use crate::types::scoring::MatchMode;
use recommend::RecommendationRules;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineOptions {
    pub match_mode: MatchMode,
    pub top_recommendations: usize,
    pub rules: RecommendationRules,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            match_mode: MatchMode::Fuzzy,
            top_recommendations: DEFAULT_TOP_RECOMMENDATIONS,
            rules: RecommendationRules::standard(),
        }
    }
}

impl EngineOptions {
    pub fn from_config(config: &AssessorConfig) -> Self {
        Self {
            match_mode: config.match_mode(),
            top_recommendations: config.top_recommendations(),
            rules: RecommendationRules::standard(),
        }
    }
}

pub fn calculate_assessment_scores(
    document: &AssessmentDocument,
    responses: &Responses,
    options: &EngineOptions,
) -> Result<AssessmentScores, ScoringError> {
    if responses.is_empty() {
        return Err(ScoringError::NoResponses);
    }

    let tallies = accumulate::accumulate(&document.questions, responses)?;
    let metadata = &document.assessment_metadata;
    let dimension_scores =
        classify::classify_all(&tallies, &metadata.scoring_dimensions, options.match_mode);

    let matches = profiles::match_profiles(&metadata.result_profiles, &dimension_scores);
    let primary = profiles::primary_profile(&matches);
    let recommendations = recommend::recommend(&options.rules, &dimension_scores, primary);

    let answered_count = document
        .questions
        .iter()
        .filter(|question| responses.contains_key(&question.id))
        .count();

    Ok(AssessmentScores {
        primary_profile: primary.cloned(),
        all_matching_profiles: matches.into_iter().cloned().collect(),
        dimension_scores,
        recommendations,
        answered_count,
        total_questions: document.questions.len(),
    })
}

pub fn generate_summary_report(
    document: &AssessmentDocument,
    responses: &Responses,
    options: &EngineOptions,
) -> Result<SummaryReport, ScoringError> {
    let scores = calculate_assessment_scores(document, responses, options)?;
    Ok(summary::build_summary(scores, options.top_recommendations))
}
