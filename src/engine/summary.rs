use crate::types::report::{
    AssessmentScores, DimensionHighlight, DimensionScore, MatchedProfile, SummaryReport,
};
use crate::types::scoring::{rounded_percentage, Level};
use indexmap::IndexMap;

pub const FALLBACK_SUMMARY: &str = "Assessment completed. See detailed results below.";
pub const FALLBACK_PROFILE_NAME: &str = "Custom Profile";

fn highlights(scores: &IndexMap<String, DimensionScore>, level: Level) -> Vec<DimensionHighlight> {
    scores
        .iter()
        .filter(|(_, score)| score.level == level)
        .map(|(dimension, score)| DimensionHighlight {
            dimension: dimension.clone(),
            dimension_name: score.dimension_name.clone(),
            percentage_score: score.percentage_score,
        })
        .collect()
}

pub fn build_summary(scores: AssessmentScores, top_recommendations: usize) -> SummaryReport {
    let (summary, profile_name, profile_id) = match &scores.primary_profile {
        Some(profile) => (
            profile.description.clone(),
            profile.name.clone(),
            Some(profile.id.clone()),
        ),
        None => (
            FALLBACK_SUMMARY.to_string(),
            FALLBACK_PROFILE_NAME.to_string(),
            None,
        ),
    };

    let strengths = highlights(&scores.dimension_scores, Level::High);
    let improvement_areas = highlights(&scores.dimension_scores, Level::Low);
    let all_matching_profiles = scores
        .all_matching_profiles
        .iter()
        .map(|profile| MatchedProfile {
            id: profile.id.clone(),
            name: profile.name.clone(),
        })
        .collect();

    let top = top_recommendations.min(scores.recommendations.len());
    let recommendations = scores.recommendations[..top].to_vec();

    SummaryReport {
        summary,
        profile_name,
        profile_id,
        completion_percentage: rounded_percentage(
            scores.answered_count as i64,
            scores.total_questions as i64,
        ),
        dimension_scores: scores.dimension_scores,
        strengths,
        improvement_areas,
        all_matching_profiles,
        recommendations,
        all_recommendations: scores.recommendations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::accumulate::Tally;
    use crate::engine::classify::score_dimension;
    use crate::engine::testing::{dimension, profile};
    use crate::types::report::{Priority, Recommendation, RecommendationKind};

    fn scores_with(primary: Option<&str>, answered: usize, total: usize) -> AssessmentScores {
        let dimension_scores = [("clarity", 90), ("network", 50), ("confidence", 10)]
            .iter()
            .map(|(name, raw)| {
                let metadata = dimension(name, 40.0, 75.0);
                (
                    name.to_string(),
                    score_dimension(name, Tally { raw: *raw, max: 100 }, Some(&metadata)),
                )
            })
            .collect();
        let primary_profile = primary.map(|id| profile(id, &[]));
        let recommendations = (0..5)
            .map(|i| {
                Recommendation::new(
                    &format!("rec-{i}"),
                    RecommendationKind::Dimension,
                    "title",
                    "description",
                    Priority::Low,
                )
            })
            .collect();

        AssessmentScores {
            dimension_scores,
            all_matching_profiles: primary_profile.iter().cloned().collect(),
            primary_profile,
            recommendations,
            answered_count: answered,
            total_questions: total,
        }
    }

    #[test]
    fn strengths_and_improvement_areas_follow_levels() {
        let report = build_summary(scores_with(None, 3, 3), 3);
        let strengths = report
            .strengths
            .iter()
            .map(|h| h.dimension.as_str())
            .collect::<Vec<_>>();
        let improvements = report
            .improvement_areas
            .iter()
            .map(|h| h.dimension.as_str())
            .collect::<Vec<_>>();
        assert_eq!(strengths, vec!["clarity"]);
        assert_eq!(improvements, vec!["confidence"]);
    }

    #[test]
    fn missing_profile_uses_fallback_text() {
        let report = build_summary(scores_with(None, 1, 3), 3);
        assert_eq!(report.summary, FALLBACK_SUMMARY);
        assert_eq!(report.profile_name, FALLBACK_PROFILE_NAME);
        assert!(report.profile_id.is_none());
        assert_eq!(report.completion_percentage, 33);
    }

    #[test]
    fn primary_profile_supplies_summary_and_name() {
        let report = build_summary(scores_with(Some("explorer"), 2, 3), 3);
        assert_eq!(report.summary, "explorer description");
        assert_eq!(report.profile_name, "explorer name");
        assert_eq!(report.profile_id.as_deref(), Some("explorer"));
        assert_eq!(report.completion_percentage, 67);
    }

    #[test]
    fn top_recommendations_are_a_prefix_of_all() {
        let report = build_summary(scores_with(None, 3, 3), 3);
        assert_eq!(report.recommendations.len(), 3);
        assert_eq!(report.all_recommendations.len(), 5);
        assert_eq!(
            report.recommendations[..],
            report.all_recommendations[..3]
        );
    }

    #[test]
    fn top_larger_than_available_returns_everything() {
        let report = build_summary(scores_with(None, 3, 3), 10);
        assert_eq!(report.recommendations, report.all_recommendations);
    }
}
