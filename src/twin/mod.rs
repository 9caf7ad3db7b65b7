//! Digital Twin readiness scoring: ten fixed questions on an `a..=j` scale.

pub mod catalog;
pub mod plan;
pub mod readiness;
pub mod scale;

use crate::types::assessment::Responses;
use crate::types::twin::{DigitalTwinResult, DigitalTwinScore};
use catalog::TwinCatalog;
use tracing::{debug, warn};

pub fn calculate_digital_twin_scores(
    catalog: &TwinCatalog,
    responses: &Responses,
) -> DigitalTwinResult {
    let scores = catalog
        .questions
        .iter()
        .map(|question| {
            let Some(raw) = responses.get(&question.id.to_string()) else {
                return scale::placeholder(question);
            };
            let option = raw.trim().to_ascii_lowercase();
            match scale::scale_score(&option) {
                Some(user_score) => scale::score_answer(question, &option, user_score, catalog),
                None => {
                    warn!(
                        question = question.id,
                        answer = %raw,
                        "answer outside a..=j, treating question as unanswered"
                    );
                    scale::placeholder(question)
                }
            }
        })
        .collect::<Vec<_>>();

    let answered_count = scores.iter().filter(|score| score.answered).count();
    let overall_score = readiness::overall_score(&scores);
    let band = readiness::band_for(overall_score);
    debug!(overall_score, answered_count, level = band.level, "digital twin scored");

    let (lowest_score, highest_score) = match readiness::extremes(&scores) {
        Some((lowest, highest)) => (lowest.clone(), highest.clone()),
        // only reachable with a hand-built catalog that has no questions
        None => (DigitalTwinScore::default(), DigitalTwinScore::default()),
    };

    let key_insights = key_insights(&lowest_score, &highest_score, answered_count, scores.len());
    let action_plan = plan::build_action_plan(&scores);

    DigitalTwinResult {
        scores,
        overall_score,
        readiness_level: band.level.to_string(),
        primary_archetype: band.archetype.to_string(),
        overall_insight: band.narrative.to_string(),
        key_insights,
        action_plan,
        lowest_score,
        highest_score,
        answered_count,
    }
}

fn key_insights(
    lowest: &DigitalTwinScore,
    highest: &DigitalTwinScore,
    answered: usize,
    total: usize,
) -> Vec<String> {
    if answered == 0 {
        return vec![
            "Complete the assessment to unlock personalised insights.".to_string(),
        ];
    }
    vec![
        format!(
            "Your strongest area is {} ({}%).",
            highest.dimension_name, highest.percentage_score
        ),
        format!(
            "Your biggest growth opportunity is {} ({}%).",
            lowest.dimension_name, lowest.percentage_score
        ),
        format!("You answered {answered} of {total} questions."),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;

    fn responses(pairs: &[(&str, &str)]) -> Responses {
        pairs
            .iter()
            .map(|(id, letter)| (id.to_string(), letter.to_string()))
            .collect::<IndexMap<_, _>>()
    }

    fn standard() -> TwinCatalog {
        TwinCatalog::standard().expect("catalog should parse")
    }

    #[test]
    fn two_answers_produce_transition_band() {
        let result = calculate_digital_twin_scores(&standard(), &responses(&[("1", "a"), ("2", "j")]));

        assert_eq!(result.overall_score, 55);
        assert_eq!(result.readiness_level, "In Transition Mode");
        assert_eq!(result.primary_archetype, "The Identity Rebuilder");
        assert_eq!(result.lowest_score.question_id, 2);
        assert_eq!(result.highest_score.question_id, 1);
        assert_eq!(result.answered_count, 2);
        assert_eq!(result.scores.len(), 10);
        assert_eq!(result.scores.iter().filter(|score| !score.answered).count(), 8);
        assert_eq!(result.scores[0].user_score, 100);
        assert_eq!(result.scores[1].user_score, 10);
    }

    #[test]
    fn action_plan_comes_from_lowest_answers() {
        let catalog = standard();
        let result = calculate_digital_twin_scores(&catalog, &responses(&[("1", "a"), ("2", "j")]));
        let q2 = catalog.insight(2, "j").expect("question 2 option j has an insight");
        let q1 = catalog.insight(1, "a").expect("question 1 option a has an insight");

        assert_eq!(
            result.action_plan.immediate,
            vec![q2.micro_actions.hours_24.clone(), q1.micro_actions.hours_24.clone()]
        );
        assert_eq!(result.action_plan.long_term[0], q2.micro_actions.days_30);
    }

    #[test]
    fn letters_are_normalised_and_invalid_ones_ignored() {
        let result = calculate_digital_twin_scores(
            &standard(),
            &responses(&[("3", " C "), ("4", "z"), ("5", "")]),
        );
        assert_eq!(result.answered_count, 1);
        assert_eq!(result.scores[2].selected_option, "c");
        assert_eq!(result.scores[2].user_score, 80);
        assert!(!result.scores[3].answered);
        assert!(!result.scores[4].answered);
    }

    #[test]
    fn empty_responses_yield_seeker_with_prompt() {
        let result = calculate_digital_twin_scores(&standard(), &Responses::new());
        assert_eq!(result.overall_score, 0);
        assert_eq!(result.readiness_level, "Emerging Clarity Needed");
        assert_eq!(result.primary_archetype, "The Seeker");
        assert_eq!(result.lowest_score.question_id, 1);
        assert_eq!(result.highest_score.question_id, 1);
        assert_eq!(result.key_insights.len(), 1);
        assert!(result.key_insights[0].starts_with("Complete the assessment"));
        assert!(result.action_plan.immediate.is_empty());
    }

    #[test]
    fn key_insights_name_extremes() {
        let result = calculate_digital_twin_scores(
            &standard(),
            &responses(&[("1", "e"), ("6", "b"), ("9", "h")]),
        );
        assert_eq!(result.key_insights.len(), 3);
        assert!(result.key_insights[0].contains("Energy Management"));
        assert!(result.key_insights[1].contains("Action Orientation"));
        assert_eq!(result.key_insights[2], "You answered 3 of 10 questions.");
    }

    #[test]
    fn unknown_question_ids_are_ignored() {
        let result = calculate_digital_twin_scores(&standard(), &responses(&[("11", "a"), ("q1", "a")]));
        assert_eq!(result.answered_count, 0);
    }
}
