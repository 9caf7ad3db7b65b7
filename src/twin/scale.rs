use crate::twin::catalog::TwinCatalog;
use crate::twin::readiness::band_for;
use crate::types::twin::{DigitalTwinScore, MicroActions, TwinQuestion};

pub const MAX_SCORE: u32 = 100;
pub const NOT_ANSWERED: &str = "This question was not answered.";

const SCALE_LETTERS: [char; 10] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j'];

/// `a = 100` down to `j = 10` in steps of ten.
pub fn scoring_scale() -> [(char, u32); 10] {
    let mut scale = [('a', 0); 10];
    for (index, letter) in SCALE_LETTERS.iter().enumerate() {
        scale[index] = (*letter, MAX_SCORE - 10 * index as u32);
    }
    scale
}

pub fn scale_score(letter: &str) -> Option<u32> {
    let mut chars = letter.chars();
    let (Some(first), None) = (chars.next(), chars.next()) else {
        return None;
    };
    scoring_scale()
        .iter()
        .find(|(candidate, _)| *candidate == first)
        .map(|(_, score)| *score)
}

pub fn placeholder(question: &TwinQuestion) -> DigitalTwinScore {
    DigitalTwinScore {
        question_id: question.id,
        dimension_name: question.dimension.clone(),
        index_name: question.index_name.clone(),
        score_type: question.score_type.clone(),
        user_score: 0,
        max_score: MAX_SCORE,
        percentage_score: 0,
        selected_option: String::new(),
        title: String::new(),
        description: NOT_ANSWERED.to_string(),
        growth_blocker: String::new(),
        recommendation: String::new(),
        archetype: String::new(),
        micro_actions: MicroActions::default(),
        answered: false,
    }
}

/// Scores an answered question. `option` must already be normalised to a scale letter.
pub fn score_answer(
    question: &TwinQuestion,
    option: &str,
    user_score: u32,
    catalog: &TwinCatalog,
) -> DigitalTwinScore {
    let mut score = placeholder(question);
    score.user_score = user_score;
    score.percentage_score = user_score * 100 / MAX_SCORE;
    score.selected_option = option.to_string();
    score.answered = true;

    match catalog.insight(question.id, option) {
        Some(insight) => {
            score.title = insight.title.clone();
            score.description = insight.insight.clone();
            score.growth_blocker = insight.growth_blocker.clone();
            score.recommendation = insight.recommendation.clone();
            score.archetype = insight.archetype.clone();
            score.micro_actions = insight.micro_actions.clone();
        }
        None => {
            let dimension = &question.dimension;
            let lower = dimension.to_lowercase();
            score.title = format!("{dimension} Insight");
            score.description = format!("Your response places your {lower} at {user_score}%.");
            score.growth_blocker = format!("Unexamined habits may be limiting your {lower}.");
            score.recommendation = format!("Focus on strengthening your {dimension}.");
            score.archetype = band_for(user_score).archetype.to_string();
            score.micro_actions = MicroActions {
                hours_24: format!("Reflect on one recent moment that tested your {lower}."),
                days_7: format!("Choose one practice that builds {lower} and do it daily."),
                days_30: format!("Review how your {lower} has shifted over the month."),
            };
        }
    }

    score
}
