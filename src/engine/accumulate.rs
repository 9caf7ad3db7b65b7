use crate::error::ScoringError;
use crate::types::assessment::{Question, Responses, ScoringLogic};
use indexmap::IndexMap;
use tracing::{debug, warn};

/// Running raw and maximum points for one category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub raw: i64,
    pub max: i64,
}

impl Tally {
    fn add(&mut self, category: &str, score: i64, max: i64) -> Result<(), ScoringError> {
        let overflow =
            || ScoringError::ComputationFailure(format!("score overflow in category '{category}'"));
        self.raw = self.raw.checked_add(score).ok_or_else(overflow)?;
        self.max = self.max.checked_add(max).ok_or_else(overflow)?;
        Ok(())
    }
}

/// Sums answered questions per verbatim category, in order of first scored question.
///
/// A response naming a letter the question does not offer skips the question
/// entirely; it adds nothing to either the raw or the maximum score.
pub fn accumulate(
    questions: &[Question],
    responses: &Responses,
) -> Result<IndexMap<String, Tally>, ScoringError> {
    let mut tallies: IndexMap<String, Tally> = IndexMap::new();

    for question in questions {
        let Some(selected) = responses.get(&question.id) else {
            continue;
        };
        let Some(option) = question.find_option(selected) else {
            debug!(question = %question.id, %selected, "response matches no option; skipping");
            continue;
        };
        if let ScoringLogic::Unrecognized(tag) = question.logic() {
            warn!(question = %question.id, logic = %tag, "unrecognized scoring logic; treating as sum");
        }
        let max = question.max_option_score().unwrap_or(option.score);

        tallies
            .entry(question.category.clone())
            .or_default()
            .add(&question.category, option.score, max)?;
    }

    Ok(tallies)
}
