use crate::types::twin::{ActionPlan, DigitalTwinScore};

pub const PLAN_FOCUS_COUNT: usize = 3;

/// Micro-actions of the three lowest answered entries, lowest first.
pub fn build_action_plan(scores: &[DigitalTwinScore]) -> ActionPlan {
    let mut answered = scores
        .iter()
        .filter(|score| score.answered)
        .collect::<Vec<_>>();
    answered.sort_by_key(|score| score.user_score);

    let mut plan = ActionPlan::default();
    for score in answered.into_iter().take(PLAN_FOCUS_COUNT) {
        let actions = &score.micro_actions;
        push_non_empty(&mut plan.immediate, &actions.hours_24);
        push_non_empty(&mut plan.short_term, &actions.days_7);
        push_non_empty(&mut plan.long_term, &actions.days_30);
    }
    plan
}

fn push_non_empty(target: &mut Vec<String>, action: &str) {
    if !action.trim().is_empty() {
        target.push(action.to_string());
    }
}
