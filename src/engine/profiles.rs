use crate::types::assessment::ResultProfile;
use crate::types::report::DimensionScore;
use indexmap::IndexMap;
use tracing::debug;

/// True when every condition is met. A dimension with no computed score never satisfies a condition.
pub fn profile_matches(
    profile: &ResultProfile,
    scores: &IndexMap<String, DimensionScore>,
) -> bool {
    profile.conditions.iter().all(|(dimension, condition)| {
        scores
            .get(dimension)
            .map(|score| condition.accepts(score.level))
            .unwrap_or(false)
    })
}

/// All matching profiles in catalog order. Catalog order is precedence.
pub fn match_profiles<'a>(
    profiles: &'a [ResultProfile],
    scores: &IndexMap<String, DimensionScore>,
) -> Vec<&'a ResultProfile> {
    let matches = profiles
        .iter()
        .filter(|profile| profile_matches(profile, scores))
        .collect::<Vec<_>>();
    let matched_ids = matches
        .iter()
        .map(|profile| profile.id.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    debug!(matched = %matched_ids, "profile matching complete");
    matches
}

pub fn primary_profile<'a>(matches: &[&'a ResultProfile]) -> Option<&'a ResultProfile> {
    matches.first().copied()
}
