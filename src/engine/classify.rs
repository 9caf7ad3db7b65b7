use crate::engine::accumulate::Tally;
use crate::types::assessment::ScoringDimension;
use crate::types::report::DimensionScore;
use crate::types::scoring::{rounded_percentage, Level, MatchMode};
use indexmap::IndexMap;
use tracing::{debug, warn};

/// Every metadata entry that could describe `category`, in metadata order.
///
/// Fuzzy mode accepts a case-insensitive substring match in either direction.
/// Entries with blank names never match.
pub fn dimension_candidates<'a>(
    category: &str,
    dimensions: &'a [ScoringDimension],
    mode: MatchMode,
) -> Vec<&'a ScoringDimension> {
    let category_lower = category.trim().to_lowercase();
    dimensions
        .iter()
        .filter(|dimension| {
            let name = dimension.name.trim().to_lowercase();
            if name.is_empty() {
                return false;
            }
            match mode {
                MatchMode::Strict => name == category_lower,
                MatchMode::Fuzzy => {
                    category_lower.contains(&name) || name.contains(&category_lower)
                }
            }
        })
        .collect()
}

/// Finds the metadata entry describing `category`, taking the first candidate.
pub fn resolve_dimension<'a>(
    category: &str,
    dimensions: &'a [ScoringDimension],
    mode: MatchMode,
) -> Option<&'a ScoringDimension> {
    let candidates = dimension_candidates(category, dimensions, mode);
    if candidates.len() > 1 {
        let names = candidates
            .iter()
            .map(|dimension| dimension.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        warn!(%category, candidates = %names, "ambiguous dimension match; using first candidate");
    }

    let resolved = candidates.first().copied();
    if resolved.is_none() {
        warn!(%category, "no scoring dimension matches category; level defaults to low");
    }
    resolved
}

pub fn score_dimension(
    category: &str,
    tally: Tally,
    metadata: Option<&ScoringDimension>,
) -> DimensionScore {
    let percentage_score = rounded_percentage(tally.raw, tally.max);
    let (level, dimension_name, dimension_description) = match metadata {
        Some(dimension) => (
            dimension.thresholds.classify(percentage_score),
            dimension.name.clone(),
            dimension.description.clone(),
        ),
        None => (Level::Low, category.to_string(), String::new()),
    };

    DimensionScore {
        raw_score: tally.raw,
        max_possible_score: tally.max,
        percentage_score,
        level,
        dimension_name,
        dimension_description,
    }
}

pub fn classify_all(
    tallies: &IndexMap<String, Tally>,
    dimensions: &[ScoringDimension],
    mode: MatchMode,
) -> IndexMap<String, DimensionScore> {
    tallies
        .iter()
        .map(|(category, tally)| {
            let metadata = resolve_dimension(category, dimensions, mode);
            let score = score_dimension(category, *tally, metadata);
            debug!(
                %category,
                percentage = score.percentage_score,
                level = %score.level,
                "classified dimension"
            );
            (category.clone(), score)
        })
        .collect()
}
