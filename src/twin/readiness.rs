use crate::types::twin::DigitalTwinScore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadinessBand {
    pub min_score: u32,
    pub level: &'static str,
    pub archetype: &'static str,
    pub narrative: &'static str,
}

/// Evaluated top to bottom; the last band catches everything below 40.
pub const BANDS: [ReadinessBand; 4] = [
    ReadinessBand {
        min_score: 80,
        level: "Highly Ready for Growth",
        archetype: "The Aligned Visionary",
        narrative: "Your purpose, identity and actions are working together. You are positioned to take on a meaningful stretch: the priority now is choosing the right challenge and protecting the habits that brought you here.",
    },
    ReadinessBand {
        min_score: 60,
        level: "Moderately Ready for Growth",
        archetype: "The Awakening Integrator",
        narrative: "Much of your foundation is in place, and you can see where you want to go. A few areas are still pulling against you; integrating them is what will turn readiness into momentum.",
    },
    ReadinessBand {
        min_score: 40,
        level: "In Transition Mode",
        archetype: "The Identity Rebuilder",
        narrative: "You are between who you have been and who you are becoming. This is a productive but unsettled stage: small, consistent steps will rebuild confidence faster than a single big leap.",
    },
    ReadinessBand {
        min_score: 0,
        level: "Emerging Clarity Needed",
        archetype: "The Seeker",
        narrative: "Your answers point to a season of searching. Before planning a big change, focus on restoring energy and exploring what genuinely engages you; clarity tends to follow action.",
    },
];

pub fn band_for(score: u32) -> &'static ReadinessBand {
    BANDS
        .iter()
        .find(|band| score >= band.min_score)
        .unwrap_or(&BANDS[BANDS.len() - 1])
}

/// `round(mean)` over answered entries, `0` when nothing is answered.
pub fn overall_score(scores: &[DigitalTwinScore]) -> u32 {
    let answered = scores
        .iter()
        .filter(|score| score.answered)
        .map(|score| score.user_score)
        .collect::<Vec<_>>();
    if answered.is_empty() {
        return 0;
    }
    let total: u32 = answered.iter().sum();
    (f64::from(total) / answered.len() as f64).round() as u32
}

/// Lowest and highest answered entries, earliest question winning ties.
/// With nothing answered both fall back to the first entry.
pub fn extremes(scores: &[DigitalTwinScore]) -> Option<(&DigitalTwinScore, &DigitalTwinScore)> {
    let first = scores.first()?;
    let mut lowest: Option<&DigitalTwinScore> = None;
    let mut highest: Option<&DigitalTwinScore> = None;

    for score in scores.iter().filter(|score| score.answered) {
        if lowest.map_or(true, |current| score.user_score < current.user_score) {
            lowest = Some(score);
        }
        if highest.map_or(true, |current| score.user_score > current.user_score) {
            highest = Some(score);
        }
    }

    Some((lowest.unwrap_or(first), highest.unwrap_or(first)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::twin::catalog::TwinCatalog;
    use crate::twin::scale::{placeholder, score_answer};

    fn scored(values: &[Option<u32>]) -> Vec<DigitalTwinScore> {
        let catalog = TwinCatalog::standard().expect("catalog should parse");
        catalog
            .questions
            .iter()
            .zip(values)
            .map(|(question, value)| match value {
                Some(score) => score_answer(question, "x", *score, &catalog),
                None => placeholder(question),
            })
            .collect()
    }

    #[test]
    fn bands_use_inclusive_lower_bounds() {
        assert_eq!(band_for(100).level, "Highly Ready for Growth");
        assert_eq!(band_for(80).archetype, "The Aligned Visionary");
        assert_eq!(band_for(79).archetype, "The Awakening Integrator");
        assert_eq!(band_for(60).level, "Moderately Ready for Growth");
        assert_eq!(band_for(55).level, "In Transition Mode");
        assert_eq!(band_for(40).archetype, "The Identity Rebuilder");
        assert_eq!(band_for(39).level, "Emerging Clarity Needed");
        assert_eq!(band_for(0).archetype, "The Seeker");
    }

    #[test]
    fn overall_score_ignores_placeholders() {
        let scores = scored(&[Some(100), Some(10), None, None]);
        assert_eq!(overall_score(&scores), 55);
        assert_eq!(overall_score(&scored(&[None, None])), 0);
    }

    #[test]
    fn overall_score_rounds_half_up() {
        let scores = scored(&[Some(90), Some(80), Some(80), Some(80)]);
        assert_eq!(overall_score(&scores), 83);
        let scores = scored(&[Some(90), Some(80)]);
        assert_eq!(overall_score(&scores), 85);
    }

    #[test]
    fn extremes_break_ties_by_question_order() {
        let scores = scored(&[None, Some(50), Some(20), Some(90), Some(20), Some(90)]);
        let (lowest, highest) = extremes(&scores).expect("scores are present");
        assert_eq!(lowest.question_id, 3);
        assert_eq!(highest.question_id, 4);
    }

    #[test]
    fn extremes_default_to_first_placeholder() {
        let scores = scored(&[None, None, None]);
        let (lowest, highest) = extremes(&scores).expect("scores are present");
        assert_eq!(lowest.question_id, 1);
        assert_eq!(highest.question_id, 1);
        assert!(!lowest.answered);
    }
}
