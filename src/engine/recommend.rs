use crate::types::assessment::ResultProfile;
use crate::types::report::{DimensionScore, Priority, Recommendation, RecommendationKind};
use crate::types::scoring::Level;
use indexmap::IndexMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DimensionRule {
    pub dimension: String,
    pub level: Level,
    pub recommendation: Recommendation,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileRule {
    pub profile_id: String,
    pub recommendation: Recommendation,
}

/// Fixed rule tables. Table order is output order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendationRules {
    pub dimension_rules: Vec<DimensionRule>,
    pub profile_rules: Vec<ProfileRule>,
    pub fallback: Recommendation,
}

impl Default for RecommendationRules {
    fn default() -> Self {
        Self::standard()
    }
}

fn low_dimension(
    dimension: &str,
    id: &str,
    title: &str,
    description: &str,
    priority: Priority,
) -> DimensionRule {
    DimensionRule {
        dimension: dimension.to_string(),
        level: Level::Low,
        recommendation: Recommendation::new(
            id,
            RecommendationKind::Dimension,
            title,
            description,
            priority,
        ),
    }
}

fn for_profile(
    profile_id: &str,
    id: &str,
    title: &str,
    description: &str,
    priority: Priority,
) -> ProfileRule {
    ProfileRule {
        profile_id: profile_id.to_string(),
        recommendation: Recommendation::new(
            id,
            RecommendationKind::Profile,
            title,
            description,
            priority,
        ),
    }
}

impl RecommendationRules {
    pub fn standard() -> Self {
        Self {
            dimension_rules: vec![
                low_dimension(
                    "clarity",
                    "clarity-exploration-workshop",
                    "Career Exploration Workshop",
                    "Work through guided exercises to map interests, values and options before committing to a direction.",
                    Priority::High,
                ),
                low_dimension(
                    "confidence",
                    "confidence-coaching",
                    "Confidence Building Coaching",
                    "One-to-one sessions focused on recognising achievements and rehearsing high-stakes conversations.",
                    Priority::High,
                ),
                low_dimension(
                    "skills",
                    "skills-development-plan",
                    "Skills Development Plan",
                    "Identify the two or three skills with the largest gap to your target role and schedule deliberate practice.",
                    Priority::Medium,
                ),
                low_dimension(
                    "alignment",
                    "values-alignment-session",
                    "Values Alignment Session",
                    "Compare your current role against your core values to locate the sources of friction.",
                    Priority::Medium,
                ),
                low_dimension(
                    "readiness",
                    "transition-readiness-program",
                    "Transition Readiness Program",
                    "Prepare finances, timeline and support structures before making a move.",
                    Priority::Medium,
                ),
                low_dimension(
                    "network",
                    "networking-strategy-session",
                    "Networking Strategy Session",
                    "Build a short list of people in your target field and plan informational conversations.",
                    Priority::Low,
                ),
            ],
            profile_rules: vec![
                for_profile(
                    "focused-achiever",
                    "leadership-acceleration",
                    "Leadership Acceleration Program",
                    "Channel your clarity and confidence into a structured plan for the next level of responsibility.",
                    Priority::Medium,
                ),
                for_profile(
                    "explorer",
                    "career-discovery-intensive",
                    "Career Discovery Intensive",
                    "A focused program to test possible directions quickly through research and small experiments.",
                    Priority::High,
                ),
                for_profile(
                    "transitioner",
                    "career-transition-roadmap",
                    "Career Transition Roadmap",
                    "Turn your intended change into a staged roadmap with milestones and decision points.",
                    Priority::High,
                ),
                for_profile(
                    "builder",
                    "skill-building-accelerator",
                    "Skill Building Accelerator",
                    "Close the capability gaps that stand between your clear direction and your next role.",
                    Priority::Medium,
                ),
                for_profile(
                    "rebuilder",
                    "confidence-identity-reset",
                    "Confidence & Identity Reset",
                    "Rebuild a grounded sense of professional identity before planning the next move.",
                    Priority::High,
                ),
            ],
            fallback: Recommendation::new(
                "career-counseling-session",
                RecommendationKind::General,
                "Career Counseling Session",
                "Review your results with a coach to interpret the pattern and agree on next steps.",
                Priority::Medium,
            ),
        }
    }
}

/// Dimension-triggered recommendations in table order, then exactly one profile-triggered entry.
///
/// A dimension rule fires when a score's category key or its resolved dimension name
/// equals the rule's dimension, ignoring case.
pub fn recommend(
    rules: &RecommendationRules,
    scores: &IndexMap<String, DimensionScore>,
    primary: Option<&ResultProfile>,
) -> Vec<Recommendation> {
    let mut recommendations = rules
        .dimension_rules
        .iter()
        .filter(|rule| {
            scores.iter().any(|(key, score)| {
                let names_rule = key.eq_ignore_ascii_case(&rule.dimension)
                    || score.dimension_name.eq_ignore_ascii_case(&rule.dimension);
                names_rule && score.level == rule.level
            })
        })
        .map(|rule| rule.recommendation.clone())
        .collect::<Vec<_>>();

    let profile_recommendation = primary
        .and_then(|profile| {
            rules
                .profile_rules
                .iter()
                .find(|rule| rule.profile_id == profile.id)
        })
        .map(|rule| rule.recommendation.clone())
        .unwrap_or_else(|| rules.fallback.clone());
    recommendations.push(profile_recommendation);

    recommendations
}
