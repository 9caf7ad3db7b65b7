use crate::engine::classify::dimension_candidates;
use crate::types::assessment::{AssessmentDocument, ScoringLogic};
use crate::types::report::Finding;
use crate::types::scoring::MatchMode;
use std::collections::HashSet;

/// Structural checks on an assessment document before it is used for scoring.
///
/// Blocking findings mean the document cannot produce meaningful scores.
/// Warnings flag things the engine tolerates but probably were not intended.
pub fn validate_document(document: &AssessmentDocument, mode: MatchMode) -> Vec<Finding> {
    let mut findings = Vec::new();
    check_questions(document, mode, &mut findings);
    check_dimensions(document, &mut findings);
    check_profiles(document, &mut findings);
    findings
}

fn check_questions(document: &AssessmentDocument, mode: MatchMode, findings: &mut Vec<Finding>) {
    if document.questions.is_empty() {
        findings.push(Finding::blocking(
            "questions.empty",
            "Document has no questions",
            "Add at least one question with scored options.".to_string(),
        ));
        return;
    }

    let dimensions = &document.assessment_metadata.scoring_dimensions;
    let mut seen_ids = HashSet::new();
    let mut seen_categories = HashSet::new();

    for question in &document.questions {
        if !seen_ids.insert(question.id.as_str()) {
            findings.push(Finding::blocking(
                "questions.duplicate_id",
                "Duplicate question id",
                format!("Question id '{}' appears more than once.", question.id),
            ));
        }

        if question.options.is_empty() {
            findings.push(Finding::blocking(
                "questions.no_options",
                "Question has no options",
                format!("Question '{}' cannot be answered.", question.id),
            ));
        }

        if let ScoringLogic::Unrecognized(tag) = question.logic() {
            findings.push(Finding::warning(
                "questions.unknown_logic",
                "Unknown scoring logic",
                format!(
                    "Question '{}' uses scoring logic '{tag}'; it will be summed.",
                    question.id
                ),
            ));
        }

        if !seen_categories.insert(question.category.as_str()) {
            continue;
        }
        let candidates = dimension_candidates(&question.category, dimensions, mode);
        match candidates.as_slice() {
            [] => findings.push(Finding::warning(
                "dimensions.unmatched_category",
                "Category has no scoring dimension",
                format!(
                    "Category '{}' matches no dimension and will always classify as low.",
                    question.category
                ),
            )),
            [_] => {}
            [first, ..] => {
                let names = candidates
                    .iter()
                    .map(|dimension| dimension.name.as_str())
                    .collect::<Vec<_>>()
                    .join(", ");
                findings.push(Finding::warning(
                    "dimensions.ambiguous_category",
                    "Category matches several dimensions",
                    format!(
                        "Category '{}' matches {names}; '{}' will be used.",
                        question.category, first.name
                    ),
                ));
            }
        }
    }
}

fn check_dimensions(document: &AssessmentDocument, findings: &mut Vec<Finding>) {
    for (index, dimension) in document
        .assessment_metadata
        .scoring_dimensions
        .iter()
        .enumerate()
    {
        if dimension.name.trim().is_empty() {
            findings.push(Finding::warning(
                "dimensions.blank_name",
                "Dimension has a blank name",
                format!(
                    "Scoring dimension #{} has no name and will never match a category.",
                    index + 1
                ),
            ));
        }

        let thresholds = dimension.thresholds;
        let in_range = |value: f64| (0.0..=100.0).contains(&value);
        if !in_range(thresholds.medium)
            || !in_range(thresholds.high)
            || thresholds.medium > thresholds.high
        {
            findings.push(Finding::blocking(
                "dimensions.invalid_thresholds",
                "Invalid dimension thresholds",
                format!(
                    "Dimension '{}' needs 0 <= medium ({}) <= high ({}) <= 100.",
                    dimension.name, thresholds.medium, thresholds.high
                ),
            ));
        }
    }
}

fn check_profiles(document: &AssessmentDocument, findings: &mut Vec<Finding>) {
    let categories = document
        .questions
        .iter()
        .map(|question| question.category.as_str())
        .collect::<HashSet<_>>();

    for profile in &document.assessment_metadata.result_profiles {
        if profile.conditions.is_empty() {
            findings.push(Finding::warning(
                "profiles.no_conditions",
                "Profile has no conditions",
                format!(
                    "Profile '{}' matches every response set and shadows later profiles.",
                    profile.id
                ),
            ));
        }

        for (dimension, condition) in &profile.conditions {
            let unknown = condition.unknown_tokens();
            if !unknown.is_empty() {
                findings.push(Finding::blocking(
                    "profiles.invalid_level",
                    "Invalid level in profile condition",
                    format!(
                        "Profile '{}' condition '{}' uses unknown level(s): {}.",
                        profile.id,
                        condition.as_str(),
                        unknown.join(", ")
                    ),
                ));
            }
            if !categories.contains(dimension.as_str()) {
                findings.push(Finding::warning(
                    "profiles.unknown_dimension",
                    "Profile condition on unknown dimension",
                    format!(
                        "Profile '{}' requires '{dimension}', which no question scores; it can never match.",
                        profile.id
                    ),
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::testing::{career_document, dimension, profile, question};

    fn ids(findings: &[Finding]) -> Vec<&str> {
        findings.iter().map(|finding| finding.id.as_str()).collect()
    }

    #[test]
    fn career_document_is_clean() {
        let findings = validate_document(&career_document(), MatchMode::Fuzzy);
        assert!(findings.is_empty(), "unexpected findings: {findings:?}");
    }

    #[test]
    fn empty_document_is_blocking() {
        let mut doc = career_document();
        doc.questions.clear();
        doc.assessment_metadata.result_profiles.clear();
        let findings = validate_document(&doc, MatchMode::Fuzzy);
        assert_eq!(ids(&findings), vec!["questions.empty"]);
        assert!(findings[0].blocking);
    }

    #[test]
    fn duplicate_ids_and_optionless_questions_block() {
        let mut doc = career_document();
        doc.questions.push(question("q1", "clarity", &[("a", 1)]));
        doc.questions.push(question("q9", "clarity", &[]));
        let findings = validate_document(&doc, MatchMode::Fuzzy);
        let found = ids(&findings);
        assert!(found.contains(&"questions.duplicate_id"));
        assert!(found.contains(&"questions.no_options"));
        assert!(findings.iter().all(|finding| finding.blocking));
    }

    #[test]
    fn unknown_logic_warns() {
        let mut doc = career_document();
        doc.questions[0].scoring_logic = Some("weighted".to_string());
        let findings = validate_document(&doc, MatchMode::Fuzzy);
        assert_eq!(ids(&findings), vec!["questions.unknown_logic"]);
        assert!(!findings[0].blocking);
    }

    #[test]
    fn category_resolution_depends_on_match_mode() {
        let mut doc = career_document();
        doc.questions.push(question("q4", "career clarity", &[("a", 1)]));
        assert!(validate_document(&doc, MatchMode::Fuzzy).is_empty());

        let strict = validate_document(&doc, MatchMode::Strict);
        assert_eq!(ids(&strict), vec!["dimensions.unmatched_category"]);
    }

    #[test]
    fn ambiguous_category_warns() {
        let mut doc = career_document();
        doc.assessment_metadata
            .scoring_dimensions
            .push(dimension("clarity of purpose", 50.0, 75.0));
        let findings = validate_document(&doc, MatchMode::Fuzzy);
        assert_eq!(ids(&findings), vec!["dimensions.ambiguous_category"]);
        assert!(findings[0].body.contains("'clarity' will be used"));
    }

    #[test]
    fn inverted_thresholds_block() {
        let mut doc = career_document();
        doc.assessment_metadata.scoring_dimensions[0] = dimension("clarity", 80.0, 60.0);
        let findings = validate_document(&doc, MatchMode::Fuzzy);
        assert_eq!(ids(&findings), vec!["dimensions.invalid_thresholds"]);
        assert!(findings[0].blocking);
    }

    #[test]
    fn blank_dimension_name_warns() {
        let mut doc = career_document();
        doc.assessment_metadata
            .scoring_dimensions
            .push(dimension("  ", 50.0, 75.0));
        let findings = validate_document(&doc, MatchMode::Fuzzy);
        assert_eq!(ids(&findings), vec!["dimensions.blank_name"]);
        assert!(!findings[0].blocking);
        assert!(findings[0].body.contains("#3"));
    }

    #[test]
    fn profile_problems_are_reported() {
        let mut doc = career_document();
        let profiles = &mut doc.assessment_metadata.result_profiles;
        profiles.push(profile("catch-all", &[]));
        profiles.push(profile("odd", &[("network", "high"), ("clarity", "very-high")]));
        let findings = validate_document(&doc, MatchMode::Fuzzy);
        let found = ids(&findings);
        assert_eq!(
            found,
            vec![
                "profiles.no_conditions",
                "profiles.unknown_dimension",
                "profiles.invalid_level"
            ]
        );
        assert!(findings[2].blocking);
    }
}
