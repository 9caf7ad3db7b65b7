use crate::types::report::{Finding, Recommendation, SummaryReport};
use crate::types::twin::DigitalTwinResult;

fn push_recommendations(output: &mut String, recommendations: &[Recommendation]) {
    if recommendations.is_empty() {
        output.push_str("- none\n");
        return;
    }
    for recommendation in recommendations {
        output.push_str(&format!(
            "- **{}** ({} priority): {}\n",
            recommendation.title, recommendation.priority, recommendation.description
        ));
    }
}

pub fn summary_to_markdown(report: &SummaryReport) -> String {
    let mut output = String::new();
    output.push_str("# Assessment Report\n\n");
    output.push_str(&format!("Profile: {}\n\n", report.profile_name));
    output.push_str(&format!("{}\n\n", report.summary));
    output.push_str(&format!("Completion: {}%\n\n", report.completion_percentage));

    output.push_str("## Dimension Scores\n\n");
    if report.dimension_scores.is_empty() {
        output.push_str("- none\n\n");
    } else {
        output.push_str("| Dimension | Score | Percentage | Level |\n");
        output.push_str("|---|---|---|---|\n");
        for score in report.dimension_scores.values() {
            output.push_str(&format!(
                "| {} | {}/{} | {}% | {} |\n",
                score.dimension_name,
                score.raw_score,
                score.max_possible_score,
                score.percentage_score,
                score.level
            ));
        }
        output.push('\n');
    }

    for (heading, highlights) in [
        ("Strengths", &report.strengths),
        ("Improvement Areas", &report.improvement_areas),
    ] {
        output.push_str(&format!("## {heading}\n\n"));
        if highlights.is_empty() {
            output.push_str("- none\n");
        }
        for highlight in highlights {
            output.push_str(&format!(
                "- {} ({}%)\n",
                highlight.dimension_name, highlight.percentage_score
            ));
        }
        output.push('\n');
    }

    output.push_str("## Recommendations\n\n");
    push_recommendations(&mut output, &report.recommendations);
    output
}

pub fn twin_to_markdown(result: &DigitalTwinResult) -> String {
    let mut output = String::new();
    output.push_str("# Digital Twin Readiness\n\n");
    output.push_str(&format!(
        "Overall score: {} ({})\n\nArchetype: {}\n\n{}\n\n",
        result.overall_score, result.readiness_level, result.primary_archetype, result.overall_insight
    ));

    output.push_str("## Key Insights\n\n");
    for insight in &result.key_insights {
        output.push_str(&format!("- {insight}\n"));
    }
    output.push('\n');

    output.push_str("## Scores\n\n");
    output.push_str("| # | Dimension | Answer | Score |\n");
    output.push_str("|---|---|---|---|\n");
    for score in &result.scores {
        let answer = if score.answered {
            score.selected_option.as_str()
        } else {
            "-"
        };
        output.push_str(&format!(
            "| {} | {} | {} | {} |\n",
            score.question_id, score.dimension_name, answer, score.user_score
        ));
    }
    output.push('\n');

    output.push_str("## Action Plan\n\n");
    for (heading, actions) in [
        ("Next 24 hours", &result.action_plan.immediate),
        ("Next 7 days", &result.action_plan.short_term),
        ("Next 30 days", &result.action_plan.long_term),
    ] {
        output.push_str(&format!("### {heading}\n\n"));
        if actions.is_empty() {
            output.push_str("- none\n");
        }
        for action in actions {
            output.push_str(&format!("- {action}\n"));
        }
        output.push('\n');
    }

    output
}

pub fn findings_to_markdown(findings: &[Finding]) -> String {
    if findings.is_empty() {
        return "validate: no findings\n".to_string();
    }
    let mut output = String::new();
    for finding in findings {
        let level = if finding.blocking { "BLOCKING" } else { "WARN" };
        output.push_str(&format!("[{level}] {}: {}\n", finding.id, finding.title));
        output.push_str(&format!("  {}\n", finding.body));
    }
    output
}
