pub mod json;
pub mod md;

use crate::error::AssessorError;
use crate::types::report::{Finding, SummaryReport};
use crate::types::twin::DigitalTwinResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Md,
}

pub fn render_summary(report: &SummaryReport, format: OutputFormat) -> Result<String, AssessorError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(AssessorError::Json),
        OutputFormat::Md => Ok(md::summary_to_markdown(report)),
    }
}

pub fn render_twin(result: &DigitalTwinResult, format: OutputFormat) -> Result<String, AssessorError> {
    match format {
        OutputFormat::Json => json::to_json(result).map_err(AssessorError::Json),
        OutputFormat::Md => Ok(md::twin_to_markdown(result)),
    }
}

pub fn render_findings(findings: &[Finding], format: OutputFormat) -> Result<String, AssessorError> {
    match format {
        OutputFormat::Json => json::to_json(findings).map_err(AssessorError::Json),
        OutputFormat::Md => Ok(md::findings_to_markdown(findings)),
    }
}
