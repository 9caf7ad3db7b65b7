mod cli;

use assessor::engine::{self, EngineOptions};
use assessor::error::AssessorError;
use assessor::export::{self, ExportEnvelope};
use assessor::report::{self, OutputFormat};
use assessor::twin::{self, catalog::TwinCatalog};
use assessor::types::config::{AssessorConfig, ReportFormatSetting};
use assessor::types::scoring::MatchMode;
use assessor::{config, lint, loader, telemetry};
use clap::Parser;
use std::path::Path;
use tracing::{info, warn};
use walkdir::WalkDir;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const BLOCKING: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

/// Flag first, then `[report] format`, then markdown.
fn output_format(flag: Option<cli::ReportFormat>, settings: &AssessorConfig) -> OutputFormat {
    match flag {
        Some(cli::ReportFormat::Json) => OutputFormat::Json,
        Some(cli::ReportFormat::Md) => OutputFormat::Md,
        None => match settings.report_format() {
            Some(ReportFormatSetting::Json) => OutputFormat::Json,
            Some(ReportFormatSetting::Md) | None => OutputFormat::Md,
        },
    }
}

fn engine_options(settings: &AssessorConfig, strict: bool, top: Option<u16>) -> EngineOptions {
    let mut options = EngineOptions::from_config(settings);
    if strict {
        options.match_mode = MatchMode::Strict;
    }
    if let Some(top) = top {
        options.top_recommendations = usize::from(top);
    }
    options
}

fn is_json_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

fn run() -> Result<i32, AssessorError> {
    let cli = cli::Cli::parse();
    let settings = config::load_config(&cli.settings_dir)?;
    telemetry::init(cli.verbose, cli.quiet, settings.log_level())?;

    match cli.command {
        cli::Commands::Score(cmd) => {
            let document = loader::load_document(&cmd.document)?;
            let responses = loader::load_responses(&cmd.responses)?;
            let options = engine_options(&settings, cmd.strict, cmd.top);

            let summary = match engine::generate_summary_report(&document, &responses, &options) {
                Ok(summary) => summary,
                Err(e) => {
                    warn!(error = %e, "scoring failed");
                    println!("{}", report::json::to_json(&e.payload())?);
                    return Ok(exit_code::BLOCKING);
                }
            };

            let rendered = report::render_summary(&summary, output_format(cmd.format, &settings))?;
            println!("{rendered}");

            if let Some(dir) = cmd.save {
                let document_bytes = std::fs::read(&cmd.document)?;
                let responses_bytes = std::fs::read(&cmd.responses)?;
                let envelope = ExportEnvelope::new(
                    Some(document_bytes.as_slice()),
                    &responses_bytes,
                    &summary,
                );
                let path = export::write_export(&dir, "assessment", &envelope)?;
                info!(path = %path.display(), "report saved");
                eprintln!("saved: {}", path.display());
            }

            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Twin(cmd) => {
            let catalog = match &cmd.catalog {
                Some(path) => TwinCatalog::load(path)?,
                None => TwinCatalog::standard()?,
            };
            let responses = loader::load_responses(&cmd.responses)?;
            let result = twin::calculate_digital_twin_scores(&catalog, &responses);

            let rendered = report::render_twin(&result, output_format(cmd.format, &settings))?;
            println!("{rendered}");

            if let Some(dir) = cmd.save {
                let catalog_bytes = match &cmd.catalog {
                    Some(path) => Some(std::fs::read(path)?),
                    None => None,
                };
                let responses_bytes = std::fs::read(&cmd.responses)?;
                let envelope =
                    ExportEnvelope::new(catalog_bytes.as_deref(), &responses_bytes, &result);
                let path = export::write_export(&dir, "twin", &envelope)?;
                info!(path = %path.display(), "report saved");
                eprintln!("saved: {}", path.display());
            }

            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Batch(cmd) => {
            if !cmd.dir.is_dir() {
                return Err(AssessorError::PathNotFound(cmd.dir.display().to_string()));
            }
            let document = loader::load_document(&cmd.document)?;
            let options = engine_options(&settings, cmd.strict, None);

            let files = WalkDir::new(&cmd.dir)
                .sort_by_file_name()
                .into_iter()
                .filter_map(|entry| entry.ok())
                .filter(|entry| entry.file_type().is_file() && is_json_file(entry.path()))
                .map(|entry| entry.into_path())
                .collect::<Vec<_>>();

            if files.is_empty() {
                println!("batch: no response files in {}", cmd.dir.display());
                return Ok(exit_code::SUCCESS);
            }

            let mut failures = 0usize;
            for path in &files {
                let label = path.strip_prefix(&cmd.dir).unwrap_or(path).display();
                let outcome = loader::load_responses(path)
                    .map_err(|e| e.to_string())
                    .and_then(|responses| {
                        engine::generate_summary_report(&document, &responses, &options)
                            .map_err(|e| e.to_string())
                    });
                match outcome {
                    Ok(summary) => println!(
                        "{label}: {} ({}% complete)",
                        summary.profile_name, summary.completion_percentage
                    ),
                    Err(e) => {
                        failures += 1;
                        warn!(file = %label, error = %e, "batch entry failed");
                        println!("{label}: error: {e}");
                    }
                }
            }

            info!(total = files.len(), failures, "batch complete");
            if failures > 0 {
                Ok(exit_code::WARNINGS)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
        cli::Commands::Validate(cmd) => {
            let document = loader::load_document(&cmd.document)?;
            let mode = if cmd.strict {
                MatchMode::Strict
            } else {
                settings.match_mode()
            };
            let findings = lint::validate_document(&document, mode);

            let rendered = report::render_findings(&findings, output_format(cmd.format, &settings))?;
            println!("{}", rendered.trim_end());

            if findings.iter().any(|finding| finding.blocking) {
                Ok(exit_code::BLOCKING)
            } else if !findings.is_empty() {
                Ok(exit_code::WARNINGS)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
