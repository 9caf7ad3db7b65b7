use crate::error::AssessorError;
use crate::types::scoring::MatchMode;
use serde::Deserialize;

pub const DEFAULT_TOP_RECOMMENDATIONS: usize = 3;
pub const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssessorConfig {
    pub engine: Option<EngineConfig>,
    pub report: Option<ReportConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    pub match_mode: Option<MatchMode>,
    pub top_recommendations: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormatSetting {
    Json,
    Md,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    pub format: Option<ReportFormatSetting>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

impl AssessorConfig {
    pub fn match_mode(&self) -> MatchMode {
        self.engine
            .as_ref()
            .and_then(|engine| engine.match_mode)
            .unwrap_or_default()
    }

    pub fn top_recommendations(&self) -> usize {
        self.engine
            .as_ref()
            .and_then(|engine| engine.top_recommendations)
            .unwrap_or(DEFAULT_TOP_RECOMMENDATIONS)
    }

    pub fn report_format(&self) -> Option<ReportFormatSetting> {
        self.report.as_ref().and_then(|report| report.format)
    }

    pub fn log_level(&self) -> &str {
        self.logging
            .as_ref()
            .and_then(|logging| logging.level.as_deref())
            .unwrap_or(DEFAULT_LOG_LEVEL)
    }

    pub fn validate(&self) -> Result<(), AssessorError> {
        if let Some(top) = self
            .engine
            .as_ref()
            .and_then(|engine| engine.top_recommendations)
        {
            if top == 0 {
                return Err(AssessorError::ConfigParse(
                    "engine.top_recommendations must be greater than 0".to_string(),
                ));
            }
        }

        const ALLOWED_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];
        let level = self.log_level();
        if !ALLOWED_LEVELS.contains(&level.to_ascii_lowercase().as_str()) {
            return Err(AssessorError::ConfigParse(format!(
                "unsupported logging.level: {level}"
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let cfg: AssessorConfig = toml::from_str("").expect("empty config should parse");
        assert_eq!(cfg.match_mode(), MatchMode::Fuzzy);
        assert_eq!(cfg.top_recommendations(), 3);
        assert_eq!(cfg.log_level(), "warn");
        assert!(cfg.report_format().is_none());
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn parse_full_config() {
        let toml_str = r#"
[engine]
match_mode = "strict"
top_recommendations = 5

[report]
format = "json"

[logging]
level = "debug"
"#;
        let cfg: AssessorConfig = toml::from_str(toml_str).expect("full config should parse");
        assert_eq!(cfg.match_mode(), MatchMode::Strict);
        assert_eq!(cfg.top_recommendations(), 5);
        assert_eq!(cfg.report_format(), Some(ReportFormatSetting::Json));
        assert_eq!(cfg.log_level(), "debug");
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn validate_rejects_zero_top_recommendations() {
        let cfg: AssessorConfig = toml::from_str(
            r#"
[engine]
top_recommendations = 0
"#,
        )
        .expect("config should parse");
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err
            .to_string()
            .contains("engine.top_recommendations must be greater than 0"));
    }

    #[test]
    fn validate_rejects_unknown_log_level() {
        let cfg: AssessorConfig = toml::from_str(
            r#"
[logging]
level = "loud"
"#,
        )
        .expect("config should parse");
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("unsupported logging.level"));
    }

    #[test]
    fn unknown_match_mode_fails_to_parse() {
        let parsed = toml::from_str::<AssessorConfig>(
            r#"
[engine]
match_mode = "exact"
"#,
        );
        assert!(parsed.is_err());
    }
}
