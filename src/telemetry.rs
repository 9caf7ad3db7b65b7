use crate::error::{AssessorError, Result};
use tracing_subscriber::EnvFilter;

/// Level implied by the `-v`/`-q` flags, if either was given.
pub fn flag_level(verbose: u8, quiet: bool) -> Option<&'static str> {
    if quiet {
        return Some("error");
    }
    match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}

/// `RUST_LOG` wins, then the flags, then the configured level.
pub fn resolve_level<'a>(verbose: u8, quiet: bool, configured: &'a str) -> &'a str {
    flag_level(verbose, quiet).unwrap_or(configured)
}

/// Installs the global subscriber. Logs go to stderr so stdout stays parseable.
pub fn init(verbose: u8, quiet: bool, configured: &str) -> Result<()> {
    let level = resolve_level(verbose, quiet, configured);
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level).map_err(|e| {
            AssessorError::Telemetry(format!("invalid log level '{level}': {e}"))
        })?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(|e| AssessorError::Telemetry(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_configured_level() {
        assert_eq!(resolve_level(0, false, "warn"), "warn");
        assert_eq!(resolve_level(1, false, "warn"), "info");
        assert_eq!(resolve_level(2, false, "warn"), "debug");
        assert_eq!(resolve_level(5, false, "warn"), "trace");
        assert_eq!(resolve_level(0, true, "debug"), "error");
    }
}
