use serde::{Deserialize, Serialize};

/// Qualitative band assigned to a dimension by threshold comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Low,
    Medium,
    High,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Low => "low",
            Level::Medium => "medium",
            Level::High => "high",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "low" => Some(Level::Low),
            "medium" => Some(Level::Medium),
            "high" => Some(Level::High),
            _ => None,
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How question categories are resolved against dimension metadata names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Case-insensitive substring match in either direction.
    #[default]
    Fuzzy,
    /// Case-insensitive equality only.
    Strict,
}

/// Percentage cutoffs (0-100) for the medium and high levels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    pub medium: f64,
    pub high: f64,
}

impl Thresholds {
    pub fn classify(&self, percentage: u32) -> Level {
        let percentage = f64::from(percentage);
        if percentage >= self.high {
            Level::High
        } else if percentage >= self.medium {
            Level::Medium
        } else {
            Level::Low
        }
    }
}

/// `round(part / whole * 100)`, `0` when `whole` is not positive, clamped to `0..=100`.
pub fn rounded_percentage(part: i64, whole: i64) -> u32 {
    if whole <= 0 {
        return 0;
    }
    let ratio = (part as f64 / whole as f64) * 100.0;
    ratio.round().clamp(0.0, 100.0) as u32
}
