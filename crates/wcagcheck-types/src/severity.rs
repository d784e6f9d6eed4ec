use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Storage key the selected strictness level is persisted under.
pub const SEVERITY_STORAGE_KEY: &str = "wcagCheckerSeverity";

/// Impact of a single violation, assigned by the rule that detected it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    Critical,
    Serious,
    Moderate,
    Minor,
}

impl Impact {
    pub const ALL: [Impact; 4] = [
        Impact::Critical,
        Impact::Serious,
        Impact::Moderate,
        Impact::Minor,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Impact::Critical => "critical",
            Impact::Serious => "serious",
            Impact::Moderate => "moderate",
            Impact::Minor => "minor",
        }
    }

    /// Parse an impact label; anything unrecognised is treated as `moderate`.
    pub fn parse_lossy(value: &str) -> Impact {
        match value.trim().to_ascii_lowercase().as_str() {
            "critical" => Impact::Critical,
            "serious" => Impact::Serious,
            "minor" => Impact::Minor,
            _ => Impact::Moderate,
        }
    }
}

impl fmt::Display for Impact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Impact {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Impact::parse_lossy(&raw))
    }
}

/// User-selected strictness, ordered from least to most strict.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum SeverityLevel {
    VeryLow,
    #[default]
    Low,
    Medium,
    High,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown severity level: {0} (expected very-low|low|medium|high)")]
pub struct ParseSeverityError(pub String);

impl SeverityLevel {
    pub const ALL: [SeverityLevel; 4] = [
        SeverityLevel::VeryLow,
        SeverityLevel::Low,
        SeverityLevel::Medium,
        SeverityLevel::High,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SeverityLevel::VeryLow => "very-low",
            SeverityLevel::Low => "low",
            SeverityLevel::Medium => "medium",
            SeverityLevel::High => "high",
        }
    }
}

impl FromStr for SeverityLevel {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "very-low" => Ok(SeverityLevel::VeryLow),
            "low" => Ok(SeverityLevel::Low),
            "medium" => Ok(SeverityLevel::Medium),
            "high" => Ok(SeverityLevel::High),
            other => Err(ParseSeverityError(other.to_string())),
        }
    }
}

impl fmt::Display for SeverityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
