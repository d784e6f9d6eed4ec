use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// `wcagcheck.toml` schema v1.
///
/// Every field is optional so an empty file is a valid config. Unknown keys are ignored.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WcagcheckConfigV1 {
    /// Optional schema string for tooling (`wcagcheck.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Default level when nothing is stored: `very-low`, `low`, `medium` or `high`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,

    /// Globs (relative to the audited directory) selecting pages for `--dir` audits.
    #[serde(default)]
    pub include: Vec<String>,

    #[serde(default)]
    pub exclude: Vec<String>,

    /// Rule codes whose messages carry the important marker.
    #[serde(default)]
    pub important_rules: Vec<String>,

    /// Where the selected severity is persisted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_file: Option<String>,
}
