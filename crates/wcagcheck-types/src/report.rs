use crate::severity::SeverityLevel;
use crate::violation::{Category, CheckOutcome};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use time::OffsetDateTime;

/// Stable schema identifier for wcagcheck reports.
pub const SCHEMA_REPORT_V1: &str = "wcagcheck.report.v1";

/// Conformance grade. A failed audit is represented as `Option::<Grade>::None`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
pub enum Grade {
    A,
    AA,
    AAA,
}

impl Grade {
    pub fn as_str(self) -> &'static str {
        match self {
            Grade::A => "A",
            Grade::AA => "AA",
            Grade::AAA => "AAA",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CategoryOutcome {
    pub category: Category,
    #[serde(flatten)]
    pub outcome: CheckOutcome,
}

/// Aggregate of all seven category outcomes plus score and grade.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AuditReport {
    pub severity: SeverityLevel,
    /// Weighted percentage, 0..=100.
    pub score: u32,
    /// `None` means the page failed at the active severity.
    pub grade: Option<Grade>,
    pub categories: Vec<CategoryOutcome>,
}

impl AuditReport {
    pub fn outcome(&self, category: Category) -> Option<&CheckOutcome> {
        self.categories
            .iter()
            .find(|c| c.category == category)
            .map(|c| &c.outcome)
    }

    pub fn violation_count(&self) -> usize {
        self.categories
            .iter()
            .map(|c| c.outcome.violations().len())
            .sum()
    }

    pub fn failed_categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.categories
            .iter()
            .filter(|c| matches!(c.outcome, CheckOutcome::Failed { .. }))
            .map(|c| c.category)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Pass,
    Fail,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RunMeta {
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub ended_at: OffsetDateTime,
    pub duration_ms: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PageReport {
    /// Page path as given on the command line or relative to the audited directory.
    pub path: String,
    pub report: AuditReport,
}

/// The JSON document written by the CLI.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AuditEnvelope {
    /// Versioned schema identifier for the envelope shape.
    pub schema: String,
    pub tool: ToolMeta,
    pub run: RunMeta,
    pub verdict: Verdict,
    pub pages: Vec<PageReport>,
}

impl AuditEnvelope {
    /// A run passes when every page earned a grade.
    pub fn verdict_for(pages: &[PageReport]) -> Verdict {
        if pages.iter().all(|p| p.report.grade.is_some()) {
            Verdict::Pass
        } else {
            Verdict::Fail
        }
    }
}
