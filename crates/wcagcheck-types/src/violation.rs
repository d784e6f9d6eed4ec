use crate::ids;
use crate::severity::Impact;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The seven audit categories, in report order.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Headings,
    Images,
    Links,
    Contrast,
    Forms,
    Aria,
    Keyboard,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Headings,
        Category::Images,
        Category::Links,
        Category::Contrast,
        Category::Forms,
        Category::Aria,
        Category::Keyboard,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Headings => ids::CATEGORY_HEADINGS,
            Category::Images => ids::CATEGORY_IMAGES,
            Category::Links => ids::CATEGORY_LINKS,
            Category::Contrast => ids::CATEGORY_CONTRAST,
            Category::Forms => ids::CATEGORY_FORMS,
            Category::Aria => ids::CATEGORY_ARIA,
            Category::Keyboard => ids::CATEGORY_KEYBOARD,
        }
    }

    /// Human-readable heading used by renderers.
    pub fn label(self) -> &'static str {
        match self {
            Category::Headings => "Headings",
            Category::Images => "Images",
            Category::Links => "Links",
            Category::Contrast => "Color contrast",
            Category::Forms => "Forms",
            Category::Aria => "ARIA",
            Category::Keyboard => "Keyboard navigation",
        }
    }

    pub fn from_id(id: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.as_str() == id)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One detected issue.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Violation {
    pub category: Category,
    pub code: String,
    pub message: String,
    pub impact: Impact,

    /// Outer markup snapshot of the offending node, for display only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element: Option<String>,

    /// Stable identifier intended for dedup and trending.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<String>,
}

/// Output of one rule check. Built once per audit and never mutated afterwards.
///
/// Deserialisation goes through [`CheckResult::new`], so a loaded report cannot carry a zero
/// total or a `passed` flag that disagrees with its violations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(from = "RawCheckResult")]
pub struct CheckResult {
    violations: Vec<Violation>,
    total: u32,
    passed: bool,
}

/// Wire shape of [`CheckResult`]; `passed` is recomputed on load.
#[derive(Deserialize, JsonSchema)]
struct RawCheckResult {
    #[serde(default)]
    violations: Vec<Violation>,
    total: u32,
    #[serde(default)]
    #[allow(dead_code)]
    passed: bool,
}

impl From<RawCheckResult> for CheckResult {
    fn from(raw: RawCheckResult) -> Self {
        CheckResult::new(raw.violations, raw.total)
    }
}

impl CheckResult {
    /// `total` is the number of examined elements; zero is clamped to one so scoring never
    /// divides by zero.
    pub fn new(violations: Vec<Violation>, total: u32) -> Self {
        let passed = violations.is_empty();
        Self {
            violations,
            total: total.max(1),
            passed,
        }
    }

    /// Result for a category that did not run at the active severity.
    pub fn skipped() -> Self {
        Self::new(Vec::new(), 1)
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn passed(&self) -> bool {
        self.passed
    }
}

/// A check either completes or fails on its own; a failure never hides other categories.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum CheckOutcome {
    Completed(CheckResult),
    Failed { error: String },
}

impl CheckOutcome {
    pub fn result(&self) -> Option<&CheckResult> {
        match self {
            CheckOutcome::Completed(r) => Some(r),
            CheckOutcome::Failed { .. } => None,
        }
    }

    pub fn violations(&self) -> &[Violation] {
        self.result().map(CheckResult::violations).unwrap_or(&[])
    }
}
