use wcagcheck_types::{Category, Grade, Impact, SeverityLevel, Verdict};

/// Summary badge: grade label and score.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BadgeView {
    pub grade: Option<Grade>,
    pub score: u32,
    pub severity: SeverityLevel,
}

impl BadgeView {
    /// `AAA`, `AA`, `A` or `Fail`.
    pub fn label(&self) -> &'static str {
        self.grade.map_or("Fail", Grade::as_str)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowStatus {
    Passed,
    Failed,
    /// The check itself could not complete.
    Error,
}

impl RowStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            RowStatus::Passed => "passed",
            RowStatus::Failed => "failed",
            RowStatus::Error => "error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryRow {
    pub category: Category,
    pub passed: u32,
    pub total: u32,
    pub status: RowStatus,
    pub error: Option<String>,
}

/// Violations sharing message and impact, collapsed into one entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroupedViolation {
    pub message: String,
    pub impact: Impact,
    pub count: usize,
    /// Markup of the first occurrence.
    pub example: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryResults {
    pub category: Category,
    pub groups: Vec<GroupedViolation>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tip {
    pub category: Category,
    pub text: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportView {
    pub badge: BadgeView,
    pub details: Vec<CategoryRow>,
    pub results: Vec<CategoryResults>,
    pub tips: Vec<Tip>,
}

impl ReportView {
    pub fn violation_count(&self) -> usize {
        self.results
            .iter()
            .flat_map(|r| &r.groups)
            .map(|g| g.count)
            .sum()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageView {
    pub path: String,
    pub view: ReportView,
}

/// Several audited pages under one verdict.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableReport {
    pub verdict: Verdict,
    pub pages: Vec<PageView>,
}
