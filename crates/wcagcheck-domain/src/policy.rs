//! Severity policy: which violations are surfaced at each strictness level.
//!
//! The four tiers are intentionally coarse. `medium` and `high` treat a violation as
//! important when its message carries [`IMPORTANT_MARKER`].

use std::collections::BTreeSet;
use wcagcheck_types::{Impact, SeverityLevel, Violation};

/// Substring (ASCII case-insensitive) that flags a message as important.
pub const IMPORTANT_MARKER: &str = "important";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuditPolicy {
    pub severity: SeverityLevel,
    /// Rule codes whose messages carry the important marker in addition to the built-in ones.
    pub important_rules: BTreeSet<String>,
}

impl AuditPolicy {
    pub fn new(severity: SeverityLevel) -> Self {
        Self {
            severity,
            important_rules: BTreeSet::new(),
        }
    }

    pub fn with_important_rules<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.important_rules
            .extend(codes.into_iter().map(Into::into));
        self
    }

    pub fn is_flagged(&self, code: &str) -> bool {
        self.important_rules.contains(code)
    }
}

pub fn is_important(message: &str) -> bool {
    message.to_ascii_lowercase().contains(IMPORTANT_MARKER)
}

/// Whether a single violation is surfaced at `level`.
pub fn surfaces(impact: Impact, message: &str, level: SeverityLevel) -> bool {
    match level {
        SeverityLevel::VeryLow => impact == Impact::Critical,
        SeverityLevel::Low => matches!(impact, Impact::Critical | Impact::Serious),
        SeverityLevel::Medium => match impact {
            Impact::Critical | Impact::Serious => true,
            Impact::Moderate => is_important(message),
            Impact::Minor => false,
        },
        SeverityLevel::High => impact != Impact::Minor || is_important(message),
    }
}

/// Keep the violations that should be surfaced at `level`, preserving order.
pub fn filter(violations: Vec<Violation>, level: SeverityLevel) -> Vec<Violation> {
    violations
        .into_iter()
        .filter(|v| surfaces(v.impact, &v.message, level))
        .collect()
}
