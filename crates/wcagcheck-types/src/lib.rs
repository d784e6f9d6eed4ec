//! Stable DTOs and IDs used across the wcagcheck workspace.
//!
//! This crate is intentionally boring:
//! - data types for violations, check results and the emitted report
//! - the severity ladder and impact classification
//! - stable string IDs for categories and rule codes
//! - explain registry for remediation guidance

#![forbid(unsafe_code)]

pub mod explain;
pub mod ids;
pub mod report;
pub mod severity;
pub mod violation;

pub use explain::{lookup_explanation, ExamplePair, Explanation};
pub use report::{
    AuditEnvelope, AuditReport, CategoryOutcome, Grade, PageReport, RunMeta, ToolMeta, Verdict,
    SCHEMA_REPORT_V1,
};
pub use severity::{Impact, ParseSeverityError, SeverityLevel, SEVERITY_STORAGE_KEY};
pub use violation::{Category, CheckOutcome, CheckResult, Violation};
