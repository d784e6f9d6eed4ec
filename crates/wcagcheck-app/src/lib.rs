//! Use case orchestration for wcagcheck.
//!
//! The application layer coordinates settings, page loading, evaluation and rendering. The CLI
//! crate depends on this and only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod audit;
mod explain;
mod render;
mod report;
mod session;
mod settings;

pub use audit::{run_audit, verdict_exit_code, AuditInput};
pub use explain::{format_explanation, format_not_found, run_explain, ExplainOutput};
pub use render::{run_html, run_markdown, write_text};
pub use report::{parse_report_json, serialize_report, to_renderable};
pub use session::{AuditSession, SessionState};
pub use settings::{load_settings, Settings, SettingsSummary};
