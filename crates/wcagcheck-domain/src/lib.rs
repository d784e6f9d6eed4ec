//! Pure accessibility evaluation (no IO).
//!
//! Input: a document model constructed elsewhere plus the active audit policy.
//! Output: per-category outcomes, a weighted score and a grade.

#![forbid(unsafe_code)]

pub mod color;
pub mod error;
pub mod grade;
pub mod model;
pub mod policy;
pub mod rules;
pub mod score;

mod checks;
mod engine;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use checks::run_category;
pub use engine::audit;
pub use error::CheckError;
pub use grade::determine_grade;
pub use policy::{filter, AuditPolicy, IMPORTANT_MARKER};
pub use score::calculate_score;
