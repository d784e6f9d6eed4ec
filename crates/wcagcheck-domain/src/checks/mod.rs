use crate::error::CheckError;
use crate::model::Document;
use crate::policy::{self, AuditPolicy};
use crate::rules;
use wcagcheck_types::{Category, CheckResult};

pub(crate) mod aria;
pub(crate) mod contrast;
pub(crate) mod forms;
pub(crate) mod headings;
pub(crate) mod images;
pub(crate) mod keyboard;
pub(crate) mod links;
mod utils;


/// Run every rule of one category that is enabled at the policy's severity.
///
/// Raw violations pass through [`policy::filter`] before the result is built.
pub fn run_category(
    doc: &Document,
    policy: &AuditPolicy,
    category: Category,
) -> Result<CheckResult, CheckError> {
    let spec = rules::category_spec(category);
    if policy.severity < spec.min_level {
        return Ok(CheckResult::skipped());
    }

    let total = (spec.population)(doc);
    let mut raw = Vec::new();
    for rule in rules::rules_for(category).filter(|r| policy.severity >= r.min_level) {
        for hit in (rule.detect)(doc)? {
            raw.push(utils::violation(doc, rule, hit, policy));
        }
    }

    let filtered = policy::filter(raw, policy.severity);
    Ok(CheckResult::new(
        filtered,
        u32::try_from(total).unwrap_or(u32::MAX),
    ))
}
