use crate::checks;
use crate::grade;
use crate::model::Document;
use crate::policy::AuditPolicy;
use crate::score;
use wcagcheck_types::{AuditReport, Category, CategoryOutcome, CheckOutcome};

/// Run all seven categories against the document and grade the result.
///
/// Each category runs independently: a failing check is recorded as
/// [`CheckOutcome::Failed`] and does not stop the others.
pub fn audit(doc: &Document, policy: &AuditPolicy) -> AuditReport {
    let categories: Vec<CategoryOutcome> = Category::ALL
        .into_iter()
        .map(|category| {
            let outcome = match checks::run_category(doc, policy, category) {
                Ok(result) => {
                    tracing::debug!(
                        category = category.as_str(),
                        total = result.total(),
                        violations = result.violations().len(),
                        "check completed"
                    );
                    CheckOutcome::Completed(result)
                }
                Err(err) => {
                    tracing::warn!(category = category.as_str(), error = %err, "check failed");
                    CheckOutcome::Failed {
                        error: err.to_string(),
                    }
                }
            };
            CategoryOutcome { category, outcome }
        })
        .collect();

    let score = score::calculate_score(&categories);
    let grade = grade::determine_grade(score, policy.severity);

    AuditReport {
        severity: policy.severity,
        score,
        grade,
        categories,
    }
}
