use crate::model::{
    BadgeView, CategoryResults, CategoryRow, GroupedViolation, ReportView, RowStatus, Tip,
};
use wcagcheck_types::{explain, AuditReport, CheckOutcome, Violation};

pub fn build_view(report: &AuditReport) -> ReportView {
    let badge = BadgeView {
        grade: report.grade,
        score: report.score,
        severity: report.severity,
    };

    let details = report
        .categories
        .iter()
        .map(|entry| match &entry.outcome {
            CheckOutcome::Completed(result) => {
                let violations = u32::try_from(result.violations().len()).unwrap_or(u32::MAX);
                CategoryRow {
                    category: entry.category,
                    passed: result.total().saturating_sub(violations),
                    total: result.total(),
                    status: if result.passed() {
                        RowStatus::Passed
                    } else {
                        RowStatus::Failed
                    },
                    error: None,
                }
            }
            CheckOutcome::Failed { error } => CategoryRow {
                category: entry.category,
                passed: 0,
                total: 0,
                status: RowStatus::Error,
                error: Some(error.clone()),
            },
        })
        .collect();

    let results: Vec<CategoryResults> = report
        .categories
        .iter()
        .filter(|entry| !entry.outcome.violations().is_empty())
        .map(|entry| CategoryResults {
            category: entry.category,
            groups: group(entry.outcome.violations()),
        })
        .collect();

    let tips = results
        .iter()
        .map(|r| Tip {
            category: r.category,
            text: explain::category_tip(r.category),
        })
        .collect();

    ReportView {
        badge,
        details,
        results,
        tips,
    }
}

/// Group by `message + impact`, keeping first-seen order.
fn group(violations: &[Violation]) -> Vec<GroupedViolation> {
    let mut groups: Vec<GroupedViolation> = Vec::new();
    for v in violations {
        match groups
            .iter_mut()
            .find(|g| g.message == v.message && g.impact == v.impact)
        {
            Some(g) => g.count += 1,
            None => groups.push(GroupedViolation {
                message: v.message.clone(),
                impact: v.impact,
                count: 1,
                example: v.element.clone(),
            }),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use wcagcheck_types::{
        Category, CategoryOutcome, CheckResult, Grade, Impact, SeverityLevel,
    };

    fn v(category: Category, message: &str, impact: Impact, element: &str) -> Violation {
        Violation {
            category,
            code: "test".to_string(),
            message: message.to_string(),
            impact,
            element: Some(element.to_string()),
            fingerprint: None,
        }
    }

    fn report() -> AuditReport {
        let images = vec![
            v(Category::Images, "Image is missing alt text", Impact::Serious, "<img src=\"a\">"),
            v(Category::Images, "Image alt text \"photo\" is not descriptive", Impact::Minor, "<img alt=\"photo\">"),
            v(Category::Images, "Image is missing alt text", Impact::Serious, "<img src=\"b\">"),
            v(Category::Images, "Image is missing alt text", Impact::Moderate, "<img src=\"c\">"),
        ];
        let categories = Category::ALL
            .into_iter()
            .map(|category| CategoryOutcome {
                category,
                outcome: match category {
                    Category::Images => CheckOutcome::Completed(CheckResult::new(images.clone(), 5)),
                    Category::Contrast => CheckOutcome::Failed {
                        error: "unparsable color value \"x\" on <p>".to_string(),
                    },
                    _ => CheckOutcome::Completed(CheckResult::new(Vec::new(), 3)),
                },
            })
            .collect();
        AuditReport {
            severity: SeverityLevel::High,
            score: 84,
            grade: Some(Grade::A),
            categories,
        }
    }

    #[test]
    fn groups_by_message_and_impact_in_first_seen_order() {
        let view = build_view(&report());
        assert_eq!(view.results.len(), 1);
        let groups = &view.results[0].groups;
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0].message, "Image is missing alt text");
        assert_eq!(groups[0].impact, Impact::Serious);
        assert_eq!(groups[0].count, 2);
        assert_eq!(groups[0].example.as_deref(), Some("<img src=\"a\">"));
        assert_eq!(groups[1].impact, Impact::Minor);
        assert_eq!(groups[2].impact, Impact::Moderate);
        assert_eq!(view.violation_count(), 4);
    }

    #[test]
    fn details_cover_every_category_with_status() {
        let view = build_view(&report());
        assert_eq!(view.details.len(), 7);

        let images = &view.details[1];
        assert_eq!((images.passed, images.total), (1, 5));
        assert_eq!(images.status, RowStatus::Failed);

        let contrast = &view.details[3];
        assert_eq!(contrast.status, RowStatus::Error);
        assert!(contrast.error.as_deref().unwrap().contains("unparsable"));

        assert_eq!(view.details[0].status, RowStatus::Passed);
        assert_eq!((view.details[0].passed, view.details[0].total), (3, 3));
    }

    #[test]
    fn one_tip_per_category_with_violations() {
        let view = build_view(&report());
        assert_eq!(view.tips.len(), 1);
        assert_eq!(view.tips[0].category, Category::Images);
        assert_eq!(view.tips[0].text, explain::category_tip(Category::Images));
    }

    #[test]
    fn badge_label_reports_fail_without_grade() {
        let mut r = report();
        assert_eq!(build_view(&r).badge.label(), "A");
        r.grade = None;
        assert_eq!(build_view(&r).badge.label(), "Fail");
    }

    #[test]
    fn passed_count_saturates_when_violations_exceed_total() {
        let mut r = report();
        r.categories[0].outcome = CheckOutcome::Completed(CheckResult::new(
            vec![
                v(Category::Headings, "a", Impact::Moderate, "<h2>"),
                v(Category::Headings, "b", Impact::Moderate, "<h2>"),
            ],
            1,
        ));
        assert_eq!(build_view(&r).details[0].passed, 0);
    }
}
