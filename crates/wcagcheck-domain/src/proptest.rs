//! Property-based tests for the domain crate.
//!
//! Covered invariants:
//! - Severity filtering only ever removes violations and preserves order
//! - Raising the severity never hides a violation a lower level surfaced
//! - Scores stay in range and audits are deterministic

use crate::engine::audit;
use crate::grade::{determine_grade, thresholds};
use crate::model::Document;
use crate::policy::{filter, surfaces, AuditPolicy};
use crate::score::{banded_pass_fraction, calculate_score};
use crate::test_support::PageBuilder;
use proptest::prelude::*;
use wcagcheck_types::{
    Category, CategoryOutcome, CheckOutcome, CheckResult, Impact, SeverityLevel, Violation,
};

// ============================================================================
// Strategies
// ============================================================================

fn arb_impact() -> impl Strategy<Value = Impact> {
    prop::sample::select(Impact::ALL.to_vec())
}

fn arb_level() -> impl Strategy<Value = SeverityLevel> {
    prop::sample::select(SeverityLevel::ALL.to_vec())
}

fn arb_message() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z ]{0,24}",
        "[a-z ]{0,12}".prop_map(|m| format!("{m} (important)")),
        "[a-z ]{0,12}".prop_map(|m| format!("IMPORTANT {m}")),
    ]
}

fn arb_violation() -> impl Strategy<Value = Violation> {
    (prop::sample::select(Category::ALL.to_vec()), arb_impact(), arb_message()).prop_map(
        |(category, impact, message)| Violation {
            category,
            code: "prop".to_string(),
            message,
            impact,
            element: None,
            fingerprint: None,
        },
    )
}

fn arb_outcome(category: Category) -> impl Strategy<Value = CategoryOutcome> {
    prop_oneof![
        4 => (prop::collection::vec(arb_violation(), 0..12), 0u32..16).prop_map(
            move |(violations, total)| CategoryOutcome {
                category,
                outcome: CheckOutcome::Completed(CheckResult::new(violations, total)),
            }
        ),
        1 => Just(CategoryOutcome {
            category,
            outcome: CheckOutcome::Failed {
                error: "boom".to_string(),
            },
        }),
    ]
}

fn arb_outcomes() -> impl Strategy<Value = Vec<CategoryOutcome>> {
    Category::ALL
        .into_iter()
        .map(arb_outcome)
        .collect::<Vec<_>>()
}

type Piece = (&'static str, &'static [(&'static str, &'static str)], &'static str);

const PALETTE: &[Piece] = &[
    ("h1", &[], "Title"),
    ("h2", &[], "Section"),
    ("h4", &[], "Deep"),
    ("h3", &[], ""),
    ("img", &[("src", "a.png")], ""),
    ("img", &[("src", "b.png"), ("alt", "photo")], ""),
    ("a", &[("href", "/")], ""),
    ("a", &[("href", "/more")], "read more"),
    ("a", &[("href", "javascript:go()")], "Go"),
    ("input", &[("type", "text")], ""),
    ("div", &[("role", "banana")], "Fruit"),
    ("main", &[], ""),
    ("button", &[("tabindex", "-1")], "Skip"),
    ("p", &[], "Body copy"),
];

/// Small pages built from a fixed palette of elements.
fn arb_page() -> impl Strategy<Value = Document> {
    prop::collection::vec(prop::sample::select(PALETTE), 0..12).prop_map(|pieces| {
        let mut page = PageBuilder::new();
        let body = page.body;
        for (tag, attrs, text) in pieces {
            if text.is_empty() {
                page.add(body, tag, attrs);
            } else {
                page.add_text(body, tag, attrs, text);
            }
        }
        page.build()
    })
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn filter_is_an_order_preserving_subset(
        violations in prop::collection::vec(arb_violation(), 0..24),
        level in arb_level(),
    ) {
        let kept = filter(violations.clone(), level);
        prop_assert!(kept.len() <= violations.len());

        let mut rest = violations.iter();
        for v in &kept {
            prop_assert!(rest.any(|o| o == v), "kept violation out of order");
        }
    }

    #[test]
    fn higher_levels_surface_at_least_as_much(
        impact in arb_impact(),
        message in arb_message(),
        a in arb_level(),
        b in arb_level(),
    ) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        if surfaces(impact, &message, lo) {
            prop_assert!(surfaces(impact, &message, hi));
        }
    }

    #[test]
    fn critical_is_always_surfaced(message in arb_message(), level in arb_level()) {
        prop_assert!(surfaces(Impact::Critical, &message, level));
    }

    #[test]
    fn banded_fraction_is_a_fraction(violations in 0usize..64, total in 0u32..64) {
        let f = banded_pass_fraction(violations, total);
        prop_assert!((0.0..=1.0).contains(&f));
    }

    #[test]
    fn score_is_bounded_and_deterministic(outcomes in arb_outcomes()) {
        let score = calculate_score(&outcomes);
        prop_assert!(score <= 100);
        prop_assert_eq!(score, calculate_score(&outcomes));
    }

    #[test]
    fn scores_below_the_a_threshold_fail(score in 0u32..=100, level in arb_level()) {
        let [_, _, a] = thresholds(level);
        prop_assert_eq!(determine_grade(score, level).is_none(), score < a);
    }

    #[test]
    fn grade_is_monotone_in_score(a in 0u32..=100, b in 0u32..=100, level in arb_level()) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(determine_grade(lo, level) <= determine_grade(hi, level));
    }

    #[test]
    fn stricter_levels_never_grade_higher(
        score in 0u32..=100,
        a in arb_level(),
        b in arb_level(),
    ) {
        let (lenient, strict) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(determine_grade(score, strict) <= determine_grade(score, lenient));
    }

    #[test]
    fn audits_are_deterministic_and_complete(doc in arb_page(), level in arb_level()) {
        let policy = AuditPolicy::new(level);
        let first = audit(&doc, &policy);
        prop_assert_eq!(&first, &audit(&doc, &policy));
        prop_assert_eq!(first.categories.len(), 7);
        prop_assert!(first.score <= 100);
        prop_assert_eq!(first.severity, level);
    }

    #[test]
    fn surfaced_violations_match_the_level(doc in arb_page(), level in arb_level()) {
        let report = audit(&doc, &AuditPolicy::new(level));
        for entry in &report.categories {
            for v in entry.outcome.violations() {
                prop_assert!(surfaces(v.impact, &v.message, level), "{}", v.message);
            }
        }
    }
}
