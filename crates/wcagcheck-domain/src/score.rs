//! Weighted percentage score over the category outcomes.
//!
//! Violation ratios are banded leniently: under a quarter counts as a full pass, under half as
//! 90%, under three quarters as 70%; only beyond that is the raw pass fraction used.

use crate::rules;
use wcagcheck_types::CategoryOutcome;

pub fn banded_pass_fraction(violations: usize, total: u32) -> f64 {
    let ratio = violations as f64 / f64::from(total.max(1));
    if ratio < 0.25 {
        1.0
    } else if ratio < 0.5 {
        0.9
    } else if ratio < 0.75 {
        0.7
    } else {
        (1.0 - ratio).max(0.0)
    }
}

/// Score in `0..=100`. Failed checks are left out of both the earned and the possible weight;
/// when nothing completed the score is 0.
pub fn calculate_score(categories: &[CategoryOutcome]) -> u32 {
    let mut earned = 0.0;
    let mut possible = 0u32;
    for entry in categories {
        let Some(result) = entry.outcome.result() else {
            continue;
        };
        let weight = rules::category_spec(entry.category).weight;
        earned += f64::from(weight) * banded_pass_fraction(result.violations().len(), result.total());
        possible += weight;
    }

    if possible == 0 {
        return 0;
    }
    (earned / f64::from(possible) * 100.0).round() as u32
}
