use wcagcheck_types::{Grade, SeverityLevel};

/// Minimum scores for `AAA`, `AA` and `A` at a severity level.
pub fn thresholds(level: SeverityLevel) -> [u32; 3] {
    match level {
        SeverityLevel::VeryLow => [75, 65, 55],
        SeverityLevel::Low => [80, 70, 60],
        SeverityLevel::Medium => [85, 75, 65],
        SeverityLevel::High => [90, 80, 70],
    }
}

/// Map a score to a grade; `None` is a fail.
pub fn determine_grade(score: u32, level: SeverityLevel) -> Option<Grade> {
    let [aaa, aa, a] = thresholds(level);
    if score >= aaa {
        Some(Grade::AAA)
    } else if score >= aa {
        Some(Grade::AA)
    } else if score >= a {
        Some(Grade::A)
    } else {
        None
    }
}
