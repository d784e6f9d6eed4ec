//! The `explain` use case: look up category and rule documentation.

use wcagcheck_types::explain::{self, Explanation};

#[derive(Clone, Debug)]
pub enum ExplainOutput {
    Found(Explanation),
    /// Unknown identifier; lists what is available.
    NotFound {
        identifier: String,
        available_categories: &'static [&'static str],
        available_codes: &'static [&'static str],
    },
}

/// Look up an explanation for a category id or rule code.
pub fn run_explain(identifier: &str) -> ExplainOutput {
    match explain::lookup_explanation(identifier) {
        Some(exp) => ExplainOutput::Found(exp),
        None => ExplainOutput::NotFound {
            identifier: identifier.to_string(),
            available_categories: explain::all_category_ids(),
            available_codes: explain::all_codes(),
        },
    }
}

pub fn format_explanation(exp: &Explanation) -> String {
    let mut out = String::new();

    out.push_str(exp.title);
    out.push('\n');
    out.push_str(&"=".repeat(exp.title.chars().count()));
    out.push_str("\n\n");
    out.push_str(exp.description);
    out.push_str("\n\nHow to fix\n----------\n");
    out.push_str(exp.remediation);
    out.push_str("\n\nExamples\n--------\n\n");
    out.push_str("Before (violation):\n```html\n");
    out.push_str(exp.examples.before);
    out.push_str("\n```\n\nAfter (fixed):\n```html\n");
    out.push_str(exp.examples.after);
    out.push_str("\n```\n");

    out
}

pub fn format_not_found(identifier: &str, categories: &[&str], codes: &[&str]) -> String {
    let mut out = format!("Unknown category or rule code: {identifier}\n\nAvailable categories:\n");
    for id in categories {
        out.push_str(&format!("  - {id}\n"));
    }
    out.push_str("\nAvailable rule codes:\n");
    for code in codes {
        out.push_str(&format!("  - {code}\n"));
    }
    out
}
