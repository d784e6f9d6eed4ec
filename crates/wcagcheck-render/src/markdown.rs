use crate::model::{RenderableReport, ReportView, RowStatus};
use std::fmt::Write;
use wcagcheck_types::Verdict;

pub fn render_markdown(report: &RenderableReport) -> String {
    let mut out = String::new();

    out.push_str("# wcagcheck report\n\n");
    let verdict = match report.verdict {
        Verdict::Pass => "PASS",
        Verdict::Fail => "FAIL",
    };
    let _ = write!(
        out,
        "- Verdict: **{}**\n- Pages: {}\n",
        verdict,
        report.pages.len()
    );

    if report.pages.is_empty() {
        out.push_str("\nNo pages audited.\n");
        return out;
    }

    for page in &report.pages {
        let _ = write!(out, "\n## `{}`\n\n", page.path);
        render_page(&mut out, &page.view);
    }

    out
}

fn table_cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}

fn render_page(out: &mut String, view: &ReportView) {
    let _ = writeln!(
        out,
        "- Grade: **{}** (score {}%, severity {})\n",
        view.badge.label(),
        view.badge.score,
        view.badge.severity
    );

    out.push_str("| Category | Passed | Status |\n|---|---|---|\n");
    for row in &view.details {
        let (ratio, status) = match (row.status, &row.error) {
            (RowStatus::Error, Some(error)) => {
                ("-".to_string(), format!("error: {}", table_cell(error)))
            }
            _ => (
                format!("{}/{}", row.passed, row.total),
                row.status.as_str().to_string(),
            ),
        };
        let _ = writeln!(out, "| {} | {} | {} |", row.category.label(), ratio, status);
    }

    if view.results.is_empty() {
        out.push_str("\nNo issues found.\n");
        return;
    }

    for category in &view.results {
        let _ = write!(out, "\n### {}\n\n", category.category.label());
        for group in &category.groups {
            let _ = write!(out, "- [{}] {}", group.impact, group.message);
            if group.count > 1 {
                let _ = write!(out, " (×{})", group.count);
            }
            out.push('\n');
            if let Some(example) = &group.example {
                let _ = writeln!(out, "  - `{}`", example.replace('`', "'"));
            }
        }
    }

    out.push_str("\n### Tips\n\n");
    for tip in &view.tips {
        let _ = writeln!(out, "- **{}**: {}", tip.category.label(), tip.text);
    }
}
