//! HTML for the page's mount points: `.wcag-grade`, `.wcag-details`, `.wcag-results` and
//! `#wcag-modal-content`. Every piece of report text is escaped.

use crate::model::{RenderableReport, ReportView, RowStatus};
use std::fmt::Write;
use wcagcheck_types::Verdict;

/// Inner HTML for each mount point.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HtmlFragments {
    pub grade: String,
    pub details: String,
    pub results: String,
    pub modal_content: String,
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn grade_class(view: &ReportView) -> String {
    format!("wcag-grade-{}", view.badge.label().to_ascii_lowercase())
}

pub fn render_html_fragments(view: &ReportView) -> HtmlFragments {
    let grade = format!(
        "<span class=\"wcag-badge {}\">{}</span> <span class=\"wcag-score\">{}%</span>",
        grade_class(view),
        view.badge.label(),
        view.badge.score
    );

    let mut details = String::from("<ul class=\"wcag-categories\">");
    for row in &view.details {
        let _ = write!(
            details,
            "<li class=\"wcag-{}\"><span class=\"wcag-category\">{}</span> ",
            row.status.as_str(),
            escape_html(row.category.label())
        );
        match (row.status, &row.error) {
            (RowStatus::Error, Some(error)) => {
                let _ = write!(
                    details,
                    "<span class=\"wcag-error\">check failed: {}</span>",
                    escape_html(error)
                );
            }
            _ => {
                let _ = write!(
                    details,
                    "<span class=\"wcag-ratio\">{}/{}</span>",
                    row.passed, row.total
                );
            }
        }
        details.push_str("</li>");
    }
    details.push_str("</ul>");

    let count = view.violation_count();
    let results = if count == 0 {
        format!(
            "<p class=\"wcag-summary\">No issues found at {} severity.</p>",
            view.badge.severity
        )
    } else {
        format!(
            "<p class=\"wcag-summary\">{count} issue{} found at {} severity.</p>\
             <button type=\"button\" class=\"wcag-open\" aria-controls=\"wcag-modal\">View details</button>",
            if count == 1 { "" } else { "s" },
            view.badge.severity
        )
    };

    let mut modal_content = String::new();
    for category in &view.results {
        let _ = write!(
            modal_content,
            "<section class=\"wcag-group\"><h3>{}</h3><ul>",
            escape_html(category.category.label())
        );
        for group in &category.groups {
            let _ = write!(
                modal_content,
                "<li class=\"wcag-impact-{}\"><span class=\"wcag-impact\">{}</span> {}",
                group.impact,
                group.impact,
                escape_html(&group.message)
            );
            if group.count > 1 {
                let _ = write!(modal_content, " <span class=\"wcag-count\">&times;{}</span>", group.count);
            }
            if let Some(example) = &group.example {
                let _ = write!(modal_content, "<pre><code>{}</code></pre>", escape_html(example));
            }
            modal_content.push_str("</li>");
        }
        modal_content.push_str("</ul></section>");
    }
    if !view.tips.is_empty() {
        modal_content.push_str("<section class=\"wcag-tips\"><h3>Tips</h3><ul>");
        for tip in &view.tips {
            let _ = write!(
                modal_content,
                "<li><strong>{}</strong>: {}</li>",
                escape_html(tip.category.label()),
                escape_html(tip.text)
            );
        }
        modal_content.push_str("</ul></section>");
    }

    HtmlFragments {
        grade,
        details,
        results,
        modal_content,
    }
}

/// A standalone document with one section of mount points per page.
///
/// A single page keeps the plain `wcag-modal` ids; with several pages each id gets the page's
/// 1-based position as a suffix so ids stay unique.
pub fn render_html_report(report: &RenderableReport) -> String {
    let verdict = match report.verdict {
        Verdict::Pass => "pass",
        Verdict::Fail => "fail",
    };
    let mut out = String::from(
        "<!doctype html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>Accessibility report</title>\n</head>\n<body>\n<main>\n\
         <h1>Accessibility report</h1>\n",
    );
    let _ = writeln!(
        out,
        "<p class=\"wcag-verdict wcag-verdict-{verdict}\">Verdict: {verdict}</p>"
    );

    let several = report.pages.len() > 1;
    for (i, page) in report.pages.iter().enumerate() {
        let suffix = if several {
            format!("-{}", i + 1)
        } else {
            String::new()
        };
        let f = render_html_fragments(&page.view);
        let _ = write!(
            out,
            "<section class=\"wcag-page\">\n<h2>{path}</h2>\n\
             <div class=\"wcag-grade\">{grade}</div>\n\
             <div class=\"wcag-details\">{details}</div>\n\
             <div class=\"wcag-results\">{results}</div>\n\
             <div id=\"wcag-modal{suffix}\" role=\"dialog\" aria-label=\"Accessibility issues\">\n\
             <div id=\"wcag-modal-content{suffix}\">{modal}</div>\n</div>\n</section>\n",
            path = escape_html(&page.path),
            grade = f.grade,
            details = f.details,
            results = f.results.replace(
                "aria-controls=\"wcag-modal\"",
                &format!("aria-controls=\"wcag-modal{suffix}\"")
            ),
            modal = f.modal_content,
        );
    }

    out.push_str("</main>\n</body>\n</html>\n");
    out
}
