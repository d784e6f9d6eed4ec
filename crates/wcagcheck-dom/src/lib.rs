//! Page adapters: discover HTML files and turn them into the document model.
//!
//! This crate does filesystem IO and HTML/CSS parsing. Rule evaluation lives in
//! `wcagcheck-domain`.

#![forbid(unsafe_code)]

mod css;
mod discover;
mod parse;

use anyhow::Context;
use camino::Utf8Path;
use wcagcheck_domain::model::Document;

pub use discover::discover_pages;
pub use parse::parse_html;

/// Read and parse one page. Invalid UTF-8 is replaced rather than rejected.
pub fn load_page(path: &Utf8Path) -> anyhow::Result<Document> {
    let bytes = std::fs::read(path).with_context(|| format!("read {path}"))?;
    let text = String::from_utf8_lossy(&bytes);
    let doc = parse_html(&text);
    tracing::debug!(path = %path, elements = doc.len(), "page parsed");
    Ok(doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use proptest::prelude::*;
    use tempfile::TempDir;
    use wcagcheck_domain::{run_category, AuditPolicy};
    use wcagcheck_types::{Category, SeverityLevel};

    fn contrast_violations(html: &str) -> usize {
        let doc = parse_html(html);
        run_category(&doc, &AuditPolicy::new(SeverityLevel::High), Category::Contrast)
            .expect("contrast check completes")
            .violations()
            .len()
    }

    #[test]
    fn load_page_reads_and_parses() {
        let tmp = TempDir::new().expect("temp dir");
        let path = Utf8PathBuf::from_path_buf(tmp.path().join("p.html")).expect("utf8 path");
        std::fs::write(&path, b"<h1>Caf\xe9</h1>").expect("write");

        let doc = load_page(&path).expect("load");
        let h1 = doc.by_tags(&["h1"]).next().expect("h1");
        assert!(doc.text_content(h1).starts_with("Caf"));
    }

    #[test]
    fn load_page_reports_missing_files() {
        let err = load_page(Utf8Path::new("/definitely/not/here.html")).unwrap_err();
        assert!(err.to_string().contains("read /definitely/not/here.html"));
    }

    #[test]
    fn stylesheet_themes_reach_the_contrast_check() {
        let themed = "<style>:root { --fg: #fff } p { color: var(--fg) }</style><p>Hello</p>";
        assert_eq!(contrast_violations(themed), 1);
        let negated = "<style>body:not(.x) p { color: #fff }</style><p>Hello</p>";
        assert_eq!(contrast_violations(negated), 1);
        let sibling = "<style>h1 ~ p { color: #fefefe }</style><h1>T</h1><p>Hello</p>";
        assert_eq!(contrast_violations(sibling), 1);
    }

    #[test]
    fn modern_colour_syntax_completes_the_contrast_check() {
        assert_eq!(contrast_violations(r#"<p style="color: hsl(0, 0%, 100%)">Hi</p>"#), 1);
        assert_eq!(contrast_violations(r#"<p style="color: darkslategray">Hi</p>"#), 0);
        assert_eq!(contrast_violations(r#"<p style="color: rebeccapurple">Hi</p>"#), 0);
        let dark = r#"<p style="color: #000; background: hsl(0 0% 10%)">Hi</p>"#;
        assert_eq!(contrast_violations(dark), 1);
    }

    proptest! {
        #[test]
        fn parser_never_panics(input in ".*") {
            let doc = parse_html(&input);
            prop_assert!(!doc.is_empty());
        }

        #[test]
        fn style_attributes_never_panic(style in ".{0,64}") {
            let html = format!("<p style=\"{}\">x</p>", style.replace('"', ""));
            let _ = parse_html(&html);
        }
    }
}
