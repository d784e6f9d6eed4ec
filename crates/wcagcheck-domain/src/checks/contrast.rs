use crate::color::{self, Rgba, WHITE};
use crate::error::CheckError;
use crate::model::{Document, Element, NodeId};
use crate::rules::Hit;

/// Tags that never carry rendered text of their own.
const NON_TEXT_TAGS: &[&str] = &[
    "html", "head", "title", "meta", "link", "script", "style", "noscript", "template", "svg",
    "iframe", "img", "br", "hr", "input", "select", "textarea",
];

/// Subtrees whose text is not painted on the page.
const UNPAINTED_SUBTREES: &[&str] = &["head", "script", "style", "noscript", "template", "svg"];

const LARGE_TEXT_THRESHOLD: f64 = 2.5;
const NORMAL_TEXT_THRESHOLD: f64 = 3.5;

/// Visible leaf elements with non-empty text.
fn candidates(doc: &Document) -> Vec<NodeId> {
    doc.iter()
        .filter(|(id, el)| {
            !NON_TEXT_TAGS.contains(&el.tag.as_str())
                && el.children().next().is_none()
                && !doc.text_content(*id).trim().is_empty()
                && !doc
                    .ancestors(*id)
                    .any(|a| UNPAINTED_SUBTREES.contains(&doc.get(a).tag.as_str()))
                && doc.is_rendered(*id)
        })
        .map(|(id, _)| id)
        .collect()
}

pub(crate) fn population(doc: &Document) -> usize {
    candidates(doc).len()
}

fn parse(el: &Element, property: &'static str, value: &str) -> Result<Rgba, CheckError> {
    color::parse_color(value).map_err(|_| CheckError::UnparsableColor {
        property,
        value: value.to_string(),
        tag: el.tag.clone(),
    })
}

/// First non-transparent background on the element or its ancestors; white when none is set.
fn effective_background(doc: &Document, id: NodeId) -> Result<Rgba, CheckError> {
    for n in std::iter::once(id).chain(doc.ancestors(id)) {
        let el = doc.get(n);
        let bg = parse(el, "background-color", &el.style.background_color)?;
        if !bg.is_transparent() {
            return Ok(bg);
        }
    }
    Ok(WHITE)
}

/// Large text is at least 18px, or at least 14px and bold.
fn is_large_text(el: &Element) -> bool {
    let size = el.style.font_size_px();
    size >= 18.0 || (size >= 14.0 && el.style.font_weight_value() >= 700)
}

pub(crate) fn low_contrast(doc: &Document) -> Result<Vec<Hit>, CheckError> {
    let mut out = Vec::new();
    for id in candidates(doc) {
        let el = doc.get(id);
        let fg = parse(el, "color", &el.style.color)?;
        let bg = effective_background(doc, id)?;
        let ratio = color::contrast_ratio(&fg, &bg);
        let threshold = if is_large_text(el) {
            LARGE_TEXT_THRESHOLD
        } else {
            NORMAL_TEXT_THRESHOLD
        };
        if ratio < threshold {
            out.push(Hit::at(
                id,
                format!("Low contrast ratio {ratio:.2}:1 (minimum {threshold}:1)"),
            ));
        }
    }
    Ok(out)
}
