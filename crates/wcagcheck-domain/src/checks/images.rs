use crate::error::CheckError;
use crate::model::{Document, Element};
use crate::rules::Hit;

/// Alt values that say nothing about the image.
const MEANINGLESS_ALT: &[&str] = &[
    "image",
    "img",
    "picture",
    "photo",
    "graphic",
    "icon",
    "spacer",
    "untitled",
    "placeholder",
];

pub(crate) fn population(doc: &Document) -> usize {
    doc.count_tag("img")
}

/// Decorative images opt out of alt text via `role` or `aria-hidden`.
pub(crate) fn is_decorative(img: &Element) -> bool {
    let role = img.attr("role").map(|r| r.trim().to_ascii_lowercase());
    matches!(role.as_deref(), Some("presentation") | Some("none"))
        || img
            .attr("aria-hidden")
            .is_some_and(|v| v.trim().eq_ignore_ascii_case("true"))
}

pub(crate) fn missing_alt(doc: &Document) -> Result<Vec<Hit>, CheckError> {
    Ok(doc
        .by_tags(&["img"])
        .filter(|id| {
            let img = doc.get(*id);
            !img.has_attr("alt") && !is_decorative(img)
        })
        .map(|id| Hit::at(id, "Image is missing alt text"))
        .collect())
}

pub(crate) fn meaningless_alt(doc: &Document) -> Result<Vec<Hit>, CheckError> {
    Ok(doc
        .by_tags(&["img"])
        .filter_map(|id| {
            let alt = doc.get(id).attr("alt")?.trim().to_lowercase();
            MEANINGLESS_ALT
                .contains(&alt.as_str())
                .then(|| Hit::at(id, format!("Image alt text \"{alt}\" is not descriptive")))
        })
        .collect())
}
