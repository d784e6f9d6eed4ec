use super::utils::normalized_text;
use crate::error::CheckError;
use crate::model::{Document, NodeId};
use crate::rules::Hit;

/// Link texts that do not describe the destination.
const GENERIC_LINK_TEXT: &[&str] = &[
    "click here",
    "here",
    "click",
    "more",
    "read more",
    "learn more",
    "link",
    "this",
];

fn links(doc: &Document) -> impl Iterator<Item = NodeId> + '_ {
    doc.by_tags(&["a"])
}

pub(crate) fn population(doc: &Document) -> usize {
    links(doc).count()
}

fn images_inside(doc: &Document, id: NodeId) -> Vec<NodeId> {
    doc.descendants(id)
        .into_iter()
        .filter(|d| doc.get(*d).tag == "img")
        .collect()
}

fn has_text(doc: &Document, id: NodeId) -> bool {
    !doc.text_content(id).trim().is_empty()
}

pub(crate) fn empty_links(doc: &Document) -> Result<Vec<Hit>, CheckError> {
    Ok(links(doc)
        .filter(|id| {
            let a = doc.get(*id);
            !has_text(doc, *id)
                && images_inside(doc, *id).is_empty()
                && a.non_empty_attr("aria-label").is_none()
                && a.non_empty_attr("title").is_none()
        })
        .map(|id| Hit::at(id, "Link has no accessible text"))
        .collect())
}

pub(crate) fn generic_text(doc: &Document) -> Result<Vec<Hit>, CheckError> {
    Ok(links(doc)
        .filter_map(|id| {
            let text = normalized_text(doc, id);
            GENERIC_LINK_TEXT
                .contains(&text.as_str())
                .then(|| Hit::at(id, format!("Link text \"{text}\" does not describe its destination")))
        })
        .collect())
}

pub(crate) fn javascript_hrefs(doc: &Document) -> Result<Vec<Hit>, CheckError> {
    Ok(links(doc)
        .filter(|id| {
            doc.get(*id)
                .attr("href")
                .is_some_and(|h| h.trim().to_ascii_lowercase().starts_with("javascript:"))
        })
        .map(|id| Hit::at(id, "Link uses a javascript: URL instead of a destination"))
        .collect())
}

pub(crate) fn image_links_missing_alt(doc: &Document) -> Result<Vec<Hit>, CheckError> {
    Ok(links(doc)
        .filter(|id| {
            let images = images_inside(doc, *id);
            !has_text(doc, *id)
                && doc.get(*id).non_empty_attr("aria-label").is_none()
                && !images.is_empty()
                && images
                    .iter()
                    .all(|img| doc.get(*img).non_empty_attr("alt").is_none())
        })
        .map(|id| Hit::at(id, "Image link has no alt text"))
        .collect())
}
