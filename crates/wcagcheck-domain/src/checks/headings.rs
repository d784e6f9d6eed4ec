use crate::error::CheckError;
use crate::model::{Document, NodeId};
use crate::rules::Hit;

const HEADING_TAGS: &[&str] = &["h1", "h2", "h3", "h4", "h5", "h6"];

fn headings(doc: &Document) -> impl Iterator<Item = NodeId> + '_ {
    doc.by_tags(HEADING_TAGS)
}

pub(crate) fn population(doc: &Document) -> usize {
    headings(doc).count()
}

pub(crate) fn missing_h1(doc: &Document) -> Result<Vec<Hit>, CheckError> {
    if doc.count_tag("h1") > 0 {
        return Ok(Vec::new());
    }
    Ok(vec![Hit::page("Page is missing a level-one heading (<h1>)")])
}

pub(crate) fn multiple_h1(doc: &Document) -> Result<Vec<Hit>, CheckError> {
    let h1s: Vec<NodeId> = doc.by_tags(&["h1"]).collect();
    let count = h1s.len();
    Ok(h1s
        .into_iter()
        .skip(1)
        .map(|id| Hit::at(id, format!("Page has {count} <h1> elements; use only one")))
        .collect())
}

pub(crate) fn level_skips(doc: &Document) -> Result<Vec<Hit>, CheckError> {
    let mut out = Vec::new();
    let mut previous: Option<u8> = None;
    for id in headings(doc) {
        let Some(level) = doc.get(id).heading_level() else {
            continue;
        };
        if let Some(prev) = previous
            && level > prev + 1
        {
            out.push(Hit::at(
                id,
                format!("Heading level skipped: <h{prev}> is followed by <h{level}>"),
            ));
        }
        previous = Some(level);
    }
    Ok(out)
}

pub(crate) fn empty_headings(doc: &Document) -> Result<Vec<Hit>, CheckError> {
    Ok(headings(doc)
        .filter(|id| doc.text_content(*id).trim().is_empty())
        .map(|id| Hit::at(id, format!("Heading <{}> has no text", doc.get(id).tag)))
        .collect())
}
