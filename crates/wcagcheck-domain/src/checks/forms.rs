use crate::error::CheckError;
use crate::model::{Document, NodeId};
use crate::rules::Hit;

/// Input types that do not need a visible label.
const UNLABELLED_INPUT_TYPES: &[&str] = &["hidden", "submit", "button", "image", "reset"];

fn controls(doc: &Document) -> Vec<NodeId> {
    doc.by_tags(&["input", "select", "textarea"])
        .filter(|id| {
            let el = doc.get(*id);
            if el.tag != "input" {
                return true;
            }
            let kind = el
                .attr("type")
                .map(|t| t.trim().to_ascii_lowercase())
                .unwrap_or_default();
            !UNLABELLED_INPUT_TYPES.contains(&kind.as_str())
        })
        .collect()
}

pub(crate) fn population(doc: &Document) -> usize {
    controls(doc).len()
}

fn has_label_for(doc: &Document, id: &str) -> bool {
    doc.by_tags(&["label"])
        .any(|l| doc.get(l).attr("for").map(str::trim) == Some(id))
}

fn is_labelled(doc: &Document, control: NodeId) -> bool {
    let by_for = doc
        .get(control)
        .non_empty_attr("id")
        .is_some_and(|id| has_label_for(doc, id));
    by_for || doc.ancestors(control).any(|a| doc.get(a).tag == "label")
}

pub(crate) fn missing_labels(doc: &Document) -> Result<Vec<Hit>, CheckError> {
    Ok(controls(doc)
        .into_iter()
        .filter(|id| !is_labelled(doc, *id))
        .map(|id| {
            Hit::at(
                id,
                format!("Form field <{}> has no associated label", doc.get(id).tag),
            )
        })
        .collect())
}
