use crate::error::CheckError;
use crate::model::{Document, Element, NodeId};
use crate::rules::Hit;

fn is_interactive(el: &Element) -> bool {
    match el.tag.as_str() {
        "a" => el.has_attr("href") || el.has_attr("tabindex"),
        "button" | "select" | "textarea" => true,
        "input" => el
            .attr("type")
            .is_none_or(|t| !t.trim().eq_ignore_ascii_case("hidden")),
        _ => el.has_attr("tabindex"),
    }
}

fn interactive(doc: &Document) -> impl Iterator<Item = NodeId> + '_ {
    doc.iter()
        .filter(|(_, el)| is_interactive(el))
        .map(|(id, _)| id)
}

pub(crate) fn population(doc: &Document) -> usize {
    interactive(doc).count()
}

fn is_dialog(el: &Element) -> bool {
    el.tag == "dialog"
        || el
            .attr("role")
            .is_some_and(|r| matches!(r.trim(), "dialog" | "alertdialog"))
        || el.has_class("modal")
}

fn inside_dialog(doc: &Document, id: NodeId) -> bool {
    doc.ancestors(id).any(|a| is_dialog(doc.get(a)))
}

pub(crate) fn negative_tabindex(doc: &Document) -> Result<Vec<Hit>, CheckError> {
    Ok(interactive(doc)
        .filter(|id| {
            let el = doc.get(*id);
            el.attr("tabindex").map(str::trim) == Some("-1")
                && doc.is_rendered(*id)
                && !el.has_attr("disabled")
                && !inside_dialog(doc, *id)
        })
        .map(|id| {
            Hit::at(
                id,
                "Interactive element is removed from the keyboard tab order (tabindex=\"-1\")",
            )
        })
        .collect())
}
