use crate::error::CheckError;
use crate::model::Document;
use crate::rules::Hit;

/// Non-abstract WAI-ARIA 1.2 roles.
const VALID_ROLES: &[&str] = &[
    "alert", "alertdialog", "application", "article", "banner", "blockquote", "button", "caption",
    "cell", "checkbox", "code", "columnheader", "combobox", "complementary", "contentinfo",
    "definition", "deletion", "dialog", "directory", "document", "emphasis", "feed", "figure",
    "form", "generic", "grid", "gridcell", "group", "heading", "img", "insertion", "link", "list",
    "listbox", "listitem", "log", "main", "marquee", "math", "menu", "menubar", "menuitem",
    "menuitemcheckbox", "menuitemradio", "meter", "navigation", "none", "note", "option",
    "paragraph", "presentation", "progressbar", "radio", "radiogroup", "region", "row",
    "rowgroup", "rowheader", "scrollbar", "search", "searchbox", "separator", "slider",
    "spinbutton", "status", "strong", "subscript", "superscript", "switch", "tab", "table",
    "tablist", "tabpanel", "term", "textbox", "time", "timer", "toolbar", "tooltip", "tree",
    "treegrid", "treeitem",
];

pub(crate) fn population(doc: &Document) -> usize {
    doc.iter().filter(|(_, el)| el.has_attr("role")).count()
}

/// A role attribute may list fallbacks; it is valid when any token is a known role.
fn is_valid_role(value: &str) -> bool {
    value
        .split_whitespace()
        .any(|t| VALID_ROLES.contains(&t.to_ascii_lowercase().as_str()))
}

pub(crate) fn invalid_roles(doc: &Document) -> Result<Vec<Hit>, CheckError> {
    Ok(doc
        .iter()
        .filter_map(|(id, el)| {
            let role = el.attr("role")?;
            (!is_valid_role(role))
                .then(|| Hit::at(id, format!("Invalid ARIA role \"{}\"", role.trim())))
        })
        .collect())
}

pub(crate) fn missing_main(doc: &Document) -> Result<Vec<Hit>, CheckError> {
    let has_main = doc.iter().any(|(_, el)| {
        el.tag == "main"
            || el.attr("role").is_some_and(|r| {
                r.split_whitespace()
                    .any(|t| t.eq_ignore_ascii_case("main"))
            })
    });
    if has_main {
        return Ok(Vec::new());
    }
    Ok(vec![Hit::page(
        "Page has no main landmark (<main> or role=\"main\")",
    )])
}
