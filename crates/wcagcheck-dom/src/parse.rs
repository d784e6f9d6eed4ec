//! HTML text to [`Document`], with computed styles.
//!
//! Styles come from a small user-agent sheet, `<style>` elements and `style` attributes,
//! ordered by importance, origin, specificity and source order. External stylesheets are not
//! fetched.

use crate::css::{self, Declaration, RuleSelector, StyleRule};
use scraper::{ElementRef, Html, Node};
use std::collections::BTreeMap;
use wcagcheck_domain::color;
use wcagcheck_domain::model::{ComputedStyle, Document, NodeId};

/// Enough markup for a truncated violation snapshot.
const MARKUP_KEEP: usize = 256;

/// Guards against self-referencing custom properties.
const MAX_VAR_SUBSTITUTIONS: usize = 32;

pub fn parse_html(text: &str) -> Document {
    let html = Html::parse_document(text);
    let (mut doc, elements, sheets) = build_tree(&html);
    let rules: Vec<StyleRule> = sheets
        .iter()
        .flat_map(|s| css::parse_stylesheet(s))
        .collect();
    cascade(&mut doc, &elements, &rules);
    doc
}

/// The document model, the parsed element behind each `NodeId` and the `<style>` texts.
fn build_tree(html: &Html) -> (Document, Vec<ElementRef<'_>>, Vec<String>) {
    let mut doc = Document::new();
    let mut elements = Vec::new();
    let mut sheets = Vec::new();

    // Pre-order walk: a parent is always pushed before its children.
    let mut stack = vec![(html.tree.root(), None)];
    while let Some((node, parent)) = stack.pop() {
        let mut next_parent = parent;
        match node.value() {
            Node::Element(el) => {
                let Some(element) = ElementRef::wrap(node) else {
                    continue;
                };
                let attrs: BTreeMap<String, String> = el
                    .attrs()
                    .map(|(k, v)| (k.to_ascii_lowercase(), v.to_string()))
                    .collect();
                let id = doc.push_element(parent, el.name(), attrs);
                doc.get_mut(id).markup = element.html().chars().take(MARKUP_KEEP).collect();
                if el.name().eq_ignore_ascii_case("style") {
                    sheets.push(element.text().collect::<String>());
                }
                elements.push(element);
                next_parent = Some(id);
            }
            Node::Text(text) => {
                if let Some(p) = parent {
                    doc.push_text(p, text);
                }
                continue;
            }
            Node::Document | Node::Fragment => {}
            _ => continue,
        }

        let children: Vec<_> = node.children().collect();
        for child in children.into_iter().rev() {
            stack.push((child, next_parent));
        }
    }

    (doc, elements, sheets)
}

fn cascade(doc: &mut Document, elements: &[ElementRef<'_>], rules: &[StyleRule]) {
    let mut custom: Vec<BTreeMap<String, String>> = Vec::with_capacity(doc.len());

    for index in 0..doc.len() {
        let id = NodeId(index);
        let parent = doc.get(id).parent;
        let parent_style = parent.map(|p| doc.get(p).style.clone());
        let mut vars = parent.map(|p| custom[p.0].clone()).unwrap_or_default();

        let mut style = match &parent_style {
            Some(p) => ComputedStyle::inherit_from(p),
            None => ComputedStyle::initial(),
        };
        let parent_px = parent_style
            .as_ref()
            .map_or(16.0, ComputedStyle::font_size_px);
        user_agent_defaults(&doc.get(id).tag, &mut style, parent_px);

        let declarations = matched_declarations(doc, id, &elements[index], rules);
        for d in declarations.iter().filter(|d| d.property.starts_with("--")) {
            vars.insert(d.property.clone(), d.value.clone());
        }
        for d in declarations.iter().filter(|d| !d.property.starts_with("--")) {
            let Some(value) = resolve_vars(&d.value, &vars) else {
                continue;
            };
            apply(&mut style, &d.property, &value, parent_style.as_ref(), parent_px);
        }
        if style.background_color.eq_ignore_ascii_case("currentcolor") {
            style.background_color = style.color.clone();
        }

        doc.get_mut(id).style = style;
        custom.push(vars);
    }
}

fn user_agent_defaults(tag: &str, style: &mut ComputedStyle, parent_px: f64) {
    let heading = |factor: f64| px(parent_px * factor);
    match tag {
        "head" | "script" | "style" | "title" | "meta" | "link" | "base" | "noscript"
        | "template" => style.display = "none".to_string(),
        "html" | "body" | "div" | "p" | "main" | "section" | "article" | "header" | "footer"
        | "nav" | "aside" | "form" | "ul" | "ol" | "li" | "dialog" => {
            style.display = "block".to_string();
        }
        _ => {}
    }
    let size = match tag {
        "h1" => Some(2.0),
        "h2" => Some(1.5),
        "h3" => Some(1.17),
        "h4" => Some(1.0),
        "h5" => Some(0.83),
        "h6" => Some(0.67),
        _ => None,
    };
    if let Some(factor) = size {
        style.display = "block".to_string();
        style.font_size = heading(factor);
        style.font_weight = "700".to_string();
    }
    if matches!(tag, "b" | "strong" | "th") {
        style.font_weight = "700".to_string();
    }
}

/// Declarations that apply to `id`, in ascending cascade priority.
fn matched_declarations(
    doc: &Document,
    id: NodeId,
    element: &ElementRef<'_>,
    rules: &[StyleRule],
) -> Vec<Declaration> {
    let mut matched = Vec::new();
    for (order, rule) in rules.iter().enumerate() {
        let Some(specificity) = rule
            .selectors
            .iter()
            .filter(|s| s.matches(element))
            .map(RuleSelector::specificity)
            .max()
        else {
            continue;
        };
        for d in &rule.declarations {
            matched.push(((d.important, false, specificity, order), d));
        }
    }

    let inline = doc
        .get(id)
        .attr("style")
        .map(css::parse_declarations)
        .unwrap_or_default();
    for d in &inline {
        matched.push(((d.important, true, 0, usize::MAX), d));
    }

    matched.sort_by_key(|(key, _)| *key);
    matched.into_iter().map(|(_, d)| d.clone()).collect()
}

/// Substitute `var(--name, fallback)` references; `None` when one cannot be resolved.
fn resolve_vars(value: &str, vars: &BTreeMap<String, String>) -> Option<String> {
    let mut out = value.to_string();
    for _ in 0..MAX_VAR_SUBSTITUTIONS {
        let Some(start) = out.find("var(") else {
            return Some(out);
        };
        let inner_start = start + 4;
        let mut depth = 1usize;
        let mut end = None;
        for (i, c) in out[inner_start..].char_indices() {
            match c {
                '(' => depth += 1,
                ')' => {
                    depth -= 1;
                    if depth == 0 {
                        end = Some(inner_start + i);
                        break;
                    }
                }
                _ => {}
            }
        }
        let end = end?;
        let inner = &out[inner_start..end];
        let (name, fallback) = match inner.split_once(',') {
            Some((n, f)) => (n.trim(), Some(f.trim())),
            None => (inner.trim(), None),
        };
        let replacement = vars.get(name).map(String::as_str).or(fallback)?.to_string();
        out.replace_range(start..=end, &replacement);
    }
    None
}

fn apply(
    style: &mut ComputedStyle,
    property: &str,
    value: &str,
    parent: Option<&ComputedStyle>,
    parent_px: f64,
) {
    let initial = ComputedStyle::initial();
    let parent = parent.unwrap_or(&initial);
    let keyword = value.trim().to_ascii_lowercase();

    match property {
        "color" => {
            style.color = match keyword.as_str() {
                "inherit" | "unset" | "currentcolor" => parent.color.clone(),
                "initial" => initial.color.clone(),
                _ => value.to_string(),
            }
        }
        "background-color" => {
            style.background_color = match keyword.as_str() {
                "inherit" => parent.background_color.clone(),
                "initial" | "unset" => initial.background_color.clone(),
                _ => value.to_string(),
            }
        }
        "background" => {
            style.background_color = match keyword.as_str() {
                "inherit" => parent.background_color.clone(),
                _ => background_color_of(value)
                    .unwrap_or_else(|| initial.background_color.clone()),
            }
        }
        "font-size" => {
            if let Some(size) = font_size(&keyword, parent_px) {
                style.font_size = size;
            }
        }
        "font-weight" => {
            style.font_weight = match keyword.as_str() {
                "inherit" | "unset" => parent.font_weight.clone(),
                "initial" => initial.font_weight.clone(),
                _ => keyword,
            }
        }
        "display" => {
            style.display = match keyword.as_str() {
                "inherit" => parent.display.clone(),
                "initial" | "unset" => initial.display.clone(),
                _ => keyword,
            }
        }
        "visibility" => {
            style.visibility = match keyword.as_str() {
                "inherit" | "unset" => parent.visibility.clone(),
                "initial" => initial.visibility.clone(),
                "collapse" => "hidden".to_string(),
                _ => keyword,
            }
        }
        _ => {}
    }
}

/// The colour layer of a `background` shorthand, if it names one.
fn background_color_of(value: &str) -> Option<String> {
    css::split_top_level(value, char::is_whitespace)
        .into_iter()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .find(|t| t.eq_ignore_ascii_case("currentcolor") || color::parse_color(t).is_ok())
        .map(str::to_string)
}

fn px(value: f64) -> String {
    let s = format!("{value:.2}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    format!("{s}px")
}

/// Absolute pixel size for a `font-size` value; `None` for values we cannot resolve.
fn font_size(value: &str, parent_px: f64) -> Option<String> {
    let keyword = match value {
        "inherit" | "unset" => Some(parent_px),
        "initial" | "medium" => Some(16.0),
        "xx-small" => Some(9.0),
        "x-small" => Some(10.0),
        "small" => Some(13.0),
        "large" => Some(18.0),
        "x-large" => Some(24.0),
        "xx-large" => Some(32.0),
        "xxx-large" => Some(48.0),
        "larger" => Some(parent_px * 1.2),
        "smaller" => Some(parent_px / 1.2),
        _ => None,
    };
    if let Some(size) = keyword {
        return Some(px(size));
    }

    let number = |suffix: &str| {
        value
            .strip_suffix(suffix)
            .and_then(|n| n.trim().parse::<f64>().ok())
    };
    let size = if let Some(n) = number("rem") {
        n * 16.0
    } else if let Some(n) = number("px") {
        n
    } else if let Some(n) = number("em") {
        n * parent_px
    } else if let Some(n) = number("%") {
        n * parent_px / 100.0
    } else if let Some(n) = number("pt") {
        n * 4.0 / 3.0
    } else {
        return None;
    };
    (size >= 0.0).then(|| px(size))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn find(doc: &Document, tag: &str) -> NodeId {
        doc.by_tags(&[tag]).next().expect("element present")
    }

    #[test]
    fn builds_html_head_body_tree_with_text() {
        let doc = parse_html("<!doctype html><title>T</title><p>Hello <b>world</b></p>");
        assert_eq!(doc.get(NodeId(0)).tag, "html");
        let p = find(&doc, "p");
        assert_eq!(doc.text_content(p), "Hello world");
        assert_eq!(doc.get(p).markup, "<p>Hello <b>world</b></p>");
        assert_eq!(doc.get(find(&doc, "head")).style.display, "none");
    }

    #[test]
    fn markup_is_capped() {
        let body = "x".repeat(1000);
        let doc = parse_html(&format!("<p>{body}</p>"));
        assert_eq!(doc.get(find(&doc, "p")).markup.chars().count(), MARKUP_KEEP);
    }

    #[test]
    fn stylesheet_and_inline_styles_cascade() {
        let doc = parse_html(
            r#"<style>
                p { color: #111; background-color: #eee }
                .note { color: #222 }
                #one { color: #333 }
                p { color: #444 }
            </style>
            <p id="one" class="note">a</p>
            <p class="note">b</p>
            <p class="note" style="color: #555">c</p>
            <p>d</p>"#,
        );
        let colors: Vec<&str> = doc
            .by_tags(&["p"])
            .map(|p| doc.get(p).style.color.as_str())
            .collect();
        assert_eq!(colors, vec!["#333", "#222", "#555", "#444"]);
        assert!(doc
            .by_tags(&["p"])
            .all(|p| doc.get(p).style.background_color == "#eee"));
    }

    #[test]
    fn important_beats_inline() {
        let doc = parse_html(
            r#"<style>span { color: red !important }</style><span style="color: blue">x</span>"#,
        );
        assert_eq!(doc.get(find(&doc, "span")).style.color, "red");
    }

    #[test]
    fn text_properties_inherit_and_background_does_not() {
        let doc = parse_html(
            r#"<div style="color: #fff; background: #000 url(bg.png) no-repeat; font-size: 20px">
                 <span>x</span>
               </div>"#,
        );
        let div = find(&doc, "div");
        let span = find(&doc, "span");
        assert_eq!(doc.get(div).style.background_color, "#000");
        assert_eq!(doc.get(span).style.color, "#fff");
        assert_eq!(doc.get(span).style.font_size, "20px");
        assert_eq!(doc.get(span).style.background_color, "transparent");
    }

    #[test]
    fn headings_get_user_agent_sizes() {
        let doc = parse_html("<h1>a</h1><h2 style='font-size: 1.5em'>b</h2><strong>c</strong>");
        let h1 = &doc.get(find(&doc, "h1")).style;
        assert_eq!(h1.font_size, "32px");
        assert_eq!(h1.font_weight_value(), 700);
        assert_eq!(doc.get(find(&doc, "h2")).style.font_size, "24px");
        assert_eq!(doc.get(find(&doc, "strong")).style.font_weight, "700");
    }

    #[test]
    fn custom_properties_resolve_with_fallbacks() {
        let doc = parse_html(
            r#"<style>
                :root { --fg: #123456; --accent: #abcdef }
                body { --accent: #010203 }
                p { color: var(--fg); background-color: var(--missing, #fafafa) }
                em { color: var(--nope) }
                strong { color: var(--accent) }
            </style>
            <p>x <em>y</em> <strong>z</strong></p>"#,
        );
        let p = find(&doc, "p");
        assert_eq!(doc.get(p).style.color, "#123456");
        assert_eq!(doc.get(p).style.background_color, "#fafafa");
        // Unresolvable declarations are dropped, so the colour is inherited.
        assert_eq!(doc.get(find(&doc, "em")).style.color, "#123456");
        assert_eq!(doc.get(find(&doc, "strong")).style.color, "#010203");
    }

    #[test]
    fn structural_selectors_and_attribute_operators_apply() {
        let doc = parse_html(
            r#"<style>
                section:not(.dark) p { color: #010101 }
                h1 + p { color: #020202 }
                a[href^="http"] { color: #030303 }
                li:first-child { color: #040404 }
                a:hover { color: #ff0000 }
                :where(#intro) em { color: #050505 }
                em { color: #060606 }
            </style>
            <h1>Title</h1><p id="intro">Lead <em>x</em></p><section><p>Body</p></section>
            <ul><li>one</li><li>two</li></ul>
            <a href="https://example.test/">out</a><a href="/in">in</a>"#,
        );
        let colors = |tag: &str| -> Vec<String> {
            doc.by_tags(&[tag])
                .map(|id| doc.get(id).style.color.clone())
                .collect()
        };
        assert_eq!(colors("p"), vec!["#020202", "#010101"]);
        assert_eq!(colors("li")[0], "#040404");
        assert_ne!(colors("li")[1], "#040404");
        assert_eq!(colors("a")[0], "#030303");
        assert_ne!(colors("a")[1], "#030303");
        assert!(colors("a").iter().all(|c| c != "#ff0000"), "hover styles never apply");
        assert_eq!(colors("em"), vec!["#060606"], ":where adds no specificity");
    }

    #[test]
    fn hsl_background_shorthand_is_kept() {
        let doc = parse_html(r#"<p style="background: hsl(0, 0%, 20%) no-repeat">x</p>"#);
        assert_eq!(doc.get(find(&doc, "p")).style.background_color, "hsl(0, 0%, 20%)");
    }

    #[test]
    fn currentcolor_background_tracks_text_colour() {
        let doc = parse_html(r#"<p style="color: #abc; background-color: currentColor">x</p>"#);
        assert_eq!(doc.get(find(&doc, "p")).style.background_color, "#abc");
    }

    #[test]
    fn font_sizes_resolve_to_pixels() {
        assert_eq!(font_size("1.25rem", 10.0).as_deref(), Some("20px"));
        assert_eq!(font_size("150%", 12.0).as_deref(), Some("18px"));
        assert_eq!(font_size("12pt", 16.0).as_deref(), Some("16px"));
        assert_eq!(font_size("larger", 10.0).as_deref(), Some("12px"));
        assert_eq!(font_size("clamp(1rem, 2vw, 2rem)", 16.0), None);
    }

    #[test]
    fn unparsable_colours_are_kept_for_the_checks() {
        let doc = parse_html(r#"<p style="color: sparkly">x</p>"#);
        assert_eq!(doc.get(find(&doc, "p")).style.color, "sparkly");
    }

    #[test]
    fn hidden_subtrees_are_marked() {
        let doc = parse_html(
            r#"<style>.gone { display: none }</style>
               <div class="gone"><p>a</p></div>
               <p style="visibility: hidden">b</p>
               <p hidden>c</p>
               <p>d</p>"#,
        );
        let rendered: Vec<String> = doc
            .by_tags(&["p"])
            .filter(|p| doc.is_rendered(*p))
            .map(|p| doc.text_content(p))
            .collect();
        assert_eq!(rendered, vec!["d"]);
    }
}
