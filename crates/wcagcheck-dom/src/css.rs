//! Just enough CSS to compute the properties the checks read.
//!
//! Rule and declaration blocks are split here; selectors are parsed and matched by `scraper`.
//! Selectors it rejects, such as `:hover` or `::before`, are dropped from their rule, so
//! interaction styles do not leak into the resting state.

use scraper::selector::{Parser as SelectorParser, Simple};
use scraper::ElementRef;
use selectors::parser::{ParseRelative, SelectorList};

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Declaration {
    pub property: String,
    pub value: String,
    pub important: bool,
}

#[derive(Clone, Debug)]
pub(crate) struct StyleRule {
    pub selectors: Vec<RuleSelector>,
    pub declarations: Vec<Declaration>,
}

/// `ids << 20 | classes << 10 | types`, so integer order is cascade order.
pub(crate) type Specificity = u32;

/// One complex selector from a rule's selector list.
#[derive(Clone, Debug)]
pub(crate) struct RuleSelector {
    matcher: scraper::Selector,
    specificity: Specificity,
}

impl RuleSelector {
    pub(crate) fn parse(text: &str) -> Option<RuleSelector> {
        let text = text.trim();
        let matcher = scraper::Selector::parse(text).ok()?;
        let mut input = cssparser::ParserInput::new(text);
        let mut parser = cssparser::Parser::new(&mut input);
        let list =
            SelectorList::<Simple>::parse(&SelectorParser, &mut parser, ParseRelative::No).ok()?;
        let specificity = list.slice().iter().map(|s| s.specificity()).max()?;
        Some(RuleSelector {
            matcher,
            specificity,
        })
    }

    pub(crate) fn specificity(&self) -> Specificity {
        self.specificity
    }

    pub(crate) fn matches(&self, element: &ElementRef<'_>) -> bool {
        self.matcher.matches(element)
    }
}

pub(crate) fn strip_comments(css: &str) -> String {
    let mut out = String::with_capacity(css.len());
    let mut rest = css;
    while let Some(start) = rest.find("/*") {
        out.push_str(&rest[..start]);
        match rest[start + 2..].find("*/") {
            Some(end) => rest = &rest[start + 2 + end + 2..],
            None => return out,
        }
    }
    out.push_str(rest);
    out
}

fn matching_brace(text: &str, open: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (i, c) in text[open..].char_indices() {
        match c {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(open + i);
                }
            }
            _ => {}
        }
    }
    None
}

/// Screen media only: `@media screen`, `@media all` and combinations of the two.
fn media_applies(query: &str) -> bool {
    query
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .all(|t| matches!(t.to_ascii_lowercase().as_str(), "screen" | "all" | "only"))
}

pub(crate) fn parse_stylesheet(css: &str) -> Vec<StyleRule> {
    let css = strip_comments(css);
    let mut rules = Vec::new();
    collect_rules(&css, &mut rules);
    rules
}

fn collect_rules(css: &str, rules: &mut Vec<StyleRule>) {
    let mut rest = css;
    while let Some(open) = rest.find('{') {
        let Some(close) = matching_brace(rest, open) else {
            break;
        };
        // Statement at-rules such as `@import ...;` end before the prelude.
        let prelude = rest[..open].rsplit(';').next().unwrap_or("").trim();
        let body = &rest[open + 1..close];

        if let Some(at) = prelude.strip_prefix('@') {
            if let Some(query) = at.strip_prefix("media")
                && media_applies(query)
            {
                collect_rules(body, rules);
            }
        } else {
            let selectors: Vec<RuleSelector> = split_top_level(prelude, |c| c == ',')
                .into_iter()
                .filter_map(RuleSelector::parse)
                .collect();
            if !selectors.is_empty() {
                rules.push(StyleRule {
                    selectors,
                    declarations: parse_declarations(body),
                });
            }
        }
        rest = &rest[close + 1..];
    }
}

/// Split on `sep` outside parentheses and quotes.
pub(crate) fn split_top_level(text: &str, sep: impl Fn(char) -> bool) -> Vec<&str> {
    let mut out = Vec::new();
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut start = 0;
    for (i, c) in text.char_indices() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(c),
            (None, '(') => depth += 1,
            (None, ')') => depth = depth.saturating_sub(1),
            (None, c) if depth == 0 && sep(c) => {
                out.push(&text[start..i]);
                start = i + c.len_utf8();
            }
            _ => {}
        }
    }
    out.push(&text[start..]);
    out
}

pub(crate) fn parse_declarations(block: &str) -> Vec<Declaration> {
    split_top_level(block, |c| c == ';')
        .into_iter()
        .filter_map(|decl| {
            let (property, value) = decl.split_once(':')?;
            let property = property.trim().to_ascii_lowercase();
            let mut value = value.trim();
            let mut important = false;
            if let Some(idx) = value.to_ascii_lowercase().rfind("!important") {
                important = value[idx + "!important".len()..].trim().is_empty();
                if important {
                    value = value[..idx].trim_end();
                }
            }
            if property.is_empty() || value.is_empty() {
                return None;
            }
            Some(Declaration {
                property,
                value: value.to_string(),
                important,
            })
        })
        .collect()
}
