use crate::model::{Document, NodeId};
use crate::policy::AuditPolicy;
use crate::rules::{Hit, RuleSpec};
use sha2::{Digest, Sha256};
use wcagcheck_types::{Impact, Violation};

const SNAPSHOT_LIMIT: usize = 200;

pub fn violation(doc: &Document, rule: &RuleSpec, hit: Hit, policy: &AuditPolicy) -> Violation {
    let message = if rule.important || policy.is_flagged(rule.code) {
        format!("{} (important)", hit.message)
    } else {
        hit.message
    };
    let impact = rule.impact.at(policy.severity);
    let element = hit.node.map(|n| snapshot(doc, n));
    let fingerprint = fingerprint(
        rule.category.as_str(),
        rule.code,
        &message,
        impact,
        element.as_deref(),
    );

    Violation {
        category: rule.category,
        code: rule.code.to_string(),
        message,
        impact,
        element,
        fingerprint: Some(fingerprint),
    }
}

/// Outer markup of the node, or a synthesized opening tag, truncated for display.
pub fn snapshot(doc: &Document, id: NodeId) -> String {
    let el = doc.get(id);
    let markup = if el.markup.is_empty() {
        let mut tag = format!("<{}", el.tag);
        for (k, v) in &el.attrs {
            tag.push_str(&format!(" {}=\"{}\"", k, v));
        }
        tag.push('>');
        tag
    } else {
        el.markup.clone()
    };

    if markup.chars().count() <= SNAPSHOT_LIMIT {
        return markup;
    }
    let mut cut: String = markup.chars().take(SNAPSHOT_LIMIT).collect();
    cut.push('…');
    cut
}

/// Stable SHA-256 fingerprint for a violation.
///
/// Identity fields: category, code, message, impact and the element snapshot (if any).
pub fn fingerprint(
    category: &str,
    code: &str,
    message: &str,
    impact: Impact,
    element: Option<&str>,
) -> String {
    let mut parts = vec![category, code, message, impact.as_str()];
    if let Some(e) = element {
        parts.push(e);
    }
    let canonical = parts.join("|");

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    hex::encode(hasher.finalize())
}

/// Lower-cased text with whitespace runs collapsed.
pub fn normalized_text(doc: &Document, id: NodeId) -> String {
    doc.text_content(id)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
