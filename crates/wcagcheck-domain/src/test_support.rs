use crate::model::{ComputedStyle, Document, NodeId};
use crate::policy::AuditPolicy;
use crate::rules::{self, RuleSpec};
use std::collections::BTreeMap;
use wcagcheck_types::{Category, CheckResult, SeverityLevel};

/// Builds an `html > body` document for check tests.
pub struct PageBuilder {
    doc: Document,
    pub body: NodeId,
}

impl PageBuilder {
    pub fn new() -> Self {
        let mut doc = Document::new();
        let html = doc.push_element(None, "html", BTreeMap::new());
        let body = doc.push_element(Some(html), "body", BTreeMap::new());
        doc.get_mut(body).style.display = "block".to_string();
        Self { doc, body }
    }

    pub fn add(&mut self, parent: NodeId, tag: &str, attrs: &[(&str, &str)]) -> NodeId {
        let attrs = attrs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        self.doc.push_element(Some(parent), tag, attrs)
    }

    pub fn add_text(
        &mut self,
        parent: NodeId,
        tag: &str,
        attrs: &[(&str, &str)],
        text: &str,
    ) -> NodeId {
        let id = self.add(parent, tag, attrs);
        self.doc.push_text(id, text);
        id
    }

    pub fn text(&mut self, parent: NodeId, text: &str) {
        self.doc.push_text(parent, text);
    }

    pub fn style(&mut self, id: NodeId, f: impl FnOnce(&mut ComputedStyle)) {
        f(&mut self.doc.get_mut(id).style);
    }

    pub fn build(self) -> Document {
        self.doc
    }
}

pub fn run(doc: &Document, category: Category, level: SeverityLevel) -> CheckResult {
    crate::run_category(doc, &AuditPolicy::new(level), category).expect("check should complete")
}

pub fn rule(code: &str) -> &'static RuleSpec {
    rules::RULES
        .iter()
        .find(|r| r.code == code)
        .expect("rule exists")
}

pub fn codes(result: &CheckResult) -> Vec<&str> {
    result.violations().iter().map(|v| v.code.as_str()).collect()
}
