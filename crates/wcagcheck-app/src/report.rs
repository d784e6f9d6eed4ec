use anyhow::Context;
use wcagcheck_render::{build_view, PageView, RenderableReport};
use wcagcheck_types::{AuditEnvelope, SCHEMA_REPORT_V1};

pub fn parse_report_json(text: &str) -> anyhow::Result<AuditEnvelope> {
    let value: serde_json::Value = serde_json::from_str(text).context("parse report json")?;

    let schema = value
        .get("schema")
        .and_then(|v| v.as_str())
        .unwrap_or_default();
    if schema != SCHEMA_REPORT_V1 {
        anyhow::bail!("unknown report schema: {schema}");
    }

    serde_json::from_value(value).context("parse wcagcheck report")
}

/// Pretty JSON with a trailing newline.
pub fn serialize_report(envelope: &AuditEnvelope) -> anyhow::Result<String> {
    let mut text = serde_json::to_string_pretty(envelope).context("serialize report")?;
    text.push('\n');
    Ok(text)
}

pub fn to_renderable(envelope: &AuditEnvelope) -> RenderableReport {
    RenderableReport {
        verdict: envelope.verdict,
        pages: envelope
            .pages
            .iter()
            .map(|p| PageView {
                path: p.path.clone(),
                view: build_view(&p.report),
            })
            .collect(),
    }
}
