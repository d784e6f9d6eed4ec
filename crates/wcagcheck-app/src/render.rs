//! Render use cases: markdown and HTML from an in-memory envelope.

use crate::report::to_renderable;
use anyhow::Context;
use camino::Utf8Path;
use wcagcheck_types::AuditEnvelope;

pub fn run_markdown(envelope: &AuditEnvelope) -> String {
    wcagcheck_render::render_markdown(&to_renderable(envelope))
}

pub fn run_html(envelope: &AuditEnvelope) -> String {
    wcagcheck_render::render_html_report(&to_renderable(envelope))
}

/// Write `text` to `path`, creating parent directories.
pub fn write_text(path: &Utf8Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_str().is_empty()) {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {parent}"))?;
    }
    std::fs::write(path, text).with_context(|| format!("write text: {path}"))?;
    Ok(())
}
