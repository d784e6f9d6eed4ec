//! The `audit` use case: load pages, evaluate them and wrap the results in an envelope.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use rayon::prelude::*;
use time::OffsetDateTime;
use wcagcheck_settings::ResolvedConfig;
use wcagcheck_types::{
    AuditEnvelope, PageReport, RunMeta, ToolMeta, Verdict, SCHEMA_REPORT_V1,
};

#[derive(Clone, Debug)]
pub struct AuditInput<'a> {
    /// Pages named explicitly; reported under the path as given.
    pub pages: &'a [Utf8PathBuf],
    /// Directory to search with the configured include/exclude globs; its pages are
    /// reported relative to it.
    pub dir: Option<&'a Utf8Path>,
    pub resolved: &'a ResolvedConfig,
}

struct Target {
    display: String,
    path: Utf8PathBuf,
}

fn targets(input: &AuditInput<'_>) -> anyhow::Result<Vec<Target>> {
    let mut out: Vec<Target> = input
        .pages
        .iter()
        .map(|p| Target {
            display: p.as_str().replace('\\', "/"),
            path: p.clone(),
        })
        .collect();

    if let Some(dir) = input.dir {
        let found = wcagcheck_dom::discover_pages(
            dir,
            &input.resolved.include,
            &input.resolved.exclude,
        )
        .with_context(|| format!("discover pages in {dir}"))?;
        out.extend(found.into_iter().map(|rel| Target {
            display: rel.as_str().to_string(),
            path: dir.join(&rel),
        }));
    }

    if out.is_empty() {
        anyhow::bail!("no pages to audit");
    }
    Ok(out)
}

/// Audit every page. Pages are independent and run in parallel; the envelope lists them sorted
/// by path.
pub fn run_audit(input: AuditInput<'_>) -> anyhow::Result<AuditEnvelope> {
    let started_at = OffsetDateTime::now_utc();
    let policy = &input.resolved.policy;
    let targets = targets(&input)?;
    tracing::debug!(pages = targets.len(), severity = %policy.severity, "starting audit");

    let mut pages = targets
        .par_iter()
        .map(|t| -> anyhow::Result<PageReport> {
            let doc = wcagcheck_dom::load_page(&t.path)?;
            let report = wcagcheck_domain::audit(&doc, policy);
            tracing::info!(
                page = %t.display,
                score = report.score,
                grade = report.grade.map_or("fail", |g| g.as_str()),
                violations = report.violation_count(),
                "page audited"
            );
            Ok(PageReport {
                path: t.display.clone(),
                report,
            })
        })
        .collect::<anyhow::Result<Vec<_>>>()?;
    pages.sort_by(|a, b| a.path.cmp(&b.path));
    pages.dedup_by(|a, b| a.path == b.path);

    let ended_at = OffsetDateTime::now_utc();
    let duration_ms = (ended_at - started_at).whole_milliseconds().max(0) as u64;

    Ok(AuditEnvelope {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "wcagcheck".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        run: RunMeta {
            started_at,
            ended_at,
            duration_ms,
        },
        verdict: AuditEnvelope::verdict_for(&pages),
        pages,
    })
}

/// Map verdict to exit code: 0 = every page graded, 2 = at least one page failed.
pub fn verdict_exit_code(verdict: Verdict) -> i32 {
    match verdict {
        Verdict::Pass => 0,
        Verdict::Fail => 2,
    }
}
