//! Interactive audit session: owns the severity store and the last report.
//!
//! The session is `Idle` between runs and `Running` while an audit is in progress. Adapters that
//! show progress drive the two halves themselves with [`AuditSession::begin`] and
//! [`AuditSession::finish`]; [`AuditSession::run`] does both. A run always returns to `Idle`;
//! failed checks are part of the report, not a failed run.

use std::collections::BTreeSet;
use wcagcheck_domain::model::Document;
use wcagcheck_domain::{audit, AuditPolicy};
use wcagcheck_render::{build_view, ReportView};
use wcagcheck_settings::SeverityStore;
use wcagcheck_types::{AuditReport, SeverityLevel};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Running,
}

pub struct AuditSession<S> {
    store: S,
    document: Document,
    important_rules: BTreeSet<String>,
    state: SessionState,
    last: Option<AuditReport>,
}

impl<S: SeverityStore> AuditSession<S> {
    pub fn new(store: S, document: Document) -> Self {
        Self {
            store,
            document,
            important_rules: BTreeSet::new(),
            state: SessionState::Idle,
            last: None,
        }
    }

    pub fn with_important_rules(mut self, codes: impl IntoIterator<Item = String>) -> Self {
        self.important_rules.extend(codes);
        self
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// The persisted level; `low` when nothing valid is stored.
    pub fn severity(&self) -> SeverityLevel {
        self.store.get()
    }

    pub fn last_report(&self) -> Option<&AuditReport> {
        self.last.as_ref()
    }

    pub fn view(&self) -> Option<ReportView> {
        self.last.as_ref().map(build_view)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Enter `Running` and return the policy for this run. Starting again while running
    /// discards the earlier run.
    pub fn begin(&mut self) -> AuditPolicy {
        self.state = SessionState::Running;
        let policy = AuditPolicy {
            severity: self.severity(),
            important_rules: self.important_rules.clone(),
        };
        tracing::debug!(severity = %policy.severity, "session audit started");
        policy
    }

    /// Keep the report of the current run and return to `Idle`.
    pub fn finish(&mut self, report: AuditReport) -> &AuditReport {
        self.state = SessionState::Idle;
        tracing::debug!(score = report.score, "session audit finished");
        self.last.insert(report)
    }

    /// Audit the document at the stored severity and keep the report.
    pub fn run(&mut self) -> &AuditReport {
        let policy = self.begin();
        let report = audit(&self.document, &policy);
        self.finish(report)
    }

    /// Persist a new level and re-run the audit with it.
    pub fn save_settings(&mut self, level: SeverityLevel) -> anyhow::Result<&AuditReport> {
        self.store.save(level)?;
        tracing::info!(severity = %level, "severity saved");
        Ok(self.run())
    }
}
