//! CLI entry point for wcagcheck.
//!
//! Argument parsing, file I/O and exit codes only. Use cases live in `wcagcheck-app`.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;
use wcagcheck_app::{
    format_explanation, format_not_found, load_settings, parse_report_json, run_audit,
    run_explain, run_html, run_markdown, serialize_report, verdict_exit_code,
    write_text, AuditInput, AuditSession, ExplainOutput, Settings,
};
use wcagcheck_types::SeverityLevel;

#[derive(Parser, Debug)]
#[command(
    name = "wcagcheck",
    version,
    about = "Rule-based WCAG accessibility auditor for HTML pages"
)]
struct Cli {
    /// Path to wcagcheck config TOML (missing file means defaults).
    #[arg(long, global = true, default_value = "wcagcheck.toml")]
    config: Utf8PathBuf,

    /// Severity store file; overrides `state_file` from the config.
    #[arg(long, global = true)]
    state: Option<Utf8PathBuf>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Json,
    Markdown,
    Html,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Audit HTML pages and emit a report.
    Audit {
        /// Pages to audit.
        pages: Vec<Utf8PathBuf>,

        /// Directory searched with the configured include/exclude globs.
        #[arg(long)]
        dir: Option<Utf8PathBuf>,

        /// Severity for this run (very-low|low|medium|high); not persisted.
        #[arg(long)]
        severity: Option<SeverityLevel>,

        #[arg(long, value_enum, default_value = "json")]
        format: Format,

        /// Where to write the report (stdout if not specified).
        #[arg(long)]
        out: Option<Utf8PathBuf>,
    },

    /// Render markdown from an existing JSON report.
    Md {
        /// Path to the JSON report file.
        #[arg(long)]
        report: Utf8PathBuf,

        /// Where to write the Markdown output (stdout if not specified).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },

    /// Explain a category id (e.g. "contrast") or rule code (e.g. "img_missing_alt").
    Explain { identifier: String },

    /// Show or change the persisted severity level.
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
}

#[derive(Subcommand, Debug)]
enum SettingsAction {
    /// Print the effective severity and where it came from.
    Show,
    /// Persist a severity level.
    Set {
        level: SeverityLevel,

        /// Re-audit this page at the new level and print its grade.
        #[arg(long)]
        page: Option<Utf8PathBuf>,
    },
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.cmd {
        Commands::Audit {
            ref pages,
            ref dir,
            severity,
            format,
            ref out,
        } => cmd_audit(&cli, pages, dir.as_deref(), severity, format, out.as_deref()),
        Commands::Md {
            ref report,
            ref output,
        } => cmd_md(report, output.as_deref()).map(|()| 0),
        Commands::Explain { ref identifier } => Ok(cmd_explain(identifier)),
        Commands::Settings { ref action } => cmd_settings(&cli, action).map(|()| 0),
    };

    match result {
        Ok(0) => {}
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("wcagcheck error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("WCAGCHECK_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn settings(cli: &Cli) -> anyhow::Result<Settings> {
    // Missing config file is allowed (defaults apply).
    let text = match std::fs::read_to_string(&cli.config) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => String::new(),
        Err(err) => return Err(err).with_context(|| format!("read config: {}", cli.config)),
    };
    load_settings(&text, cli.state.as_deref())
}

fn cmd_audit(
    cli: &Cli,
    pages: &[Utf8PathBuf],
    dir: Option<&Utf8Path>,
    severity: Option<SeverityLevel>,
    format: Format,
    out: Option<&Utf8Path>,
) -> anyhow::Result<i32> {
    let settings = settings(cli)?;
    let resolved = settings.resolve(&settings.store(), severity)?;
    tracing::debug!(
        severity = %resolved.policy.severity,
        source = resolved.severity_source.as_str(),
        "resolved severity"
    );

    let envelope = run_audit(AuditInput {
        pages,
        dir,
        resolved: &resolved,
    })?;

    let text = match format {
        Format::Json => serialize_report(&envelope)?,
        Format::Markdown => run_markdown(&envelope),
        Format::Html => run_html(&envelope),
    };
    emit(out, &text).context("write report")?;

    Ok(verdict_exit_code(envelope.verdict))
}

fn cmd_md(report_path: &Utf8Path, output: Option<&Utf8Path>) -> anyhow::Result<()> {
    let report_text = std::fs::read_to_string(report_path)
        .with_context(|| format!("read report: {report_path}"))?;
    let envelope = parse_report_json(&report_text)?;
    emit(output, &run_markdown(&envelope)).context("write markdown output")
}

fn cmd_explain(identifier: &str) -> i32 {
    match run_explain(identifier) {
        ExplainOutput::Found(exp) => {
            print!("{}", format_explanation(&exp));
            0
        }
        ExplainOutput::NotFound {
            identifier,
            available_categories,
            available_codes,
        } => {
            eprint!(
                "{}",
                format_not_found(&identifier, available_categories, available_codes)
            );
            1
        }
    }
}

fn cmd_settings(cli: &Cli, action: &SettingsAction) -> anyhow::Result<()> {
    let settings = settings(cli)?;
    match action {
        SettingsAction::Show => {
            let summary = settings.summary(&settings.store())?;
            println!("severity: {}", summary.severity);
            println!("source: {}", summary.source.as_str());
            println!("state file: {}", summary.state_file);
        }
        SettingsAction::Set { level, page: None } => {
            settings.save_severity(*level)?;
            println!("severity: {level}");
        }
        SettingsAction::Set {
            level,
            page: Some(page),
        } => {
            let doc = wcagcheck_dom::load_page(page)?;
            let resolved = settings.resolve(&settings.store(), None)?;
            let mut session = AuditSession::new(settings.store(), doc)
                .with_important_rules(resolved.policy.important_rules);
            session.save_settings(*level)?;
            println!("severity: {level}");
            if let Some(view) = session.view() {
                println!("{page}: {} (score {})", view.badge.label(), view.badge.score);
            }
        }
    }
    Ok(())
}

fn emit(out: Option<&Utf8Path>, text: &str) -> anyhow::Result<()> {
    match out {
        Some(path) => write_text(path, text),
        None => {
            print!("{text}");
            Ok(())
        }
    }
}
