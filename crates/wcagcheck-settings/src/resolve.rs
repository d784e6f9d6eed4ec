use crate::model::WcagcheckConfigV1;
use anyhow::Context;
use camino::Utf8PathBuf;
use globset::Glob;
use wcagcheck_domain::AuditPolicy;
use wcagcheck_types::{explain, SeverityLevel};

pub const DEFAULT_STATE_FILE: &str = ".wcagcheck/storage.json";

const DEFAULT_INCLUDE: &str = "**/*.html";

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    /// `--severity` for a single run.
    pub severity: Option<SeverityLevel>,
    /// Level read from the severity store.
    pub stored: Option<SeverityLevel>,
    pub state_file: Option<Utf8PathBuf>,
}

/// Where the effective severity came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeveritySource {
    Flag,
    Store,
    Config,
    Default,
}

impl SeveritySource {
    pub fn as_str(self) -> &'static str {
        match self {
            SeveritySource::Flag => "flag",
            SeveritySource::Store => "store",
            SeveritySource::Config => "config",
            SeveritySource::Default => "default",
        }
    }
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub policy: AuditPolicy,
    pub severity_source: SeveritySource,
    pub include: Vec<String>,
    pub exclude: Vec<String>,
    pub state_file: Utf8PathBuf,
}

pub fn resolve_config(
    cfg: WcagcheckConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    let configured = cfg
        .severity
        .as_deref()
        .map(|s| {
            s.parse::<SeverityLevel>()
                .with_context(|| "invalid severity in config")
        })
        .transpose()?;

    let (severity, severity_source) = if let Some(level) = overrides.severity {
        (level, SeveritySource::Flag)
    } else if let Some(level) = overrides.stored {
        (level, SeveritySource::Store)
    } else if let Some(level) = configured {
        (level, SeveritySource::Config)
    } else {
        (SeverityLevel::default(), SeveritySource::Default)
    };

    for code in &cfg.important_rules {
        if !explain::all_codes().contains(&code.as_str()) {
            anyhow::bail!("unknown rule code in important_rules: {code}");
        }
    }

    validate_globs("include", &cfg.include)?;
    validate_globs("exclude", &cfg.exclude)?;
    let include = if cfg.include.is_empty() {
        vec![DEFAULT_INCLUDE.to_string()]
    } else {
        cfg.include
    };

    let state_file = overrides
        .state_file
        .or(cfg.state_file.map(Utf8PathBuf::from))
        .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_STATE_FILE));

    Ok(ResolvedConfig {
        policy: AuditPolicy::new(severity).with_important_rules(cfg.important_rules),
        severity_source,
        include,
        exclude: cfg.exclude,
        state_file,
    })
}

fn validate_globs(field: &str, patterns: &[String]) -> anyhow::Result<()> {
    for pattern in patterns {
        Glob::new(pattern).with_context(|| format!("invalid {field} glob: {pattern}"))?;
    }
    Ok(())
}
