//! Config file plus the severity store it points at.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use wcagcheck_settings::{
    FileSeverityStore, Overrides, ResolvedConfig, SeveritySource, SeverityStore,
    WcagcheckConfigV1, DEFAULT_STATE_FILE,
};
use wcagcheck_types::SeverityLevel;

#[derive(Clone, Debug)]
pub struct Settings {
    pub config: WcagcheckConfigV1,
    pub state_file: Utf8PathBuf,
}

/// What `settings show` reports.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SettingsSummary {
    pub severity: SeverityLevel,
    pub source: SeveritySource,
    pub state_file: Utf8PathBuf,
}

/// Parse config text (empty means defaults) and locate the state file: the override wins
/// over the config's `state_file`.
pub fn load_settings(
    config_text: &str,
    state_override: Option<&Utf8Path>,
) -> anyhow::Result<Settings> {
    let config = if config_text.trim().is_empty() {
        WcagcheckConfigV1::default()
    } else {
        wcagcheck_settings::parse_config_toml(config_text).context("parse config")?
    };
    let state_file = state_override
        .map(Utf8Path::to_path_buf)
        .or_else(|| config.state_file.as_deref().map(Utf8PathBuf::from))
        .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_STATE_FILE));
    Ok(Settings { config, state_file })
}

impl Settings {
    pub fn store(&self) -> FileSeverityStore {
        FileSeverityStore::new(self.state_file.clone())
    }

    /// Effective configuration: `flag`, then the stored level, then the config file.
    pub fn resolve(
        &self,
        store: &dyn SeverityStore,
        flag: Option<SeverityLevel>,
    ) -> anyhow::Result<ResolvedConfig> {
        let stored = match store.load() {
            Ok(level) => level,
            Err(err) => {
                tracing::warn!(error = %format!("{err:#}"), "ignoring unreadable severity store");
                None
            }
        };
        wcagcheck_settings::resolve_config(
            self.config.clone(),
            Overrides {
                severity: flag,
                stored,
                state_file: Some(self.state_file.clone()),
            },
        )
        .context("resolve config")
    }

    /// Persist `level` to the state file.
    pub fn save_severity(&self, level: SeverityLevel) -> anyhow::Result<()> {
        self.store()
            .save(level)
            .with_context(|| format!("save severity to {}", self.state_file))
    }

    pub fn summary(&self, store: &dyn SeverityStore) -> anyhow::Result<SettingsSummary> {
        let resolved = self.resolve(store, None)?;
        Ok(SettingsSummary {
            severity: resolved.policy.severity,
            source: resolved.severity_source,
            state_file: resolved.state_file,
        })
    }
}
