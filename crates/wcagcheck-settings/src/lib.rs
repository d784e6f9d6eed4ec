//! Config parsing, severity resolution and the persisted severity store.
//!
//! Parsing and resolution are IO-free and work on strings. [`FileSeverityStore`] is the one
//! place that touches disk.

#![forbid(unsafe_code)]

mod model;
mod resolve;
mod store;

pub use model::WcagcheckConfigV1;
pub use resolve::{Overrides, ResolvedConfig, SeveritySource, DEFAULT_STATE_FILE};
pub use store::{FileSeverityStore, MemorySeverityStore, SeverityStore};

/// Parse `wcagcheck.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<WcagcheckConfigV1> {
    let cfg: WcagcheckConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the effective config: CLI overrides, then the stored level, then the file.
pub fn resolve_config(
    cfg: WcagcheckConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}
