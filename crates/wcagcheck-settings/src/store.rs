//! Persisted severity selection.
//!
//! The level lives under [`SEVERITY_STORAGE_KEY`] in a flat JSON object, so the file can hold
//! other keys without the store disturbing them.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use serde_json::{Map, Value};
use wcagcheck_types::{SeverityLevel, SEVERITY_STORAGE_KEY};

pub trait SeverityStore {
    /// The stored level; `None` when nothing valid is stored.
    fn load(&self) -> anyhow::Result<Option<SeverityLevel>>;

    fn save(&mut self, level: SeverityLevel) -> anyhow::Result<()>;

    /// The stored level, `low` when unset, invalid or unreadable.
    fn get(&self) -> SeverityLevel {
        match self.load() {
            Ok(level) => level.unwrap_or_default(),
            Err(err) => {
                tracing::warn!(error = %format!("{err:#}"), "severity store unreadable; using default");
                SeverityLevel::default()
            }
        }
    }
}

fn parse_stored(raw: Option<&str>) -> Option<SeverityLevel> {
    let raw = raw?;
    match raw.parse() {
        Ok(level) => Some(level),
        Err(_) => {
            tracing::warn!(value = raw, "ignoring invalid stored severity");
            None
        }
    }
}

/// In-memory store holding the raw string, as a key/value store would.
#[derive(Clone, Debug, Default)]
pub struct MemorySeverityStore {
    raw: Option<String>,
}

impl MemorySeverityStore {
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: Some(raw.into()),
        }
    }
}

impl SeverityStore for MemorySeverityStore {
    fn load(&self) -> anyhow::Result<Option<SeverityLevel>> {
        Ok(parse_stored(self.raw.as_deref()))
    }

    fn save(&mut self, level: SeverityLevel) -> anyhow::Result<()> {
        self.raw = Some(level.as_str().to_string());
        Ok(())
    }
}

#[derive(Clone, Debug)]
pub struct FileSeverityStore {
    path: Utf8PathBuf,
}

impl FileSeverityStore {
    pub fn new(path: impl Into<Utf8PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    fn read_object(&self) -> anyhow::Result<Map<String, Value>> {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(err) => {
                return Err(err).with_context(|| format!("read severity store {}", self.path));
            }
        };
        if text.trim().is_empty() {
            return Ok(Map::new());
        }
        serde_json::from_str(&text).with_context(|| format!("parse severity store {}", self.path))
    }
}

impl SeverityStore for FileSeverityStore {
    fn load(&self) -> anyhow::Result<Option<SeverityLevel>> {
        let object = self.read_object()?;
        Ok(parse_stored(
            object.get(SEVERITY_STORAGE_KEY).and_then(Value::as_str),
        ))
    }

    fn save(&mut self, level: SeverityLevel) -> anyhow::Result<()> {
        // A corrupt file is replaced rather than blocking the write.
        let mut object = self.read_object().unwrap_or_default();
        object.insert(
            SEVERITY_STORAGE_KEY.to_string(),
            Value::String(level.as_str().to_string()),
        );

        if let Some(parent) = self.path.parent()
            && !parent.as_str().is_empty()
        {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create state directory {parent}"))?;
        }
        let mut text = serde_json::to_string_pretty(&object)?;
        text.push('\n');
        std::fs::write(&self.path, text)
            .with_context(|| format!("write severity store {}", self.path))?;
        tracing::debug!(path = %self.path, level = level.as_str(), "severity saved");
        Ok(())
    }
}
