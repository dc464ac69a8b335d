//! Replay configuration stored in `toolbox.toml`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Default config file name, resolved against the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "toolbox.toml";

/// Counter replay configuration (TOML).
///
/// Missing fields fall back to defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ReplayConfig {
    /// Counter value before the first action.
    pub initial: i64,

    /// Amount added by `increment` and subtracted by `decrement`.
    pub step: i64,

    /// Freeze the counter once this many actions have been dispatched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub freeze_after: Option<usize>,

    /// Log a warning for action types the counter does not handle.
    pub warn_unhandled: bool,
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self {
            initial: 0,
            step: 1,
            freeze_after: None,
            warn_unhandled: true,
        }
    }
}

impl ReplayConfig {
    pub fn validate(&self) -> Result<()> {
        if self.step == 0 {
            return Err(anyhow!("step must be non-zero"));
        }
        if self.freeze_after == Some(0) {
            return Err(anyhow!("freeze_after must be > 0 when set"));
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `ReplayConfig::default()`.
pub fn load_config(path: &Path) -> Result<ReplayConfig> {
    if !path.exists() {
        debug!(path = %path.display(), "config missing, using defaults");
        let cfg = ReplayConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: ReplayConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("validate {}", path.display()))?;
    debug!(path = %path.display(), ?cfg, "config loaded");
    Ok(cfg)
}

/// Render config as TOML with a trailing newline.
pub fn render_config(cfg: &ReplayConfig) -> Result<String> {
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    if !buf.ends_with('\n') {
        buf.push('\n');
    }
    Ok(buf)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &ReplayConfig) -> Result<()> {
    cfg.validate()?;
    let buf = render_config(cfg)?;
    write_atomic(path, &buf)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp config {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace config {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_missing_returns_default() {
        let temp = tempfile::tempdir().expect("tempdir");
        let cfg = load_config(&temp.path().join("missing.toml")).expect("load");
        assert_eq!(cfg, ReplayConfig::default());
    }

    #[test]
    fn write_then_load_round_trips() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("nested").join("toolbox.toml");
        let cfg = ReplayConfig {
            initial: 5,
            step: 2,
            freeze_after: Some(3),
            warn_unhandled: false,
        };
        write_config(&path, &cfg).expect("write");
        let loaded = load_config(&path).expect("load");
        assert_eq!(loaded, cfg);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("toolbox.toml");
        fs::write(&path, "initial = 10\n").expect("write");
        let cfg = load_config(&path).expect("load");
        assert_eq!(cfg.initial, 10);
        assert_eq!(cfg.step, 1);
        assert_eq!(cfg.freeze_after, None);
        assert!(cfg.warn_unhandled);
    }

    #[test]
    fn zero_step_is_rejected() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("toolbox.toml");
        fs::write(&path, "step = 0\n").expect("write");
        let err = load_config(&path).expect_err("expected error");
        assert!(format!("{err:#}").contains("step must be non-zero"));
    }

    #[test]
    fn zero_freeze_after_is_rejected() {
        let cfg = ReplayConfig {
            freeze_after: Some(0),
            ..ReplayConfig::default()
        };
        assert!(cfg.validate().is_err());
    }
}
