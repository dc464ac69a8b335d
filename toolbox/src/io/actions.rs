//! Action script loading.
//!
//! A script is a JSON array of actions:
//!
//! ```json
//! [{"type": "increment"}, {"type": "add", "payload": 5}]
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::redux::action::Action;

/// Parse an action script from a JSON string.
pub fn parse_actions<T, P>(raw: &str) -> Result<Vec<Action<T, P>>>
where
    T: DeserializeOwned,
    P: DeserializeOwned,
{
    serde_json::from_str(raw).context("parse action script")
}

/// Load an action script from disk.
pub fn load_actions<T, P>(path: &Path) -> Result<Vec<Action<T, P>>>
where
    T: DeserializeOwned,
    P: DeserializeOwned,
{
    let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let actions =
        parse_actions(&raw).with_context(|| format!("load actions {}", path.display()))?;
    debug!(path = %path.display(), count = actions.len(), "actions loaded");
    Ok(actions)
}
