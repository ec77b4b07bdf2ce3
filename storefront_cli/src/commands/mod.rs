pub mod blogs;
pub mod categories;
pub mod contacts;
pub mod login;
pub mod products;
pub mod quotes;
pub mod upload;
pub mod users;

use std::path::Path;

use anyhow::{Context, Result};

/// Reads a JSON payload file for create/update commands.
pub(crate) fn read_payload<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))
}
