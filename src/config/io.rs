// src/config/io.rs
use std::fs;
use std::path::Path;

use tracing::debug;

use super::types::Config;
use crate::error::{OrgTreeError, Result};

pub const CONFIG_FILE: &str = "orgtree.toml";

/// Reads `orgtree.toml` from `dir`. A missing file yields defaults.
///
/// # Errors
/// Returns error if the file exists but cannot be read or parsed.
pub fn load_from_dir(dir: &Path) -> Result<Config> {
    let path = dir.join(CONFIG_FILE);
    if !path.exists() {
        debug!("no {CONFIG_FILE} in {}, using defaults", dir.display());
        return Ok(Config::default());
    }
    load_file(&path)
}

/// Reads an explicitly named config file.
///
/// # Errors
/// Returns error if the file is missing, unreadable, or malformed.
pub fn load_file(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|e| OrgTreeError::io(e, path))?;
    let config = parse_toml(&content)?;
    debug!("loaded config from {}", path.display());
    Ok(config)
}

/// Parses config text.
///
/// # Errors
/// Returns error on invalid TOML or wrongly typed fields.
pub fn parse_toml(content: &str) -> Result<Config> {
    Ok(toml::from_str(content)?)
}
