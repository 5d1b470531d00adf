// src/config/mod.rs
pub mod io;
pub mod types;

pub use self::io::CONFIG_FILE;
pub use self::types::{
    Config, ConfigOverrides, ExportConfig, HierarchyConfig, HierarchyMode, InferredColumnsConfig,
    InputConfig,
};

use crate::error::{OrgTreeError, Result};
use std::path::Path;

const SUPPORTED_DELIMITERS: [char; 2] = [',', ';'];

impl Config {
    /// Loads `orgtree.toml` from the current directory, or `explicit` when given.
    ///
    /// # Errors
    /// Returns error if a present config file cannot be read or parsed.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let config = match explicit {
            Some(path) => io::load_file(path)?,
            None => {
                let cwd = std::env::current_dir()?;
                io::load_from_dir(&cwd)?
            }
        };
        config.validate()?;
        Ok(config)
    }

    /// Replaces file values with whatever the caller set.
    pub fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        if let Some(levels) = overrides.levels {
            self.hierarchy.levels = levels;
        }
        if let Some(name) = overrides.name {
            self.hierarchy.name = Some(name);
        }
        if let Some(mode) = overrides.mode {
            self.hierarchy.mode = mode;
        }
        if let Some(sep) = overrides.separator {
            self.hierarchy.separator = sep;
        }
        if let Some(delim) = overrides.delimiter {
            self.input.delimiter = Some(delim);
        }
    }

    /// Validates configuration.
    ///
    /// # Errors
    /// Returns `InvalidConfig` for an empty separator or unsupported delimiters.
    pub fn validate(&self) -> Result<()> {
        if self.hierarchy.separator.is_empty() {
            return Err(OrgTreeError::InvalidConfig(
                "hierarchy.separator must not be empty".into(),
            ));
        }
        if let Some(d) = self.input.delimiter {
            check_delimiter("input.delimiter", d)?;
        }
        check_delimiter("export.delimiter", self.export.delimiter)?;
        if self.input.sample_bytes == 0 {
            return Err(OrgTreeError::InvalidConfig(
                "input.sample_bytes must be positive".into(),
            ));
        }
        Ok(())
    }
}

fn check_delimiter(key: &str, d: char) -> Result<()> {
    if SUPPORTED_DELIMITERS.contains(&d) {
        Ok(())
    } else {
        Err(OrgTreeError::InvalidConfig(format!(
            "{key} must be ',' or ';' (got {d:?})"
        )))
    }
}
