// src/session.rs
//! Per-upload state for one user.

use std::path::Path;

use tracing::{info, warn};

use crate::config::Config;
use crate::error::Result;
use crate::hierarchy::{self, Hierarchy};
use crate::ingest::Table;
use crate::query::{members_under, Selection};

/// Holds the hierarchy built from the latest successful upload.
///
/// Each session owns its state; nothing is shared between sessions.
#[derive(Debug, Clone, Default)]
pub struct Session {
    config: Config,
    current: Option<Hierarchy>,
}

impl Session {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            config,
            current: None,
        }
    }

    /// Rebuilds from an uploaded file body.
    ///
    /// On failure the previous hierarchy stays in place.
    ///
    /// # Errors
    /// Returns error if the bytes are not a readable table or the columns
    /// do not resolve.
    pub fn load_bytes(&mut self, bytes: Vec<u8>) -> Result<&Hierarchy> {
        let attempt = Table::from_bytes(bytes, &self.config.input)
            .and_then(|table| hierarchy::build(&table, &self.config));
        self.replace(attempt)
    }

    /// Rebuilds from a file on disk.
    ///
    /// # Errors
    /// Same as [`Session::load_bytes`], plus read failures.
    pub fn load_path(&mut self, path: &Path) -> Result<&Hierarchy> {
        let attempt = Table::read(path, &self.config.input)
            .and_then(|table| hierarchy::build(&table, &self.config));
        self.replace(attempt)
    }

    fn replace(&mut self, attempt: Result<Hierarchy>) -> Result<&Hierarchy> {
        match attempt {
            Ok(built) => {
                info!("session rebuilt: {} nodes", built.index.len());
                Ok(self.current.insert(built))
            }
            Err(e) => {
                warn!("upload rejected, keeping previous state: {e}");
                Err(e)
            }
        }
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    #[must_use]
    pub fn hierarchy(&self) -> Option<&Hierarchy> {
        self.current.as_ref()
    }

    /// Ends the session, handing back the loaded hierarchy.
    #[must_use]
    pub fn into_hierarchy(self) -> Option<Hierarchy> {
        self.current
    }

    /// Members under `selection`; empty when nothing is loaded.
    #[must_use]
    pub fn members_under(&self, selection: Selection<'_>) -> Vec<&str> {
        self.current
            .as_ref()
            .map(|h| members_under(&h.index, selection))
            .unwrap_or_default()
    }
}
