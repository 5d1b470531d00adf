// src/exit.rs
//! Standardized process exit codes for `orgtree`.
//!
//! Provides a stable contract for scripts and automation.

use std::process::Termination;

use crate::error::OrgTreeError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum OrgTreeExit {
    /// Operation completed successfully.
    Success = 0,
    /// Generic error (e.g. IO).
    Error = 1,
    /// Input could not be read as a table (encoding, no header, broken CSV).
    InvalidInput = 2,
    /// Column selection or config file is unusable.
    ConfigError = 3,
    /// A strict query matched no people.
    NoData = 4,
}

impl OrgTreeExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Maps a library error onto the exit code a script should see.
    #[must_use]
    pub fn for_error(err: &OrgTreeError) -> Self {
        if err.is_config_error() {
            return Self::ConfigError;
        }
        match err {
            OrgTreeError::InputRead { .. }
            | OrgTreeError::Encoding(_)
            | OrgTreeError::Csv(_)
            | OrgTreeError::EmptyInput => Self::InvalidInput,
            _ => Self::Error,
        }
    }
}

impl Termination for OrgTreeExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}
