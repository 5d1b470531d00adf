// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OrgTreeError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Cannot read input file {path}: {source}")]
    InputRead {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Input is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Input has no header row")]
    EmptyInput,

    #[error("Column '{column}' not found (available: {})", available.join(", "))]
    MissingColumn {
        column: String,
        available: Vec<String>,
    },

    #[error("No hierarchy columns selected and none could be detected")]
    NoLevelColumns,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
}

impl OrgTreeError {
    /// True for problems the user fixes by changing column or mode settings.
    #[must_use]
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::MissingColumn { .. }
                | Self::NoLevelColumns
                | Self::InvalidConfig(_)
                | Self::ConfigParse(_)
        )
    }

    pub(crate) fn io(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        Self::Io {
            source,
            path: path.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, OrgTreeError>;

// Allow `?` on std::io::Error by converting to OrgTreeError::Io with unknown path.
impl From<std::io::Error> for OrgTreeError {
    fn from(source: std::io::Error) -> Self {
        OrgTreeError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}
