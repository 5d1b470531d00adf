use serde::{Deserialize, Serialize};

/// Which strategy turns rows into a hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum HierarchyMode {
    /// Ordered level columns define nesting.
    #[default]
    Explicit,
    /// Levels are classified from free-text position titles.
    Inferred,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    /// Forces `,` or `;` instead of sniffing.
    #[serde(default)]
    pub delimiter: Option<char>,
    #[serde(default = "default_sample_bytes")]
    pub sample_bytes: usize,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            delimiter: None,
            sample_bytes: default_sample_bytes(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HierarchyConfig {
    #[serde(default)]
    pub mode: HierarchyMode,
    /// Level columns, top to bottom. Empty means detect from headers.
    #[serde(default)]
    pub levels: Vec<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default = "default_separator")]
    pub separator: String,
}

impl Default for HierarchyConfig {
    fn default() -> Self {
        Self {
            mode: HierarchyMode::default(),
            levels: Vec::new(),
            name: None,
            separator: default_separator(),
        }
    }
}

/// Column names used by inferred-levels mode. Unset entries are detected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InferredColumnsConfig {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub division: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub section: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    #[serde(default = "default_export_delimiter")]
    pub delimiter: char,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            delimiter: default_export_delimiter(),
        }
    }
}

const fn default_sample_bytes() -> usize { 2048 }
const fn default_export_delimiter() -> char { ',' }
fn default_separator() -> String { " / ".to_string() }

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub hierarchy: HierarchyConfig,
    #[serde(default)]
    pub inferred: InferredColumnsConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

/// Values given on the command line; each one set replaces the file value.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub levels: Option<Vec<String>>,
    pub name: Option<String>,
    pub mode: Option<HierarchyMode>,
    pub separator: Option<String>,
    pub delimiter: Option<char>,
}
