use serde::Serialize;
use std::fmt;

/// What went wrong with a single input row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RowIssue {
    /// More cells than header columns. The row is skipped.
    TooManyFields { expected: usize, found: usize },
    /// Fewer cells than header columns. Missing cells count as empty.
    TooFewFields { expected: usize, found: usize },
    /// The CSV reader could not decode the record. The row is skipped.
    Unparsable { reason: String },
    /// Every hierarchy value was blank. The row is skipped.
    EmptyHierarchy,
    /// The name cell was blank. The row is kept with an empty name.
    BlankName,
    /// A level value contained the path separator and was split into levels.
    SeparatorInValue { value: String },
}

impl fmt::Display for RowIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooManyFields { expected, found } => {
                write!(f, "expected {expected} fields, found {found}; row skipped")
            }
            Self::TooFewFields { expected, found } => {
                write!(f, "expected {expected} fields, found {found}; missing cells left empty")
            }
            Self::Unparsable { reason } => write!(f, "unreadable record ({reason}); row skipped"),
            Self::EmptyHierarchy => write!(f, "all hierarchy values blank; row skipped"),
            Self::BlankName => write!(f, "blank name"),
            Self::SeparatorInValue { value } => {
                write!(f, "'{value}' contains the path separator; split into levels")
            }
        }
    }
}

/// A row-level problem tied to its 1-based input line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowWarning {
    pub line: u64,
    pub issue: RowIssue,
}

impl RowWarning {
    #[must_use]
    pub fn new(line: u64, issue: RowIssue) -> Self {
        Self { line, issue }
    }
}

/// A child claimed by more than one parent during level inference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ambiguity {
    pub child: String,
    /// Candidate parent labels in row order. The first one is used for the tree.
    pub parents: Vec<String>,
}

/// Diagnostics returned next to a built hierarchy.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BuildReport {
    /// Data rows read after the header, including skipped ones.
    pub rows_read: usize,
    /// Rows excluded because every hierarchy value was blank.
    pub rows_skipped: usize,
    /// Rows excluded because the record itself was malformed.
    pub rows_malformed: usize,
    /// Rows that reached the node index.
    pub rows_used: usize,
    pub warnings: Vec<RowWarning>,
    pub ambiguities: Vec<Ambiguity>,
}

impl BuildReport {
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty() || !self.ambiguities.is_empty()
    }

    pub(crate) fn push(&mut self, line: u64, issue: RowIssue) {
        self.warnings.push(RowWarning::new(line, issue));
    }
}
