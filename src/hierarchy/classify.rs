// src/hierarchy/classify.rs
//! Title classification into ordinal levels.

use regex::Regex;
use serde::Serialize;
use std::fmt;

use crate::error::Result;

/// Ordinal rank inferred from a position title. Lower is more senior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    Executive = 1,
    Manager = 2,
    Staff = 3,
    Other = 4,
}

impl Level {
    #[must_use]
    pub fn rank(self) -> u8 {
        self as u8
    }

    /// The level that parents this one during edge formation.
    #[must_use]
    pub fn parent_level(self) -> Option<Self> {
        match self {
            Self::Manager => Some(Self::Executive),
            Self::Staff => Some(Self::Manager),
            Self::Executive | Self::Other => None,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "L{}", self.rank())
    }
}

/// Keyword groups in precedence order; the first hit decides.
const RULES: &[(Level, &[&str])] = &[
    (
        Level::Executive,
        &["senior general manager", "general manager", "head"],
    ),
    (Level::Manager, &["manager", "lead", "superintendent"]),
    (
        Level::Staff,
        &[
            "officer",
            "engineer",
            "analyst",
            "specialist",
            "administrator",
            "designer",
            "developer",
            "qa",
        ],
    ),
];

/// Compiled title patterns.
#[derive(Debug, Clone)]
pub struct LevelClassifier {
    rules: Vec<(Level, Regex)>,
}

impl LevelClassifier {
    /// Compiles the built-in keyword groups.
    ///
    /// # Errors
    /// Returns error if a pattern fails to compile.
    pub fn new() -> Result<Self> {
        let rules = RULES
            .iter()
            .map(|(level, words)| Ok((*level, keyword_regex(words)?)))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { rules })
    }

    /// Classifies a free-text title. Unmatched titles are [`Level::Other`].
    #[must_use]
    pub fn classify(&self, title: &str) -> Level {
        let lowered = title.to_lowercase();
        self.rules
            .iter()
            .find(|(_, re)| re.is_match(&lowered))
            .map_or(Level::Other, |(level, _)| *level)
    }
}

// Unanchored: a keyword may sit inside a glued word ("Sectionhead").
fn keyword_regex(words: &[&str]) -> Result<Regex> {
    let alternatives: Vec<String> = words.iter().map(|w| regex::escape(w)).collect();
    Ok(Regex::new(&alternatives.join("|"))?)
}
