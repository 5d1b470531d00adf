// src/ingest/sniff.rs
//! Delimiter detection from a leading sample of the file.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Delimiter {
    Comma,
    Semicolon,
}

impl Delimiter {
    const CANDIDATES: [Delimiter; 2] = [Delimiter::Semicolon, Delimiter::Comma];

    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            ',' => Some(Self::Comma),
            ';' => Some(Self::Semicolon),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_char(self) -> char {
        match self {
            Self::Comma => ',',
            Self::Semicolon => ';',
        }
    }

    #[must_use]
    pub fn as_byte(self) -> u8 {
        match self {
            Self::Comma => b',',
            Self::Semicolon => b';',
        }
    }
}

impl Default for Delimiter {
    fn default() -> Self {
        Self::Semicolon
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Picks `,` or `;` from the first `sample_bytes` of `content`.
///
/// A candidate qualifies when it appears the same non-zero number of times
/// (outside quotes) on every complete sample line. The qualifying candidate
/// with the most occurrences per line wins. Falls back to `;`.
#[must_use]
pub fn sniff_delimiter(content: &str, sample_bytes: usize) -> Delimiter {
    let lines = sample_lines(content, sample_bytes);
    if lines.is_empty() {
        return Delimiter::default();
    }

    Delimiter::CANDIDATES
        .iter()
        .filter_map(|&d| consistent_count(&lines, d).map(|n| (d, n)))
        .max_by_key(|&(_, n)| n)
        .map_or_else(Delimiter::default, |(d, _)| d)
}

fn sample_lines(content: &str, sample_bytes: usize) -> Vec<&str> {
    let mut end = sample_bytes.min(content.len());
    while !content.is_char_boundary(end) {
        end -= 1;
    }
    let sample = &content[..end];
    let truncated = end < content.len();

    let mut lines: Vec<&str> = sample.lines().collect();
    // The last line of a cut sample is usually partial.
    if truncated && lines.len() > 1 && !sample.ends_with('\n') {
        lines.pop();
    }
    lines.retain(|l| !l.trim().is_empty());
    lines
}

fn consistent_count(lines: &[&str], delim: Delimiter) -> Option<usize> {
    let first = count_unquoted(lines[0], delim.as_char());
    if first == 0 {
        return None;
    }
    lines
        .iter()
        .all(|l| count_unquoted(l, delim.as_char()) == first)
        .then_some(first)
}

fn count_unquoted(line: &str, target: char) -> usize {
    let mut in_quotes = false;
    let mut count = 0;
    for c in line.chars() {
        if c == '"' {
            in_quotes = !in_quotes;
        } else if c == target && !in_quotes {
            count += 1;
        }
    }
    count
}
