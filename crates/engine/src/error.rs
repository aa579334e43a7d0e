use core::fmt;

use thiserror::Error;

/// A line and column combination.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineCol {
    line: usize,
    column: usize,
}

impl LineCol {
    /// Construct from zero-based row and column indexes.
    pub(crate) const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Zero-based line.
    #[inline]
    pub fn line(&self) -> usize {
        self.line
    }

    /// Zero-based column.
    #[inline]
    pub fn column(&self) -> usize {
        self.column
    }
}

impl fmt::Display for LineCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let line = self.line + 1;
        let column = self.column + 1;
        write!(f, "{line}:{column}")
    }
}

/// Errors raised while building a grid out of raw text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SchematicError {
    /// The text contained no rows.
    #[error("empty schematic")]
    EmptyInput,
    /// A row does not have the same width as the first row.
    #[error("ragged grid: line {line} has {actual} columns, expected {expected}")]
    RaggedGrid {
        /// One-based line of the offending row.
        line: usize,
        /// Width of the first row.
        expected: usize,
        /// Width of the offending row.
        actual: usize,
    },
}

impl SchematicError {
    /// Position in the source text the error refers to.
    pub fn pos(&self) -> LineCol {
        match self {
            SchematicError::EmptyInput => LineCol::default(),
            SchematicError::RaggedGrid {
                line,
                expected,
                actual,
            } => LineCol::new(line.saturating_sub(1), (*expected).min(*actual)),
        }
    }
}
