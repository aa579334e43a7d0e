//! Numeric tokens found in a grid.

#[cfg(test)]
mod tests;

use core::fmt;
use core::ops::{Deref, RangeInclusive};

use num::BigUint;

use crate::cell;
use crate::grid::Grid;

/// A maximal run of digits on a single row.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    value: BigUint,
    row: usize,
    start_col: usize,
    end_col: usize,
}

/// Identity of a token, unique within one grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TokenKey {
    pub row: usize,
    pub start_col: usize,
    pub end_col: usize,
}

impl Token {
    #[cfg(test)]
    pub(crate) fn new(value: u64, row: usize, start_col: usize, end_col: usize) -> Self {
        Self {
            value: BigUint::from(value),
            row,
            start_col,
            end_col,
        }
    }

    /// The parsed value of the digit run.
    #[inline]
    pub fn value(&self) -> &BigUint {
        &self.value
    }

    #[inline]
    pub fn row(&self) -> usize {
        self.row
    }

    /// First column of the run.
    #[inline]
    pub fn start_col(&self) -> usize {
        self.start_col
    }

    /// Last column of the run, inclusive.
    #[inline]
    pub fn end_col(&self) -> usize {
        self.end_col
    }

    /// Columns covered by the token.
    #[inline]
    pub fn columns(&self) -> RangeInclusive<usize> {
        self.start_col..=self.end_col
    }

    /// Number of digits in the token.
    #[inline]
    pub fn width(&self) -> usize {
        self.end_col - self.start_col + 1
    }

    #[inline]
    pub fn key(&self) -> TokenKey {
        TokenKey {
            row: self.row,
            start_col: self.start_col,
            end_col: self.end_col,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let line = self.row + 1;
        let start = self.start_col + 1;
        let end = self.end_col + 1;
        write!(f, "{} at {line}:{start}-{end}", self.value)
    }
}

/// All tokens of a grid in row-major order, indexed by row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tokens {
    tokens: Vec<Token>,
    /// `offsets[y]..offsets[y + 1]` are the tokens on row `y`.
    offsets: Vec<usize>,
}

impl Tokens {
    /// Number of rows indexed.
    #[inline]
    pub fn rows_len(&self) -> usize {
        self.offsets.len().saturating_sub(1)
    }

    /// Tokens on the given row, ordered by column. Out of bounds rows are
    /// empty.
    #[inline]
    pub fn row(&self, row: usize) -> &[Token] {
        let (Some(&start), Some(&end)) = (self.offsets.get(row), self.offsets.get(row + 1)) else {
            return &[];
        };

        self.tokens.get(start..end).unwrap_or_default()
    }

    /// Tokens on the given row which cover at least one of the given columns.
    pub fn overlapping(&self, row: usize, columns: RangeInclusive<usize>) -> &[Token] {
        let tokens = self.row(row);
        let start = tokens.partition_point(|t| t.end_col < *columns.start());
        let end = tokens.partition_point(|t| t.start_col <= *columns.end());
        tokens.get(start..end).unwrap_or_default()
    }
}

impl Deref for Tokens {
    type Target = [Token];

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.tokens
    }
}

impl<'a> IntoIterator for &'a Tokens {
    type Item = &'a Token;
    type IntoIter = core::slice::Iter<'a, Token>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

/// Extract every numeric token from the grid.
///
/// Each row is walked once from left to right and a run never continues onto
/// the next row.
///
/// # Examples
///
/// ```
/// let grid = engine::build_grid("467..114..\n...*......")?;
/// let tokens = engine::extract_tokens(&grid);
///
/// let values = tokens.iter().map(|t| t.value().to_string()).collect::<Vec<_>>();
/// assert_eq!(values, ["467", "114"]);
/// assert_eq!(tokens[1].columns(), 5..=7);
/// # Ok::<_, engine::SchematicError>(())
/// ```
pub fn extract_tokens(grid: &Grid) -> Tokens {
    let mut tokens = Vec::new();
    let mut offsets = Vec::with_capacity(grid.rows_len() + 1);

    for (y, row) in grid.rows().enumerate() {
        offsets.push(tokens.len());

        let mut x = 0;

        while let Some(&c) = row.get(x) {
            let Some(d) = cell::digit_value(c) else {
                x += 1;
                continue;
            };

            let start = x;
            let mut value = BigUint::from(d);
            x += 1;

            while let Some(d) = row.get(x).and_then(|&c| cell::digit_value(c)) {
                value = value * 10u32 + d;
                x += 1;
            }

            tokens.push(Token {
                value,
                row: y,
                start_col: start,
                end_col: x - 1,
            });
        }
    }

    offsets.push(tokens.len());
    Tokens { tokens, offsets }
}
