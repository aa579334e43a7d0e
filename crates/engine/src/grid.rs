//! The immutable character grid of a schematic.


use core::fmt;
use core::ops::RangeInclusive;

use crate::error::SchematicError;

const NL: u8 = b'\n';

/// Offsets of the Moore neighborhood as `(row, column)` pairs.
const NEIGHBORS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A rectangular grid of characters.
///
/// Constructed once through [`build_grid`] and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    data: Vec<char>,
    rows: usize,
    columns: usize,
}

/// Build a grid out of raw text.
///
/// Lines are separated by `\n`, with an optional `\r` before it. Trailing
/// blank lines are ignored, every other line must be as wide as the first one.
///
/// # Examples
///
/// ```
/// let grid = engine::build_grid("467..\n...*.\n")?;
///
/// assert_eq!(grid.rows_len(), 2);
/// assert_eq!(grid.columns_len(), 5);
/// assert_eq!(grid.get(1, 3), Some('*'));
/// assert_eq!(grid.get(2, 0), None);
/// # Ok::<_, engine::SchematicError>(())
/// ```
pub fn build_grid(text: &str) -> Result<Grid, SchematicError> {
    let mut data = Vec::with_capacity(text.len());
    let mut columns = None;
    let mut rows = 0;
    // First blank line seen since the last non-blank one.
    let mut blank = None;

    for (row, line) in Lines::new(text).enumerate() {
        if line.is_empty() {
            blank.get_or_insert(row);
            continue;
        }

        let actual = line.chars().count();
        let expected = *columns.get_or_insert(actual);

        if let Some(row) = blank {
            return Err(SchematicError::RaggedGrid {
                line: row + 1,
                expected,
                actual: 0,
            });
        }

        if actual != expected {
            return Err(SchematicError::RaggedGrid {
                line: row + 1,
                expected,
                actual,
            });
        }

        data.extend(line.chars());
        rows += 1;
    }

    let Some(columns) = columns else {
        return Err(SchematicError::EmptyInput);
    };

    Ok(Grid {
        data,
        rows,
        columns,
    })
}

impl Grid {
    /// Get number of rows in the grid.
    #[inline]
    pub fn rows_len(&self) -> usize {
        self.rows
    }

    /// Get number of columns in the grid.
    #[inline]
    pub fn columns_len(&self) -> usize {
        self.columns
    }

    /// Access the specified row in the grid.
    #[inline]
    pub fn row(&self, row: usize) -> Option<&[char]> {
        if row >= self.rows {
            return None;
        }

        let start = row * self.columns;
        self.data.get(start..start + self.columns)
    }

    /// Iterate over rows in the grid.
    ///
    /// # Examples
    ///
    /// ```
    /// let grid = engine::build_grid("12\n.*")?;
    ///
    /// let rows = grid.rows().map(|row| row.iter().collect::<String>()).collect::<Vec<_>>();
    /// assert_eq!(rows, ["12", ".*"]);
    /// # Ok::<_, engine::SchematicError>(())
    /// ```
    #[inline]
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[char]> + '_ {
        self.data.chunks_exact(self.columns)
    }

    /// Get the element at the given row and column.
    #[inline]
    pub fn get(&self, row: usize, column: usize) -> Option<char> {
        if column >= self.columns {
            return None;
        }

        self.row(row)?.get(column).copied()
    }

    /// Iterate over the in-bounds cells of the Moore neighborhood around the
    /// given position as `(row, column)` pairs.
    ///
    /// # Examples
    ///
    /// ```
    /// let grid = engine::build_grid("...\n...\n...")?;
    ///
    /// assert_eq!(grid.neighbors(1, 1).count(), 8);
    /// assert!(grid.neighbors(0, 0).eq([(0, 1), (1, 0), (1, 1)]));
    /// # Ok::<_, engine::SchematicError>(())
    /// ```
    pub fn neighbors(&self, row: usize, column: usize) -> impl Iterator<Item = (usize, usize)> {
        let (rows, columns) = (self.rows, self.columns);

        NEIGHBORS.into_iter().filter_map(move |(dy, dx)| {
            let y = row.checked_add_signed(dy).filter(|&y| y < rows)?;
            let x = column.checked_add_signed(dx).filter(|&x| x < columns)?;
            Some((y, x))
        })
    }

    /// Iterate over the in-bounds cells surrounding the horizontal span
    /// `start..=end` on `row`, excluding the span itself.
    ///
    /// # Examples
    ///
    /// ```
    /// let grid = engine::build_grid(".....\n.123.\n.....")?;
    ///
    /// assert_eq!(grid.border(1, 1, 3).count(), 12);
    /// assert!(grid.border(1, 1, 3).all(|(y, x)| grid.get(y, x) == Some('.')));
    /// # Ok::<_, engine::SchematicError>(())
    /// ```
    pub fn border(
        &self,
        row: usize,
        start: usize,
        end: usize,
    ) -> impl Iterator<Item = (usize, usize)> {
        let rows = clip(row, self.rows);
        let columns = start.saturating_sub(1)..=end.saturating_add(1).min(self.columns.saturating_sub(1));

        rows.flat_map(move |y| columns.clone().map(move |x| (y, x)))
            .filter(move |&(y, x)| y != row || x < start || x > end)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for c in row {
                write!(f, "{c}")?;
            }

            writeln!(f)?;
        }

        Ok(())
    }
}

/// The inclusive range of indexes at most one step away from `n`, clipped to
/// `0..len`.
#[inline]
pub(crate) fn clip(n: usize, len: usize) -> RangeInclusive<usize> {
    n.saturating_sub(1)..=n.saturating_add(1).min(len.saturating_sub(1))
}

/// Split text into lines on `\n`, stripping a trailing `\r`.
struct Lines<'a> {
    rest: Option<&'a str>,
}

impl<'a> Lines<'a> {
    fn new(text: &'a str) -> Self {
        Self { rest: Some(text) }
    }
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a str;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.rest?;

        let line = match memchr::memchr(NL, rest.as_bytes()) {
            Some(n) => {
                self.rest = rest.get(n + 1..);
                rest.get(..n)?
            }
            None => {
                self.rest = None;
                rest
            }
        };

        Some(line.strip_suffix('\r').unwrap_or(line))
    }
}
