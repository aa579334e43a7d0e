//! Symbols found in a grid.


use core::fmt;
use core::ops::{Deref, RangeInclusive};

use crate::cell;
use crate::error::LineCol;
use crate::grid::Grid;

/// A single cell which is neither a digit nor empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Symbol {
    row: usize,
    col: usize,
    character: char,
    is_gear: bool,
}

impl Symbol {
    pub(crate) fn new(row: usize, col: usize, character: char) -> Self {
        Self {
            row,
            col,
            character,
            is_gear: cell::is_gear(character),
        }
    }

    #[inline]
    pub fn row(&self) -> usize {
        self.row
    }

    #[inline]
    pub fn col(&self) -> usize {
        self.col
    }

    #[inline]
    pub fn character(&self) -> char {
        self.character
    }

    /// Test if the symbol is a gear (`*`).
    #[inline]
    pub fn is_gear(&self) -> bool {
        self.is_gear
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pos = LineCol::new(self.row, self.col);
        write!(f, "{:?} at {pos}", self.character)
    }
}

/// All symbols of a grid in row-major order, indexed by row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbols {
    symbols: Vec<Symbol>,
    offsets: Vec<usize>,
}

impl Symbols {
    /// Symbols on the given row, ordered by column.
    #[inline]
    pub fn row(&self, row: usize) -> &[Symbol] {
        let (Some(&start), Some(&end)) = (self.offsets.get(row), self.offsets.get(row + 1)) else {
            return &[];
        };

        self.symbols.get(start..end).unwrap_or_default()
    }

    /// Symbols on the given row within the given columns.
    pub fn within(&self, row: usize, columns: RangeInclusive<usize>) -> &[Symbol] {
        let symbols = self.row(row);
        let start = symbols.partition_point(|s| s.col < *columns.start());
        let end = symbols.partition_point(|s| s.col <= *columns.end());
        symbols.get(start..end).unwrap_or_default()
    }

    /// Iterate over gears.
    pub fn gears(&self) -> impl Iterator<Item = &Symbol> + '_ {
        self.symbols.iter().filter(|s| s.is_gear)
    }
}

impl Deref for Symbols {
    type Target = [Symbol];

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.symbols
    }
}

impl<'a> IntoIterator for &'a Symbols {
    type Item = &'a Symbol;
    type IntoIter = core::slice::Iter<'a, Symbol>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.symbols.iter()
    }
}

/// Extract every symbol from the grid.
///
/// # Examples
///
/// ```
/// let grid = engine::build_grid("467..\n..*.#")?;
/// let symbols = engine::extract_symbols(&grid);
///
/// let found = symbols.iter().map(|s| (s.row(), s.col(), s.character())).collect::<Vec<_>>();
/// assert_eq!(found, [(1, 2, '*'), (1, 4, '#')]);
/// assert_eq!(symbols.gears().count(), 1);
/// # Ok::<_, engine::SchematicError>(())
/// ```
pub fn extract_symbols(grid: &Grid) -> Symbols {
    let mut symbols = Vec::new();
    let mut offsets = Vec::with_capacity(grid.rows_len() + 1);

    for (y, row) in grid.rows().enumerate() {
        offsets.push(symbols.len());

        for (x, &c) in row.iter().enumerate() {
            if cell::is_symbol(c) {
                symbols.push(Symbol::new(y, x, c));
            }
        }
    }

    offsets.push(symbols.len());
    Symbols { symbols, offsets }
}
