//! Analysis of engine schematics.
//!
//! A schematic is a rectangular grid of characters where runs of digits form
//! numeric tokens and every other non-`.` character is a symbol. Tokens
//! bordering a symbol are part numbers, and a `*` bordering exactly two
//! tokens is a gear whose ratio is their product.
//!
//! ```
//! use engine::prelude::BigUint;
//!
//! let grid = engine::build_grid("\
//! 467..114..
//! ...*......
//! ..35..633.
//! ......#...
//! 617*......
//! .....+.58.
//! ..592.....
//! ......755.
//! ...$.*....
//! .664.598..
//! ")?;
//!
//! let tokens = engine::extract_tokens(&grid);
//! let symbols = engine::extract_symbols(&grid);
//!
//! assert_eq!(engine::sum_adjacent_part_numbers(&tokens, &symbols), BigUint::from(4361u32));
//! assert_eq!(engine::sum_gear_ratios(&tokens, &symbols), BigUint::from(467835u32));
//! # Ok::<_, engine::SchematicError>(())
//! ```

pub mod adjacency;
pub mod aggregate;
mod analyze;
pub mod cell;
pub mod cli;
mod error;
pub mod grid;
pub mod source;
pub mod symbol;
pub mod token;

pub use self::aggregate::{sum_adjacent_part_numbers, sum_gear_ratios, GearRatio};
pub use self::analyze::{analyze, index, summarize, Analysis};
pub use self::error::{LineCol, SchematicError};
pub use self::grid::{build_grid, Grid};
pub use self::source::SourceError;
pub use self::symbol::{extract_symbols, Symbol, Symbols};
pub use self::token::{extract_tokens, Token, TokenKey, Tokens};

pub mod prelude {
    //! Helper prelude with useful imports.
    pub use crate::{
        analyze, build_grid, extract_symbols, extract_tokens, index, sum_adjacent_part_numbers,
        sum_gear_ratios, summarize,
    };
    pub use anyhow::{anyhow, bail, Context, Result};
    pub use num::BigUint;
}
