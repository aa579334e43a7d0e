//! Sums over part numbers and gear ratios.

#[cfg(test)]
mod tests;

use num::BigUint;

use crate::adjacency::{adjacent_tokens, touches_symbol};
use crate::symbol::{Symbol, Symbols};
use crate::token::{Token, Tokens};

/// A gear together with the two part numbers it connects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GearRatio<'a> {
    gear: &'a Symbol,
    parts: [&'a Token; 2],
    ratio: BigUint,
}

impl<'a> GearRatio<'a> {
    #[inline]
    pub fn gear(&self) -> &'a Symbol {
        self.gear
    }

    /// The two adjacent tokens in reading order.
    #[inline]
    pub fn parts(&self) -> [&'a Token; 2] {
        self.parts
    }

    /// Product of the two part numbers.
    #[inline]
    pub fn ratio(&self) -> &BigUint {
        &self.ratio
    }

    #[inline]
    pub fn into_ratio(self) -> BigUint {
        self.ratio
    }
}

/// Iterate over tokens bordering at least one symbol.
pub fn part_numbers<'a>(
    tokens: &'a Tokens,
    symbols: &'a Symbols,
) -> impl Iterator<Item = &'a Token> + 'a {
    tokens.iter().filter(move |t| touches_symbol(t, symbols))
}

/// Iterate over gears bordering exactly two distinct tokens.
///
/// Gears with fewer or more adjacent tokens are skipped.
pub fn gear_ratios<'a>(
    tokens: &'a Tokens,
    symbols: &'a Symbols,
) -> impl Iterator<Item = GearRatio<'a>> + 'a {
    symbols.gears().filter_map(move |gear| {
        let adjacent = adjacent_tokens(gear, tokens);

        let &[a, b] = adjacent.as_slice() else {
            return None;
        };

        Some(GearRatio {
            gear,
            parts: [a, b],
            ratio: a.value() * b.value(),
        })
    })
}

/// Sum of every token bordering a symbol.
///
/// # Examples
///
/// ```
/// use engine::prelude::BigUint;
///
/// let grid = engine::build_grid("467..114..\n...*......\n..35..633.")?;
/// let tokens = engine::extract_tokens(&grid);
/// let symbols = engine::extract_symbols(&grid);
///
/// assert_eq!(engine::sum_adjacent_part_numbers(&tokens, &symbols), BigUint::from(502u32));
/// # Ok::<_, engine::SchematicError>(())
/// ```
pub fn sum_adjacent_part_numbers(tokens: &Tokens, symbols: &Symbols) -> BigUint {
    part_numbers(tokens, symbols).map(Token::value).sum()
}

/// Sum of the gear ratios of every gear bordering exactly two tokens.
///
/// # Examples
///
/// ```
/// use engine::prelude::BigUint;
///
/// let grid = engine::build_grid("467..114..\n...*......\n..35..633.")?;
/// let tokens = engine::extract_tokens(&grid);
/// let symbols = engine::extract_symbols(&grid);
///
/// assert_eq!(engine::sum_gear_ratios(&tokens, &symbols), BigUint::from(16345u32));
/// # Ok::<_, engine::SchematicError>(())
/// ```
pub fn sum_gear_ratios(tokens: &Tokens, symbols: &Symbols) -> BigUint {
    gear_ratios(tokens, symbols)
        .map(GearRatio::into_ratio)
        .sum()
}
