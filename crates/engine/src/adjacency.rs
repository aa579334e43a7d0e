//! Adjacency queries between tokens and symbols.
//!
//! Both directions use the 8-connected neighborhood and only consult the
//! rows directly above, on, and below the queried item.


use arrayvec::ArrayVec;

use crate::symbol::{Symbol, Symbols};
use crate::token::{Token, TokenKey, Tokens};

/// Most distinct tokens which can border a single cell: two on each of the
/// three rows touched.
pub const MAX_ADJACENT: usize = 6;

/// Distinct tokens adjacent to a symbol.
pub type Adjacent<'a> = ArrayVec<&'a Token, MAX_ADJACENT>;

/// The rows one step away from `row`, without an upper bound.
#[inline]
fn rows_around(row: usize) -> impl Iterator<Item = usize> {
    row.saturating_sub(1)..=row.saturating_add(1)
}

/// Test if any symbol borders the given token.
pub fn touches_symbol(token: &Token, symbols: &Symbols) -> bool {
    let columns = token.start_col().saturating_sub(1)..=token.end_col().saturating_add(1);

    rows_around(token.row()).any(|y| !symbols.within(y, columns.clone()).is_empty())
}

/// Collect the distinct tokens covering at least one neighbor of the symbol.
pub fn adjacent_tokens<'a>(symbol: &Symbol, tokens: &'a Tokens) -> Adjacent<'a> {
    let columns = symbol.col().saturating_sub(1)..=symbol.col().saturating_add(1);

    let mut seen = ArrayVec::<TokenKey, MAX_ADJACENT>::new();
    let mut out = Adjacent::new();

    for y in rows_around(symbol.row()) {
        for token in tokens.overlapping(y, columns.clone()) {
            let key = token.key();

            if seen.contains(&key) {
                continue;
            }

            if seen.try_push(key).is_err() || out.try_push(token).is_err() {
                return out;
            }
        }
    }

    out
}
