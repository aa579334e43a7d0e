use core::fmt;

use num::BigUint;
use serde::{Serialize, Serializer};

use crate::aggregate::{sum_adjacent_part_numbers, sum_gear_ratios};
use crate::grid::Grid;
use crate::symbol::{extract_symbols, Symbols};
use crate::token::{extract_tokens, Tokens};

/// The answers for a single schematic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
    /// Sum of all part numbers.
    #[serde(serialize_with = "display")]
    pub part_numbers: BigUint,
    /// Sum of all gear ratios.
    #[serde(serialize_with = "display")]
    pub gear_ratios: BigUint,
    /// Number of tokens found.
    pub tokens: usize,
    /// Number of symbols found.
    pub symbols: usize,
    /// Number of gears found, regardless of how many tokens they touch.
    pub gears: usize,
}

/// Run the full analysis over a grid.
///
/// Tokens and symbols are extracted concurrently, followed by both
/// aggregations running concurrently.
///
/// # Examples
///
/// ```
/// use engine::prelude::BigUint;
///
/// let grid = engine::build_grid("467..114..\n...*......\n..35..633.")?;
/// let analysis = engine::analyze(&grid);
///
/// assert_eq!(analysis.part_numbers, BigUint::from(502u32));
/// assert_eq!(analysis.gear_ratios, BigUint::from(16345u32));
/// assert_eq!(analysis.tokens, 4);
/// # Ok::<_, engine::SchematicError>(())
/// ```
pub fn analyze(grid: &Grid) -> Analysis {
    let (tokens, symbols) = index(grid);
    summarize(&tokens, &symbols)
}

/// Extract tokens and symbols from the grid concurrently.
pub fn index(grid: &Grid) -> (Tokens, Symbols) {
    rayon::join(|| extract_tokens(grid), || extract_symbols(grid))
}

/// Compute both sums over already extracted tokens and symbols
/// concurrently.
pub fn summarize(tokens: &Tokens, symbols: &Symbols) -> Analysis {
    let (part_numbers, gear_ratios) = rayon::join(
        || sum_adjacent_part_numbers(tokens, symbols),
        || sum_gear_ratios(tokens, symbols),
    );

    Analysis {
        part_numbers,
        gear_ratios,
        tokens: tokens.len(),
        symbols: symbols.len(),
        gears: symbols.gears().count(),
    }
}

/// Serialize a value through its `Display` implementation.
pub(crate) fn display<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: fmt::Display,
    S: Serializer,
{
    serializer.collect_str(value)
}

#[cfg(test)]
mod tests {
    use num::BigUint;

    use rayon::prelude::*;

    use super::{analyze, index, summarize};
    use crate::aggregate::{sum_adjacent_part_numbers, sum_gear_ratios};
    use crate::grid::build_grid;
    use crate::symbol::extract_symbols;
    use crate::token::extract_tokens;

    const SAMPLE: &str = "\
467..114..
...*......
..35..633.
......#...
617*......
.....+.58.
..592.....
......755.
...$.*....
.664.598..
";

    #[test]
    fn test_matches_sequential() {
        let grid = build_grid(SAMPLE).unwrap();
        let analysis = analyze(&grid);

        let tokens = extract_tokens(&grid);
        let symbols = extract_symbols(&grid);

        assert_eq!(
            analysis.part_numbers,
            sum_adjacent_part_numbers(&tokens, &symbols)
        );
        assert_eq!(analysis.gear_ratios, sum_gear_ratios(&tokens, &symbols));
        assert_eq!(analysis.part_numbers, BigUint::from(4361u32));
        assert_eq!(analysis.gear_ratios, BigUint::from(467835u32));
        assert_eq!(analysis.tokens, 10);
        assert_eq!(analysis.symbols, 6);
        assert_eq!(analysis.gears, 3);
    }

    #[test]
    fn test_serialize() {
        let grid = build_grid(SAMPLE).unwrap();
        let value = serde_json::to_value(analyze(&grid)).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "part_numbers": "4361",
                "gear_ratios": "467835",
                "tokens": 10,
                "symbols": 6,
                "gears": 3,
            })
        );
    }

    #[test]
    fn test_index_then_summarize() {
        let grid = build_grid(SAMPLE).unwrap();
        let (tokens, symbols) = index(&grid);

        assert_eq!(tokens, extract_tokens(&grid));
        assert_eq!(symbols, extract_symbols(&grid));
        assert_eq!(summarize(&tokens, &symbols), analyze(&grid));
    }

    #[test]
    fn test_nested_in_thread_pool() {
        let grids = (1..=16)
            .map(|n| build_grid(&format!("{n}*{n}")).unwrap())
            .collect::<Vec<_>>();

        let gears = grids
            .par_iter()
            .map(|grid| analyze(grid).gear_ratios)
            .collect::<Vec<_>>();

        let expected = (1..=16u32).map(|n| BigUint::from(n * n)).collect::<Vec<_>>();
        assert_eq!(gears, expected);
    }
}
