use num::BigUint;

use super::{gear_ratios, part_numbers, sum_adjacent_part_numbers, sum_gear_ratios};
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

fn sums(text: &str) -> (BigUint, BigUint) {
    let grid = build_grid(text).unwrap();
    let tokens = extract_tokens(&grid);
    let symbols = extract_symbols(&grid);

    (
        sum_adjacent_part_numbers(&tokens, &symbols),
        sum_gear_ratios(&tokens, &symbols),
    )
}

fn big(n: u64) -> BigUint {
    BigUint::from(n)
}

#[test]
fn test_sample() {
    assert_eq!(sums(SAMPLE), (big(4361), big(467835)));
}

#[test]
fn test_sample_itemized() {
    let grid = build_grid(SAMPLE).unwrap();
    let tokens = extract_tokens(&grid);
    let symbols = extract_symbols(&grid);

    assert_eq!(part_numbers(&tokens, &symbols).count(), 8);

    let ratios = gear_ratios(&tokens, &symbols)
        .map(|g| {
            let [a, b] = g.parts();
            (
                (g.gear().row(), g.gear().col()),
                a.value().to_string(),
                b.value().to_string(),
                g.ratio().clone(),
            )
        })
        .collect::<Vec<_>>();

    assert_eq!(
        ratios,
        [
            ((1, 3), "467".to_owned(), "35".to_owned(), big(16345)),
            ((8, 5), "755".to_owned(), "598".to_owned(), big(451490)),
        ]
    );
}

#[test]
fn test_no_symbols() {
    assert_eq!(sums("467..114..\n..35..633.\n"), (big(0), big(0)));
}

#[test]
fn test_single_gear_cell() {
    assert_eq!(sums("*"), (big(0), big(0)));
}

#[test]
fn test_gear_with_three_numbers() {
    // The gear touches 1, 2 and 3 so it contributes nothing, but all three
    // are still part numbers.
    assert_eq!(sums("1.2\n.*.\n.3."), (big(6), big(0)));
}

#[test]
fn test_gear_with_one_number() {
    assert_eq!(sums("12*.."), (big(12), big(0)));
}

#[test]
fn test_other_symbols_are_not_gears() {
    assert_eq!(sums("12#34"), (big(46), big(0)));
    assert_eq!(sums("12*34"), (big(46), big(408)));
}

#[test]
fn test_shared_part_number() {
    // `5` borders both gears and counts once as a part number.
    assert_eq!(sums("2*5*3"), (big(10), big(25)));
}

#[test]
fn test_long_numbers_do_not_overflow() {
    let a = "99999999999999999999999999999";
    let text = format!("{a}*{a}");
    let expected = BigUint::parse_bytes(a.as_bytes(), 10).unwrap();

    let (parts, gears) = sums(&text);
    assert_eq!(parts, &expected + &expected);
    assert_eq!(gears, &expected * &expected);
}

#[test]
fn test_order_independent() {
    let grid = build_grid(SAMPLE).unwrap();
    let tokens = extract_tokens(&grid);
    let symbols = extract_symbols(&grid);

    let reversed = part_numbers(&tokens, &symbols)
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .map(|t| t.value())
        .sum::<BigUint>();

    assert_eq!(reversed, sum_adjacent_part_numbers(&tokens, &symbols));
}
