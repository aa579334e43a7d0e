use num::BigUint;

use super::{extract_tokens, Token};
use crate::grid::build_grid;

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

fn values(tokens: &[Token]) -> Vec<String> {
    tokens.iter().map(|t| t.value().to_string()).collect()
}

#[test]
fn test_sample_tokens() {
    let grid = build_grid(SAMPLE).unwrap();
    let tokens = extract_tokens(&grid);

    assert_eq!(
        values(&tokens),
        ["467", "114", "35", "633", "617", "58", "592", "755", "664", "598"]
    );

    assert_eq!(tokens.rows_len(), 10);
    assert_eq!(tokens[0], Token::new(467, 0, 0, 2));
    assert_eq!(tokens[3], Token::new(633, 2, 6, 8));
    assert_eq!(tokens[9], Token::new(598, 9, 5, 7));
    assert!(tokens.row(1).is_empty());
    assert!(tokens.row(10).is_empty());
}

#[test]
fn test_idempotent() {
    let grid = build_grid(SAMPLE).unwrap();
    assert_eq!(extract_tokens(&grid), extract_tokens(&grid));
}

#[test]
fn test_full_row_and_empty_row() {
    let grid = build_grid("12345\n.....\n#*$%&").unwrap();
    let tokens = extract_tokens(&grid);

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0], Token::new(12345, 0, 0, 4));
    assert_eq!(tokens[0].width(), 5);
}

#[test]
fn test_no_wrap_across_rows() {
    let grid = build_grid("..12\n34..").unwrap();
    let tokens = extract_tokens(&grid);

    assert_eq!(values(&tokens), ["12", "34"]);
    assert_eq!(tokens.row(0), &[Token::new(12, 0, 2, 3)][..]);
    assert_eq!(tokens.row(1), &[Token::new(34, 1, 0, 1)][..]);
}

#[test]
fn test_leading_zeros() {
    let grid = build_grid("007.0").unwrap();
    let tokens = extract_tokens(&grid);

    assert_eq!(values(&tokens), ["7", "0"]);
    assert_eq!(tokens[0].width(), 3);
}

#[test]
fn test_arbitrarily_long_run() {
    let digits = "98765432109876543210987654321098765432109876543210";
    let grid = build_grid(&format!(".{digits}*")).unwrap();
    let tokens = extract_tokens(&grid);

    assert_eq!(tokens.len(), 1);
    assert_eq!(
        tokens[0].value(),
        &BigUint::parse_bytes(digits.as_bytes(), 10).unwrap()
    );
    assert_eq!(tokens[0].columns(), 1..=50);
}

#[test]
fn test_non_overlap_and_maximality() {
    let grid = build_grid(SAMPLE).unwrap();
    let tokens = extract_tokens(&grid);

    for y in 0..grid.rows_len() {
        let row = tokens.row(y);

        for pair in row.windows(2) {
            assert!(pair[0].end_col() + 1 < pair[1].start_col());
        }

        for t in row {
            if let Some(x) = t.start_col().checked_sub(1) {
                assert!(!grid.get(y, x).unwrap().is_ascii_digit());
            }

            if let Some(c) = grid.get(y, t.end_col() + 1) {
                assert!(!c.is_ascii_digit());
            }
        }
    }
}

#[test]
fn test_overlapping() {
    let grid = build_grid("1.22.333.4").unwrap();
    let tokens = extract_tokens(&grid);

    assert_eq!(values(tokens.overlapping(0, 0..=0)), ["1"]);
    assert_eq!(values(tokens.overlapping(0, 1..=1)), Vec::<String>::new());
    assert_eq!(values(tokens.overlapping(0, 1..=3)), ["22"]);
    assert_eq!(values(tokens.overlapping(0, 3..=5)), ["22", "333"]);
    assert_eq!(values(tokens.overlapping(0, 0..=9)), ["1", "22", "333", "4"]);
    assert!(tokens.overlapping(1, 0..=9).is_empty());
}

#[test]
fn test_key_identity() {
    let a = Token::new(5, 1, 2, 2);
    let b = Token::new(5, 1, 4, 4);
    assert_ne!(a.key(), b.key());
    assert_eq!(a.key(), a.clone().key());
}

#[test]
fn test_display_is_one_based() {
    let grid = build_grid("....\n.42.").unwrap();
    let tokens = extract_tokens(&grid);

    assert_eq!(tokens[0].to_string(), "42 at 2:2-3");
}
