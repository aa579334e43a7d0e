//! Classification of single grid cells.

/// The character marking an empty cell.
pub const EMPTY: char = '.';

/// The character marking a gear.
pub const GEAR: char = '*';

/// Test if the cell holds a decimal digit.
#[inline]
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Test if the cell is the empty marker.
#[inline]
pub fn is_empty_marker(c: char) -> bool {
    c == EMPTY
}

/// Any cell which is neither a digit nor empty.
#[inline]
pub fn is_symbol(c: char) -> bool {
    !is_digit(c) && !is_empty_marker(c)
}

#[inline]
pub fn is_gear(c: char) -> bool {
    c == GEAR
}

/// Decimal value of a digit cell.
#[inline]
pub fn digit_value(c: char) -> Option<u32> {
    if !is_digit(c) {
        return None;
    }

    c.to_digit(10)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification() {
        for c in '0'..='9' {
            assert!(is_digit(c));
            assert!(!is_symbol(c));
        }

        assert!(is_empty_marker('.'));
        assert!(!is_symbol('.'));

        for c in ['*', '#', '+', '$', '/', '=', '%', '@', '&', '-', ' ', 'a', 'é'] {
            assert!(is_symbol(c), "{c:?} should be a symbol");
        }

        assert!(is_gear('*'));
        assert!(!is_gear('#'));
    }

    #[test]
    fn test_non_ascii_digits_are_symbols() {
        // Arabic-Indic digit five.
        assert!(!is_digit('\u{0665}'));
        assert!(is_symbol('\u{0665}'));
        assert_eq!(digit_value('\u{0665}'), None);
        assert_eq!(digit_value('7'), Some(7));
    }
}
