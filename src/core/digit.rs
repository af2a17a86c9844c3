//! Digit-string validation.

use std::fmt;

use crate::core::error::LcdError;

/// A single decimal digit, `0..=9`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Digit(u8);

impl Digit {
    /// Every digit in ascending order.
    pub const ALL: [Digit; 10] = [
        Digit(0),
        Digit(1),
        Digit(2),
        Digit(3),
        Digit(4),
        Digit(5),
        Digit(6),
        Digit(7),
        Digit(8),
        Digit(9),
    ];

    #[inline]
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '0'..='9' => Some(Self(c as u8 - b'0')),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validate the whole string up front and return its digits in order.
///
/// Fails on the first non-digit, reporting its character position, so a bad
/// character at the end never lets the leading digits through.
pub fn parse_digits(s: &str) -> Result<Vec<Digit>, LcdError> {
    if s.is_empty() {
        return Err(LcdError::EmptyInput);
    }
    s.chars()
        .enumerate()
        .map(|(index, ch)| Digit::from_char(ch).ok_or(LcdError::InvalidDigit { ch, index }))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_every_decimal_digit() {
        let digits = parse_digits("0123456789").unwrap();
        assert_eq!(digits, Digit::ALL);
    }

    #[test]
    fn rejects_letter() {
        let err = parse_digits("a").unwrap_err();
        assert!(matches!(err, LcdError::InvalidDigit { ch: 'a', index: 0 }));
    }

    #[test]
    fn rejects_minus_sign() {
        let err = parse_digits("-").unwrap_err();
        assert!(matches!(err, LcdError::InvalidDigit { ch: '-', index: 0 }));
    }

    #[test]
    fn reports_position_of_trailing_garbage() {
        let err = parse_digits("12345x").unwrap_err();
        assert!(matches!(err, LcdError::InvalidDigit { ch: 'x', index: 5 }));
    }

    #[test]
    fn counts_positions_in_chars_not_bytes() {
        let err = parse_digits("1é").unwrap_err();
        assert!(matches!(err, LcdError::InvalidDigit { ch: 'é', index: 1 }));
    }

    #[test]
    fn rejects_non_ascii_digits() {
        // Arabic-Indic three
        assert!(parse_digits("\u{0663}").is_err());
    }

    #[test]
    fn empty_string_is_an_error() {
        assert!(matches!(parse_digits(""), Err(LcdError::EmptyInput)));
    }
}
