//! ASCII character classes as predicates and single-byte parsers.

use crate::primitives::filter;
use crate::Parser;

/// Returns true for ASCII whitespace, including vertical tab.
pub fn is_space(c: u8) -> bool {
    matches!(c, b' ' | b'\t' | b'\n' | b'\x0b' | b'\x0c' | b'\r')
}

/// Returns true for ASCII decimal digits.
pub fn is_digit(c: u8) -> bool {
    c.is_ascii_digit()
}

/// Returns true for ASCII uppercase letters.
pub fn is_upper(c: u8) -> bool {
    c.is_ascii_uppercase()
}

/// Returns true for ASCII lowercase letters.
pub fn is_lower(c: u8) -> bool {
    c.is_ascii_lowercase()
}

/// Returns true for ASCII letters.
pub fn is_letter(c: u8) -> bool {
    is_upper(c) || is_lower(c)
}

/// Returns true for ASCII letters and digits.
pub fn is_latin(c: u8) -> bool {
    is_letter(c) || is_digit(c)
}

/// Matches a single ASCII whitespace byte.
pub fn space() -> Parser {
    filter(is_space, "space")
}

/// Matches a single ASCII digit.
pub fn digit() -> Parser {
    filter(is_digit, "digit")
}

/// Matches a single ASCII uppercase letter.
pub fn upper() -> Parser {
    filter(is_upper, "upper")
}

/// Matches a single ASCII lowercase letter.
pub fn lower() -> Parser {
    filter(is_lower, "lower")
}

/// Matches a single ASCII letter.
pub fn letter() -> Parser {
    filter(is_letter, "letter")
}

/// Matches a single ASCII letter or digit.
pub fn latin() -> Parser {
    filter(is_latin, "latin")
}

/// Matches a single printable ASCII byte, space included.
pub fn graphic() -> Parser {
    filter(|c| (0x20..=0x7e).contains(&c), "graphic")
}

/// Matches a single ASCII control byte.
pub fn control() -> Parser {
    filter(|c| c < 0x20 || c == 0x7f, "control")
}
