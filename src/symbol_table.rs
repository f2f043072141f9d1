//! ASCII to seven-segment lookup for the shift-register display.
//!
//! Every pattern uses the `ABCDEFGP` layout: segment A is the most significant bit and
//! the decimal point is the least significant bit.
//!
//! ```text
//!  |-A-|
//!  F   B
//!  |-G-|   => 0bABCDEFGP
//!  E   C
//!  |-D-| P
//! ```

use crate::{Error, Result};

/// First ASCII code covered by [`SYMBOL_TABLE`] (space).
pub const FIRST_SYMBOL: u8 = 0x20;

/// Last ASCII code covered by [`SYMBOL_TABLE`] (delete).
pub const LAST_SYMBOL: u8 = 0x7F;

/// Number of entries in [`SYMBOL_TABLE`].
pub const SYMBOL_COUNT: usize = (LAST_SYMBOL - FIRST_SYMBOL + 1) as usize;

/// Single-segment masks in the `ABCDEFGP` layout.
pub struct Segments;

impl Segments {
    /// Top segment.
    pub const A: u8 = 0b_1000_0000;
    /// Upper right segment.
    pub const B: u8 = 0b_0100_0000;
    /// Lower right segment.
    pub const C: u8 = 0b_0010_0000;
    /// Bottom segment.
    pub const D: u8 = 0b_0001_0000;
    /// Lower left segment.
    pub const E: u8 = 0b_0000_1000;
    /// Upper left segment.
    pub const F: u8 = 0b_0000_0100;
    /// Middle segment.
    pub const G: u8 = 0b_0000_0010;
    /// Decimal point.
    pub const P: u8 = 0b_0000_0001;

    /// Every segment off.
    pub const BLANK: u8 = 0b_0000_0000;

    /// Every segment on, decimal point included.
    pub const ALL: u8 = 0b_1111_1111;

    /// Patterns for the digits 0-9. Same as the `'0'..='9'` entries of [`SYMBOL_TABLE`].
    pub const DIGITS: [u8; 10] = [
        0b_1111_1100, // Digit 0
        0b_0110_0000, // Digit 1
        0b_1101_1010, // Digit 2
        0b_1111_0010, // Digit 3
        0b_0110_0110, // Digit 4
        0b_1011_0110, // Digit 5
        0b_1011_1110, // Digit 6
        0b_1110_0000, // Digit 7
        0b_1111_1110, // Digit 8
        0b_1111_0110, // Digit 9
    ];
}

/// Maps the ASCII characters 0x20 through 0x7F to seven-segment patterns.
///
/// Entry `i` is the pattern for the character `0x20 + i`. Characters that have no
/// sensible rendering are blank.
pub static SYMBOL_TABLE: [u8; SYMBOL_COUNT] = [
    // Space and symbols (0x20-0x2F)
    0b_0000_0000, // space
    0b_0110_0001, // !
    0b_0100_0100, // "
    0b_0000_0000, // #
    0b_0000_0000, // $
    0b_0000_0000, // %
    0b_0000_0000, // &
    0b_0100_0000, // '
    0b_1001_1100, // (
    0b_1111_0000, // )
    0b_0000_0000, // *
    0b_0000_0000, // +
    0b_0000_0001, // ,
    0b_0000_0010, // -
    0b_0000_0001, // .
    0b_0100_1010, // /
    // Numbers (0x30-0x39)
    0b_1111_1100, // 0
    0b_0110_0000, // 1
    0b_1101_1010, // 2
    0b_1111_0010, // 3
    0b_0110_0110, // 4
    0b_1011_0110, // 5
    0b_1011_1110, // 6
    0b_1110_0000, // 7
    0b_1111_1110, // 8
    0b_1111_0110, // 9
    // Symbols (0x3A-0x40)
    0b_0000_0000, // :
    0b_0000_0000, // ;
    0b_0001_1010, // <
    0b_0001_0010, // =
    0b_0011_0010, // >
    0b_1100_1011, // ?
    0b_1111_1010, // @
    // Uppercase letters (0x41-0x5A)
    0b_1110_1110, // A
    0b_0011_1110, // B
    0b_1001_1100, // C
    0b_0111_1010, // D
    0b_1001_1110, // E
    0b_1000_1110, // F
    0b_1011_1100, // G
    0b_0110_1110, // H
    0b_0000_1100, // I
    0b_0111_1000, // J
    0b_0110_1110, // K
    0b_0001_1100, // L
    0b_1010_1010, // M
    0b_0010_1010, // N
    0b_1111_1100, // O
    0b_1100_1110, // P
    0b_1110_0110, // Q
    0b_0000_1010, // R
    0b_1011_0110, // S
    0b_0001_1110, // T
    0b_0111_1100, // U
    0b_0011_1000, // V
    0b_0101_0110, // W
    0b_0110_1110, // X
    0b_0111_0110, // Y
    0b_1101_1010, // Z
    // Symbols (0x5B-0x60)
    0b_1001_1100, // [
    0b_0010_0110, // backslash
    0b_1111_0000, // ]
    0b_1100_0100, // ^
    0b_0001_0000, // _
    0b_0000_0100, // `
    // Lowercase letters (0x61-0x7A)
    0b_1111_1010, // a
    0b_0011_1110, // b
    0b_0001_1010, // c
    0b_0111_1010, // d
    0b_1101_1110, // e
    0b_1000_1110, // f
    0b_1111_0110, // g
    0b_0010_1110, // h
    0b_0010_0000, // i
    0b_0111_0000, // j
    0b_0110_1110, // k
    0b_0000_1100, // l
    0b_1010_1010, // m
    0b_0010_1010, // n
    0b_0011_1010, // o
    0b_1100_1110, // p
    0b_1110_0110, // q
    0b_0000_1010, // r
    0b_1011_0110, // s
    0b_0001_1110, // t
    0b_0011_1000, // u
    0b_0011_1000, // v
    0b_0101_0110, // w
    0b_0110_1110, // x
    0b_0111_0110, // y
    0b_1101_1010, // z
    // Symbols and delete (0x7B-0x7F)
    0b_1001_1100, // {
    0b_0000_1100, // |
    0b_1111_0000, // }
    0b_1000_0000, // ~
    0b_0000_0000, // delete
];

/// Returns the pattern for an ASCII code, or `None` outside 0x20..=0x7F.
#[must_use]
pub fn symbol(code: u8) -> Option<u8> {
    let index = code.checked_sub(FIRST_SYMBOL)?;
    SYMBOL_TABLE.get(usize::from(index)).copied()
}

/// Returns the pattern for a character, or `None` if the table does not cover it.
#[must_use]
pub fn symbol_for_char(ch: char) -> Option<u8> {
    u8::try_from(ch).ok().and_then(symbol)
}

/// Returns the pattern for a character, substituting a blank digit for anything the
/// table does not cover.
#[must_use]
pub fn symbol_or_blank(ch: char) -> u8 {
    symbol_for_char(ch).unwrap_or(Segments::BLANK)
}

/// Returns the pattern for a character.
///
/// # Errors
///
/// Returns [`Error::UnsupportedCharacter`] if the character is outside 0x20..=0x7F.
pub fn try_symbol(ch: char) -> Result<u8> {
    symbol_for_char(ch).ok_or(Error::UnsupportedCharacter(ch))
}

/// Reports whether every bit of `segment` is lit in `pattern`.
#[must_use]
pub const fn has_segment(pattern: u8, segment: u8) -> bool {
    pattern & segment == segment
}
