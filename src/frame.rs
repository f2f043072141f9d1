//! Frame - the segment patterns for every digit of the display.

use core::ops::{BitOrAssign, Index, IndexMut};

use crate::symbol_table::{Segments, symbol_or_blank};
use crate::{Error, Result};

/// Segment patterns for `N` digits, leftmost digit first.
///
/// Patterns use the `ABCDEFGP` layout of [`SYMBOL_TABLE`](crate::SYMBOL_TABLE).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Frame<const N: usize>([u8; N]);

impl<const N: usize> Frame<N> {
    #[must_use]
    pub const fn new(bits: [u8; N]) -> Self {
        Self(bits)
    }

    /// Every digit shows the same pattern.
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        Self([bits; N])
    }

    #[must_use]
    pub const fn blank() -> Self {
        Self::from_bits(Segments::BLANK)
    }

    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; N] {
        &self.0
    }

    pub fn iter(&self) -> core::slice::Iter<'_, u8> {
        self.0.iter()
    }

    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, u8> {
        self.0.iter_mut()
    }

    /// Reports whether every digit is dark.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.iter().all(|&bits| bits == Segments::BLANK)
    }

    /// One character per digit. Characters the table does not cover show blank.
    #[must_use]
    pub fn from_chars(text: [char; N]) -> Self {
        Self(text.map(symbol_or_blank))
    }

    /// Renders left-aligned text, padding with blank digits.
    ///
    /// A `'.'` that follows a character lights that digit's decimal point instead of
    /// taking a digit of its own, so `"12.5"` needs three digits.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TextTooLong`] if the text needs more than `N` digits.
    pub fn from_text(text: &str) -> Result<Self> {
        let mut frame = Self::blank();
        let mut used = 0_usize;
        // Whether the previous digit can still take a decimal point.
        let mut can_fold = false;
        for ch in text.chars() {
            if ch == '.' && can_fold {
                if let Some(last) = used.checked_sub(1).and_then(|index| frame.0.get_mut(index)) {
                    *last |= Segments::P;
                }
                can_fold = false;
                continue;
            }
            if let Some(bits) = frame.0.get_mut(used) {
                *bits = symbol_or_blank(ch);
            }
            used = used.saturating_add(1);
            can_fold = ch != '.';
        }
        if used > N {
            return Err(Error::TextTooLong(used, N));
        }
        Ok(frame)
    }

    /// Renders a right-aligned decimal number over `padding`.
    ///
    /// If the number has more digits than the display, the low digits are shown and
    /// every decimal point is lit to mark the overflow.
    #[expect(
        clippy::indexing_slicing,
        clippy::integer_division_remainder_used,
        reason = "The remainder is always below 10; modulo is required for digit extraction"
    )]
    #[must_use]
    pub fn from_number(mut number: u32, padding: u8) -> Self {
        let mut frame = Self::from_bits(padding);

        for bits in frame.iter_mut().rev() {
            *bits = Segments::DIGITS[(number % 10) as usize];
            number /= 10;
            if number == 0 {
                break;
            }
        }
        if number > 0 {
            frame |= Segments::P;
        }

        frame
    }
}

impl<const N: usize> Default for Frame<N> {
    fn default() -> Self {
        Self::blank()
    }
}

impl<const N: usize> BitOrAssign<u8> for Frame<N> {
    fn bitor_assign(&mut self, rhs: u8) {
        self.iter_mut().for_each(|bits| *bits |= rhs);
    }
}

impl<const N: usize> Index<usize> for Frame<N> {
    type Output = u8;

    #[expect(clippy::indexing_slicing, reason = "Caller's responsibility")]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<const N: usize> IndexMut<usize> for Frame<N> {
    #[expect(clippy::indexing_slicing, reason = "Caller's responsibility")]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}

impl<const N: usize> IntoIterator for Frame<N> {
    type Item = u8;
    type IntoIter = core::array::IntoIter<u8, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, const N: usize> IntoIterator for &'a Frame<N> {
    type Item = &'a u8;
    type IntoIter = core::slice::Iter<'a, u8>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
