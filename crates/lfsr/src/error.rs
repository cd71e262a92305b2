//! Error types.
//!
//! The only failure mode in this crate is a bit length that does not fit the
//! supplied buffer; every other code path is total arithmetic.

use core::fmt;

/// Requested bit length exceeds the bits available in the supplied buffer.
///
/// Returned by [`linear_complexity`](crate::linear_complexity) when
/// `bits > 8 * seq.len()`. Carries the offending values for diagnostics.
///
/// # Examples
///
/// ```
/// let err = lfsr::linear_complexity([0u8; 2], 17).unwrap_err();
/// assert_eq!(err.bits(), 17);
/// assert_eq!(err.available(), 16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InvalidLengthError {
  bits: usize,
  available: usize,
}

impl InvalidLengthError {
  #[inline]
  pub(crate) const fn new(bits: usize, available: usize) -> Self {
    Self { bits, available }
  }

  /// The requested bit length.
  #[inline]
  #[must_use]
  pub const fn bits(&self) -> usize {
    self.bits
  }

  /// The number of bits the supplied buffer actually holds.
  #[inline]
  #[must_use]
  pub const fn available(&self) -> usize {
    self.available
  }
}

impl fmt::Display for InvalidLengthError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "invalid bit length: requested {} bits, buffer holds {}", self.bits, self.available)
  }
}

impl core::error::Error for InvalidLengthError {}
