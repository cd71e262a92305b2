//! Linear complexity of binary sequences via the Berlekamp-Massey algorithm.
//!
//! The linear complexity of a finite bit sequence is the length of the
//! shortest linear-feedback shift register (LFSR) that generates it.
//! Randomness-testing pipelines use it as a primitive: a sequence whose
//! complexity is unexpectedly low has linear structure a good generator must
//! not exhibit.
//!
//! # Algorithm
//!
//! Berlekamp-Massey iteratively maintains two shortest LFSRs for prefixes of
//! the input and extends them bit by bit via a discrepancy check. This crate
//! never materializes the connection polynomials; it tracks their truncated
//! products with the sequence instead, which lets the hot path batch 64 bits
//! per step through a carry-less multiply (PCLMULQDQ on x86_64, PMULL on
//! aarch64). Without a hardware multiply, a portable bit-serial engine
//! computes the identical result. Complexity is O(n^2) word operations
//! either way; the batching is a constant-factor speedup.
//!
//! # Hardware Acceleration
//!
//! | Target | Feature | Kernel |
//! |--------|---------|--------|
//! | x86_64 | PCLMULQDQ | `x86_64/pclmul` |
//! | aarch64 | PMULL (AES) | `aarch64/pmull` |
//! | anything else | — | `portable/bitserial` |
//!
//! Selection happens once per process via the `platform` crate; the two
//! paths agree bit-for-bit on every input and are differentially tested.
//!
//! # Example
//!
//! ```
//! // 356 = 0b101100100: the 9-bit sequence 0,0,1,0,0,1,1,0,1.
//! let l = lfsr::linear_complexity(356u64.to_le_bytes(), 9)?;
//! assert_eq!(l, 4);
//!
//! // An all-zero sequence has complexity 0.
//! assert_eq!(lfsr::linear_complexity([0u8; 16], 128)?, 0);
//! # Ok::<(), lfsr::InvalidLengthError>(())
//! ```
//!
//! # Concurrency
//!
//! Every call owns all of its working state, so concurrent invocations on
//! independent inputs need no synchronization.

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod block;
mod clmul;
mod distribution;
mod error;
mod pack;
mod scalar;

pub use distribution::{lfsr_count, lfsr_log_probability};
pub use error::InvalidLengthError;

#[doc(hidden)]
pub mod __internal {
  //! Hooks for integration tests, benches, and fuzz targets. Not public API.
  pub use crate::{
    block::lfsr_length_blocks, clmul::clmul_soft, pack::pack_bits, scalar::lfsr_length_bitserial,
  };
}

/// Compute the linear complexity of the first `bits` bits of `seq`.
///
/// Bit `j` of the sequence is `(seq[j/8] >> (j%8)) & 1` (LSB-first within
/// each byte). Accepts any contiguous byte buffer, owned or borrowed, with an
/// identical contract either way.
///
/// Returns the length `L` of the shortest LFSR generating the sequence, with
/// `0 <= L <= bits`.
///
/// # Errors
///
/// Returns [`InvalidLengthError`] when `bits` exceeds `8 * seq.len()`; no
/// partial or default value is ever produced.
///
/// # Example
///
/// ```
/// let l = lfsr::linear_complexity(482676245u64.to_le_bytes(), 34)?;
/// assert_eq!(l, 18);
/// # Ok::<(), lfsr::InvalidLengthError>(())
/// ```
pub fn linear_complexity(seq: impl AsRef<[u8]>, bits: usize) -> Result<usize, InvalidLengthError> {
  let seq = seq.as_ref();
  let available = seq.len().saturating_mul(8);
  if bits > available {
    return Err(InvalidLengthError::new(bits, available));
  }

  let words = pack::pack_bits(seq);
  match clmul::select() {
    Some((clmul, _)) => Ok(block::lfsr_length_blocks(&words, bits, clmul)),
    None => Ok(scalar::lfsr_length_bitserial(&words, bits)),
  }
}

/// Name of the kernel [`linear_complexity`] will dispatch to on this machine.
///
/// One of `"x86_64/pclmul"`, `"aarch64/pmull"`, or `"portable/bitserial"`.
/// Intended for introspection and bench banners.
#[must_use]
pub fn selected_backend() -> &'static str {
  match clmul::select() {
    Some((_, name)) => name,
    None => clmul::PORTABLE,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn accepts_owned_and_borrowed_buffers() {
    let owned = alloc::vec![0x64u8, 0x01];
    let borrowed: &[u8] = &[0x64, 0x01];
    assert_eq!(linear_complexity(&owned, 9), linear_complexity(borrowed, 9));
    assert_eq!(linear_complexity(owned, 9).unwrap(), 4);
  }

  #[test]
  fn rejects_oversized_bit_length() {
    let err = linear_complexity([0u8; 4], 33).unwrap_err();
    assert_eq!(err.bits(), 33);
    assert_eq!(err.available(), 32);
    assert!(linear_complexity([0u8; 0], 1).is_err());
  }

  #[test]
  fn backend_name_is_known() {
    let name = selected_backend();
    assert!(
      name == "x86_64/pclmul" || name == "aarch64/pmull" || name == "portable/bitserial",
      "unexpected backend {name}"
    );
  }
}
