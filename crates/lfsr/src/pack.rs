//! Byte-buffer to word-array packing.
//!
//! The engines work on `u64` words. Bit `j` of the logical sequence is
//! `(seq[j/8] >> (j%8)) & 1` (LSB-first within each byte) and lands at bit
//! `j % 64` of word `j / 64`: the first byte occupies the low-order bits of
//! the first word.

use alloc::{vec, vec::Vec};

/// Pack a byte buffer into `u64` words, LSB-first.
///
/// Returns `ceil(seq.len() / 8)` words. Pure; validation happens at the
/// entry point.
#[must_use]
pub fn pack_bits(seq: &[u8]) -> Vec<u64> {
  let mut words = vec![0u64; seq.len().div_ceil(8)];
  for (word, chunk) in words.iter_mut().zip(seq.chunks(8)) {
    for (k, &byte) in chunk.iter().enumerate() {
      *word |= u64::from(byte) << (8 * k);
    }
  }
  words
}
