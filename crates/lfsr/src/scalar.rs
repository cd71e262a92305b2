//! Bit-serial Berlekamp-Massey engine (fallback / reference).
//!
//! Processes exactly one bit per iteration, maintaining the truncated
//! products `sb` and `sc` as word arrays. Strictly slower than the block
//! engine but has no hardware requirements, which makes it both the fallback
//! path and the correctness oracle for differential testing.

// Kernel module: all indexing is over equal-length vectors sized from the
// input, with loop bounds derived from that same length.
#![allow(clippy::indexing_slicing)]

use alloc::vec::Vec;
use core::mem;

/// Length of the shortest LFSR generating the first `bits` bits of `seq`.
///
/// `seq` is the packed sequence from [`crate::pack::pack_bits`]; the caller
/// guarantees `bits <= 64 * seq.len()`.
#[must_use]
pub fn lfsr_length_bitserial(seq: &[u64], bits: usize) -> usize {
  if bits == 0 || seq.is_empty() {
    return 0;
  }

  let mut sb: Vec<u64> = seq.to_vec();
  let mut sc: Vec<u64> = seq.to_vec();
  let mut lfsr_len: usize = 0;
  let last = seq.len() - 1;

  for i in 0..bits {
    let disc = sc[0] & 1;

    // Shift sc right one bit, carrying across word boundaries.
    for j in 0..last {
      sc[j] = (sc[j] >> 1) | (sc[j + 1] << 63);
    }
    sc[last] >>= 1;

    if disc == 1 {
      if 2 * lfsr_len <= i {
        lfsr_len = i + 1 - lfsr_len;
        mem::swap(&mut sb, &mut sc);
      }
      for (c, b) in sc.iter_mut().zip(&sb) {
        *c ^= *b;
      }
    }
  }

  lfsr_len
}
