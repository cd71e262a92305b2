//! Block-batched Berlekamp-Massey engine.
//!
//! The classical algorithm keeps two connection polynomials `poly_b` and
//! `poly_c` (shortest LFSRs for prefixes of the input) and extends them by
//! computing a discrepancy per bit. The discrepancy is the next coefficient
//! of the product `seq * poly_c`, so this engine never materializes the
//! polynomials themselves: it tracks the truncated products `sb = seq *
//! poly_b` and `sc = seq * poly_c` and updates those instead.
//!
//! The main loop works in steps of 64 bits. Each block accumulates four
//! word-sized transition operators `a`, `b`, `c`, `d` such that the state
//! after the block is
//!
//! ```text
//! sb' = a * sb + b * sc
//! sc' = c * sb + d * sc
//! ```
//!
//! applied to the full arrays with one carry-less multiply per word and
//! operator. The speedup over the bit-serial engine is a constant factor;
//! the complexity stays O(n^2).

// Kernel module: all indexing is over equal-length vectors sized from the
// input, with loop bounds derived from that same length (`size` starts at
// the word count and only decreases).
#![allow(clippy::indexing_slicing)]

use alloc::{vec, vec::Vec};
use core::mem;

use crate::clmul::ClmulFn;

/// Length of the shortest LFSR generating the first `bits` bits of `seq`,
/// batching 64 bits per step through `clmul`.
///
/// `seq` is the packed sequence from [`crate::pack::pack_bits`]; the caller
/// guarantees `bits <= 64 * seq.len()`. Observably equivalent to
/// [`crate::scalar::lfsr_length_bitserial`] on every input.
#[must_use]
pub fn lfsr_length_blocks(seq: &[u64], bits: usize, clmul: ClmulFn) -> usize {
  let mut sb: Vec<u64> = seq.to_vec();
  let mut sc: Vec<u64> = seq.to_vec();
  let mut tb: Vec<u64> = vec![0; seq.len()];
  let mut tc: Vec<u64> = vec![0; seq.len()];

  let mut lfsr_len: usize = 0;
  let full = bits - (bits % 64);
  // Effective length: the low word is fully consumed by each block.
  let mut size = seq.len();

  let mut j = 0;
  while j < full {
    let mut sb0 = sb[0];
    let mut sc0 = sc[0];
    // Identity transform.
    let mut a: u64 = 1;
    let mut b: u64 = 0;
    let mut c: u64 = 0;
    let mut d: u64 = 1;
    let mut carry_a: u64 = 0;
    let mut carry_c: u64 = 0;

    for i in 0..64 {
      let disc = sc0 & 1;
      sc0 >>= 1;
      carry_a = a >> 63;
      carry_c = 0;
      a <<= 1;
      b <<= 1;
      if disc == 1 {
        if 2 * lfsr_len <= i + j {
          lfsr_len = (i + j) + 1 - lfsr_len;
          mem::swap(&mut sb0, &mut sc0);
          mem::swap(&mut a, &mut c);
          mem::swap(&mut b, &mut d);
          mem::swap(&mut carry_a, &mut carry_c);
        }
        sc0 ^= sb0;
        c ^= a;
        carry_c ^= carry_a;
        d ^= b;
      }
    }

    // carry_a / carry_c hold bit 64 of the a / c operators; that term of the
    // products below is a plain copy of sb.
    if carry_a != 0 {
      tb.copy_from_slice(&sb);
    } else {
      tb.fill(0);
    }
    if carry_c != 0 {
      tc.copy_from_slice(&sb);
    } else {
      tc.fill(0);
    }
    tb[0] = sb0;
    tc[0] = sc0;

    // Apply the block transform to the whole arrays, propagating the hi/lo
    // halves of each product into adjacent words.
    for i in 1..size {
      let sbi = sb[i];
      let sci = sc[i];

      let (hi, lo) = clmul(a, sbi);
      tb[i - 1] ^= lo;
      tb[i] ^= hi;
      let (hi, lo) = clmul(b, sci);
      tb[i - 1] ^= lo;
      tb[i] ^= hi;

      let (hi, lo) = clmul(c, sbi);
      tc[i - 1] ^= lo;
      tc[i] ^= hi;
      let (hi, lo) = clmul(d, sci);
      tc[i - 1] ^= lo;
      tc[i] ^= hi;
    }

    mem::swap(&mut sb, &mut tb);
    mem::swap(&mut sc, &mut tc);
    size -= 1;
    j += 64;
  }

  // Tail: the remaining bits % 64 bits fit in the low words, so no operator
  // batching is needed.
  let mut sb0 = sb.first().copied().unwrap_or(0);
  let mut sc0 = sc.first().copied().unwrap_or(0);
  for i in full..bits {
    let disc = sc0 & 1;
    sc0 >>= 1;
    if disc == 1 {
      if 2 * lfsr_len <= i {
        lfsr_len = i + 1 - lfsr_len;
        mem::swap(&mut sb0, &mut sc0);
      }
      sc0 ^= sb0;
    }
  }

  lfsr_len
}
