//! Differential tests: the block engine, the scalar engine, and a textbook
//! reference implementation must agree on every input. Any divergence is a
//! correctness defect, not an acceptable approximation.

use lfsr::__internal::{clmul_soft, lfsr_length_bitserial, lfsr_length_blocks, pack_bits};
use lfsr::linear_complexity;

/// Deterministic pseudo-random bytes (xorshift).
fn gen_bytes(len: usize, seed: u64) -> Vec<u8> {
  let mut out = vec![0u8; len];
  let mut x = seed | 1;
  for b in &mut out {
    x ^= x << 13;
    x ^= x >> 7;
    x ^= x << 17;
    *b = (x as u8).wrapping_add((x >> 8) as u8);
  }
  out
}

/// Textbook Berlekamp-Massey over byte arrays, one bit per iteration.
///
/// Deliberately shares no code with the engines under test; this is the
/// third, independent oracle.
fn lfsr_length_reference(seq: &[u8], bits: usize) -> usize {
  if bits == 0 || seq.is_empty() {
    return 0;
  }
  let mut sb = seq.to_vec();
  let mut sc = seq.to_vec();
  let mut l = 0usize;
  let last = seq.len() - 1;

  for i in 0..bits {
    let disc = sc[0] & 1;
    for j in 0..last {
      sc[j] = (sc[j] >> 1) | (sc[j + 1] << 7);
    }
    sc[last] >>= 1;
    if disc == 1 {
      if 2 * l <= i {
        l = i + 1 - l;
        std::mem::swap(&mut sb, &mut sc);
      }
      for (c, b) in sc.iter_mut().zip(&sb) {
        *c ^= *b;
      }
    }
  }
  l
}

fn assert_all_agree(seq: &[u8], bits: usize) {
  let words = pack_bits(seq);
  let serial = lfsr_length_bitserial(&words, bits);
  let blocks = lfsr_length_blocks(&words, bits, clmul_soft);
  assert_eq!(serial, blocks, "scalar vs block: len={} bits={bits}", seq.len());

  let public = linear_complexity(seq, bits).unwrap();
  assert_eq!(serial, public, "scalar vs dispatch: len={} bits={bits}", seq.len());
}

// ─────────────────────────────────────────────────────────────────────────────
// Randomized agreement
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn engines_agree_on_random_data() {
  for len in 1..=96usize {
    let seq = gen_bytes(len, 0x0123_4567_89AB_CDEF ^ ((len as u64) << 17));
    let bits = len * 8;
    assert_all_agree(&seq, bits);
    assert_eq!(lfsr_length_reference(&seq, bits), linear_complexity(&seq, bits).unwrap(), "len={len}");
  }

  // A few larger buffers spanning many words.
  for len in [128usize, 192, 256, 384, 512] {
    let seq = gen_bytes(len, 0xC2B2_AE3D ^ len as u64);
    let bits = len * 8;
    assert_all_agree(&seq, bits);
    assert_eq!(lfsr_length_reference(&seq, bits), linear_complexity(&seq, bits).unwrap(), "len={len}");
  }
}

#[test]
fn engines_agree_on_partial_bit_lengths() {
  let seq = gen_bytes(64, 0x9E37_79B9_7F4A_7C15);

  // Dense around block boundaries, sparse elsewhere.
  let mut lengths: Vec<usize> = (0..=20).collect();
  for edge in [64usize, 128, 256, 448, 512] {
    lengths.extend(edge.saturating_sub(2)..=(edge + 2).min(512));
  }
  lengths.extend((21..512).step_by(37));

  for bits in lengths {
    assert_all_agree(&seq, bits);
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Edge cases: long zero runs before the first set bit
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn trailing_byte_edge_cases() {
  // Sequences that are all zero except for the top one or two bytes, swept
  // over every trailing-byte value and sizes spanning several word widths.
  // These stress the carry flags the block engine threads across blocks.
  for bits in 16..300usize {
    let bytes = bits.div_ceil(8);
    let mut seq = vec![0u8; bytes];
    let bits_in_last_byte = ((bits - 1) % 8) + 1;
    for last_byte in 0..256usize {
      seq[bytes - 1] = (last_byte & ((1 << bits_in_last_byte) - 1)) as u8;
      seq[bytes - 2] = (last_byte >> bits_in_last_byte) as u8;

      let words = pack_bits(&seq);
      let serial = lfsr_length_bitserial(&words, bits);
      let blocks = lfsr_length_blocks(&words, bits, clmul_soft);
      assert_eq!(serial, blocks, "bits={bits} last_byte={last_byte}");
    }
  }
}

#[test]
fn zero_blocks_then_data() {
  // Whole zero words ahead of a short burst of ones: many consecutive
  // zero-discrepancy blocks before the first update.
  for zero_words in [1usize, 2, 3, 4] {
    for tail in [0x01u8, 0x80, 0xFF, 0xA5] {
      let mut seq = vec![0u8; zero_words * 8];
      seq.push(tail);
      assert_all_agree(&seq, seq.len() * 8);
    }
  }
}
