//! Differential fuzzing of the linear complexity engines.
//!
//! The block engine (through the software multiply), the bit-serial engine,
//! and the public dispatch path must produce identical results for every
//! input; the result must respect the `0 <= L <= bits` invariant.

#![no_main]

use arbitrary::Arbitrary;
use lfsr::__internal::{clmul_soft, lfsr_length_bitserial, lfsr_length_blocks, pack_bits};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
  data: Vec<u8>,
  bits: u16,
}

fuzz_target!(|input: Input| {
  let Input { data, bits } = input;
  let bits = (bits as usize) % (data.len() * 8 + 1);

  let words = pack_bits(&data);
  let serial = lfsr_length_bitserial(&words, bits);
  let blocks = lfsr_length_blocks(&words, bits, clmul_soft);
  assert_eq!(serial, blocks, "engine mismatch: len={} bits={bits}", data.len());

  let public = lfsr::linear_complexity(&data, bits).expect("bits validated above");
  assert_eq!(serial, public, "dispatch mismatch: len={} bits={bits}", data.len());

  assert!(serial <= bits, "invariant violated: L={serial} bits={bits}");
});
