//! Property-based differential tests.

use lfsr::__internal::{clmul_soft, lfsr_length_bitserial, lfsr_length_blocks, pack_bits};
use lfsr::linear_complexity;
use proptest::prelude::*;

proptest! {
  #[test]
  fn engines_agree(data in proptest::collection::vec(any::<u8>(), 0..=512), bits in any::<usize>()) {
    let bits = bits % (data.len() * 8 + 1);
    let words = pack_bits(&data);

    let serial = lfsr_length_bitserial(&words, bits);
    let blocks = lfsr_length_blocks(&words, bits, clmul_soft);
    prop_assert_eq!(serial, blocks);

    let public = linear_complexity(&data, bits).unwrap();
    prop_assert_eq!(serial, public);
  }

  #[test]
  fn complexity_is_bounded(data in proptest::collection::vec(any::<u8>(), 0..=256), bits in any::<usize>()) {
    let bits = bits % (data.len() * 8 + 1);
    let l = linear_complexity(&data, bits).unwrap();
    prop_assert!(l <= bits);
  }

  #[test]
  fn complexity_is_monotone_in_prefix_length(data in proptest::collection::vec(any::<u8>(), 1..=64), split in any::<usize>()) {
    // Examining more bits can only keep or grow the shortest register.
    let bits = data.len() * 8;
    let split = split % (bits + 1);
    let shorter = linear_complexity(&data, split).unwrap();
    let longer = linear_complexity(&data, bits).unwrap();
    prop_assert!(shorter <= longer);
  }

  #[test]
  fn oversized_lengths_always_rejected(data in proptest::collection::vec(any::<u8>(), 0..=64), extra in 1usize..=1 << 20) {
    let bits = data.len() * 8 + extra;
    prop_assert!(linear_complexity(&data, bits).is_err());
  }
}
