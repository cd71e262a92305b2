//! Distribution of linear complexity over random sequences.
//!
//! The number of `n`-bit sequences whose shortest LFSR has length `m` follows
//! a simple closed form: 1 for `m = 0`, `2 * 4^(m-1)` for `1 <= m <= n/2`,
//! and `4^(n-m)` above the midpoint. Randomness-testing harnesses compare a
//! computed complexity against this distribution; the log form below is the
//! one used for entropy-style weighting of unlikely outliers.

/// Number of `n`-bit sequences whose shortest LFSR has length `m`.
///
/// The probability that a random `n`-bit sequence has linear complexity `m`
/// is `lfsr_count(n, m) / 2^n`.
///
/// Returns `Some(0)` when `m > n` or `n == 0`, and `None` when the count
/// does not fit in `u128` (prefer [`lfsr_log_probability`] for large sizes,
/// which is exact everywhere).
#[must_use]
pub fn lfsr_count(n: usize, m: usize) -> Option<u128> {
  if n == 0 || m > n {
    return Some(0);
  }
  if m == 0 {
    return Some(1);
  }

  // 2 * 4^(m-1) = 2^(2m-1) below the midpoint, 4^(n-m) = 2^(2(n-m)) above.
  let exp = if m <= n / 2 { 2 * m - 1 } else { 2 * (n - m) };
  u32::try_from(exp).ok().and_then(|e| 1u128.checked_shl(e))
}

/// Log2 of the probability that a random `n`-bit sequence has linear
/// complexity `m`.
///
/// Returns an integer `x` such that `2^x` is that probability, or `None`
/// when `n == 0` or `m > n`. Exact for every size, unlike [`lfsr_count`].
#[must_use]
pub fn lfsr_log_probability(n: usize, m: usize) -> Option<i64> {
  if n == 0 || m > n {
    return None;
  }

  let (n, m) = (n as i64, m as i64);
  Some(if m == 0 {
    -n
  } else if m <= n / 2 {
    2 * m - n - 1
  } else {
    n - 2 * m
  })
}
