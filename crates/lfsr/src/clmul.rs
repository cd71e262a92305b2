//! Carry-less multiply primitive.
//!
//! Multiplies two 64-bit polynomials over GF(2) (XOR in place of addition, no
//! carry propagation) and returns the 128-bit product as `(hi, lo)` halves.
//! The block engine batches its per-block transition operators through this
//! primitive.
//!
//! Three implementations:
//!
//! - [`clmul_soft`]: portable shift-and-xor, available everywhere.
//! - x86_64: PCLMULQDQ.
//! - aarch64: PMULL (`vmull_p64`).
//!
//! All of them agree on every input pair; the hardware kernels are selected
//! once per process via [`select`] and never per call.

/// A carry-less multiply kernel: `(x, y) -> (hi, lo)`.
pub type ClmulFn = fn(u64, u64) -> (u64, u64);

/// Backend name reported when no hardware multiply is available and the
/// bit-serial scalar engine runs instead.
pub const PORTABLE: &str = "portable/bitserial";

/// Carry-less multiplication of two 64-bit values, returning the 128-bit
/// result as `(hi, lo)` where `hi` contains bits 127..64.
///
/// This is the software equivalent of PCLMULQDQ/PMULL.
#[must_use]
pub const fn clmul_soft(x: u64, y: u64) -> (u64, u64) {
  let mut hi: u64 = 0;
  let mut lo: u64 = 0;

  // Process each bit of `x`, xoring `y` shifted into place.
  let mut i = 0;
  while i < 64 {
    if (x >> i) & 1 != 0 {
      if i == 0 {
        lo ^= y;
      } else {
        lo ^= y << i;
        hi ^= y >> (64 - i);
      }
    }
    i += 1;
  }

  (hi, lo)
}

// ─────────────────────────────────────────────────────────────────────────────
// Hardware kernels
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(target_arch = "x86_64")]
mod x86_64 {
  //! PCLMULQDQ kernel.
  //!
  //! # Safety
  //!
  //! Uses `unsafe` for x86 SIMD intrinsics. Callers must ensure PCLMULQDQ is
  //! available before executing this path (the dispatcher does this).
  #![allow(unsafe_code)]

  use core::arch::x86_64::*;

  #[inline]
  #[target_feature(enable = "sse2", enable = "pclmulqdq")]
  unsafe fn clmul(x: u64, y: u64) -> (u64, u64) {
    // SAFETY: caller guarantees SSE2 + PCLMULQDQ.
    unsafe {
      let a = _mm_set_epi64x(0, x as i64);
      let b = _mm_set_epi64x(0, y as i64);
      let product = _mm_clmulepi64_si128::<0x00>(a, b);
      // Extract both halves without requiring SSE4.1.
      let lo = _mm_cvtsi128_si64(product) as u64;
      let hi = _mm_cvtsi128_si64(_mm_srli_si128::<8>(product)) as u64;
      (hi, lo)
    }
  }

  pub fn clmul_safe(x: u64, y: u64) -> (u64, u64) {
    // SAFETY: dispatcher verifies PCLMULQDQ before selecting this kernel.
    unsafe { clmul(x, y) }
  }
}

#[cfg(target_arch = "aarch64")]
mod aarch64 {
  //! PMULL kernel.
  //!
  //! # Safety
  //!
  //! Uses `unsafe` for aarch64 SIMD intrinsics. Callers must ensure the AES
  //! extension (which carries PMULL) is available before executing this path
  //! (the dispatcher does this).
  #![allow(unsafe_code)]

  use core::arch::aarch64::*;

  #[inline]
  #[target_feature(enable = "neon", enable = "aes")]
  unsafe fn clmul(x: u64, y: u64) -> (u64, u64) {
    // SAFETY: caller guarantees NEON + AES/PMULL.
    let product = unsafe { vmull_p64(x, y) };
    ((product >> 64) as u64, product as u64)
  }

  pub fn clmul_safe(x: u64, y: u64) -> (u64, u64) {
    // SAFETY: dispatcher verifies PMULL before selecting this kernel.
    unsafe { clmul(x, y) }
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Dispatch
// ─────────────────────────────────────────────────────────────────────────────

/// Select the hardware multiply kernel for this machine, if any.
///
/// Returns the kernel and its name, or `None` when the caller should fall
/// back to the bit-serial scalar engine. The choice is static per process
/// (capabilities are detected once and cached).
#[must_use]
pub fn select() -> Option<(ClmulFn, &'static str)> {
  #[cfg(target_arch = "x86_64")]
  {
    if platform::caps().has(platform::caps::x86::CLMUL_READY) {
      return Some((x86_64::clmul_safe, "x86_64/pclmul"));
    }
  }

  #[cfg(target_arch = "aarch64")]
  {
    if platform::caps().has(platform::caps::aarch64::CLMUL_READY) {
      return Some((aarch64::clmul_safe, "aarch64/pmull"));
    }
  }

  None
}
