//! CPU capability representation.
//!
//! [`Caps`] is a bitset of available ISA extensions. The bits are
//! architecture-specific but the API is uniform across all targets.
//!
//! # Bit Layout
//!
//! - Bits 0-31: x86_64 features
//! - Bits 32-63: aarch64 features

// ─────────────────────────────────────────────────────────────────────────────
// Core Capability Type
// ─────────────────────────────────────────────────────────────────────────────

/// CPU capabilities: a 64-bit feature bitset.
///
/// This is the core type for capability-based dispatch. Use
/// [`has()`](Caps::has) to check if required features are available.
///
/// # Thread Safety
///
/// `Caps` is `Copy`, `Send`, and `Sync`. It can be freely shared across
/// threads.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Caps(pub(crate) u64);

impl Caps {
  /// Empty capability set (no features).
  pub const NONE: Self = Self(0);

  const fn bit(n: u32) -> Self {
    Self(1 << n)
  }

  /// Create a capability set from raw bits.
  ///
  /// Primarily useful for testing and fuzzing; normal usage should prefer the
  /// predefined constants.
  #[cfg(any(test, feature = "testing"))]
  #[inline]
  #[must_use]
  pub const fn from_raw(bits: u64) -> Self {
    Self(bits)
  }

  /// Check if all features in `required` are present.
  ///
  /// This is the core dispatch check, marked `#[inline(always)]` for zero
  /// overhead.
  #[inline(always)]
  #[must_use]
  pub const fn has(self, required: Self) -> bool {
    (self.0 & required.0) == required.0
  }

  /// Union of two capability sets.
  #[inline]
  #[must_use]
  pub const fn union(self, other: Self) -> Self {
    Self(self.0 | other.0)
  }

  /// True if no features are set.
  #[inline]
  #[must_use]
  pub const fn is_empty(self) -> bool {
    self.0 == 0
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// x86_64 Features (bits 0-31)
// ─────────────────────────────────────────────────────────────────────────────

/// x86_64 feature bits.
pub mod x86 {
  use super::Caps;

  /// SSE2 (baseline on x86_64).
  pub const SSE2: Caps = Caps::bit(0);
  /// PCLMULQDQ carry-less multiply.
  pub const PCLMULQDQ: Caps = Caps::bit(1);

  /// Everything the PCLMULQDQ kernel needs.
  pub const CLMUL_READY: Caps = Caps(SSE2.0 | PCLMULQDQ.0);
}

// ─────────────────────────────────────────────────────────────────────────────
// aarch64 Features (bits 32-63)
// ─────────────────────────────────────────────────────────────────────────────

/// aarch64 feature bits.
pub mod aarch64 {
  use super::Caps;

  /// NEON (baseline on aarch64).
  pub const NEON: Caps = Caps::bit(32);
  /// PMULL polynomial multiply (bundled with AES).
  pub const PMULL: Caps = Caps::bit(33);

  /// Everything the PMULL kernel needs.
  pub const CLMUL_READY: Caps = Caps(NEON.0 | PMULL.0);
}
