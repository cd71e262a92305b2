//! CPU detection and capabilities for carry-less multiply dispatch.
//!
//! This crate is the single source of truth for CPU feature detection in the
//! workspace. It answers one question: which carry-less multiply instructions
//! can legally run on this machine?
//!
//! # Main Entry Point
//!
//! ```ignore
//! use platform::caps;
//!
//! if caps().has(platform::caps::x86::CLMUL_READY) {
//!     // Use the PCLMULQDQ kernel
//! }
//! ```
//!
//! # Design
//!
//! 1. **One API**: callers query [`caps()`] instead of doing ad-hoc detection.
//! 2. **Zero-cost when possible**: compile-time features are detected via
//!    `cfg!`, avoiding runtime overhead.
//! 3. **Cached otherwise**: runtime detection runs once and is cached in a
//!    `OnceLock` (std) or atomics (no_std).
//! 4. **Miri-safe**: under Miri, always returns portable-only caps.

#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod caps;
mod detect;

pub use caps::Caps;

/// Get detected CPU capabilities.
///
/// This is the main entry point for capability-based dispatch. The first call
/// performs detection; subsequent calls return the cached result.
///
/// # Miri
///
/// Under Miri, always returns [`Caps::NONE`] to avoid interpreting SIMD
/// intrinsics.
#[inline]
#[must_use]
pub fn caps() -> Caps {
  detect::caps()
}

/// Set or clear the capabilities override.
///
/// When set, [`caps()`] returns the override value instead of detecting. Pass
/// `None` to clear the override and resume detection. Useful for forcing the
/// portable code path in tests and for bare metal targets where runtime
/// detection is unavailable.
///
/// # Thread Safety
///
/// Thread-safe, but callers that flip the override concurrently with dispatch
/// will observe either value; tests should set it up front.
#[inline]
pub fn set_caps_override(value: Option<Caps>) {
  detect::set_caps_override(value);
}

/// Check if an override is currently set.
#[inline]
#[must_use]
pub fn has_override() -> bool {
  detect::has_override()
}
