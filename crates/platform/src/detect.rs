//! Runtime CPU detection.
//!
//! This module provides the `caps()` function backing the crate facade. It
//! handles:
//!
//! - Compile-time detection (via `cfg!(target_feature = "...")`)
//! - Runtime detection (via `is_*_feature_detected!` with `std`)
//! - Caching (`OnceLock` with `std`, atomics without)
//! - User-supplied overrides for bare metal and testing
//! - Miri fallback (always returns portable caps)

use core::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use crate::caps::Caps;

// ─────────────────────────────────────────────────────────────────────────────
// Override Support
// ─────────────────────────────────────────────────────────────────────────────
//
// The override takes precedence over detection. Stored in atomics so it can
// be set and cleared without std.

static OVERRIDE_SET: AtomicBool = AtomicBool::new(false);
static OVERRIDE_BITS: AtomicU64 = AtomicU64::new(0);

pub(crate) fn set_caps_override(value: Option<Caps>) {
  match value {
    Some(caps) => {
      OVERRIDE_BITS.store(caps.0, Ordering::Release);
      OVERRIDE_SET.store(true, Ordering::Release);
    }
    None => OVERRIDE_SET.store(false, Ordering::Release),
  }
}

pub(crate) fn has_override() -> bool {
  OVERRIDE_SET.load(Ordering::Acquire)
}

// ─────────────────────────────────────────────────────────────────────────────
// Detection Entry Point
// ─────────────────────────────────────────────────────────────────────────────

#[inline]
pub(crate) fn caps() -> Caps {
  if OVERRIDE_SET.load(Ordering::Acquire) {
    return Caps(OVERRIDE_BITS.load(Ordering::Acquire));
  }

  // Miri cannot interpret the SIMD intrinsics behind these bits.
  if cfg!(miri) {
    return Caps::NONE;
  }

  cached()
}

#[cfg(feature = "std")]
fn cached() -> Caps {
  use std::sync::OnceLock;

  static CACHE: OnceLock<Caps> = OnceLock::new();
  *CACHE.get_or_init(detect_caps)
}

#[cfg(not(feature = "std"))]
fn cached() -> Caps {
  use core::sync::atomic::AtomicU8;

  // 0 = uninitialized, 1 = initializing, 2 = initialized
  static STATE: AtomicU8 = AtomicU8::new(0);
  static BITS: AtomicU64 = AtomicU64::new(0);

  // Fast path: already initialized.
  if STATE.load(Ordering::Acquire) == 2 {
    return Caps(BITS.load(Ordering::Acquire));
  }

  match STATE.compare_exchange(0, 1, Ordering::AcqRel, Ordering::Acquire) {
    Ok(_) => {
      // We won the race: compute and store.
      let caps = detect_caps();
      BITS.store(caps.0, Ordering::Release);
      STATE.store(2, Ordering::Release);
      caps
    }
    Err(1) => {
      // Someone else is initializing, spin wait.
      while STATE.load(Ordering::Acquire) == 1 {
        core::hint::spin_loop();
      }
      Caps(BITS.load(Ordering::Acquire))
    }
    Err(_) => Caps(BITS.load(Ordering::Acquire)),
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Per-Architecture Detection
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(target_arch = "x86_64")]
fn detect_caps() -> Caps {
  use crate::caps::x86;

  // SSE2 is the x86_64 baseline.
  let mut caps = x86::SSE2;

  if cfg!(target_feature = "pclmulqdq") {
    caps = caps.union(x86::PCLMULQDQ);
  }

  #[cfg(feature = "std")]
  {
    if std::arch::is_x86_feature_detected!("pclmulqdq") {
      caps = caps.union(x86::PCLMULQDQ);
    }
  }

  caps
}

#[cfg(target_arch = "aarch64")]
fn detect_caps() -> Caps {
  use crate::caps::aarch64;

  // NEON is the aarch64 baseline.
  let mut caps = aarch64::NEON;

  // PMULL ships with the AES extension on every mainstream core.
  if cfg!(target_feature = "aes") {
    caps = caps.union(aarch64::PMULL);
  }

  #[cfg(feature = "std")]
  {
    if std::arch::is_aarch64_feature_detected!("aes") {
      caps = caps.union(aarch64::PMULL);
    }
  }

  caps
}

#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
fn detect_caps() -> Caps {
  Caps::NONE
}
