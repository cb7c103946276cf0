//! Secure entropy sources for bounded draws.
//!
//! # Purpose
//! Turns a cryptographically secure byte source into uniformly distributed
//! integers in `[0, bound)`. This is the only place the crate touches raw
//! randomness.
//!
//! # Algorithm: Modulo Bias Mitigation
//! A plain `value % bound` favours small results whenever `bound` does not
//! divide 2^64. Values at or above `u64::MAX - (u64::MAX % bound)` are
//! rejected and redrawn, so every residue is equally likely.
//!
//! # Failure Model
//! Bytes are pulled with `try_fill_bytes`, so an OS entropy failure comes
//! back as `rand::Error` instead of a panic.

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

/// A secure source of uniformly distributed integers below a bound.
///
/// Implemented for every [`RngCore`] + [`CryptoRng`] type. Implement it
/// directly only when a source does not fit that shape.
pub trait EntropySource {
    /// Returns a uniformly distributed value in `[0, bound)`.
    ///
    /// Callers must pass `bound > 0`.
    fn below(&mut self, bound: u64) -> Result<u64, rand::Error>;
}

impl<R: RngCore + CryptoRng> EntropySource for R {
    fn below(&mut self, bound: u64) -> Result<u64, rand::Error> {
        uniform_below(self, bound)
    }
}

/// The default source: the operating system CSPRNG.
pub fn os_source() -> OsRng {
    OsRng
}

/// Draws an unbiased value in `[0, bound)` from `rng`.
///
/// # Performance
/// Expected iterations: ~1.0. Worst case (`bound = 2^63 + 1`) averages
/// two draws.
pub(crate) fn uniform_below<R: RngCore + ?Sized>(
    rng: &mut R,
    bound: u64,
) -> Result<u64, rand::Error> {
    debug_assert!(bound > 0);

    let threshold = u64::MAX - (u64::MAX % bound);
    let mut buf = [0u8; 8];

    loop {
        rng.try_fill_bytes(&mut buf)?;
        let value = u64::from_le_bytes(buf);
        if value < threshold {
            return Ok(value % bound);
        }
    }
}
