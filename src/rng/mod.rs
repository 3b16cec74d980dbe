//! Randomness as a capability: the [`RandomSource`] trait the number-theory
//! layer (`is_prime`, `gen_prime`) is generic over, plus a concrete
//! ChaCha20-based CSPRNG implementing it for callers who don't want to
//! supply their own generator.
//!
//! Design goals:
//! - Cryptographic security
//! - Deterministic expansion from a secure seed
//! - Forward secrecy through periodic rekeying
//! - No heap allocation in the generator itself
//! - Minimal and explicit API surface
pub(crate) mod chacha20;
mod csprng;

use crate::error::MpiError;
use crate::mpi::Mpi;

/// Cryptographically secure pseudorandom number generator.
///
/// This type is the primary entry point for generating secure randomness
/// within this crate.
pub use csprng::Csprng;

/// A source of cryptographically secure random bytes.
///
/// This is the capability [`Mpi::is_prime`] and [`Mpi::gen_prime`] are
/// generic over, rather than hard-coding [`Csprng`]: callers that already
/// manage their own RNG (e.g. one threaded through from a larger protocol
/// state) can implement this trait directly instead of routing through a
/// second generator.
pub trait RandomSource {
    /// Fills `buf` entirely with random bytes.
    fn fill_bytes(&mut self, buf: &mut [u8]);
}

impl<T: RandomSource + ?Sized> RandomSource for &mut T {
    fn fill_bytes(&mut self, buf: &mut [u8]) {
        (**self).fill_bytes(buf)
    }
}

/// Fills `x` with a uniformly random value of exactly `nbytes` bytes
/// (i.e. `2^(8*nbytes - 8) <= x < 2^(8*nbytes)` once the top byte is
/// nonzero, or `x == 0` in the all-zero-bytes case).
pub fn fill_random(x: &mut Mpi, nbytes: usize, rng: &mut impl RandomSource) -> Result<(), MpiError> {
    let mut buf = vec![0u8; nbytes];
    rng.fill_bytes(&mut buf);
    x.copy_from(&Mpi::read_binary(&buf))
}
