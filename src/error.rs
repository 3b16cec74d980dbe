//! Error kinds returned by fallible MPI operations.

/// Flat error taxonomy shared by every fallible operation in this crate.
///
/// There is no `Ok` variant here (unlike the mbedTLS/PolarSSL lineage this
/// module descends from, which returns `0` for success): success is
/// `Ok(())`/`Ok(T)`, which is the idiomatic Rust equivalent.
///
/// Following the error-enum convention already used across this crate's
/// sibling modules (`SecretSharingError`, `Argon2Error`, `Argon2ParamError`),
/// this is a bare `#[derive(Debug)]` enum: no `Display`, no
/// `std::error::Error`, no `thiserror`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MpiError {
    /// `grow` could not satisfy a capacity request, or the request exceeds
    /// [`crate::mpi::MAX_LIMBS`].
    Alloc,
    /// Malformed input string, out-of-range radix, a modulus failing the
    /// preconditions of `exp_mod`/`inv_mod`, or `gen_prime` called with
    /// `nbits < 3`.
    BadInput,
    /// An export buffer was too small. `needed` holds the required size in
    /// bytes (mirroring the original spec's `*buflen` out-parameter).
    BufferTooSmall {
        /// The number of bytes the caller must provide.
        needed: usize,
    },
    /// Unsigned subtraction would underflow, or a modulus was negative.
    Negative,
    /// The divisor was zero.
    DivByZero,
    /// `inv_mod` found `gcd(a, n) != 1`, or `is_prime` found a composite.
    NotAcceptable,
}
