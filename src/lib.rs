//! Multi-precision integer (MPI) arithmetic core.
//!
//! This crate provides arbitrary-precision signed integer arithmetic: the
//! hard-engineering heart of a small TLS/crypto library, on which RSA,
//! Diffie-Hellman, and related public-key primitives are built. It delivers
//! correct arithmetic for operands of thousands of bits, modular
//! exponentiation via Montgomery reduction with sliding-window exponent
//! scanning, and probabilistic (Miller-Rabin) primality testing, with
//! bounded, predictable memory use.
//!
//! # Module overview
//!
//! - [`mpi`]
//!   The [`Mpi`](mpi::Mpi) type itself: representation, lifecycle, core
//!   arithmetic (add/sub/mul/div, shifts, comparisons), radix and big-endian
//!   binary I/O, modular arithmetic (`mod`, `inv_mod`, Montgomery `exp_mod`),
//!   and number theory (binary GCD, `is_prime`, `gen_prime`).
//!
//! - [`limb`]
//!   The single-limb multiply-accumulate primitive every multi-precision
//!   operation in [`mpi`] bottoms out in.
//!
//! - [`error`]
//!   The flat [`MpiError`](error::MpiError) taxonomy returned by every
//!   fallible operation.
//!
//! - `rng`
//!   Randomness as a capability ([`rng::RandomSource`]) that [`mpi::Mpi::is_prime`]
//!   and [`mpi::Mpi::gen_prime`] are generic over, plus a concrete ChaCha20-DRBG
//!   ([`rng::Csprng`]) seeded from OS entropy, provided as a convenience default.
//!
//! # Design goals
//!
//! - No undefined behavior on malformed input; every fallible operation
//!   returns a [`error::MpiError`] instead of panicking.
//! - Bounded memory use: every `Mpi` is capped at [`mpi::MAX_LIMBS`] limbs.
//! - Secret-material hygiene: limb storage is zeroized on drop.
//! - Minimal and explicit APIs; no hidden global state beyond the read-only
//!   small-prime table used by [`mpi::Mpi::is_prime`].
//!
//! This crate is single-threaded by design: no operation is internally
//! concurrent, and an `Mpi` must not be shared across threads without
//! external synchronization. It does not claim constant-time behavior; see
//! `DESIGN.md` for the reasoning and what a constant-time port would need to
//! add.

pub mod error;
pub mod limb;
pub mod mpi;
pub mod rng;

mod os;
