//! Single-limb arithmetic primitives.
//!
//! An [`Mpi`](crate::mpi::Mpi) magnitude is stored as a little-endian
//! sequence of fixed-width *limbs*. Every multi-limb operation (schoolbook
//! multiply, long division, Montgomery reduction) bottoms out in
//! [`muladdc`], which accumulates `s + a*b + c` in a double-width register
//! and splits the result back into a low limb and a carry-out limb.
//!
//! The limb width is a build-time choice, matching the portable/`speed`
//! cfg-gating style used elsewhere in this crate: the default build uses
//! 64-bit limbs with a 128-bit double-width accumulator, and the `limb32`
//! feature switches to 32-bit limbs with a 64-bit double-width accumulator
//! for hosts or audits that prefer to avoid 128-bit multiplication.

#[cfg(not(feature = "limb32"))]
pub type Limb = u64;
#[cfg(not(feature = "limb32"))]
pub type DoubleLimb = u128;

#[cfg(feature = "limb32")]
pub type Limb = u32;
#[cfg(feature = "limb32")]
pub type DoubleLimb = u64;

/// Number of bits in a single limb.
pub const LIMB_BITS: u32 = Limb::BITS;

/// Computes `s + a*b + c`, returning `(low, high)` in a double-width
/// accumulator.
///
/// This is the one primitive every multi-precision multiply, Montgomery
/// reduction, and division inner loop reduces to. `high` is always small
/// enough to fit back into a single limb: the maximum possible value of
/// `s + a*b + c` is `(2^w - 1) + (2^w - 1)^2 + (2^w - 1)`, which fits in
/// `2*w` bits for any limb width `w`.
#[inline(always)]
pub fn muladdc(s: Limb, a: Limb, b: Limb, c: Limb) -> (Limb, Limb) {
    let acc = s as DoubleLimb
        + (a as DoubleLimb) * (b as DoubleLimb)
        + c as DoubleLimb;
    (acc as Limb, (acc >> LIMB_BITS) as Limb)
}
