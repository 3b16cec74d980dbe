//! Magnitude and signed comparisons.

use super::{Mpi, Sign};
use std::cmp::Ordering;

impl Mpi {
    /// Compares `|self|` to `|other|`. Trims trailing (high) zero limbs from
    /// both sides before comparing, so a differently-`grow`n but
    /// numerically equal value still compares equal.
    pub fn cmp_abs(&self, other: &Mpi) -> Ordering {
        let a_used = self.limbs_used();
        let b_used = other.limbs_used();

        match a_used.cmp(&b_used) {
            Ordering::Equal => {}
            ord => return ord,
        }

        for i in (0..a_used).rev() {
            match self.limbs[i].cmp(&other.limbs[i]) {
                Ordering::Equal => continue,
                ord => return ord,
            }
        }
        Ordering::Equal
    }

    /// Signed comparison. Zero compares equal regardless of its sign field.
    pub fn cmp(&self, other: &Mpi) -> Ordering {
        let a_zero = self.is_zero();
        let b_zero = other.is_zero();
        if a_zero && b_zero {
            return Ordering::Equal;
        }
        if a_zero {
            return if other.sign.is_negative() {
                Ordering::Greater
            } else {
                Ordering::Less
            };
        }
        if b_zero {
            return if self.sign.is_negative() {
                Ordering::Less
            } else {
                Ordering::Greater
            };
        }

        match (self.sign, other.sign) {
            (Sign::Positive, Sign::Negative) => Ordering::Greater,
            (Sign::Negative, Sign::Positive) => Ordering::Less,
            (Sign::Positive, Sign::Positive) => self.cmp_abs(other),
            (Sign::Negative, Sign::Negative) => other.cmp_abs(self),
        }
    }

    /// Signed comparison against a small integer.
    pub fn cmp_int(&self, z: i64) -> Ordering {
        let mut tmp = Mpi::new();
        tmp.set_int(z);
        self.cmp(&tmp)
    }

    /// `self == other`, ignoring sign for a zero value on either side.
    pub fn eq_value(&self, other: &Mpi) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cmp::Ordering;

    #[test]
    fn cmp_abs_ignores_high_zero_limbs() {
        let mut a = Mpi::new();
        a.set_int(5);
        a.grow(10).unwrap();
        let mut b = Mpi::new();
        b.set_int(5);
        assert_eq!(a.cmp_abs(&b), Ordering::Equal);
    }

    #[test]
    fn cmp_signed_orders_by_sign_then_magnitude() {
        let mut a = Mpi::new();
        a.set_int(-5);
        let mut b = Mpi::new();
        b.set_int(3);
        assert_eq!(a.cmp(&b), Ordering::Less);
        assert_eq!(b.cmp(&a), Ordering::Greater);

        let mut neg_small = Mpi::new();
        neg_small.set_int(-2);
        let mut neg_big = Mpi::new();
        neg_big.set_int(-9);
        assert_eq!(neg_big.cmp(&neg_small), Ordering::Less);
    }

    #[test]
    fn zero_compares_equal_regardless_of_sign_field() {
        let mut z1 = Mpi::new();
        z1.set_int(0);
        let mut z2 = Mpi::new();
        z2.sign = Sign::Negative; // pathological but must still compare equal
        assert_eq!(z1.cmp(&z2), Ordering::Equal);
    }

    #[test]
    fn cmp_int_matches_cmp() {
        let mut a = Mpi::new();
        a.set_int(100);
        assert_eq!(a.cmp_int(100), Ordering::Equal);
        assert_eq!(a.cmp_int(99), Ordering::Greater);
        assert_eq!(a.cmp_int(101), Ordering::Less);
    }
}
