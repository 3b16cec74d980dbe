//! Radix string import/export (bases 2 through 16).

use super::{Mpi, Sign};
use crate::error::MpiError;
use crate::limb::LIMB_BITS;

const DIGITS: &[u8] = b"0123456789abcdef";

impl Mpi {
    /// Parses a signed string in the given radix (2..=16), with an optional
    /// leading `-`. Fails with [`MpiError::BadInput`] on an out-of-range
    /// radix, an empty string, or a digit not valid in that radix.
    pub fn read_string(s: &str, radix: u32) -> Result<Mpi, MpiError> {
        if !(2..=16).contains(&radix) {
            return Err(MpiError::BadInput);
        }
        let s = s.trim();
        let (sign, digits) = match s.strip_prefix('-') {
            Some(rest) => (Sign::Negative, rest),
            None => (Sign::Positive, s),
        };
        if digits.is_empty() {
            return Err(MpiError::BadInput);
        }

        let mut radix_mpi = Mpi::new();
        radix_mpi.set_int(radix as i64);

        let mut x = Mpi::new();
        for c in digits.chars() {
            let d = c.to_digit(16).ok_or(MpiError::BadInput)?;
            if d >= radix {
                return Err(MpiError::BadInput);
            }
            x = Mpi::mul(&x, &radix_mpi).map_err(|_| MpiError::BadInput)?;
            x = Mpi::add_int(&x, d as i64).map_err(|_| MpiError::BadInput)?;
        }
        x.sign = sign;
        x.normalize_sign();
        Ok(x)
    }

    /// Renders `self` in the given radix (2..=16) as an owned `String`.
    /// Radix 16 takes a direct nibble-extraction fast path; every other
    /// radix falls back to repeated `mod_int`/`div` by the radix.
    pub fn to_radix_string(&self, radix: u32) -> Result<String, MpiError> {
        if !(2..=16).contains(&radix) {
            return Err(MpiError::BadInput);
        }
        if self.is_zero() {
            return Ok("0".to_string());
        }
        if radix == 16 {
            return Ok(self.to_hex_string());
        }

        let mut radix_mpi = Mpi::new();
        radix_mpi.set_int(radix as i64);

        let mut digits = Vec::new();
        let mut cur = Mpi {
            sign: Sign::Positive,
            limbs: self.limbs.clone(),
        };
        while !cur.is_zero() {
            let rem = Mpi::mod_int(&cur, radix as i64).expect("radix fits in a limb");
            digits.push(DIGITS[rem as usize]);
            cur = Mpi::div(&cur, &radix_mpi).expect("radix_mpi is nonzero");
        }
        if self.sign.is_negative() {
            digits.push(b'-');
        }
        digits.reverse();
        Ok(String::from_utf8(digits).expect("ASCII digits only"))
    }

    fn to_hex_string(&self) -> String {
        let used = self.limbs_used();
        let mut s = String::new();
        if self.sign.is_negative() {
            s.push('-');
        }

        let mut started = false;
        for i in (0..used).rev() {
            let limb = self.limbs[i];
            for nibble_idx in (0..LIMB_BITS / 4).rev() {
                let nibble = ((limb >> (nibble_idx * 4)) & 0xf) as usize;
                if !started && nibble == 0 {
                    continue;
                }
                started = true;
                s.push(DIGITS[nibble] as char);
            }
        }
        if !started {
            s.push('0');
        }
        s
    }

    /// Writes [`Mpi::to_radix_string`]'s output into `buf`. Fails with
    /// [`MpiError::BufferTooSmall`] (`needed` = rendered length) if `buf`
    /// is too short; on success, returns the number of bytes written.
    pub fn write_string(&self, radix: u32, buf: &mut [u8]) -> Result<usize, MpiError> {
        let s = self.to_radix_string(radix)?;
        if buf.len() < s.len() {
            return Err(MpiError::BufferTooSmall { needed: s.len() });
        }
        buf[..s.len()].copy_from_slice(s.as_bytes());
        Ok(s.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_roundtrip() {
        let x = Mpi::read_string("-1a2b3c", 16).unwrap();
        let s = x.to_radix_string(16).unwrap();
        assert_eq!(s, "-1a2b3c");
    }

    #[test]
    fn decimal_roundtrip() {
        let x = Mpi::read_string("-9876543210123456789", 10).unwrap();
        let s = x.to_radix_string(10).unwrap();
        assert_eq!(s, "-9876543210123456789");
    }

    #[test]
    fn binary_radix() {
        let x = Mpi::read_string("101101", 2).unwrap();
        assert_eq!(x.cmp_int(45), std::cmp::Ordering::Equal);
        assert_eq!(x.to_radix_string(2).unwrap(), "101101");
    }

    #[test]
    fn rejects_out_of_range_radix() {
        assert_eq!(Mpi::read_string("10", 17), Err(MpiError::BadInput));
        assert_eq!(Mpi::read_string("10", 1), Err(MpiError::BadInput));
    }

    #[test]
    fn rejects_digit_outside_radix() {
        assert_eq!(Mpi::read_string("19", 8), Err(MpiError::BadInput));
    }

    #[test]
    fn write_string_reports_needed_size() {
        let x = Mpi::read_string("ffffffff", 16).unwrap();
        let mut tiny = [0u8; 2];
        assert_eq!(
            x.write_string(16, &mut tiny),
            Err(MpiError::BufferTooSmall { needed: 8 })
        );
    }

    #[test]
    fn zero_renders_as_single_digit() {
        let x = Mpi::new();
        assert_eq!(x.to_radix_string(10).unwrap(), "0");
        assert_eq!(x.to_radix_string(16).unwrap(), "0");
    }
}
