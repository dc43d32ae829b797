//! Arithmetic in GF(2^8) modulo the AES polynomial `x^8 + x^4 + x^3 + x + 1`.

use core::fmt;
use core::ops::{Add, AddAssign, Mul, MulAssign};

/// Low byte of the reduction polynomial 0x11B.
pub const REDUCTION: u8 = 0x1b;

/// Field addition, which is XOR.
#[inline]
pub fn gadd(a: u8, b: u8) -> u8 {
    a ^ b
}

/// Multiplies by `x` (0x02), folding the carry back through [`REDUCTION`].
#[inline]
pub fn xtime(byte: u8) -> u8 {
    let shifted = byte << 1;
    if byte & 0x80 != 0 {
        shifted ^ REDUCTION
    } else {
        shifted
    }
}

/// Multiplies two bytes as elements of GF(2^8).
///
/// Shift-and-add over the bits of `b`, low to high, doubling `a` with
/// [`xtime`] at each step. Terminates as soon as `b` runs out of set bits.
pub fn gmul(mut a: u8, mut b: u8) -> u8 {
    let mut product = 0u8;
    while b != 0 {
        if b & 1 != 0 {
            product ^= a;
        }
        a = xtime(a);
        b >>= 1;
    }
    product
}

/// A byte viewed as a field element, so `+` and `*` carry GF(2^8) meaning.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Gf256(pub u8);

impl Gf256 {
    /// Additive identity.
    pub const ZERO: Self = Self(0);
    /// Multiplicative identity.
    pub const ONE: Self = Self(1);

    /// Raises the element to `exp` by square-and-multiply.
    pub fn pow(self, mut exp: u32) -> Self {
        let mut base = self;
        let mut acc = Self::ONE;
        while exp != 0 {
            if exp & 1 == 1 {
                acc *= base;
            }
            base *= base;
            exp >>= 1;
        }
        acc
    }

    /// Multiplicative inverse, `a^254`. Zero has none.
    pub fn inverse(self) -> Option<Self> {
        if self == Self::ZERO {
            return None;
        }
        Some(self.pow(254))
    }
}

impl fmt::Debug for Gf256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Gf256(0x{:02x})", self.0)
    }
}

impl From<u8> for Gf256 {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl From<Gf256> for u8 {
    fn from(value: Gf256) -> Self {
        value.0
    }
}

impl Add for Gf256 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(gadd(self.0, rhs.0))
    }
}

impl AddAssign for Gf256 {
    fn add_assign(&mut self, rhs: Self) {
        self.0 = gadd(self.0, rhs.0);
    }
}

impl Mul for Gf256 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self(gmul(self.0, rhs.0))
    }
}

impl MulAssign for Gf256 {
    fn mul_assign(&mut self, rhs: Self) {
        self.0 = gmul(self.0, rhs.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn gmul_matches_fips197_examples() {
        assert_eq!(gmul(0x57, 0x83), 0xc1);
        assert_eq!(gmul(0x57, 0x13), 0xfe);
        assert_eq!(gmul(0x57, 0x02), 0xae);
        assert_eq!(gmul(0x57, 0x04), 0x47);
    }

    #[test]
    fn gmul_known_products() {
        assert_eq!(gmul(3, 11), 29);
        assert_eq!(gmul(2, 128), 27);
        assert_eq!(gmul(0x49, 0x24), 0xdc);
        assert_eq!(gmul(0x07, 0xd1), 0x01);
        assert_eq!(gmul(0x53, 0xca), 0x01);
    }

    #[test]
    fn gmul_identities_hold_for_every_byte() {
        for a in 0..=255u8 {
            assert_eq!(gmul(a, 0), 0);
            assert_eq!(gmul(0, a), 0);
            assert_eq!(gmul(a, 1), a);
            assert_eq!(gmul(a, 2), xtime(a));
        }
    }

    #[test]
    fn gmul_is_commutative() {
        for a in 0..=255u8 {
            for b in 0..=255u8 {
                assert_eq!(gmul(a, b), gmul(b, a), "a={a:#04x} b={b:#04x}");
            }
        }
    }

    #[test]
    fn gmul_distributes_over_xor() {
        let mut rng = ChaCha20Rng::from_seed([7u8; 32]);
        for _ in 0..1024 {
            let (a, b, c): (u8, u8, u8) = (rng.gen(), rng.gen(), rng.gen());
            assert_eq!(gmul(a, gadd(b, c)), gadd(gmul(a, b), gmul(a, c)));
        }
    }

    #[test]
    fn every_nonzero_element_has_an_inverse() {
        assert_eq!(Gf256::ZERO.inverse(), None);
        for a in 1..=255u8 {
            let x = Gf256(a);
            let inv = x.inverse().expect("non-zero element");
            assert_eq!(x * inv, Gf256::ONE);
        }
        assert_eq!(Gf256(0x53).inverse(), Some(Gf256(0xca)));
    }

    #[test]
    fn pow_agrees_with_repeated_multiplication() {
        let g = Gf256(0x03);
        let mut acc = Gf256::ONE;
        for exp in 0..300u32 {
            assert_eq!(g.pow(exp), acc);
            acc *= g;
        }
        // 0x03 generates the multiplicative group.
        assert_eq!(g.pow(255), Gf256::ONE);
    }

    #[test]
    fn operators_delegate_to_free_functions() {
        let mut x = Gf256::from(0x57);
        assert_eq!(x + Gf256(0x83), Gf256(0xd4));
        assert_eq!(u8::from(x * Gf256(0x13)), 0xfe);
        x *= Gf256(0x83);
        assert_eq!(x, Gf256(0xc1));
        x += Gf256(0xc1);
        assert_eq!(x, Gf256::ZERO);
        assert_eq!(format!("{:?}", Gf256(0x0a)), "Gf256(0x0a)");
    }
}
