//! Field arithmetic modulo p = 2^256 - 2^224 + 2^192 + 2^96 - 1.

mod field_8x32;

use core::{
    fmt,
    ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};
use field_8x32::{FieldElement8x32, WideElement8x32};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};
use zeroize::Zeroize;

#[cfg(test)]
use num_bigint::{BigUint, ToBigUint};

/// An element of the NIST P-256 base field used for curve coordinates.
#[derive(Clone, Copy)]
pub struct FieldElement(FieldElement8x32);

impl FieldElement {
    /// Zero element.
    pub const ZERO: Self = Self(FieldElement8x32::ZERO);

    /// Multiplicative identity.
    pub const ONE: Self = Self(FieldElement8x32::ONE);

    /// Parses the given byte array as an SEC1-encoded field element.
    /// Does not check the result for being in the correct range.
    pub const fn from_bytes_unchecked(bytes: &[u8; 32]) -> Self {
        Self(FieldElement8x32::from_bytes_unchecked(bytes))
    }

    /// Parses the given byte array as an SEC1-encoded field element.
    ///
    /// Returns `None` if the byte array does not contain a big-endian integer
    /// in the range `[0, p)`.
    pub fn from_bytes(bytes: &[u8; 32]) -> CtOption<Self> {
        FieldElement8x32::from_bytes(bytes).map(Self)
    }

    /// Parses the given byte array as a big-endian integer and reduces it
    /// into the field.
    pub fn from_bytes_reduced(bytes: &[u8; 32]) -> Self {
        Self(FieldElement8x32::from_bytes_reduced(bytes))
    }

    /// Converts the given small integer into a field element.
    pub const fn from_u64(val: u64) -> Self {
        Self(FieldElement8x32::from_u64(val))
    }

    /// Returns the SEC1 encoding of this field element.
    pub const fn to_bytes(&self) -> [u8; 32] {
        self.0.to_bytes()
    }

    /// Returns `Choice(1)` if this element is zero.
    pub fn is_zero(&self) -> Choice {
        self.0.is_zero()
    }

    /// Returns `Choice(1)` if this element is odd in the SEC1 sense:
    /// `self mod 2 == 1`.
    pub fn is_odd(&self) -> Choice {
        self.0.is_odd()
    }

    /// Returns `self + rhs mod p`.
    pub fn add(&self, rhs: &Self) -> Self {
        Self(self.0.add(&rhs.0))
    }

    /// Returns `self + 1 mod p`.
    pub fn add_one(&self) -> Self {
        Self(self.0.add_one())
    }

    /// Returns `self - rhs mod p`.
    pub fn sub(&self, rhs: &Self) -> Self {
        Self(self.0.sub(&rhs.0))
    }

    /// Returns `-self mod p`.
    pub fn negate(&self) -> Self {
        Self(self.0.negate())
    }

    /// Returns `2 * self mod p`.
    pub fn double(&self) -> Self {
        Self(self.0.double())
    }

    /// Returns `self / 2 mod p`.
    pub fn half(&self) -> Self {
        Self(self.0.half())
    }

    /// Returns `self * rhs mod p`.
    pub fn mul(&self, rhs: &Self) -> Self {
        Self(self.0.mul(&rhs.0))
    }

    /// Returns `self * self mod p`.
    pub fn square(&self) -> Self {
        Self(self.0.square())
    }

    /// Returns `self^(2^n) mod p`, i.e. `self` squared `n` times. `n` must be
    /// at least 1.
    pub fn square_n(&self, n: usize) -> Self {
        Self(self.0.square_n(n))
    }

    /// Returns the 512-bit product `self * rhs` as an unreduced accumulator.
    pub fn mul_wide(&self, rhs: &Self) -> WideElement {
        WideElement(self.0.mul_wide(&rhs.0))
    }

    /// Returns the multiplicative inverse of self, if self is non-zero.
    pub fn invert(&self) -> CtOption<Self> {
        CtOption::new(self.invert_unchecked(), !self.is_zero())
    }

    /// Returns the multiplicative inverse of self.
    ///
    /// Does not check that self is non-zero.
    fn invert_unchecked(&self) -> Self {
        // We need to find b such that b * a ≡ 1 mod p. As we are in a prime
        // field, we can apply Fermat's Little Theorem:
        //
        //    a^p         ≡ a mod p
        //    a^(p-1)     ≡ 1 mod p
        //    a^(p-2) * a ≡ 1 mod p
        //
        // Thus inversion can be implemented with a single exponentiation.

        let t111 = self.mul(&self.mul(&self.square()).square());
        let t111111 = t111.mul(&t111.square_n(3));
        let x15 = t111111.square_n(6).mul(&t111111).square_n(3).mul(&t111);
        let x16 = x15.square().mul(self);
        let i53 = x16.square_n(16).mul(&x16).square_n(15);
        let x47 = x15.mul(&i53);
        x47.mul(&i53.square_n(17).mul(self).square_n(143).mul(&x47).square_n(47))
            .square_n(2)
            .mul(self)
    }

    /// Returns the square root of self mod p, or `None` if no square root
    /// exists.
    pub fn sqrt(&self) -> CtOption<Self> {
        // We need to find alpha such that alpha^2 = beta mod p. For secp256r1,
        // p ≡ 3 mod 4. By Euler's Criterion, beta^((p - 1) / 2) ≡ 1 mod p. So:
        //
        //     alpha^2 = beta beta^((p - 1) / 2) mod p ≡ beta^((p + 1) / 2) mod p
        //     alpha = ± beta^((p + 1) / 4) mod p
        //
        // Thus sqrt can be implemented with a single exponentiation.

        let t11 = self.mul(&self.square());
        let t1111 = t11.mul(&t11.square_n(2));
        let t11111111 = t1111.mul(&t1111.square_n(4));
        let x16 = t11111111.square_n(8).mul(&t11111111);
        let sqrt = x16
            .square_n(16)
            .mul(&x16)
            .square_n(32)
            .mul(self)
            .square_n(96)
            .mul(self)
            .square_n(94);

        CtOption::new(
            sqrt,
            sqrt.mul(&sqrt).ct_eq(self), // Only return Some if it's the square root.
        )
    }

    #[cfg(test)]
    pub fn modulus_as_biguint() -> BigUint {
        Self::ONE.negate().to_biguint().unwrap() + 1.to_biguint().unwrap()
    }
}

impl fmt::Debug for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FieldElement(0x")?;
        for word in self.0.0.iter().rev() {
            write!(f, "{word:08X}")?;
        }
        write!(f, ")")
    }
}

impl Default for FieldElement {
    fn default() -> Self {
        Self::ZERO
    }
}

impl PartialEq for FieldElement {
    fn eq(&self, other: &Self) -> bool {
        self.0.ct_eq(&other.0).into()
    }
}

impl ConditionallySelectable for FieldElement {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self(FieldElement8x32::conditional_select(&a.0, &b.0, choice))
    }
}

impl ConstantTimeEq for FieldElement {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl Zeroize for FieldElement {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

impl Add<FieldElement> for FieldElement {
    type Output = FieldElement;

    fn add(self, other: FieldElement) -> FieldElement {
        FieldElement(self.0.add(&other.0))
    }
}

impl Add<&FieldElement> for FieldElement {
    type Output = FieldElement;

    fn add(self, other: &FieldElement) -> FieldElement {
        FieldElement(self.0.add(&other.0))
    }
}

impl Add<&FieldElement> for &FieldElement {
    type Output = FieldElement;

    fn add(self, other: &FieldElement) -> FieldElement {
        FieldElement(self.0.add(&other.0))
    }
}

impl AddAssign<FieldElement> for FieldElement {
    fn add_assign(&mut self, other: FieldElement) {
        *self = *self + &other;
    }
}

impl AddAssign<&FieldElement> for FieldElement {
    fn add_assign(&mut self, other: &FieldElement) {
        *self = *self + other;
    }
}

impl Sub<FieldElement> for FieldElement {
    type Output = FieldElement;

    fn sub(self, other: FieldElement) -> FieldElement {
        FieldElement(self.0.sub(&other.0))
    }
}

impl Sub<&FieldElement> for FieldElement {
    type Output = FieldElement;

    fn sub(self, other: &FieldElement) -> FieldElement {
        FieldElement(self.0.sub(&other.0))
    }
}

impl Sub<&FieldElement> for &FieldElement {
    type Output = FieldElement;

    fn sub(self, other: &FieldElement) -> FieldElement {
        FieldElement(self.0.sub(&other.0))
    }
}

impl SubAssign<FieldElement> for FieldElement {
    fn sub_assign(&mut self, other: FieldElement) {
        *self = *self - &other;
    }
}

impl SubAssign<&FieldElement> for FieldElement {
    fn sub_assign(&mut self, other: &FieldElement) {
        *self = *self - other;
    }
}

impl Mul<FieldElement> for FieldElement {
    type Output = FieldElement;

    fn mul(self, other: FieldElement) -> FieldElement {
        FieldElement(self.0.mul(&other.0))
    }
}

impl Mul<&FieldElement> for FieldElement {
    type Output = FieldElement;

    fn mul(self, other: &FieldElement) -> FieldElement {
        FieldElement(self.0.mul(&other.0))
    }
}

impl Mul<&FieldElement> for &FieldElement {
    type Output = FieldElement;

    fn mul(self, other: &FieldElement) -> FieldElement {
        FieldElement(self.0.mul(&other.0))
    }
}

impl MulAssign<FieldElement> for FieldElement {
    fn mul_assign(&mut self, other: FieldElement) {
        *self = *self * &other;
    }
}

impl MulAssign<&FieldElement> for FieldElement {
    fn mul_assign(&mut self, other: &FieldElement) {
        *self = *self * other;
    }
}

impl Neg for FieldElement {
    type Output = FieldElement;

    fn neg(self) -> FieldElement {
        self.negate()
    }
}

impl Neg for &FieldElement {
    type Output = FieldElement;

    fn neg(self) -> FieldElement {
        self.negate()
    }
}

/// Double-width accumulator for sums and differences of field element
/// products.
///
/// Every operation preserves congruence modulo p while keeping the raw
/// 512-bit value below p * p, so an accumulator built from canonical field
/// elements can always be reduced. Curve formulas use this to fold
/// expressions such as `x1 * y2 + x2 * y1` with a single reduction at the
/// end.
#[derive(Clone, Copy)]
pub struct WideElement(WideElement8x32);

impl WideElement {
    /// Empty accumulator.
    pub const ZERO: Self = Self(WideElement8x32::ZERO);

    /// Returns `self + rhs` as accumulators, congruent modulo p.
    pub fn add(&self, rhs: &Self) -> Self {
        Self(self.0.add(&rhs.0))
    }

    /// Returns `self - rhs` as accumulators, congruent modulo p.
    pub fn sub(&self, rhs: &Self) -> Self {
        Self(self.0.sub(&rhs.0))
    }

    /// Returns the accumulator with the product `x * y` added in.
    pub fn add_product(&self, x: &FieldElement, y: &FieldElement) -> Self {
        Self(self.0.add_product(&x.0, &y.0))
    }

    /// Reduces the accumulator to a canonical field element.
    pub fn reduce(&self) -> FieldElement {
        FieldElement(self.0.reduce())
    }
}

impl fmt::Debug for WideElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WideElement(0x")?;
        for word in self.0.0.iter().rev() {
            write!(f, "{word:08X}")?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    extern crate alloc;

    use super::{FieldElement, WideElement};
    use crate::test_vectors::field::DBL_TEST_VECTORS;
    use alloc::format;
    use hex_literal::hex;
    use num_bigint::{BigUint, ToBigUint};
    use num_traits::cast::ToPrimitive;
    use proptest::prelude::*;
    use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
    use zeroize::Zeroize;

    /// Basepoint x-coordinate, a convenient fixed field element.
    const GX_BYTES: [u8; 32] =
        hex!("6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296");

    /// Basepoint y-coordinate.
    const GY_BYTES: [u8; 32] =
        hex!("4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5");

    const P_BYTES: [u8; 32] =
        hex!("ffffffff00000001000000000000000000000000ffffffffffffffffffffffff");

    fn gx() -> FieldElement {
        FieldElement::from_bytes(&GX_BYTES).unwrap()
    }

    fn gy() -> FieldElement {
        FieldElement::from_bytes(&GY_BYTES).unwrap()
    }

    fn bytes_to_biguint(bytes: &[u8; 32]) -> BigUint {
        BigUint::from_bytes_be(bytes)
    }

    fn biguint_to_bytes(x: &BigUint) -> [u8; 32] {
        let mask = BigUint::from(u8::MAX);
        let mut bytes = [0u8; 32];
        for (i, b) in bytes.iter_mut().enumerate() {
            *b = ((x >> ((31 - i) * 8)) & &mask).to_u8().unwrap();
        }
        bytes
    }

    impl From<&BigUint> for FieldElement {
        fn from(x: &BigUint) -> Self {
            let bytes = biguint_to_bytes(x);
            Self::from_bytes(&bytes).unwrap()
        }
    }

    impl ToBigUint for FieldElement {
        fn to_biguint(&self) -> Option<BigUint> {
            Some(bytes_to_biguint(&self.to_bytes()))
        }
    }

    #[test]
    fn zero_is_additive_identity() {
        let zero = FieldElement::ZERO;
        let one = FieldElement::ONE;
        assert_eq!(zero + &zero, zero);
        assert_eq!(one + &zero, one);
    }

    #[test]
    fn one_is_multiplicative_identity() {
        let one = FieldElement::ONE;
        assert_eq!(one * &one, one);
        assert_eq!(gx() * &one, gx());
    }

    #[test]
    fn from_bytes() {
        assert_eq!(
            FieldElement::from_bytes(&[0; 32]).unwrap(),
            FieldElement::ZERO
        );
        assert_eq!(
            FieldElement::from_bytes(&hex!(
                "0000000000000000000000000000000000000000000000000000000000000001"
            ))
            .unwrap(),
            FieldElement::ONE
        );
        assert!(bool::from(FieldElement::from_bytes(&[0xff; 32]).is_none()));
        assert!(bool::from(FieldElement::from_bytes(&P_BYTES).is_none()));

        // p - 1 is the largest canonical element
        let p_minus_one = hex!("ffffffff00000001000000000000000000000000fffffffffffffffffffffffe");
        assert!(bool::from(FieldElement::from_bytes(&p_minus_one).is_some()));

        // all-ones top word alone does not make a value non-canonical
        let high = hex!("ffffffff00000000000000000000000000000000000000000000000000000000");
        assert!(bool::from(FieldElement::from_bytes(&high).is_some()));
    }

    #[test]
    fn to_bytes() {
        assert_eq!(FieldElement::ZERO.to_bytes(), [0; 32]);
        assert_eq!(
            FieldElement::ONE.to_bytes(),
            hex!("0000000000000000000000000000000000000000000000000000000000000001")
        );
        assert_eq!(gx().to_bytes(), GX_BYTES);
    }

    #[test]
    fn from_bytes_reduced_folds_once() {
        assert_eq!(
            FieldElement::from_bytes_reduced(&P_BYTES),
            FieldElement::ZERO
        );
        assert_eq!(
            FieldElement::from_bytes_reduced(&hex!(
                "ffffffff00000001000000000000000000000001000000000000000000000000"
            )),
            FieldElement::ONE
        );
        assert_eq!(
            FieldElement::from_bytes_reduced(&[0xff; 32]).to_bytes(),
            hex!("00000000fffffffeffffffffffffffffffffffff000000000000000000000000")
        );
        assert_eq!(
            FieldElement::from_bytes_reduced(&hex!(
                "ffffffff000000010000000000000000000000010000000000000000deadbeed"
            ))
            .to_bytes(),
            hex!("00000000000000000000000000000000000000000000000000000000deadbeee")
        );

        // canonical values pass through unchanged
        assert_eq!(FieldElement::from_bytes_reduced(&GX_BYTES), gx());
    }

    #[test]
    fn from_u64_uses_low_words() {
        assert_eq!(FieldElement::from_u64(0), FieldElement::ZERO);
        assert_eq!(FieldElement::from_u64(1), FieldElement::ONE);
        assert_eq!(
            FieldElement::from_u64(u64::MAX).to_bytes(),
            hex!("000000000000000000000000000000000000000000000000ffffffffffffffff")
        );
    }

    #[test]
    fn parity_and_zero_checks() {
        assert!(bool::from(FieldElement::ZERO.is_zero()));
        assert!(!bool::from(FieldElement::ONE.is_zero()));
        assert!(bool::from(FieldElement::ONE.is_odd()));
        assert!(!bool::from(FieldElement::from_u64(6).is_odd()));
        // p - 1 is even
        assert!(!bool::from(FieldElement::ZERO.sub(&FieldElement::ONE).is_odd()));
    }

    #[test]
    fn debug_formats_canonical_hex() {
        assert_eq!(
            format!("{:?}", FieldElement::from_u64(6)),
            "FieldElement(0x0000000000000000000000000000000000000000000000000000000000000006)"
        );
    }

    #[test]
    fn repeated_add() {
        let mut r = FieldElement::from_bytes(&DBL_TEST_VECTORS[0]).unwrap();
        for vector in DBL_TEST_VECTORS {
            assert_eq!(r.to_bytes(), *vector);
            r = r + &r;
        }
    }

    #[test]
    fn repeated_double() {
        let mut r = FieldElement::from_bytes(&DBL_TEST_VECTORS[0]).unwrap();
        for vector in DBL_TEST_VECTORS {
            assert_eq!(r.to_bytes(), *vector);
            r = r.double();
        }
    }

    #[test]
    fn repeated_mul() {
        let mut r = FieldElement::from_bytes(&DBL_TEST_VECTORS[0]).unwrap();
        let two = FieldElement::from_u64(2);
        for vector in DBL_TEST_VECTORS {
            assert_eq!(r.to_bytes(), *vector);
            r = r * &two;
        }
    }

    #[test]
    fn two_times_three_is_six() {
        let two = FieldElement::from_u64(2);
        let three = FieldElement::from_u64(3);
        assert_eq!(two * &three, FieldElement::from_u64(6));
        assert_eq!(three.double(), FieldElement::from_u64(6));
        assert_eq!(two + &two + &two, FieldElement::from_u64(6));
    }

    #[test]
    fn addition_wraps_at_modulus() {
        let p_minus_one = FieldElement::ZERO.sub(&FieldElement::ONE);
        assert_eq!(p_minus_one + &FieldElement::ONE, FieldElement::ZERO);
        assert_eq!(
            p_minus_one + &FieldElement::from_u64(2),
            FieldElement::ONE
        );
        assert_eq!(p_minus_one.add_one(), FieldElement::ZERO);
    }

    #[test]
    fn negation() {
        let two = FieldElement::from_u64(2);
        let neg_two = two.negate();
        assert_eq!(two + &neg_two, FieldElement::ZERO);
        assert_eq!(neg_two.negate(), two);
        assert_eq!(-two, neg_two);
        assert_eq!(FieldElement::ZERO.negate(), FieldElement::ZERO);
    }

    #[test]
    fn subtraction_borrows_from_modulus() {
        let one = FieldElement::ONE;
        let six = FieldElement::from_u64(6);
        assert_eq!(six - &one, FieldElement::from_u64(5));
        assert_eq!(one - &six, FieldElement::from_u64(5).negate());
        assert_eq!(
            (FieldElement::ZERO - &one).to_bytes(),
            hex!("ffffffff00000001000000000000000000000000fffffffffffffffffffffffe")
        );
    }

    #[test]
    fn halving() {
        // 1/2 == (p + 1)/2, the exact halving of an odd value
        assert_eq!(
            FieldElement::ONE.half().to_bytes(),
            hex!("7fffffff80000000800000000000000000000000800000000000000000000000")
        );
        assert_eq!(FieldElement::from_u64(6).half(), FieldElement::from_u64(3));

        let gx = gx();
        assert_eq!(gx.half().double(), gx);
        assert_eq!(gx.double().half(), gx);
    }

    #[test]
    fn multiply_known_answer() {
        assert_eq!(
            (gx() * &gy()).to_bytes(),
            hex!("823cd15f6dd3c71933565064513a6b2bd183e554c6a08622f713ebbbface98be")
        );

        let p_minus_one = FieldElement::ZERO.sub(&FieldElement::ONE);
        assert_eq!(p_minus_one * &p_minus_one, FieldElement::ONE);
        assert_eq!(
            (p_minus_one * &FieldElement::from_u64(2)).to_bytes(),
            hex!("ffffffff00000001000000000000000000000000fffffffffffffffffffffffd")
        );

        let half_of_one = FieldElement::ONE.half();
        assert_eq!(half_of_one * &FieldElement::from_u64(2), FieldElement::ONE);
    }

    #[test]
    fn square_known_answer() {
        assert_eq!(
            gy().square().to_bytes(),
            hex!("55df5d5850f47bad82149139979369fe498a9022a412b5e0bedd2cfc21c3ed91")
        );
        assert_eq!(gx().square(), gx() * &gx());
    }

    #[test]
    fn square_n_composition() {
        let gx = gx();
        assert_eq!(gx.square_n(1), gx.square());
        assert_eq!(gx.square_n(3), gx.square().square().square());
        assert_eq!(
            gx.square_n(3).to_bytes(),
            hex!("6f983c2f000dc90928bd3a82c6af62579978643c7f9b1a4a42827be5f8102011")
        );
    }

    #[test]
    fn invert() {
        assert!(bool::from(FieldElement::ZERO.invert().is_none()));

        let one = FieldElement::ONE;
        assert_eq!(one.invert().unwrap(), one);

        let gx = gx();
        let inv_gx = gx.invert().unwrap();
        assert_eq!(
            inv_gx.to_bytes(),
            hex!("e060cbb088706d5d24936933b69b16ab707d656273744b65664c49e577f35238")
        );
        assert_eq!(gx * &inv_gx, one);

        let two = FieldElement::from_u64(2);
        assert_eq!(two.invert().unwrap(), one.half());
    }

    #[test]
    fn sqrt() {
        let two = FieldElement::from_u64(2);
        let four = two.square();
        assert_eq!(four.sqrt().unwrap(), two);

        assert_eq!(gy().square().sqrt().unwrap(), gy());

        // p ≡ 3 mod 4, so exactly one of a, -a has a square root
        assert!(bool::from(gy().square().negate().sqrt().is_none()));
    }

    #[test]
    fn conditional_select() {
        let a = gx();
        let b = gy();
        assert_eq!(FieldElement::conditional_select(&a, &b, Choice::from(0)), a);
        assert_eq!(FieldElement::conditional_select(&a, &b, Choice::from(1)), b);
    }

    #[test]
    fn constant_time_eq() {
        assert!(bool::from(gx().ct_eq(&gx())));
        assert!(!bool::from(gx().ct_eq(&gy())));
    }

    #[test]
    fn zeroize_clears_value() {
        let mut a = gx();
        a.zeroize();
        assert_eq!(a, FieldElement::ZERO);
    }

    #[test]
    fn wide_product_reduces_to_mul() {
        let prod = gx().mul_wide(&gy()).reduce();
        assert_eq!(prod, gx() * &gy());

        assert_eq!(WideElement::ZERO.reduce(), FieldElement::ZERO);
        assert_eq!(
            WideElement::ZERO.add_product(&gx(), &gy()).reduce(),
            gx() * &gy()
        );
    }

    #[test]
    fn wide_accumulator_folds_sums_of_products() {
        // x1*y2 + x2*y1 with x1 = y2 = gx, x2 = y1 = gy
        let acc = WideElement::ZERO
            .add_product(&gx(), &gy())
            .add_product(&gy(), &gx());
        assert_eq!(acc.reduce(), (gx() * &gy()).double());
        assert_eq!(
            acc.reduce().to_bytes(),
            hex!("0479a2bfdba78e3166aca0c8a274d657a307caa88d410c45ee27d777f59d317d")
        );

        let ab = gx().mul_wide(&gy());
        let cc = gy().mul_wide(&gy());
        assert_eq!(ab.add(&cc).reduce(), (gx() * &gy()) + &gy().square());
        assert_eq!(ab.sub(&cc).reduce(), (gx() * &gy()) - &gy().square());
        assert_eq!(ab.sub(&ab).reduce(), FieldElement::ZERO);
    }

    prop_compose! {
        fn field_element()(bytes in any::<[u8; 32]>()) -> FieldElement {
            FieldElement::from_bytes_reduced(&bytes)
        }
    }

    proptest! {
        #[test]
        fn fuzzy_add(a in field_element(), b in field_element()) {
            let a_bi = a.to_biguint().unwrap();
            let b_bi = b.to_biguint().unwrap();
            let res_bi = (&a_bi + &b_bi) % FieldElement::modulus_as_biguint();
            let res_ref = FieldElement::from(&res_bi);
            assert_eq!(a + &b, res_ref);
        }

        #[test]
        fn fuzzy_sub(a in field_element(), b in field_element()) {
            let m = FieldElement::modulus_as_biguint();
            let a_bi = a.to_biguint().unwrap();
            let b_bi = b.to_biguint().unwrap();
            let res_bi = (&m + &a_bi - &b_bi) % &m;
            let res_ref = FieldElement::from(&res_bi);
            assert_eq!(a - &b, res_ref);
        }

        #[test]
        fn fuzzy_mul(a in field_element(), b in field_element()) {
            let a_bi = a.to_biguint().unwrap();
            let b_bi = b.to_biguint().unwrap();
            let res_bi = (&a_bi * &b_bi) % FieldElement::modulus_as_biguint();
            let res_ref = FieldElement::from(&res_bi);
            assert_eq!(a * &b, res_ref);
        }

        #[test]
        fn fuzzy_square(a in field_element()) {
            let a_bi = a.to_biguint().unwrap();
            let res_bi = (&a_bi * &a_bi) % FieldElement::modulus_as_biguint();
            let res_ref = FieldElement::from(&res_bi);
            assert_eq!(a.square(), res_ref);
        }

        #[test]
        fn fuzzy_negate(a in field_element()) {
            let m = FieldElement::modulus_as_biguint();
            let a_bi = a.to_biguint().unwrap();
            let res_bi = (&m - &a_bi) % &m;
            let res_ref = FieldElement::from(&res_bi);
            assert_eq!(a.negate(), res_ref);
        }

        #[test]
        fn fuzzy_double(a in field_element()) {
            assert_eq!(a.double(), a + &a);
        }

        #[test]
        fn fuzzy_half(a in field_element()) {
            assert_eq!(a.half().double(), a);
            assert_eq!(a.double().half(), a);
        }

        #[test]
        fn fuzzy_add_one(a in field_element()) {
            assert_eq!(a.add_one(), a + &FieldElement::ONE);
        }

        #[test]
        fn fuzzy_square_n(a in field_element(), n in 1usize..8) {
            let mut expected = a;
            for _ in 0..n {
                expected = expected.square();
            }
            assert_eq!(a.square_n(n), expected);
        }

        #[test]
        fn fuzzy_invert(a in field_element()) {
            let a = if bool::from(a.is_zero()) { FieldElement::ONE } else { a };
            let inv = a.invert().unwrap();
            assert_eq!(a * &inv, FieldElement::ONE);
        }

        #[test]
        fn fuzzy_sqrt(a in field_element()) {
            let sqr = a.square();
            let root = sqr.sqrt().unwrap();
            assert!(root == a || root == a.negate());
        }

        #[test]
        fn fuzzy_from_bytes_reduced(bytes in any::<[u8; 32]>()) {
            let a = FieldElement::from_bytes_reduced(&bytes);
            let res_bi = bytes_to_biguint(&bytes) % FieldElement::modulus_as_biguint();
            assert_eq!(a, FieldElement::from(&res_bi));
            // round trip through canonical bytes is lossless
            assert_eq!(FieldElement::from_bytes_reduced(&a.to_bytes()), a);
        }

        #[test]
        fn fuzzy_wide_accumulator(
            a in field_element(),
            b in field_element(),
            c in field_element(),
            d in field_element()
        ) {
            let m = FieldElement::modulus_as_biguint();
            let a_bi = a.to_biguint().unwrap();
            let b_bi = b.to_biguint().unwrap();
            let c_bi = c.to_biguint().unwrap();
            let d_bi = d.to_biguint().unwrap();

            let sum = WideElement::ZERO.add_product(&a, &b).add_product(&c, &d);
            let sum_bi = (&a_bi * &b_bi + &c_bi * &d_bi) % &m;
            assert_eq!(sum.reduce(), FieldElement::from(&sum_bi));

            let diff = a.mul_wide(&b).sub(&c.mul_wide(&d));
            let diff_bi = (&m * &m + &a_bi * &b_bi - &c_bi * &d_bi) % &m;
            assert_eq!(diff.reduce(), FieldElement::from(&diff_bi));

            let folded = a.mul_wide(&b).add(&c.mul_wide(&d));
            assert_eq!(folded.reduce(), FieldElement::from(&sum_bi));
        }
    }
}
