//! Field arithmetic modulo p = 2^256 - 2^224 + 2^192 + 2^96 - 1 using eight
//! saturated 32-bit limbs.

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};
use zeroize::Zeroize;

/// Little-endian words of the field modulus p.
pub(crate) const P: [u32; 8] = [
    0xFFFF_FFFF,
    0xFFFF_FFFF,
    0xFFFF_FFFF,
    0x0000_0000,
    0x0000_0000,
    0x0000_0000,
    0x0000_0001,
    0xFFFF_FFFF,
];

/// Little-endian words of p * p, the bound maintained on double-width
/// accumulators.
pub(crate) const P_EXT: [u32; 16] = [
    0x0000_0001,
    0x0000_0000,
    0x0000_0000,
    0xFFFF_FFFE,
    0xFFFF_FFFF,
    0xFFFF_FFFF,
    0xFFFF_FFFE,
    0x0000_0001,
    0xFFFF_FFFE,
    0x0000_0001,
    0xFFFF_FFFE,
    0x0000_0001,
    0x0000_0001,
    0xFFFF_FFFE,
    0x0000_0002,
    0xFFFF_FFFE,
];

/// Fast screen on the top accumulator word: values below p * p always pass,
/// so the full 16-word comparison runs only near the bound.
const P_EXT_TOP_SHIFTED: u32 = P_EXT[15] >> 1;

/// Element of the P-256 base field, held as eight saturated 32-bit limbs in
/// little-endian order and always fully reduced below the modulus.
#[derive(Clone, Copy, Debug, Default)]
pub struct FieldElement8x32(pub(crate) [u32; 8]);

impl FieldElement8x32 {
    /// Zero element.
    pub const ZERO: Self = Self([0, 0, 0, 0, 0, 0, 0, 0]);

    /// Multiplicative identity.
    pub const ONE: Self = Self([1, 0, 0, 0, 0, 0, 0, 0]);

    /// Parses the given byte array as a big-endian integer without checking
    /// that it is within the field.
    pub const fn from_bytes_unchecked(bytes: &[u8; 32]) -> Self {
        Self(nat256::from_be_bytes(bytes))
    }

    /// Parses the given byte array as a big-endian integer.
    ///
    /// Returns `None` if the integer is not in the range `[0, p)`.
    pub fn from_bytes(bytes: &[u8; 32]) -> CtOption<Self> {
        let res = Self::from_bytes_unchecked(bytes);
        let (_, borrow) = nat256::sub(&res.0, &P);
        CtOption::new(res, Choice::from(borrow as u8))
    }

    /// Parses the given byte array as a big-endian integer and reduces it
    /// into the field.
    ///
    /// A single conditional subtraction suffices: every 256-bit value is
    /// below 2p.
    pub fn from_bytes_reduced(bytes: &[u8; 32]) -> Self {
        let mut z = nat256::from_be_bytes(bytes);
        if z[7] == P[7] && nat256::gte(&z, &P) {
            z = nat256::sub(&z, &P).0;
        }
        Self(z)
    }

    /// Converts the given small integer into a field element.
    pub const fn from_u64(val: u64) -> Self {
        Self([val as u32, (val >> 32) as u32, 0, 0, 0, 0, 0, 0])
    }

    /// Returns the big-endian encoding of this field element.
    pub const fn to_bytes(&self) -> [u8; 32] {
        nat256::to_be_bytes(&self.0)
    }

    /// Returns `Choice(1)` if this element is zero.
    pub fn is_zero(&self) -> Choice {
        Choice::from(
            ((self.0[0]
                | self.0[1]
                | self.0[2]
                | self.0[3]
                | self.0[4]
                | self.0[5]
                | self.0[6]
                | self.0[7])
                == 0) as u8,
        )
    }

    /// Returns `Choice(1)` if this element is odd.
    pub fn is_odd(&self) -> Choice {
        (self.0[0] as u8 & 1).into()
    }

    /// Returns `self + rhs mod p`.
    pub fn add(&self, rhs: &Self) -> Self {
        let (mut z, carry) = nat256::add(&self.0, &rhs.0);
        if carry != 0 || (z[7] == P[7] && nat256::gte(&z, &P)) {
            add_p_inv_to(&mut z);
        }
        Self(z)
    }

    /// Returns `self + 1 mod p`.
    pub fn add_one(&self) -> Self {
        let (mut z, carry) = nat256::inc(&self.0);
        if carry != 0 || (z[7] == P[7] && nat256::gte(&z, &P)) {
            add_p_inv_to(&mut z);
        }
        Self(z)
    }

    /// Returns `self - rhs mod p`.
    pub fn sub(&self, rhs: &Self) -> Self {
        let (mut z, borrow) = nat256::sub(&self.0, &rhs.0);
        if borrow != 0 {
            sub_p_inv_from(&mut z);
        }
        Self(z)
    }

    /// Returns `-self mod p`.
    pub fn negate(&self) -> Self {
        if nat256::is_zero(&self.0) {
            Self::ZERO
        } else {
            Self(nat256::sub(&P, &self.0).0)
        }
    }

    /// Returns `2 * self mod p`.
    pub fn double(&self) -> Self {
        let (mut z, carry) = nat256::shift_up_bit(&self.0, 0);
        if carry != 0 || (z[7] == P[7] && nat256::gte(&z, &P)) {
            add_p_inv_to(&mut z);
        }
        Self(z)
    }

    /// Returns `self / 2 mod p`.
    ///
    /// Odd values are made even by adding p (tracking the carry bit into the
    /// shift) so the halving is exact.
    pub fn half(&self) -> Self {
        if self.0[0] & 1 == 0 {
            Self(nat256::shift_down_bit(&self.0, 0).0)
        } else {
            let (sum, carry) = nat256::add(&self.0, &P);
            Self(nat256::shift_down_bit(&sum, carry).0)
        }
    }

    /// Returns `self * rhs mod p`.
    pub fn mul(&self, rhs: &Self) -> Self {
        Self(reduce(&nat256::mul_wide(&self.0, &rhs.0)))
    }

    /// Returns `self * self mod p`.
    pub fn square(&self) -> Self {
        Self(reduce(&nat256::square_wide(&self.0)))
    }

    /// Returns `self^(2^n) mod p`, i.e. `self` squared `n` times. `n` must be
    /// at least 1.
    pub fn square_n(&self, n: usize) -> Self {
        debug_assert!(n >= 1);
        let mut z = self.square();
        for _ in 1..n {
            z = z.square();
        }
        z
    }

    /// Returns the 512-bit product `self * rhs` as an unreduced accumulator.
    pub fn mul_wide(&self, rhs: &Self) -> WideElement8x32 {
        WideElement8x32(nat256::mul_wide(&self.0, &rhs.0))
    }
}

impl ConditionallySelectable for FieldElement8x32 {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self([
            u32::conditional_select(&a.0[0], &b.0[0], choice),
            u32::conditional_select(&a.0[1], &b.0[1], choice),
            u32::conditional_select(&a.0[2], &b.0[2], choice),
            u32::conditional_select(&a.0[3], &b.0[3], choice),
            u32::conditional_select(&a.0[4], &b.0[4], choice),
            u32::conditional_select(&a.0[5], &b.0[5], choice),
            u32::conditional_select(&a.0[6], &b.0[6], choice),
            u32::conditional_select(&a.0[7], &b.0[7], choice),
        ])
    }
}

impl ConstantTimeEq for FieldElement8x32 {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0[0].ct_eq(&other.0[0])
            & self.0[1].ct_eq(&other.0[1])
            & self.0[2].ct_eq(&other.0[2])
            & self.0[3].ct_eq(&other.0[3])
            & self.0[4].ct_eq(&other.0[4])
            & self.0[5].ct_eq(&other.0[5])
            & self.0[6].ct_eq(&other.0[6])
            & self.0[7].ct_eq(&other.0[7])
    }
}

impl Zeroize for FieldElement8x32 {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

/// Double-width accumulator holding a 512-bit value below p * p, so that it
/// always remains a valid input to [`reduce`].
#[derive(Clone, Copy, Debug)]
pub struct WideElement8x32(pub(crate) [u32; 16]);

impl WideElement8x32 {
    /// Empty accumulator.
    pub const ZERO: Self = Self([0; 16]);

    /// Accumulator addition, congruent to `self + rhs` modulo p and kept
    /// below p * p by at most one correction.
    pub fn add(&self, rhs: &Self) -> Self {
        let (mut zz, carry) = nat256::add_wide(&self.0, &rhs.0);
        if carry != 0 || ((zz[15] >> 1) >= P_EXT_TOP_SHIFTED && nat256::gte_wide(&zz, &P_EXT)) {
            zz = nat256::sub_wide(&zz, &P_EXT).0;
        }
        Self(zz)
    }

    /// Accumulator subtraction, congruent to `self - rhs` modulo p and kept
    /// below p * p by at most one correction.
    pub fn sub(&self, rhs: &Self) -> Self {
        let (mut zz, borrow) = nat256::sub_wide(&self.0, &rhs.0);
        if borrow != 0 {
            zz = nat256::add_wide(&zz, &P_EXT).0;
        }
        Self(zz)
    }

    /// Adds the 512-bit product `x * y` into the accumulator, congruent
    /// modulo p and kept below p * p by at most one correction.
    pub fn add_product(&self, x: &FieldElement8x32, y: &FieldElement8x32) -> Self {
        let (mut zz, carry) = nat256::mul_add_wide(&x.0, &y.0, &self.0);
        if carry != 0 || ((zz[15] >> 1) >= P_EXT_TOP_SHIFTED && nat256::gte_wide(&zz, &P_EXT)) {
            zz = nat256::sub_wide(&zz, &P_EXT).0;
        }
        Self(zz)
    }

    /// Reduces the accumulator to a canonical field element.
    pub fn reduce(&self) -> FieldElement8x32 {
        FieldElement8x32(reduce(&self.0))
    }
}

/// Reduces a 512-bit value below p * p to a canonical field element.
///
/// The high words fold into the low ones through the congruence
/// 2^256 ≡ 2^224 - 2^192 - 2^96 + 1 (mod p), with each output word's
/// contributions gathered in a signed 64-bit carry chain. xx[8] is biased
/// by -6 before folding, which keeps the carry out of the chain
/// non-negative; the bias itself flows back through the final overflow word,
/// whose own coefficient pattern equals 2^256 - p.
fn reduce(xx: &[u32; 16]) -> [u32; 8] {
    const N: i64 = 6;

    let xx08 = (xx[8] as i64) - N;
    let xx09 = xx[9] as i64;
    let xx10 = xx[10] as i64;
    let xx11 = xx[11] as i64;
    let xx12 = xx[12] as i64;
    let xx13 = xx[13] as i64;
    let xx14 = xx[14] as i64;
    let xx15 = xx[15] as i64;

    let t0 = xx08 + xx09;
    let t1 = xx09 + xx10;
    let t2 = xx10 + xx11 - xx15;
    let t3 = xx11 + xx12;
    let t4 = xx12 + xx13;
    let t5 = xx13 + xx14;
    let t6 = xx14 + xx15;
    let t7 = t5 - t0;

    let mut z = [0u32; 8];
    let mut cc = 0i64;
    cc += (xx[0] as i64) - t3 - t7;
    z[0] = cc as u32;
    cc >>= 32;
    cc += (xx[1] as i64) + t1 - t4 - t6;
    z[1] = cc as u32;
    cc >>= 32;
    cc += (xx[2] as i64) + t2 - t5;
    z[2] = cc as u32;
    cc >>= 32;
    cc += (xx[3] as i64) + (t3 << 1) + t7 - t6;
    z[3] = cc as u32;
    cc >>= 32;
    cc += (xx[4] as i64) + (t4 << 1) + xx14 - t1;
    z[4] = cc as u32;
    cc >>= 32;
    cc += (xx[5] as i64) + (t5 << 1) - t2;
    z[5] = cc as u32;
    cc >>= 32;
    cc += (xx[6] as i64) + (t6 << 1) + t7;
    z[6] = cc as u32;
    cc >>= 32;
    cc += (xx[7] as i64) + (xx15 << 1) + xx08 - t2 - t4;
    z[7] = cc as u32;
    cc >>= 32;

    debug_assert!(cc + N >= 0);
    reduce32((cc + N) as u32, &mut z);
    z
}

/// Reduces `x * 2^256 + z` to a canonical field element, for a small
/// overflow word `x`.
///
/// Adds `x * (2^256 - p)` into `z`, skipping the two ripple segments that
/// only matter while a carry is pending, then applies at most one further
/// correction.
fn reduce32(x: u32, z: &mut [u32; 8]) {
    let mut cc = 0i64;

    if x != 0 {
        let xx08 = x as i64;

        cc += (z[0] as i64) + xx08;
        z[0] = cc as u32;
        cc >>= 32;
        if cc != 0 {
            cc += z[1] as i64;
            z[1] = cc as u32;
            cc >>= 32;
            cc += z[2] as i64;
            z[2] = cc as u32;
            cc >>= 32;
        }
        cc += (z[3] as i64) - xx08;
        z[3] = cc as u32;
        cc >>= 32;
        if cc != 0 {
            cc += z[4] as i64;
            z[4] = cc as u32;
            cc >>= 32;
            cc += z[5] as i64;
            z[5] = cc as u32;
            cc >>= 32;
        }
        cc += (z[6] as i64) - xx08;
        z[6] = cc as u32;
        cc >>= 32;
        cc += (z[7] as i64) + xx08;
        z[7] = cc as u32;
        cc >>= 32;
    }

    if cc != 0 || (z[7] == P[7] && nat256::gte(z, &P)) {
        add_p_inv_to(z);
    }
}

/// Adds `2^256 - p` (the word pattern +1, -1, -1, +1 at words 0, 3, 6, 7)
/// into `z`, rippling through the all-ones segments of p only while a carry
/// is pending.
fn add_p_inv_to(z: &mut [u32; 8]) {
    let mut c = (z[0] as i64) + 1;
    z[0] = c as u32;
    c >>= 32;
    if c != 0 {
        c += z[1] as i64;
        z[1] = c as u32;
        c >>= 32;
        c += z[2] as i64;
        z[2] = c as u32;
        c >>= 32;
    }
    c += (z[3] as i64) - 1;
    z[3] = c as u32;
    c >>= 32;
    if c != 0 {
        c += z[4] as i64;
        z[4] = c as u32;
        c >>= 32;
        c += z[5] as i64;
        z[5] = c as u32;
        c >>= 32;
    }
    c += (z[6] as i64) - 1;
    z[6] = c as u32;
    c >>= 32;
    c += (z[7] as i64) + 1;
    z[7] = c as u32;
}

/// Subtracts `2^256 - p` from `z`, the mirror of [`add_p_inv_to`].
fn sub_p_inv_from(z: &mut [u32; 8]) {
    let mut c = (z[0] as i64) - 1;
    z[0] = c as u32;
    c >>= 32;
    if c != 0 {
        c += z[1] as i64;
        z[1] = c as u32;
        c >>= 32;
        c += z[2] as i64;
        z[2] = c as u32;
        c >>= 32;
    }
    c += (z[3] as i64) + 1;
    z[3] = c as u32;
    c >>= 32;
    if c != 0 {
        c += z[4] as i64;
        z[4] = c as u32;
        c >>= 32;
        c += z[5] as i64;
        z[5] = c as u32;
        c >>= 32;
    }
    c += (z[6] as i64) + 1;
    z[6] = c as u32;
    c >>= 32;
    c += (z[7] as i64) - 1;
    z[7] = c as u32;
}
