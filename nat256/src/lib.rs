#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(
    clippy::mod_module_files,
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]
#![doc = include_str!("../README.md")]

/// Computes `a + b + carry`, returning the result along with the new carry.
#[inline(always)]
pub const fn adc(a: u32, b: u32, carry: u32) -> (u32, u32) {
    let ret = (a as u64) + (b as u64) + (carry as u64);
    (ret as u32, (ret >> 32) as u32)
}

/// Computes `a - (b + borrow)`, returning the result along with the new borrow.
///
/// The borrow is carried in the top bit of the `borrow` argument, and the
/// returned borrow is either zero or all ones.
#[inline(always)]
pub const fn sbb(a: u32, b: u32, borrow: u32) -> (u32, u32) {
    let ret = (a as u64).wrapping_sub((b as u64) + ((borrow >> 31) as u64));
    (ret as u32, (ret >> 32) as u32)
}

/// Computes `a + (b * c) + carry`, returning the result along with the new carry.
#[inline(always)]
pub const fn mac(a: u32, b: u32, c: u32, carry: u32) -> (u32, u32) {
    let ret = (a as u64) + ((b as u64) * (c as u64)) + (carry as u64);
    (ret as u32, (ret >> 32) as u32)
}

/// Computes `x + y`, returning the sum along with the carry bit.
pub const fn add(x: &[u32; 8], y: &[u32; 8]) -> ([u32; 8], u32) {
    let mut z = [0; 8];
    let mut carry = 0;
    let mut i = 0;
    while i < 8 {
        let (w, c) = adc(x[i], y[i], carry);
        z[i] = w;
        carry = c;
        i += 1;
    }
    (z, carry)
}

/// Computes `x - y`, returning the difference along with the borrow bit.
pub const fn sub(x: &[u32; 8], y: &[u32; 8]) -> ([u32; 8], u32) {
    let mut z = [0; 8];
    let mut borrow = 0;
    let mut i = 0;
    while i < 8 {
        let (w, b) = sbb(x[i], y[i], borrow);
        z[i] = w;
        borrow = b;
        i += 1;
    }
    (z, borrow >> 31)
}

/// Computes `x + 1`, returning the sum along with the carry bit.
///
/// Stops rippling as soon as a word does not wrap, so timing depends on the
/// value of `x`.
pub const fn inc(x: &[u32; 8]) -> ([u32; 8], u32) {
    let mut z = *x;
    let mut i = 0;
    while i < 8 {
        z[i] = z[i].wrapping_add(1);
        if z[i] != 0 {
            return (z, 0);
        }
        i += 1;
    }
    (z, 1)
}

/// Returns whether `x >= y`, comparing from the most significant word down
/// and returning at the first word that differs.
pub const fn gte(x: &[u32; 8], y: &[u32; 8]) -> bool {
    let mut i = 8;
    while i > 0 {
        i -= 1;
        if x[i] < y[i] {
            return false;
        }
        if x[i] > y[i] {
            return true;
        }
    }
    true
}

/// Returns whether `x == 0`, returning at the first nonzero word.
pub const fn is_zero(x: &[u32; 8]) -> bool {
    let mut i = 0;
    while i < 8 {
        if x[i] != 0 {
            return false;
        }
        i += 1;
    }
    true
}

/// Computes `(x << 1) | bit`, returning the result along with the bit
/// shifted out of the top.
///
/// Only the low bit of `bit` is shifted in.
pub const fn shift_up_bit(x: &[u32; 8], bit: u32) -> ([u32; 8], u32) {
    let mut z = [0; 8];
    let mut c = bit & 1;
    let mut i = 0;
    while i < 8 {
        let next = x[i];
        z[i] = (next << 1) | c;
        c = next >> 31;
        i += 1;
    }
    (z, c)
}

/// Computes `x >> 1` with `bit` shifted into the top, returning the result
/// along with the bit shifted out of the bottom.
///
/// Only the low bit of `bit` is shifted in.
pub const fn shift_down_bit(x: &[u32; 8], bit: u32) -> ([u32; 8], u32) {
    let mut z = [0; 8];
    let mut c = bit;
    let mut i = 8;
    while i > 0 {
        i -= 1;
        let next = x[i];
        z[i] = (next >> 1) | (c << 31);
        c = next;
    }
    (z, c & 1)
}

/// Computes the 512-bit product `x * y` by schoolbook multiplication.
pub const fn mul_wide(x: &[u32; 8], y: &[u32; 8]) -> [u32; 16] {
    let mut zz = [0; 16];

    let mut carry = 0;
    let mut j = 0;
    while j < 8 {
        let (w, c) = mac(0, x[0], y[j], carry);
        zz[j] = w;
        carry = c;
        j += 1;
    }
    zz[8] = carry;

    let mut i = 1;
    while i < 8 {
        let mut carry = 0;
        let mut j = 0;
        while j < 8 {
            let (w, c) = mac(zz[i + j], x[i], y[j], carry);
            zz[i + j] = w;
            carry = c;
            j += 1;
        }
        zz[i + 8] = carry;
        i += 1;
    }
    zz
}

/// Computes the 512-bit square `x * x`.
///
/// The off-diagonal products are accumulated once and doubled by a whole-array
/// shift before the diagonal terms are added in.
pub const fn square_wide(x: &[u32; 8]) -> [u32; 16] {
    let mut zz = [0; 16];

    let mut i = 1;
    while i < 8 {
        let mut carry = 0;
        let mut j = 0;
        while j < i {
            let (w, c) = mac(zz[i + j], x[i], x[j], carry);
            zz[i + j] = w;
            carry = c;
            j += 1;
        }
        zz[i + i] = carry;
        i += 1;
    }

    let mut bit = 0;
    let mut k = 0;
    while k < 16 {
        let next = zz[k];
        zz[k] = (next << 1) | bit;
        bit = next >> 31;
        k += 1;
    }

    let mut carry = 0;
    let mut i = 0;
    while i < 8 {
        let (w, c) = mac(zz[i + i], x[i], x[i], carry);
        zz[i + i] = w;
        let (w, c) = adc(zz[i + i + 1], 0, c);
        zz[i + i + 1] = w;
        carry = c;
        i += 1;
    }
    zz
}

/// Computes `zz + x * y`, returning the 512-bit accumulator along with the
/// carry bit out of the top.
pub const fn mul_add_wide(x: &[u32; 8], y: &[u32; 8], zz: &[u32; 16]) -> ([u32; 16], u32) {
    let mut zz = *zz;
    let mut zc = 0u64;
    let mut i = 0;
    while i < 8 {
        let mut carry = 0;
        let mut j = 0;
        while j < 8 {
            let (w, c) = mac(zz[i + j], x[i], y[j], carry);
            zz[i + j] = w;
            carry = c;
            j += 1;
        }
        let c = zc + (carry as u64) + (zz[i + 8] as u64);
        zz[i + 8] = c as u32;
        zc = c >> 32;
        i += 1;
    }
    (zz, zc as u32)
}

/// Computes `xx + yy` over 512 bits, returning the sum along with the carry bit.
pub const fn add_wide(xx: &[u32; 16], yy: &[u32; 16]) -> ([u32; 16], u32) {
    let mut zz = [0; 16];
    let mut carry = 0;
    let mut i = 0;
    while i < 16 {
        let (w, c) = adc(xx[i], yy[i], carry);
        zz[i] = w;
        carry = c;
        i += 1;
    }
    (zz, carry)
}

/// Computes `xx - yy` over 512 bits, returning the difference along with the
/// borrow bit.
pub const fn sub_wide(xx: &[u32; 16], yy: &[u32; 16]) -> ([u32; 16], u32) {
    let mut zz = [0; 16];
    let mut borrow = 0;
    let mut i = 0;
    while i < 16 {
        let (w, b) = sbb(xx[i], yy[i], borrow);
        zz[i] = w;
        borrow = b;
        i += 1;
    }
    (zz, borrow >> 31)
}

/// Returns whether `xx >= yy` over 512 bits.
pub const fn gte_wide(xx: &[u32; 16], yy: &[u32; 16]) -> bool {
    let mut i = 16;
    while i > 0 {
        i -= 1;
        if xx[i] < yy[i] {
            return false;
        }
        if xx[i] > yy[i] {
            return true;
        }
    }
    true
}

/// Decodes a big-endian byte string into little-endian words.
pub const fn from_be_bytes(bytes: &[u8; 32]) -> [u32; 8] {
    let mut z = [0; 8];
    let mut i = 0;
    while i < 8 {
        let off = 4 * (7 - i);
        z[i] = u32::from_be_bytes([bytes[off], bytes[off + 1], bytes[off + 2], bytes[off + 3]]);
        i += 1;
    }
    z
}

/// Encodes little-endian words as a big-endian byte string.
pub const fn to_be_bytes(x: &[u32; 8]) -> [u8; 32] {
    let mut bytes = [0; 32];
    let mut i = 0;
    while i < 8 {
        let word = x[7 - i].to_be_bytes();
        let off = 4 * i;
        bytes[off] = word[0];
        bytes[off + 1] = word[1];
        bytes[off + 2] = word[2];
        bytes[off + 3] = word[3];
        i += 1;
    }
    bytes
}
