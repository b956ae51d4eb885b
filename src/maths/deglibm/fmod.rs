//! Exact reduction of an angle in degrees modulo one full turn.
//!
//! Specialization of the shift-and-subtract fmod algorithm to the fixed
//! divisor 360.0. The remainder is exact and keeps the sign of the input,
//! so signed zeros survive the reduction and a negative multiple of 360
//! comes out as -0.0.

use super::f64_from_bits;

const SIGN_MASK: u64 = 0x8000_0000_0000_0000u64;
const EXP_MASK: u64 = 0x7ff0_0000_0000_0000u64;
const IMPLICIT_BIT: u64 = 0x0010_0000_0000_0000u64;
const SIG_BITS: u32 = 52;

// 360.0
const TURN_BITS: u64 = 0x4076_8000_0000_0000u64;

#[inline(always)]
fn into_sig_exp(bits: u64) -> (u64, u32) {
    let sat = bits.saturating_sub(IMPLICIT_BIT);
    (bits - (sat & EXP_MASK), (sat >> SIG_BITS) as u32)
}

#[inline(always)]
fn reduction(mut x: u64, mut e: u32, y: u64) -> u64 {
    if x >= y {
        x %= y;
    }
    if e <= 8 {
        for _ in 0..e {
            x <<= 1;
            if x >= y {
                x -= y;
            }
        }
        return x;
    }
    while e > 63 {
        x = (((x as u128) << 63) % (y as u128)) as u64;
        e -= 63;
    }
    if e > 0 {
        x = (((x as u128) << e) % (y as u128)) as u64;
    }
    x
}

/// fmod(x, 360.0) for finite x. NaN and infinity are rejected by the callers
/// before the reduction runs.
#[inline(always)]
pub(super) fn fmod360(x: f64) -> f64 {
    let sx = x.to_bits() & SIGN_MASK;
    let ux = x.to_bits() & !SIGN_MASK;

    if ux < TURN_BITS {
        return x;
    }

    let (num, ex) = into_sig_exp(ux);
    let (div, ey) = into_sig_exp(TURN_BITS);
    let rem = reduction(num, ex - ey, div);

    if rem == 0 {
        return f64_from_bits(sx);
    }

    let ilog = 63 - rem.leading_zeros();
    let shift = ey.min(SIG_BITS - ilog);
    let bits = (rem << shift) + (((ey - shift) as u64) << SIG_BITS);
    f64_from_bits(sx | bits)
}
