/*
 * // Copyright (c) Radzivon Bartoshyk 10/2026. All rights reserved.
 * //
 * // Redistribution and use in source and binary forms, with or without modification,
 * // are permitted provided that the following conditions are met:
 * //
 * // 1.  Redistributions of source code must retain the above copyright notice, this
 * // list of conditions and the following disclaimer.
 * //
 * // 2.  Redistributions in binary form must reproduce the above copyright notice,
 * // this list of conditions and the following disclaimer in the documentation
 * // and/or other materials provided with the distribution.
 * //
 * // 3.  Neither the name of the copyright holder nor the names of its
 * // contributors may be used to endorse or promote products derived from
 * // this software without specific prior written permission.
 * //
 * // THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * // AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * // IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * // DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * // FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * // DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * // SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * // CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * // OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * // OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
use crate::arith::{addqd, addqq, divqd, mulqq, subqd, subqq};
use crate::common::{frexp, scalbn};
use crate::consts::PI_2;
use crate::double_double::DDouble;
use crate::eft::two_prod;
use crate::exp::TAYLOR_CUTOFF;
use crate::unary::{negq, square};

/// Third word of π/2, `π/2 ≈ PI_2.hi + PI_2.lo + PI_2_LO2`.
const PI_2_LO2: f64 = f64::from_bits(0xb91f1976b7ed8fbc);

/// 2^28, arguments from here on go through [range_reduction_large].
const SMALL_REDUCTION_LIMIT: f64 = f64::from_bits(0x41b0000000000000);

/// Chunks of 2/π that are multiplied per word of the argument.
const LARGE_REDUCTION_TERMS: usize = 10;

/// Binary digits of 2/π in 24-bit chunks: `2/π = Σ TWO_OVER_PI[k] * 2^(-24 * (k + 1))`.
static TWO_OVER_PI: [u32; 52] = [
    0xa2f983, 0x6e4e44, 0x1529fc, 0x2757d1, 0xf534dd, 0xc0db62, 0x95993c, 0x439041,
    0xfe5163, 0xabdebb, 0xc561b7, 0x246e3a, 0x424dd2, 0xe00649, 0x2eea09, 0xd1921c,
    0xfe1deb, 0x1cb129, 0xa73ee8, 0x8235f5, 0x2ebb44, 0x84e99c, 0x7026b4, 0x5f7e41,
    0x3991d6, 0x398353, 0x39f49c, 0x845f8b, 0xbdf928, 0x3b1ff8, 0x97ffde, 0x05980f,
    0xef2f11, 0x8b5a0a, 0x6d1f6d, 0x367ecf, 0x27cb09, 0xb74f46, 0x3f669e, 0x5fea2d,
    0x7527ba, 0xc7ebe5, 0xf17b3d, 0x0739f7, 0x8a5292, 0xea6bfb, 0x5fb11f, 0x8d5d08,
    0x560330, 0x46fc7b, 0x6babf0, 0xcfbc20,
];

/// Cody-Waite reduction, `a - j * π/2` with π/2 in three words.
///
/// `j * PI_2.hi` and `j * PI_2.lo` are formed exactly, the third word only
/// has to be good to the working precision.
#[inline]
fn range_reduction_small(a: DDouble) -> (DDouble, i64) {
    let j = (a.hi / PI_2.hi).round();
    let t = subqq(a, two_prod(j, PI_2.hi));
    let t = subqq(t, two_prod(j, PI_2.lo));
    let t = subqd(t, j * PI_2_LO2);
    (t, j as i64)
}

/// Payne-Hanek reduction for arguments of any size.
///
/// Each word `w = m * 2^e` of the argument is multiplied by the chunks of
/// 2/π whose products are not multiples of 4, which is all that matters for
/// the quadrant and the fraction. Every partial product is exact and taken
/// modulo 4 before it is summed, so the fraction keeps its full precision
/// however large `a` is.
fn range_reduction_large(a: DDouble) -> (DDouble, i64) {
    let mut frac = DDouble::ZERO;
    let mut q: i64 = 0;
    for w in [a.hi, a.lo] {
        if w == 0. {
            continue;
        }
        let (m, e) = frexp(w);
        // integer mantissa, w = m * 2^e exactly
        let m = m * 9007199254740992.;
        let e = e - 53;
        // chunks before k0 only contribute multiples of 4
        let k0 = if e > 2 { ((e - 2) / 24) as usize } else { 0 };
        for (k, &chunk) in TWO_OVER_PI
            .iter()
            .enumerate()
            .skip(k0)
            .take(LARGE_REDUCTION_TERMS)
        {
            let p = two_prod(m, chunk as f64);
            let shift = e - 24 * (k as i32 + 1);
            frac = addqd(frac, scalbn(p.hi, shift) % 4.);
            frac = addqd(frac, scalbn(p.lo, shift) % 4.);
            let n = frac.hi.round();
            frac = subqd(frac, n);
            q += n as i64;
        }
    }
    let n = frac.hi.round();
    frac = subqd(frac, n);
    q += n as i64;
    (mulqq(frac, PI_2), q)
}

/// Reduces `a` to `t` in about `[-π/4, π/4]` and the quadrant `j` with `a = t + j * π/2 (mod 2π)`.
#[inline]
fn reduce(a: DDouble) -> (DDouble, i64) {
    if a.hi.abs() < SMALL_REDUCTION_LIMIT {
        range_reduction_small(a)
    } else {
        range_reduction_large(a)
    }
}

/// Sine series on the reduced argument.
#[inline]
fn sin_taylor(t: DDouble) -> DDouble {
    if t.hi == 0. {
        return t;
    }
    let t2 = square(t);
    let mut s = t;
    let mut p = t;
    for k in 1..24 {
        let d = (2 * k) * (2 * k + 1);
        p = negq(divqd(mulqq(p, t2), d as f64));
        s = addqq(s, p);
        if p.hi.abs() <= s.hi.abs() * TAYLOR_CUTOFF {
            break;
        }
    }
    s
}

/// Cosine series on the reduced argument.
#[inline]
fn cos_taylor(t: DDouble) -> DDouble {
    if t.hi == 0. {
        return DDouble::ONE;
    }
    let t2 = square(t);
    let mut s = DDouble::ONE;
    let mut p = DDouble::ONE;
    for k in 1..24 {
        let d = (2 * k - 1) * (2 * k);
        p = negq(divqd(mulqq(p, t2), d as f64));
        s = addqq(s, p);
        if p.hi.abs() <= s.hi.abs() * TAYLOR_CUTOFF {
            break;
        }
    }
    s
}

/// Sine, NaN for non-finite input.
#[inline]
pub fn sin(a: DDouble) -> DDouble {
    if !a.hi.is_finite() {
        return DDouble::NAN;
    }
    if a.hi == 0. {
        return a;
    }
    let (t, j) = reduce(a);
    match j.rem_euclid(4) {
        0 => sin_taylor(t),
        1 => cos_taylor(t),
        2 => negq(sin_taylor(t)),
        _ => negq(cos_taylor(t)),
    }
}

/// Cosine, NaN for non-finite input.
#[inline]
pub fn cos(a: DDouble) -> DDouble {
    if !a.hi.is_finite() {
        return DDouble::NAN;
    }
    if a.hi == 0. {
        return DDouble::ONE;
    }
    let (t, j) = reduce(a);
    match j.rem_euclid(4) {
        0 => cos_taylor(t),
        1 => negq(sin_taylor(t)),
        2 => negq(cos_taylor(t)),
        _ => sin_taylor(t),
    }
}

impl DDouble {
    #[inline]
    pub fn sin(self) -> DDouble {
        sin(self)
    }

    #[inline]
    pub fn cos(self) -> DDouble {
        cos(self)
    }
}
