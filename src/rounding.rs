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
//! Rounding to integers.
//!
//! The leading word is rounded first. If it is already integral the fraction,
//! if any, lives in the low word, which is rounded in turn and recombined.
use crate::double_double::DDouble;
use crate::eft::two_sum_quick;

#[inline(always)]
fn recombine(hi: f64, lo: f64) -> DDouble {
    if lo == 0. {
        DDouble::new(hi, 0.)
    } else {
        two_sum_quick(hi, lo)
    }
}

/// Rounds to the nearest integer, ties to even.
#[inline]
pub fn round(a: DDouble) -> DDouble {
    if !a.hi.is_finite() {
        return DDouble::new(a.hi, 0.);
    }
    let hi = a.hi.round_ties_even();
    if hi == a.hi {
        let mut lo = a.lo.round_ties_even();
        if (lo - a.lo).abs() == 0.5 {
            // tie in the low word, the parity of the sum decides
            if (hi % 2. + lo % 2.) % 2. != 0. {
                lo = if lo > a.lo { lo - 1. } else { lo + 1. };
            }
        }
        recombine(hi, lo)
    } else if (hi - a.hi).abs() == 0.5 && a.lo != 0. {
        // `hi` alone is a tie, the low word breaks it
        let up = a.hi + 0.5;
        DDouble::new(if a.lo > 0. { up } else { up - 1. }, 0.)
    } else {
        DDouble::new(hi, 0.)
    }
}

/// Rounds toward negative infinity.
#[inline]
pub fn floor(a: DDouble) -> DDouble {
    if !a.hi.is_finite() {
        return DDouble::new(a.hi, 0.);
    }
    let hi = a.hi.floor();
    if hi == a.hi {
        recombine(hi, a.lo.floor())
    } else {
        DDouble::new(hi, 0.)
    }
}

/// Rounds toward positive infinity.
#[inline]
pub fn ceil(a: DDouble) -> DDouble {
    if !a.hi.is_finite() {
        return DDouble::new(a.hi, 0.);
    }
    let hi = a.hi.ceil();
    if hi == a.hi {
        recombine(hi, a.lo.ceil())
    } else {
        DDouble::new(hi, 0.)
    }
}

/// Rounds toward zero.
#[inline]
pub fn trunc(a: DDouble) -> DDouble {
    if a.hi.is_sign_negative() {
        ceil(a)
    } else {
        floor(a)
    }
}

impl DDouble {
    #[inline]
    pub fn round(self) -> DDouble {
        round(self)
    }

    #[inline]
    pub fn floor(self) -> DDouble {
        floor(self)
    }

    #[inline]
    pub fn ceil(self) -> DDouble {
        ceil(self)
    }

    #[inline]
    pub fn trunc(self) -> DDouble {
        trunc(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_dd(value: DDouble, hi: f64, lo: f64) {
        assert_eq!(value.hi, hi, "{value:?}");
        assert_eq!(value.lo, lo, "{value:?}");
    }

    #[test]
    fn test_floor() {
        assert_dd(floor(DDouble::new(2., -1e-16)), 1., 0.);
        assert_dd(floor(DDouble::new(2., 1e-16)), 2., 0.);
        assert_dd(floor(DDouble::new(2.5, 1e-17)), 2., 0.);
        assert_dd(floor(DDouble::new(-2.5, 1e-17)), -3., 0.);
        let big = DDouble::new(2f64.powi(60), 3.5);
        assert_dd(floor(big), 2f64.powi(60), 3.);
        assert!(floor(DDouble::new(-0., 0.)).hi.is_sign_negative());
        assert_eq!(floor(DDouble::INFINITY).hi, f64::INFINITY);
        assert!(floor(DDouble::NAN).hi.is_nan());
    }

    #[test]
    fn test_ceil() {
        assert_dd(ceil(DDouble::new(2., -1e-16)), 2., 0.);
        assert_dd(ceil(DDouble::new(2., 1e-16)), 3., 0.);
        assert_dd(ceil(DDouble::new(-2.5, 0.)), -2., 0.);
        assert!(ceil(DDouble::new(-0.25, 0.)).hi.is_sign_negative());
        assert_eq!(ceil(DDouble::NEG_INFINITY).hi, f64::NEG_INFINITY);
    }

    #[test]
    fn test_round() {
        assert_dd(round(DDouble::new(2.5, 0.)), 2., 0.);
        assert_dd(round(DDouble::new(3.5, 0.)), 4., 0.);
        assert_dd(round(DDouble::new(2.5, 1e-17)), 3., 0.);
        assert_dd(round(DDouble::new(2.5, -1e-17)), 2., 0.);
        assert_dd(round(DDouble::new(-2.5, -1e-17)), -3., 0.);
        assert_dd(round(DDouble::new(2., -0.4e-16)), 2., 0.);
        assert_dd(round(DDouble::new(1.75, 0.)), 2., 0.);
        let big = 2f64.powi(60);
        assert_dd(round(DDouble::new(big, 0.5)), big, 0.);
        assert_dd(round(DDouble::new(big, 1.5)), big, 2.);
        assert_dd(round(DDouble::new(big + 256., -0.5)), big + 256., 0.);
        assert_dd(round(DDouble::new(big + 256., -1.5)), big + 256., -2.);
    }

    #[test]
    fn test_trunc() {
        assert_dd(trunc(DDouble::new(-2.75, 0.)), -2., 0.);
        assert_dd(trunc(DDouble::new(2.75, 0.)), 2., 0.);
        assert_dd(trunc(DDouble::new(3., -1e-20)), 2., 0.);
    }
}
