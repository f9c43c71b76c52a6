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
use crate::arith::{addqd, addqq, divqd, mulqd, mulqq, subqd, subqq};
use crate::consts::LOG2;
use crate::double_double::DDouble;
use crate::unary::{ldexp, mul_pwr2, square};

/// ln(f64::MAX), above this `exp` overflows.
pub(crate) const EXP_OVERFLOW: f64 = 709.782712893384;
/// Below this `exp` underflows to zero.
const EXP_UNDERFLOW: f64 = -745.1332191019412;
/// The reduced argument is divided by 2^SQUARINGS and squared back.
const SQUARINGS: usize = 9;
const INV_K: f64 = 1. / 512.;
/// 2^-110, series terms below this fraction of the sum are dropped.
pub(crate) const TAYLOR_CUTOFF: f64 = f64::from_bits(0x3910000000000000);

/// `e^r - 1` for `|r| < 2^-9`.
#[inline]
fn expm1_taylor(r: DDouble) -> DDouble {
    let mut s = r;
    let mut p = r;
    for k in 2..16 {
        p = divqd(mulqq(p, r), k as f64);
        s = addqq(s, p);
        if p.hi.abs() <= s.hi.abs() * TAYLOR_CUTOFF {
            break;
        }
    }
    s
}

/// `e^(r * 512) - 1` from `e^r - 1` by repeated `(1 + s)^2 - 1 = 2s + s^2`.
#[inline]
fn expm1_reduced(r: DDouble) -> DDouble {
    let mut s = expm1_taylor(mul_pwr2(r, INV_K));
    for _ in 0..SQUARINGS {
        s = addqq(mul_pwr2(s, 2.), square(s));
    }
    s
}

/// Exponential.
///
/// `x = m * ln2 + r`, `e^x = 2^m * e^r`, with `e^r` evaluated on `r / 512`.
#[inline]
pub fn exp(a: DDouble) -> DDouble {
    if a.hi.is_nan() {
        return a;
    }
    if a.hi > EXP_OVERFLOW {
        return DDouble::INFINITY;
    }
    if a.hi < EXP_UNDERFLOW {
        return DDouble::ZERO;
    }
    if a.hi == 0. {
        return DDouble::ONE;
    }
    let m = (a.hi / LOG2.hi).round();
    let r = subqq(a, mulqd(LOG2, m));
    let s = addqd(expm1_reduced(r), 1.);
    ldexp(s, m as i32)
}

/// `e^x - 1`, accurate near zero.
#[inline]
pub fn expm1(a: DDouble) -> DDouble {
    if a.hi.is_nan() || a.hi == 0. {
        return a;
    }
    let abs_hi = a.hi.abs();
    if abs_hi < f64::from_bits(0x3930000000000000) {
        // below 2^-108 the quadratic term is already lost
        return a;
    }
    if abs_hi < 0.5 {
        expm1_reduced(a)
    } else {
        subqd(exp(a), 1.)
    }
}

impl DDouble {
    #[inline]
    pub fn exp(self) -> DDouble {
        exp(self)
    }

    #[inline]
    pub fn exp_m1(self) -> DDouble {
        expm1(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{E, LOG2, LOG10};

    const TOL: f64 = 1e-30;

    fn rel_err(value: DDouble, expected: DDouble) -> f64 {
        (subqq(value, expected).hi / expected.hi).abs()
    }

    #[test]
    fn test_exp_constants() {
        assert!(rel_err(exp(DDouble::ONE), E) < TOL, "{:?}", exp(DDouble::ONE));
        let two = exp(LOG2);
        assert_eq!(two.hi, 2.);
        assert!(rel_err(two, DDouble::from_f64(2.)) < TOL);
        assert!(rel_err(exp(LOG10), DDouble::from_f64(10.)) < TOL);
        assert_eq!(exp(DDouble::ZERO).hi, 1.);
        assert_eq!(exp(DDouble::new(-0., 0.)).hi, 1.);
    }

    #[test]
    fn test_exp_symmetry() {
        for &v in &[0.1, 0.5, 1.5, 3.7, 10., 42.25] {
            let x = DDouble::from_f64(v);
            let p = exp(x);
            let n = exp(-x);
            assert!(rel_err(mulqq(p, n), DDouble::ONE) < TOL, "{v}");
            assert!((p.hi - v.exp()).abs() <= v.exp() * 1e-15, "{v}");
        }
    }

    #[test]
    fn test_exp_addition() {
        let a = DDouble::from_f64(1.25);
        let b = DDouble::from_f64(2.5);
        let lhs = exp(addqq(a, b));
        let rhs = mulqq(exp(a), exp(b));
        assert!(rel_err(lhs, rhs) < TOL);
    }

    #[test]
    fn test_exp_limits() {
        assert_eq!(exp(DDouble::from_f64(710.)).hi, f64::INFINITY);
        assert_eq!(exp(DDouble::from_f64(710.)).lo, 0.);
        assert_eq!(exp(DDouble::INFINITY).hi, f64::INFINITY);
        assert_eq!(exp(DDouble::NEG_INFINITY).hi, 0.);
        assert_eq!(exp(DDouble::from_f64(-800.)).hi, 0.);
        assert!(exp(DDouble::NAN).hi.is_nan());
        let r = exp(DDouble::from_f64(709.));
        assert!(r.hi.is_finite());
        assert!((r.hi - 709f64.exp()).abs() <= 709f64.exp() * 1e-15);
        let r = exp(DDouble::from_f64(-740.));
        assert!(r.hi > 0.);
    }

    #[test]
    fn test_expm1_small() {
        let x = DDouble::from_f64(1e-10);
        // x + x^2/2 + x^3/6 + x^4/24
        let x2 = mulqq(x, x);
        let x3 = mulqq(x2, x);
        let x4 = mulqq(x3, x);
        let expected = addqq(
            addqq(x, mul_pwr2(x2, 0.5)),
            addqq(divqd(x3, 6.), divqd(x4, 24.)),
        );
        assert!(rel_err(expm1(x), expected) < TOL);
        let expected_neg = addqq(
            addqq(-x, mul_pwr2(x2, 0.5)),
            subqq(divqd(x4, 24.), divqd(x3, 6.)),
        );
        assert!(rel_err(expm1(-x), expected_neg) < TOL);
    }

    #[test]
    fn test_expm1_matches_exp() {
        for &v in &[-3., -0.4, 0.3, 0.49, 0.5, 2.] {
            let x = DDouble::from_f64(v);
            assert!(rel_err(expm1(x), subqd(exp(x), 1.)) < 1e-29, "{v}");
        }
    }

    #[test]
    fn test_expm1_special() {
        assert!(expm1(DDouble::new(-0., 0.)).hi.is_sign_negative());
        assert_eq!(expm1(DDouble::new(-0., 0.)).hi, 0.);
        assert_eq!(expm1(DDouble::NEG_INFINITY).hi, -1.);
        assert_eq!(expm1(DDouble::INFINITY).hi, f64::INFINITY);
        assert_eq!(expm1(DDouble::from_f64(1e-200)).hi, 1e-200);
    }
}
