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
use crate::arith::{addqd, addqq, divqq, mulqq, subqq};
use crate::double_double::DDouble;
use crate::exp::{exp, expm1};
use crate::extrema::copysignqd;
use crate::unary::{absq, mul_pwr2, reciprocal};

/// Above this `e^x` alone would overflow before halving.
const HALF_EXP_THRESHOLD: f64 = 700.;
/// `tanh` is `±1` to double-double precision above this.
const TANH_SATURATION: f64 = 40.;

/// `e^x / 2` for large `x`, evaluated as `e^(x/2) * (e^(x/2) / 2)` to stay finite.
#[inline]
fn half_exp_large(x: DDouble) -> DDouble {
    let h = exp(mul_pwr2(x, 0.5));
    mulqq(h, mul_pwr2(h, 0.5))
}

/// Hyperbolic sine, odd, keeps the sign of zero.
#[inline]
pub fn sinh(a: DDouble) -> DDouble {
    if a.hi.is_nan() || a.hi == 0. || a.hi.is_infinite() {
        return a;
    }
    let x = absq(a);
    let r = if x.hi < 1. {
        // (e^x - e^-x) / 2 with e = e^x - 1
        let e = expm1(x);
        mul_pwr2(addqq(e, divqq(e, addqd(e, 1.))), 0.5)
    } else if x.hi < HALF_EXP_THRESHOLD {
        let e = exp(x);
        mul_pwr2(subqq(e, reciprocal(e)), 0.5)
    } else {
        half_exp_large(x)
    };
    copysignqd(r, a.hi)
}

/// Hyperbolic cosine.
#[inline]
pub fn cosh(a: DDouble) -> DDouble {
    if a.hi.is_nan() {
        return a;
    }
    let x = absq(a);
    if x.hi < HALF_EXP_THRESHOLD {
        let e = exp(x);
        mul_pwr2(addqq(e, reciprocal(e)), 0.5)
    } else {
        half_exp_large(x)
    }
}

/// Hyperbolic tangent, odd, keeps the sign of zero.
#[inline]
pub fn tanh(a: DDouble) -> DDouble {
    if a.hi.is_nan() || a.hi == 0. {
        return a;
    }
    let x = absq(a);
    let r = if x.hi > TANH_SATURATION {
        DDouble::ONE
    } else {
        // (e^2x - 1) / (e^2x + 1)
        let e = expm1(mul_pwr2(x, 2.));
        divqq(e, addqd(e, 2.))
    };
    copysignqd(r, a.hi)
}

impl DDouble {
    #[inline]
    pub fn sinh(self) -> DDouble {
        sinh(self)
    }

    #[inline]
    pub fn cosh(self) -> DDouble {
        cosh(self)
    }

    #[inline]
    pub fn tanh(self) -> DDouble {
        tanh(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arith::subqd;
    use crate::consts::E;
    use crate::unary::square;

    const TOL: f64 = 1e-30;

    fn rel_err(value: DDouble, expected: DDouble) -> f64 {
        (subqq(value, expected).hi / expected.hi).abs()
    }

    #[test]
    fn test_at_one() {
        let inv_e = reciprocal(E);
        let expected_sinh = mul_pwr2(subqq(E, inv_e), 0.5);
        let expected_cosh = mul_pwr2(addqq(E, inv_e), 0.5);
        assert!(rel_err(sinh(DDouble::ONE), expected_sinh) < TOL);
        assert!(rel_err(cosh(DDouble::ONE), expected_cosh) < TOL);
        assert!(rel_err(tanh(DDouble::ONE), divqq(expected_sinh, expected_cosh)) < TOL);
    }

    #[test]
    fn test_hyperbolic_identity() {
        for &v in &[-30., -2.5, -0.75, -1e-3, 1e-8, 0.2, 0.99, 1.01, 6.] {
            let x = DDouble::from_f64(v);
            let s = sinh(x);
            let c = cosh(x);
            let one = subqq(square(c), square(s));
            assert!((subqd(one, 1.).hi).abs() < 1e-30 * c.hi * c.hi, "{v}");
            assert!(rel_err(tanh(x), divqq(s, c)) < TOL, "{v}");
            assert!((s.hi - v.sinh()).abs() <= v.sinh().abs() * 1e-15, "{v}");
            assert!((c.hi - v.cosh()).abs() <= v.cosh() * 1e-15, "{v}");
        }
    }

    #[test]
    fn test_small_sinh() {
        // sinh(x) = x + x^3/6 for tiny x
        let x = DDouble::from_f64(1e-9);
        let expected = addqq(x, crate::arith::divqd(mulqq(square(x), x), 6.));
        assert!(rel_err(sinh(x), expected) < TOL);
    }

    #[test]
    fn test_odd_and_even() {
        for &v in &[0.4, 3., 25.] {
            let x = DDouble::from_f64(v);
            assert_eq!(sinh(-x).hi, -sinh(x).hi);
            assert_eq!(tanh(-x).hi, -tanh(x).hi);
            assert_eq!(cosh(-x).hi, cosh(x).hi);
        }
    }

    #[test]
    fn test_large_arguments() {
        let r = sinh(DDouble::from_f64(710.));
        assert!(r.hi.is_finite());
        assert!((r.hi - 710f64.sinh()).abs() <= 710f64.sinh() * 1e-14);
        let r = cosh(DDouble::from_f64(-710.));
        assert!(r.hi.is_finite());
        assert_eq!(cosh(DDouble::from_f64(711.)).hi, f64::INFINITY);
        assert_eq!(cosh(DDouble::from_f64(1e4)).lo, 0.);
        assert_eq!(sinh(DDouble::from_f64(-1e4)).hi, f64::NEG_INFINITY);
        assert_eq!(tanh(DDouble::from_f64(100.)).hi, 1.);
        assert_eq!(tanh(DDouble::from_f64(-100.)).hi, -1.);
        assert_eq!(tanh(DDouble::NEG_INFINITY).hi, -1.);
    }

    #[test]
    fn test_special() {
        let nz = DDouble::new(-0., 0.);
        assert!(sinh(nz).hi.is_sign_negative() && sinh(nz).hi == 0.);
        assert!(tanh(nz).hi.is_sign_negative() && tanh(nz).hi == 0.);
        assert_eq!(cosh(nz).hi, 1.);
        assert_eq!(sinh(DDouble::INFINITY).hi, f64::INFINITY);
        assert_eq!(cosh(DDouble::NEG_INFINITY).hi, f64::INFINITY);
        assert!(sinh(DDouble::NAN).hi.is_nan());
        assert!(cosh(DDouble::NAN).hi.is_nan());
        assert!(tanh(DDouble::NAN).hi.is_nan());
    }
}
