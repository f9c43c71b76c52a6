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
use crate::arith::{addqd, divqd, divqq, mulqq, subqq};
use crate::common::{frexp, scalbn};
use crate::double_double::DDouble;
use crate::eft::two_prod;

/// Negation, flips both words.
#[inline]
pub const fn negq(a: DDouble) -> DDouble {
    DDouble::new(-a.hi, -a.lo)
}

/// Unary plus, returns `a` unchanged.
#[inline]
pub const fn posq(a: DDouble) -> DDouble {
    a
}

/// Absolute value, decided by the sign bit of the leading word.
#[inline]
pub const fn absq(a: DDouble) -> DDouble {
    if a.hi.is_sign_negative() { negq(a) } else { a }
}

/// `1 / a`
#[inline]
pub fn reciprocal(a: DDouble) -> DDouble {
    divqq(DDouble::ONE, a)
}

/// `a * a`, same bits as `mulqq(a, a)`.
#[inline]
pub fn square(a: DDouble) -> DDouble {
    mulqq(a, a)
}

/// Square root.
///
/// The hardware root of `hi` is refined by one Newton step
/// `y + (a - y^2) / 2y` evaluated in double-double. Negative input gives NaN,
/// signed zeros are returned as is.
///
/// Arguments far from one are first scaled by an even power of two, so the
/// squared estimate neither overflows near `MAX` nor loses its error term to
/// underflow.
#[inline]
pub fn sqrt(a: DDouble) -> DDouble {
    if a.hi.is_nan() {
        return a;
    }
    if a.hi < 0. {
        return DDouble::NAN;
    }
    if a.hi == 0. || a.hi.is_infinite() {
        return DDouble::new(a.hi, 0.);
    }
    let (_, e) = frexp(a.hi);
    if !(-SQRT_EXP_LIMIT..=SQRT_EXP_LIMIT).contains(&e) {
        let k = e / 2;
        return ldexp(newton_sqrt(ldexp(a, -2 * k)), k);
    }
    newton_sqrt(a)
}

/// Exponents of `hi` handled without scaling.
const SQRT_EXP_LIMIT: i32 = 500;

#[inline]
fn newton_sqrt(a: DDouble) -> DDouble {
    let y0 = a.hi.sqrt();
    let residual = subqq(a, two_prod(y0, y0));
    addqd(divqd(residual, 2. * y0), y0)
}

/// Computes `x * 2^n` on both words.
#[inline]
pub fn ldexp(x: DDouble, n: i32) -> DDouble {
    let hi = scalbn(x.hi, n);
    if DDouble::is_terminal(hi) {
        return DDouble::new(hi, 0.);
    }
    DDouble::new(hi, scalbn(x.lo, n))
}

/// Multiplies by `p`, which must be an exact power of two.
#[inline(always)]
pub(crate) const fn mul_pwr2(x: DDouble, p: f64) -> DDouble {
    DDouble::new(x.hi * p, x.lo * p)
}

impl DDouble {
    #[inline]
    pub const fn abs(self) -> DDouble {
        absq(self)
    }

    #[inline]
    pub fn recip(self) -> DDouble {
        reciprocal(self)
    }

    #[inline]
    pub fn sqr(self) -> DDouble {
        square(self)
    }

    #[inline]
    pub fn sqrt(self) -> DDouble {
        sqrt(self)
    }

    #[inline]
    pub fn ldexp(self, n: i32) -> DDouble {
        ldexp(self, n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::EPS;
    use crate::eft::two_sum;
    use rand::Rng;

    fn rel_err(value: DDouble, expected: DDouble) -> f64 {
        (subqq(value, expected).hi / expected.hi).abs()
    }

    #[test]
    fn test_neg_pos_abs() {
        let x = DDouble::new(-2., 1e-17);
        assert_eq!(negq(x).hi, 2.);
        assert_eq!(negq(x).lo, -1e-17);
        assert_eq!(posq(x).hi, -2.);
        assert_eq!(posq(x).lo, 1e-17);
        assert_eq!(absq(x).hi, 2.);
        assert_eq!(absq(absq(x)).hi, absq(x).hi);
        assert_eq!(absq(absq(x)).lo, absq(x).lo);
        assert!(absq(DDouble::new(-0., 0.)).hi.is_sign_positive());
        assert!(absq(DDouble::NAN).hi.is_nan());
    }

    #[test]
    fn test_abs_is_non_negative() {
        for &v in &[-1e300, -1., -1e-300, 0., 1e-10, 5.] {
            let x = DDouble::new(v, v * 1e-17);
            assert!(absq(x).hi >= 0.);
            let a = absq(x);
            assert_eq!(absq(a).hi, a.hi);
        }
    }

    #[test]
    fn test_reciprocal() {
        let r = reciprocal(DDouble::from_f64(3.));
        assert!(rel_err(r, divqd(DDouble::ONE, 3.)) <= EPS.hi);
        assert_eq!(reciprocal(DDouble::ZERO).hi, f64::INFINITY);
        assert_eq!(reciprocal(DDouble::new(-0., 0.)).hi, f64::NEG_INFINITY);
    }

    #[test]
    fn test_square_matches_mulqq() {
        let x = divqd(DDouble::from_f64(10.), 7.);
        let a = square(x);
        let b = mulqq(x, x);
        assert_eq!(a.hi.to_bits(), b.hi.to_bits());
        assert_eq!(a.lo.to_bits(), b.lo.to_bits());
    }

    #[test]
    fn test_sqrt_two() {
        let two = DDouble::new(2., 0.);
        let r = sqrt(two);
        assert_eq!(r.hi, std::f64::consts::SQRT_2);
        assert!(r.lo != 0.);
        assert!(rel_err(square(r), two) <= EPS.hi, "{:?}", square(r));
    }

    #[test]
    fn test_sqrt_squares_back() {
        for &v in &[3., 0.5, 1e-200, 1e300, 123456.789, 1. / 3.] {
            let x = DDouble::new(v, 0.);
            let r = sqrt(x);
            assert!(rel_err(square(r), x) <= 2. * EPS.hi, "{v}");
        }
    }

    #[test]
    fn test_sqrt_special() {
        assert!(sqrt(DDouble::from_f64(-1.)).hi.is_nan());
        assert!(sqrt(DDouble::NAN).hi.is_nan());
        let nz = sqrt(DDouble::new(-0., 0.));
        assert_eq!(nz.hi, 0.);
        assert!(nz.hi.is_sign_negative());
        assert_eq!(sqrt(DDouble::INFINITY).hi, f64::INFINITY);
        assert_eq!(sqrt(DDouble::from_f64(16.)).hi, 4.);
        assert_eq!(sqrt(DDouble::from_f64(16.)).lo, 0.);
    }

    #[test]
    fn test_sqrt_near_range_limits() {
        let r = sqrt(DDouble::from_f64(f64::MAX));
        assert!(r.hi.is_finite() && r.lo.is_finite(), "{r:?}");
        let expected = DDouble::new(1.3407807929942596e154, 7.442828536787015e137);
        assert!(rel_err(r, expected) <= EPS.hi, "{r:?}");
        let r = sqrt(crate::consts::MAX);
        assert!(r.hi.is_finite() && r.lo.is_finite(), "{r:?}");
        let expected = DDouble::new(1.3407807929942597e154, -3.721414268393508e137);
        assert!(rel_err(r, expected) <= EPS.hi, "{r:?}");
        // 2^-1074
        let r = sqrt(DDouble::from_f64(f64::from_bits(1)));
        assert_eq!(r.hi, 2f64.powi(-537));
        assert_eq!(r.lo, 0.);
        let r = sqrt(DDouble::from_f64(1e-310));
        let expected = DDouble::new(9.999999999999986e-156, -9.277065027753207e-172);
        assert!(rel_err(r, expected) <= EPS.hi, "{r:?}");
        let r = sqrt(DDouble::from_f64(1e-300));
        let expected = DDouble::new(1e-150, 6.234187685431415e-168);
        assert!(rel_err(r, expected) <= EPS.hi, "{r:?}");
    }

    #[test]
    fn test_sqrt_random() {
        let mut rng = rand::rng();
        for _ in 0..10_000 {
            let a = rng.random_range(1.0..2.0) * 2f64.powi(rng.random_range(-1000..=1000));
            let x = two_sum(a, rng.random_range(-1.0..1.0) * a * f64::EPSILON * 0.5);
            let r = sqrt(x);
            let half_ulp = scalbn(1., frexp(r.hi).1 - 54);
            assert!(r.lo.abs() <= half_ulp, "{x:?} {r:?}");
            // squaring back is checked away from the range limits
            if (-900..=900).contains(&frexp(x.hi).1) {
                assert!(rel_err(square(r), x) <= 2. * EPS.hi, "{x:?} {r:?}");
            }
        }
    }

    #[test]
    fn test_ldexp() {
        let x = divqd(DDouble::ONE, 3.);
        let r = ldexp(x, 10);
        assert_eq!(r.hi, x.hi * 1024.);
        assert_eq!(r.lo, x.lo * 1024.);
        let r = ldexp(DDouble::ONE, 1024);
        assert_eq!(r.hi, f64::INFINITY);
        assert_eq!(r.lo, 0.);
        assert_eq!(ldexp(DDouble::ONE, -2000).hi, 0.);
    }
}
