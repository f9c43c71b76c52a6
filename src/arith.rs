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
//! Double-double arithmetic with plain `f64` and double-double operands.
use crate::double_double::DDouble;
use crate::eft::{two_diff, two_prod, two_sum, two_sum_quick};
use crate::mlaf::mlaf;
use crate::unary::mul_pwr2;

/// 2^1000, larger dividends are scaled down so `quotient * divisor` stays finite.
const DIV_SCALE_THRESHOLD: f64 = f64::from_bits(0x7e70000000000000);
/// 2^-64
const DIV_DOWN: f64 = f64::from_bits(0x3bf0000000000000);
/// 2^64
const DIV_UP: f64 = f64::from_bits(0x43f0000000000000);

/// Double-double plus double.
#[inline]
pub fn addqd(x: DDouble, y: f64) -> DDouble {
    let s = two_sum(x.hi, y);
    if !s.hi.is_finite() {
        return DDouble::new(s.hi, 0.);
    }
    let v = x.lo + s.lo;
    DDouble::renormalize(s.hi, v)
}

/// Double plus double-double.
#[inline]
pub fn adddq(x: f64, y: DDouble) -> DDouble {
    addqd(y, x)
}

/// Double-double minus double.
#[inline]
pub fn subqd(x: DDouble, y: f64) -> DDouble {
    addqd(x, -y)
}

/// Double minus double-double.
#[inline]
pub fn subdq(x: f64, y: DDouble) -> DDouble {
    addqd(DDouble::new(-y.hi, -y.lo), x)
}

/// Double-double times double.
#[inline]
pub fn mulqd(x: DDouble, y: f64) -> DDouble {
    let c = two_prod(x.hi, y);
    if DDouble::is_terminal(c.hi) {
        return DDouble::new(c.hi, 0.);
    }
    let v = mlaf(c.lo, x.lo, y);
    DDouble::renormalize(c.hi, v)
}

/// Double times double-double.
#[inline]
pub fn muldq(x: f64, y: DDouble) -> DDouble {
    mulqd(y, x)
}

/// Double-double divided by double.
///
/// Division by zero follows IEEE-754: `±inf` for a nonzero dividend, NaN for `0 / 0`.
#[inline]
pub fn divqd(x: DDouble, y: f64) -> DDouble {
    let t_hi = x.hi / y;
    if DDouble::is_terminal(t_hi) {
        return DDouble::new(t_hi, 0.);
    }
    if x.hi.abs() > DIV_SCALE_THRESHOLD {
        let q = divqd(mul_pwr2(x, DIV_DOWN), y);
        return DDouble::renormalize(q.hi * DIV_UP, q.lo * DIV_UP);
    }
    let pi = two_prod(t_hi, y);
    let d_hi = x.hi - pi.hi;
    let d_lo = x.lo - pi.lo;
    let t_lo = (d_hi + d_lo) / y;
    DDouble::renormalize(t_hi, t_lo)
}

/// Sum of two double-double values.
///
/// High and low words are summed separately and folded back with two quick
/// renormalizations, which keeps full accuracy when the operands differ in
/// magnitude or cancel.
#[inline]
pub fn addqq(x: DDouble, y: DDouble) -> DDouble {
    let s = two_sum(x.hi, y.hi);
    if !s.hi.is_finite() {
        return DDouble::new(s.hi, 0.);
    }
    let t = two_sum(x.lo, y.lo);
    if s.hi == 0. && t.hi == 0. {
        // exact zero, keep the IEEE sign of the leading sum
        return DDouble::new(s.hi, 0.);
    }
    let v = two_sum_quick(s.hi, s.lo + t.hi);
    DDouble::renormalize(v.hi, t.lo + v.lo)
}

/// Difference of two double-double values.
#[inline]
pub fn subqq(x: DDouble, y: DDouble) -> DDouble {
    let s = two_diff(x.hi, y.hi);
    if !s.hi.is_finite() {
        return DDouble::new(s.hi, 0.);
    }
    let t = two_diff(x.lo, y.lo);
    if s.hi == 0. && t.hi == 0. {
        return DDouble::new(s.hi, 0.);
    }
    let v = two_sum_quick(s.hi, s.lo + t.hi);
    DDouble::renormalize(v.hi, t.lo + v.lo)
}

/// Product of two double-double values.
///
/// `a.lo * b.lo` is below the working precision and is not formed.
#[inline]
pub fn mulqq(a: DDouble, b: DDouble) -> DDouble {
    let c = two_prod(a.hi, b.hi);
    if DDouble::is_terminal(c.hi) {
        return DDouble::new(c.hi, 0.);
    }
    let t = mlaf(a.hi * b.lo, a.lo, b.hi);
    DDouble::renormalize(c.hi, c.lo + t)
}

/// Quotient of two double-double values, one correction step over `x.hi / y.hi`.
#[inline]
pub fn divqq(x: DDouble, y: DDouble) -> DDouble {
    let t_hi = x.hi / y.hi;
    if DDouble::is_terminal(t_hi) {
        return DDouble::new(t_hi, 0.);
    }
    if x.hi.abs() > DIV_SCALE_THRESHOLD {
        let q = divqq(mul_pwr2(x, DIV_DOWN), y);
        return DDouble::renormalize(q.hi * DIV_UP, q.lo * DIV_UP);
    }
    let r = mulqd(y, t_hi);
    let pi_hi = x.hi - r.hi;
    let d = pi_hi + (x.lo - r.lo);
    let t_lo = d / y.hi;
    DDouble::renormalize(t_hi, t_lo)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{frexp, scalbn};
    use crate::consts::{EPS, MAX};
    use rand::Rng;

    fn rel_err(value: DDouble, expected: DDouble) -> f64 {
        (subqq(value, expected).hi / expected.hi).abs()
    }

    /// Normalized value with a random low word, `|x|` in `[2^lo, 2^(hi+1))`.
    fn random_dd(rng: &mut impl Rng, exp_range: std::ops::RangeInclusive<i32>) -> DDouble {
        let a = rng.random_range(1.0..2.0) * 2f64.powi(rng.random_range(exp_range));
        let a = if rng.random_bool(0.5) { -a } else { a };
        let b = rng.random_range(-1.0..1.0) * a * f64::EPSILON * 0.5;
        two_sum(a, b)
    }

    fn assert_non_overlapping(r: DDouble) {
        let half_ulp = scalbn(1., frexp(r.hi).1 - 54);
        assert!(r.lo.abs() <= half_ulp, "{r:?}");
    }

    #[test]
    fn test_precision_gain() {
        let r = addqq(DDouble::new(1., 0.), DDouble::new(1e-20, 0.));
        assert_eq!(r.hi, 1.);
        assert_eq!(r.lo, 1e-20);
        assert_eq!(1. + 1e-20, 1.);
    }

    #[test]
    fn test_addqq_cancellation() {
        let x = DDouble::new(1., 1e-20);
        let y = DDouble::new(-1., 3e-21);
        let r = addqq(x, y);
        assert_eq!(r.hi, 1e-20 + 3e-21);
        let r = subqq(x, x);
        assert_eq!(r.hi, 0.);
        assert_eq!(r.lo, 0.);
    }

    #[test]
    fn test_addqd_and_subqd() {
        let third = divqd(DDouble::ONE, 3.);
        let r = subqd(addqd(third, 2.), 2.);
        assert!(rel_err(r, third) < EPS.hi);
        let r = subdq(1., third);
        let expected = divqd(DDouble::from_f64(2.), 3.);
        assert!(rel_err(r, expected) < EPS.hi);
        let r = adddq(-1., DDouble::ONE);
        assert_eq!(r.hi, 0.);
    }

    #[test]
    fn test_mulqd_divqd() {
        let third = divqd(DDouble::ONE, 3.);
        assert_eq!(third.hi, 1. / 3.);
        assert!(third.lo != 0.);
        let one = mulqd(third, 3.);
        assert!(rel_err(one, DDouble::ONE) < EPS.hi);
        let one = muldq(3., third);
        assert!(rel_err(one, DDouble::ONE) < EPS.hi);
    }

    #[test]
    fn test_mul_div_round_trip() {
        let third = divqd(DDouble::ONE, 3.);
        let values = [
            third,
            DDouble::new(std::f64::consts::PI, 1.2246467991473532e-16),
            DDouble::from_f64(-7.25),
            divqd(DDouble::from_f64(-1e10), 7.),
            divqd(DDouble::from_f64(1e-10), 11.),
        ];
        for &x in &values {
            for &y in &values {
                let r = divqq(mulqq(x, y), y);
                assert!(rel_err(r, x) <= EPS.hi, "{x:?} {y:?} {r:?}");
            }
        }
    }

    #[test]
    fn test_divqq_consistent_with_divqd() {
        let x = DDouble::new(10., 1e-17);
        let a = divqq(x, DDouble::from_f64(7.));
        let b = divqd(x, 7.);
        assert!(rel_err(a, b) < EPS.hi);
    }

    #[test]
    fn test_division_by_zero() {
        let r = divqd(DDouble::new(1., 0.), 0.);
        assert_eq!(r.hi, f64::INFINITY);
        assert_eq!(r.lo, 0.);
        let r = divqd(DDouble::new(-1., 0.), 0.);
        assert_eq!(r.hi, f64::NEG_INFINITY);
        let r = divqd(DDouble::new(0., 0.), 0.);
        assert!(r.hi.is_nan());
        let r = divqq(DDouble::ONE, DDouble::ZERO);
        assert_eq!(r.hi, f64::INFINITY);
        let r = divqq(DDouble::ONE, DDouble::INFINITY);
        assert_eq!(r.hi, 0.);
    }

    #[test]
    fn test_special_values_propagate() {
        let inf = DDouble::INFINITY;
        assert_eq!(addqd(inf, 1.).hi, f64::INFINITY);
        assert_eq!(addqd(inf, 1.).lo, 0.);
        assert!(addqq(inf, -inf).hi.is_nan());
        assert_eq!(mulqq(inf, DDouble::from_f64(-2.)).hi, f64::NEG_INFINITY);
        assert!(mulqq(inf, DDouble::ZERO).hi.is_nan());
        assert!(mulqd(DDouble::NAN, 1.).hi.is_nan());
        let big = DDouble::from_f64(f64::MAX);
        let r = addqq(big, big);
        assert_eq!(r.hi, f64::INFINITY);
        assert_eq!(r.lo, 0.);
        let r = mulqd(big, 2.);
        assert_eq!(r.hi, f64::INFINITY);
    }

    #[test]
    fn test_signed_zero() {
        let nz = DDouble::new(-0., 0.);
        assert!(addqq(nz, nz).hi.is_sign_negative());
        assert!(addqd(nz, -0.).hi.is_sign_negative());
        assert!(mulqq(DDouble::from_f64(-1.), DDouble::ZERO).hi.is_sign_negative());
        assert!(mulqd(DDouble::ZERO, -3.).hi.is_sign_negative());
        assert!(divqd(nz, 2.).hi.is_sign_negative());
        let r = subqq(nz, DDouble::ZERO);
        assert!(r.hi == 0. && r.hi.is_sign_negative());
        assert_eq!(r.lo, 0.);
        let r = subqq(DDouble::ZERO, nz);
        assert!(r.hi.is_sign_positive());
        // exact cancellation rounds to +0
        let r = addqq(DDouble::ONE, DDouble::from_f64(-1.));
        assert!(r.hi == 0. && r.hi.is_sign_positive());
        let r = subqq(DDouble::new(1., 1e-20), DDouble::new(1., 1e-20));
        assert!(r.hi.is_sign_positive());
    }

    #[test]
    fn test_results_stay_non_overlapping() {
        let mut rng = rand::rng();
        for _ in 0..10_000 {
            let x = random_dd(&mut rng, -300..=300);
            let y = random_dd(&mut rng, -300..=300);
            assert_non_overlapping(addqq(x, y));
            assert_non_overlapping(subqq(x, y));
            assert_non_overlapping(mulqq(x, y));
            assert_non_overlapping(divqq(x, y));
            assert_non_overlapping(divqd(x, y.hi));
        }
    }

    #[test]
    fn test_random_mul_div_round_trip() {
        let mut rng = rand::rng();
        for _ in 0..10_000 {
            let x = random_dd(&mut rng, -100..=100);
            let y = random_dd(&mut rng, -100..=100);
            let r = divqq(mulqq(x, y), y);
            // one correction step in divqq, so each kernel adds up to about 2^-104
            assert!(rel_err(r, x) <= 2. * EPS.hi, "{x:?} {y:?} {r:?}");
        }
    }

    #[test]
    fn test_division_near_range_limit() {
        let big = DDouble::from_f64(f64::MAX);
        let r = divqq(MAX, DDouble::from_f64(1.000037035));
        assert!(r.hi.is_finite());
        assert!(r.lo.is_finite());
        assert!((r.hi - f64::MAX / 1.000037035).abs() <= r.hi * f64::EPSILON);
        let mut rng = rand::rng();
        for _ in 0..10_000 {
            let y = rng.random_range(1.0..1.25);
            let a = divqd(big, y);
            let b = divqq(big, DDouble::from_f64(y));
            assert!(a.hi.is_finite() && a.lo.is_finite(), "{y} {a:?}");
            assert!(b.hi.is_finite() && b.lo.is_finite(), "{y} {b:?}");
            assert_eq!(a.hi, f64::MAX / y);
            assert!(rel_err(a, b) <= EPS.hi, "{y}");
        }
        let r = divqd(MAX, 0.5);
        assert_eq!(r.hi, f64::INFINITY);
        assert_eq!(r.lo, 0.);
        let r = divqd(-MAX, 3.);
        let q = divqd(MAX, 3.);
        assert!(r.hi.is_finite());
        assert_eq!(r.hi, -q.hi);
        assert_eq!(r.lo, -q.lo);
    }
}
