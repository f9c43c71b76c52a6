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
//! Double-double constants.
#![allow(clippy::excessive_precision, clippy::approx_constant)]
use crate::double_double::DDouble;

/// Largest finite value.
pub const MAX: DDouble = DDouble::new(
    f64::from_bits(0x7fefffffffffffff),
    f64::from_bits(0x7c8fffffffffffff),
);

/// Smallest positive value whose low word is still a normal number, 2^-969.
pub const MIN: DDouble = DDouble::new(f64::from_bits(0x0360000000000000), 0.);

/// Relative precision, 2^-104.
pub const EPS: DDouble = DDouble::new(f64::from_bits(0x3970000000000000), 0.);

/// π
pub const PI: DDouble = DDouble::new(3.141592653589793116e+00, 1.224646799147353207e-16);

/// π/2
pub const PI_2: DDouble = DDouble::new(PI.hi * 0.5, PI.lo * 0.5);

/// π/4
pub const PI_4: DDouble = DDouble::new(PI.hi * 0.25, PI.lo * 0.25);

/// 2π
pub const TWO_PI: DDouble = DDouble::new(PI.hi * 2., PI.lo * 2.);

/// Euler's number
pub const E: DDouble = DDouble::new(2.718281828459045091e+00, 1.445646891729250158e-16);

/// ln(2)
pub const LOG2: DDouble = DDouble::new(6.931471805599452862e-01, 2.319046813846299558e-17);

/// ln(10)
pub const LOG10: DDouble = DDouble::new(2.302585092994045901e+00, -2.170756223382249351e-16);

pub const NAN: DDouble = DDouble::NAN;

pub const INF: DDouble = DDouble::INFINITY;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arith::mulqd;
    use crate::cmp::equalqq;

    fn non_overlapping(x: DDouble) -> bool {
        x.lo.abs() <= 0.5 * f64::EPSILON * x.hi.abs() * 2.
            && x.hi + x.lo == x.hi
    }

    #[test]
    fn test_pi_multiples() {
        assert!(equalqq(PI, mulqd(PI_2, 2.)));
        assert!(equalqq(PI, mulqd(PI_4, 4.)));
        assert!(equalqq(TWO_PI, mulqd(PI, 2.)));
    }

    #[test]
    fn test_constants_are_normalized() {
        for c in [MAX, MIN, EPS, PI, PI_2, PI_4, TWO_PI, E, LOG2, LOG10] {
            assert!(non_overlapping(c), "{c:?}");
        }
        assert_eq!(MAX.hi, f64::MAX);
        assert_eq!(EPS.hi, 2f64.powi(-104));
        assert_eq!(MIN.hi, f64::MIN_POSITIVE * 2f64.powi(53));
        assert!(NAN.hi.is_nan());
        assert_eq!(INF.hi, f64::INFINITY);
    }

    #[test]
    fn test_leading_words() {
        assert_eq!(PI.hi, std::f64::consts::PI);
        assert_eq!(E.hi, std::f64::consts::E);
        assert_eq!(LOG2.hi, std::f64::consts::LN_2);
        assert_eq!(LOG10.hi, std::f64::consts::LN_10);
        assert_eq!(PI_2.hi, std::f64::consts::FRAC_PI_2);
        assert_eq!(PI_4.hi, std::f64::consts::FRAC_PI_4);
    }
}
