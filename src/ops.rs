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
use crate::arith::{adddq, addqd, addqq, divqd, divqq, muldq, mulqd, mulqq, subdq, subqd, subqq};
use crate::double_double::DDouble;
use crate::unary::negq;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

macro_rules! binary_op {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $qq:ident, $qd:ident, $dq:ident) => {
        impl $trait<DDouble> for DDouble {
            type Output = DDouble;

            #[inline(always)]
            fn $method(self, rhs: DDouble) -> Self::Output {
                $qq(self, rhs)
            }
        }

        impl $trait<f64> for DDouble {
            type Output = DDouble;

            #[inline(always)]
            fn $method(self, rhs: f64) -> Self::Output {
                $qd(self, rhs)
            }
        }

        impl $trait<DDouble> for f64 {
            type Output = DDouble;

            #[inline(always)]
            fn $method(self, rhs: DDouble) -> Self::Output {
                $dq(self, rhs)
            }
        }

        impl $assign_trait<DDouble> for DDouble {
            #[inline(always)]
            fn $assign_method(&mut self, rhs: DDouble) {
                *self = $qq(*self, rhs);
            }
        }

        impl $assign_trait<f64> for DDouble {
            #[inline(always)]
            fn $assign_method(&mut self, rhs: f64) {
                *self = $qd(*self, rhs);
            }
        }
    };
}

binary_op!(Add, add, AddAssign, add_assign, addqq, addqd, adddq);
binary_op!(Sub, sub, SubAssign, sub_assign, subqq, subqd, subdq);
binary_op!(Mul, mul, MulAssign, mul_assign, mulqq, mulqd, muldq);
binary_op!(Div, div, DivAssign, div_assign, divqq, divqd, div_promoted);

/// A double dividend is promoted, there is no dedicated mixed kernel for it.
#[inline(always)]
fn div_promoted(x: f64, y: DDouble) -> DDouble {
    divqq(DDouble::from_f64(x), y)
}

impl Neg for DDouble {
    type Output = DDouble;

    #[inline(always)]
    fn neg(self) -> Self::Output {
        negq(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::EPS;

    #[test]
    fn test_operators_match_kernels() {
        let x = DDouble::new(1.5, 1e-17);
        let y = DDouble::new(-0.375, 2e-18);
        assert_eq!(x + y, addqq(x, y));
        assert_eq!(x - y, subqq(x, y));
        assert_eq!(x * y, mulqq(x, y));
        assert_eq!(x / y, divqq(x, y));
        assert_eq!(x + 2., addqd(x, 2.));
        assert_eq!(2. + x, adddq(2., x));
        assert_eq!(x - 2., subqd(x, 2.));
        assert_eq!(2. - x, subdq(2., x));
        assert_eq!(x * 3., mulqd(x, 3.));
        assert_eq!(3. * x, muldq(3., x));
        assert_eq!(x / 3., divqd(x, 3.));
        assert_eq!(-x, negq(x));
    }

    #[test]
    fn test_double_dividend() {
        let third = 1. / DDouble::from_f64(3.);
        assert_eq!(third.hi, 1. / 3.);
        let back = third * 3.;
        assert!(((back - 1.).hi).abs() <= EPS.hi);
    }

    #[test]
    fn test_assign_operators() {
        let mut acc = DDouble::ZERO;
        for _ in 0..10 {
            acc += 0.1;
        }
        // ten roundings of 0.1 are kept exactly
        assert_eq!(acc.hi, 1.);
        assert!(acc.lo != 0.);
        acc -= DDouble::ONE;
        acc *= 2.;
        acc /= DDouble::from_f64(4.);
        assert!(acc.hi.abs() < 1e-16);
        let mut x = DDouble::from_f64(6.);
        x /= 4.;
        x *= DDouble::from_f64(2.);
        x -= 1.;
        x += DDouble::ONE;
        assert_eq!(x, 3.);
    }
}
