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
//! Classification and ordering.
//!
//! Ordering is lexicographic on `(hi, lo)`. Any comparison with NaN is false,
//! except `notequal` which is true. Mixed forms promote the `f64` operand
//! to a double-double with a zero low word.
use crate::double_double::DDouble;
use std::cmp::Ordering;

#[inline]
pub const fn isnan(x: DDouble) -> bool {
    x.hi.is_nan()
}

#[inline]
pub const fn isinf(x: DDouble) -> bool {
    x.hi.is_infinite()
}

#[inline]
pub const fn isfinite(x: DDouble) -> bool {
    x.hi.is_finite()
}

#[inline]
pub const fn iszero(x: DDouble) -> bool {
    x.hi == 0.
}

#[inline]
pub const fn isone(x: DDouble) -> bool {
    x.hi == 1. && x.lo == 0.
}

#[inline]
pub const fn ispositive(x: DDouble) -> bool {
    x.hi > 0.
}

#[inline]
pub const fn isnegative(x: DDouble) -> bool {
    x.hi < 0.
}

#[inline]
pub const fn signbit(x: DDouble) -> bool {
    x.hi.is_sign_negative()
}

/// `-1`, `+1`, NaN for NaN, zeros keep their sign.
#[inline]
pub const fn sign(x: DDouble) -> DDouble {
    if x.hi.is_nan() {
        DDouble::NAN
    } else if x.hi > 0. {
        DDouble::ONE
    } else if x.hi < 0. {
        DDouble::new(-1., 0.)
    } else {
        DDouble::new(x.hi, 0.)
    }
}

#[inline]
pub const fn equalqq(x: DDouble, y: DDouble) -> bool {
    x.hi == y.hi && x.lo == y.lo
}

#[inline]
pub const fn notequalqq(x: DDouble, y: DDouble) -> bool {
    x.hi != y.hi || x.lo != y.lo
}

#[inline]
pub const fn lessqq(x: DDouble, y: DDouble) -> bool {
    x.hi < y.hi || (x.hi == y.hi && x.lo < y.lo)
}

#[inline]
pub const fn greaterqq(x: DDouble, y: DDouble) -> bool {
    x.hi > y.hi || (x.hi == y.hi && x.lo > y.lo)
}

#[inline]
pub const fn lessequalqq(x: DDouble, y: DDouble) -> bool {
    x.hi < y.hi || (x.hi == y.hi && x.lo <= y.lo)
}

#[inline]
pub const fn greaterequalqq(x: DDouble, y: DDouble) -> bool {
    x.hi > y.hi || (x.hi == y.hi && x.lo >= y.lo)
}

macro_rules! mixed_compare {
    ($qq:ident, $qd:ident, $dq:ident) => {
        #[inline]
        pub const fn $qd(x: DDouble, y: f64) -> bool {
            $qq(x, DDouble::from_f64(y))
        }

        #[inline]
        pub const fn $dq(x: f64, y: DDouble) -> bool {
            $qq(DDouble::from_f64(x), y)
        }
    };
}

mixed_compare!(equalqq, equalqd, equaldq);
mixed_compare!(notequalqq, notequalqd, notequaldq);
mixed_compare!(lessqq, lessqd, lessdq);
mixed_compare!(greaterqq, greaterqd, greaterdq);
mixed_compare!(lessequalqq, lessequalqd, lessequaldq);
mixed_compare!(greaterequalqq, greaterequalqd, greaterequaldq);

#[inline]
const fn compare(x: DDouble, y: DDouble) -> Option<Ordering> {
    if lessqq(x, y) {
        Some(Ordering::Less)
    } else if greaterqq(x, y) {
        Some(Ordering::Greater)
    } else if equalqq(x, y) {
        Some(Ordering::Equal)
    } else {
        None
    }
}

impl PartialEq for DDouble {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        equalqq(*self, *other)
    }
}

impl PartialEq<f64> for DDouble {
    #[inline]
    fn eq(&self, other: &f64) -> bool {
        equalqd(*self, *other)
    }
}

impl PartialEq<DDouble> for f64 {
    #[inline]
    fn eq(&self, other: &DDouble) -> bool {
        equaldq(*self, *other)
    }
}

macro_rules! partial_ord {
    ($lhs:ty, $rhs:ty, $promote_l:expr, $promote_r:expr) => {
        impl PartialOrd<$rhs> for $lhs {
            #[inline]
            fn partial_cmp(&self, other: &$rhs) -> Option<Ordering> {
                compare($promote_l(*self), $promote_r(*other))
            }

            #[inline]
            fn lt(&self, other: &$rhs) -> bool {
                lessqq($promote_l(*self), $promote_r(*other))
            }

            #[inline]
            fn le(&self, other: &$rhs) -> bool {
                lessequalqq($promote_l(*self), $promote_r(*other))
            }

            #[inline]
            fn gt(&self, other: &$rhs) -> bool {
                greaterqq($promote_l(*self), $promote_r(*other))
            }

            #[inline]
            fn ge(&self, other: &$rhs) -> bool {
                greaterequalqq($promote_l(*self), $promote_r(*other))
            }
        }
    };
}

partial_ord!(DDouble, DDouble, DDouble::from, DDouble::from);
partial_ord!(DDouble, f64, DDouble::from, DDouble::from_f64);
partial_ord!(f64, DDouble, DDouble::from_f64, DDouble::from);

impl DDouble {
    #[inline]
    pub const fn is_nan(self) -> bool {
        isnan(self)
    }

    #[inline]
    pub const fn is_infinite(self) -> bool {
        isinf(self)
    }

    #[inline]
    pub const fn is_finite(self) -> bool {
        isfinite(self)
    }

    #[inline]
    pub const fn is_sign_negative(self) -> bool {
        signbit(self)
    }

    #[inline]
    pub const fn signum(self) -> DDouble {
        sign(self)
    }
}
