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
use crate::arith::addqq;
use crate::cmp::lessqq;
use crate::common::frexp;
use crate::double_double::DDouble;
use crate::unary::{absq, ldexp, negq, sqrt, square};

/// Minimum, a NaN operand is ignored unless both are NaN.
#[inline]
pub fn fminqq(x: DDouble, y: DDouble) -> DDouble {
    if x.hi.is_nan() {
        y
    } else if y.hi.is_nan() || !lessqq(y, x) {
        x
    } else {
        y
    }
}

/// Maximum, a NaN operand is ignored unless both are NaN.
#[inline]
pub fn fmaxqq(x: DDouble, y: DDouble) -> DDouble {
    if x.hi.is_nan() {
        y
    } else if y.hi.is_nan() || !lessqq(x, y) {
        x
    } else {
        y
    }
}

#[inline]
pub fn fminqd(x: DDouble, y: f64) -> DDouble {
    fminqq(x, DDouble::from_f64(y))
}

#[inline]
pub fn fmindq(x: f64, y: DDouble) -> DDouble {
    fminqq(DDouble::from_f64(x), y)
}

#[inline]
pub fn fmaxqd(x: DDouble, y: f64) -> DDouble {
    fmaxqq(x, DDouble::from_f64(y))
}

#[inline]
pub fn fmaxdq(x: f64, y: DDouble) -> DDouble {
    fmaxqq(DDouble::from_f64(x), y)
}

/// Magnitude of `x` with the sign of `y`.
#[inline]
pub const fn copysignqq(x: DDouble, y: DDouble) -> DDouble {
    copysignqd(x, y.hi)
}

#[inline]
pub const fn copysignqd(x: DDouble, y: f64) -> DDouble {
    if x.hi.is_sign_negative() != y.is_sign_negative() {
        negq(x)
    } else {
        x
    }
}

#[inline]
pub const fn copysigndq(x: f64, y: DDouble) -> DDouble {
    copysignqd(DDouble::from_f64(x), y.hi)
}

/// `sqrt(x^2 + y^2)` without intermediate overflow or underflow.
///
/// Both operands are scaled by the binary exponent of the larger one before
/// squaring, and the root is scaled back.
#[inline]
pub fn hypotqq(x: DDouble, y: DDouble) -> DDouble {
    let a = absq(x);
    let b = absq(y);
    if a.hi.is_infinite() || b.hi.is_infinite() {
        return DDouble::INFINITY;
    }
    if a.hi.is_nan() || b.hi.is_nan() {
        return DDouble::NAN;
    }
    let (big, small) = if lessqq(a, b) { (b, a) } else { (a, b) };
    if big.hi == 0. {
        return DDouble::ZERO;
    }
    let (_, e) = frexp(big.hi);
    let big = ldexp(big, -e);
    let small = ldexp(small, -e);
    ldexp(sqrt(addqq(square(big), square(small))), e)
}

#[inline]
pub fn hypotqd(x: DDouble, y: f64) -> DDouble {
    hypotqq(x, DDouble::from_f64(y))
}

#[inline]
pub fn hypotdq(x: f64, y: DDouble) -> DDouble {
    hypotqq(DDouble::from_f64(x), y)
}

impl DDouble {
    #[inline]
    pub fn min(self, other: DDouble) -> DDouble {
        fminqq(self, other)
    }

    #[inline]
    pub fn max(self, other: DDouble) -> DDouble {
        fmaxqq(self, other)
    }

    #[inline]
    pub const fn copysign(self, sign: DDouble) -> DDouble {
        copysignqq(self, sign)
    }

    #[inline]
    pub fn hypot(self, other: DDouble) -> DDouble {
        hypotqq(self, other)
    }
}
