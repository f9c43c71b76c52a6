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
use crate::arith::{addqd, addqq, divqd, divqq, mulqd, mulqq, subqd};
use crate::common::frexp;
use crate::consts::LOG2;
use crate::double_double::DDouble;
use crate::exp::TAYLOR_CUTOFF;
use crate::unary::{ldexp, mul_pwr2, square};

/// Natural logarithm.
///
/// The argument is reduced to `m * 2^e` with `m` in `[sqrt(2)/2, sqrt(2))` and
/// `ln(m) = 2 * atanh((m - 1) / (m + 1))` is summed as an odd power series.
#[inline]
pub fn log(a: DDouble) -> DDouble {
    if a.hi.is_nan() {
        return a;
    }
    if a.hi == 0. {
        return DDouble::NEG_INFINITY;
    }
    if a.hi < 0. {
        return DDouble::NAN;
    }
    if a.hi.is_infinite() {
        return DDouble::INFINITY;
    }
    if a.hi == 1. && a.lo == 0. {
        return DDouble::ZERO;
    }

    // reduce into [sqrt(2)/2;sqrt(2)]
    let (f, mut e) = frexp(a.hi);
    if f < std::f64::consts::FRAC_1_SQRT_2 {
        e -= 1;
    }
    let m = ldexp(a, -e);

    let z = divqq(subqd(m, 1.), addqd(m, 1.));
    let z2 = square(z);
    let mut s = z;
    let mut p = z;
    for k in 1..40 {
        p = mulqq(p, z2);
        let t = divqd(p, (2 * k + 1) as f64);
        s = addqq(s, t);
        if t.hi.abs() <= s.hi.abs() * TAYLOR_CUTOFF {
            break;
        }
    }
    addqq(mulqd(LOG2, e as f64), mul_pwr2(s, 2.))
}

impl DDouble {
    #[inline]
    pub fn ln(self) -> DDouble {
        log(self)
    }
}
