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
use crate::eft::two_sum_quick;
use crate::err::DdError;
use crate::rounding::trunc;
use num_traits::{Bounded, FromPrimitive, One, ToPrimitive, Zero};

/// Double-double value, the unevaluated sum `hi + lo`.
///
/// Values produced by this crate keep `hi` as the correctly rounded value of
/// the sum and `|lo| <= ulp(hi) / 2`. NaN and infinities live in `hi`, with
/// `lo` zero for infinities.
#[derive(Copy, Clone, Debug, Default)]
pub struct DDouble {
    pub hi: f64,
    pub lo: f64,
}

impl DDouble {
    pub const ZERO: DDouble = DDouble::new(0., 0.);
    pub const ONE: DDouble = DDouble::new(1., 0.);
    pub const NAN: DDouble = DDouble::new(f64::NAN, 0.);
    pub const INFINITY: DDouble = DDouble::new(f64::INFINITY, 0.);
    pub const NEG_INFINITY: DDouble = DDouble::new(f64::NEG_INFINITY, 0.);

    /// Makes a value from its words as given, no normalization is done.
    #[inline(always)]
    pub const fn new(hi: f64, lo: f64) -> DDouble {
        DDouble { hi, lo }
    }

    #[inline(always)]
    pub const fn from_f64(v: f64) -> DDouble {
        DDouble { hi: v, lo: 0. }
    }

    /// Nearest `f64`, loses the low word.
    #[inline(always)]
    pub const fn to_f64(self) -> f64 {
        self.hi + self.lo
    }

    /// Brings `hi + lo` into normalized form where `|hi| >= |lo|`.
    ///
    /// Special values and zeros in `hi` are returned with a zero low word so the
    /// sign of zero survives and infinities never carry a NaN tail.
    #[inline(always)]
    pub(crate) fn renormalize(hi: f64, lo: f64) -> DDouble {
        if lo == 0. || !hi.is_finite() {
            return DDouble::new(hi, 0.);
        }
        let r = two_sum_quick(hi, lo);
        if r.hi.is_finite() {
            r
        } else {
            DDouble::new(r.hi, 0.)
        }
    }

    /// Leading word of a composite result that cannot be refined further.
    #[inline(always)]
    pub(crate) fn is_terminal(hi: f64) -> bool {
        hi == 0. || !hi.is_finite()
    }
}

impl From<f64> for DDouble {
    #[inline]
    fn from(value: f64) -> Self {
        DDouble::from_f64(value)
    }
}

impl From<f32> for DDouble {
    #[inline]
    fn from(value: f32) -> Self {
        DDouble::from_f64(value as f64)
    }
}

impl From<i32> for DDouble {
    #[inline]
    fn from(value: i32) -> Self {
        DDouble::from_f64(value as f64)
    }
}

impl From<u32> for DDouble {
    #[inline]
    fn from(value: u32) -> Self {
        DDouble::from_f64(value as f64)
    }
}

impl From<i64> for DDouble {
    #[inline]
    fn from(value: i64) -> Self {
        let hi = value as f64;
        // `hi` is at most 2^63 so the difference fits i128 exactly
        let lo = (value as i128 - hi as i128) as f64;
        DDouble::renormalize(hi, lo)
    }
}

impl From<u64> for DDouble {
    #[inline]
    fn from(value: u64) -> Self {
        let hi = value as f64;
        let lo = (value as i128 - hi as i128) as f64;
        DDouble::renormalize(hi, lo)
    }
}

impl From<DDouble> for f64 {
    #[inline]
    fn from(value: DDouble) -> Self {
        value.to_f64()
    }
}

/// Truncates toward zero and returns the exact integer value of both words.
fn truncated_integer(value: DDouble, min: i128, max: i128) -> Result<i128, DdError> {
    if value.hi.is_nan() {
        return Err(DdError::NotANumber);
    }
    if !value.hi.is_finite() {
        return Err(DdError::OutOfRange);
    }
    let t = trunc(value);
    // Anything of 2^65 or more is out of every supported range, and below that
    // both words convert to i128 exactly.
    if t.hi.abs() >= 36893488147419103232. {
        return Err(DdError::OutOfRange);
    }
    let v = (t.hi as i128)
        .checked_add(t.lo as i128)
        .ok_or(DdError::OutOfRange)?;
    if v < min || v > max {
        return Err(DdError::OutOfRange);
    }
    Ok(v)
}

impl TryFrom<DDouble> for i64 {
    type Error = DdError;

    fn try_from(value: DDouble) -> Result<Self, Self::Error> {
        let v = truncated_integer(value, i64::MIN as i128, i64::MAX as i128)?;
        Ok(v as i64)
    }
}

impl TryFrom<DDouble> for u64 {
    type Error = DdError;

    fn try_from(value: DDouble) -> Result<Self, Self::Error> {
        let v = truncated_integer(value, 0, u64::MAX as i128)?;
        Ok(v as u64)
    }
}

impl Zero for DDouble {
    #[inline]
    fn zero() -> Self {
        DDouble::ZERO
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.hi == 0.
    }
}

impl One for DDouble {
    #[inline]
    fn one() -> Self {
        DDouble::ONE
    }
}

impl Bounded for DDouble {
    #[inline]
    fn min_value() -> Self {
        -crate::consts::MAX
    }

    #[inline]
    fn max_value() -> Self {
        crate::consts::MAX
    }
}

impl ToPrimitive for DDouble {
    fn to_i64(&self) -> Option<i64> {
        i64::try_from(*self).ok()
    }

    fn to_u64(&self) -> Option<u64> {
        u64::try_from(*self).ok()
    }

    fn to_f64(&self) -> Option<f64> {
        Some(DDouble::to_f64(*self))
    }
}

impl FromPrimitive for DDouble {
    fn from_i64(n: i64) -> Option<Self> {
        Some(DDouble::from(n))
    }

    fn from_u64(n: u64) -> Option<Self> {
        Some(DDouble::from(n))
    }

    fn from_f64(n: f64) -> Option<Self> {
        Some(DDouble::from_f64(n))
    }
}
