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
//! Error-free transformations.
//!
//! Each function returns the rounded result of a single floating point
//! operation in `hi` and its exact rounding error in `lo`, so `hi + lo`
//! equals the mathematical result without any loss.
use crate::double_double::DDouble;

/// Computes `a + b` and its rounding error.
///
/// # Precondition
///
/// `|a| >= |b|` (or `a == 0`). This is not checked: with the operands swapped the
/// error term is silently wrong. Use [two_sum] when the ordering is unknown.
#[inline(always)]
pub const fn two_sum_quick(a: f64, b: f64) -> DDouble {
    let s = a + b;
    let lo = b - (s - a);
    DDouble::new(s, lo)
}

/// Computes `a + b` and its rounding error for operands of any magnitude.
#[inline(always)]
pub const fn two_sum(a: f64, b: f64) -> DDouble {
    let s = a + b;
    let v = s - a;
    let lo = (a - (s - v)) + (b - v);
    DDouble::new(s, lo)
}

/// Computes `a - b` and its rounding error.
#[inline(always)]
pub const fn two_diff(a: f64, b: f64) -> DDouble {
    two_sum(a, -b)
}

/// 2^995, larger products are formed on a scaled operand.
const PROD_THRESHOLD: f64 = f64::from_bits(0x7e20000000000000);
/// 2^-53
const PROD_DOWN: f64 = f64::from_bits(0x3ca0000000000000);
/// 2^53
const PROD_UP: f64 = f64::from_bits(0x4340000000000000);

/// 2^996, above this splitting overflows.
const SPLIT_THRESHOLD: f64 = f64::from_bits(0x7e30000000000000);
/// 2^27 + 1
const SPLITTER: f64 = 134217729.0;
const SPLIT_DOWN: f64 = f64::from_bits(0x3e30000000000000);
const SPLIT_UP: f64 = f64::from_bits(0x41b0000000000000);

/// Veltkamp splitting of `a` into two 26-bit halves, `a = hi + lo` exactly.
///
/// Only needed when no hardware fused multiply-add is present.
#[allow(dead_code)]
#[inline]
pub(crate) const fn split(a: f64) -> DDouble {
    if a > SPLIT_THRESHOLD || a < -SPLIT_THRESHOLD {
        let scaled = a * SPLIT_DOWN;
        let t1 = SPLITTER * scaled;
        let hi = t1 - (t1 - scaled);
        let lo = scaled - hi;
        DDouble::new(hi * SPLIT_UP, lo * SPLIT_UP)
    } else {
        let t1 = SPLITTER * a;
        let hi = t1 - (t1 - a);
        let lo = a - hi;
        DDouble::new(hi, lo)
    }
}

/// Computes `a * b` and its rounding error.
///
/// With a hardware fused multiply-add the error is `fma(a, b, -a*b)`, otherwise
/// Dekker's product over split operands is used. Both are exact as long as
/// the product neither overflows nor underflows.
#[inline(always)]
pub fn two_prod(a: f64, b: f64) -> DDouble {
    #[cfg(any(
        all(
            any(target_arch = "x86", target_arch = "x86_64"),
            target_feature = "fma"
        ),
        all(target_arch = "aarch64", target_feature = "neon")
    ))]
    {
        let s = a * b;
        let lo = f64::mul_add(a, b, -s);
        DDouble::new(s, lo)
    }
    #[cfg(not(any(
        all(
            any(target_arch = "x86", target_arch = "x86_64"),
            target_feature = "fma"
        ),
        all(target_arch = "aarch64", target_feature = "neon")
    )))]
    {
        let s = a * b;
        if s.is_finite() && (s > PROD_THRESHOLD || s < -PROD_THRESHOLD) {
            // |a| > 2^-29 here, so the scaled operand stays normal
            let r = dekker_prod(a * PROD_DOWN, b);
            return DDouble::new(r.hi * PROD_UP, r.lo * PROD_UP);
        }
        dekker_prod(a, b)
    }
}

/// Dekker's product over Veltkamp halves, exact while the partial products stay finite.
#[allow(dead_code)]
#[inline(always)]
const fn dekker_prod(a: f64, b: f64) -> DDouble {
    let s = a * b;
    let sa = split(a);
    let sb = split(b);
    let t1 = sa.hi * sb.hi - s;
    let t2 = sa.hi * sb.lo + t1;
    let t3 = sa.lo * sb.hi + t2;
    let lo = sa.lo * sb.lo + t3;
    DDouble::new(s, lo)
}
