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
//! Double-double arithmetic.
//!
//! A [DDouble] is the unevaluated sum of two `f64` words and carries roughly
//! 106 bits of significand. All operations are pure functions over values,
//! built on error-free transformations of single floating point operations.
//!
//! Kernels are available as free functions named after their operand kinds
//! (`q` for double-double, `d` for `f64`: [addqd], [mulqq], [equaldq], ...),
//! as methods, and through the standard operator traits.
//!
//! [Matrix] with [svd], [householder] and [givens] cover small dense linear
//! algebra in the same precision.
#![allow(clippy::excessive_precision)]
#![deny(unreachable_pub)]
mod arith;
mod cmp;
mod common;
pub mod consts;
mod double_double;
mod eft;
mod err;
mod exp;
mod extrema;
mod hyperbolic;
mod linalg;
mod log;
mod matrix;
mod mlaf;
mod ops;
mod rounding;
mod svd;
mod trigo;
mod unary;

pub use arith::{addqd, addqq, adddq, divqd, divqq, mulqd, mulqq, muldq, subdq, subqd, subqq};
pub use cmp::{
    equaldq, equalqd, equalqq, greaterdq, greaterequaldq, greaterequalqd, greaterequalqq,
    greaterqd, greaterqq, isfinite, isinf, isnan, isnegative, isone, ispositive, iszero, lessdq,
    lessequaldq, lessequalqd, lessequalqq, lessqd, lessqq, notequaldq, notequalqd, notequalqq,
    sign, signbit,
};
pub use double_double::DDouble;
pub use eft::{two_diff, two_prod, two_sum, two_sum_quick};
pub use err::DdError;
pub use exp::{exp, expm1};
pub use extrema::{
    copysigndq, copysignqd, copysignqq, fmaxdq, fmaxqd, fmaxqq, fmindq, fminqd, fminqq, hypotdq,
    hypotqd, hypotqq,
};
pub use hyperbolic::{cosh, sinh, tanh};
pub use linalg::{
    givens, householder, mul_givens, norm, svd_tri2x2, svvals_tri2x2, Givens, Householder, Svd2x2,
};
pub use log::log;
pub use matrix::Matrix;
pub use rounding::{ceil, floor, round, trunc};
pub use svd::{golub_kahan_svd, householder_bidiag, svd, Bidiagonal, Svd};
pub use trigo::{cos, sin};
pub use unary::{absq, ldexp, negq, posq, reciprocal, sqrt, square};
