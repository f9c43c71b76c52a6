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
//! Scalar and vector kernels of the linear algebra layer: norms, Givens
//! rotations, Householder reflectors and the 2x2 triangular SVD.
use crate::common::frexp;
use crate::consts::EPS;
use crate::double_double::DDouble;
use crate::err::DdError;
use crate::extrema::{copysignqd, hypotqq};
use crate::matrix::Matrix;
use crate::unary::{ldexp, sqrt};

/// Binary exponent of the largest magnitude in `x`, zero when all are zero.
fn max_exponent(x: &[DDouble]) -> i32 {
    let big = x.iter().fold(0f64, |acc, v| acc.max(v.hi.abs()));
    if big.is_finite() { frexp(big).1 } else { 0 }
}

/// Euclidean norm of `x`, scaled so that squaring neither overflows nor underflows.
pub fn norm(x: &[DDouble]) -> DDouble {
    if x.iter().any(|v| v.hi.is_nan()) {
        return DDouble::NAN;
    }
    if x.iter().any(|v| v.hi.is_infinite()) {
        return DDouble::INFINITY;
    }
    if x.iter().all(|v| v.hi == 0.) {
        return DDouble::ZERO;
    }
    let e = max_exponent(x);
    let sum = x.iter().fold(DDouble::ZERO, |acc, &v| {
        let s = ldexp(v, -e);
        acc + s * s
    });
    ldexp(sqrt(sum), e)
}

/// Plane rotation `G = [[c, s], [-s, c]]`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Givens {
    pub c: DDouble,
    pub s: DDouble,
}

impl Givens {
    #[inline]
    pub const fn new(c: DDouble, s: DDouble) -> Givens {
        Givens { c, s }
    }

    /// `G * [x, y]^T`
    #[inline]
    pub fn rotate(&self, x: DDouble, y: DDouble) -> (DDouble, DDouble) {
        (self.c * x + self.s * y, self.c * y - self.s * x)
    }

    #[inline]
    pub const fn transpose(self) -> Givens {
        Givens::new(self.c, DDouble::new(-self.s.hi, -self.s.lo))
    }
}

/// Rotation that maps `[f, g]` onto `[r, 0]`.
///
/// `r` carries the sign of `f`. When `g` is zero the rotation is the identity,
/// when `f` is zero `r = |g|`.
pub fn givens(f: DDouble, g: DDouble) -> (DDouble, Givens) {
    if g.hi == 0. {
        return (f, Givens::new(DDouble::ONE, DDouble::ZERO));
    }
    if f.hi == 0. {
        let r = g.abs();
        return (r, Givens::new(DDouble::ZERO, g / r));
    }
    let r = copysignqd(hypotqq(f, g), f.hi);
    (r, Givens::new(f / r, g / r))
}

/// Applies `g` to rows `k` and `q` of `a`, `a = G * a` on those rows.
pub fn mul_givens(k: usize, q: usize, g: &Givens, a: &mut Matrix) -> Result<(), DdError> {
    a.rotate_rows(k, q, g)
}

/// Householder reflector `H = I - beta * v * v^T` with `v[0] = 1`.
#[derive(Clone, Debug, PartialEq)]
pub struct Householder {
    pub beta: DDouble,
    pub v: Vec<DDouble>,
}

/// Reflector that maps `x` onto `[‖x‖, 0, ..., 0]`.
///
/// The vector is scaled by a power of two before the squares are summed,
/// which leaves `beta` and `v` unchanged. An empty `x` is a shape error.
pub fn householder(x: &[DDouble]) -> Result<Householder, DdError> {
    let (&x0, tail) = x.split_first().ok_or(DdError::ShapeMismatch)?;
    let e = max_exponent(x);
    let x0 = ldexp(x0, -e);
    let sigma = tail.iter().fold(DDouble::ZERO, |acc, &v| {
        let s = ldexp(v, -e);
        acc + s * s
    });
    let mut v = Vec::with_capacity(x.len());
    v.push(DDouble::ONE);
    if sigma.hi == 0. {
        v.extend_from_slice(tail);
        let beta = if x0.hi >= 0. {
            DDouble::ZERO
        } else {
            DDouble::from_f64(2.)
        };
        return Ok(Householder { beta, v });
    }
    let mu = sqrt(x0 * x0 + sigma);
    // avoids cancellation in x0 - mu for positive x0
    let v0 = if x0.hi <= 0. {
        x0 - mu
    } else {
        -sigma / (x0 + mu)
    };
    let v0_sqr = v0 * v0;
    let beta = 2. * v0_sqr / (sigma + v0_sqr);
    v.extend(tail.iter().map(|&t| ldexp(t, -e) / v0));
    Ok(Householder { beta, v })
}

impl Householder {
    /// `a = H * a` on the block starting at `(row0, col0)`, `H` spans `v.len()` rows.
    pub fn apply_left(&self, a: &mut Matrix, row0: usize, col0: usize) -> Result<(), DdError> {
        if row0 + self.v.len() > a.rows() || col0 > a.cols() {
            return Err(DdError::ShapeMismatch);
        }
        if self.beta.hi == 0. {
            return Ok(());
        }
        for j in col0..a.cols() {
            let mut w = DDouble::ZERO;
            for (i, &vi) in self.v.iter().enumerate() {
                w += vi * a[(row0 + i, j)];
            }
            let w = self.beta * w;
            for (i, &vi) in self.v.iter().enumerate() {
                a[(row0 + i, j)] -= vi * w;
            }
        }
        Ok(())
    }

    /// `a = a * H` on the block starting at `(row0, col0)`, `H` spans `v.len()` columns.
    pub fn apply_right(&self, a: &mut Matrix, row0: usize, col0: usize) -> Result<(), DdError> {
        if col0 + self.v.len() > a.cols() || row0 > a.rows() {
            return Err(DdError::ShapeMismatch);
        }
        if self.beta.hi == 0. {
            return Ok(());
        }
        for i in row0..a.rows() {
            let mut w = DDouble::ZERO;
            for (j, &vj) in self.v.iter().enumerate() {
                w += a[(i, col0 + j)] * vj;
            }
            let w = self.beta * w;
            for (j, &vj) in self.v.iter().enumerate() {
                a[(i, col0 + j)] -= w * vj;
            }
        }
        Ok(())
    }
}

/// Singular values `(smax, smin)` of the upper triangular `[[f, g], [0, h]]`.
///
/// Both are non-negative. Follows LAPACK `dlas2`, which never forms the squares.
pub fn svvals_tri2x2(f: DDouble, g: DDouble, h: DDouble) -> (DDouble, DDouble) {
    let fa = f.abs();
    let ga = g.abs();
    let ha = h.abs();
    let (fhmn, fhmx) = if fa < ha { (fa, ha) } else { (ha, fa) };
    if fhmn.hi == 0. {
        if fhmx.hi == 0. {
            return (ga, DDouble::ZERO);
        }
        let (mn, mx) = if fhmx < ga { (fhmx, ga) } else { (ga, fhmx) };
        let r = mn / mx;
        return (mx * sqrt(1. + r * r), DDouble::ZERO);
    }
    if ga < fhmx {
        let a_s = 1. + fhmn / fhmx;
        let a_t = (fhmx - fhmn) / fhmx;
        let au = ga / fhmx;
        let au = au * au;
        let c = 2. / (sqrt(a_s * a_s + au) + sqrt(a_t * a_t + au));
        return (fhmx / c, fhmn * c);
    }
    let au = fhmx / ga;
    if au.hi == 0. {
        // fhmx / ga underflows
        return (ga, (fhmn * fhmx) / ga);
    }
    let a_s = 1. + fhmn / fhmx;
    let a_t = (fhmx - fhmn) / fhmx;
    let p = a_s * au;
    let q = a_t * au;
    let c = 1. / (sqrt(1. + p * p) + sqrt(1. + q * q));
    let smin = (fhmn * c) * au;
    (ga / (c + c), smin + smin)
}

/// SVD of the upper triangular `[[f, g], [0, h]] = u * diag(s) * vt`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Svd2x2 {
    pub u: [[DDouble; 2]; 2],
    /// Non-negative, largest first.
    pub s: [DDouble; 2],
    pub vt: [[DDouble; 2]; 2],
}

#[inline]
fn sign_of(x: DDouble) -> f64 {
    1f64.copysign(x.hi)
}

/// Full SVD of the upper triangular `[[f, g], [0, h]]`.
///
/// Follows LAPACK `dlasv2`, signs are moved into the rows of `vt` so both
/// singular values come out non-negative.
pub fn svd_tri2x2(f: DDouble, g: DDouble, h: DDouble) -> Svd2x2 {
    let mut ft = f;
    let mut fa = f.abs();
    let mut ht = h;
    let mut ha = h.abs();
    // index of the largest entry, 1 = f, 2 = g, 3 = h
    let mut pmax = 1;
    let swap = ha > fa;
    if swap {
        pmax = 3;
        std::mem::swap(&mut ft, &mut ht);
        std::mem::swap(&mut fa, &mut ha);
    }
    let gt = g;
    let ga = g.abs();
    let ssmax;
    let ssmin;
    let clt;
    let slt;
    let crt;
    let srt;
    if ga.hi == 0. {
        ssmin = ha;
        ssmax = fa;
        clt = DDouble::ONE;
        crt = DDouble::ONE;
        slt = DDouble::ZERO;
        srt = DDouble::ZERO;
    } else if ga > fa && (fa / ga).hi < EPS.hi {
        // g dominates to working precision
        pmax = 2;
        ssmax = ga;
        ssmin = if ha.hi > 1. {
            fa / (ga / ha)
        } else {
            (fa / ga) * ha
        };
        clt = DDouble::ONE;
        slt = ht / gt;
        srt = DDouble::ONE;
        crt = ft / gt;
    } else {
        if ga > fa {
            pmax = 2;
        }
        let d = fa - ha;
        let l = if d == fa { DDouble::ONE } else { d / fa };
        let m = gt / ft;
        let t = 2. - l;
        let mm = m * m;
        let tt = t * t;
        let s = sqrt(tt + mm);
        let r = if l.hi == 0. { m.abs() } else { sqrt(l * l + mm) };
        let a = 0.5 * (s + r);
        ssmin = ha / a;
        ssmax = fa * a;
        let t = if mm.hi == 0. {
            if l.hi == 0. {
                DDouble::from_f64(2. * sign_of(ft) * sign_of(gt))
            } else {
                gt / copysignqd(d, ft.hi) + m / t
            }
        } else {
            (m / (s + t) + m / (r + l)) * (1. + a)
        };
        let l = sqrt(t * t + 4.);
        crt = 2. / l;
        srt = t / l;
        clt = (crt + srt * m) / a;
        slt = (ht / ft) * srt / a;
    }
    let (csl, snl, csr, snr) = if swap {
        (srt, crt, slt, clt)
    } else {
        (clt, slt, crt, srt)
    };
    let tsign = match pmax {
        1 => sign_of(csr) * sign_of(csl) * sign_of(f),
        2 => sign_of(snr) * sign_of(csl) * sign_of(g),
        _ => sign_of(snr) * sign_of(snl) * sign_of(h),
    };
    let s1 = copysignqd(ssmax, tsign);
    let s2 = copysignqd(ssmin, tsign * sign_of(f) * sign_of(h));

    let u = [[csl, -snl], [snl, csl]];
    let mut vt = [[csr, snr], [-snr, csr]];
    let mut s = [s1, s2];
    for (si, row) in s.iter_mut().zip(vt.iter_mut()) {
        if si.hi.is_sign_negative() {
            *si = -*si;
            *row = [-row[0], -row[1]];
        }
    }
    Svd2x2 { u, s, vt }
}
