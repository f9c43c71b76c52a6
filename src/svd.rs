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
use crate::double_double::DDouble;
use crate::err::DdError;
use crate::linalg::{givens, householder, svvals_tri2x2};
use crate::matrix::Matrix;
use std::cmp::Ordering;

/// Off-diagonal entries below this fraction of their neighbours are dropped.
const SVD_TOLERANCE: f64 = 100. * 5e-32;

/// `a = u * B * vt` with `B` upper bidiagonal, diagonal `d` and superdiagonal `e`.
#[derive(Clone, Debug, PartialEq)]
pub struct Bidiagonal {
    pub u: Matrix,
    pub d: Vec<DDouble>,
    pub e: Vec<DDouble>,
    pub vt: Matrix,
}

/// Reduces a tall or square matrix to upper bidiagonal form with Householder reflectors.
///
/// `u` is square of order `rows`, `vt` of order `cols`.
pub fn householder_bidiag(a: &Matrix) -> Result<Bidiagonal, DdError> {
    let m = a.rows();
    let n = a.cols();
    if n == 0 || m < n {
        return Err(DdError::ShapeMismatch);
    }
    let mut b = a.clone();
    let mut u = Matrix::identity(m);
    let mut vt = Matrix::identity(n);
    for j in 0..n {
        let column: Vec<DDouble> = (j..m).map(|i| b[(i, j)]).collect();
        let h = householder(&column)?;
        h.apply_left(&mut b, j, j)?;
        for i in j + 1..m {
            b[(i, j)] = DDouble::ZERO;
        }
        h.apply_right(&mut u, 0, j)?;
        if j + 2 < n {
            let h = householder(&b.row(j)[j + 1..])?;
            h.apply_right(&mut b, j, j + 1)?;
            for k in j + 2..n {
                b[(j, k)] = DDouble::ZERO;
            }
            h.apply_left(&mut vt, j + 1, 0)?;
        }
    }
    let d = (0..n).map(|j| b[(j, j)]).collect();
    let e = (0..n - 1).map(|j| b[(j, j + 1)]).collect();
    Ok(Bidiagonal { u, d, e, vt })
}

/// Lower bound of the smallest singular value of a bidiagonal matrix.
fn smallest_singular_bound(d: &[DDouble], e: &[DDouble]) -> DDouble {
    let n = d.len();
    let mut lambda = d[n - 1].abs();
    let mut smin = lambda;
    for j in (0..n - 1).rev() {
        let den = lambda + e[j].abs();
        lambda = if den.hi == 0. {
            DDouble::ZERO
        } else {
            d[j].abs() * (lambda / den)
        };
        smin = smin.min(lambda);
    }
    let mut mu = d[0].abs();
    smin = smin.min(mu);
    for j in 0..n - 1 {
        let den = mu + e[j].abs();
        mu = if den.hi == 0. {
            DDouble::ZERO
        } else {
            d[j + 1].abs() * (mu / den)
        };
        smin = smin.min(mu);
    }
    smin
}

/// Rotates away `e[k]` when `d[k]` is zero, chasing the bulge down to row `n2`.
fn zero_diagonal_row(
    d: &mut [DDouble],
    e: &mut [DDouble],
    u: &mut Matrix,
    k: usize,
    n2: usize,
) -> Result<(), DdError> {
    let mut x = e[k];
    e[k] = DDouble::ZERO;
    for j in k + 1..=n2 {
        let (r, g) = givens(d[j], x);
        d[j] = r;
        if j < n2 {
            x = -(g.s * e[j]);
            e[j] = g.c * e[j];
        }
        u.rotate_columns(j, k, &g)?;
    }
    Ok(())
}

/// One implicit zero-shift-safe QR sweep over the block `n1..=n2`.
fn chase_bulge(
    d: &mut [DDouble],
    e: &mut [DDouble],
    u: &mut Matrix,
    vt: &mut Matrix,
    n1: usize,
    n2: usize,
    shift: DDouble,
) -> Result<(), DdError> {
    let sign = 1f64.copysign(d[n1].hi);
    let mut f = (d[n1].abs() - shift) * (sign + shift / d[n1]);
    let mut g = e[n1];
    for i in n1..n2 {
        let (r, rot) = givens(f, g);
        if i > n1 {
            e[i - 1] = r;
        }
        f = rot.c * d[i] + rot.s * e[i];
        e[i] = rot.c * e[i] - rot.s * d[i];
        g = rot.s * d[i + 1];
        d[i + 1] = rot.c * d[i + 1];
        vt.rotate_rows(i, i + 1, &rot)?;

        let (r, rot) = givens(f, g);
        d[i] = r;
        f = rot.c * e[i] + rot.s * d[i + 1];
        d[i + 1] = rot.c * d[i + 1] - rot.s * e[i];
        if i + 1 < n2 {
            g = rot.s * e[i + 1];
            e[i + 1] = rot.c * e[i + 1];
        }
        u.rotate_columns(i, i + 1, &rot)?;
    }
    e[n2 - 1] = f;
    Ok(())
}

/// Golub-Kahan SVD step loop on the bidiagonal `(d, e)`.
///
/// Rotations are accumulated into the columns of `u` and the rows of `vt`.
/// On success `e` is all zeros and `d` holds the singular values, unsorted and
/// possibly negative.
pub fn golub_kahan_svd(
    d: &mut [DDouble],
    e: &mut [DDouble],
    u: &mut Matrix,
    vt: &mut Matrix,
    max_iter: usize,
) -> Result<(), DdError> {
    let n = d.len();
    if n == 0 {
        return Ok(());
    }
    if e.len() + 1 != n || u.cols() < n || vt.rows() < n {
        return Err(DdError::ShapeMismatch);
    }
    if n == 1 {
        return Ok(());
    }
    let thresh = SVD_TOLERANCE * smallest_singular_bound(d, e);
    for _ in 0..max_iter {
        for i in 0..n - 1 {
            let ae = e[i].abs();
            if ae <= thresh || ae <= SVD_TOLERANCE * (d[i].abs() + d[i + 1].abs()) {
                e[i] = DDouble::ZERO;
            }
        }
        // bottom of the lowest unreduced block
        let Some(n2) = (1..n).rev().find(|&i| e[i - 1].hi != 0.) else {
            return Ok(());
        };
        let n1 = (1..n2).rev().find(|&i| e[i - 1].hi == 0.).unwrap_or(0);
        if let Some(k) = (n1..n2).find(|&k| d[k].hi == 0.) {
            zero_diagonal_row(d, e, u, k, n2)?;
            continue;
        }
        let (_, shift) = svvals_tri2x2(d[n2 - 1], e[n2 - 1], d[n2]);
        chase_bulge(d, e, u, vt, n1, n2, shift)?;
    }
    Err(DdError::NotConverged)
}

/// Thin singular value decomposition `a = u[.., ..k] * diag(s) * vt`, `k = min(rows, cols)`.
#[derive(Clone, Debug, PartialEq)]
pub struct Svd {
    /// Square, of order `rows`.
    pub u: Matrix,
    /// Non-negative, in decreasing order.
    pub s: Vec<DDouble>,
    /// `k` rows of length `cols`.
    pub vt: Matrix,
}

/// Singular value decomposition of `a`.
///
/// Wide matrices are decomposed through their transpose. NaN entries give
/// [DdError::NotANumber], infinite ones [DdError::OutOfRange].
pub fn svd(a: &Matrix) -> Result<Svd, DdError> {
    if a.rows() == 0 || a.cols() == 0 {
        return Err(DdError::ShapeMismatch);
    }
    if a.as_slice().iter().any(|v| v.hi.is_nan()) {
        return Err(DdError::NotANumber);
    }
    if a.as_slice().iter().any(|v| v.hi.is_infinite()) {
        return Err(DdError::OutOfRange);
    }
    if a.rows() < a.cols() {
        let t = svd(&a.transpose())?;
        let k = t.s.len();
        let mut u = Matrix::zeros(a.rows(), a.rows());
        for i in 0..a.rows() {
            for j in 0..k {
                u[(i, j)] = t.vt[(j, i)];
            }
        }
        let mut vt = Matrix::zeros(k, a.cols());
        for i in 0..k {
            for j in 0..a.cols() {
                vt[(i, j)] = t.u[(j, i)];
            }
        }
        return Ok(Svd { u, s: t.s, vt });
    }
    let n = a.cols();
    let Bidiagonal {
        mut u,
        mut d,
        mut e,
        mut vt,
    } = householder_bidiag(a)?;
    golub_kahan_svd(&mut d, &mut e, &mut u, &mut vt, 30 * n * n)?;

    for (i, di) in d.iter_mut().enumerate() {
        if di.hi.is_sign_negative() {
            *di = -*di;
            for j in 0..n {
                vt[(i, j)] = -vt[(i, j)];
            }
        }
    }
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&x, &y| d[y].partial_cmp(&d[x]).unwrap_or(Ordering::Equal));

    let s = order.iter().map(|&i| d[i]).collect();
    let mut sorted_u = u.clone();
    let mut sorted_vt = Matrix::zeros(n, n);
    for (dst, &src) in order.iter().enumerate() {
        for r in 0..u.rows() {
            sorted_u[(r, dst)] = u[(r, src)];
        }
        for c in 0..n {
            sorted_vt[(dst, c)] = vt[(src, c)];
        }
    }
    Ok(Svd {
        u: sorted_u,
        s,
        vt: sorted_vt,
    })
}
