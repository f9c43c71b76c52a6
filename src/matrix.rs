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
use crate::linalg::Givens;
use std::ops::{Index, IndexMut};

/// Dense row-major matrix of double-double values.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<DDouble>,
}

impl Matrix {
    /// Wraps row-major `data`, which must hold exactly `rows * cols` values.
    pub fn new(rows: usize, cols: usize, data: Vec<DDouble>) -> Result<Matrix, DdError> {
        if rows.checked_mul(cols) != Some(data.len()) {
            return Err(DdError::ShapeMismatch);
        }
        Ok(Matrix { rows, cols, data })
    }

    pub fn from_f64(rows: usize, cols: usize, data: &[f64]) -> Result<Matrix, DdError> {
        Matrix::new(
            rows,
            cols,
            data.iter().map(|&v| DDouble::from_f64(v)).collect(),
        )
    }

    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix {
            rows,
            cols,
            data: vec![DDouble::ZERO; rows * cols],
        }
    }

    pub fn identity(n: usize) -> Matrix {
        let mut m = Matrix::zeros(n, n);
        for i in 0..n {
            m.data[i * n + i] = DDouble::ONE;
        }
        m
    }

    #[inline]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn as_slice(&self) -> &[DDouble] {
        &self.data
    }

    #[inline]
    pub fn row(&self, i: usize) -> &[DDouble] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    pub fn column(&self, j: usize) -> Vec<DDouble> {
        (0..self.rows).map(|i| self[(i, j)]).collect()
    }

    pub fn transpose(&self) -> Matrix {
        let mut t = Matrix::zeros(self.cols, self.rows);
        for i in 0..self.rows {
            for j in 0..self.cols {
                t[(j, i)] = self[(i, j)];
            }
        }
        t
    }

    pub fn mat_mul(&self, other: &Matrix) -> Result<Matrix, DdError> {
        if self.cols != other.rows {
            return Err(DdError::ShapeMismatch);
        }
        let mut r = Matrix::zeros(self.rows, other.cols);
        for i in 0..self.rows {
            for j in 0..other.cols {
                let mut acc = DDouble::ZERO;
                for k in 0..self.cols {
                    acc += self[(i, k)] * other[(k, j)];
                }
                r[(i, j)] = acc;
            }
        }
        Ok(r)
    }

    /// Replaces rows `k` and `q` by `G * [row k; row q]`.
    pub fn rotate_rows(&mut self, k: usize, q: usize, g: &Givens) -> Result<(), DdError> {
        if k >= self.rows || q >= self.rows || k == q {
            return Err(DdError::ShapeMismatch);
        }
        for j in 0..self.cols {
            let (x, y) = g.rotate(self[(k, j)], self[(q, j)]);
            self[(k, j)] = x;
            self[(q, j)] = y;
        }
        Ok(())
    }

    /// Replaces columns `k` and `q` by `[column k, column q] * G^T`.
    pub fn rotate_columns(&mut self, k: usize, q: usize, g: &Givens) -> Result<(), DdError> {
        if k >= self.cols || q >= self.cols || k == q {
            return Err(DdError::ShapeMismatch);
        }
        for i in 0..self.rows {
            let (x, y) = g.rotate(self[(i, k)], self[(i, q)]);
            self[(i, k)] = x;
            self[(i, q)] = y;
        }
        Ok(())
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = DDouble;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
        &self.data[i * self.cols + j]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    #[inline]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut Self::Output {
        &mut self.data[i * self.cols + j]
    }
}
