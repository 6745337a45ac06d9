//! 3x3 matrices for 2D affine transforms.
//!
//! Matrices are stored as 9 floats in column-major order, the layout
//! `uniformMatrix3fv` expects, so a matrix can be uploaded as-is.

use cgmath::Matrix3;
use serde::*;
use std::ops::Mul;

/// A 3x3 column-major matrix.
///
/// Element `i` of the array is row `i % 3` of column `i / 3`; the translation
/// part of an affine transform lives in elements 6 and 7.
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct M3(pub [f32; 9]);

impl M3 {
    pub fn identity() -> Self {
        #[rustfmt::skip]
        let m = [
            1.0, 0.0, 0.0,
            0.0, 1.0, 0.0,
            0.0, 0.0, 1.0,
        ];
        M3(m)
    }

    pub fn translation(tx: f32, ty: f32) -> Self {
        #[rustfmt::skip]
        let m = [
            1.0, 0.0, 0.0,
            0.0, 1.0, 0.0,
            tx,  ty,  1.0,
        ];
        M3(m)
    }

    /// A rotation by `angle` radians. With y pointing down (pixel space) a
    /// positive angle turns clockwise on screen.
    pub fn rotation(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        #[rustfmt::skip]
        let m = [
            c,   -s,  0.0,
            s,   c,   0.0,
            0.0, 0.0, 1.0,
        ];
        M3(m)
    }

    pub fn scaling(sx: f32, sy: f32) -> Self {
        #[rustfmt::skip]
        let m = [
            sx,  0.0, 0.0,
            0.0, sy,  0.0,
            0.0, 0.0, 1.0,
        ];
        M3(m)
    }

    /// Returns `a * b`: the resulting transform applies `b` first, then `a`.
    pub fn multiply(a: &M3, b: &M3) -> M3 {
        let a = &a.0;
        let b = &b.0;
        let mut out = [0.0; 9];
        for col in 0..3 {
            for row in 0..3 {
                out[col * 3 + row] = b[col * 3] * a[row]
                    + b[col * 3 + 1] * a[3 + row]
                    + b[col * 3 + 2] * a[6 + row];
            }
        }
        M3(out)
    }

    /// Applies the matrix to the point `(x, y, 1)` and drops the third component.
    pub fn transform_point(&self, x: f32, y: f32) -> (f32, f32) {
        let m = &self.0;
        (m[0] * x + m[3] * y + m[6], m[1] * x + m[4] * y + m[7])
    }
}

impl Default for M3 {
    fn default() -> Self {
        M3::identity()
    }
}

impl Mul for M3 {
    type Output = M3;

    fn mul(self, rhs: M3) -> M3 {
        M3::multiply(&self, &rhs)
    }
}

impl AsRef<[f32; 9]> for M3 {
    fn as_ref(&self) -> &[f32; 9] {
        &self.0
    }
}

impl From<Matrix3<f32>> for M3 {
    fn from(m: Matrix3<f32>) -> Self {
        let cols: [[f32; 3]; 3] = m.into();
        let mut out = [0.0; 9];
        for (i, col) in cols.iter().enumerate() {
            out[i * 3..i * 3 + 3].copy_from_slice(col);
        }
        M3(out)
    }
}

impl From<M3> for Matrix3<f32> {
    fn from(m: M3) -> Self {
        let m = m.0;
        Matrix3::new(m[0], m[1], m[2], m[3], m[4], m[5], m[6], m[7], m[8])
    }
}
