use nalgebra::{Matrix3, Vector3};

use crate::symmetries::affine_transform::AffineTransform;

/// Equality predicates under a numeric tolerance.
///
/// `equals_with_tolerance` compares component-wise with no wraparound.
/// `equals_crystallographically` additionally treats translation (or point)
/// components as equal when they differ by a whole lattice vector.
pub trait ToleranceEq {
    fn equals_with_tolerance(&self, other: &Self, eps: f64) -> bool;

    fn equals_crystallographically(&self, other: &Self, eps: f64) -> bool;
}

/// Check if two values are approximately equal within tolerance
pub fn approx_equal(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol
}

/// Check if two values are equal modulo 1 within tolerance
///
/// 0.999999999 and 0.0 compare equal, as do -0.25 and 0.75.
pub fn approx_equal_modulo_one(a: f64, b: f64, tol: f64) -> bool {
    let diff = a - b;
    (diff - diff.round()).abs() <= tol
}

/// Component-wise point comparison, no periodic wraparound
pub fn points_equal(a: &Vector3<f64>, b: &Vector3<f64>, eps: f64) -> bool {
    a.iter().zip(b.iter()).all(|(x, y)| approx_equal(*x, *y, eps))
}

/// Component-wise point comparison modulo 1 (fractional coordinates in a unit cell)
pub fn points_equal_crystallographically(a: &Vector3<f64>, b: &Vector3<f64>, eps: f64) -> bool {
    a.iter()
        .zip(b.iter())
        .all(|(x, y)| approx_equal_modulo_one(*x, *y, eps))
}

pub(crate) fn matrices_equal(a: &Matrix3<f64>, b: &Matrix3<f64>, eps: f64) -> bool {
    a.iter().zip(b.iter()).all(|(x, y)| approx_equal(*x, *y, eps))
}

impl ToleranceEq for Vector3<f64> {
    fn equals_with_tolerance(&self, other: &Self, eps: f64) -> bool {
        points_equal(self, other, eps)
    }

    fn equals_crystallographically(&self, other: &Self, eps: f64) -> bool {
        points_equal_crystallographically(self, other, eps)
    }
}

impl ToleranceEq for AffineTransform {
    fn equals_with_tolerance(&self, other: &Self, eps: f64) -> bool {
        matrices_equal(self.matrix(), other.matrix(), eps)
            && points_equal(self.translation(), other.translation(), eps)
    }

    fn equals_crystallographically(&self, other: &Self, eps: f64) -> bool {
        matrices_equal(self.matrix(), other.matrix(), eps)
            && points_equal_crystallographically(self.translation(), other.translation(), eps)
    }
}
