use std::fmt;
use std::str::FromStr;

use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};

use crate::config::{MAX_FRACTION_DENOMINATOR, SYMMETRY_TOLERANCE};
use crate::errors::{SymmetryError, SymmetryResult};
use crate::symmetries::tolerance_equality::{approx_equal, matrices_equal, ToleranceEq};
use crate::symmetries::xyz_parser::parse_xyz;

/// A crystallographic symmetry operator: linear part + translation.
///
/// Maps a fractional coordinate `p` to `matrix * p + translation`. Operators
/// parsed from algebraic strings only carry -1, 0 and 1 in the matrix, but
/// composition and application work for any real matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AffineTransform {
    matrix: Matrix3<f64>,
    translation: Vector3<f64>,
}

impl AffineTransform {
    /// Create an operator from its linear part and translation
    pub fn new(matrix: Matrix3<f64>, translation: Vector3<f64>) -> Self {
        Self {
            matrix,
            translation,
        }
    }

    /// Create identity operation
    pub fn identity() -> Self {
        Self {
            matrix: Matrix3::identity(),
            translation: Vector3::zeros(),
        }
    }

    /// Create a pure lattice translation (identity matrix)
    pub fn pure_translation(translation: Vector3<f64>) -> Self {
        Self {
            matrix: Matrix3::identity(),
            translation,
        }
    }

    /// Parse an algebraic triplet such as `"-x+1/2, y, -z+1/2"`.
    ///
    /// # Errors
    /// [`SymmetryError::Parse`] if the string does not have exactly three axis
    /// expressions, or an axis cannot be decomposed into -1/0/1 coefficients
    /// for `x`, `y`, `z` plus a constant.
    pub fn parse(xyz: &str) -> SymmetryResult<Self> {
        let (matrix, translation) = parse_xyz(xyz)?;
        Ok(Self::new(matrix, translation))
    }

    pub fn matrix(&self) -> &Matrix3<f64> {
        &self.matrix
    }

    pub fn translation(&self) -> &Vector3<f64> {
        &self.translation
    }

    /// Compose two operators.
    ///
    /// `other` is applied first, then `self`:
    /// `a.concatenate(&b).apply(p) == a.apply(b.apply(p))`.
    pub fn concatenate(&self, other: &AffineTransform) -> AffineTransform {
        AffineTransform {
            matrix: self.matrix * other.matrix,
            translation: self.matrix * other.translation + self.translation,
        }
    }

    /// Apply symmetry operation to a point
    pub fn apply(&self, point: Vector3<f64>) -> Vector3<f64> {
        self.matrix * point + self.translation
    }

    /// Inverse operator, or `None` if the linear part is singular
    pub fn inverse(&self) -> Option<AffineTransform> {
        let matrix = self.matrix.try_inverse()?;
        let translation = -(matrix * self.translation);
        Some(AffineTransform {
            matrix,
            translation,
        })
    }

    /// Reduce every translation component into [0, 1).
    ///
    /// Negative components wrap forward (-0.5 becomes 0.5, -0.0 becomes 0.0);
    /// values that land within tolerance of 1 are snapped to 0.
    pub fn normalize_crystallographically(&mut self) {
        for t in self.translation.iter_mut() {
            *t = normalize_component(*t);
        }
    }

    /// Normalized copy, leaving `self` untouched
    pub fn normalized(&self) -> AffineTransform {
        let mut copy = self.clone();
        copy.normalize_crystallographically();
        copy
    }

    /// Component-wise comparison within `eps`, no periodic wraparound.
    pub fn is_equal_to(&self, other: &AffineTransform, eps: f64) -> bool {
        self.equals_with_tolerance(other, eps)
    }

    /// True if the linear part is the identity
    pub fn is_pure_translation(&self) -> bool {
        matrices_equal(&self.matrix, &Matrix3::identity(), SYMMETRY_TOLERANCE)
    }

    /// Check if this is the identity operation
    pub fn is_unit(&self) -> bool {
        self.is_pure_translation() && !self.has_non_zero_translation_component()
    }

    pub fn has_non_zero_translation_component(&self) -> bool {
        self.translation
            .iter()
            .any(|t| !approx_equal(*t, 0.0, SYMMETRY_TOLERANCE))
    }

    /// Render as an algebraic triplet, e.g. `-x+1/2,y,-z+1/2`
    pub fn to_xyz(&self) -> String {
        (0..3)
            .map(|row| format_row(&self.matrix, &self.translation, row))
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl Default for AffineTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl FromStr for AffineTransform {
    type Err = SymmetryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for AffineTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_xyz())
    }
}

fn normalize_component(t: f64) -> f64 {
    // + 0.0 turns -0.0 into 0.0
    let reduced = t.rem_euclid(1.0) + 0.0;
    if reduced >= 1.0 - SYMMETRY_TOLERANCE || reduced <= SYMMETRY_TOLERANCE {
        0.0
    } else {
        reduced
    }
}

fn format_row(matrix: &Matrix3<f64>, translation: &Vector3<f64>, row: usize) -> String {
    let mut terms: Vec<(bool, String)> = Vec::new();

    for (col, name) in ["x", "y", "z"].iter().enumerate() {
        let c = matrix[(row, col)];
        if approx_equal(c, 0.0, SYMMETRY_TOLERANCE) {
            continue;
        }
        let body = if approx_equal(c.abs(), 1.0, SYMMETRY_TOLERANCE) {
            name.to_string()
        } else {
            format!("{}*{}", format_constant(c.abs()), name)
        };
        terms.push((c < 0.0, body));
    }

    let t = translation[row];
    if !approx_equal(t, 0.0, SYMMETRY_TOLERANCE) {
        terms.push((t < 0.0, format_constant(t.abs())));
    }

    if terms.is_empty() {
        return "0".to_string();
    }

    let mut out = String::new();
    for (i, (negative, body)) in terms.iter().enumerate() {
        if *negative {
            out.push('-');
        } else if i > 0 {
            out.push('+');
        }
        out.push_str(body);
    }
    out
}

/// Format a non-negative constant as the simplest fraction when exact, else as a decimal
fn format_constant(value: f64) -> String {
    for denominator in 1..=MAX_FRACTION_DENOMINATOR {
        let numerator = (value * denominator as f64).round();
        if approx_equal(numerator / denominator as f64, value, SYMMETRY_TOLERANCE) {
            // f64 Display prints whole numbers without exponent or fraction digits
            return if denominator == 1 {
                format!("{}", numerator)
            } else {
                format!("{}/{}", numerator, denominator)
            };
        }
    }
    format!("{}", value)
}
