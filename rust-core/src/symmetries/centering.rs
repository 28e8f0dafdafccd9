use std::fmt;

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::config::SYMMETRY_TOLERANCE;
use crate::symmetries::affine_transform::AffineTransform;
use crate::symmetries::tolerance_equality::ToleranceEq;

const HALF: f64 = 0.5;
const THIRD: f64 = 1.0 / 3.0;
const TWO_THIRDS: f64 = 2.0 / 3.0;

// Canonical centering translations (fractional coordinates)
const A_TRANSLATIONS: [[f64; 3]; 1] = [[0.0, HALF, HALF]];
const B_TRANSLATIONS: [[f64; 3]; 1] = [[HALF, 0.0, HALF]];
const C_TRANSLATIONS: [[f64; 3]; 1] = [[HALF, HALF, 0.0]];
const I_TRANSLATIONS: [[f64; 3]; 1] = [[HALF, HALF, HALF]];
const R_TRANSLATIONS: [[f64; 3]; 2] = [[TWO_THIRDS, THIRD, THIRD], [THIRD, TWO_THIRDS, TWO_THIRDS]];
const F_TRANSLATIONS: [[f64; 3]; 3] = [[0.0, HALF, HALF], [HALF, 0.0, HALF], [HALF, HALF, 0.0]];

/// Lattice centering, as implied by the pure-translation operators of a group.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Centering {
    Primitive,
    ACentered,
    BCentered,
    CCentered,
    BodyCentered,
    Rhombohedral,
    FaceCentered,
    Unknown,
}

impl Centering {
    /// Conventional one-letter symbol (`?` for unknown)
    pub fn symbol(&self) -> &'static str {
        match self {
            Centering::Primitive => "P",
            Centering::ACentered => "A",
            Centering::BCentered => "B",
            Centering::CCentered => "C",
            Centering::BodyCentered => "I",
            Centering::Rhombohedral => "R",
            Centering::FaceCentered => "F",
            Centering::Unknown => "?",
        }
    }

    /// The non-trivial centering translations (identity excluded)
    pub fn translations(&self) -> &'static [[f64; 3]] {
        match self {
            Centering::ACentered => &A_TRANSLATIONS,
            Centering::BCentered => &B_TRANSLATIONS,
            Centering::CCentered => &C_TRANSLATIONS,
            Centering::BodyCentered => &I_TRANSLATIONS,
            Centering::Rhombohedral => &R_TRANSLATIONS,
            Centering::FaceCentered => &F_TRANSLATIONS,
            Centering::Primitive | Centering::Unknown => &[],
        }
    }

    /// Centering translations as pure-translation operators
    pub fn translation_operators(&self) -> Vec<AffineTransform> {
        self.translations()
            .iter()
            .map(|t| AffineTransform::pure_translation(Vector3::from(*t)))
            .collect()
    }
}

impl fmt::Display for Centering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Classify a set of pure-translation operators with the default tolerance.
pub fn classify_centering(translations: &[AffineTransform]) -> Centering {
    classify_centering_with_tolerance(translations, SYMMETRY_TOLERANCE)
}

/// Classify a set of pure-translation operators.
///
/// The count decides which family is tried: none is primitive, one must be
/// the A, B, C or I vector, two must both be R vectors, three must all be F
/// vectors. Anything else is [`Centering::Unknown`]. Comparison is
/// component-wise without wraparound, so translations should be normalized
/// first. Each member is checked independently against the table, so a
/// repeated vector is not detected.
pub fn classify_centering_with_tolerance(translations: &[AffineTransform], eps: f64) -> Centering {
    match translations.len() {
        0 => Centering::Primitive,
        1 => [
            Centering::ACentered,
            Centering::BCentered,
            Centering::CCentered,
            Centering::BodyCentered,
        ]
        .into_iter()
        .find(|c| all_match(translations, *c, eps))
        .unwrap_or(Centering::Unknown),
        2 if all_match(translations, Centering::Rhombohedral, eps) => Centering::Rhombohedral,
        3 if all_match(translations, Centering::FaceCentered, eps) => Centering::FaceCentered,
        _ => Centering::Unknown,
    }
}

fn all_match(translations: &[AffineTransform], centering: Centering, eps: f64) -> bool {
    let canonical = centering.translation_operators();
    translations
        .iter()
        .all(|t| canonical.iter().any(|c| t.equals_with_tolerance(c, eps)))
}
