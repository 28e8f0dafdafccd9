// Symmetries module: Contains the algebra of crystallographic symmetry operators
// This module provides operator parsing, composition, equality and group-level analysis

// ======================== MODULE DECLARATIONS ========================
pub mod affine_transform;
pub mod centering;
pub mod group_verification;
pub mod multiplicity;
pub mod symmetry_group;
pub mod tolerance_equality;
pub mod xyz_parser;

mod _tests_multiplicity;
mod _tests_xyz_parser;

// ======================== SYMMETRY OPERATORS ========================
pub use affine_transform::AffineTransform; // struct - symmetry operator (3x3 linear part + translation)
// AffineTransform impl methods:
//   new(matrix: Matrix3<f64>, translation: Vector3<f64>) -> Self  - creates operator from parts
//   identity() -> Self                                            - creates identity operator x,y,z
//   pure_translation(translation: Vector3<f64>) -> Self           - creates lattice translation operator
//   parse(xyz: &str) -> SymmetryResult<Self>                      - parses "-x+1/2,y,-z+1/2" (also via FromStr)
//   matrix(&self) -> &Matrix3<f64>                                - returns linear part
//   translation(&self) -> &Vector3<f64>                           - returns translation
//   concatenate(&self, other: &Self) -> Self                      - composes operators (other applied first)
//   apply(&self, point: Vector3<f64>) -> Vector3<f64>             - maps a point: matrix * p + t
//   inverse(&self) -> Option<Self>                                - inverse operator if matrix is invertible
//   normalize_crystallographically(&mut self)                     - reduces translation into [0, 1)
//   normalized(&self) -> Self                                     - normalized copy
//   is_equal_to(&self, other: &Self, eps: f64) -> bool            - component-wise comparison, no wraparound
//   is_pure_translation(&self) -> bool                            - linear part is identity
//   is_unit(&self) -> bool                                        - identity operator
//   has_non_zero_translation_component(&self) -> bool             - any translation component nonzero
//   to_xyz(&self) -> String                                       - renders algebraic triplet (also via Display)

pub use xyz_parser::{
    parse_xyz,             // fn(input: &str) -> SymmetryResult<(Matrix3<f64>, Vector3<f64>)> - parses full triplet
    parse_axis_expression, // fn(expr: &str) -> SymmetryResult<([f64; 3], f64)> - parses one axis expression
};

// ======================== TOLERANCE EQUALITY ========================
pub use tolerance_equality::{
    ToleranceEq,                       // trait - equals_with_tolerance / equals_crystallographically
    approx_equal,                      // fn(a: f64, b: f64, tol: f64) -> bool - scalar comparison
    approx_equal_modulo_one,           // fn(a: f64, b: f64, tol: f64) -> bool - scalar comparison modulo 1
    points_equal,                      // fn(a: &Vector3<f64>, b: &Vector3<f64>, eps: f64) -> bool - no wraparound
    points_equal_crystallographically, // fn(a: &Vector3<f64>, b: &Vector3<f64>, eps: f64) -> bool - modulo 1
};

// ======================== SYMMETRY GROUPS ========================
pub use symmetry_group::SymmetryGroup; // struct - ordered set of symmetry operators
// SymmetryGroup impl methods:
//   new() -> Self                                                 - creates empty group
//   from_transforms(transforms: Vec<AffineTransform>) -> Self     - creates group without validity checks
//   from_xyz_strings(xyz: impl IntoIterator<Item: AsRef<str>>) -> SymmetryResult<Self> - parses operator strings
//   transforms(&self) -> &[AffineTransform]                       - returns operators in insertion order
//   to_xyz_strings(&self) -> Vec<String>                          - renders operators as triplets
//   index_of(&self, transform: &AffineTransform, eps: f64) -> Option<usize> - first tolerance-equal operator
//   convolute(&self, other: &Self) -> Self                        - deduplicated pairwise product of two groups
//   is_equal_to(&self, other: &Self, eps: f64) -> bool            - order-independent comparison (first-found)
//   normalize_crystallographically(&mut self)                     - normalizes every operator in place
//   pure_translations(&self) -> Vec<AffineTransform>              - centering translations (identity excluded)
//   non_translations(&self) -> SymmetryGroup                      - translation-free operators (identity excluded)
//   centering(&self) -> Centering                                 - classifies pure translations
//
// Defined in group_verification.rs:
//   is_group(&mut self) -> SymmetryResult<bool>                   - closure test, normalizes self first
//   is_space_group(&self) -> SymmetryResult<bool>                 - closure test modulo lattice translations
//
// Defined in multiplicity.rs:
//   multiplicity(&self, point: Vector3<f64>, rule: EqualityRule) -> usize - operators fixing point
//   point_group_multiplicity(&self, point: Vector3<f64>, eps: f64) -> usize - no wraparound
//   space_group_multiplicity(&self, point: Option<Vector3<f64>>) -> usize - modulo 1, 0 for None

// ======================== CENTERING ========================
pub use centering::{
    Centering,                         // enum - lattice centering (P, A, B, C, I, R, F, Unknown)
    classify_centering,                // fn(translations: &[AffineTransform]) -> Centering - default tolerance
    classify_centering_with_tolerance, // fn(translations: &[AffineTransform], eps: f64) -> Centering
};
// Centering impl methods:
//   symbol(&self) -> &'static str                                 - one-letter symbol
//   translations(&self) -> &'static [[f64; 3]]                    - canonical centering vectors
//   translation_operators(&self) -> Vec<AffineTransform>          - canonical vectors as operators
