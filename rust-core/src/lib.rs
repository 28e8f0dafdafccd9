//! Crystallographic symmetry-operator library
//!
//! This library provides the algebra of crystallographic symmetry operators:
//! parsing of algebraic triplets such as `-x+1/2,y,-z+1/2`, composition,
//! tolerance-aware and periodic equality, crystallographic normalization, and
//! the group-level queries built on top (closure tests, centering
//! classification, site multiplicity).

pub mod config;
pub mod errors;
pub mod interfaces;
pub mod symmetries;

pub use errors::{SymmetryError, SymmetryResult};
pub use symmetries::{AffineTransform, Centering, SymmetryGroup};

/// Common result type used throughout the library
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
