// Definitions that are used throughout all modules

use crate::config::{CRYSTALLOGRAPHIC_TOLERANCE, SYMMETRY_TOLERANCE};

// Rule used to decide whether two points (or transforms) coincide
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EqualityRule {
    /// Component-wise within epsilon, no wraparound
    Tolerance(f64),
    /// Component-wise within epsilon after reducing differences modulo 1
    Periodic(f64),
}

impl EqualityRule {
    pub fn tolerance() -> Self {
        EqualityRule::Tolerance(SYMMETRY_TOLERANCE)
    }

    pub fn periodic() -> Self {
        EqualityRule::Periodic(CRYSTALLOGRAPHIC_TOLERANCE)
    }

    pub fn epsilon(&self) -> f64 {
        match self {
            EqualityRule::Tolerance(eps) | EqualityRule::Periodic(eps) => *eps,
        }
    }
}

impl Default for EqualityRule {
    fn default() -> Self {
        Self::tolerance()
    }
}
