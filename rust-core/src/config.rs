// Constants

// Tolerances
pub const SYMMETRY_TOLERANCE: f64 = 1e-8; // For component-wise comparison and snapping normalized translations near 0 or 1
pub const CRYSTALLOGRAPHIC_TOLERANCE: f64 = 1e-6; // For modulo-1 (periodic) comparison of points

// Rendering
pub const MAX_FRACTION_DENOMINATOR: i64 = 12; // Largest denominator tried when printing constants as fractions
