use nalgebra::Vector3;

use crate::interfaces::EqualityRule;
use crate::symmetries::symmetry_group::SymmetryGroup;
use crate::symmetries::tolerance_equality::{points_equal, points_equal_crystallographically};

impl SymmetryGroup {
    /// Number of operators that map `point` onto itself under `rule`
    pub fn multiplicity(&self, point: Vector3<f64>, rule: EqualityRule) -> usize {
        self.iter()
            .map(|op| op.apply(point))
            .filter(|image| match rule {
                EqualityRule::Tolerance(eps) => points_equal(image, &point, eps),
                EqualityRule::Periodic(eps) => points_equal_crystallographically(image, &point, eps),
            })
            .count()
    }

    /// Site multiplicity WITHOUT crystallographic normalization.
    ///
    /// Suited to point groups, where no operator carries a translation.
    pub fn point_group_multiplicity(&self, point: Vector3<f64>, eps: f64) -> usize {
        self.multiplicity(point, EqualityRule::Tolerance(eps))
    }

    /// Site multiplicity WITH crystallographic normalization: images equal to
    /// `point` up to a lattice translation count. `None` gives 0.
    pub fn space_group_multiplicity(&self, point: Option<Vector3<f64>>) -> usize {
        match point {
            Some(p) => self.multiplicity(p, EqualityRule::periodic()),
            None => 0,
        }
    }
}
