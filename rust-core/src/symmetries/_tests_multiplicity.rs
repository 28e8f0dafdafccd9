#[cfg(test)]
mod _tests_multiplicity {
    use super::super::symmetry_group::SymmetryGroup;
    use crate::interfaces::EqualityRule;
    use nalgebra::Vector3;

    const EPS: f64 = 1e-8;

    fn group(ops: &[&str]) -> SymmetryGroup {
        SymmetryGroup::from_xyz_strings(ops.iter().copied()).unwrap()
    }

    fn mmm() -> SymmetryGroup {
        group(&["x,y,z", "-x,-y,z", "-x,y,-z", "x,-y,-z", "-x,-y,-z", "x,y,-z", "x,-y,z", "-x,y,z"])
    }

    #[test]
    fn test_identity_multiplicity() {
        let identity = group(&["x,y,z"]);
        for p in [Vector3::zeros(), Vector3::new(0.1, -2.5, 7.0), Vector3::new(0.5, 0.5, 0.5)] {
            assert_eq!(identity.point_group_multiplicity(p, EPS), 1);
        }
    }

    #[test]
    fn test_point_group_multiplicity() {
        let g = mmm();
        assert_eq!(g.point_group_multiplicity(Vector3::zeros(), EPS), 8);
        assert_eq!(g.point_group_multiplicity(Vector3::new(0.0, 0.0, 0.3), EPS), 4);
        assert_eq!(g.point_group_multiplicity(Vector3::new(0.0, 0.2, 0.3), EPS), 2);
        assert_eq!(g.point_group_multiplicity(Vector3::new(0.1, 0.2, 0.3), EPS), 1);
    }

    #[test]
    fn test_space_group_multiplicity_uses_wraparound() {
        let inversion = group(&["x,y,z", "-x,-y,-z"]);
        let half = Vector3::new(0.5, 0.5, 0.5);
        assert_eq!(inversion.point_group_multiplicity(half, EPS), 1);
        assert_eq!(inversion.space_group_multiplicity(Some(half)), 2);
    }

    #[test]
    fn test_space_group_multiplicity_pbca() {
        let pbca = group(&[
            "x,y,z",
            "-x+1/2,-y,z+1/2",
            "x+1/2,-y+1/2,-z",
            "-x,y+1/2,-z+1/2",
            "-x,-y,-z",
            "x-1/2,y,-z-1/2",
            "-x-1/2,y-1/2,z",
            "x,-y-1/2,z-1/2",
        ]);
        // Inversion centre at the origin
        assert_eq!(pbca.space_group_multiplicity(Some(Vector3::zeros())), 2);
        assert_eq!(pbca.space_group_multiplicity(Some(Vector3::new(0.0, 1.0, 0.0))), 2);
        // General position
        assert_eq!(pbca.space_group_multiplicity(Some(Vector3::new(0.1, 0.2, 0.3))), 1);
    }

    #[test]
    fn test_space_group_multiplicity_without_point() {
        assert_eq!(mmm().space_group_multiplicity(None), 0);
    }

    #[test]
    fn test_multiplicity_rule_selection() {
        let inversion = group(&["x,y,z", "-x,-y,-z"]);
        let p = Vector3::new(0.5, 0.0, 0.5);
        assert_eq!(inversion.multiplicity(p, EqualityRule::Tolerance(EPS)), 1);
        assert_eq!(inversion.multiplicity(p, EqualityRule::Periodic(EPS)), 2);
        assert_eq!(inversion.multiplicity(p, EqualityRule::default()), 1);
    }
}
