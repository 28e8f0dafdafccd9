#[cfg(test)]
mod _tests_xyz_parser {
    use super::super::xyz_parser::*;
    use approx::assert_abs_diff_eq;
    use nalgebra::Matrix3;

    #[test]
    fn test_parse_identity() {
        let (matrix, translation) = parse_xyz("x,y,z").unwrap();
        assert_eq!(matrix, Matrix3::identity());
        assert_eq!(translation.norm(), 0.0);
    }

    #[test]
    fn test_parse_negative_with_translation() {
        let (matrix, translation) = parse_xyz("-x+1/2, -y, z+1/2").unwrap();
        assert_eq!(matrix, Matrix3::new(-1.0, 0.0, 0.0, 0.0, -1.0, 0.0, 0.0, 0.0, 1.0));
        assert_abs_diff_eq!(translation.x, 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(translation.y, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(translation.z, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_parse_mixed_variables() {
        // Hexagonal-style rows with two variables per axis
        let (matrix, _) = parse_xyz("x-y, x, z").unwrap();
        assert_eq!(matrix, Matrix3::new(1.0, -1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn test_parse_constants() {
        let (_, t) = parse_axis_expression("x+1/3").unwrap();
        assert_abs_diff_eq!(t, 1.0 / 3.0, epsilon = 1e-12);

        let (_, t) = parse_axis_expression("-1/3+y").unwrap();
        assert_abs_diff_eq!(t, -1.0 / 3.0, epsilon = 1e-12);

        let (_, t) = parse_axis_expression("z+0.25").unwrap();
        assert_abs_diff_eq!(t, 0.25, epsilon = 1e-12);

        let (_, t) = parse_axis_expression("-x-1").unwrap();
        assert_abs_diff_eq!(t, -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_parse_whitespace_and_case() {
        let (coeffs, t) = parse_axis_expression("  - X + 1 / 2 ").unwrap();
        assert_eq!(coeffs, [-1.0, 0.0, 0.0]);
        assert_abs_diff_eq!(t, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_parse_explicit_unit_coefficient() {
        let (coeffs, _) = parse_axis_expression("-1y").unwrap();
        assert_eq!(coeffs, [0.0, -1.0, 0.0]);
    }

    #[test]
    fn test_reject_wrong_axis_count() {
        assert!(parse_xyz("x,y").is_err());
        assert!(parse_xyz("x,y,z,x").is_err());
    }

    #[test]
    fn test_reject_bad_expressions() {
        let bad = [
            "",       // empty
            "w",      // unknown variable
            "2x",     // coefficient outside {-1, 0, 1}
            "x+x",    // repeated variable
            "x+",     // dangling sign
            "x1/2",   // missing operator between terms
            "x+1/0",  // zero denominator
            "x+1/",   // missing denominator
            "x+1..5", // malformed decimal
        ];
        for expr in bad {
            let err = parse_axis_expression(expr).unwrap_err();
            assert!(err.is_parse(), "expected parse error for '{}'", expr);
        }
    }

    #[test]
    fn test_error_mentions_axis() {
        let err = parse_xyz("x, 2y, z").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("axis 2"));
        assert!(message.contains("x, 2y, z"));
    }
}
