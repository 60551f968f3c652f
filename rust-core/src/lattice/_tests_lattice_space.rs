#[cfg(test)]
mod _tests_lattice_space {
    use super::super::lattice_space::{default_offset, GeneratorSpec, LatticeSpace};
    use crate::config::{MAX_DIM, MIN_DIM};
    use crate::error::TilingError;
    use crate::interfaces::{pair_count, AxisPair};
    use nalgebra::Vector2;
    use std::f64::consts::PI;

    const TOL: f64 = 1e-10;

    fn penrose_space() -> LatticeSpace {
        LatticeSpace::new(5, &GeneratorSpec::penrose(), &default_offset(5)).unwrap()
    }

    fn assert_vector_approx_eq(v1: Vector2<f64>, v2: Vector2<f64>, epsilon: f64) {
        assert!(
            (v1 - v2).norm() < epsilon,
            "Vectors not approximately equal: {:?} != {:?}",
            v1,
            v2
        );
    }

    #[test]
    fn test_dimension_limits() {
        for dimension in [0, 1, MAX_DIM + 1] {
            let result = LatticeSpace::new(dimension, &GeneratorSpec::Symmetric { order: 32 }, &default_offset(dimension));
            assert!(matches!(
                result,
                Err(TilingError::InvalidDimension { dimension: d, min: MIN_DIM, max: MAX_DIM }) if d == dimension
            ));
        }

        let lowest = LatticeSpace::new(MIN_DIM, &GeneratorSpec::Symmetric { order: 4 }, &default_offset(MIN_DIM));
        assert!(lowest.is_ok());
        let highest = LatticeSpace::new(MAX_DIM, &GeneratorSpec::Symmetric { order: 2 * MAX_DIM + 1 }, &default_offset(MAX_DIM));
        assert!(highest.is_ok());
    }

    #[test]
    fn test_symmetric_star_is_unit_and_ordered() {
        let space = penrose_space();
        assert_eq!(space.dimension(), 5);
        for axis in 0..5 {
            let angle = 2.0 * PI * axis as f64 / 5.0;
            assert_vector_approx_eq(space.planar_generator(axis), Vector2::new(angle.cos(), angle.sin()), TOL);
        }
    }

    #[test]
    fn test_sign_correction_folds_lower_half_plane() {
        // Order 3: axis 2 points at 240°, stored folded at 60° with sign -1
        let space = LatticeSpace::new(3, &GeneratorSpec::Symmetric { order: 3 }, &default_offset(3)).unwrap();
        assert_eq!(space.signs(), &[1, 1, -1]);

        let folded = space.projection_vector(2);
        assert!(folded.y >= 0.0);
        assert_vector_approx_eq(folded, Vector2::new((PI / 3.0).cos(), (PI / 3.0).sin()), TOL);
        assert_vector_approx_eq(space.planar_generator(2), -folded, TOL);

        for axis in 0..3 {
            let v = space.projection_vector(axis);
            let angle = v.y.atan2(v.x);
            assert!((0.0..PI).contains(&angle), "axis {} folded to {}", axis, angle);
        }
    }

    #[test]
    fn test_project_is_linear_and_origin_preserving() {
        let space = penrose_space();
        let origin = space.project(&[0; 5]).unwrap();
        assert_vector_approx_eq(origin, Vector2::zeros(), TOL);

        let a = [1, -2, 0, 3, 1];
        let b = [0, 4, -1, -1, 2];
        let sum: Vec<i32> = a.iter().zip(&b).map(|(x, y)| x + y).collect();
        let lhs = space.project(&sum).unwrap();
        let rhs = space.project(&a).unwrap() + space.project(&b).unwrap();
        assert_vector_approx_eq(lhs, rhs, TOL);

        let unit = space.project(&[0, 0, 1, 0, 0]).unwrap();
        let expected = space.projection_vector(2) * f64::from(space.sign(2));
        assert_vector_approx_eq(unit, expected, TOL);
    }

    #[test]
    fn test_project_origin_for_every_valid_dimension() {
        for dimension in MIN_DIM..=MAX_DIM {
            let spec = GeneratorSpec::Symmetric { order: 2 * dimension + 1 };
            let space = LatticeSpace::new(dimension, &spec, &default_offset(dimension)).unwrap();
            let origin = space.project(&vec![0; dimension]).unwrap();
            assert_vector_approx_eq(origin, Vector2::zeros(), TOL);
        }
    }

    #[test]
    fn test_project_rejects_wrong_length() {
        let space = penrose_space();
        assert!(matches!(
            space.project(&[1, 2, 3]),
            Err(TilingError::CoordinateLength { expected: 5, actual: 3 })
        ));
    }

    #[test]
    fn test_invalid_generators() {
        let parallel = LatticeSpace::new(
            3,
            &GeneratorSpec::Vectors(vec![[1.0, 0.0], [0.0, 1.0], [-2.0, 0.0]]),
            &default_offset(3),
        );
        assert!(matches!(parallel, Err(TilingError::InvalidGenerator(_))));

        let zero = LatticeSpace::new(2, &GeneratorSpec::Vectors(vec![[1.0, 0.0], [0.0, 0.0]]), &default_offset(2));
        assert!(matches!(zero, Err(TilingError::InvalidGenerator(_))));

        let wrong_count = LatticeSpace::new(3, &GeneratorSpec::Angles(vec![0.0, 1.0]), &default_offset(3));
        assert!(matches!(wrong_count, Err(TilingError::InvalidGenerator(_))));

        let low_order = LatticeSpace::new(2, &GeneratorSpec::Symmetric { order: 2 }, &default_offset(2));
        assert!(matches!(low_order, Err(TilingError::InvalidGenerator(_))));

        // Order 4 repeats directions beyond two axes
        let repeated = LatticeSpace::new(3, &GeneratorSpec::Symmetric { order: 4 }, &default_offset(3));
        assert!(matches!(repeated, Err(TilingError::InvalidGenerator(_))));
    }

    #[test]
    fn test_invalid_offset() {
        let short = LatticeSpace::new(5, &GeneratorSpec::penrose(), &[0.1, 0.2]);
        assert!(matches!(short, Err(TilingError::InvalidOffset(_))));

        let nan = LatticeSpace::new(2, &GeneratorSpec::Symmetric { order: 4 }, &[0.1, f64::NAN]);
        assert!(matches!(nan, Err(TilingError::InvalidOffset(_))));
    }

    #[test]
    fn test_admissible_pairs_and_angles() {
        let space = penrose_space();
        let pairs = space.admissible_pairs();
        assert_eq!(pairs.len(), pair_count(5));
        assert_eq!(pairs, AxisPair::all(5).collect::<Vec<_>>());

        // Penrose rhombi: 72° for neighbouring axes, 144° otherwise
        let thick = AxisPair::new(0, 1).unwrap();
        let thin = AxisPair::new(0, 2).unwrap();
        assert!((space.rhombus_angle(thick) - 2.0 * PI / 5.0).abs() < TOL);
        assert!((space.rhombus_angle(thin) - 4.0 * PI / 5.0).abs() < TOL);
    }

    #[test]
    fn test_projection_matrix_and_frame_operator() {
        let space = penrose_space();
        let matrix = space.projection_matrix();
        assert_eq!(matrix.nrows(), 2);
        assert_eq!(matrix.ncols(), 5);
        for axis in 0..5 {
            assert_vector_approx_eq(matrix.column(axis).into_owned(), space.projection_vector(axis), TOL);
        }

        // A symmetric star of D unit vectors has S = (D/2) I
        let frame = space.frame_operator();
        assert!((frame[(0, 0)] - 2.5).abs() < TOL);
        assert!((frame[(1, 1)] - 2.5).abs() < TOL);
        assert!(frame[(0, 1)].abs() < TOL);
    }

    #[test]
    fn test_default_offset_is_fractional_and_distinct() {
        let offset = default_offset(MAX_DIM);
        assert_eq!(offset.len(), MAX_DIM);
        assert!(offset.iter().all(|value| (0.0..1.0).contains(value)));
        for i in 0..MAX_DIM {
            for j in i + 1..MAX_DIM {
                assert!((offset[i] - offset[j]).abs() > 1e-6);
            }
        }
    }
}
