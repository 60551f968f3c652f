#[cfg(test)]
mod _tests_quasi_tiling {
    use super::super::builder::{TilingBuilder, TilingConfig};
    use super::super::enumerator::ViewExtent;
    use super::super::quasi_tiling::{build_many, QuasiTiling};
    use super::super::reporter::NullReporter;
    use crate::error::TilingError;
    use crate::interfaces::ScanOrder;
    use crate::lattice::{default_offset, GeneratorSpec};

    fn build(config: TilingConfig) -> QuasiTiling {
        QuasiTiling::build(config, &mut NullReporter).unwrap()
    }

    fn assert_structural_invariants(tiling: &QuasiTiling) {
        let dimension = tiling.dimension();
        assert_eq!(tiling.vertices().element_count() % dimension, 0);
        assert_eq!(tiling.vertices().element_count(), tiling.vertex_count() * dimension);
        for (_, list) in tiling.families().iter() {
            assert!(list.iter().all(|anchor| anchor < tiling.vertex_count()));
        }
    }

    #[test]
    fn test_penrose_scenario() {
        let tiling = build(TilingConfig::penrose(ViewExtent::square(4.0)));

        assert_eq!(tiling.dimension(), 5);
        assert!(tiling.vertex_count() > 0);
        assert_eq!(tiling.families().family_count(), 10);
        assert!(tiling.families().tile_count() > 0);
        assert_structural_invariants(&tiling);
    }

    #[test]
    fn test_minimum_dimension_scenario() {
        let tiling = TilingBuilder::new()
            .with_dimension(2)
            .with_symmetry(4)
            .with_extent(3.0, 3.0)
            .build()
            .unwrap();

        assert_eq!(tiling.families().family_count(), 1);
        assert!(!tiling.tile_list(0, 1).unwrap().is_empty());
        assert_structural_invariants(&tiling);
    }

    #[test]
    fn test_ammann_beenker_has_six_families() {
        let tiling = build(TilingConfig::ammann_beenker(ViewExtent::square(5.0)));
        assert_eq!(tiling.families().family_count(), 6);

        let summary = tiling.summary();
        let mut angles: Vec<f64> = summary.families.iter().map(|family| family.angle_degrees.round()).collect();
        angles.sort_by(f64::total_cmp);
        angles.dedup();
        // Squares and 45° rhombi only
        assert_eq!(angles, vec![45.0, 90.0, 135.0]);
        assert_structural_invariants(&tiling);
    }

    #[test]
    fn test_builds_are_deterministic() {
        let config = TilingConfig::penrose(ViewExtent::new(4.0, 3.0));
        let first = build(config.clone());
        let second = build(config);

        assert_eq!(first.vertices().as_flat(), second.vertices().as_flat());
        assert_eq!(first.families(), second.families());
    }

    #[test]
    fn test_scan_order_changes_indices_not_tiles() {
        let ascending = build(TilingConfig::penrose(ViewExtent::square(4.0)));
        let descending = TilingBuilder::new()
            .with_dimension(5)
            .with_symmetry(5)
            .with_extent(4.0, 4.0)
            .with_scan_order(ScanOrder::Descending)
            .build()
            .unwrap();

        assert_eq!(ascending.vertex_count(), descending.vertex_count());
        assert_eq!(ascending.families().tile_count(), descending.families().tile_count());
        assert_ne!(ascending.vertex(0).unwrap(), descending.vertex(0).unwrap());
    }

    #[test]
    fn test_builder_defaults() {
        let config = TilingBuilder::new().config();
        assert_eq!(config.dimension, 5);
        assert_eq!(config.generators, GeneratorSpec::Symmetric { order: 5 });
        assert_eq!(config.offset, default_offset(5));

        // Even dimensions double the star order to keep axes apart
        let even = TilingBuilder::new().with_dimension(4).config();
        assert_eq!(even.generators, GeneratorSpec::Symmetric { order: 8 });
        assert_eq!(even.offset.len(), 4);
    }

    #[test]
    fn test_invalid_configurations() {
        let too_small = TilingBuilder::new().with_dimension(1).build();
        assert!(matches!(too_small, Err(TilingError::InvalidDimension { dimension: 1, .. })));

        let too_large = TilingBuilder::new().with_dimension(40).build();
        assert!(matches!(too_large, Err(TilingError::InvalidDimension { dimension: 40, .. })));

        let parallel = TilingBuilder::new().with_dimension(4).with_symmetry(4).build();
        assert!(matches!(parallel, Err(TilingError::InvalidGenerator(_))));

        let short_offset = TilingBuilder::new().with_offset(vec![0.2, 0.3]).build();
        assert!(matches!(short_offset, Err(TilingError::InvalidOffset(_))));

        let no_view = TilingBuilder::new().with_extent(0.0, 4.0).build();
        assert!(matches!(no_view, Err(TilingError::InvalidExtent(_))));
    }

    #[test]
    fn test_tile_records() {
        let tiling = build(TilingConfig::penrose(ViewExtent::square(4.0)));
        let records = tiling.tile_records().unwrap();
        assert_eq!(records.len(), tiling.families().tile_count());

        for window in records.windows(2) {
            assert!(window[0].family <= window[1].family);
        }
        for record in &records {
            assert_eq!(record.dimension, 5);
            assert!(record.anchor < tiling.vertex_count());
            let centroid = tiling
                .projector()
                .centroid_of(record.anchor, record.axes[0], record.axes[1])
                .unwrap();
            assert_eq!(record.centroid, [centroid.x, centroid.y]);
        }
    }

    #[test]
    fn test_summary_matches_tiling() {
        let tiling = build(TilingConfig::penrose(ViewExtent::square(4.0)));
        let summary = tiling.summary();

        assert_eq!(summary.dimension, 5);
        assert_eq!(summary.vertex_count, tiling.vertex_count());
        assert_eq!(summary.family_count, 10);
        assert_eq!(summary.tile_count, summary.families.iter().map(|family| family.tiles).sum::<usize>());
        assert!(summary.bounds.is_some());

        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains("\"family_count\":10"));
    }

    #[test]
    fn test_config_from_json() {
        let json = r#"{ "dimension": 4, "generators": { "symmetric": { "order": 8 } },
                        "enumeration": { "extent": { "width": 4.0, "height": 4.0 } } }"#;
        let config: TilingConfig = serde_json::from_str(json).unwrap();
        assert!(config.offset.is_empty());
        assert_eq!(config.resolved_offset(), default_offset(4));

        let tiling = build(config);
        assert_eq!(tiling.families().family_count(), 6);
    }

    #[test]
    fn test_build_many_keeps_input_order() {
        let configs = vec![
            TilingConfig::penrose(ViewExtent::square(3.0)),
            TilingConfig::symmetric(1, 3, ViewExtent::square(3.0)),
            TilingConfig::ammann_beenker(ViewExtent::square(3.0)),
        ];
        let results = build_many(&configs);

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().map(QuasiTiling::dimension).ok(), Some(5));
        assert!(matches!(results[1], Err(TilingError::InvalidDimension { .. })));
        assert_eq!(results[2].as_ref().map(QuasiTiling::dimension).ok(), Some(4));
    }

    #[test]
    fn test_rebuild_is_independent() {
        let first = build(TilingConfig::penrose(ViewExtent::square(4.0)));
        let second = build(TilingConfig::symmetric(3, 3, ViewExtent::square(4.0)));

        assert_eq!(second.dimension(), 3);
        assert!(second.vertices().iter().all(|point| point.len() == 3));
        assert_eq!(second.families().family_count(), 3);
        assert_eq!(first.dimension(), 5);
    }
}
