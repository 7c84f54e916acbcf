#[cfg(test)]
mod tests {
    use rectnest::entities::{OccupiedRegion, RegionKind};
    use rectnest::geometry::Rotation;
    use rectnest::geometry::primitives::Rect;
    use rectnest::io::ext_repr::{PartDescriptor, RegionDescriptor, SheetDescriptor};
    use rectnest::io::{export, import};
    use rectnest::nesting::{NestConfig, NestingEngine};
    use rectnest::util::{FPA, assertions};
    use test_case::test_case;

    fn init_logger() {
        let _ = env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .try_init();
    }

    fn part(id: u64, width: f32, height: f32) -> PartDescriptor {
        PartDescriptor {
            id: Some(id),
            width: Some(width),
            height: Some(height),
            ..PartDescriptor::default()
        }
    }

    fn sheet(width: f32, height: f32) -> SheetDescriptor {
        SheetDescriptor {
            width,
            height,
            ..SheetDescriptor::default()
        }
    }

    fn engine(spacing: f32, margin: f32) -> NestingEngine {
        NestingEngine::new(NestConfig {
            spacing,
            margin,
            ..NestConfig::default()
        })
        .expect("valid config")
    }

    #[test]
    fn single_part_lands_bottom_left() {
        init_logger();
        let layout = engine(0.1, 0.0).place(&[part(1, 10.0, 10.0)], &sheet(20.0, 20.0), &[]);

        assert!(layout.is_complete());
        assert_eq!(layout.placements.len(), 1);
        let p = &layout.placements[0];
        assert_eq!((p.x, p.y), (0.0, 0.0));
        assert_eq!(p.rotation, Rotation::R0);
        assert_eq!(layout.total_area_used, 100.0);
        assert_eq!(layout.efficiency, 0.25);
        assert_eq!(layout.remaining_area, 300.0);
        assert_eq!(layout.new_cut_areas.len(), 1);
        assert_eq!(layout.new_cut_areas[0].polygon.len(), 4);
    }

    #[test]
    fn second_part_stacks_above_when_width_blocks_the_right() {
        init_logger();
        let layout = engine(0.1, 0.0).place(
            &[part(1, 10.0, 10.0), part(2, 10.0, 10.0)],
            &sheet(15.0, 25.0),
            &[],
        );

        assert!(layout.is_complete());
        let p = &layout.placements[1];
        assert_eq!(FPA(p.x), FPA(0.0));
        assert_eq!(FPA(p.y), FPA(10.1));
        assert_eq!(FPA(layout.efficiency), FPA(200.0 / 375.0));
    }

    #[test]
    fn parts_place_largest_first_with_stable_ties() {
        init_logger();
        let layout = engine(0.1, 0.0).place(
            &[part(1, 4.0, 4.0), part(2, 10.0, 10.0), part(3, 4.0, 4.0)],
            &sheet(30.0, 30.0),
            &[],
        );

        let order: Vec<u64> = layout.placements.iter().map(|p| p.part.id).collect();
        assert_eq!(order, vec![2, 1, 3]);
        assert_eq!(FPA(layout.placements[2].x), FPA(14.2));
        assert_eq!(FPA(layout.placements[2].y), FPA(0.0));
    }

    #[test]
    fn rotation_recovers_a_tight_vertical_slot() {
        init_logger();
        let layout = engine(0.1, 0.0).place(
            &[part(1, 6.0, 6.0), part(2, 8.0, 3.0)],
            &sheet(11.0, 30.0),
            &[],
        );

        assert!(layout.is_complete());
        let p = &layout.placements[1];
        assert_eq!(p.rotation, Rotation::R90);
        assert_eq!(FPA(p.x), FPA(6.1));
        assert_eq!(FPA(p.y), FPA(0.0));
        assert_eq!((p.width, p.height), (3.0, 8.0));
    }

    #[test]
    fn oversized_part_fails_without_aborting_the_run() {
        init_logger();
        let layout = engine(0.1, 0.0).place(
            &[part(1, 10.0, 10.0), part(2, 25.0, 3.0)],
            &sheet(20.0, 20.0),
            &[],
        );

        assert!(!layout.is_complete());
        assert_eq!(layout.placements.len(), 1);
        assert_eq!(layout.failed_parts.len(), 1);
        assert_eq!(layout.failed_parts[0].id, 2);
        assert_eq!(layout.efficiency, 0.25);
    }

    #[test]
    fn margin_offsets_placements_into_the_usable_window() {
        init_logger();
        let margin = 0.2;
        let layout = engine(0.1, margin).place(&[part(1, 10.0, 10.0)], &sheet(20.0, 20.0), &[]);

        let p = &layout.placements[0];
        assert_eq!(FPA(p.x), FPA(margin));
        assert_eq!(FPA(p.y), FPA(margin));

        let imported = import::sheet_from_descriptor(&sheet(20.0, 20.0), 0);
        assert!(assertions::placements_within_bounds(
            &layout.placements,
            &imported,
            margin
        ));
    }

    #[test_case(20.1, true; "exactly spacing apart fits")]
    #[test_case(20.0, false; "a hair too narrow fails")]
    fn spacing_threshold_is_exact(sheet_width: f32, fits: bool) {
        init_logger();
        let layout = engine(0.1, 0.0).place(
            &[part(1, 10.0, 10.0), part(2, 10.0, 10.0)],
            &sheet(sheet_width, 10.0),
            &[],
        );

        assert_eq!(layout.is_complete(), fits);
        if fits {
            assert_eq!(FPA(layout.placements[1].x), FPA(10.1));
        } else {
            assert_eq!(layout.failed_parts.len(), 1);
        }
    }

    #[test]
    fn existing_cut_areas_constrain_new_placements() {
        init_logger();
        let existing = RegionDescriptor {
            x: 0.0,
            y: 0.0,
            width: 10.0,
            height: 10.0,
            part_id: Some(99),
            ..RegionDescriptor::default()
        };
        let layout =
            engine(0.1, 0.0).place(&[part(1, 10.0, 9.8)], &sheet(19.9, 20.0), &[existing]);

        assert!(layout.is_complete());
        let p = &layout.placements[0];
        assert_eq!(FPA(p.x), FPA(0.0));
        assert_eq!(FPA(p.y), FPA(10.1));
        assert_eq!(p.rotation, Rotation::R0);
        assert_eq!(layout.new_cut_areas.len(), 1);
        assert_eq!(FPA(layout.efficiency), FPA(98.0 / 398.0));
        assert_eq!(FPA(layout.remaining_area), FPA(200.0));
    }

    #[test_case(0.0, 5.0; "edge touching allowed at zero spacing")]
    #[test_case(0.1, 5.1; "offset by spacing")]
    fn zero_size_region_still_constrains(spacing: f32, expected_x: f32) {
        init_logger();
        let point_region = RegionDescriptor {
            x: 5.0,
            y: 5.0,
            width: 0.0,
            height: 0.0,
            ..RegionDescriptor::default()
        };
        let layout =
            engine(spacing, 0.0).place(&[part(1, 10.0, 10.0)], &sheet(20.0, 20.0), &[point_region]);

        assert!(layout.is_complete());
        let p = &layout.placements[0];
        assert_eq!(FPA(p.x), FPA(expected_x));
        assert_eq!(FPA(p.y), FPA(5.0));
    }

    #[test]
    fn rotation_disabled_leaves_tall_parts_unplaced() {
        init_logger();
        let parts = [part(1, 3.0, 8.0)];
        let s = sheet(10.0, 4.0);

        let locked = NestingEngine::new(NestConfig {
            allow_rotation: false,
            spacing: 0.1,
            margin: 0.0,
            ..NestConfig::default()
        })
        .expect("valid config");
        assert_eq!(locked.place(&parts, &s, &[]).failed_parts.len(), 1);

        let free = engine(0.1, 0.0).place(&parts, &s, &[]);
        assert!(free.is_complete());
        assert_eq!(free.placements[0].rotation, Rotation::R90);
    }

    #[test]
    fn shrinking_the_sheet_only_moves_parts_into_failed() {
        init_logger();
        let parts = [
            part(1, 6.0, 6.0),
            part(2, 6.0, 6.0),
            part(3, 6.0, 6.0),
            part(4, 6.0, 6.0),
        ];
        let widths = [30.0, 24.0, 18.0, 12.0, 6.0, 5.0];
        let expected_placed = [4, 4, 3, 2, 1, 0];

        let mut previous: Option<Vec<u64>> = None;
        for (&width, &expected) in widths.iter().zip(&expected_placed) {
            let layout = engine(0.0, 0.0).place(&parts, &sheet(width, 6.0), &[]);
            let placed: Vec<u64> = layout.placements.iter().map(|p| p.part.id).collect();

            assert_eq!(placed.len(), expected, "sheet width {width}");
            assert_eq!(placed.len() + layout.failed_parts.len(), parts.len());
            if let Some(prev) = &previous {
                assert!(placed.iter().all(|id| prev.contains(id)), "width {width}");
            }
            previous = Some(placed);
        }
    }

    #[test]
    fn invariants_hold_on_a_dense_sheet() {
        init_logger();
        let spacing = 0.1;
        let parts = [
            part(1, 9.0, 7.0),
            part(2, 8.0, 6.0),
            part(3, 7.0, 7.0),
            part(4, 6.0, 5.0),
            part(5, 5.0, 4.0),
            part(6, 4.0, 4.0),
            part(7, 3.0, 6.0),
            part(8, 2.0, 2.0),
        ];
        let existing = RegionDescriptor {
            x: 20.0,
            y: 20.0,
            width: 3.0,
            height: 3.0,
            ..RegionDescriptor::default()
        };
        let layout = engine(spacing, 0.0).place(&parts, &sheet(24.0, 24.0), &[existing.clone()]);
        assert!(!layout.placements.is_empty());

        let mut regions: Vec<OccupiedRegion> = layout
            .placements
            .iter()
            .map(|p| OccupiedRegion {
                rect: p.rect(),
                rotation: p.rotation,
                kind: RegionKind::NewPart,
            })
            .collect();
        regions.push(import::region_from_descriptor(&existing));
        assert!(assertions::new_parts_clear_spacing(&regions, spacing));

        let sheet_rect = Rect {
            x_min: 0.0,
            y_min: 0.0,
            x_max: 24.0,
            y_max: 24.0,
        };
        for p in &layout.placements {
            assert!(sheet_rect.contains(&p.rect(), 1e-4), "{p:?} out of bounds");
        }
    }

    #[test]
    fn identical_inputs_produce_identical_layouts() {
        init_logger();
        let parts = [
            part(1, 9.0, 7.0),
            part(2, 8.0, 6.0),
            part(3, 7.0, 7.0),
            part(4, 6.0, 5.0),
            part(5, 5.0, 4.0),
        ];
        let existing = RegionDescriptor {
            x: 18.0,
            y: 0.0,
            width: 4.0,
            height: 4.0,
            ..RegionDescriptor::default()
        };
        let e = engine(0.1, 0.2);

        let a = e.place(&parts, &sheet(24.0, 24.0), &[existing.clone()]);
        let b = e.place(&parts, &sheet(24.0, 24.0), &[existing]);

        let a_json = serde_json::to_string(&export::export_layout(&a)).expect("serializable");
        let b_json = serde_json::to_string(&export::export_layout(&b)).expect("serializable");
        assert_eq!(a_json, b_json);
    }

    #[test]
    fn placing_on_an_imported_sheet_matches_the_descriptor_path() {
        init_logger();
        let parts = [part(1, 10.0, 10.0), part(2, 10.0, 10.0)];
        let descriptor = sheet(15.0, 25.0);
        let e = engine(0.1, 0.0);

        let imported = import::sheet_from_descriptor(&descriptor, 4);
        assert_eq!(imported.id, 4);

        let entity_run = e.place_on_sheet(&parts, &imported, &[]);
        let descriptor_run = e.place(&parts, &descriptor, &[]);
        assert_eq!(entity_run, descriptor_run);
    }

    #[test]
    fn engine_rejects_invalid_config() {
        assert!(
            NestingEngine::new(NestConfig {
                spacing: -1.0,
                ..NestConfig::default()
            })
            .is_err()
        );
        assert!(
            NestingEngine::new(NestConfig {
                margin: f32::INFINITY,
                ..NestConfig::default()
            })
            .is_err()
        );
        assert!(
            NestingEngine::new(NestConfig {
                margin: f32::NAN,
                ..NestConfig::default()
            })
            .is_err()
        );
    }

    #[test_case(None, None, (2.0, 2.0); "both dimensions missing")]
    #[test_case(None, Some(5.0), (2.0, 5.0); "width missing")]
    #[test_case(Some(5.0), None, (5.0, 2.0); "height missing")]
    fn unresolvable_dimensions_fall_back_to_the_placeholder(
        width: Option<f32>,
        height: Option<f32>,
        expected: (f32, f32),
    ) {
        init_logger();
        let descriptor = PartDescriptor {
            id: Some(1),
            width,
            height,
            ..PartDescriptor::default()
        };

        let imported = import::part_from_descriptor(&descriptor, 0);
        assert_eq!((imported.width, imported.height), expected);

        let layout = engine(0.1, 0.0).place(&[descriptor], &sheet(20.0, 20.0), &[]);
        assert!(layout.is_complete());
        let p = &layout.placements[0];
        assert_eq!((p.width, p.height), expected);
    }

    #[test]
    fn zero_area_sheet_fails_parts_and_reports_zero_efficiency() {
        init_logger();
        let layout = engine(0.1, 0.0).place(&[part(1, 1.0, 1.0)], &sheet(0.0, 0.0), &[]);

        assert!(layout.placements.is_empty());
        assert_eq!(layout.failed_parts.len(), 1);
        assert_eq!(layout.efficiency, 0.0);
        assert_eq!(layout.remaining_area, 0.0);
    }
}
