#[cfg(test)]
mod tests {
    use rectnest::entities::Sheet;
    use rectnest::io::ext_repr::{PartDescriptor, RegionDescriptor, SheetDescriptor};
    use rectnest::io::svg::{
        Color, DEFAULT_CLEARANCE_RADIUS, SvgDrawOptions, cut_drawing, dilated_bounds,
        extract_bounds, extract_points, master_drawing,
    };
    use rectnest::io::{export, import};
    use rectnest::nesting::{NestConfig, NestingEngine};
    use rectnest::util::FPA;
    use test_case::test_case;

    fn init_logger() {
        let _ = env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .try_init();
    }

    fn part(id: u64, name: Option<&str>, width: f32, height: f32) -> PartDescriptor {
        PartDescriptor {
            id: Some(id),
            name: name.map(str::to_owned),
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

    fn engine() -> NestingEngine {
        NestingEngine::new(NestConfig {
            margin: 0.0,
            ..NestConfig::default()
        })
        .expect("valid config")
    }

    fn plain_options() -> SvgDrawOptions {
        SvgDrawOptions {
            timestamp: false,
            ..SvgDrawOptions::default()
        }
    }

    #[test_case("M 10 20 L 30 40", &[(10.0, 20.0), (30.0, 40.0)]; "two commands")]
    #[test_case("M10,20L30,40Z", &[(10.0, 20.0), (30.0, 40.0)]; "compact with commas")]
    #[test_case("M 10 20 30 40 L 50 60", &[(10.0, 20.0), (30.0, 40.0), (50.0, 60.0)]; "implicit pairs")]
    #[test_case("M 10 20 30", &[(10.0, 20.0)]; "trailing number dropped")]
    #[test_case("0 0 M 5 6", &[(5.0, 6.0)]; "data before first command ignored")]
    #[test_case("M inf 5 L 1 2", &[(1.0, 2.0)]; "non finite tokens skipped")]
    #[test_case("M 1 2 H 5 V 7 L 3 4", &[(1.0, 2.0), (3.0, 4.0)]; "unpaired single params dropped")]
    #[test_case("1 2 3 4", &[]; "no command letters")]
    fn extract_points_cases(data: &str, expected: &[(f32, f32)]) {
        let points: Vec<(f32, f32)> = extract_points(data).iter().map(|p| (p.x(), p.y())).collect();
        assert_eq!(points, expected);
    }

    #[test_case("M -5 -5 L 10 20", (-5.0, -5.0, 10.0, 20.0); "negative minimum")]
    #[test_case("M 3 4", (3.0, 4.0, 3.0, 4.0); "single point collapses")]
    #[test_case("", (0.0, 0.0, 1.0, 1.0); "empty input unit box")]
    #[test_case("Z", (0.0, 0.0, 1.0, 1.0); "command without coordinates unit box")]
    fn extract_bounds_cases(data: &str, expected: (f32, f32, f32, f32)) {
        let r = extract_bounds(data);
        assert_eq!((r.x_min, r.y_min, r.x_max, r.y_max), expected);
    }

    #[test]
    fn dilated_bounds_grows_every_side() {
        let r = dilated_bounds("M 0 0 L 10 10", DEFAULT_CLEARANCE_RADIUS);
        assert_eq!(FPA(r.x_min), FPA(-0.05));
        assert_eq!(FPA(r.y_min), FPA(-0.05));
        assert_eq!(FPA(r.x_max), FPA(10.05));
        assert_eq!(FPA(r.y_max), FPA(10.05));
    }

    #[test]
    fn color_parses_and_prints_hex() {
        assert_eq!(Color::from("#3a9bc4").to_string(), "#3A9BC4");
        assert_eq!(Color::from("ff0000").to_string(), "#FF0000");

        let json = serde_json::to_string(&Color::from("#0a0B0c")).expect("serializable");
        assert_eq!(json, "\"#0A0B0C\"");
        let back: Color = serde_json::from_str(&json).expect("deserializable");
        assert_eq!(back, Color::from("#0a0b0c"));
    }

    #[test]
    fn draw_options_default_from_empty_json() {
        let options: SvgDrawOptions = serde_json::from_str("{}").expect("empty object is valid");
        assert_eq!(options, SvgDrawOptions::default());
        assert!(options.timestamp);
    }

    #[test]
    fn cut_drawing_flips_x_to_the_top_right_origin() {
        init_logger();
        let layout = engine().place(&[part(1, None, 10.0, 10.0)], &sheet(20.0, 20.0), &[]);
        let sheet = import::sheet_from_descriptor(&sheet(20.0, 20.0), 0);
        let svg = cut_drawing(&layout, &sheet, &plain_options()).to_string();

        assert!(svg.contains("Laser Cut Layout - New Parts Only"));
        assert!(svg.contains(r#"data-origin="top-right""#));
        assert!(svg.contains(r#"width="20in""#));
        // Placement at x=0 lands at x=10 after the flip.
        assert!(svg.contains(r#"transform="translate(10,0) rotate(0)""#));
        assert!(svg.contains(r#"id="part-1""#));
        assert!(svg.contains(r#"class="cut-path""#));
        assert!(svg.contains(r#"data-part-name="Unnamed""#));
        assert!(svg.contains(r#"vector-effect="non-scaling-stroke""#));
    }

    #[test]
    fn cut_drawing_carries_rotation_in_the_transform() {
        init_logger();
        let layout = engine().place(
            &[part(1, None, 6.0, 6.0), part(2, None, 8.0, 3.0)],
            &sheet(11.0, 30.0),
            &[],
        );
        let sheet = import::sheet_from_descriptor(&sheet(11.0, 30.0), 0);
        let svg = cut_drawing(&layout, &sheet, &plain_options()).to_string();

        assert!(svg.contains("rotate(90)"));
        assert!(svg.contains(r#"id="part-1""#));
        assert!(svg.contains(r#"id="part-2""#));
    }

    #[test]
    fn cut_drawing_annotates_an_empty_layout() {
        init_logger();
        let layout = engine().place(&[], &sheet(20.0, 20.0), &[]);
        let sheet = import::sheet_from_descriptor(&sheet(20.0, 20.0), 0);
        let svg = cut_drawing(&layout, &sheet, &plain_options()).to_string();

        assert!(svg.contains("No placements to generate"));
        assert!(svg.contains(r#"width="20in""#));
        assert!(!svg.contains("cut-path"));
    }

    #[test]
    fn master_drawing_renders_polygon_areas_with_labels() {
        init_logger();
        let layout = engine().place(
            &[part(7, Some("Side Panel"), 6.0, 4.0)],
            &sheet(20.0, 20.0),
            &[],
        );
        let areas: Vec<RegionDescriptor> = layout
            .new_cut_areas
            .iter()
            .map(export::export_cut_area)
            .collect();
        let sheet = import::sheet_from_descriptor(&sheet(20.0, 20.0), 0);
        let svg = master_drawing(&sheet, &areas, &plain_options()).to_string();

        assert!(svg.contains("Master Sheet Layout - All Cut Areas"));
        assert!(svg.contains(r#"class="sheet-outline""#));
        assert!(svg.contains("<path"));
        assert!(svg.contains(r#"class="cut-area""#));
        assert!(svg.contains(r#"data-part-id="7""#));
        assert!(svg.contains(r#"fill-opacity="0.3""#));
        // Labels truncate to the first five characters of the part name.
        assert!(svg.contains("Side"));
        assert!(!svg.contains("Side Panel"));
    }

    #[test]
    fn master_drawing_falls_back_to_rectangles_and_numbered_labels() {
        init_logger();
        let areas = [
            RegionDescriptor {
                x: 2.0,
                y: 3.0,
                width: 6.0,
                height: 4.0,
                ..RegionDescriptor::default()
            },
            RegionDescriptor {
                x: 10.0,
                y: 3.0,
                width: 5.0,
                height: 5.0,
                polygon: Some(vec![]),
                ..RegionDescriptor::default()
            },
        ];
        let sheet = Sheet {
            id: 0,
            width: 20.0,
            height: 20.0,
            remaining_area: 400.0,
        };
        let svg = master_drawing(&sheet, &areas, &plain_options()).to_string();

        // Sheet outline plus two area rectangles, the empty polygon does not count.
        assert_eq!(svg.matches("<rect").count(), 3);
        assert!(!svg.contains("<path"));
        assert!(svg.contains("#1"));
        assert!(svg.contains("#2"));
        assert!(svg.contains(r#"x="2""#));
    }

    #[test]
    fn master_drawing_annotates_invalid_sheet_dimensions() {
        init_logger();
        let sheet = Sheet {
            id: 0,
            width: 0.0,
            height: 0.0,
            remaining_area: 0.0,
        };
        let svg = master_drawing(&sheet, &[], &plain_options()).to_string();

        assert!(svg.contains("Invalid sheet dimensions"));
        assert!(svg.contains(r#"width="1in""#));
    }

    #[test]
    fn timestamp_attribute_follows_the_option() {
        init_logger();
        let layout = engine().place(&[], &sheet(10.0, 10.0), &[]);
        let sheet_entity = import::sheet_from_descriptor(&sheet(10.0, 10.0), 0);

        let stamped = cut_drawing(&layout, &sheet_entity, &SvgDrawOptions::default()).to_string();
        assert!(stamped.contains("data-generated"));

        let plain = cut_drawing(&layout, &sheet_entity, &plain_options()).to_string();
        assert!(!plain.contains("data-generated"));
    }
}
