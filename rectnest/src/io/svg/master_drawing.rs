use crate::entities::Sheet;
use crate::geometry::primitives::Point;
use crate::io::ext_repr::RegionDescriptor;
use crate::io::svg::svg_util::{
    SvgDrawOptions, data_to_path, document_frame, error_label, polygon_data,
};
use svg::Document;
use svg::node::element::{Rectangle, Text, Title};

/// Renders `sheet` with every historical and new cut area on it.
///
/// A visualization aid, not a machine input. Areas with polygon points render
/// as filled paths, the rest as rectangles, each labeled with a short
/// identifier. A sheet without positive dimensions degrades to a minimal
/// document with a visible annotation.
pub fn master_drawing(
    sheet: &Sheet,
    cut_areas: &[RegionDescriptor],
    options: &SvgDrawOptions,
) -> Document {
    let theme = &options.theme;

    if !(sheet.width > 0.0 && sheet.height > 0.0) {
        return document_frame(1.0, 1.0, options)
            .add(Title::new("Master Sheet Layout - All Cut Areas"))
            .add(error_label(
                "Invalid sheet dimensions",
                1.0,
                1.0,
                theme.area_label_size,
                theme.cut_area_fill,
            ));
    }

    let mut doc = document_frame(sheet.width, sheet.height, options)
        .add(Title::new("Master Sheet Layout - All Cut Areas"))
        .add(
            Rectangle::new()
                .set("class", "sheet-outline")
                .set("x", 0)
                .set("y", 0)
                .set("width", sheet.width)
                .set("height", sheet.height)
                .set("fill", "none")
                .set("stroke", theme.sheet_outline.to_string())
                .set("stroke-width", format!("{}in", theme.sheet_outline_width)),
        );

    for (idx, area) in cut_areas.iter().enumerate() {
        let part_id = area.part_id.map(|id| id.to_string()).unwrap_or_default();

        doc = match area.polygon.as_deref().filter(|poly| !poly.is_empty()) {
            Some(poly) => {
                let points: Vec<Point> = poly.iter().map(|p| Point(p.x, p.y)).collect();
                doc.add(data_to_path(
                    polygon_data(&points),
                    &[
                        ("class", "cut-area"),
                        ("fill", &*theme.cut_area_fill.to_string()),
                        ("fill-opacity", &*format!("{}", theme.cut_area_opacity)),
                        ("stroke", &*theme.cut_area_fill.to_string()),
                        (
                            "stroke-width",
                            &*format!("{}in", theme.cut_area_stroke_width),
                        ),
                        ("data-part-id", &part_id),
                    ],
                ))
            }
            None => doc.add(
                Rectangle::new()
                    .set("class", "cut-area")
                    .set("x", area.x)
                    .set("y", area.y)
                    .set("width", area.width)
                    .set("height", area.height)
                    .set("fill", theme.cut_area_fill.to_string())
                    .set("fill-opacity", theme.cut_area_opacity)
                    .set("stroke", theme.cut_area_fill.to_string())
                    .set(
                        "stroke-width",
                        format!("{}in", theme.cut_area_stroke_width),
                    )
                    .set("data-part-id", part_id.as_str()),
            ),
        };

        let label_text = match area.part_name.as_deref().filter(|name| !name.is_empty()) {
            Some(name) => name.chars().take(5).collect::<String>(),
            None => format!("#{}", idx + 1),
        };
        doc = doc.add(
            Text::new(label_text)
                .set("class", "area-label")
                .set("x", area.x + area.width / 2.0)
                .set("y", area.y + area.height / 2.0)
                .set("font-family", "Arial, sans-serif")
                .set("font-size", format!("{}in", theme.area_label_size))
                .set("fill", theme.cut_area_fill.to_string())
                .set("text-anchor", "middle"),
        );
    }
    doc
}
