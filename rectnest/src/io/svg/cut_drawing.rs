use crate::entities::{Layout, Sheet};
use crate::io::svg::svg_util::{SvgDrawOptions, document_frame, error_label};
use svg::Document;
use svg::node::element::{Group, Rectangle, Text, Title};

/// Renders the new placements of `layout` on `sheet` as a cut-ready drawing.
///
/// Contains geometry for new parts only, existing cut regions never appear.
/// The x axis is flipped so the document origin sits at the sheet's top-right
/// corner, the orientation stock is loaded in. A layout without placements
/// degrades to a minimal document with a visible annotation.
pub fn cut_drawing(layout: &Layout, sheet: &Sheet, options: &SvgDrawOptions) -> Document {
    let theme = &options.theme;
    let mut doc = document_frame(sheet.width, sheet.height, options)
        .set("data-origin", "top-right")
        .add(Title::new("Laser Cut Layout - New Parts Only"));

    if layout.placements.is_empty() {
        return doc.add(error_label(
            "No placements to generate",
            sheet.width,
            sheet.height,
            theme.part_label_size,
            theme.cut_stroke,
        ));
    }

    for (idx, placement) in layout.placements.iter().enumerate() {
        // Flip x so (0,0) lands at the top-right corner of the sheet.
        let x = sheet.width - placement.x - placement.width;
        let y = placement.y;

        let outline = Rectangle::new()
            .set("class", "cut-path")
            .set("width", placement.width)
            .set("height", placement.height)
            .set("fill", "none")
            .set("stroke", theme.cut_stroke.to_string())
            .set("stroke-width", format!("{}in", theme.cut_stroke_width))
            .set("vector-effect", "non-scaling-stroke")
            .set("data-part-id", placement.part.id.to_string())
            .set(
                "data-part-name",
                placement.part.name.as_deref().unwrap_or("Unnamed"),
            );

        let label = Text::new((idx + 1).to_string())
            .set("class", "part-label")
            .set("x", placement.width / 2.0)
            .set("y", placement.height / 2.0)
            .set("font-family", "Arial, sans-serif")
            .set("font-size", format!("{}in", theme.part_label_size))
            .set("fill", theme.cut_stroke.to_string())
            .set("text-anchor", "middle");

        doc = doc.add(
            Group::new()
                .set("id", format!("part-{}", placement.part.id))
                .set(
                    "transform",
                    format!(
                        "translate({x},{y}) rotate({})",
                        placement.rotation.degrees()
                    ),
                )
                .add(outline)
                .add(label),
        );
    }
    doc
}
