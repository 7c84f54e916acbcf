use crate::geometry::primitives::Point;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Display, Formatter};
use svg::Document;
use svg::node::element::path::Data;
use svg::node::element::{Path, Text};

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
#[serde(default)]
pub struct SvgDrawOptions {
    ///The theme to use for the drawings
    pub theme: SvgLayoutTheme,
    ///Stamp generated documents with the generation time
    pub timestamp: bool,
}

impl Default for SvgDrawOptions {
    fn default() -> Self {
        Self {
            theme: SvgLayoutTheme::default(),
            timestamp: true,
        }
    }
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
#[serde(default)]
pub struct SvgLayoutTheme {
    pub cut_stroke: Color,
    pub cut_stroke_width: f32,
    pub part_label_size: f32,
    pub sheet_outline: Color,
    pub sheet_outline_width: f32,
    pub cut_area_fill: Color,
    pub cut_area_opacity: f32,
    pub cut_area_stroke_width: f32,
    pub area_label_size: f32,
}

impl Default for SvgLayoutTheme {
    fn default() -> Self {
        SvgLayoutTheme::RED_MARKUP
    }
}

impl SvgLayoutTheme {
    /// Black cut lines, red cut-area markup. The palette of shop print-outs.
    pub const RED_MARKUP: SvgLayoutTheme = SvgLayoutTheme {
        cut_stroke: Color(0x00, 0x00, 0x00),
        cut_stroke_width: 0.01,
        part_label_size: 0.1,
        sheet_outline: Color(0x66, 0x66, 0x66),
        sheet_outline_width: 0.02,
        cut_area_fill: Color(0xFF, 0x00, 0x00),
        cut_area_opacity: 0.3,
        cut_area_stroke_width: 0.01,
        area_label_size: 0.08,
    };

    pub const GRAY: SvgLayoutTheme = SvgLayoutTheme {
        cut_stroke: Color(0x2D, 0x2D, 0x2D),
        cut_stroke_width: 0.01,
        part_label_size: 0.1,
        sheet_outline: Color(0xD3, 0xD3, 0xD3),
        sheet_outline_width: 0.02,
        cut_area_fill: Color(0x7A, 0x7A, 0x7A),
        cut_area_opacity: 0.3,
        cut_area_stroke_width: 0.01,
        area_label_size: 0.08,
    };
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Color(u8, u8, u8);

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl From<String> for Color {
    fn from(mut s: String) -> Self {
        if s.starts_with('#') {
            s.remove(0);
        }
        let r = u8::from_str_radix(&s[0..2], 16).unwrap();
        let g = u8::from_str_radix(&s[2..4], 16).unwrap();
        let b = u8::from_str_radix(&s[4..6], 16).unwrap();
        Color(r, g, b)
    }
}

impl From<&str> for Color {
    fn from(s: &str) -> Self {
        Color::from(s.to_owned())
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<<S as Serializer>::Ok, <S as Serializer>::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&*format!("{self}"))
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, <D as Deserializer<'de>>::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Color::from(s))
    }
}

/// Document shell with physical dimensions in inches and a matching viewBox.
pub fn document_frame(width: f32, height: f32, options: &SvgDrawOptions) -> Document {
    let mut doc = Document::new()
        .set("width", format!("{width}in"))
        .set("height", format!("{height}in"))
        .set("viewBox", format!("0 0 {width} {height}"));
    if options.timestamp {
        doc = doc.set("data-generated", jiff::Timestamp::now().to_string());
    }
    doc
}

/// Centered annotation for documents rendered from degraded input.
pub fn error_label(message: &str, width: f32, height: f32, size: f32, color: Color) -> Text {
    Text::new(message)
        .set("x", width / 2.0)
        .set("y", height / 2.0)
        .set("font-family", "Arial, sans-serif")
        .set("font-size", format!("{size}in"))
        .set("fill", color.to_string())
        .set("text-anchor", "middle")
}

pub fn data_to_path(data: Data, params: &[(&str, &str)]) -> Path {
    let mut path = Path::new();
    for param in params {
        path = path.set(param.0, param.1)
    }
    path.set("d", data)
}

pub fn polygon_data(polygon: &[Point]) -> Data {
    let mut data = Data::new().move_to::<(f32, f32)>(polygon[0].into());
    for point in &polygon[1..] {
        data = data.line_to::<(f32, f32)>((*point).into());
    }
    data.close()
}
