use rectnest::io::svg::SvgDrawOptions;
use rectnest::selection::SelectionConfig;
use serde::{Deserialize, Serialize};

/// Configuration for the job runner, loaded from an optional JSON file.
/// Every field falls back to its default, an empty object is a valid config.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct CliConfig {
    /// Selection settings, the embedded nesting settings drive both job variants
    pub selection: SelectionConfig,
    /// Optional SVG drawing options
    pub svg_draw_options: SvgDrawOptions,
}
