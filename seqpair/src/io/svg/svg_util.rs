use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct SvgDrawOptions {
    #[serde(default)]
    pub theme: SvgLayoutTheme,
    /// Draws the id of every rectangle at its center
    #[serde(default)]
    pub labels: bool,
    /// Draws the outline of the bounding box
    #[serde(default = "default_true")]
    pub bounding_box: bool,
}

impl Default for SvgDrawOptions {
    fn default() -> Self {
        Self {
            theme: SvgLayoutTheme::default(),
            labels: true,
            bounding_box: true,
        }
    }
}

fn default_true() -> bool {
    true
}

#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize, Default)]
pub enum SvgLayoutTheme {
    #[default]
    EarthTones,
    Gray,
}

impl SvgLayoutTheme {
    pub fn colors(&self) -> SvgThemeColors {
        match self {
            SvgLayoutTheme::EarthTones => EARTH_TONES_THEME,
            SvgLayoutTheme::Gray => GRAY_THEME,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct SvgThemeColors {
    pub stroke_width_multiplier: f32,
    pub background_fill: &'static str,
    pub rect_fill: &'static str,
    pub rotated_rect_fill: &'static str,
    pub block_fill: &'static str,
    pub bbox_stroke: &'static str,
}

pub static EARTH_TONES_THEME: SvgThemeColors = SvgThemeColors {
    stroke_width_multiplier: 2.0,
    background_fill: "#F4EBDD",
    rect_fill: "#FFC879",
    rotated_rect_fill: "#E3A857",
    block_fill: "#2D2D2D",
    bbox_stroke: "#CC824A",
};

pub static GRAY_THEME: SvgThemeColors = SvgThemeColors {
    stroke_width_multiplier: 2.5,
    background_fill: "#FFFFFF",
    rect_fill: "#D3D3D3",
    rotated_rect_fill: "#BEBEBE",
    block_fill: "#4C4C4C",
    bbox_stroke: "#000000",
};
