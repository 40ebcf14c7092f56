use serde::{Deserialize, Serialize};

/// External representation of a [`Problem`](crate::entities::Problem)
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct ExtProblem {
    /// Rectangles to place
    #[serde(rename = "Components", alias = "rectangles", default)]
    pub rectangles: Vec<ExtRectangle>,
    /// Immovable obstacles
    #[serde(rename = "PreDefinedBlocks", alias = "fixed_blocks", default)]
    pub fixed_blocks: Vec<ExtFixedBlock>,
}

/// External representation of a [`Rectangle`](crate::entities::Rectangle).
/// Accepts positional (`[width, height]`, `[width, height, rotatable]`) or keyed entries.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum ExtRectangle {
    Positional(f32, f32),
    PositionalRotatable(f32, f32, bool),
    Keyed {
        width: f32,
        height: f32,
        #[serde(default)]
        rotatable: bool,
    },
    /// Anything else, rejected during import
    Unrecognized(serde_json::Value),
}

/// External representation of a [`FixedBlock`](crate::entities::FixedBlock).
/// Accepts positional (`[top, left, right, bottom]`) or keyed entries.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum ExtFixedBlock {
    Positional(f32, f32, f32, f32),
    Keyed {
        top: f32,
        left: f32,
        bottom: f32,
        right: f32,
    },
    /// Anything else, rejected during import
    Unrecognized(serde_json::Value),
}

/// External representation of a [`Solution`](crate::entities::Solution)
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtSolution {
    pub positions: Vec<ExtPosition>,
    /// (width, height)
    pub bounding_box: (f32, f32),
    pub area: f32,
    /// Fraction of the bounding box covered by rectangles
    pub density: f32,
    /// The sequence pair the floorplan was decoded from
    pub sequence_pair: ExtSequencePair,
    pub run_time_sec: u64,
}

/// Lower-left corner of a placed rectangle
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtPosition {
    pub id: usize,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub rotated: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtSequencePair {
    pub g_plus: Vec<usize>,
    pub g_minus: Vec<usize>,
    pub rotations: Vec<bool>,
}
