use crate::PlacementError;
use crate::entities::{FixedBlock, Problem, Rectangle};
use crate::io::ext_repr::{ExtFixedBlock, ExtProblem, ExtRectangle};
use itertools::Itertools;
use log::debug;

/// Imports a problem into the library, assigning dense ids in input order.
pub fn import(ext_problem: &ExtProblem) -> Result<Problem, PlacementError> {
    let rectangles = ext_problem
        .rectangles
        .iter()
        .enumerate()
        .map(|(id, ext_rect)| import_rectangle(id, ext_rect))
        .collect::<Result<Vec<_>, _>>()?;

    let fixed_blocks = ext_problem
        .fixed_blocks
        .iter()
        .enumerate()
        .map(|(id, ext_block)| import_fixed_block(id, ext_block))
        .collect::<Result<Vec<_>, _>>()?;

    debug!(
        "[IMPORT] {} rectangles (rotatable: [{}]), {} fixed blocks",
        rectangles.len(),
        rectangles.iter().filter(|r| r.rotatable).map(|r| r.id).join(", "),
        fixed_blocks.len()
    );

    Problem::new(rectangles, fixed_blocks)
}

pub fn import_rectangle(id: usize, ext_rect: &ExtRectangle) -> Result<Rectangle, PlacementError> {
    match *ext_rect {
        ExtRectangle::Positional(width, height) => Rectangle::try_new(id, width, height, false),
        ExtRectangle::PositionalRotatable(width, height, rotatable)
        | ExtRectangle::Keyed {
            width,
            height,
            rotatable,
        } => Rectangle::try_new(id, width, height, rotatable),
        ExtRectangle::Unrecognized(ref value) => Err(PlacementError::InvalidInput(format!(
            "rectangle {id} is neither [width, height, rotatable?] nor {{width, height, rotatable?}}: {value}"
        ))),
    }
}

pub fn import_fixed_block(id: usize, ext_block: &ExtFixedBlock) -> Result<FixedBlock, PlacementError> {
    match *ext_block {
        ExtFixedBlock::Positional(top, left, right, bottom)
        | ExtFixedBlock::Keyed {
            top,
            left,
            bottom,
            right,
        } => FixedBlock::try_new(id, top, left, bottom, right),
        ExtFixedBlock::Unrecognized(ref value) => Err(PlacementError::InvalidInput(format!(
            "fixed block {id} is neither [top, left, right, bottom] nor {{top, left, bottom, right}}: {value}"
        ))),
    }
}

/// Parses a JSON string into one of the external representations, malformed JSON is reported as invalid input
pub fn from_json_str<T: serde::de::DeserializeOwned>(json: &str) -> Result<T, PlacementError> {
    serde_json::from_str(json).map_err(|e| PlacementError::InvalidInput(e.to_string()))
}
