use crate::PlacementError;
use crate::geometry::Rect;

/// Immovable obstacle region. Rectangles are packed around it, it never takes part in the search.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedBlock {
    /// Dense index in `0..m`, assigned in input order
    pub id: usize,
    pub top: f32,
    pub left: f32,
    pub bottom: f32,
    pub right: f32,
}

impl FixedBlock {
    pub fn try_new(id: usize, top: f32, left: f32, bottom: f32, right: f32) -> Result<Self, PlacementError> {
        let finite = [top, left, bottom, right].iter().all(|v| v.is_finite());
        if !finite || left >= right || bottom >= top {
            return Err(PlacementError::InvalidInput(format!(
                "fixed block {id} requires left < right and bottom < top, got [top: {top}, left: {left}, bottom: {bottom}, right: {right}]"
            )));
        }
        Ok(FixedBlock {
            id,
            top,
            left,
            bottom,
            right,
        })
    }

    pub fn overlaps(&self, other: &FixedBlock) -> bool {
        self.left < other.right
            && self.right > other.left
            && self.top > other.bottom
            && self.bottom < other.top
    }

    pub fn rect(&self) -> Rect {
        Rect {
            x_min: self.left,
            y_min: self.bottom,
            x_max: self.right,
            y_max: self.top,
        }
    }
}
