use crate::geometry::Rect;
use itertools::Itertools;

/// A rectangle at its decoded position
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacedRect {
    pub id: usize,
    /// Lower-left corner
    pub x: f32,
    pub y: f32,
    /// Dimensions as placed (after rotation)
    pub width: f32,
    pub height: f32,
    pub rotated: bool,
}

impl PlacedRect {
    pub fn rect(&self) -> Rect {
        Rect::from_corner(self.x, self.y, self.width, self.height)
    }
}

/// Concrete placement of all rectangles of a problem, derived from a sequence pair.
#[derive(Clone, Debug, PartialEq)]
pub struct Floorplan {
    /// Indexed by rectangle id
    pub placed: Vec<PlacedRect>,
    /// (width, height) of the smallest origin-anchored box containing all rectangles
    pub bounding_box: (f32, f32),
    pub area: f32,
}

impl Floorplan {
    pub fn new(placed: Vec<PlacedRect>) -> Self {
        let (width, height) = placed.iter().fold((0.0f32, 0.0f32), |(w, h), p| {
            (w.max(p.x + p.width), h.max(p.y + p.height))
        });
        Floorplan {
            placed,
            bounding_box: (width, height),
            area: width * height,
        }
    }

    /// `(id, x, y)` of every rectangle, ordered by id
    pub fn positions(&self) -> Vec<(usize, f32, f32)> {
        self.placed.iter().map(|p| (p.id, p.x, p.y)).collect_vec()
    }

    /// Fraction of the bounding box covered by rectangles
    pub fn density(&self) -> f32 {
        match self.area > 0.0 {
            true => self.placed.iter().map(|p| p.width * p.height).sum::<f32>() / self.area,
            false => 0.0,
        }
    }
}
