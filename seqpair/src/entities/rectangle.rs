use crate::PlacementError;

/// A rectangle that has to be placed by the optimizer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rectangle {
    /// Dense index in `0..n`, assigned by [`Problem`](crate::entities::Problem) in input order
    pub id: usize,
    pub width: f32,
    pub height: f32,
    /// Whether the rectangle may be placed rotated by 90 degrees
    pub rotatable: bool,
}

impl Rectangle {
    pub fn try_new(id: usize, width: f32, height: f32, rotatable: bool) -> Result<Self, PlacementError> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(PlacementError::InvalidInput(format!(
                "rectangle {id} must have a positive width and height, got {width} x {height}"
            )));
        }
        Ok(Rectangle {
            id,
            width,
            height,
            rotatable,
        })
    }

    /// Width and height as placed, `rotated` is ignored for non-rotatable rectangles.
    pub fn dims(&self, rotated: bool) -> (f32, f32) {
        match self.rotatable && rotated {
            true => (self.height, self.width),
            false => (self.width, self.height),
        }
    }

    pub fn area(&self) -> f32 {
        self.width * self.height
    }
}
