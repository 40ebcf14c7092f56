use crate::util::FPA;

///Axis-aligned rectangle
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Rect {
    pub x_min: f32,
    pub y_min: f32,
    pub x_max: f32,
    pub y_max: f32,
}

impl Rect {
    /// Rectangle with its lower-left corner at `(x, y)`.
    /// Dimensions are assumed to be positive.
    pub fn from_corner(x: f32, y: f32, width: f32, height: f32) -> Self {
        debug_assert!(width > 0.0 && height > 0.0);
        Rect {
            x_min: x,
            y_min: y,
            x_max: x + width,
            y_max: y + height,
        }
    }

    /// True if the interiors of both rectangles intersect. Touching edges do not count.
    #[inline(always)]
    pub fn collides_with(&self, other: &Rect) -> bool {
        self.x_min < other.x_max
            && self.x_max > other.x_min
            && self.y_min < other.y_max
            && self.y_max > other.y_min
    }

    /// Same as [`Rect::collides_with`], but overlaps within floating point tolerance are ignored.
    pub fn almost_collides_with(&self, other: &Rect) -> bool {
        FPA::from(self.x_min) < FPA::from(other.x_max)
            && FPA::from(self.x_max) > FPA::from(other.x_min)
            && FPA::from(self.y_min) < FPA::from(other.y_max)
            && FPA::from(self.y_max) > FPA::from(other.y_min)
    }

    pub fn width(&self) -> f32 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f32 {
        self.y_max - self.y_min
    }

    pub fn bounding_rectangle(a: &Rect, b: &Rect) -> Rect {
        Rect {
            x_min: f32::min(a.x_min, b.x_min),
            y_min: f32::min(a.y_min, b.y_min),
            x_max: f32::max(a.x_max, b.x_max),
            y_max: f32::max(a.y_max, b.y_max),
        }
    }

    pub fn scale(self, factor: f32) -> Self {
        let dx = self.width() * (factor - 1.0) / 2.0;
        let dy = self.height() * (factor - 1.0) / 2.0;
        Rect {
            x_min: self.x_min - dx,
            y_min: self.y_min - dy,
            x_max: self.x_max + dx,
            y_max: self.y_max + dy,
        }
    }
}
