//! Defines geometric primitives
//! Currently only defines bbox

use std::ops::Mul;

use crate::dimensions::Unit;

/// A generic bounding box for a 2D coordinate system, parameterized by unit type.
/// When used to store a glyph's ink rectangle, it is relative to the glyph origin, which sits on the baseline at y=0.
/// Y grows upwards, as in font files.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct BBox<U> {
    /// minimal x-value
    pub x_min : Unit<U>,
    /// maximal x-value
    pub x_max : Unit<U>,
    /// minimal y-value
    pub y_min : Unit<U>,
    /// maximal y-value
    pub y_max : Unit<U>,
}

/// The zero-size box at the origin
impl<U> Default for BBox<U> {
    fn default() -> Self {
        Self::single_point(Unit::ZERO, Unit::ZERO)
    }
}

impl<U> BBox<U> {
    /// Creates new bbox from coordinates of extremal points
    /// Does not check the invariant that `x_min <= x_max` and `y_min <= y_max`
    pub fn new(x_min: Unit<U>, y_min: Unit<U>, x_max: Unit<U>, y_max: Unit<U>) -> Self {
        Self { x_min, x_max, y_min, y_max }
    }

    /// Creates a bbox, given a position for the bottom-left corner, width and height.
    pub fn from_dims(x : Unit<U>, y : Unit<U>, width : Unit<U>, height : Unit<U>) -> Self {
        debug_assert!(height >= Unit::ZERO);
        debug_assert!(width >= Unit::ZERO);
        Self {
            x_min : x, x_max : x + width,
            y_min : y, y_max : y + height,
        }
    }

    /// Creates a bbox corresponding to a zero-width zero-height point
    pub fn single_point(x : Unit<U>, y : Unit<U>) -> Self {
        Self {
            x_min : x, x_max : x,
            y_min : y, y_max : y,
        }
    }

    /// Moves the box by `t_x` horizontally and `t_y` vertically
    pub fn translate(&self, t_x : Unit<U>, t_y : Unit<U>) -> Self {
        Self {
            x_min: self.x_min + t_x,
            x_max: self.x_max + t_x,
            y_min: self.y_min + t_y,
            y_max: self.y_max + t_y,
        }
    }

    /// Creates the smallest bbox containing `self` and `other`
    pub fn union(&self, other: &Self) -> Self {
        Self {
            x_min : Unit::min(self.x_min, other.x_min),
            x_max : Unit::max(self.x_max, other.x_max),
            y_min : Unit::min(self.y_min, other.y_min),
            y_max : Unit::max(self.y_max, other.y_max),
        }
    }

    /// Width of the bounding box
    pub fn width(&self) -> Unit<U> {
        self.x_max - self.x_min
    }

    /// The geometric height: the unsigned distance between the top of the box and the bottom of the box
    pub fn total_height(&self) -> Unit<U> {
        self.y_max - self.y_min
    }

    /// Converts every coordinate with the factor `scale`, e.g. from font units to device pixels
    pub fn scale<V, W>(&self, scale : Unit<V>) -> BBox<W>
    where Unit<U> : Mul<Unit<V>, Output = Unit<W>>
    {
        BBox::<W> {
            x_min: self.x_min * scale,
            x_max: self.x_max * scale,
            y_min: self.y_min * scale,
            y_max: self.y_max * scale,
        }
    }

    /// Checks if 2 bboxes are approximately the same, more specifically if the two corners' four coordinates are the same up to `epsilon` of their initial value.
    pub fn close_to(&self, other: &Self, epsilon: f64) -> bool {
        fn close<U>(a : Unit<U>, b : Unit<U>, epsilon : f64) -> bool {
            (a - b).to_unitless().abs() * 2. <= epsilon * (a.abs() + b.abs()).to_unitless()
        }
        close(self.x_min, other.x_min, epsilon) &&
        close(self.x_max, other.x_max, epsilon) &&
        close(self.y_min, other.y_min, epsilon) &&
        close(self.y_max, other.y_max, epsilon)
    }
}

/// Smallest box enclosing every box of the iterator, `None` if the iterator is empty
pub fn enclosing<U, I>(boxes : I) -> Option<BBox<U>>
where I : IntoIterator<Item = BBox<U>>
{
    boxes.into_iter().reduce(|acc, bbox| acc.union(&bbox))
}
