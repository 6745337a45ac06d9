use cgmath::*;
use serde::*;

/// An axis-aligned rectangle, used for viewports.
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Rect<T> {
    pub start: Point2<T>,
    pub end: Point2<T>,
}

impl<T> Rect<T> {
    pub fn new(start: Point2<T>, end: Point2<T>) -> Self {
        Self { start, end }
    }
}

impl<T: BaseNum> Rect<T> {
    /// A rectangle starting at the origin with the given size.
    pub fn from_size(size: Vector2<T>) -> Self {
        Rect::new(Point2::origin(), Point2::from_vec(size))
    }

    /// Returns the size of the `Rect`
    pub fn size(&self) -> Vector2<T> {
        self.end - self.start
    }
}
