#![forbid(unsafe_code)]

//! Geometric primitives.

/// A width/height pair in layout units.
///
/// Dimensions are non-negative by caller contract; the resolver functions
/// in [`crate::content_scale`] divide by them.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    /// Width in layout units.
    pub width: f32,
    /// Height in layout units.
    pub height: f32,
}

impl Size {
    /// A size with both dimensions at zero.
    pub const ZERO: Size = Size::new(0.0, 0.0);

    /// Create a new size.
    #[inline]
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Create a square size.
    #[inline]
    #[must_use]
    pub const fn splat(side: f32) -> Self {
        Self::new(side, side)
    }

    /// Whether either dimension is unusable as a division source.
    ///
    /// True when a dimension is zero, negative, or non-finite.
    #[inline]
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
            || !self.width.is_finite()
            || !self.height.is_finite()
    }

    /// Width divided by height.
    #[inline]
    #[must_use]
    pub fn aspect_ratio(&self) -> f32 {
        self.width / self.height
    }

    /// Both dimensions multiplied by `factor`.
    #[inline]
    #[must_use]
    pub fn scaled(&self, factor: f32) -> Size {
        Size::new(self.width * factor, self.height * factor)
    }

    /// Whether this size fits within `other` in both dimensions (inclusive).
    #[inline]
    #[must_use]
    pub fn fits_within(&self, other: &Size) -> bool {
        self.width <= other.width && self.height <= other.height
    }
}

impl From<(f32, f32)> for Size {
    fn from((width, height): (f32, f32)) -> Self {
        Self::new(width, height)
    }
}

/// A position in layout units, used for pointer tracking.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// The origin.
    pub const ZERO: Point = Point::new(0.0, 0.0);

    /// Create a new point.
    #[inline]
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Component-wise offset from `other` to `self`.
    #[inline]
    #[must_use]
    pub fn offset_from(&self, other: &Point) -> (f32, f32) {
        (self.x - other.x, self.y - other.y)
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}
