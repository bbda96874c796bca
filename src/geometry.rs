//! Layout primitives shared by the edge policy, the view and the renderer
//!
//! All coordinates are window-global logical pixels, the same space pointer
//! events arrive in.

/// A point in window-global coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x as f32, y as f32)
    }
}

/// Axis a stack arranges its children along
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Children arranged left-to-right, sizes are widths
    Horizontal,
    /// Children arranged top-to-bottom, sizes are heights
    Vertical,
}

impl Axis {
    /// The other axis
    pub fn cross(&self) -> Axis {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }
}

/// Rectangle for layout calculations
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Build a rect from its min/max corners
    pub fn from_min_max(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Self {
        Self::new(min_x, min_y, max_x - min_x, max_y - min_y)
    }

    #[inline]
    pub fn min_x(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn max_x(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn min_y(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn max_y(&self) -> f32 {
        self.y + self.height
    }

    /// Half-open containment test (min edges inclusive, max edges exclusive)
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x < self.max_x()
            && point.y >= self.y
            && point.y < self.max_y()
    }

    /// Extent along an axis (width or height)
    pub fn extent(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    /// Start coordinate along an axis
    pub fn start(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }

    /// Copy of this rect with the extent along `axis` replaced
    pub fn with_extent(&self, axis: Axis, extent: f32) -> Self {
        match axis {
            Axis::Horizontal => Self { width: extent, ..*self },
            Axis::Vertical => Self { height: extent, ..*self },
        }
    }

    /// Copy of this rect with the start along `axis` replaced
    pub fn with_start(&self, axis: Axis, start: f32) -> Self {
        match axis {
            Axis::Horizontal => Self { x: start, ..*self },
            Axis::Vertical => Self { y: start, ..*self },
        }
    }

    /// Grow the rect by `amount` on both sides of `axis`
    pub fn inflate_along(&self, axis: Axis, amount: f32) -> Self {
        self.with_start(axis, self.start(axis) - amount)
            .with_extent(axis, self.extent(axis) + amount * 2.0)
    }

    /// Clamp negative extents to zero so the rect is drawable
    pub fn non_negative(&self) -> Self {
        Self {
            width: self.width.max(0.0),
            height: self.height.max(0.0),
            ..*self
        }
    }
}
