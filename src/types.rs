/// The axis a collection scrolls along.
///
/// Lines stack along this axis, and content grows along it as lines are
/// added. Items accumulate along the orthogonal axis within a line: for a
/// vertically scrolling collection, lines are rows that fill the viewport
/// width and the content height grows.
///
/// All packing arithmetic runs in axis-relative (`main`, `cross`) space;
/// this type owns the projection between that space and concrete
/// (x, y, width, height) geometry, so both directions share one code path.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollAxis {
    #[default]
    Vertical,
    Horizontal,
}

impl ScrollAxis {
    /// Projects a concrete size into axis space.
    pub fn to_axis(self, size: Size) -> AxisSize {
        match self {
            Self::Vertical => AxisSize {
                main: size.width,
                cross: size.height,
            },
            Self::Horizontal => AxisSize {
                main: size.height,
                cross: size.width,
            },
        }
    }

    /// Projects an axis-relative size back into concrete space.
    pub fn from_axis(self, size: AxisSize) -> Size {
        match self {
            Self::Vertical => Size {
                width: size.main,
                height: size.cross,
            },
            Self::Horizontal => Size {
                width: size.cross,
                height: size.main,
            },
        }
    }

    /// Projects a concrete rectangle into axis space.
    pub fn rect_to_axis(self, rect: Rect) -> AxisRect {
        match self {
            Self::Vertical => AxisRect {
                main_origin: rect.x,
                cross_origin: rect.y,
                size: AxisSize {
                    main: rect.width,
                    cross: rect.height,
                },
            },
            Self::Horizontal => AxisRect {
                main_origin: rect.y,
                cross_origin: rect.x,
                size: AxisSize {
                    main: rect.height,
                    cross: rect.width,
                },
            },
        }
    }

    /// Projects an axis-relative rectangle back into concrete space.
    pub fn rect_from_axis(self, rect: AxisRect) -> Rect {
        match self {
            Self::Vertical => Rect {
                x: rect.main_origin,
                y: rect.cross_origin,
                width: rect.size.main,
                height: rect.size.cross,
            },
            Self::Horizontal => Rect {
                x: rect.cross_origin,
                y: rect.main_origin,
                width: rect.size.cross,
                height: rect.size.main,
            },
        }
    }
}

/// A concrete size in content coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// A concrete rectangle in content coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }

    pub fn size(&self) -> Size {
        Size {
            width: self.width,
            height: self.height,
        }
    }

    /// Whether the two rectangles overlap with non-zero area.
    ///
    /// Rectangles that merely touch along an edge do not intersect.
    pub fn intersects(&self, other: &Self) -> bool {
        self.x < other.max_x()
            && other.x < self.max_x()
            && self.y < other.max_y()
            && other.y < self.max_y()
    }
}

/// A size in axis-relative space.
///
/// `main` runs along the packing axis (item lengths, line capacity);
/// `cross` runs along the scroll axis (item thickness, line thickness).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxisSize {
    pub main: f64,
    pub cross: f64,
}

/// A rectangle in axis-relative space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxisRect {
    pub main_origin: f64,
    pub cross_origin: f64,
    pub size: AxisSize,
}

impl AxisRect {
    pub fn main_end(&self) -> f64 {
        self.main_origin + self.size.main
    }

    pub fn cross_end(&self) -> f64 {
        self.cross_origin + self.size.cross
    }

    /// Whether the two rectangles overlap with non-zero area.
    pub fn intersects(&self, other: &Self) -> bool {
        self.main_origin < other.main_end()
            && other.main_origin < self.main_end()
            && self.cross_origin < other.cross_end()
            && other.cross_origin < self.cross_end()
    }
}

/// A placement record: the rectangle assigned to one item for rendering.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    pub index: usize,
    pub rect: Rect,
}
