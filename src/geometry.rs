//! Cell-grid geometry
//!
//! Terminal cells are addressed with 1-based coordinates: column 1, row 1
//! is the top-left cell. Coordinates are signed because mouse reports may
//! legitimately fall outside the current bounds (stale reports after a
//! resize) and because the output encoder accepts negative coordinates as
//! far-edge offsets.

/// A position on the terminal cell grid, 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }
}

/// A rectangular region: top-left corner plus extent.
///
/// Containment is inclusive on both edges: a point at `(x + w, y + h)` is
/// still inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Rect { x, y, w, h }
    }

    /// Whether `p` falls inside this rectangle, edges included.
    pub const fn contains(&self, p: Point) -> bool {
        self.x <= p.x && p.x <= self.x + self.w && self.y <= p.y && p.y <= self.y + self.h
    }
}

/// Terminal dimensions in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    /// Number of columns (characters per line)
    pub cols: u16,
    /// Number of rows (lines)
    pub rows: u16,
}

impl Size {
    pub const fn new(cols: u16, rows: u16) -> Self {
        Size { cols, rows }
    }
}

impl Default for Size {
    fn default() -> Self {
        Size::new(80, 24)
    }
}
