use std::ops::{Add, Sub};

/// Cell sizes past `i32::MAX` saturate instead of wrapping negative
#[inline]
fn clamp_size(cell_size: u32) -> i32 {
    i32::try_from(cell_size).unwrap_or(i32::MAX)
}

/// A coordinate on the grid, or on the pixel plane of a drawing surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pos2 {
    pub x: i32,
    pub y: i32,
}
impl Pos2 {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Converts a pixel position into the cell that covers it
    ///
    /// Uses floor division, so pixels left of or above the origin land on
    /// negative cells instead of being folded onto row/column 0.
    #[inline]
    pub fn pixel_to_cell(self, cell_size: u32) -> Self {
        let size = clamp_size(cell_size).max(1);
        Self {
            x: self.x.div_euclid(size),
            y: self.y.div_euclid(size),
        }
    }

    /// Top-left pixel of this cell
    #[inline]
    pub fn cell_to_pixel(self, cell_size: u32) -> Self {
        let size = clamp_size(cell_size);
        Self {
            x: self.x.saturating_mul(size),
            y: self.y.saturating_mul(size),
        }
    }
}
impl Add for Pos2 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}
impl Sub for Pos2 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}
