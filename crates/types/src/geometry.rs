//! Grid geometry: cell index <-> (row, col) <-> pixel rectangle.
//!
//! Pure coordinate math with no side effects. Coordinates are
//! (row, col) where row ranges `0..height` (top to bottom) and col ranges
//! `0..width` (left to right).

use crate::{Dimensions, GridCoord, BORDER_PX};

/// Axis-aligned rectangle in surface pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl PixelRect {
    pub const fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x
            && y >= self.y
            && (x - self.x) < self.w
            && (y - self.y) < self.h
    }
}

/// On-screen bounding box of the drawing surface, in device units.
///
/// The surface may be displayed at a different size than its pixel buffer
/// (layout scaling, device pixel ratio, terminal half blocks).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }
}

/// Placement of a fixed-size grid on a drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridGeometry {
    dims: Dimensions,
    cell_size: u32,
}

impl GridGeometry {
    pub const fn new(dims: Dimensions, cell_size: u32) -> Self {
        Self { dims, cell_size }
    }

    pub const fn dimensions(&self) -> Dimensions {
        self.dims
    }

    pub const fn cell_size(&self) -> u32 {
        self.cell_size
    }

    /// Distance between the origins of two adjacent cells.
    #[inline(always)]
    pub const fn pitch(&self) -> u32 {
        self.cell_size + BORDER_PX
    }

    /// Row-major index of `(row, col)` in the engine's state buffer.
    ///
    /// Bounds are the caller's responsibility; pointer input is clamped
    /// before it gets here.
    #[inline(always)]
    pub fn cell_index(&self, row: u32, col: u32) -> usize {
        debug_assert!(
            self.dims.contains(row, col),
            "cell ({row}, {col}) outside {}x{} grid",
            self.dims.width,
            self.dims.height
        );
        (row as usize) * (self.dims.width as usize) + (col as usize)
    }

    /// Inverse of [`cell_index`](Self::cell_index).
    pub fn coord_of(&self, index: usize) -> GridCoord {
        let width = self.dims.width as usize;
        GridCoord::new((index / width) as u32, (index % width) as u32)
    }

    /// Pixel rectangle covered by the cell at `(row, col)`, border excluded.
    pub fn cell_rect(&self, row: u32, col: u32) -> PixelRect {
        let pitch = self.pitch();
        PixelRect::new(
            col * pitch + BORDER_PX,
            row * pitch + BORDER_PX,
            self.cell_size,
            self.cell_size,
        )
    }

    /// Surface size in pixels: `(cell_size + 1) * dim + 1` per axis.
    pub fn surface_size(&self) -> (u32, u32) {
        let pitch = self.pitch();
        (
            pitch * self.dims.width + BORDER_PX,
            pitch * self.dims.height + BORDER_PX,
        )
    }

    /// [`surface_size`](Self::surface_size), or `None` if it does not fit
    /// in `u32`.
    pub fn checked_surface_size(&self) -> Option<(u32, u32)> {
        let pitch = self.cell_size.checked_add(BORDER_PX)?;
        let axis = |dim: u32| pitch.checked_mul(dim)?.checked_add(BORDER_PX);
        Some((axis(self.dims.width)?, axis(self.dims.height)?))
    }

    /// Grid cell under a point in surface pixel space.
    ///
    /// Never fails: points outside the grid (including NaN and infinite
    /// coordinates) resolve to the nearest valid cell on each axis.
    pub fn cell_at(&self, canvas_x: f64, canvas_y: f64) -> GridCoord {
        GridCoord::new(
            clamp_axis(canvas_y, self.pitch(), self.dims.height),
            clamp_axis(canvas_x, self.pitch(), self.dims.width),
        )
    }
}

fn clamp_axis(pos: f64, pitch: u32, dim: u32) -> u32 {
    // `as` saturates on overflow and maps NaN to 0.
    let idx = (pos / pitch as f64).floor() as i64;
    idx.clamp(0, dim.saturating_sub(1) as i64) as u32
}
