//! FrameRenderer: draws a cell view onto a surface.
//!
//! This module is pure (no I/O). Output depends only on the view contents,
//! so drawing the same buffer twice yields identical pixels.

use anyhow::{ensure, Result};

use crate::core::CellView;
use crate::fb::{Rgb, Surface};
use crate::types::{GridGeometry, PixelRect};

/// Colors used for a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Full-surface fill; shows through as the grid lines.
    pub background: Rgb,
    pub dead: Rgb,
    pub alive: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Rgb::new(0x54, 0x3d, 0xe5),
            dead: Rgb::new(0x2d, 0x02, 0x9d),
            alive: Rgb::new(0xf8, 0xad, 0xfd),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameRenderer {
    geometry: GridGeometry,
    palette: Palette,
}

impl FrameRenderer {
    pub fn new(geometry: GridGeometry, palette: Palette) -> Self {
        Self { geometry, palette }
    }

    pub fn geometry(&self) -> &GridGeometry {
        &self.geometry
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Verify a surface has exactly the pixel size the grid needs.
    pub fn check_surface<S: Surface + ?Sized>(&self, surface: &S) -> Result<()> {
        let expected = self.geometry.surface_size();
        let actual = surface.size();
        ensure!(
            actual == expected,
            "drawing surface is {}x{} px, grid needs {}x{} px",
            actual.0,
            actual.1,
            expected.0,
            expected.1
        );
        Ok(())
    }

    /// Draw the background, then every cell in row-major order.
    pub fn render<S: Surface + ?Sized>(&self, view: &CellView<'_>, surface: &mut S) {
        self.draw_background(surface);
        self.draw_cells(view, surface);
    }

    fn draw_background<S: Surface + ?Sized>(&self, surface: &mut S) {
        let (w, h) = surface.size();
        surface.fill_rect(PixelRect::new(0, 0, w, h), self.palette.background);
    }

    fn draw_cells<S: Surface + ?Sized>(&self, view: &CellView<'_>, surface: &mut S) {
        debug_assert_eq!(view.dimensions(), self.geometry.dimensions());
        let dims = self.geometry.dimensions();
        for row in 0..dims.height {
            for col in 0..dims.width {
                let color = if view.get(row, col).is_alive() {
                    self.palette.alive
                } else {
                    self.palette.dead
                };
                surface.fill_rect(self.geometry.cell_rect(row, col), color);
            }
        }
    }
}
