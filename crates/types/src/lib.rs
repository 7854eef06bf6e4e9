//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the viewer.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (simulation engine, rendering, pointer input).
//!
//! # Cell Encoding
//!
//! The simulation engine exposes its state as one byte per cell, row-major:
//!
//! | Byte | Cell |
//! |------|------|
//! | `0` | [`Cell::Dead`] |
//! | nonzero | [`Cell::Alive`] |
//!
//! # Pixel Geometry
//!
//! Every cell is drawn as a `cell_size` square with a 1px border on each side
//! shared with its neighbours, so one axis of `n` cells takes
//! `(cell_size + 1) * n + 1` pixels. See [`geometry`].
//!
//! # Examples
//!
//! ```
//! use life_view_types::{Cell, Dimensions, GridGeometry};
//!
//! assert_eq!(Cell::from_byte(0), Cell::Dead);
//! assert_eq!(Cell::from_byte(7), Cell::Alive);
//!
//! let geometry = GridGeometry::new(Dimensions::new(64, 64), 4);
//! assert_eq!(geometry.surface_size(), (321, 321));
//! ```

pub mod geometry;

pub use geometry::{BoundingBox, GridGeometry, PixelRect};

/// Default cell edge length in pixels.
pub const DEFAULT_CELL_SIZE: u32 = 4;

/// Border drawn between (and around) cells, in pixels.
pub const BORDER_PX: u32 = 1;

/// Width of the reference universe.
pub const DEFAULT_WIDTH: u32 = 256;

/// Height of the reference universe.
pub const DEFAULT_HEIGHT: u32 = 128;

/// State of a single grid position.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Dead = 0,
    Alive = 1,
}

impl Cell {
    /// Decode a byte from the engine's state buffer.
    ///
    /// Any nonzero byte counts as alive.
    pub const fn from_byte(byte: u8) -> Self {
        if byte == 0 {
            Cell::Dead
        } else {
            Cell::Alive
        }
    }

    pub const fn as_byte(self) -> u8 {
        self as u8
    }

    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    /// The opposite state.
    ///
    /// ```
    /// use life_view_types::Cell;
    ///
    /// assert_eq!(Cell::Dead.toggled(), Cell::Alive);
    /// assert_eq!(Cell::Alive.toggled(), Cell::Dead);
    /// ```
    pub const fn toggled(self) -> Self {
        match self {
            Cell::Dead => Cell::Alive,
            Cell::Alive => Cell::Dead,
        }
    }
}

/// Grid size in cells. Fixed for the lifetime of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Number of cells (`width * height`).
    pub const fn len(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub const fn contains(&self, row: u32, col: u32) -> bool {
        row < self.height && col < self.width
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

/// A (row, col) position on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridCoord {
    pub row: u32,
    pub col: u32,
}

impl GridCoord {
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }
}
