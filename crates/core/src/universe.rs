//! Universe - Conway's Game of Life on a torus
//!
//! The grid is stored as a flat byte vector, row-major (`row * width + col`),
//! one byte per cell, which is exactly the layout [`CellView`] exposes.
//! Neighbour lookups wrap around both edges.

use std::fmt;

use anyhow::{bail, ensure, Result};

use crate::engine::SimulationEngine;
use crate::types::{Cell, Dimensions, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::view::CellView;

const SEED_MULTIPLIER: u128 = 1_234_567_890;
const SEED_MODULUS: u128 = 9_999_999_999;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Universe {
    width: u32,
    height: u32,
    cells: Vec<u8>,
    /// Scratch buffer for the next generation, swapped in by `tick`.
    next: Vec<u8>,
    generation: u64,
}

impl Universe {
    /// The reference 256x128 universe with its deterministic seed pattern.
    pub fn new() -> Self {
        Self::with_size(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }

    /// A `width` x `height` universe seeded with the reference pattern.
    ///
    /// Roughly one cell in five starts alive.
    pub fn with_size(width: u32, height: u32) -> Self {
        let mut k: u128 = 1;
        let cells = (0..Dimensions::new(width, height).len())
            .map(|_| {
                k *= SEED_MULTIPLIER;
                k %= SEED_MODULUS;
                if k % 5 == 0 {
                    Cell::Alive.as_byte()
                } else {
                    Cell::Dead.as_byte()
                }
            })
            .collect();
        Self::from_cells(width, height, cells)
    }

    /// A universe with every cell dead.
    pub fn empty(width: u32, height: u32) -> Self {
        let len = Dimensions::new(width, height).len();
        Self::from_cells(width, height, vec![Cell::Dead.as_byte(); len])
    }

    /// Build a universe from text rows, `#` alive and `.` dead.
    pub fn from_rows(rows: &[&str]) -> Result<Self> {
        ensure!(!rows.is_empty(), "pattern has no rows");
        let width = rows[0].len();
        ensure!(width > 0, "pattern rows are empty");

        let mut cells = Vec::with_capacity(width * rows.len());
        for (row, line) in rows.iter().enumerate() {
            ensure!(
                line.len() == width,
                "row {row} is {} cells wide, expected {width}",
                line.len()
            );
            for (col, b) in line.bytes().enumerate() {
                let cell = match b {
                    b'#' => Cell::Alive,
                    b'.' => Cell::Dead,
                    other => bail!(
                        "invalid pattern character {:?} at ({row}, {col})",
                        other as char
                    ),
                };
                cells.push(cell.as_byte());
            }
        }

        Ok(Self::from_cells(width as u32, rows.len() as u32, cells))
    }

    fn from_cells(width: u32, height: u32, cells: Vec<u8>) -> Self {
        let next = cells.clone();
        Self {
            width,
            height,
            cells,
            next,
            generation: 0,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw cell bytes, row-major.
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Number of ticks applied since construction.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[inline(always)]
    fn index(&self, row: u32, col: u32) -> usize {
        (row as usize) * (self.width as usize) + (col as usize)
    }

    pub fn get(&self, row: u32, col: u32) -> Option<Cell> {
        if row >= self.height || col >= self.width {
            return None;
        }
        Some(Cell::from_byte(self.cells[self.index(row, col)]))
    }

    /// Compute the next generation (B3/S23).
    pub fn tick(&mut self) {
        for row in 0..self.height {
            for col in 0..self.width {
                let idx = self.index(row, col);
                let cell = Cell::from_byte(self.cells[idx]);
                let live_neighbors = self.live_neighbor_count(row, col);

                let next = match (cell, live_neighbors) {
                    (Cell::Alive, 2) | (Cell::Alive, 3) => Cell::Alive,
                    (Cell::Dead, 3) => Cell::Alive,
                    _ => Cell::Dead,
                };
                self.next[idx] = next.as_byte();
            }
        }

        std::mem::swap(&mut self.cells, &mut self.next);
        self.generation += 1;
    }

    /// Flip the cell at `(row, col)`.
    pub fn toggle_cell(&mut self, row: u32, col: u32) -> Result<()> {
        ensure!(
            row < self.height && col < self.width,
            "cell ({row}, {col}) is outside the {}x{} universe",
            self.width,
            self.height
        );
        let idx = self.index(row, col);
        self.cells[idx] = Cell::from_byte(self.cells[idx]).toggled().as_byte();
        Ok(())
    }

    /// Text rendering, one line per row.
    pub fn render(&self) -> String {
        self.to_string()
    }

    fn live_neighbor_count(&self, row: u32, col: u32) -> u8 {
        // Signed offsets: on a 1-wide axis both wrapped neighbours are the
        // cell's own row or column and still count.
        let (h, w) = (i64::from(self.height), i64::from(self.width));
        let mut count = 0;
        for d_row in [-1i64, 0, 1] {
            for d_col in [-1i64, 0, 1] {
                if d_row == 0 && d_col == 0 {
                    continue;
                }
                let r = (i64::from(row) + d_row).rem_euclid(h) as u32;
                let c = (i64::from(col) + d_col).rem_euclid(w) as u32;
                count += self.cells[self.index(r, c)].min(1);
            }
        }
        count
    }
}

impl Default for Universe {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulationEngine for Universe {
    fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.width, self.height)
    }

    fn step(&mut self) -> Result<()> {
        self.tick();
        log::trace!("universe advanced to generation {}", self.generation);
        Ok(())
    }

    fn cell_state_view(&self) -> CellView<'_> {
        CellView::new(self.dimensions(), &self.cells)
    }

    fn toggle(&mut self, row: u32, col: u32) -> Result<()> {
        self.toggle_cell(row, col)
    }
}

impl fmt::Display for Universe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.cells.chunks(self.width as usize) {
            for &b in line {
                let symbol = if Cell::from_byte(b).is_alive() { '◼' } else { ' ' };
                write!(f, "{symbol}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
