//! The simulation engine port.

use anyhow::Result;

use crate::types::Dimensions;
use crate::view::CellView;

/// An automaton the viewer can drive and display.
///
/// The engine is the sole mutator of its cell buffer. Views returned by
/// [`cell_state_view`](Self::cell_state_view) borrow the engine, so they
/// cannot outlive a call to [`step`](Self::step) or [`toggle`](Self::toggle).
pub trait SimulationEngine {
    /// Grid size. Must not change for the lifetime of the engine.
    fn dimensions(&self) -> Dimensions;

    /// Advance by one generation.
    fn step(&mut self) -> Result<()>;

    /// Row-major view of the current cell states, one byte per cell.
    fn cell_state_view(&self) -> CellView<'_>;

    /// Flip exactly one cell. Out-of-range coordinates are an error.
    fn toggle(&mut self, row: u32, col: u32) -> Result<()>;
}

impl<T: SimulationEngine + ?Sized> SimulationEngine for &mut T {
    fn dimensions(&self) -> Dimensions {
        (**self).dimensions()
    }

    fn step(&mut self) -> Result<()> {
        (**self).step()
    }

    fn cell_state_view(&self) -> CellView<'_> {
        (**self).cell_state_view()
    }

    fn toggle(&mut self, row: u32, col: u32) -> Result<()> {
        (**self).toggle(row, col)
    }
}

impl<T: SimulationEngine + ?Sized> SimulationEngine for Box<T> {
    fn dimensions(&self) -> Dimensions {
        (**self).dimensions()
    }

    fn step(&mut self) -> Result<()> {
        (**self).step()
    }

    fn cell_state_view(&self) -> CellView<'_> {
        (**self).cell_state_view()
    }

    fn toggle(&mut self, row: u32, col: u32) -> Result<()> {
        (**self).toggle(row, col)
    }
}
