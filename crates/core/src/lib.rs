//! Simulation side of the viewer - the engine port and a reference engine
//!
//! The controller never decides what the next generation looks like. It only
//! talks to a [`SimulationEngine`]: ask for dimensions, ask for a step, read
//! the cell state through a [`CellView`], and request single-cell toggles.
//!
//! # Module Structure
//!
//! - [`engine`]: the [`SimulationEngine`] trait consumed by the controller
//! - [`view`]: [`CellView`], a read-only window onto engine-owned cell bytes
//! - [`universe`]: [`Universe`], a toroidal Conway's Game of Life engine
//!
//! # Example
//!
//! ```
//! use life_view_core::{SimulationEngine, Universe};
//!
//! let mut universe = Universe::from_rows(&[
//!     ".....",
//!     "..#..",
//!     "..#..",
//!     "..#..",
//!     ".....",
//! ])
//! .unwrap();
//!
//! universe.step().unwrap();
//! let view = universe.cell_state_view();
//! assert!(view.get(2, 1).is_alive());
//! assert!(!view.get(1, 2).is_alive());
//! ```

pub mod engine;
pub mod universe;
pub mod view;

pub use life_view_types as types;

pub use engine::SimulationEngine;
pub use universe::Universe;
pub use view::CellView;
