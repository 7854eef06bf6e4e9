//! Animation engine - drives the simulation and keeps the view current
//!
//! This crate glues the pieces together without doing any I/O itself:
//!
//! - [`scheduler`]: the frame-scheduling port plus a manual scheduler for
//!   tests and a fixed-interval scheduler for polling hosts
//! - [`controller`]: the play/pause state machine, the advance-then-render
//!   cycle, and the pointer entry point that toggles cells
//!
//! # Example
//!
//! ```
//! use life_view_engine::{Controller, ManualScheduler, StartMode};
//! use life_view_engine::core::Universe;
//! use life_view_engine::term::{Palette, PixelBuffer};
//!
//! let universe = Universe::with_size(16, 8);
//! // (2 + 1) * 16 + 1 by (2 + 1) * 8 + 1
//! let surface = PixelBuffer::new(49, 25);
//! let mut controller =
//!     Controller::new(universe, surface, ManualScheduler::new(), 2, Palette::default()).unwrap();
//!
//! controller.start(StartMode::Running).unwrap();
//! let frame = controller.scheduler_mut().fire().unwrap();
//! controller.on_frame(frame).unwrap();
//! controller.pause();
//!
//! assert!(controller.is_paused());
//! assert_eq!(controller.generation(), 2);
//! ```

pub mod controller;
pub mod scheduler;

pub use life_view_core as core;
pub use life_view_input as input;
pub use life_view_term as term;
pub use life_view_types as types;

pub use controller::{AnimationState, Controller, StartMode};
pub use scheduler::{FrameHandle, FrameScheduler, ManualScheduler, TickScheduler};
