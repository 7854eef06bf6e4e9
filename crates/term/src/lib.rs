//! Terminal "frame renderer" module.
//!
//! Draws the automaton into a pixel surface and presents that surface on a
//! terminal. Rendering into the surface is pure and testable; only
//! [`TerminalRenderer`] touches stdout.
//!
//! Goals:
//! - Keep the frame a deterministic function of the cell buffer
//! - Work against any [`Surface`], so tests can inspect exact pixels
//! - Keep terminal output incremental (only changed half blocks are redrawn)

pub mod fb;
pub mod frame;
pub mod renderer;

pub use life_view_core as core;
pub use life_view_types as types;

pub use fb::{PixelBuffer, Rgb, Surface};
pub use frame::{FrameRenderer, Palette};
pub use renderer::{
    encode_diff_into, encode_full_into, encode_status_into, screen_extent, TerminalRenderer,
};
