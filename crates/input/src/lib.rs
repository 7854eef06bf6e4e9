//! Pointer and keyboard input module (controller-facing).
//!
//! Converts pointer positions into grid coordinates and maps `crossterm`
//! events into [`ControlAction`]s. Pointer math is independent of any
//! terminal and clamps instead of rejecting, so a click anywhere resolves to
//! a valid cell.

pub mod handler;
pub mod map;

pub use life_view_types as types;

pub use handler::{InputHandler, MAX_PENDING_ACTIONS};
pub use map::{
    handle_key_event, map_pointer, pointer_from_mouse_event, should_quit, BoundingBox,
    ControlAction,
};
