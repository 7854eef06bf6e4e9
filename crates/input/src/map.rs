//! Mapping from pointer positions and terminal events to viewer actions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

pub use crate::types::BoundingBox;
use crate::types::{GridCoord, GridGeometry};

/// Viewer-level actions produced by input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlAction {
    /// Play if paused, pause if running.
    TogglePlay,
    /// Advance exactly one generation (only while paused).
    StepOnce,
    /// Repaint the whole terminal.
    Redraw,
    /// Pointer press at device coordinates.
    Click { client_x: f64, client_y: f64 },
}

/// Resolve a pointer position to the grid cell under it.
///
/// Positions outside the surface clamp to the nearest edge cell, so this
/// never fails.
pub fn map_pointer(
    geometry: &GridGeometry,
    client_x: f64,
    client_y: f64,
    bounds: &BoundingBox,
) -> GridCoord {
    let (px_w, px_h) = geometry.surface_size();
    let scale_x = px_w as f64 / bounds.width;
    let scale_y = px_h as f64 / bounds.height;

    let canvas_x = (client_x - bounds.left) * scale_x;
    let canvas_y = (client_y - bounds.top) * scale_y;

    geometry.cell_at(canvas_x, canvas_y)
}

/// Map keyboard input to viewer actions.
pub fn handle_key_event(key: KeyEvent) -> Option<ControlAction> {
    match key.code {
        KeyCode::Char(' ') | KeyCode::Char('p') | KeyCode::Char('P') => {
            Some(ControlAction::TogglePlay)
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Right => Some(ControlAction::StepOnce),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(ControlAction::Redraw),
        _ => None,
    }
}

/// Check if key should quit the viewer.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Device coordinates of a left-button press.
///
/// Terminal mouse reports are whole cells; the centre of the cell is used so
/// the half-block scaling lands inside the intended pixel pair.
pub fn pointer_from_mouse_event(event: MouseEvent) -> Option<(f64, f64)> {
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            Some((event.column as f64 + 0.5, event.row as f64 + 0.5))
        }
        _ => None,
    }
}
