//! Per-frame input queue.
//!
//! The host drains every pending terminal event before it runs the next
//! scheduled frame, so clicks and key presses that arrive between two frames
//! are applied in order before the next generation is computed.

use arrayvec::ArrayVec;
use crossterm::event::{Event, KeyEventKind};

use crate::map::{handle_key_event, pointer_from_mouse_event, ControlAction};

/// Maximum number of actions buffered between two frames.
pub const MAX_PENDING_ACTIONS: usize = 32;

#[derive(Debug, Clone, Default)]
pub struct InputHandler {
    pending: ArrayVec<ControlAction, MAX_PENDING_ACTIONS>,
    dropped: u64,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Translate a terminal event and queue the resulting action, if any.
    ///
    /// Returns `true` when an action was queued.
    pub fn handle_event(&mut self, event: &Event) -> bool {
        let action = match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => handle_key_event(*key),
            Event::Mouse(mouse) => pointer_from_mouse_event(*mouse)
                .map(|(client_x, client_y)| ControlAction::Click { client_x, client_y }),
            Event::Resize(..) => Some(ControlAction::Redraw),
            _ => None,
        };

        match action {
            Some(action) => self.push(action),
            None => false,
        }
    }

    /// Queue an action directly. Overflowing actions are dropped.
    pub fn push(&mut self, action: ControlAction) -> bool {
        if self.pending.try_push(action).is_err() {
            self.dropped += 1;
            log::warn!("input queue full, dropping {action:?}");
            return false;
        }
        true
    }

    /// Take all queued actions in arrival order.
    pub fn drain(&mut self) -> ArrayVec<ControlAction, MAX_PENDING_ACTIONS> {
        std::mem::take(&mut self.pending)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Total number of actions dropped because the queue was full.
    pub fn dropped(&self) -> u64 {
        self.dropped
    }
}
