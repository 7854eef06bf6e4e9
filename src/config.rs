//! Viewer configuration, read from the environment.
//!
//! - `LIFE_VIEW_WIDTH` / `LIFE_VIEW_HEIGHT`: grid size in cells (default 48x24)
//! - `LIFE_VIEW_CELL_SIZE`: cell edge in pixels (default 1)
//! - `LIFE_VIEW_FRAME_MS`: delay between animation frames (default 100)
//! - `LIFE_VIEW_START_PAUSED`: `1` or `true` to start paused
//! - `LIFE_VIEW_LOG_PATH`: write logs to this file (logging is off otherwise)
//!
//! Missing, unparseable, or zero values fall back to the defaults.

use std::time::Duration;

use crate::engine::StartMode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerConfig {
    pub width: u32,
    pub height: u32,
    pub cell_size: u32,
    pub frame_interval: Duration,
    pub start_mode: StartMode,
    pub log_path: Option<String>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        // Sized so the grid plus status line fits an 80x24-ish terminal
        // once two pixel rows share a line.
        Self {
            width: 48,
            height: 24,
            cell_size: 1,
            frame_interval: Duration::from_millis(100),
            start_mode: StartMode::Running,
            log_path: None,
        }
    }
}

impl ViewerConfig {
    /// Create from `LIFE_VIEW_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let positive = |key: &str, default: u32| {
            lookup(key)
                .and_then(|s| s.trim().parse::<u32>().ok())
                .filter(|&v| v > 0)
                .unwrap_or(default)
        };

        let frame_ms = lookup("LIFE_VIEW_FRAME_MS")
            .and_then(|s| s.trim().parse::<u64>().ok())
            .filter(|&v| v > 0);

        let start_paused = lookup("LIFE_VIEW_START_PAUSED")
            .map(|v| {
                let v = v.trim().to_lowercase();
                v == "1" || v == "true"
            })
            .unwrap_or(false);

        let log_path = lookup("LIFE_VIEW_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        Self {
            width: positive("LIFE_VIEW_WIDTH", defaults.width),
            height: positive("LIFE_VIEW_HEIGHT", defaults.height),
            cell_size: positive("LIFE_VIEW_CELL_SIZE", defaults.cell_size),
            frame_interval: frame_ms
                .map(Duration::from_millis)
                .unwrap_or(defaults.frame_interval),
            start_mode: if start_paused {
                StartMode::Paused
            } else {
                defaults.start_mode
            },
            log_path,
        }
    }
}
