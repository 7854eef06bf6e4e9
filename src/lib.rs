//! Life View (workspace facade crate).
//!
//! Re-exports the member crates under one roof as
//! `life_view::{core,engine,input,term,types}`, plus the host
//! [`config`] used by the terminal binary.

pub mod config;

pub use life_view_core as core;
pub use life_view_engine as engine;
pub use life_view_input as input;
pub use life_view_term as term;
pub use life_view_types as types;

pub use config::ViewerConfig;
