//! Controller - animation state machine and pointer entry point
//!
//! One `Controller` owns everything a view needs: the simulation engine, the
//! drawing surface, the frame scheduler, the renderer, and the play/pause
//! state. Hosts construct it once and route their callbacks into it.
//!
//! # States
//!
//! ```text
//!            play()                      on_frame(h) == pending
//!  Paused ----------> Running(h) ------------------------------+
//!    ^                  |   ^                                   |
//!    |     pause()      |   +---- step, render, request frame --+
//!    +------------------+
//! ```
//!
//! A cycle is always: step the engine, render the fresh buffer, then
//! request the next frame. The displayed frame therefore always shows the
//! generation that was just computed.

use anyhow::{ensure, Context, Result};
use log::{debug, error, info, trace, warn};

use crate::core::SimulationEngine;
use crate::input::{map_pointer, BoundingBox};
use crate::scheduler::{FrameHandle, FrameScheduler};
use crate::term::{FrameRenderer, Palette, Surface};
use crate::types::{GridCoord, GridGeometry};

/// Animation state. A handle is held iff running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationState {
    Paused,
    Running(FrameHandle),
}

/// Whether [`Controller::start`] begins the animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StartMode {
    #[default]
    Paused,
    Running,
}

pub struct Controller<E, S, Q> {
    engine: E,
    surface: S,
    scheduler: Q,
    renderer: FrameRenderer,
    state: AnimationState,
    generation: u64,
}

impl<E, S, Q> Controller<E, S, Q>
where
    E: SimulationEngine,
    S: Surface,
    Q: FrameScheduler,
{
    /// Bind an engine to a surface.
    ///
    /// Dimensions are read from the engine once. Fails if the surface does
    /// not have exactly the pixel size the grid needs.
    pub fn new(engine: E, surface: S, scheduler: Q, cell_size: u32, palette: Palette) -> Result<Self> {
        let dims = engine.dimensions();
        ensure!(
            !dims.is_empty(),
            "simulation reported an empty {}x{} grid",
            dims.width,
            dims.height
        );
        ensure!(cell_size > 0, "cell size must be at least 1px");

        let geometry = GridGeometry::new(dims, cell_size);
        ensure!(
            geometry.checked_surface_size().is_some(),
            "{}x{} grid at {cell_size}px overflows the pixel surface",
            dims.width,
            dims.height
        );

        let renderer = FrameRenderer::new(geometry, palette);
        renderer
            .check_surface(&surface)
            .context("drawing surface is unusable")?;

        Ok(Self {
            engine,
            surface,
            scheduler,
            renderer,
            state: AnimationState::Paused,
            generation: 0,
        })
    }

    /// Draw the first frame, then start animating if `mode` asks for it.
    pub fn start(&mut self, mode: StartMode) -> Result<()> {
        self.render();
        if mode == StartMode::Running {
            self.play()?;
        }
        Ok(())
    }

    pub fn state(&self) -> AnimationState {
        self.state
    }

    pub fn is_paused(&self) -> bool {
        self.state == AnimationState::Paused
    }

    /// Generations advanced through this controller.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn geometry(&self) -> &GridGeometry {
        self.renderer.geometry()
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn scheduler(&self) -> &Q {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut Q {
        &mut self.scheduler
    }

    /// Start animating: run one cycle now and schedule the next.
    ///
    /// # Panics
    ///
    /// Panics if already running.
    pub fn play(&mut self) -> Result<()> {
        assert!(self.is_paused(), "play() called while already running");
        info!("animation started at generation {}", self.generation);
        self.run_cycle()
    }

    /// Stop animating and redraw the current state without stepping.
    ///
    /// # Panics
    ///
    /// Panics if already paused.
    pub fn pause(&mut self) {
        assert!(!self.is_paused(), "pause() called while already paused");
        self.halt();
        info!("animation paused at generation {}", self.generation);
        self.render();
    }

    /// `play()` if paused, `pause()` otherwise.
    pub fn toggle_play_pause(&mut self) -> Result<()> {
        if self.is_paused() {
            self.play()
        } else {
            self.pause();
            Ok(())
        }
    }

    /// Host callback for a delivered frame.
    ///
    /// Returns `Ok(false)` for handles that are no longer pending (cancelled
    /// or superseded); those never step the engine.
    pub fn on_frame(&mut self, handle: FrameHandle) -> Result<bool> {
        match self.state {
            AnimationState::Running(pending) if pending == handle => {
                self.run_cycle()?;
                Ok(true)
            }
            _ => {
                warn!("ignoring stale frame {}", handle.id());
                Ok(false)
            }
        }
    }

    /// Advance one generation while paused.
    ///
    /// Returns `Ok(false)` without stepping when running.
    pub fn step_once(&mut self) -> Result<bool> {
        if !self.is_paused() {
            return Ok(false);
        }
        self.advance()?;
        self.render();
        Ok(true)
    }

    /// Toggle the cell under a pointer press and redraw.
    ///
    /// Works in either animation state. The position is clamped onto the
    /// grid, so the only possible error is an engine failure.
    pub fn handle_click(
        &mut self,
        client_x: f64,
        client_y: f64,
        bounds: &BoundingBox,
    ) -> Result<GridCoord> {
        let coord = map_pointer(self.renderer.geometry(), client_x, client_y, bounds);
        debug!(
            "click at ({client_x}, {client_y}) -> cell ({}, {})",
            coord.row, coord.col
        );

        if let Err(err) = self.engine.toggle(coord.row, coord.col) {
            error!("toggle of ({}, {}) failed: {err:#}", coord.row, coord.col);
            self.halt();
            return Err(err.context(format!("failed to toggle cell ({}, {})", coord.row, coord.col)));
        }

        self.render();
        Ok(coord)
    }

    /// Draw background and cells from a freshly fetched view.
    pub fn render(&mut self) {
        let view = self.engine.cell_state_view();
        self.renderer.render(&view, &mut self.surface);
        trace!("rendered generation {}", self.generation);
    }

    fn run_cycle(&mut self) -> Result<()> {
        self.advance()?;
        self.render();
        self.state = AnimationState::Running(self.scheduler.request_frame());
        Ok(())
    }

    fn advance(&mut self) -> Result<()> {
        if let Err(err) = self.engine.step() {
            error!("simulation step failed at generation {}: {err:#}", self.generation);
            self.halt();
            return Err(err.context("simulation step failed"));
        }
        self.generation += 1;
        Ok(())
    }

    /// Cancel any pending frame and drop to `Paused`.
    fn halt(&mut self) {
        if let AnimationState::Running(handle) = self.state {
            self.scheduler.cancel_frame(handle);
        }
        self.state = AnimationState::Paused;
    }
}
