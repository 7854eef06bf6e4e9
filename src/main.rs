//! Terminal Game of Life viewer (default binary).
//!
//! The terminal loop plays the role of the host event queue: it drains
//! pending input, delivers due animation frames to the controller, and
//! flushes the controller's pixel surface with half-block glyphs.

use std::fs::File;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use log::{error, info};

use life_view::core::{SimulationEngine, Universe};
use life_view::engine::{Controller, TickScheduler};
use life_view::input::{should_quit, ControlAction, InputHandler};
use life_view::term::{Palette, PixelBuffer, TerminalRenderer};
use life_view::types::{Dimensions, GridGeometry};
use life_view::ViewerConfig;

/// Poll timeout while paused (no frame pending).
const IDLE_POLL: Duration = Duration::from_millis(250);

type TermController = Controller<Universe, PixelBuffer, TickScheduler>;

fn main() -> Result<()> {
    let config = ViewerConfig::from_env();
    init_logging(&config)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(err) = &result {
        error!("viewer stopped: {err:#}");
    }
    result
}

/// Logs go to a file only; stderr would scribble over the alternate screen.
fn init_logging(config: &ViewerConfig) -> Result<()> {
    let Some(path) = config.log_path.as_deref() else {
        return Ok(());
    };
    let file = File::create(path).with_context(|| format!("failed to create log file {path}"))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: &ViewerConfig) -> Result<()> {
    let dims = Dimensions::new(config.width, config.height);
    let geometry = GridGeometry::new(dims, config.cell_size);
    let (px_w, px_h) = geometry.checked_surface_size().with_context(|| {
        format!(
            "{}x{} cells at {}px do not fit on a surface",
            config.width, config.height, config.cell_size
        )
    })?;

    let universe = Universe::with_size(config.width, config.height);
    let mut controller: TermController = Controller::new(
        universe,
        PixelBuffer::new(px_w, px_h),
        TickScheduler::new(config.frame_interval),
        config.cell_size,
        Palette::default(),
    )?;

    let bounds = TerminalRenderer::surface_bounds(controller.surface());
    info!(
        "viewer started: {}x{} cells, {}x{} px, frame every {:?}",
        config.width, config.height, px_w, px_h, config.frame_interval
    );

    controller.start(config.start_mode)?;
    let mut input = InputHandler::new();

    loop {
        term.draw(controller.surface(), &status_line(&controller))?;

        // Block until the next frame is due or input arrives.
        let timeout = controller
            .scheduler()
            .time_until_due(Instant::now())
            .unwrap_or(IDLE_POLL);

        if event::poll(timeout)? {
            loop {
                let ev = event::read()?;
                if let Event::Key(key) = ev {
                    if key.kind == KeyEventKind::Press && should_quit(key) {
                        info!("quit at generation {}", controller.generation());
                        return Ok(());
                    }
                }
                input.handle_event(&ev);
                if !event::poll(Duration::ZERO)? {
                    break;
                }
            }
        }

        // Input queued before a frame is applied before that frame runs.
        for action in input.drain() {
            match action {
                ControlAction::TogglePlay => controller.toggle_play_pause()?,
                ControlAction::StepOnce => {
                    controller.step_once()?;
                }
                ControlAction::Redraw => term.invalidate(),
                ControlAction::Click { client_x, client_y } => {
                    controller.handle_click(client_x, client_y, &bounds)?;
                }
            }
        }

        if let Some(frame) = controller.scheduler_mut().due(Instant::now()) {
            controller.on_frame(frame)?;
        }
    }
}

fn status_line(controller: &TermController) -> String {
    let state = if controller.is_paused() {
        "|| paused "
    } else {
        "|> running"
    };
    format!(
        "{state}  gen {}  alive {}  [space] play/pause  [n] step  [click] toggle  [q] quit",
        controller.generation(),
        controller.engine().cell_state_view().alive_count()
    )
}
