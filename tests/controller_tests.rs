//! Controller behaviour with a hand-driven scheduler.

use anyhow::{bail, Result};

use life_view::core::{CellView, SimulationEngine, Universe};
use life_view::engine::{AnimationState, Controller, ManualScheduler, StartMode};
use life_view::input::BoundingBox;
use life_view::term::{FrameRenderer, Palette, PixelBuffer};
use life_view::types::{Dimensions, GridCoord, GridGeometry};

/// Universe wrapper that counts calls and can be told to fail.
struct CountingEngine {
    universe: Universe,
    steps: usize,
    toggles: Vec<(u32, u32)>,
    fail_step_at: Option<usize>,
    fail_toggle: bool,
}

impl CountingEngine {
    fn new(universe: Universe) -> Self {
        Self {
            universe,
            steps: 0,
            toggles: Vec::new(),
            fail_step_at: None,
            fail_toggle: false,
        }
    }
}

impl SimulationEngine for CountingEngine {
    fn dimensions(&self) -> Dimensions {
        self.universe.dimensions()
    }

    fn step(&mut self) -> Result<()> {
        if self.fail_step_at == Some(self.steps + 1) {
            bail!("engine exploded");
        }
        self.steps += 1;
        self.universe.step()
    }

    fn cell_state_view(&self) -> CellView<'_> {
        self.universe.cell_state_view()
    }

    fn toggle(&mut self, row: u32, col: u32) -> Result<()> {
        if self.fail_toggle {
            bail!("toggle rejected");
        }
        self.toggles.push((row, col));
        self.universe.toggle(row, col)
    }
}

const CELL: u32 = 4;

type TestController = Controller<CountingEngine, PixelBuffer, ManualScheduler>;

fn controller_with(engine: CountingEngine) -> TestController {
    let (w, h) = GridGeometry::new(engine.dimensions(), CELL).surface_size();
    Controller::new(
        engine,
        PixelBuffer::new(w, h),
        ManualScheduler::new(),
        CELL,
        Palette::default(),
    )
    .unwrap()
}

fn controller(width: u32, height: u32) -> TestController {
    controller_with(CountingEngine::new(Universe::with_size(width, height)))
}

/// Render `universe` from scratch onto a fresh surface.
fn expected_frame(universe: &Universe) -> PixelBuffer {
    let geometry = GridGeometry::new(universe.dimensions(), CELL);
    let (w, h) = geometry.surface_size();
    let mut fb = PixelBuffer::new(w, h);
    FrameRenderer::new(geometry, Palette::default()).render(&universe.cell_state_view(), &mut fb);
    fb
}

fn fire(c: &mut TestController) -> bool {
    let frame = c.scheduler_mut().fire().expect("no frame pending");
    c.on_frame(frame).unwrap()
}

#[test]
fn initial_render_happens_before_any_cycle() {
    let mut c = controller(16, 16);
    c.start(StartMode::Paused).unwrap();

    assert!(c.is_paused());
    assert_eq!(c.engine().steps, 0);
    assert_eq!(c.surface(), &expected_frame(&Universe::with_size(16, 16)));
}

#[test]
fn three_cycles_then_pause() {
    let mut c = controller(16, 16);
    c.start(StartMode::Paused).unwrap();

    // play() runs the first cycle immediately; two delivered frames follow.
    c.play().unwrap();
    assert!(fire(&mut c));
    assert!(fire(&mut c));
    c.pause();

    assert!(c.is_paused());
    assert_eq!(c.engine().steps, 3);
    assert_eq!(c.generation(), 3);

    let mut reference = Universe::with_size(16, 16);
    for _ in 0..3 {
        reference.step().unwrap();
    }
    assert_eq!(c.surface(), &expected_frame(&reference));
}

#[test]
fn no_steps_after_pause_until_next_play() {
    let mut c = controller(8, 8);
    c.play().unwrap();
    let pending = c.scheduler().pending().unwrap();
    c.pause();

    assert_eq!(c.scheduler().cancelled(), 1);
    assert_eq!(c.scheduler_mut().fire(), None);
    assert!(!c.on_frame(pending).unwrap());
    assert_eq!(c.engine().steps, 1);

    c.play().unwrap();
    assert_eq!(c.engine().steps, 2);
    assert!(matches!(c.state(), AnimationState::Running(_)));
}

#[test]
fn toggle_control_alternates() {
    let mut c = controller(8, 8);
    c.toggle_play_pause().unwrap();
    assert!(!c.is_paused());
    c.toggle_play_pause().unwrap();
    assert!(c.is_paused());
    assert_eq!(c.engine().steps, 1);
}

#[test]
fn frame_shows_the_generation_just_computed() {
    let mut c = controller(12, 12);
    c.start(StartMode::Running).unwrap();
    fire(&mut c);

    let mut reference = Universe::with_size(12, 12);
    reference.step().unwrap();
    reference.step().unwrap();
    assert_eq!(c.surface(), &expected_frame(&reference));
}

#[test]
fn click_toggles_and_renders_while_paused() {
    let mut c = controller_with(CountingEngine::new(Universe::empty(64, 64)));
    c.start(StartMode::Paused).unwrap();
    let bounds = BoundingBox::new(0.0, 0.0, 321.0, 321.0);

    assert_eq!(c.handle_click(0.0, 0.0, &bounds).unwrap(), GridCoord::new(0, 0));
    assert_eq!(c.handle_click(320.0, 320.0, &bounds).unwrap(), GridCoord::new(63, 63));
    assert_eq!(c.handle_click(321.0, 321.0, &bounds).unwrap(), GridCoord::new(63, 63));

    assert_eq!(c.engine().toggles, vec![(0, 0), (63, 63), (63, 63)]);
    assert_eq!(c.engine().steps, 0);
    assert!(c.is_paused());

    // (63, 63) was toggled twice, so only (0, 0) is alive.
    let mut reference = Universe::empty(64, 64);
    reference.toggle(0, 0).unwrap();
    assert_eq!(c.surface(), &expected_frame(&reference));
}

#[test_log::test]
fn click_while_running_redraws_without_stepping() {
    let mut c = controller_with(CountingEngine::new(Universe::empty(6, 6)));
    c.start(StartMode::Running).unwrap();
    let pending = c.scheduler().pending();
    let bounds = BoundingBox::new(0.0, 0.0, 31.0, 31.0);

    // Centre of cell (2, 4).
    let coord = c.handle_click(4.0 * 5.0 + 3.0, 2.0 * 5.0 + 3.0, &bounds).unwrap();
    assert_eq!(coord, GridCoord::new(2, 4));

    assert_eq!(c.engine().steps, 1);
    assert_eq!(c.scheduler().pending(), pending);
    assert!(!c.is_paused());

    // An empty grid stays empty after the first step; only the click shows.
    let mut reference = Universe::empty(6, 6);
    reference.toggle(2, 4).unwrap();
    assert_eq!(c.surface(), &expected_frame(&reference));
}

#[test]
fn click_between_cycles_is_seen_by_the_next_cycle() {
    let mut c = controller_with(CountingEngine::new(Universe::empty(6, 6)));
    c.start(StartMode::Running).unwrap();
    let bounds = BoundingBox::new(0.0, 0.0, 31.0, 31.0);

    // Build a horizontal blinker at row 2, cols 1..=3 with three clicks.
    for col in 1..=3 {
        let x = (col * (CELL + 1) + 1) as f64;
        let y = (2 * (CELL + 1) + 1) as f64;
        c.handle_click(x, y, &bounds).unwrap();
    }
    assert!(!c.is_paused());

    fire(&mut c);
    let view = c.engine().cell_state_view();
    assert!(view.get(1, 2).is_alive());
    assert!(view.get(2, 2).is_alive());
    assert!(view.get(3, 2).is_alive());
    assert_eq!(view.alive_count(), 3);
}

#[test_log::test]
fn step_failure_leaves_controller_paused() {
    let mut engine = CountingEngine::new(Universe::with_size(8, 8));
    engine.fail_step_at = Some(2);
    let mut c = controller_with(engine);

    c.play().unwrap();
    let frame = c.scheduler_mut().fire().unwrap();
    let err = c.on_frame(frame).unwrap_err();

    assert!(format!("{err:#}").contains("engine exploded"));
    assert!(c.is_paused());
    assert_eq!(c.scheduler().pending(), None);
    assert_eq!(c.generation(), 1);
}

#[test_log::test]
fn failed_play_never_schedules() {
    let mut engine = CountingEngine::new(Universe::with_size(8, 8));
    engine.fail_step_at = Some(1);
    let mut c = controller_with(engine);

    assert!(c.play().is_err());
    assert!(c.is_paused());
    assert_eq!(c.scheduler().requested(), 0);
}

#[test_log::test]
fn toggle_failure_cancels_pending_frame() {
    let mut engine = CountingEngine::new(Universe::with_size(8, 8));
    engine.fail_toggle = true;
    let mut c = controller_with(engine);
    c.play().unwrap();
    assert!(c.scheduler().pending().is_some());

    let bounds = BoundingBox::new(0.0, 0.0, 41.0, 41.0);
    assert!(c.handle_click(3.0, 3.0, &bounds).is_err());
    assert!(c.is_paused());
    assert_eq!(c.scheduler().pending(), None);
    assert_eq!(c.scheduler().cancelled(), 1);
}

#[test]
fn step_once_advances_and_renders_while_paused() {
    let mut c = controller(10, 10);
    c.start(StartMode::Paused).unwrap();
    assert!(c.step_once().unwrap());

    let mut reference = Universe::with_size(10, 10);
    reference.step().unwrap();
    assert_eq!(c.surface(), &expected_frame(&reference));
    assert_eq!(c.scheduler().requested(), 0);
}

#[test]
fn borrowed_engine_can_be_inspected_after_controller_drops() {
    let mut universe = Universe::with_size(8, 8);
    {
        let (w, h) = GridGeometry::new(universe.dimensions(), 1).surface_size();
        let mut c = Controller::new(
            &mut universe,
            PixelBuffer::new(w, h),
            ManualScheduler::new(),
            1,
            Palette::default(),
        )
        .unwrap();
        c.start(StartMode::Running).unwrap();
        let frame = c.scheduler_mut().fire().unwrap();
        assert!(c.on_frame(frame).unwrap());
    }
    assert_eq!(universe.generation(), 2);
}
