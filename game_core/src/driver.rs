//! Frame loop driver
//!
//! The host owns the actual timing (e.g. `requestAnimationFrame`); the driver
//! only asks for the next frame after finishing the current one.

use crate::render::Canvas;
use crate::Game;

/// "Run the frame callback again before the next repaint"
pub trait Scheduler {
    fn schedule_next(&mut self);
}

/// Runs one simulation tick and one render per scheduled frame.
///
/// The step is fixed per frame; elapsed wall-clock time is ignored.
pub struct FrameLoop<S: Scheduler> {
    scheduler: S,
    frames: u64,
}

impl<S: Scheduler> FrameLoop<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            frames: 0,
        }
    }

    /// Body of the frame callback
    pub fn tick(&mut self, game: &mut Game, canvas: &mut impl Canvas) {
        game.update();
        game.draw(canvas);
        self.frames += 1;
        self.scheduler.schedule_next();
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }
}

/// Scheduler that only counts requests; the caller plays the host and decides
/// when pending frames run.
#[derive(Debug, Clone, Default)]
pub struct ManualScheduler {
    pending: u64,
    requested: u64,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Frames requested but not yet run
    pub fn pending(&self) -> u64 {
        self.pending
    }

    /// Total frames ever requested
    pub fn requested(&self) -> u64 {
        self.requested
    }

    /// Consume one pending frame, if any
    pub fn take(&mut self) -> bool {
        if self.pending == 0 {
            return false;
        }
        self.pending -= 1;
        true
    }
}

impl Scheduler for ManualScheduler {
    fn schedule_next(&mut self) {
        self.pending += 1;
        self.requested += 1;
    }
}

impl FrameLoop<ManualScheduler> {
    /// Run the first frame directly, then `frames - 1` scheduled ones
    pub fn run_frames(&mut self, game: &mut Game, canvas: &mut impl Canvas, frames: u64) {
        if frames == 0 {
            return;
        }
        self.tick(game, canvas);
        for _ in 1..frames {
            if !self.scheduler.take() {
                break;
            }
            self.tick(game, canvas);
        }
    }
}
