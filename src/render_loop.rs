//! Timed evolve/present cycle.
//!
//! [`RenderLoop`] is a single-owner timer: at most one tick is ever pending,
//! and the next one is armed only once the current evolve and present phases
//! are done. Time is passed in by the caller so the driver decides how to
//! wait (sleeping, polling input, ...).

use crate::World;
use std::{
    io,
    time::{Duration, Instant},
};
use tracing::{debug, trace, warn};

/// Shortest period a loop will accept
const MIN_PERIOD: Duration = Duration::from_millis(1);

/// A drawing target obtained for a single present phase
pub trait Canvas {
    fn draw(&mut self, world: &World) -> io::Result<()>;
}

/// Hands out the canvas of a drawing surface, if the surface is ready
pub trait SurfaceProvider {
    fn lock_canvas(&mut self) -> Option<&mut dyn Canvas>;
}

/// A surface that is never ready, every present phase is skipped
#[derive(Debug, Default, Clone, Copy)]
pub struct NoSurface;
impl SurfaceProvider for NoSurface {
    fn lock_canvas(&mut self) -> Option<&mut dyn Canvas> {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    /// Never started
    Stopped,
    /// A tick is pending and fires once `due` has passed
    Scheduled { due: Instant },
    /// No tick is pending
    Cancelled,
}

/// What a fired tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tick {
    pub evolved: bool,
    pub presented: bool,
}

#[derive(Debug)]
pub struct RenderLoop {
    state: LoopState,
    period: Duration,
    running: bool,
    visible: bool,
    destroyed: bool,
}

impl RenderLoop {
    pub fn new(period: Duration) -> Self {
        Self {
            state: LoopState::Stopped,
            period: period.max(MIN_PERIOD),
            running: true,
            visible: true,
            destroyed: false,
        }
    }

    /// Enqueues the first tick, due immediately
    pub fn start(&mut self, now: Instant) {
        if self.state == LoopState::Stopped && self.visible && !self.destroyed {
            self.state = LoopState::Scheduled { due: now };
        }
    }

    #[inline]
    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Deadline of the pending tick
    pub fn next_due(&self) -> Option<Instant> {
        match self.state {
            LoopState::Scheduled { due } => Some(due),
            _ => None,
        }
    }

    #[inline]
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Changes the delay used when the next tick is armed
    ///
    /// An already pending tick keeps its deadline.
    pub fn set_period(&mut self, period: Duration) {
        self.period = period.max(MIN_PERIOD);
    }

    #[inline]
    pub fn set_playing(&mut self, playing: bool) {
        self.running = playing;
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        self.running
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool, now: Instant) {
        self.visible = visible;
        if !visible {
            self.cancel();
        } else if !self.destroyed && !matches!(self.state, LoopState::Scheduled { .. }) {
            self.state = LoopState::Scheduled { due: now };
        }
    }

    /// Drops the pending tick, if any
    pub fn cancel(&mut self) {
        if self.state != LoopState::Cancelled {
            debug!("render loop cancelled");
        }
        self.state = LoopState::Cancelled;
    }

    /// Cancels the loop for good, it will never be armed again
    pub fn destroy(&mut self) {
        self.destroyed = true;
        self.visible = false;
        self.cancel();
    }

    /// Fires the pending tick if it is due at `now`
    ///
    /// Returns [`None`] when nothing was due.
    pub fn poll<S>(&mut self, now: Instant, world: &mut World, surface: &mut S) -> Option<Tick>
    where
        S: SurfaceProvider + ?Sized,
    {
        match self.state {
            LoopState::Scheduled { due } if due <= now => {}
            _ => return None,
        }

        let evolved = self.running;
        if evolved {
            world.step();
        }
        let presented = self.force_present(world, surface);

        self.state = if self.visible && !self.destroyed {
            LoopState::Scheduled {
                due: now + self.period,
            }
        } else {
            LoopState::Cancelled
        };

        trace!(evolved, presented, generation = world.generation(), "tick");
        Some(Tick { evolved, presented })
    }

    /// Draws `world` right away, outside the schedule
    ///
    /// The pending tick is left untouched. Returns whether a frame was drawn.
    pub fn force_present<S>(&self, world: &World, surface: &mut S) -> bool
    where
        S: SurfaceProvider + ?Sized,
    {
        let Some(canvas) = surface.lock_canvas() else {
            trace!("surface not ready, skipping present");
            return false;
        };
        match canvas.draw(world) {
            Ok(()) => true,
            Err(err) => {
                warn!(%err, "failed to draw world");
                false
            }
        }
    }
}
