//! The cooperative control loop coupling the simulation to an
//! asynchronous presentation device.
//!
//! Each iteration drains pending events, advances one generation when the
//! previous frame has been consumed, and paces itself to a fixed
//! wall-clock period. The `presentation_ready` latch is the only
//! synchronization with the presenter: a new generation is computed only
//! after the device reports it has finished reading the last one, so at
//! most one frame is ever in flight.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use anyhow::Result;

use crate::engine::Simulation;
use crate::event::{Command, Event};
use crate::grid::StateGrid;
use crate::input;

/// Fixed wall-clock period per iteration (about 20 generations/sec).
pub const TARGET_FRAME: Duration = Duration::from_millis(50);

/// Upper bound on a single pacing sleep. The loop re-measures elapsed
/// time after every slice instead of sleeping the whole remainder at once.
const SLEEP_SLICE: Duration = Duration::from_millis(5);

/// Non-blocking presentation device.
///
/// `present` only requests presentation of the buffer; the device reports
/// completion later through [`Event::PresentationComplete`] on its event
/// source. The scheduler never mutates the grid between a `present` call
/// and the matching completion event.
pub trait Presenter {
    fn present(&mut self, grid: &StateGrid) -> Result<()>;
}

/// Ordered, non-blocking source of decoded events.
pub trait EventSource {
    /// Next pending event, or `None` once everything currently queued has
    /// been drained.
    fn poll_event(&mut self) -> Result<Option<Event>>;
}

/// Drives the simulation: drains input, advances under presentation
/// backpressure, and paces iterations to [`TARGET_FRAME`].
pub struct Scheduler {
    sim: Simulation,
    presentation_ready: bool,
    running: bool,
    frame_period: Duration,
}

impl Scheduler {
    pub fn new(sim: Simulation) -> Self {
        Self {
            sim,
            presentation_ready: false,
            running: true,
            frame_period: TARGET_FRAME,
        }
    }

    /// Overrides the pacing period. Tests use a zero period.
    pub fn with_frame_period(mut self, period: Duration) -> Self {
        self.frame_period = period;
        self
    }

    pub fn simulation(&self) -> &Simulation {
        &self.sim
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// One iteration without pacing: drain all pending events, then
    /// advance and request presentation only if the previous presentation
    /// has completed.
    pub fn tick<F>(&mut self, frontend: &mut F) -> Result<()>
    where
        F: EventSource + Presenter,
    {
        while let Some(event) = frontend.poll_event()? {
            match event {
                Event::Command(Command::Quit) => {
                    tracing::info!("quit requested");
                    self.running = false;
                }
                Event::WindowClose => {
                    tracing::info!("close requested");
                    self.running = false;
                }
                Event::PresentationComplete => self.presentation_ready = true,
                Event::PointerMove { x, y } => input::pointer_move(self.sim.grid_mut(), x, y),
                Event::Command(command) => input::apply_command(self.sim.grid_mut(), command),
            }
        }

        if self.running && self.presentation_ready {
            self.presentation_ready = false;
            self.sim.step();
            frontend.present(self.sim.grid())?;
        }
        Ok(())
    }

    /// Runs until quit, a close request, or `shutdown` is raised.
    ///
    /// Presents the initial grid once so the completion cycle has a frame
    /// to report on, then alternates strictly: present, completion event,
    /// one generation, present.
    pub fn run<F>(&mut self, frontend: &mut F, shutdown: &AtomicBool) -> Result<()>
    where
        F: EventSource + Presenter,
    {
        tracing::info!(
            width = self.sim.grid().width(),
            height = self.sim.grid().height(),
            "scheduler started"
        );
        frontend.present(self.sim.grid())?;

        while self.running && !shutdown.load(Ordering::SeqCst) {
            let start = Instant::now();
            self.tick(frontend)?;

            // Bounded slices, re-measured each pass; shutdown is observed
            // within one slice.
            while start.elapsed() < self.frame_period {
                if shutdown.load(Ordering::SeqCst) {
                    break;
                }
                let remaining = self.frame_period - start.elapsed();
                std::thread::sleep(remaining.min(SLEEP_SLICE));
            }
        }

        tracing::info!(generation = self.sim.generation(), "scheduler stopped");
        Ok(())
    }
}
