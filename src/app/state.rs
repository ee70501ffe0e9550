use synapta_core::engine::Simulation;
use synapta_core::scheduler::Scheduler;

/// Grid dimensions, fixed for the lifetime of the process. Sized so the
/// full board fits a large terminal at two grid rows per terminal row.
pub const GRID_WIDTH: u16 = 128;
pub const GRID_HEIGHT: u16 = 96;

pub struct App {
    pub scheduler: Scheduler,
}

impl App {
    pub fn new() -> Self {
        Self {
            scheduler: Scheduler::new(Simulation::new(GRID_WIDTH, GRID_HEIGHT)),
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
