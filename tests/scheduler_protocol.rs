//! Drives the scheduler with a scripted frontend: the presentation device
//! completes frames only when the script says so, which is exactly the
//! situation the backpressure latch exists for.

use std::collections::VecDeque;
use std::sync::atomic::AtomicBool;
use std::time::Duration;

use anyhow::Result;
use synapta_core::cell::CellState;
use synapta_core::engine::Simulation;
use synapta_core::event::{Command, Event};
use synapta_core::grid::StateGrid;
use synapta_core::scheduler::{EventSource, Presenter, Scheduler};

#[derive(Default)]
struct ScriptedFrontend {
    queue: VecDeque<Event>,
    presents: Vec<StateGrid>,
    /// When set, the device completes that many presentations and then
    /// injects `Quit`. When unset it stays silent, like a stalled device.
    completion_budget: Option<usize>,
}

impl EventSource for ScriptedFrontend {
    fn poll_event(&mut self) -> Result<Option<Event>> {
        Ok(self.queue.pop_front())
    }
}

impl Presenter for ScriptedFrontend {
    fn present(&mut self, grid: &StateGrid) -> Result<()> {
        self.presents.push(grid.clone());
        match &mut self.completion_budget {
            Some(0) => self.queue.push_back(Event::Command(Command::Quit)),
            Some(n) => {
                *n -= 1;
                self.queue.push_back(Event::PresentationComplete);
            }
            None => {}
        }
        Ok(())
    }
}

#[test]
fn test_stalled_presenter_freezes_the_generation_counter() {
    let mut scheduler = Scheduler::new(Simulation::new(12, 12));
    let mut frontend = ScriptedFrontend::default();

    // Input keeps flowing while the presenter never completes.
    for i in 0..30 {
        frontend.queue.push_back(Event::PointerMove { x: i % 12, y: 3 });
        scheduler.tick(&mut frontend).unwrap();
    }

    assert_eq!(scheduler.simulation().generation(), 0);
    assert!(frontend.presents.is_empty(), "no frame may be requested");
    // The pointer writes still landed.
    assert_eq!(scheduler.simulation().grid().get(5, 3), CellState::Firing);
}

#[test]
fn test_each_completion_buys_exactly_one_generation() {
    let mut scheduler = Scheduler::new(Simulation::new(12, 12));
    let mut frontend = ScriptedFrontend::default();

    for round in 1..=5 {
        frontend.queue.push_back(Event::PresentationComplete);
        scheduler.tick(&mut frontend).unwrap();
        // Extra ticks without completion change nothing.
        scheduler.tick(&mut frontend).unwrap();
        scheduler.tick(&mut frontend).unwrap();

        assert_eq!(scheduler.simulation().generation(), round);
        assert_eq!(frontend.presents.len(), round as usize);
    }
}

#[test]
fn test_presented_frame_reflects_input_applied_before_the_step() {
    let mut scheduler = Scheduler::new(Simulation::new(12, 12));
    let mut frontend = ScriptedFrontend::default();

    // Seed two vertically adjacent firing cells, then let one frame
    // complete: the presented grid is the stepped successor.
    frontend.queue.push_back(Event::PointerMove { x: 4, y: 4 });
    frontend.queue.push_back(Event::PointerMove { x: 4, y: 5 });
    frontend.queue.push_back(Event::PresentationComplete);
    scheduler.tick(&mut frontend).unwrap();

    let presented = frontend.presents.last().unwrap();
    assert_eq!(presented.get(4, 4), CellState::Refractory);
    assert_eq!(presented.get(4, 5), CellState::Refractory);
    assert_eq!(presented.get(5, 4), CellState::Firing);
}

#[test]
fn test_out_of_range_pointer_is_discarded_silently() {
    let mut scheduler = Scheduler::new(Simulation::new(12, 12));
    let mut frontend = ScriptedFrontend::default();

    frontend.queue.push_back(Event::PointerMove { x: -1, y: 0 });
    frontend.queue.push_back(Event::PointerMove { x: 12, y: 0 });
    frontend.queue.push_back(Event::PointerMove { x: 0, y: -7 });
    frontend.queue.push_back(Event::PointerMove { x: 0, y: 12 });
    scheduler.tick(&mut frontend).unwrap();

    let grid = scheduler.simulation().grid();
    assert!(grid.cells().iter().all(|&s| s == CellState::Ready));
}

#[test]
fn test_run_loop_strictly_alternates_until_quit() {
    let mut scheduler =
        Scheduler::new(Simulation::new(12, 12)).with_frame_period(Duration::ZERO);
    let mut frontend = ScriptedFrontend {
        completion_budget: Some(9),
        ..Default::default()
    };
    frontend.queue.push_back(Event::Command(Command::StampBlock));

    let shutdown = AtomicBool::new(false);
    scheduler.run(&mut frontend, &shutdown).unwrap();

    // Initial present plus one per completed frame; the device completed
    // nine, so nine generations ran before the injected quit landed.
    assert!(!scheduler.is_running());
    assert_eq!(frontend.presents.len(), 10);
    assert_eq!(scheduler.simulation().generation(), 9);
}
