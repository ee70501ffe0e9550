//! # Synapta Core
//!
//! The simulation and scheduling core for Synapta, a Brian's Brain
//! cellular automaton driven at a fixed cadence.
//!
//! This crate contains everything that does not touch a terminal:
//! - The three-state cell model and its transition table
//! - A fixed-size toroidal grid with wrap-around neighbor lookup
//! - The double-buffered generation engine
//! - Input-to-grid mutation (pointer seeding, pattern stamps, reset)
//! - The frame scheduler with presentation backpressure
//!
//! The presentation device and the raw event stream are reached only
//! through the [`scheduler::Presenter`] and [`scheduler::EventSource`]
//! seams, so the whole loop can be driven by a scripted frontend in tests.
//!
//! ## Example
//!
//! ```
//! use synapta_core::cell::CellState;
//! use synapta_core::engine::Simulation;
//!
//! let mut sim = Simulation::new(5, 5);
//! sim.grid_mut().set(2, 2, CellState::Firing);
//! sim.step();
//! assert_eq!(sim.grid().get(2, 2), CellState::Refractory);
//! ```

/// Cell states and the fixed transition table
pub mod cell;
/// Double-buffered generation engine
pub mod engine;
/// Tagged events drained by the scheduler
pub mod event;
/// Fixed-size toroidal grid of cell states
pub mod grid;
/// Grid mutations driven by external input
pub mod input;
/// Structured logging setup
pub mod logging;
/// The frame scheduler and its presentation/event seams
pub mod scheduler;

pub use cell::CellState;
pub use engine::Simulation;
pub use event::{Command, Event};
pub use grid::StateGrid;
pub use scheduler::{EventSource, Presenter, Scheduler};
