//! Translates validated external input into grid mutations.
//!
//! This is the only writer besides the engine: pointer positions seed
//! single firing cells, stamp commands seed fixed constellations around
//! the grid center, and reset clears the board. Nothing here ever invokes
//! the engine.

use crate::cell::CellState;
use crate::event::Command;
use crate::grid::StateGrid;

/// 2x2 block at center. Seeds an expanding diamond wave.
const BLOCK: [(i32, i32); 4] = [(0, 0), (1, 0), (0, 1), (1, 1)];

/// Two vertical pairs flanking the center block columns. Oscillates as a
/// horizontal generator.
const HORIZONTAL_PAIR: [(i32, i32); 4] = [(-1, 0), (2, 0), (-1, 1), (2, 1)];

/// Two horizontal pairs above and below the center block rows.
const VERTICAL_PAIR: [(i32, i32); 4] = [(0, -1), (1, -1), (0, 2), (1, 2)];

/// Applies a pointer position in grid coordinates.
///
/// Positions outside `0..width` x `0..height` come straight from the
/// device boundary and are discarded without mutation.
pub fn pointer_move(grid: &mut StateGrid, x: i32, y: i32) {
    if x >= 0 && x < grid.width() as i32 && y >= 0 && y < grid.height() as i32 {
        grid.set(x, y, CellState::Firing);
    }
}

/// Applies a command to the grid, immediately and regardless of scheduler
/// phase. `Quit` is the scheduler's to handle and mutates nothing here.
pub fn apply_command(grid: &mut StateGrid, command: Command) {
    match command {
        Command::Reset => {
            tracing::info!("grid reset");
            grid.reset();
        }
        Command::StampBlock => stamp(grid, &BLOCK),
        Command::StampHorizontalPair => stamp(grid, &HORIZONTAL_PAIR),
        Command::StampVerticalPair => stamp(grid, &VERTICAL_PAIR),
        Command::Quit => {}
    }
}

/// Sets each offset cell around the grid center to `Firing`, leaving the
/// rest of the grid untouched. Wrap-around addressing keeps this total
/// even on grids smaller than the constellation.
fn stamp(grid: &mut StateGrid, offsets: &[(i32, i32)]) {
    let cx = grid.width() as i32 / 2;
    let cy = grid.height() as i32 / 2;
    for &(dx, dy) in offsets {
        grid.set(cx + dx, cy + dy, CellState::Firing);
    }
}
