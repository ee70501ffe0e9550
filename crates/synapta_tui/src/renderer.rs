use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::style::Color;
use ratatui::widgets::{Block, Borders, Widget};

use synapta_core::cell::CellState;
use synapta_core::grid::StateGrid;

/// Display color for each cell state.
///
/// Presentation-only lookup; the simulation never consults colors. The
/// palette matches the automaton's classic rendering: quiescent black,
/// firing white, refractory blue.
pub fn color_for_state(state: CellState) -> Color {
    match state {
        CellState::Ready => Color::Rgb(0, 0, 0),
        CellState::Firing => Color::Rgb(255, 255, 255),
        CellState::Refractory => Color::Rgb(0, 0, 255),
    }
}

/// Renders the grid inside a bordered viewport using half-block glyphs,
/// packing two grid rows into every terminal row.
pub struct GridWidget<'a> {
    grid: &'a StateGrid,
}

impl<'a> GridWidget<'a> {
    pub fn new(grid: &'a StateGrid) -> Self {
        Self { grid }
    }

    /// The cell viewport inside the border, as used by `render`. Pointer
    /// mapping must use the same rect the last draw used.
    pub fn inner_area(area: Rect) -> Rect {
        Block::default().borders(Borders::ALL).inner(area)
    }

    /// Maps a terminal position to grid coordinates relative to `inner`.
    ///
    /// Each terminal row covers two grid rows; the upper one is chosen.
    /// The result may lie outside the grid; validation stays with the
    /// input adapter.
    pub fn screen_to_grid(column: u16, row: u16, inner: Rect) -> (i32, i32) {
        let x = column as i32 - inner.x as i32;
        let y = (row as i32 - inner.y as i32) * 2;
        (x, y)
    }
}

impl Widget for GridWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::ALL).title(" Brian's Brain ");
        let inner = block.inner(area);
        block.render(area, buf);

        // One terminal row holds two grid rows: the glyph's foreground is
        // the upper cell, the background the lower.
        let cols = (self.grid.width()).min(inner.width);
        let rows = (self.grid.height().div_ceil(2)).min(inner.height);

        for ty in 0..rows {
            for tx in 0..cols {
                let gx = tx as i32;
                let gy = ty as i32 * 2;
                let upper = color_for_state(self.grid.get(gx, gy));
                let lower = if gy + 1 < self.grid.height() as i32 {
                    color_for_state(self.grid.get(gx, gy + 1))
                } else {
                    Color::Reset
                };
                if let Some(cell) = buf.cell_mut(Position::new(inner.x + tx, inner.y + ty)) {
                    cell.set_char('▀').set_fg(upper).set_bg(lower);
                }
            }
        }
    }
}
