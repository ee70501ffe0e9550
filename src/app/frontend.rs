use std::collections::VecDeque;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event;
use ratatui::layout::Rect;

use synapta_core::event::Event;
use synapta_core::grid::StateGrid;
use synapta_core::scheduler::{EventSource, Presenter};
use synapta_tui::renderer::GridWidget;
use synapta_tui::Tui;

use crate::app::input;

/// Couples the scheduler to the terminal: presents frames through the
/// [`Tui`] and feeds decoded terminal events back as the event source.
pub struct TuiFrontend<'a> {
    tui: &'a mut Tui,
    /// Internally generated events (presentation completions) waiting for
    /// the next drain pass.
    pending: VecDeque<Event>,
    /// Viewport of the most recent draw, for pointer mapping.
    grid_area: Rect,
    frame_count: u64,
    last_fps_update: Instant,
}

impl<'a> TuiFrontend<'a> {
    pub fn new(tui: &'a mut Tui) -> Self {
        Self {
            tui,
            pending: VecDeque::new(),
            grid_area: Rect::default(),
            frame_count: 0,
            last_fps_update: Instant::now(),
        }
    }
}

impl Presenter for TuiFrontend<'_> {
    fn present(&mut self, grid: &StateGrid) -> Result<()> {
        self.tui.terminal.draw(|f| {
            let area = f.area();
            self.grid_area = GridWidget::inner_area(area);
            f.render_widget(GridWidget::new(grid), area);
        })?;

        self.frame_count += 1;
        if self.last_fps_update.elapsed() >= Duration::from_secs(1) {
            tracing::debug!(fps = self.frame_count, "frames presented");
            self.frame_count = 0;
            self.last_fps_update = Instant::now();
        }

        // The crossterm backend finishes reading the buffer inside `draw`,
        // so completion is already pending for the next drain pass.
        self.pending.push_back(Event::PresentationComplete);
        Ok(())
    }
}

impl EventSource for TuiFrontend<'_> {
    fn poll_event(&mut self) -> Result<Option<Event>> {
        if let Some(event) = self.pending.pop_front() {
            return Ok(Some(event));
        }
        // 1 ms poll: bounded, so the drain loop never blocks on a quiet
        // terminal for longer than one slice.
        while event::poll(Duration::from_millis(1))? {
            let raw = event::read()?;
            if let Some(event) = input::decode_event(&raw, self.grid_area) {
                return Ok(Some(event));
            }
        }
        Ok(None)
    }
}
