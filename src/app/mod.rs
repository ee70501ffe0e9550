pub mod frontend;
pub mod input;
pub mod state;

pub use state::App;

use anyhow::Result;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use synapta_tui::Tui;

use crate::app::frontend::TuiFrontend;

impl App {
    /// Runs the scheduler against the terminal until quit, a close
    /// request, or ctrl-c.
    pub async fn run(&mut self, tui: &mut Tui) -> Result<()> {
        // ctrl-c may arrive outside the raw-mode key stream (e.g. sent to
        // the process group); treat it like a window-close request.
        let shutdown = Arc::new(AtomicBool::new(false));
        let shutdown_clone = shutdown.clone();
        tokio::spawn(async move {
            tokio::signal::ctrl_c().await.ok();
            tracing::info!("ctrl-c received, initiating shutdown");
            shutdown_clone.store(true, Ordering::SeqCst);
        });

        let mut frontend = TuiFrontend::new(tui);
        self.scheduler.run(&mut frontend, &shutdown)
    }
}
