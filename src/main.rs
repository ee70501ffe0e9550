use anyhow::Result;
use synapta_lib::app::App;
use synapta_tui::Tui;

#[tokio::main]
async fn main() -> Result<()> {
    synapta_core::logging::init();

    let mut tui = Tui::new()?;
    tui.init()?;

    let mut app = App::new();
    let res = app.run(&mut tui).await;

    tui.exit()?;

    if let Err(e) = &res {
        eprintln!("Application error: {e}");
    }
    res
}
