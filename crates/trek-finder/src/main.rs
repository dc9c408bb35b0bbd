use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        event::{DisableMouseCapture, EnableMouseCapture},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    Terminal,
};
use search_palette::{KeyValueStore, MemoryStore};
use search_palette_config::{AppConfig, FileStore};
use std::io;

mod app;
mod debounce;
mod input;
mod logger;
mod page;
mod views;

use app::App;

fn main() -> anyhow::Result<()> {
    // Logging is optional, the app runs without it
    let log_file = logger::init();

    match &log_file {
        Ok(path) => log::debug!("Logging to {}", path.display()),
        Err(e) => eprintln!("Logging disabled: {:#}", e),
    }
    log::info!("Starting trek-finder");

    let config = AppConfig::load();
    let mut app = App::new(&config, open_storage());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main event loop
    let result = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        log::error!("Event loop failed: {:#}", err);
    }

    log::info!("Exiting trek-finder");
    result
}

/// Persist history in the data directory, or keep it in memory if that fails
fn open_storage() -> Box<dyn KeyValueStore> {
    match FileStore::open_default() {
        Ok(store) => {
            log::info!("Storing recent history in {}", store.dir().display());
            Box::new(store)
        }
        Err(e) => {
            log::warn!("Recent history will not persist: {:#}", e);
            Box::new(MemoryStore::new())
        }
    }
}
