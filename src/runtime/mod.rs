use anyhow::Context;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::App;
use crate::audio::{PlaybackEngine, RodioBackend};
use crate::editor::DialogPicker;
use crate::library::Library;

mod event_loop;
mod logging;
mod settings;
mod startup;

#[cfg(test)]
mod tests;

pub fn run() -> anyhow::Result<()> {
    let settings = settings::load_settings();
    if let Err(e) = logging::init(&settings) {
        eprintln!("reprise: {e:#}; continuing without a log file");
    }

    let library = Library::new(settings.library.clone());
    let file = startup::playlist_file(&settings);
    let store = startup::load_store(&file, &library)?;
    let picker = DialogPicker::new(settings.library.extensions.clone())
        .starting_in(library.root().to_path_buf());

    let backend = RodioBackend::open_default().context("failed to open the audio output")?;
    let engine = PlaybackEngine::new(backend, library, &store, settings.audio.initial_volume);
    let mut app = App::new(&settings, store, engine, Box::new(file), Box::new(picker));
    app.start();

    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result = event_loop::run(&mut terminal, &settings, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    tracing::info!("shutting down");
    run_result
}
