use std::sync::mpsc;
use std::time::Duration;

use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::info;

use crate::api::{Endpoints, FetchEvent, Fetcher, LibraryClient};
use crate::app::App;
use crate::audio::AudioPlayer;
use crate::config;

mod event_loop;
pub mod logging;
mod settings;

pub use settings::load_settings;

#[cfg(test)]
mod tests;

/// Wire the client, audio output and app together and run the UI until
/// the user quits.
pub fn run(settings: &config::Settings) -> anyhow::Result<()> {
    let endpoints = Endpoints::new(&settings.server.url, &settings.server.script_name)?;
    info!(base = %endpoints.base(), "using sound library");

    let timeout = settings.server.timeout_secs.map(Duration::from_secs);
    let client = LibraryClient::new(endpoints.clone(), timeout)?;

    let audio_player = AudioPlayer::new(client.clone(), settings.playback.repeat);
    let (fetch_tx, fetch_rx) = mpsc::channel::<FetchEvent>();
    let fetcher = Fetcher::new(client, fetch_tx);

    let mut app = App::new(endpoints, settings.playback.repeat);
    event_loop::dispatch(app.load_libraries(), &fetcher, &audio_player);

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result = event_loop::run(
        &mut terminal,
        settings,
        &mut app,
        &audio_player,
        &fetcher,
        &fetch_rx,
    );

    let restored = restore_terminal(&mut terminal);
    audio_player.quit();

    run_result.and(restored)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>) -> anyhow::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
