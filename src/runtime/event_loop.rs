use std::sync::mpsc::Receiver;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use tracing::{debug, warn};

use crate::api::{FetchEvent, Fetcher};
use crate::app::{App, Effect};
use crate::audio::{AudioEvent, AudioPlayer};
use crate::config;
use crate::ui;

/// Main terminal event loop: applies background completions, draws, and
/// handles input. Returns `Ok(())` when the user quits.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    app: &mut App,
    audio_player: &AudioPlayer,
    fetcher: &Fetcher,
    fetch_rx: &Receiver<FetchEvent>,
) -> anyhow::Result<()> {
    let started = Instant::now();
    let step_ms = u128::from(settings.ui.marquee_step_ms.max(1));

    loop {
        while let Ok(event) = fetch_rx.try_recv() {
            apply_fetch(app, event);
        }

        while let Some(event) = audio_player.try_event() {
            match event {
                AudioEvent::Progress {
                    source,
                    position,
                    duration,
                } => app.on_progress(&source, position, duration),
                AudioEvent::Ended { source } => app.on_track_ended(&source),
            }
        }

        let size = terminal.size()?;
        let area = Rect::new(0, 0, size.width, size.height);
        app.refresh_long_names(ui::label_widths(area, app.notice.is_some()));

        let tick = (started.elapsed().as_millis() / step_ms) as u64;
        terminal.draw(|f| ui::draw(f, app, &settings.ui, &settings.controls, tick))?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match handle_key_event(key, settings, app) {
                    KeyOutcome::Quit => break,
                    KeyOutcome::Effect(Some(effect)) => dispatch(effect, fetcher, audio_player),
                    KeyOutcome::Effect(None) => {}
                }
            }
        }
    }

    Ok(())
}

enum KeyOutcome {
    Effect(Option<Effect>),
    Quit,
}

fn apply_fetch(app: &mut App, event: FetchEvent) {
    match event {
        FetchEvent::Directories(result) => app.directories_loaded(result),
        FetchEvent::Files { directory, result } => app.files_loaded(directory, result),
    }
}

/// Perform an effect requested by the app.
pub(super) fn dispatch(effect: Effect, fetcher: &Fetcher, audio_player: &AudioPlayer) {
    debug!(?effect, "dispatch");
    match effect {
        Effect::FetchDirectories => fetcher.directories(),
        Effect::FetchFiles(directory) => fetcher.files(directory),
        Effect::Audio(cmd) => {
            if let Err(e) = audio_player.send(cmd) {
                warn!(error = %e, "audio thread is gone");
            }
        }
    }
}

fn handle_key_event(key: KeyEvent, settings: &config::Settings, app: &mut App) -> KeyOutcome {
    let step = settings.controls.seek_step;
    let effect = match key.code {
        KeyCode::Char('q') => return KeyOutcome::Quit,
        KeyCode::Tab => {
            app.toggle_focus();
            None
        }
        KeyCode::Esc => {
            app.dismiss_notice();
            None
        }
        KeyCode::Char('j') | KeyCode::Down => {
            app.cursor_down();
            None
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.cursor_up();
            None
        }
        KeyCode::Enter => app.activate(),
        KeyCode::Char('p') | KeyCode::Char(' ') => app.toggle_play_pause(),
        KeyCode::Char('h') => app.previous(),
        KeyCode::Char('l') => app.next(),
        KeyCode::Char('H') => app.seek_by(-step),
        KeyCode::Char('L') => app.seek_by(step),
        KeyCode::Char(c @ '0'..='9') => {
            let tenth = f64::from(c.to_digit(10).unwrap_or(0));
            app.seek_audio(tenth * 10.0)
        }
        KeyCode::Char('r') => Some(app.repeat_toggle()),
        KeyCode::Char('R') => Some(app.load_libraries()),
        _ => None,
    };
    KeyOutcome::Effect(effect)
}
