use std::sync::Arc;
use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::thread::JoinHandle;
use std::time::Duration;

use rodio::{OutputStream, OutputStreamBuilder, Sink};
use tracing::{debug, error, warn};

use crate::api::{ApiError, LibraryClient};

use super::download::{DownloadSlot, spawn_download};
use super::sink::{Loaded, TickAction, clamp_position, create_sink, tick_action};
use super::types::{AudioCmd, AudioEvent, Inbox};

const TICK: Duration = Duration::from_millis(200);

/// Everything the audio thread knows about the current source.
struct Output {
    stream: OutputStream,
    client: LibraryClient,
    inbox: Sender<Inbox>,
    downloads: DownloadSlot,
    loaded: Option<Loaded>,
    sink: Option<Sink>,
    paused: bool,
    repeat: bool,
    events: Sender<AudioEvent>,
}

impl Output {
    /// Drop the current source and start downloading `source`.
    fn load(&mut self, source: String, duration_hint: Option<Duration>) {
        if let Some(s) = self.sink.take() {
            s.stop();
        }
        self.loaded = None;
        self.paused = false;

        let generation = self.downloads.begin(source.clone(), duration_hint);
        debug!(%source, generation, "downloading audio");
        spawn_download(self.client.clone(), source, generation, self.inbox.clone());
    }

    fn downloaded(&mut self, generation: u64, result: Result<Arc<[u8]>, ApiError>) {
        let Some((source, duration_hint)) = self.downloads.finish(generation) else {
            debug!(generation, "dropping superseded download");
            return;
        };

        let bytes = match result {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(%source, error = %e, "could not fetch audio");
                return;
            }
        };

        self.loaded = Some(Loaded {
            source,
            bytes,
            duration: duration_hint,
        });
        // A pause that arrived during the download still holds.
        self.restart(self.paused);
    }

    /// Rebuild the sink from the start of the loaded source.
    fn restart(&mut self, keep_paused: bool) {
        let Some(loaded) = self.loaded.as_mut() else {
            return;
        };
        if let Some(s) = self.sink.take() {
            s.stop();
        }

        match create_sink(&self.stream, loaded) {
            Ok((sink, total)) => {
                if total.is_some() {
                    loaded.duration = total;
                }
                if keep_paused {
                    self.paused = true;
                } else {
                    sink.play();
                    self.paused = false;
                }
                self.sink = Some(sink);
                self.report_progress();
            }
            Err(e) => {
                // Unplayable sources are only logged.
                warn!(source = %loaded.source, error = %e, "could not decode audio");
            }
        }
    }

    fn play(&mut self) {
        match self.sink.as_ref() {
            Some(s) if !s.empty() => {
                s.play();
                self.paused = false;
            }
            Some(_) => self.restart(false),
            // Still downloading: start as soon as the bytes arrive.
            None => self.paused = false,
        }
    }

    fn pause(&mut self) {
        if let Some(ref s) = self.sink {
            s.pause();
        }
        self.paused = true;
    }

    fn seek(&mut self, target: Duration) {
        if self.loaded.is_none() {
            return;
        }
        if self.sink.as_ref().is_none_or(|s| s.empty()) {
            self.restart(self.paused);
        }
        let total = self.loaded.as_ref().and_then(|l| l.duration);
        if let Some(ref s) = self.sink {
            if let Err(e) = s.try_seek(clamp_position(target, total)) {
                warn!(error = %e, "seek failed");
            }
        }
        self.report_progress();
    }

    fn report_progress(&self) {
        let (Some(s), Some(loaded)) = (self.sink.as_ref(), self.loaded.as_ref()) else {
            return;
        };
        let _ = self.events.send(AudioEvent::Progress {
            source: loaded.source.clone(),
            position: s.get_pos(),
            duration: loaded.duration,
        });
    }

    /// Called on every idle tick.
    fn tick(&mut self) {
        let drained = self.sink.as_ref().is_some_and(|s| s.empty());
        match tick_action(self.sink.is_some(), self.paused, drained, self.repeat) {
            TickAction::Idle => {}
            TickAction::Report => self.report_progress(),
            TickAction::Restart => {
                debug!("track ended, repeating");
                self.restart(false);
            }
            TickAction::Ended => {
                self.paused = true;
                if let Some(loaded) = self.loaded.as_ref() {
                    let _ = self.events.send(AudioEvent::Ended {
                        source: loaded.source.clone(),
                    });
                }
            }
        }
    }
}

pub(super) fn spawn_audio_thread(
    client: LibraryClient,
    rx: Receiver<Inbox>,
    inbox: Sender<Inbox>,
    events: Sender<AudioEvent>,
    repeat: bool,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let mut stream = match OutputStreamBuilder::open_default_stream() {
            Ok(stream) => stream,
            Err(e) => {
                error!(error = %e, "no audio output device");
                // Keep draining commands so senders never block or fail loudly.
                while let Ok(msg) = rx.recv() {
                    if matches!(msg, Inbox::Cmd(AudioCmd::Quit)) {
                        break;
                    }
                }
                return;
            }
        };
        // rodio logs to stderr when OutputStream is dropped. That's useful in debugging,
        // but noisy for a TUI app.
        stream.log_on_drop(false);

        let mut output = Output {
            stream,
            client,
            inbox,
            downloads: DownloadSlot::default(),
            loaded: None,
            sink: None,
            paused: true,
            repeat,
            events,
        };

        loop {
            match rx.recv_timeout(TICK) {
                Ok(Inbox::Downloaded { generation, result }) => {
                    output.downloaded(generation, result)
                }
                Ok(Inbox::Cmd(cmd)) => match cmd {
                    AudioCmd::Load {
                        source,
                        duration_hint,
                    } => output.load(source, duration_hint),
                    AudioCmd::Play => output.play(),
                    AudioCmd::Pause => output.pause(),
                    AudioCmd::Seek(target) => output.seek(target),
                    AudioCmd::SetRepeat(on) => output.repeat = on,
                    AudioCmd::Quit => {
                        if let Some(ref s) = output.sink {
                            s.stop();
                        }
                        break;
                    }
                },
                Err(RecvTimeoutError::Timeout) => output.tick(),
                Err(RecvTimeoutError::Disconnected) => break,
            }
        }
    })
}
