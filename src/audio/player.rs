use std::sync::Mutex;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::JoinHandle;

use crate::api::LibraryClient;

use super::thread::spawn_audio_thread;
use super::types::{AudioCmd, AudioEvent, Inbox};

/// Handle to the single audio output.
pub struct AudioPlayer {
    tx: Sender<Inbox>,
    events: Receiver<AudioEvent>,
    join: Mutex<Option<JoinHandle<()>>>,
}

impl AudioPlayer {
    pub fn new(client: LibraryClient, repeat: bool) -> Self {
        let (tx, rx) = mpsc::channel::<Inbox>();
        let (event_tx, events) = mpsc::channel::<AudioEvent>();

        let audio_handle = spawn_audio_thread(client, rx, tx.clone(), event_tx, repeat);

        Self {
            tx,
            events,
            join: Mutex::new(Some(audio_handle)),
        }
    }

    /// Fails only once the audio thread has exited.
    pub fn send(&self, cmd: AudioCmd) -> Result<(), mpsc::SendError<()>> {
        self.tx.send(Inbox::Cmd(cmd)).map_err(|_| mpsc::SendError(()))
    }

    /// Next pending event from the audio thread, if any.
    pub fn try_event(&self) -> Option<AudioEvent> {
        self.events.try_recv().ok()
    }

    /// Ask the audio thread to stop and wait for it.
    ///
    /// Downloads run on their own threads, so the audio thread always
    /// answers `Quit` promptly.
    pub fn quit(&self) {
        let _ = self.send(AudioCmd::Quit);

        if let Ok(mut j) = self.join.lock() {
            if let Some(h) = j.take() {
                let _ = h.join();
            }
        }
    }
}
