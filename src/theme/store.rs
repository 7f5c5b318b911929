//! Observable theme store
//!
//! [`ThemeStore`] owns the user's [`ThemeMode`], the last known host
//! [`Appearance`] and the list of subscribers. Reads and writes of the
//! persisted choice run on a dedicated worker thread that owns the
//! [`PreferenceStore`]; the UI thread never waits on storage.
//!
//! The worker processes commands strictly in submission order, so once it
//! has drained its queue the persisted value equals the last mode passed to
//! [`ThemeStore::set_mode`]. The in-memory mode is always last-write-wins
//! regardless of how far behind the worker is.

use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::{self, JoinHandle};

use tracing::{debug, info, warn};

use crate::storage::PreferenceStore;

use super::mode::{Appearance, ThemeMode};
use super::palette::ColorPalette;

/// Preference key holding the theme literal
pub const THEME_KEY: &str = "theme";

/// Sent to subscribers whenever the mode or the effective appearance changes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeEvent {
    pub mode: ThemeMode,
    pub effective: Appearance,
}

enum Command {
    Load,
    Save(ThemeMode),
    Flush(Sender<()>),
}

enum Reply {
    Loaded(Option<ThemeMode>),
}

/// Resolves and persists the display theme
pub struct ThemeStore {
    mode: ThemeMode,
    system: Appearance,
    /// Set once the user picks a mode; a late load must not override it
    user_selected: bool,
    pending_loads: usize,
    commands: Option<Sender<Command>>,
    replies: Receiver<Reply>,
    subscribers: Vec<Sender<ThemeEvent>>,
    worker: Option<JoinHandle<()>>,
}

impl ThemeStore {
    /// Create a store in `System` mode and start its persistence worker
    pub fn new<S>(store: S, system: Appearance) -> Self
    where
        S: PreferenceStore + 'static,
    {
        let (command_tx, command_rx) = mpsc::channel();
        let (reply_tx, reply_rx) = mpsc::channel();

        let worker = thread::Builder::new()
            .name("cravox-preferences".into())
            .spawn(move || run_worker(Box::new(store), command_rx, reply_tx));

        let worker = match worker {
            Ok(handle) => Some(handle),
            Err(e) => {
                // Without a worker every command fails to send and is logged
                warn!(error = %e, "failed to start preference worker");
                None
            }
        };

        Self {
            mode: ThemeMode::System,
            system,
            user_selected: false,
            pending_loads: 0,
            commands: Some(command_tx),
            replies: reply_rx,
            subscribers: Vec::new(),
            worker,
        }
    }

    /// Start loading the persisted choice in the background
    ///
    /// The loaded value is applied by a later [`ThemeStore::pump`].
    pub fn initialize(&mut self) {
        if self.send(Command::Load) {
            self.pending_loads += 1;
        }
    }

    /// Apply any results the worker has produced; returns true if the mode changed
    pub fn pump(&mut self) -> bool {
        let mut changed = false;
        while let Ok(reply) = self.replies.try_recv() {
            match reply {
                Reply::Loaded(loaded) => {
                    self.pending_loads = self.pending_loads.saturating_sub(1);
                    changed |= self.apply_loaded(loaded);
                }
            }
        }
        changed
    }

    /// Block until the worker has processed everything queued so far, then pump
    pub fn wait_idle(&mut self) {
        let (done_tx, done_rx) = mpsc::channel();
        if self.send(Command::Flush(done_tx)) {
            let _ = done_rx.recv();
        }
        self.pump();
    }

    /// Whether an initial load is still in flight
    pub fn is_loading(&self) -> bool {
        self.pending_loads > 0
    }

    /// The user's choice
    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// The last reported host appearance
    pub fn system_appearance(&self) -> Appearance {
        self.system
    }

    /// The concrete appearance to render, recomputed on every call
    pub fn effective(&self) -> Appearance {
        self.mode.resolve(self.system)
    }

    /// The palette for [`ThemeStore::effective`]
    pub fn palette(&self) -> &'static ColorPalette {
        ColorPalette::for_appearance(self.effective())
    }

    /// Change the mode now and persist it in the background
    ///
    /// A failed write is logged by the worker and leaves the in-memory
    /// mode untouched.
    pub fn set_mode(&mut self, mode: ThemeMode) {
        self.user_selected = true;
        let changed = self.mode != mode;
        self.mode = mode;
        if changed {
            info!(mode = %mode, effective = %self.effective(), "theme mode changed");
            self.notify();
        }
        self.send(Command::Save(mode));
    }

    /// Record a new host appearance
    pub fn set_system_appearance(&mut self, appearance: Appearance) {
        let before = self.effective();
        self.system = appearance;
        if self.effective() != before {
            debug!(system = %appearance, "system appearance changed");
            self.notify();
        }
    }

    /// Receive a [`ThemeEvent`] for every subsequent change
    pub fn subscribe(&mut self) -> Receiver<ThemeEvent> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(tx);
        rx
    }

    fn apply_loaded(&mut self, loaded: Option<ThemeMode>) -> bool {
        let Some(mode) = loaded else {
            return false;
        };
        if self.user_selected {
            debug!(stored = %mode, current = %self.mode, "ignoring stored theme, user already chose");
            return false;
        }
        if mode == self.mode {
            return false;
        }
        self.mode = mode;
        info!(mode = %mode, "restored theme mode");
        self.notify();
        true
    }

    fn notify(&mut self) {
        let event = ThemeEvent {
            mode: self.mode,
            effective: self.effective(),
        };
        self.subscribers.retain(|tx| tx.send(event).is_ok());
    }

    fn send(&self, command: Command) -> bool {
        let sent = self
            .commands
            .as_ref()
            .map(|tx| tx.send(command).is_ok())
            .unwrap_or(false);
        if !sent {
            warn!("preference worker is not running");
        }
        sent
    }
}

impl Drop for ThemeStore {
    fn drop(&mut self) {
        // Closing the channel lets the worker finish queued writes and exit
        self.commands.take();
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

fn run_worker(mut store: Box<dyn PreferenceStore>, commands: Receiver<Command>, replies: Sender<Reply>) {
    while let Ok(command) = commands.recv() {
        match command {
            Command::Load => {
                let loaded = load_mode(store.as_ref());
                if replies.send(Reply::Loaded(loaded)).is_err() {
                    return;
                }
            }
            Command::Save(mode) => match store.set(THEME_KEY, mode.as_str()) {
                Ok(()) => debug!(mode = %mode, "theme preference saved"),
                Err(e) => warn!(mode = %mode, error = %e, "failed to save theme preference"),
            },
            Command::Flush(done) => {
                let _ = done.send(());
            }
        }
    }
}

fn load_mode(store: &dyn PreferenceStore) -> Option<ThemeMode> {
    match store.get(THEME_KEY) {
        Ok(Some(raw)) => {
            let mode = ThemeMode::from_literal(&raw);
            if mode.is_none() {
                debug!(value = %raw, "ignoring unrecognised stored theme");
            }
            mode
        }
        Ok(None) => None,
        Err(e) => {
            warn!(error = %e, "failed to load theme preference");
            None
        }
    }
}
