//! Keyboard control for terminal runs

use super::animator::{Pacer, StopHandle};
use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal;
use std::time::{Duration, Instant};

/// Source of terminal events
pub trait EventSource {
    /// Wait up to `timeout` for the next event; `None` on timeout
    fn next_event(&mut self, timeout: Duration) -> Result<Option<Event>>;
}

/// Reads events from the process terminal
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalEvents;

impl EventSource for TerminalEvents {
    fn next_event(&mut self, timeout: Duration) -> Result<Option<Event>> {
        if !event::poll(timeout).context("Failed to poll terminal events")? {
            return Ok(None);
        }
        event::read().map(Some).context("Failed to read terminal event")
    }
}

/// Waits between ticks while listening for a quit key.
///
/// `q`, `Esc` and `Ctrl-C` request a stop through the shared handle; the
/// driver sees it before the next tick.
pub struct KeyPacer<S: EventSource> {
    events: S,
    stop: StopHandle,
}

impl<S: EventSource> KeyPacer<S> {
    pub fn new(events: S, stop: StopHandle) -> Self {
        Self { events, stop }
    }
}

impl<S: EventSource> Pacer for KeyPacer<S> {
    fn wait(&mut self, interval: Duration) -> Result<()> {
        let deadline = Instant::now() + interval;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match self.events.next_event(remaining)? {
                Some(Event::Key(key)) if is_quit(&key) => {
                    log::debug!("quit key {:?}", key.code);
                    self.stop.stop();
                    return Ok(());
                }
                Some(_) => continue,
                None => return Ok(()),
            }
        }
    }
}

fn is_quit(key: &KeyEvent) -> bool {
    if key.kind != KeyEventKind::Press {
        return false;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Puts the terminal in raw mode until dropped.
///
/// In raw mode Ctrl-C arrives as a key event instead of a signal, so the run
/// can stop and close its renderer.
pub struct RawMode(());

impl RawMode {
    pub fn enable() -> Result<Self> {
        terminal::enable_raw_mode().context("Failed to enable raw terminal mode")?;
        Ok(Self(()))
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        if let Err(e) = terminal::disable_raw_mode() {
            log::warn!("failed to restore terminal mode: {}", e);
        }
    }
}
