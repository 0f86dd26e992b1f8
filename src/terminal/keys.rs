//! Raw keyboard capture through crossterm.

use super::KeySource;
use crate::error::GameError;
use crate::game::QUIT_KEY;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Keeps the terminal in raw mode (no echo, no line buffering) while alive.
pub struct RawModeGuard {
    _private: (),
}

impl RawModeGuard {
    /// Switches the terminal to raw mode.
    #[instrument]
    pub fn enable() -> Result<Self, GameError> {
        enable_raw_mode()
            .map_err(|e| GameError::input(format!("Failed to enable raw mode: {}", e)))?;
        debug!("Raw mode enabled");
        Ok(Self { _private: () })
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Err(e) = disable_raw_mode() {
            warn!(error = %e, "Failed to restore terminal mode");
        } else {
            debug!("Raw mode disabled");
        }
    }
}

/// Reads single key presses from the terminal.
#[derive(Debug, Clone)]
pub struct CrosstermKeys {
    poll_interval: Duration,
}

impl CrosstermKeys {
    /// Creates a key source that gives up waiting after `poll_interval`.
    #[instrument]
    pub fn new(poll_interval: Duration) -> Self {
        Self { poll_interval }
    }
}

impl Default for CrosstermKeys {
    fn default() -> Self {
        Self::new(Duration::from_millis(100))
    }
}

impl KeySource for CrosstermKeys {
    fn next_key(&mut self) -> Result<Option<char>, GameError> {
        let ready = event::poll(self.poll_interval)
            .map_err(|e| GameError::input(format!("Failed to poll keyboard: {}", e)))?;
        if !ready {
            return Ok(None);
        }

        let event =
            event::read().map_err(|e| GameError::input(format!("Failed to read key: {}", e)))?;
        let key = match event {
            // Raw mode swallows SIGINT, so Ctrl-C has to quit by hand.
            Event::Key(KeyEvent {
                code: KeyCode::Char('c'),
                modifiers,
                kind: KeyEventKind::Press,
                ..
            }) if modifiers.contains(KeyModifiers::CONTROL) => Some(QUIT_KEY),
            Event::Key(KeyEvent {
                code: KeyCode::Char(c),
                kind: KeyEventKind::Press,
                ..
            }) => Some(c),
            _ => None,
        };
        Ok(key)
    }
}
