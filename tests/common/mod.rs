//! Scripted keyboard and recording screen for driving matches in tests.

#![allow(dead_code)]

use king_of_the_hill::{BoardSnapshot, GameError, KeySource, Renderer};
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Plays back keys, each after its own delay, then reports "no key" forever.
pub struct ScriptedKeys {
    script: VecDeque<(Duration, char)>,
    idle: Duration,
}

impl ScriptedKeys {
    /// Empty script.
    pub fn new() -> Self {
        Self {
            script: VecDeque::new(),
            idle: Duration::from_millis(5),
        }
    }

    /// Types every character of `keys` back to back.
    pub fn keys(mut self, keys: &str) -> Self {
        self.script
            .extend(keys.chars().map(|c| (Duration::from_millis(1), c)));
        self
    }

    /// Waits `millis` before the next key.
    pub fn pause(mut self, millis: u64) -> Self {
        self.script.push_back((Duration::from_millis(millis), '\0'));
        self
    }
}

impl KeySource for ScriptedKeys {
    fn next_key(&mut self) -> Result<Option<char>, GameError> {
        match self.script.pop_front() {
            Some((delay, key)) => {
                thread::sleep(delay);
                Ok(if key == '\0' { None } else { Some(key) })
            }
            None => {
                thread::sleep(self.idle);
                Ok(None)
            }
        }
    }
}

/// Key source whose terminal has gone away.
pub struct BrokenKeys;

impl KeySource for BrokenKeys {
    fn next_key(&mut self) -> Result<Option<char>, GameError> {
        Err(GameError::input("stdin closed"))
    }
}

/// One call the engine made on the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Drawn {
    Clear,
    Board(BoardSnapshot),
    Announce(String),
}

/// Renderer that remembers every call.
#[derive(Clone, Default)]
pub struct RecordingRenderer {
    log: Arc<Mutex<Vec<Drawn>>>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log(&self) -> Vec<Drawn> {
        self.log.lock().clone()
    }

    pub fn announcements(&self) -> Vec<String> {
        self.log()
            .into_iter()
            .filter_map(|d| match d {
                Drawn::Announce(message) => Some(message),
                _ => None,
            })
            .collect()
    }

    pub fn boards(&self) -> Vec<BoardSnapshot> {
        self.log()
            .into_iter()
            .filter_map(|d| match d {
                Drawn::Board(snapshot) => Some(snapshot),
                _ => None,
            })
            .collect()
    }
}

impl Renderer for RecordingRenderer {
    fn clear_screen(&mut self) -> Result<(), GameError> {
        self.log.lock().push(Drawn::Clear);
        Ok(())
    }

    fn draw_board(&mut self, snapshot: &BoardSnapshot) -> Result<(), GameError> {
        self.log.lock().push(Drawn::Board(snapshot.clone()));
        Ok(())
    }

    fn announce(&mut self, message: &str) -> Result<(), GameError> {
        self.log.lock().push(Drawn::Announce(message.to_string()));
        Ok(())
    }
}

/// Runs `f` on another thread and fails the test if it takes longer than
/// `limit` (a hung worker would otherwise hang the whole test run).
pub fn within<T: Send + 'static>(limit: Duration, f: impl FnOnce() -> T + Send + 'static) -> T {
    let (tx, rx) = std::sync::mpsc::channel();
    thread::spawn(move || {
        let _ = tx.send(f());
    });
    rx.recv_timeout(limit)
        .expect("operation did not finish in time (deadlock?)")
}
