use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Duration;

use anyhow::{Result, bail};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::message::Key;

/// Input the run loop cares about.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Key(Key),
    /// Terminal resized; only a redraw is needed.
    Redraw,
}

pub trait EventSource {
    /// Block for at most `timeout`. `Ok(None)` means the timeout elapsed.
    fn next_event(&mut self, timeout: Duration) -> Result<Option<InputEvent>>;
}

/// Channel-fed event source. The terminal reader thread is one producer;
/// tests can hand in their own sender.
pub struct EventHandler {
    rx: mpsc::Receiver<InputEvent>,
}

impl EventHandler {
    pub fn from_receiver(rx: mpsc::Receiver<InputEvent>) -> Self {
        Self { rx }
    }

    /// Spawn a thread that reads crossterm events and forwards translated keys.
    pub fn terminal(poll_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            loop {
                if !event::poll(poll_rate).unwrap_or(false) {
                    continue;
                }
                let forwarded = match event::read() {
                    Ok(Event::Key(key)) => match translate_key(key) {
                        Some(key) => tx.send(InputEvent::Key(key)),
                        None => Ok(()),
                    },
                    Ok(Event::Resize(_, _)) => tx.send(InputEvent::Redraw),
                    _ => Ok(()),
                };
                if forwarded.is_err() {
                    return;
                }
            }
        });

        Self { rx }
    }

    /// Wait for any key press, used by the demo screen.
    pub fn wait_for_key(&self) -> Result<()> {
        loop {
            if let InputEvent::Key(_) = self.rx.recv()? {
                return Ok(());
            }
        }
    }
}

impl EventSource for EventHandler {
    fn next_event(&mut self, timeout: Duration) -> Result<Option<InputEvent>> {
        match self.rx.recv_timeout(timeout) {
            Ok(event) => Ok(Some(event)),
            Err(RecvTimeoutError::Timeout) => Ok(None),
            Err(RecvTimeoutError::Disconnected) => bail!("input event source closed"),
        }
    }
}

/// Map a terminal key press onto the session's key vocabulary.
pub fn translate_key(key: KeyEvent) -> Option<Key> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Key::Exit),
            KeyCode::Char('f') => Some(Key::ForceNextPhrase),
            KeyCode::Char('r') => Some(Key::ToggleRepeat),
            KeyCode::Char('i') | KeyCode::Tab => Some(Key::ToggleFingers),
            KeyCode::Char('j') | KeyCode::Enter => Some(Key::Enter),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Esc => Some(Key::Exit),
        KeyCode::Backspace => Some(Key::Backspace),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Tab => Some(Key::ToggleFingers),
        KeyCode::Char(' ') => Some(Key::Space),
        KeyCode::Char(c) if !c.is_control() => Some(Key::Char(c)),
        _ => None,
    }
}
