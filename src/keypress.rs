/*
 *   Copyright (c) 2026 R3BL LLC
 *   All rights reserved.
 *
 *   Licensed under the Apache License, Version 2.0 (the "License");
 *   you may not use this file except in compliance with the License.
 *   You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 *   Unless required by applicable law or agreed to in writing, software
 *   distributed under the License is distributed on an "AS IS" BASIS,
 *   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *   See the License for the specific language governing permissions and
 *   limitations under the License.
 */

use std::{io,
          sync::{atomic::{AtomicBool, Ordering},
                 Arc},
          time::Duration};

use crossterm::event::{poll, read, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::{call_if_true, DEVELOPMENT_MODE};

/// How often the blocking read wakes up to check the [`CancelHandle`].
pub const CANCEL_POLL_INTERVAL: Duration = Duration::from_millis(50);

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum KeyPress {
    Up,
    Down,
    Enter,
    Backspace,
    Char(char),
    CtrlC,
    CtrlD,
    Noop,
}

/// Source of key presses. It blocks until a key is pressed.
///
/// Errors have a meaning:
/// - [`io::ErrorKind::Interrupted`] means the read was cancelled.
/// - [`io::ErrorKind::UnexpectedEof`] means the input stream is closed.
pub trait KeyPressReader {
    /// # Errors
    ///
    /// See the trait docs for the error kinds that have a special meaning.
    fn read_key_press(&mut self) -> io::Result<KeyPress>;
}

/// Cancel a blocking [`KeyPressReader::read_key_press`] from another thread (eg: a
/// signal handler or a timer). Clones share the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancelHandle {
    is_cancelled: Arc<AtomicBool>,
}

impl CancelHandle {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    pub fn cancel(&self) { self.is_cancelled.store(true, Ordering::SeqCst); }

    /// Clear a previous [`CancelHandle::cancel`], so the handle can be used again.
    pub fn reset(&self) { self.is_cancelled.store(false, Ordering::SeqCst); }

    #[must_use]
    pub fn is_cancelled(&self) -> bool { self.is_cancelled.load(Ordering::SeqCst) }
}

/// Keep calling `poll_once` until it produces a key press, checking `cancel_handle`
/// before each call. `poll_once` should return `Ok(None)` after waiting for a short while
/// without input.
///
/// # Errors
///
/// Returns [`io::ErrorKind::Interrupted`] once `cancel_handle` is cancelled, or whatever
/// error `poll_once` returns.
pub fn read_until_cancelled(
    cancel_handle: &CancelHandle,
    mut poll_once: impl FnMut() -> io::Result<Option<KeyPress>>,
) -> io::Result<KeyPress> {
    loop {
        if cancel_handle.is_cancelled() {
            return Err(io::Error::new(io::ErrorKind::Interrupted, "Interrupt"));
        }
        if let Some(key_press) = poll_once()? {
            return Ok(key_press);
        }
    }
}

/// Reads key presses from the terminal using [`crossterm`]. The terminal must be in raw
/// mode, see [`crate::RawModeGuard`].
///
/// Each `run()` creates a new reader, which resets its [`CancelHandle`], so a widget
/// that was cancelled once can be run again.
#[derive(Debug, Clone, Default)]
pub struct CrosstermKeyPressReader {
    pub cancel_handle: CancelHandle,
}

impl CrosstermKeyPressReader {
    #[must_use]
    pub fn new(cancel_handle: CancelHandle) -> Self {
        cancel_handle.reset();
        Self { cancel_handle }
    }
}

impl KeyPressReader for CrosstermKeyPressReader {
    fn read_key_press(&mut self) -> io::Result<KeyPress> {
        read_until_cancelled(&self.cancel_handle, || {
            if !poll(CANCEL_POLL_INTERVAL)? {
                return Ok(None);
            }
            let event = read()?;
            call_if_true!(DEVELOPMENT_MODE, {
                tracing::debug!("event: {event:?}");
            });
            Ok(Some(convert_event(event)))
        })
    }
}

/// [`KeyEvent::kind`] is only set to something other than [`KeyEventKind::Press`] on
/// Windows, or on Unix when keyboard enhancement flags are pushed. Release and repeat
/// events are dropped so that each key is handled once.
#[must_use]
pub fn convert_event(event: Event) -> KeyPress {
    match event {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) => convert_key(code, modifiers),
        _ => KeyPress::Noop,
    }
}

fn convert_key(code: KeyCode, modifiers: KeyModifiers) -> KeyPress {
    if modifiers.contains(KeyModifiers::CONTROL) {
        return match code {
            KeyCode::Char('c') => KeyPress::CtrlC,
            KeyCode::Char('d') => KeyPress::CtrlD,
            KeyCode::Char('n') => KeyPress::Down,
            KeyCode::Char('p') => KeyPress::Up,
            _ => KeyPress::Noop,
        };
    }

    match code {
        KeyCode::Up => KeyPress::Up,
        KeyCode::Down => KeyPress::Down,
        KeyCode::Enter => KeyPress::Enter,
        KeyCode::Backspace => KeyPress::Backspace,
        KeyCode::Char(ch) => KeyPress::Char(ch),
        _ => KeyPress::Noop,
    }
}
