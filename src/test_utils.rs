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

use std::{collections::VecDeque,
          io::{self, Result, Write}};

use crate::{KeyPress, KeyPressReader};

/// Captures everything that is written to it.
#[derive(Debug, Default)]
pub struct TestStringWriter {
    buffer: String,
}

impl TestStringWriter {
    pub fn new() -> Self { Self::default() }

    pub fn get_buffer(&self) -> &str { &self.buffer }

    pub fn get_buffer_strip_ansi(&self) -> String { strip_ansi(&self.buffer) }
}

impl Write for TestStringWriter {
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        match std::str::from_utf8(buf) {
            Ok(value) => {
                self.buffer.push_str(value);
                Ok(buf.len())
            }
            Err(_) => Ok(0),
        }
    }

    fn flush(&mut self) -> Result<()> { Ok(()) }
}

/// Replays a script of key presses (or read errors). Once the script runs out, it behaves
/// like a closed input stream.
#[derive(Debug, Default)]
pub struct TestVecKeyPressReader {
    pub key_press_vec: VecDeque<Result<KeyPress>>,
}

impl TestVecKeyPressReader {
    pub fn new(key_presses: impl IntoIterator<Item = KeyPress>) -> Self {
        Self {
            key_press_vec: key_presses.into_iter().map(Ok).collect(),
        }
    }

    /// Add a read error after the scripted key presses.
    pub fn then_error(mut self, kind: io::ErrorKind) -> Self {
        self.key_press_vec.push_back(Err(io::Error::from(kind)));
        self
    }

    /// Add the characters of `text` as key presses.
    pub fn then_type(mut self, text: &str) -> Self {
        self.key_press_vec
            .extend(text.chars().map(|ch| Ok(KeyPress::Char(ch))));
        self
    }

    pub fn then(mut self, key_press: KeyPress) -> Self {
        self.key_press_vec.push_back(Ok(key_press));
        self
    }
}

impl KeyPressReader for TestVecKeyPressReader {
    fn read_key_press(&mut self) -> Result<KeyPress> {
        self.key_press_vec
            .pop_front()
            .unwrap_or_else(|| Err(io::Error::from(io::ErrorKind::UnexpectedEof)))
    }
}

/// Remove escape sequences, but keep `\r` and `\n`, since they are part of what the
/// widgets paint.
pub fn strip_ansi(text: &str) -> String {
    text.split('\r')
        .map(|line| {
            line.split('\n')
                .map(strip_ansi_escapes::strip_str)
                .collect::<Vec<_>>()
                .join("\n")
        })
        .collect::<Vec<_>>()
        .join("\r")
}

#[test]
fn test_strip_ansi_keeps_line_control() {
    use crossterm::style::Stylize;

    use crate::assert_eq2;

    let text = format!("\x1b[2K\r{} item\r\n", "☞".bold());
    assert_eq2!(strip_ansi(&text), "\r☞ item\r\n");
}

#[test]
fn test_vec_reader_closes_after_script() {
    let mut reader = TestVecKeyPressReader::new([KeyPress::Down]);
    assert_eq!(reader.read_key_press().unwrap(), KeyPress::Down);
    assert_eq!(
        reader.read_key_press().unwrap_err().kind(),
        io::ErrorKind::UnexpectedEof
    );
}
