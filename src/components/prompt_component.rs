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

use std::io::{Result, Write};

use crossterm::{queue, style::Print};

use crate::{bold, clear_line, faint, FunctionComponent, PromptState, StyleSheet};

/// `? label: text`, with the icon swapped for the "bad" one (and the message appended)
/// while the text fails validation.
#[must_use]
pub fn render_prompt_line(state: &PromptState<'_>, style: &StyleSheet) -> String {
    let (icon, message) = match &state.validation_error {
        Some(message) => (style.styled_icon_bad(), format!("  {}", faint(message))),
        None => (style.styled_icon_initial(), String::new()),
    };
    format!(
        "\r{}{icon} {}{}{message}",
        clear_line(),
        bold(&format!("{}: ", state.label)),
        state.line
    )
}

#[must_use]
pub fn render_prompt_confirmation(state: &PromptState<'_>, style: &StyleSheet) -> String {
    format!(
        "\r{}{} {}: {}\r\n",
        clear_line(),
        style.styled_icon_good(),
        state.label,
        faint(&state.line)
    )
}

#[derive(Debug)]
pub struct PromptComponent<W: Write> {
    pub write: W,
    pub style: StyleSheet,
}

impl<'a, W: Write> FunctionComponent<W, PromptState<'a>> for PromptComponent<W> {
    fn get_write(&mut self) -> &mut W { &mut self.write }

    /// Only the header line is used.
    fn calculate_viewport_height(&self, _state: &PromptState<'a>) -> u16 { 0 }

    fn render(&mut self, state: &PromptState<'a>) -> Result<()> {
        let line = render_prompt_line(state, &self.style);
        let writer = self.get_write();
        queue!(writer, Print(line))?;
        writer.flush()
    }

    fn render_on_accept(&mut self, state: &PromptState<'a>) -> Result<()> {
        let confirmation = render_prompt_confirmation(state, &self.style);
        let writer = self.get_write();
        queue!(writer, Print(confirmation))?;
        writer.flush()
    }
}
