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

use crossterm::{cursor::{Hide, Show},
                queue,
                style::Print};

use crate::{clear_line, up_line};

/// A component that paints itself inline, starting at the line the cursor is on when the
/// event loop starts. The header takes up that line, and the viewport takes up
/// [`FunctionComponent::calculate_viewport_height`] lines below it. Between renders the
/// cursor rests on the last line of the viewport (or the header line if the viewport
/// height is 0).
pub trait FunctionComponent<W: Write, S> {
    fn get_write(&mut self) -> &mut W;

    /// Does not include the header row.
    fn calculate_viewport_height(&self, state: &S) -> u16;

    /// Repaint the header and the viewport in place.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the terminal fails.
    fn render(&mut self, state: &S) -> Result<()>;

    /// Replace the header and viewport with a single line that shows what was accepted,
    /// and leave the cursor at the start of the next line.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the terminal fails.
    fn render_on_accept(&mut self, state: &S) -> Result<()>;

    /// Leave the last frame on screen and move to the next line.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the terminal fails.
    fn render_on_abort(&mut self, _state: &S) -> Result<()> {
        let writer = self.get_write();
        queue!(writer, Print("\r\n"))?;
        writer.flush()
    }

    /// Allocate space. This is required so that the commands to move the cursor up and
    /// down in [`FunctionComponent::render`] will work, even at the bottom of the screen.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the terminal fails.
    fn allocate_viewport_height_space(&mut self, state: &S) -> Result<()> {
        let viewport_height = self.calculate_viewport_height(state);
        let writer = self.get_write();
        queue!(writer, Print("\n".repeat(usize::from(viewport_height))))?;
        writer.flush()
    }

    /// Clear every viewport line, from the bottom up, and leave the cursor at the start
    /// of the header line.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the terminal fails.
    fn clear_viewport(&mut self, state: &S) -> Result<()> {
        let viewport_height = self.calculate_viewport_height(state);
        let writer = self.get_write();
        for _ in 0..viewport_height {
            queue!(writer, Print(clear_line()), Print(up_line(1)))?;
        }
        queue!(writer, Print("\r"), Print(clear_line()))?;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns an error if writing to the terminal fails.
    fn hide_cursor(&mut self) -> Result<()> {
        let writer = self.get_write();
        queue!(writer, Hide)?;
        writer.flush()
    }

    /// # Errors
    ///
    /// Returns an error if writing to the terminal fails.
    fn show_cursor(&mut self) -> Result<()> {
        let writer = self.get_write();
        queue!(writer, Show)?;
        writer.flush()
    }
}
