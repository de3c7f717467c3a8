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

//! Stateless formatting helpers. Each one takes some text (or a count) and returns the
//! text wrapped in ANSI escape sequences. Nothing here writes to the terminal.

use crossterm::{cursor::{MoveDown, MoveUp},
                style::Stylize,
                terminal::{Clear, ClearType},
                Command};

/// Render a [crossterm] command into its ANSI escape sequence.
fn ansi(command: impl Command) -> String {
    let mut acc = String::new();
    // Writing into a `String` can't fail.
    _ = command.write_ansi(&mut acc);
    acc
}

#[must_use]
pub fn bold(text: &str) -> String { text.bold().to_string() }

#[must_use]
pub fn underlined(text: &str) -> String { text.underlined().to_string() }

#[must_use]
pub fn faint(text: &str) -> String { text.dim().to_string() }

/// Move the cursor up `count` lines. Empty for 0, since most terminals treat `CSI 0 A`
/// as a move by 1.
#[must_use]
pub fn up_line(count: u16) -> String {
    match count {
        0 => String::new(),
        _ => ansi(MoveUp(count)),
    }
}

/// Move the cursor down `count` lines without scrolling. Empty for 0.
#[must_use]
pub fn down_line(count: u16) -> String {
    match count {
        0 => String::new(),
        _ => ansi(MoveDown(count)),
    }
}

#[must_use]
pub fn clear_line() -> String { ansi(Clear(ClearType::CurrentLine)) }

/// The glyphs and icons used to draw the list and the prompt.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct StyleSheet {
    /// Shown in front of the selected item.
    pub selected_glyph: char,
    /// Page marker on the top row when there are more items above the window.
    pub more_above_glyph: char,
    /// Page marker on the bottom row when there are more items below the window.
    pub more_below_glyph: char,
    /// Page marker for the synthetic "create new" row of [`crate::SelectWithAdd`].
    pub add_glyph: char,
    pub icon_initial: &'static str,
    pub icon_good: &'static str,
    pub icon_bad: &'static str,
}

impl Default for StyleSheet {
    fn default() -> Self {
        Self {
            selected_glyph: '☞',
            more_above_glyph: '↑',
            more_below_glyph: '↓',
            add_glyph: '+',
            icon_initial: "?",
            icon_good: "✔",
            icon_bad: "✗",
        }
    }
}

impl StyleSheet {
    #[must_use]
    pub fn styled_icon_initial(&self) -> String { self.icon_initial.blue().to_string() }

    #[must_use]
    pub fn styled_icon_good(&self) -> String { self.icon_good.green().to_string() }

    #[must_use]
    pub fn styled_icon_bad(&self) -> String { self.icon_bad.red().to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_eq2, test_utils::strip_ansi};

    #[test]
    fn cursor_sequences() {
        assert_eq2!(up_line(3), "\x1b[3A");
        assert_eq2!(down_line(1), "\x1b[1B");
        assert_eq2!(up_line(0), "");
        assert_eq2!(down_line(0), "");
        assert_eq2!(clear_line(), "\x1b[2K");
    }

    #[test]
    fn text_styles_keep_the_text() {
        for it in [bold("foo"), underlined("foo"), faint("foo")] {
            assert!(it.contains('\x1b'));
            assert_eq2!(strip_ansi(&it), "foo");
        }
    }

    #[test]
    fn default_icons() {
        let style = StyleSheet::default();
        assert_eq2!(strip_ansi(&style.styled_icon_initial()), "?");
        assert_eq2!(strip_ansi(&style.styled_icon_good()), "✔");
        assert_eq2!(strip_ansi(&style.styled_icon_bad()), "✗");
    }
}
