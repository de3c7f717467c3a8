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
use smallvec::SmallVec;

use crate::{bold,
            call_if_true,
            clear_line,
            down_line,
            faint,
            underlined,
            up_line,
            FunctionComponent,
            SelectState,
            StyleSheet,
            Viewport,
            DEFAULT_VIEWPORT_HEIGHT,
            DEVELOPMENT_MODE};

/// Rows of one frame. Inline for the default viewport height.
pub type FrameRows = SmallVec<[String; DEFAULT_VIEWPORT_HEIGHT]>;

/// Page marker for the item at `row_index`. Row 0 always gets `top_glyph`, and the last
/// item never gets a "more below" marker. Row 0 is only visible when the window is at the
/// top, so it never competes with the "more above" marker.
#[must_use]
pub fn page_marker(
    row_index: usize,
    viewport: &Viewport,
    top_glyph: char,
    style: &StyleSheet,
) -> char {
    match row_index {
        0 => top_glyph,
        it if it == viewport.item_count() - 1 => ' ',
        it if it == viewport.start() => style.more_above_glyph,
        it if it == viewport.end() => style.more_below_glyph,
        _ => ' ',
    }
}

/// One line of the list: page marker, selection marker, then the item.
#[must_use]
pub fn render_list_row(row_index: usize, state: &SelectState<'_>, style: &StyleSheet) -> String {
    let page = page_marker(row_index, &state.viewport, state.top_glyph, style);
    let item = &state.items[row_index];
    let (selection, item) = if row_index == state.viewport.selected() {
        (style.selected_glyph, underlined(item))
    } else {
        (' ', item.clone())
    };
    format!("{}\r{page}{selection} {item}", clear_line())
}

#[must_use]
pub fn render_list_rows(state: &SelectState<'_>, style: &StyleSheet) -> FrameRows {
    (state.viewport.start()..=state.viewport.end())
        .map(|row_index| render_list_row(row_index, state, style))
        .collect()
}

/// The whole frame. It starts by moving the cursor from the last row of the previous
/// frame back up to the header line, so each repaint overwrites the last one in place.
#[must_use]
pub fn render_select_frame(state: &SelectState<'_>, style: &StyleSheet) -> String {
    let rows = render_list_rows(state, style);
    let row_count = u16::try_from(rows.len()).unwrap_or(u16::MAX);
    let header = format!(
        "{} {}",
        style.styled_icon_initial(),
        bold(&format!("{}: ", state.label))
    );

    format!(
        "{}\r{}{header}{}{}",
        up_line(row_count),
        clear_line(),
        down_line(1),
        rows.join(down_line(1).as_str())
    )
}

/// The single line that replaces the frame once an item is accepted.
#[must_use]
pub fn render_select_confirmation(state: &SelectState<'_>, style: &StyleSheet) -> String {
    format!(
        "\r{}{} {}: {}\r\n",
        clear_line(),
        style.styled_icon_good(),
        state.label,
        faint(state.selected_item())
    )
}

#[derive(Debug)]
pub struct SelectComponent<W: Write> {
    pub write: W,
    pub style: StyleSheet,
}

impl<'a, W: Write> FunctionComponent<W, SelectState<'a>> for SelectComponent<W> {
    fn get_write(&mut self) -> &mut W { &mut self.write }

    /// There are never more rows than items, see [`Viewport::height`].
    fn calculate_viewport_height(&self, state: &SelectState<'a>) -> u16 {
        u16::try_from(state.viewport.height()).unwrap_or(u16::MAX)
    }

    fn render(&mut self, state: &SelectState<'a>) -> Result<()> {
        call_if_true!(DEVELOPMENT_MODE, {
            tracing::debug!("render()::viewport: {:?}", state.viewport);
        });

        let frame = render_select_frame(state, &self.style);
        let writer = self.get_write();
        queue!(writer, Print(frame))?;
        writer.flush()
    }

    fn render_on_accept(&mut self, state: &SelectState<'a>) -> Result<()> {
        self.clear_viewport(state)?;
        let confirmation = render_select_confirmation(state, &self.style);
        let writer = self.get_write();
        queue!(writer, Print(confirmation))?;
        writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_eq2,
                test_utils::{strip_ansi, TestStringWriter}};

    fn items(count: usize) -> Vec<String> {
        (0..count).map(|it| format!("item {it}")).collect()
    }

    fn create_state<'a>(items: &'a [String], starting: usize, top: char) -> SelectState<'a> {
        SelectState {
            label: "Pick",
            items,
            viewport: Viewport::new(items.len(), DEFAULT_VIEWPORT_HEIGHT, starting)
                .unwrap(),
            top_glyph: top,
        }
    }

    /// Page markers of the visible rows.
    fn markers(state: &SelectState<'_>) -> String {
        (state.viewport.start()..=state.viewport.end())
            .map(|it| {
                page_marker(it, &state.viewport, state.top_glyph, &StyleSheet::default())
            })
            .collect()
    }

    #[test]
    fn page_markers_follow_the_window() {
        let items = items(10);
        let mut state = create_state(&items, 0, ' ');
        assert_eq2!(markers(&state), "    ↓");

        for _ in 0..7 {
            state.viewport.advance();
        }
        assert_eq2!((state.viewport.start(), state.viewport.end()), (3, 7));
        assert_eq2!(markers(&state), "↑   ↓");

        for _ in 0..2 {
            state.viewport.advance();
        }
        assert_eq2!(markers(&state), "↑    ");
    }

    #[test]
    fn page_markers_for_short_list() {
        let items = items(3);
        let state = create_state(&items, 0, ' ');
        assert_eq2!(markers(&state), "   ");
    }

    #[test]
    fn top_glyph_marks_row_zero() {
        let items = items(7);
        let state = create_state(&items, 1, '+');
        assert_eq2!(markers(&state), "+   ↓");
    }

    #[test]
    fn frame_overwrites_previous_frame() {
        let items = items(3);
        let state = create_state(&items, 1, ' ');
        let frame = render_select_frame(&state, &StyleSheet::default());

        assert!(frame.starts_with("\x1b[3A\r\x1b[2K"));
        assert_eq2!(frame.matches("\x1b[1B").count(), 3);
        assert_eq2!(frame.matches("\x1b[2K").count(), 4);

        let lines: Vec<String> = strip_ansi(&frame)
            .split('\r')
            .map(str::to_string)
            .collect();
        assert_eq2!(lines, vec!["", "? Pick: ", "   item 0", " ☞ item 1", "   item 2"]);
    }

    #[test]
    fn selected_row_is_emphasized() {
        let items = items(2);
        let state = create_state(&items, 0, ' ');
        let style = StyleSheet::default();
        assert_eq2!(
            render_list_row(0, &state, &style),
            format!("\x1b[2K\r ☞ {}", underlined("item 0"))
        );
        assert_eq2!(render_list_row(1, &state, &style), "\x1b[2K\r   item 1");
    }

    #[test]
    fn accept_collapses_frame_to_one_line() {
        let items = items(3);
        let mut state = create_state(&items, 0, ' ');
        state.viewport.advance();

        let mut component = SelectComponent {
            write: TestStringWriter::new(),
            style: StyleSheet::default(),
        };
        component.render_on_accept(&state).unwrap();

        let output = component.write.get_buffer();
        assert_eq2!(output.matches("\x1b[1A").count(), 3);
        assert!(output.ends_with("\r\n"));
        assert!(strip_ansi(output).ends_with("✔ Pick: item 1\r\n"));
    }

    #[test]
    fn viewport_height_matches_window() {
        let component = SelectComponent {
            write: TestStringWriter::new(),
            style: StyleSheet::default(),
        };
        let long = items(12);
        assert_eq2!(component.calculate_viewport_height(&create_state(&long, 0, ' ')), 5);
        let short = items(2);
        assert_eq2!(component.calculate_viewport_height(&create_state(&short, 0, ' ')), 2);
    }
}
