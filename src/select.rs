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

use std::io::{stdout, Write};

use serde::Serialize;

use crate::{call_if_true,
            enter_event_loop,
            CancelHandle,
            CrosstermKeyPressReader,
            EventLoopResult,
            KeyPress,
            KeyPressReader,
            RawModeGuard,
            SelectComponent,
            SelectError,
            SelectState,
            StyleSheet,
            Viewport,
            DEFAULT_VIEWPORT_HEIGHT,
            DEVELOPMENT_MODE};

/// The item the user accepted, and its index in the list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Selected {
    pub index: usize,
    pub value: String,
}

/// A list for selecting a single item.
///
/// ```no_run
/// use r3bl_select::Select;
///
/// let select = Select::new("Pick a color", ["red", "green", "blue"]);
/// match select.run() {
///     Ok(it) => println!("{} ({})", it.value, it.index),
///     Err(err) => eprintln!("{err}"),
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Select {
    /// Displayed on the header line, followed by `: `.
    pub label: String,
    pub items: Vec<String>,
    /// Most rows to show at once. Defaults to [`DEFAULT_VIEWPORT_HEIGHT`].
    pub max_height: usize,
    pub style: StyleSheet,
    cancel_handle: CancelHandle,
}

impl Select {
    pub fn new(
        label: impl Into<String>,
        items: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            label: label.into(),
            items: items.into_iter().map(Into::into).collect(),
            max_height: DEFAULT_VIEWPORT_HEIGHT,
            style: StyleSheet::default(),
            cancel_handle: CancelHandle::new(),
        }
    }

    #[must_use]
    pub fn with_max_height(mut self, max_height: usize) -> Self {
        self.max_height = max_height;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: StyleSheet) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_cancel_handle(mut self, cancel_handle: CancelHandle) -> Self {
        self.cancel_handle = cancel_handle;
        self
    }

    /// Use this from another thread to cancel [`Select::run`], which then returns
    /// [`SelectError::Interrupted`]. The handle is reset when the next run starts.
    #[must_use]
    pub fn cancel_handle(&self) -> CancelHandle { self.cancel_handle.clone() }

    /// Show the list on stdout and block until the user accepts an item or cancels.
    ///
    /// # Errors
    ///
    /// - [`SelectError::EmptyList`] if there are no items.
    /// - [`SelectError::TerminalSetup`] if the terminal can't be put into raw mode.
    /// - [`SelectError::Interrupted`] on <kbd>Ctrl+C</kbd> or [`Select::cancel_handle`].
    /// - [`SelectError::Eof`] on <kbd>Ctrl+D</kbd>.
    /// - [`SelectError::Io`] if the terminal can't be read or written.
    pub fn run(&self) -> Result<Selected, SelectError> {
        if self.items.is_empty() {
            return Err(SelectError::EmptyList);
        }
        let _raw_mode = RawModeGuard::try_new()?;
        let mut reader = CrosstermKeyPressReader::new(self.cancel_handle());
        self.run_with(&mut stdout(), &mut reader)
    }

    /// Same as [`Select::run`], but with the given output and input. The caller is
    /// responsible for raw mode.
    ///
    /// # Errors
    ///
    /// See [`Select::run`].
    pub fn run_with(
        &self,
        writer: &mut impl Write,
        reader: &mut impl KeyPressReader,
    ) -> Result<Selected, SelectError> {
        self.run_from(0, ' ', writer, reader)
    }

    /// Run with the selection starting at `starting`, and `top_glyph` as the page marker
    /// of row 0.
    pub(crate) fn run_from(
        &self,
        starting: usize,
        top_glyph: char,
        writer: &mut impl Write,
        reader: &mut impl KeyPressReader,
    ) -> Result<Selected, SelectError> {
        let viewport = Viewport::new(self.items.len(), self.max_height, starting)
            .ok_or(SelectError::EmptyList)?;

        let mut state = SelectState {
            label: &self.label,
            items: &self.items,
            viewport,
            top_glyph,
        };

        let mut function_component = SelectComponent {
            write: writer,
            style: self.style,
        };

        enter_event_loop(
            &mut state,
            &mut function_component,
            reader,
            keypress_handler,
        )
    }
}

/// Show a list on stdout and block until the user accepts an item or cancels.
///
/// # Errors
///
/// See [`Select::run`].
pub fn select_from_list(
    label: impl Into<String>,
    items: impl IntoIterator<Item = impl Into<String>>,
) -> Result<Selected, SelectError> {
    Select::new(label, items).run()
}

fn keypress_handler(
    state: &mut SelectState<'_>,
    key_press: KeyPress,
) -> EventLoopResult<Selected> {
    call_if_true!(DEVELOPMENT_MODE, {
        tracing::debug!("*before* {key_press:?}: {:?}", state.viewport);
    });

    let return_it = match key_press {
        KeyPress::Down => {
            state.viewport.advance();
            EventLoopResult::Continue
        }

        KeyPress::Up => {
            state.viewport.retreat();
            EventLoopResult::Continue
        }

        KeyPress::Enter => EventLoopResult::ExitWithResult(Selected {
            index: state.viewport.selected(),
            value: state.selected_item().to_string(),
        }),

        KeyPress::CtrlC => EventLoopResult::ExitWithError(SelectError::Interrupted),

        KeyPress::CtrlD => EventLoopResult::ExitWithError(SelectError::Eof),

        // This list never accepts free text, so the frame is repainted as is.
        KeyPress::Char(_) | KeyPress::Backspace | KeyPress::Noop => {
            EventLoopResult::Continue
        }
    };

    call_if_true!(DEVELOPMENT_MODE, {
        tracing::debug!("*after* {key_press:?}: {:?}", state.viewport);
    });

    return_it
}
