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

use std::{fmt::{Debug, Formatter},
          io::{stdout, Write}};

use crate::{call_if_true,
            enter_event_loop,
            CancelHandle,
            CrosstermKeyPressReader,
            EventLoopResult,
            KeyPress,
            KeyPressReader,
            PromptComponent,
            PromptState,
            RawModeGuard,
            SelectError,
            StyleSheet,
            ValidateFn,
            DEVELOPMENT_MODE};

/// Single line free text input, with optional validation after every key press.
pub struct Prompt {
    pub label: String,
    pub validate: Option<ValidateFn>,
    pub style: StyleSheet,
    cancel_handle: CancelHandle,
}

impl Debug for Prompt {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Prompt")
            .field("label", &self.label)
            .field("validate", &self.validate.as_ref().map(|_| "Fn"))
            .field("style", &self.style)
            .finish_non_exhaustive()
    }
}

impl Prompt {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            validate: None,
            style: StyleSheet::default(),
            cancel_handle: CancelHandle::new(),
        }
    }

    /// Return `Err(message)` from `validate` to reject the text. The message is shown
    /// next to the text until it becomes valid.
    #[must_use]
    pub fn with_validate(
        mut self,
        validate: impl Fn(&str) -> Result<(), String> + 'static,
    ) -> Self {
        self.validate = Some(Box::new(validate));
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

    #[must_use]
    pub fn cancel_handle(&self) -> CancelHandle { self.cancel_handle.clone() }

    /// Block until the user enters valid text, or cancels.
    ///
    /// # Errors
    ///
    /// - [`SelectError::TerminalSetup`] if the terminal can't be put into raw mode.
    /// - [`SelectError::Interrupted`] on <kbd>Ctrl+C</kbd> or [`Prompt::cancel_handle`].
    /// - [`SelectError::Eof`] on <kbd>Ctrl+D</kbd> with nothing typed.
    /// - [`SelectError::Io`] if the terminal can't be read or written.
    pub fn run(&self) -> Result<String, SelectError> {
        let _raw_mode = RawModeGuard::try_new()?;
        let mut reader = CrosstermKeyPressReader::new(self.cancel_handle());
        self.run_with(&mut stdout(), &mut reader)
    }

    /// Same as [`Prompt::run`], but with the given output and input. The caller is
    /// responsible for raw mode.
    ///
    /// # Errors
    ///
    /// See [`Prompt::run`].
    pub fn run_with(
        &self,
        writer: &mut impl Write,
        reader: &mut impl KeyPressReader,
    ) -> Result<String, SelectError> {
        run_prompt(&self.label, self.validate.as_ref(), self.style, writer, reader)
    }
}

pub(crate) fn run_prompt(
    label: &str,
    validate: Option<&ValidateFn>,
    style: StyleSheet,
    writer: &mut impl Write,
    reader: &mut impl KeyPressReader,
) -> Result<String, SelectError> {
    let mut state = PromptState::new(label, validate);

    let mut function_component = PromptComponent {
        write: writer,
        style,
    };

    enter_event_loop(
        &mut state,
        &mut function_component,
        reader,
        keypress_handler,
    )
}

fn keypress_handler(
    state: &mut PromptState<'_>,
    key_press: KeyPress,
) -> EventLoopResult<String> {
    call_if_true!(DEVELOPMENT_MODE, {
        tracing::debug!("prompt {key_press:?}: {:?}", state.line);
    });

    match key_press {
        KeyPress::Char(ch) => {
            state.line.push(ch);
            state.validate();
            EventLoopResult::Continue
        }

        KeyPress::Backspace => {
            state.line.pop();
            state.validate();
            EventLoopResult::Continue
        }

        KeyPress::Enter => match state.validate() {
            true => EventLoopResult::ExitWithResult(state.line.clone()),
            false => EventLoopResult::Continue,
        },

        KeyPress::CtrlC => EventLoopResult::ExitWithError(SelectError::Interrupted),

        KeyPress::CtrlD => match state.line.is_empty() {
            true => EventLoopResult::ExitWithError(SelectError::Eof),
            false => EventLoopResult::Continue,
        },

        KeyPress::Up | KeyPress::Down | KeyPress::Noop => EventLoopResult::Continue,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_eq2,
                test_utils::{TestStringWriter, TestVecKeyPressReader}};

    fn non_empty(it: &str) -> Result<(), String> {
        match it.trim().is_empty() {
            true => Err("Can't be empty".to_string()),
            false => Ok(()),
        }
    }

    #[test]
    fn typed_text_is_returned() {
        let prompt = Prompt::new("Name");
        let mut writer = TestStringWriter::new();
        let mut reader = TestVecKeyPressReader::default()
            .then_type("fob")
            .then(KeyPress::Backspace)
            .then_type("o")
            .then(KeyPress::Enter);

        let it = prompt.run_with(&mut writer, &mut reader);

        assert_eq2!(it.unwrap(), "foo");
        let output = writer.get_buffer_strip_ansi();
        assert!(output.contains("? Name: fo"));
        assert!(output.ends_with("\r✔ Name: foo\r\n"));
        assert!(writer.get_buffer().ends_with("\x1b[?25h"));
    }

    #[test]
    fn enter_is_ignored_while_invalid() {
        let prompt = Prompt::new("Name").with_validate(non_empty);
        let mut writer = TestStringWriter::new();
        let mut reader = TestVecKeyPressReader::new([KeyPress::Enter])
            .then_type(" ")
            .then(KeyPress::Enter)
            .then_type("x")
            .then(KeyPress::Enter);

        let it = prompt.run_with(&mut writer, &mut reader);

        assert_eq2!(it.unwrap(), " x");
        let output = writer.get_buffer_strip_ansi();
        assert!(output.contains("✗ Name:    Can't be empty"));
    }

    #[test]
    fn ctrl_d_only_ends_an_empty_line() {
        let prompt = Prompt::new("Name");

        let mut reader = TestVecKeyPressReader::default()
            .then_type("a")
            .then(KeyPress::CtrlD)
            .then(KeyPress::Enter);
        let it = prompt.run_with(&mut TestStringWriter::new(), &mut reader);
        assert_eq2!(it.unwrap(), "a");

        let mut reader = TestVecKeyPressReader::new([KeyPress::CtrlD]);
        let it = prompt.run_with(&mut TestStringWriter::new(), &mut reader);
        assert!(matches!(it, Err(SelectError::Eof)));
    }

    #[test]
    fn ctrl_c_pressed() {
        let prompt = Prompt::new("Name");
        let mut writer = TestStringWriter::new();
        let mut reader = TestVecKeyPressReader::default()
            .then_type("abc")
            .then(KeyPress::CtrlC);

        let it = prompt.run_with(&mut writer, &mut reader);

        assert!(matches!(it, Err(SelectError::Interrupted)));
        assert!(!writer.get_buffer_strip_ansi().contains('✔'));
        assert!(writer.get_buffer().ends_with("\r\n\x1b[?25h"));
    }

    #[test]
    fn ignored_keys_repaint_unchanged_line() {
        let prompt = Prompt::new("Name");
        let mut writer = TestStringWriter::new();
        let mut reader = TestVecKeyPressReader::new([KeyPress::Backspace, KeyPress::Up])
            .then_type("z")
            .then(KeyPress::Enter);

        let it = prompt.run_with(&mut writer, &mut reader);

        assert_eq2!(it.unwrap(), "z");
        // The first render, then one per key press before Enter.
        let output = writer.get_buffer_strip_ansi();
        assert_eq2!(output.matches("? Name:").count(), 4);
        assert_eq2!(output.matches("? Name: z").count(), 1);
    }
}
