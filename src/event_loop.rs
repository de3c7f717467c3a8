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

use std::io::Write;

use crate::{call_if_true,
            FunctionComponent,
            KeyPress,
            KeyPressReader,
            SelectError,
            DEVELOPMENT_MODE};

/// What the key press handler wants the event loop to do next.
#[derive(Debug)]
pub enum EventLoopResult<T> {
    /// Keep reading. The frame is repainted even if the state didn't change.
    Continue,
    ExitWithResult(T),
    ExitWithError(SelectError),
}

/// Paint the component, then read key presses one at a time, handing each one to
/// `on_keypress` and repainting after each one, until it asks to exit.
///
/// Everything runs on the caller's thread, so each key press is fully handled (state
/// mutated, frame written and flushed) before the next one is read.
///
/// The cursor is hidden for the duration of the loop, and shown again on every exit
/// path, including read and write failures. Raw mode is the caller's job, see
/// [`crate::RawModeGuard`].
///
/// # Errors
///
/// - [`SelectError::Interrupted`] if the reader was cancelled.
/// - [`SelectError::Eof`] if the reader's input stream closed.
/// - Whatever [`EventLoopResult::ExitWithError`] `on_keypress` returned.
/// - [`SelectError::Io`] if reading or writing failed.
pub fn enter_event_loop<W, S, T>(
    state: &mut S,
    function_component: &mut impl FunctionComponent<W, S>,
    key_press_reader: &mut impl KeyPressReader,
    on_keypress: impl Fn(&mut S, KeyPress) -> EventLoopResult<T>,
) -> Result<T, SelectError>
where
    W: Write,
{
    let result = run_loop(state, function_component, key_press_reader, on_keypress);

    // Perform cleanup. The first error wins, but every step is attempted.
    let repainted = match &result {
        Ok(_) => function_component.render_on_accept(state),
        Err(_) => function_component.render_on_abort(state),
    };
    let cursor_shown = function_component.show_cursor();

    call_if_true!(DEVELOPMENT_MODE, {
        tracing::debug!(
            "exit event loop: is_ok: {}, repainted: {repainted:?}, cursor_shown: {cursor_shown:?}",
            result.is_ok()
        );
    });

    let it = result?;
    repainted?;
    cursor_shown?;
    Ok(it)
}

fn run_loop<W, S, T>(
    state: &mut S,
    function_component: &mut impl FunctionComponent<W, S>,
    key_press_reader: &mut impl KeyPressReader,
    on_keypress: impl Fn(&mut S, KeyPress) -> EventLoopResult<T>,
) -> Result<T, SelectError>
where
    W: Write,
{
    function_component.hide_cursor()?;

    // Only required for the first time to make room below the cursor.
    function_component.allocate_viewport_height_space(state)?;
    function_component.render(state)?;

    loop {
        let key_press = key_press_reader
            .read_key_press()
            .map_err(SelectError::from_read_error)?;

        match on_keypress(state, key_press) {
            EventLoopResult::Continue => function_component.render(state)?,
            EventLoopResult::ExitWithResult(it) => return Ok(it),
            EventLoopResult::ExitWithError(err) => return Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::{self, Result};

    use super::*;
    use crate::{assert_eq2,
                test_utils::{TestStringWriter, TestVecKeyPressReader}};

    /// Counts up on every `Char`, and paints the count.
    struct CounterComponent {
        write: TestStringWriter,
        render_count: usize,
    }

    impl FunctionComponent<TestStringWriter, usize> for CounterComponent {
        fn get_write(&mut self) -> &mut TestStringWriter { &mut self.write }

        fn calculate_viewport_height(&self, _state: &usize) -> u16 { 1 }

        fn render(&mut self, state: &usize) -> Result<()> {
            self.render_count += 1;
            write!(self.write, "[{state}]")
        }

        fn render_on_accept(&mut self, state: &usize) -> Result<()> {
            write!(self.write, "<done {state}>")
        }
    }

    fn on_keypress(state: &mut usize, key_press: KeyPress) -> EventLoopResult<usize> {
        match key_press {
            KeyPress::Char(_) => {
                *state += 1;
                EventLoopResult::Continue
            }
            KeyPress::Enter => EventLoopResult::ExitWithResult(*state),
            KeyPress::CtrlC => EventLoopResult::ExitWithError(SelectError::Interrupted),
            _ => EventLoopResult::Continue,
        }
    }

    fn new_component() -> CounterComponent {
        CounterComponent {
            write: TestStringWriter::new(),
            render_count: 0,
        }
    }

    #[test]
    fn renders_once_up_front_and_once_per_key_press() {
        let mut state = 0;
        let mut component = new_component();
        let mut reader = TestVecKeyPressReader::new([KeyPress::Noop])
            .then_type("ab")
            .then(KeyPress::Up)
            .then(KeyPress::Enter);

        let it = enter_event_loop(&mut state, &mut component, &mut reader, on_keypress);

        assert_eq2!(it.unwrap(), 2);
        assert_eq2!(component.render_count, 5);
        let output = component.write.get_buffer();
        assert!(output.starts_with("\x1b[?25l\n[0][0]"));
        assert!(output.ends_with("[1][2][2]<done 2>\x1b[?25h"));
    }

    #[test]
    fn handler_error_shows_cursor() {
        let mut state = 0;
        let mut component = new_component();
        let mut reader = TestVecKeyPressReader::new([KeyPress::CtrlC]);

        let it = enter_event_loop(&mut state, &mut component, &mut reader, on_keypress);

        assert!(matches!(it, Err(SelectError::Interrupted)));
        assert!(component.write.get_buffer().ends_with("[0]\r\n\x1b[?25h"));
    }

    #[test]
    fn read_errors_become_terminal_states() {
        let mut state = 0;
        let mut component = new_component();
        let mut reader = TestVecKeyPressReader::default();
        let it = enter_event_loop(&mut state, &mut component, &mut reader, on_keypress);
        assert!(matches!(it, Err(SelectError::Eof)));
        assert!(component.write.get_buffer().ends_with("\x1b[?25h"));

        let mut component = new_component();
        let mut reader = TestVecKeyPressReader::new([KeyPress::Char('x')])
            .then_error(io::ErrorKind::Interrupted);
        let it = enter_event_loop(&mut state, &mut component, &mut reader, on_keypress);
        assert!(matches!(it, Err(SelectError::Interrupted)));
        assert!(component.write.get_buffer().ends_with("\x1b[?25h"));

        let mut component = new_component();
        let mut reader =
            TestVecKeyPressReader::default().then_error(io::ErrorKind::PermissionDenied);
        let it = enter_event_loop(&mut state, &mut component, &mut reader, on_keypress);
        assert!(matches!(it, Err(SelectError::Io(_))));
    }
}
