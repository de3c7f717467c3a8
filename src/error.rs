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

use std::io;

use miette::Diagnostic;

/// Errors returned from [`crate::Select::run`], [`crate::SelectWithAdd::run`], and
/// [`crate::Prompt::run`]. None of them are retried. The terminal cursor is restored
/// before any of them are returned.
#[derive(Debug, thiserror::Error, Diagnostic)]
pub enum SelectError {
    /// The user pressed <kbd>Ctrl+C</kbd>, or the [`crate::CancelHandle`] was used.
    #[error("^C")]
    #[diagnostic(code(r3bl_select::interrupted))]
    Interrupted,

    /// The user pressed <kbd>Ctrl+D</kbd>, or the input source was closed.
    #[error("^D")]
    #[diagnostic(code(r3bl_select::eof))]
    Eof,

    /// [`crate::Select`] was given no items to choose from.
    #[error("There are no items to select from")]
    #[diagnostic(
        code(r3bl_select::empty_list),
        help("Pass at least one item, or use SelectWithAdd to let the user create one")
    )]
    EmptyList,

    /// The terminal could not be put into raw mode. The read loop was never entered.
    #[error("Failed to set up the terminal")]
    #[diagnostic(
        code(r3bl_select::terminal_setup),
        help("Make sure stdin and stdout are connected to an interactive terminal")
    )]
    TerminalSetup(#[source] io::Error),

    /// Reading a key press or writing to the terminal failed.
    #[error(transparent)]
    #[diagnostic(code(r3bl_select::io))]
    Io(#[from] io::Error),
}

impl SelectError {
    /// Map an error from a [`crate::KeyPressReader`] into a terminal state.
    /// [`io::ErrorKind::Interrupted`] is what the reader returns when it is cancelled,
    /// and [`io::ErrorKind::UnexpectedEof`] when its input stream is closed.
    #[must_use]
    pub fn from_read_error(error: io::Error) -> Self {
        match error.kind() {
            io::ErrorKind::Interrupted => SelectError::Interrupted,
            io::ErrorKind::UnexpectedEof => SelectError::Eof,
            _ => SelectError::Io(error),
        }
    }
}
