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

//! # r3bl-select
//!
//! This crate adds a small, keyboard driven, single select list to any CLI app. It
//! renders inline (no alternate screen) so the rest of your terminal output stays where
//! it is. There are two flavors:
//!
//! 1. [`Select`] shows a scrollable window of at most 5 rows (configurable) over a list
//!    of items. The user moves with <kbd>Up</kbd> / <kbd>Down</kbd> (or
//!    <kbd>Ctrl+P</kbd> / <kbd>Ctrl+N</kbd>) and picks with <kbd>Enter</kbd>.
//! 1. [`SelectWithAdd`] puts a synthetic "create new" row above the items. If the user
//!    picks it, a free text [`Prompt`] takes over so they can type in a new value.
//!
//! <kbd>Ctrl+C</kbd> cancels with [`SelectError::Interrupted`], and <kbd>Ctrl+D</kbd>
//! ends the input with [`SelectError::Eof`]. Another thread can also cancel a running
//! widget using its [`CancelHandle`].
//!
//! ## How to use it as a library?
//!
//! ```no_run
//! use r3bl_select::{select_from_list, Chosen, SelectWithAdd};
//!
//! fn main() -> miette::Result<()> {
//!     let selected = select_from_list("Pick a fruit", ["apple", "banana", "cherry"])?;
//!     println!("{} at index {}", selected.value, selected.index);
//!
//!     let chosen = SelectWithAdd::new("Pick a project", ["api", "web"], "New project")
//!         .with_validate(|it| match it.is_empty() {
//!             true => Err("Name can't be empty".to_string()),
//!             false => Ok(()),
//!         })
//!         .run()?;
//!     match chosen {
//!         Chosen::Existing(it) => println!("Existing: {}", it.value),
//!         Chosen::Added(it) => println!("New: {it}"),
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## How to use it as a binary?
//!
//! The binary target is called `pick`.
//!
//! ```shell
//! pick select --label "Pick a branch" main develop feature/foo
//! git branch --format='%(refname:short)' | pick add --add-label "New branch" --non-empty
//! ```
//!
//! Pass `--json` to get the result as JSON, and `--enable-logging` to write a
//! `log.txt` file that you can watch with `tail -f log.txt`.

// https://github.com/rust-lang/rust-clippy
// https://rust-lang.github.io/rust-clippy/master/index.html
#![warn(clippy::all)]
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]
#![warn(rust_2018_idioms)]

// Attach sources.
pub mod components;
pub mod error;
pub mod event_loop;
pub mod function_component;
pub mod keypress;
pub mod log;
pub mod macros;
pub mod prompt;
pub mod select;
pub mod select_with_add;
pub mod state;
pub mod term;
pub mod viewport;

#[cfg(test)]
pub mod test_utils;

// Re-export.
pub use components::*;
pub use error::*;
pub use event_loop::*;
pub use function_component::*;
pub use keypress::*;
pub use log::*;
pub use prompt::*;
pub use select::*;
pub use select_with_add::*;
pub use state::*;
pub use term::*;
pub use viewport::*;

/// Enable debug logging of key presses and viewport state. This only produces output
/// if logging has been initialized, see [`try_initialize_logging_global`].
pub const DEVELOPMENT_MODE: bool = cfg!(debug_assertions);
