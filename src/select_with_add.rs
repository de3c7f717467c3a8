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
          io::{stdout, Write},
          iter::once};

use crossterm::{queue, style::Print};
use serde::Serialize;

use crate::{call_if_true,
            clear_line,
            prompt::run_prompt,
            up_line,
            CancelHandle,
            CrosstermKeyPressReader,
            KeyPressReader,
            RawModeGuard,
            Select,
            SelectError,
            Selected,
            StyleSheet,
            ValidateFn,
            DEFAULT_VIEWPORT_HEIGHT,
            DEVELOPMENT_MODE};

/// Index reported by [`Chosen::index`] when the user typed in a new value.
pub const SELECTED_ADD: isize = -1;

/// Result of [`SelectWithAdd`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Chosen {
    /// One of the given items. The index is into the given items, the add row is not
    /// counted.
    Existing(Selected),
    /// Text typed in after picking the add row.
    Added(String),
}

impl Chosen {
    /// Index of the item, or [`SELECTED_ADD`].
    #[must_use]
    pub fn index(&self) -> isize {
        match self {
            Chosen::Existing(it) => isize::try_from(it.index).unwrap_or(isize::MAX),
            Chosen::Added(_) => SELECTED_ADD,
        }
    }

    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Chosen::Existing(it) => &it.value,
            Chosen::Added(it) => it,
        }
    }
}

/// A [`Select`] with an extra row at the top for adding a new value. Picking that row
/// swaps the list for a free text prompt.
///
/// The list starts with the first real item selected, and the add row is marked with
/// [`StyleSheet::add_glyph`]. If there are no items, only the prompt is shown.
pub struct SelectWithAdd {
    pub label: String,
    pub items: Vec<String>,
    /// Label of the add row, also used as the prompt's label.
    pub add_label: String,
    pub max_height: usize,
    pub style: StyleSheet,
    pub validate: Option<ValidateFn>,
    cancel_handle: CancelHandle,
}

impl Debug for SelectWithAdd {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectWithAdd")
            .field("label", &self.label)
            .field("items", &self.items)
            .field("add_label", &self.add_label)
            .field("max_height", &self.max_height)
            .field("validate", &self.validate.as_ref().map(|_| "Fn"))
            .finish_non_exhaustive()
    }
}

impl SelectWithAdd {
    pub fn new(
        label: impl Into<String>,
        items: impl IntoIterator<Item = impl Into<String>>,
        add_label: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            items: items.into_iter().map(Into::into).collect(),
            add_label: add_label.into(),
            max_height: DEFAULT_VIEWPORT_HEIGHT,
            style: StyleSheet::default(),
            validate: None,
            cancel_handle: CancelHandle::new(),
        }
    }

    /// Validates the text typed in for a new value, see [`crate::Prompt::with_validate`].
    #[must_use]
    pub fn with_validate(
        mut self,
        validate: impl Fn(&str) -> Result<(), String> + 'static,
    ) -> Self {
        self.validate = Some(Box::new(validate));
        self
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

    /// Cancels both the list and the prompt.
    #[must_use]
    pub fn cancel_handle(&self) -> CancelHandle { self.cancel_handle.clone() }

    /// # Errors
    ///
    /// Same as [`Select::run`], except that an empty list is not an error.
    pub fn run(&self) -> Result<Chosen, SelectError> {
        let _raw_mode = RawModeGuard::try_new()?;
        let mut reader = CrosstermKeyPressReader::new(self.cancel_handle());
        self.run_with(&mut stdout(), &mut reader)
    }

    /// Same as [`SelectWithAdd::run`], but with the given output and input. Both the
    /// list and the prompt read from `reader`.
    ///
    /// # Errors
    ///
    /// See [`SelectWithAdd::run`].
    pub fn run_with(
        &self,
        writer: &mut impl Write,
        reader: &mut impl KeyPressReader,
    ) -> Result<Chosen, SelectError> {
        if self.items.is_empty() {
            return self.run_add_prompt(writer, reader);
        }

        let select = Select::new(
            &self.label,
            once(&self.add_label).chain(self.items.iter()),
        )
        .with_max_height(self.max_height)
        .with_style(self.style)
        .with_cancel_handle(self.cancel_handle());

        let selected = select.run_from(1, self.style.add_glyph, writer, reader)?;

        call_if_true!(DEVELOPMENT_MODE, {
            tracing::debug!("select with add: {selected:?}");
        });

        match selected.index {
            0 => {
                // Erase the confirmation line of the list.
                queue!(writer, Print(up_line(1)), Print("\r"), Print(clear_line()))?;
                writer.flush()?;
                self.run_add_prompt(writer, reader)
            }
            index => Ok(Chosen::Existing(Selected {
                index: index - 1,
                value: selected.value,
            })),
        }
    }

    fn run_add_prompt(
        &self,
        writer: &mut impl Write,
        reader: &mut impl KeyPressReader,
    ) -> Result<Chosen, SelectError> {
        run_prompt(
            &self.add_label,
            self.validate.as_ref(),
            self.style,
            writer,
            reader,
        )
        .map(Chosen::Added)
    }
}

/// Show a list with an add row on stdout, and block until the user picks an item, types
/// in a new one, or cancels.
///
/// # Errors
///
/// See [`SelectWithAdd::run`].
pub fn select_from_list_with_add(
    label: impl Into<String>,
    items: impl IntoIterator<Item = impl Into<String>>,
    add_label: impl Into<String>,
    validate: Option<ValidateFn>,
) -> Result<Chosen, SelectError> {
    let mut select = SelectWithAdd::new(label, items, add_label);
    select.validate = validate;
    select.run()
}
