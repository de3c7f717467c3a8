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

use std::fmt::{Debug, Formatter};

use crate::Viewport;

/// Validates the text typed into a [`crate::Prompt`] after each key press. Return an
/// error message to reject the text.
pub type ValidateFn = Box<dyn Fn(&str) -> Result<(), String>>;

/// Lives for one run of [`crate::Select`]. Only the key press handler mutates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectState<'a> {
    pub label: &'a str,
    pub items: &'a [String],
    pub viewport: Viewport,
    /// Page marker for row 0 of the list.
    pub top_glyph: char,
}

impl SelectState<'_> {
    #[must_use]
    pub fn selected_item(&self) -> &str { &self.items[self.viewport.selected()] }
}

/// Lives for one run of [`crate::Prompt`].
pub struct PromptState<'a> {
    pub label: &'a str,
    pub line: String,
    pub validate: Option<&'a ValidateFn>,
    /// Message from the last failed validation, if any.
    pub validation_error: Option<String>,
}

impl<'a> PromptState<'a> {
    #[must_use]
    pub fn new(label: &'a str, validate: Option<&'a ValidateFn>) -> Self {
        Self {
            label,
            line: String::new(),
            validate,
            validation_error: None,
        }
    }

    /// Run the validator against the current line and remember the result.
    pub fn validate(&mut self) -> bool {
        self.validation_error = self
            .validate
            .and_then(|validate| validate(&self.line).err());
        self.validation_error.is_none()
    }
}

impl Debug for PromptState<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PromptState")
            .field("label", &self.label)
            .field("line", &self.line)
            .field("validate", &self.validate.map(|_| "Fn"))
            .field("validation_error", &self.validation_error)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_eq2, DEFAULT_VIEWPORT_HEIGHT};

    #[test]
    fn selected_item_follows_viewport() {
        let items = vec!["a".to_string(), "b".to_string()];
        let mut state = SelectState {
            label: "Pick",
            items: &items,
            viewport: Viewport::new(items.len(), DEFAULT_VIEWPORT_HEIGHT, 0).unwrap(),
            top_glyph: ' ',
        };
        assert_eq2!(state.selected_item(), "a");
        state.viewport.advance();
        assert_eq2!(state.selected_item(), "b");
    }

    #[test]
    fn prompt_validation_result_is_remembered() {
        let validate: ValidateFn = Box::new(|it| match it.len() < 3 {
            true => Err("Too short".to_string()),
            false => Ok(()),
        });
        let mut state = PromptState::new("Name", Some(&validate));

        state.line.push_str("ab");
        assert!(!state.validate());
        assert_eq2!(state.validation_error.as_deref(), Some("Too short"));

        state.line.push('c');
        assert!(state.validate());
        assert_eq2!(state.validation_error, None);
    }

    #[test]
    fn prompt_without_validator_is_always_valid() {
        let mut state = PromptState::new("Name", None);
        assert!(state.validate());
    }
}
