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

//! ### Vertical scrolling and viewport
//!
//! The [Viewport] is the visible window over the list of items, plus the index of the
//! selected item. All three indices point into the full list of items.
//!
//! ```text
//!                    +0--------------------+
//!                    0                     |
//!                    |        above        |
//!                    |                     |
//!              ->    +------ start --------+  <- page marker `↑`
//!              |     |                     |
//!   viewport   |     |  selected (☞)       |
//!   height     |     |                     |
//!              ->    +------- end ---------+  <- page marker `↓`
//!                    |                     |
//!                    |        below        |
//!                    |                     |
//!                    +------ count - 1 ----+
//! ```
//!
//! The following always holds: `0 <= start <= selected <= end <= count - 1` and
//! `end - start + 1 == min(max_height, count)`. The window only moves when the
//! selection would otherwise leave it, and then only by one row.

/// Number of rows shown at once, unless the list is shorter.
pub const DEFAULT_VIEWPORT_HEIGHT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Viewport {
    start: usize,
    end: usize,
    selected: usize,
    item_count: usize,
}

impl Viewport {
    /// Returns [None] if there are no items, since there is nothing to show or select.
    ///
    /// `max_height` of 0 is treated as 1. If `starting` is past the first page, the
    /// window is placed so that `starting` is on its bottom row. If `starting` is past
    /// the end of the list, the last item is selected.
    #[must_use]
    pub fn new(item_count: usize, max_height: usize, starting: usize) -> Option<Self> {
        if item_count == 0 {
            return None;
        }

        let height = max_height.clamp(1, item_count);
        let selected = starting.min(item_count - 1);
        let start = if selected < height {
            0
        } else {
            selected + 1 - height
        };

        Some(Self {
            start,
            end: start + height - 1,
            selected,
            item_count,
        })
    }

    #[must_use]
    pub fn start(&self) -> usize { self.start }

    #[must_use]
    pub fn end(&self) -> usize { self.end }

    #[must_use]
    pub fn selected(&self) -> usize { self.selected }

    #[must_use]
    pub fn item_count(&self) -> usize { self.item_count }

    /// Number of visible rows.
    #[must_use]
    pub fn height(&self) -> usize { self.end - self.start + 1 }

    /// Is there at least one item above the window?
    #[must_use]
    pub fn has_more_above(&self) -> bool { self.start > 0 }

    /// Is there at least one item below the window?
    #[must_use]
    pub fn has_more_below(&self) -> bool { self.end < self.item_count - 1 }

    /// Move the selection down by one. Scrolls the window by one row if the selection is
    /// on the bottom row of the window. Does nothing on the last item.
    pub fn advance(&mut self) {
        if self.selected == self.item_count - 1 {
            return;
        }
        if self.selected == self.end {
            self.start += 1;
            self.end += 1;
        }
        self.selected += 1;
    }

    /// Move the selection up by one. Scrolls the window by one row if the selection is on
    /// the top row of the window. Does nothing on the first item.
    pub fn retreat(&mut self) {
        if self.selected == 0 {
            return;
        }
        if self.selected == self.start {
            self.start -= 1;
            self.end -= 1;
        }
        self.selected -= 1;
    }
}
