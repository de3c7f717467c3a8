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

/// Run the `$block` only if the `$cond` is true. This is used to guard debug logging
/// with [`crate::DEVELOPMENT_MODE`].
///
/// ```
/// use r3bl_select::call_if_true;
/// const TRACE: bool = true;
/// call_if_true!(TRACE, {
///     tracing::debug!("this only runs if TRACE is true");
/// });
/// ```
#[macro_export]
macro_rules! call_if_true {
    ($cond:ident, $block: expr) => {{
        if $cond {
            $block
        }
    }};
}

/// Wrapper for [`pretty_assertions::assert_eq!`] so that test failures show a colored
/// diff.
#[cfg(test)]
#[macro_export]
macro_rules! assert_eq2 {
    ($($params:tt)*) => {
        pretty_assertions::assert_eq!($($params)*)
    };
}
