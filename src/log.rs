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

//! Logging for apps that use this crate. Stdout is owned by the widgets while they run,
//! so logs only ever go to a file.
//!
//! ```no_run
//! use r3bl_select::{try_initialize_logging_global, WriterConfig};
//!
//! fn main() -> miette::Result<()> {
//!     try_initialize_logging_global(tracing::Level::DEBUG)?;
//!     // Or, to pick the file.
//!     // try_initialize_logging_global(WriterConfig::File("pick.log".to_string()))?;
//!     tracing::debug!("Hello");
//!     Ok(())
//! }
//! ```

use std::path::PathBuf;

use miette::IntoDiagnostic;
use tracing_appender::rolling::RollingFileAppender;
use tracing_core::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt,
                         registry::LookupSpan,
                         util::SubscriberInitExt,
                         Layer};

pub const DEFAULT_LOG_FILE_NAME: &str = "log.txt";

pub type DynLayer<S> = dyn Layer<S> + Send + Sync + 'static;

/// Avoid gnarly type annotations by using a macro to create the `fmt` layer.
macro_rules! create_fmt {
    () => {
        tracing_subscriber::fmt::layer()
            .compact()
            .without_time()
            .with_thread_ids(true)
            .with_thread_names(false)
            .with_target(false)
            .with_file(false)
            .with_line_number(false)
            .with_ansi(false)
    };
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriterConfig {
    None,
    /// Path of the log file.
    File(String),
}

impl Default for WriterConfig {
    fn default() -> Self { WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_string()) }
}

/// Use one of the [From] impls to only override the writer or the level:
///
/// ```
/// use r3bl_select::{TracingConfig, WriterConfig};
///
/// let config = TracingConfig::from(tracing::Level::INFO);
/// assert_eq!(config.writer_config, WriterConfig::File("log.txt".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    pub writer_config: WriterConfig,
    pub level_filter: LevelFilter,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            writer_config: WriterConfig::default(),
            level_filter: LevelFilter::DEBUG,
        }
    }
}

impl From<tracing::Level> for TracingConfig {
    fn from(level: tracing::Level) -> Self { LevelFilter::from_level(level).into() }
}

impl From<LevelFilter> for TracingConfig {
    fn from(level_filter: LevelFilter) -> Self {
        Self {
            level_filter,
            ..Default::default()
        }
    }
}

impl From<WriterConfig> for TracingConfig {
    fn from(writer_config: WriterConfig) -> Self {
        Self {
            writer_config,
            ..Default::default()
        }
    }
}

/// Install a global subscriber that writes to the configured file. Does nothing for
/// [`WriterConfig::None`].
///
/// # Errors
///
/// Returns an error if the log file can't be created, or if a global subscriber has
/// already been installed.
pub fn try_initialize_logging_global(
    tracing_config: impl Into<TracingConfig>,
) -> miette::Result<()> {
    match try_create_layers(tracing_config.into())? {
        Some(layers) => tracing_subscriber::registry()
            .with(layers)
            .try_init()
            .into_diagnostic(),
        None => Ok(()),
    }
}

/// Returns the layers. This does not initialize the tracing system.
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_create_layers<S>(
    tracing_config: TracingConfig,
) -> miette::Result<Option<Vec<Box<DynLayer<S>>>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    let TracingConfig {
        writer_config,
        level_filter,
    } = tracing_config;

    match writer_config {
        WriterConfig::None => Ok(None),
        WriterConfig::File(path_str) => {
            let file = try_create_rolling_file_appender(&path_str)?;
            let mut return_it: Vec<Box<DynLayer<S>>> = vec![];
            return_it.push(Box::new(level_filter));
            return_it.push(Box::new(
                create_fmt!().with_writer(file).with_filter(level_filter),
            ));
            Ok(Some(return_it))
        }
    }
}

/// Note that if you wrap this up in a non blocking writer, it doesn't work, since the
/// guard is dropped as soon as this returns.
///
/// # Errors
///
/// Returns an error if `path_str` has no file name.
pub fn try_create_rolling_file_appender(
    path_str: &str,
) -> miette::Result<RollingFileAppender> {
    let path = PathBuf::from(path_str);

    let parent = path.parent().ok_or_else(|| {
        miette::miette!(
            "Can't access current folder {}. It might not exist, or don't have required permissions.",
            path.display()
        )
    })?;

    let file_name = path.file_name().ok_or_else(|| {
        miette::miette!(
            "Can't access file name {}. It might not exist, or don't have required permissions.",
            path.display()
        )
    })?;

    Ok(tracing_appender::rolling::never(parent, file_name))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use serial_test::serial;
    use tracing_subscriber::Registry;

    use super::*;
    use crate::assert_eq2;

    #[test]
    fn config_from_parts() {
        let it = TracingConfig::from(tracing::Level::WARN);
        assert_eq2!(it.level_filter, LevelFilter::WARN);
        assert_eq2!(it.writer_config, WriterConfig::default());

        let it = TracingConfig::from(WriterConfig::None);
        assert_eq2!(it.level_filter, LevelFilter::DEBUG);
        assert_eq2!(it.writer_config, WriterConfig::None);
    }

    #[test]
    fn no_layers_without_writer() {
        let it = try_create_layers::<Registry>(WriterConfig::None.into()).unwrap();
        assert!(it.is_none());
    }

    #[test]
    fn file_appender_writes_to_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pick.log");

        let mut appender =
            try_create_rolling_file_appender(path.to_str().unwrap()).unwrap();
        appender.write_all(b"hello\n").unwrap();
        appender.flush().unwrap();

        assert_eq2!(std::fs::read_to_string(&path).unwrap(), "hello\n");
    }

    #[test]
    fn file_appender_needs_a_file_name() {
        assert!(try_create_rolling_file_appender("/").is_err());
    }

    #[test]
    #[serial]
    fn global_logging_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.txt");
        let config = TracingConfig {
            writer_config: WriterConfig::File(path.to_string_lossy().to_string()),
            level_filter: LevelFilter::DEBUG,
        };

        try_initialize_logging_global(config.clone()).unwrap();
        tracing::debug!("logged to file");
        assert!(std::fs::read_to_string(&path)
            .unwrap()
            .contains("logged to file"));

        // Only one global subscriber can be installed.
        assert!(try_initialize_logging_global(config).is_err());
    }
}
