// Copyright 2024 FastLabs Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The process-wide default logger and the functions forwarding to it.

use std::sync::OnceLock;

use super::Logger;
use crate::Error;
use crate::Format;
use crate::Level;

static DEFAULT_LOGGER: OnceLock<Logger> = OnceLock::new();

/// The process-wide default logger, used by the logging macros when no logger is given.
///
/// It is created with the default settings on first access, unless [`try_init`] installed one
/// before. It lives until the process exits.
pub fn default_logger() -> &'static Logger {
    DEFAULT_LOGGER.get_or_init(Logger::default)
}

/// Install `logger` as the process-wide default logger.
///
/// # Errors
///
/// Return an error if the default logger has already been installed or accessed.
///
/// # Examples
///
/// ```
/// use timberline::Level;
/// use timberline::Logger;
///
/// let logger = Logger::builder().min_level(Level::Warn).build();
/// timberline::try_init(logger).unwrap();
/// assert_eq!(timberline::default_logger().min_level(), Level::Warn);
/// ```
pub fn try_init(logger: Logger) -> Result<(), Error> {
    DEFAULT_LOGGER
        .set(logger)
        .map_err(|_| Error::new("default logger is already initialized"))
}

/// Enable or disable the default logger.
pub fn set_enabled(enabled: bool) {
    default_logger().set_enabled(enabled);
}

/// Set the global minimum level of the default logger.
pub fn set_min_level(level: Level) {
    default_logger().set_min_level(level);
}

/// Set the format of the default logger.
pub fn set_format(format: Format) {
    default_logger().set_format(format);
}

/// Set the separator of the default logger.
pub fn set_separator(separator: impl Into<String>) {
    default_logger().set_separator(separator);
}

/// Set the terminator of the default logger.
pub fn set_terminator(terminator: impl Into<String>) {
    default_logger().set_terminator(terminator);
}

/// Set the minimum level of the default logger for the file at `path`.
pub fn register_file(level: Level, path: &str) {
    default_logger().register_file(level, path);
}

/// Block until every record logged to the default logger so far is written.
pub fn flush() {
    default_logger().flush();
}
