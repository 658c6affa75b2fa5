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

use std::fmt;

use crate::Level;
use crate::Location;
use crate::Logger;
use crate::default_logger;

/// Map levels by name.
///
/// The two scales disagree on the rank of `Trace`: the log crate ranks it below `Debug`, while
/// [`Level::Trace`] ranks above [`Level::Debug`]. A logger with a minimum level of
/// [`Level::Trace`] therefore admits `log::trace!` records and drops `log::debug!` ones. Use
/// [`Level::Debug`] or lower to admit both.
impl From<log::Level> for Level {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => Level::Error,
            log::Level::Warn => Level::Warn,
            log::Level::Info => Level::Info,
            log::Level::Debug => Level::Debug,
            log::Level::Trace => Level::Trace,
        }
    }
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        self.policy().admits_any(metadata.level().into())
    }

    fn log(&self, record: &log::Record) {
        // records without a file are attributed to their target, e.g. the module path
        let location = Location::new(
            record.file().unwrap_or(record.target()),
            record.line().unwrap_or(0),
            0,
            record.module_path().unwrap_or_default(),
        );
        let args = record.args();
        Logger::log(self, record.level().into(), &[args as &dyn fmt::Display], location);
    }

    fn flush(&self) {
        Logger::flush(self);
    }
}

struct LogCrateLogger(());

impl log::Log for LogCrateLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        log::Log::enabled(default_logger(), metadata)
    }

    fn log(&self, record: &log::Record) {
        log::Log::log(default_logger(), record);
    }

    fn flush(&self) {
        log::Log::flush(default_logger());
    }
}

/// Set up the log crate global logger.
///
/// This function calls [`log::set_logger`] so that all logs from the log crate are forwarded to
/// the [default logger](crate::default_logger). Levels map by name. Records keep the file and line
/// the log crate reports, and the module path stands in for the function.
///
/// This function will set the global maximum log level to `Trace`. To override this, call
/// [`log::set_max_level`] after this function.
///
/// # Errors
///
/// Return an error if the log crate global logger has already been set.
///
/// # Examples
///
/// ```
/// if let Err(err) = timberline::bridge::try_setup_log_crate() {
///     eprintln!("failed to setup log crate: {err}");
/// }
/// ```
pub fn try_setup_log_crate() -> Result<(), log::SetLoggerError> {
    static LOGGER: LogCrateLogger = LogCrateLogger(());
    log::set_logger(&LOGGER)?;
    log::set_max_level(log::LevelFilter::Trace);
    Ok(())
}

/// Set up the log crate global logger.
///
/// See [`try_setup_log_crate`].
///
/// # Panics
///
/// Panic if the log crate global logger has already been set.
///
/// # Examples
///
/// ```
/// timberline::bridge::setup_log_crate();
/// log::info!("forwarded");
/// timberline::flush();
/// ```
pub fn setup_log_crate() {
    try_setup_log_crate().expect(
        "timberline::bridge::setup_log_crate must be called before the log crate global logger initialized",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_mapping() {
        assert_eq!(Level::from(log::Level::Error), Level::Error);
        assert_eq!(Level::from(log::Level::Warn), Level::Warn);
        assert_eq!(Level::from(log::Level::Info), Level::Info);
        assert_eq!(Level::from(log::Level::Debug), Level::Debug);
        assert_eq!(Level::from(log::Level::Trace), Level::Trace);
    }

    #[test]
    fn test_trace_ranks_above_debug() {
        let logger = Logger::builder().min_level(Level::Trace).build();
        let debug = log::Metadata::builder().level(log::Level::Debug).build();
        let trace = log::Metadata::builder().level(log::Level::Trace).build();

        assert!(log::Log::enabled(&logger, &trace));
        assert!(!log::Log::enabled(&logger, &debug));

        logger.set_min_level(Level::Debug);
        assert!(log::Log::enabled(&logger, &trace));
        assert!(log::Log::enabled(&logger, &debug));
    }

    #[test]
    fn test_enabled_considers_file_levels() {
        let logger = Logger::builder().min_level(Level::Error).build();
        let info = log::Metadata::builder().level(log::Level::Info).build();
        let error = log::Metadata::builder().level(log::Level::Error).build();

        assert!(log::Log::enabled(&logger, &error));
        assert!(!log::Log::enabled(&logger, &info));

        logger.register_file(Level::Info, "src/chatty.rs");
        assert!(log::Log::enabled(&logger, &info));
    }
}
