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
use std::fmt::Write;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;

use arc_swap::ArcSwap;
use jiff::tz::TimeZone;

use crate::Format;
use crate::Level;
use crate::Location;
use crate::Record;
use crate::append::Append;
use crate::append::Stdout;
use crate::dispatch::Dispatcher;
use crate::dispatch::Snapshot;
use crate::filter::LevelPolicy;

pub use self::builder::LoggerBuilder;
pub use self::global::default_logger;
pub use self::global::flush;
pub use self::global::register_file;
pub use self::global::set_enabled;
pub use self::global::set_format;
pub use self::global::set_min_level;
pub use self::global::set_separator;
pub use self::global::set_terminator;
pub use self::global::try_init;

mod builder;
mod global;

/// A logger: level thresholds, a line format, and a destination.
///
/// Every setting may be changed at any time from any thread. Admitted records are rendered and
/// written by a dedicated thread, in the order they were logged, unless the logger is
/// [synchronous](Logger::set_synchronous).
///
/// Logging never fails from the caller's point of view: errors raised while writing go to the
/// logger's [`Trap`](crate::Trap) and the line is dropped.
///
/// # Examples
///
/// ```
/// use timberline::Level;
/// use timberline::Logger;
///
/// let logger = Logger::builder().min_level(Level::Info).build();
/// timberline::info!(logger: logger; "listening on", 8080);
/// timberline::debug!(logger: logger; "not written");
/// logger.flush();
/// ```
#[derive(Debug)]
pub struct Logger {
    policy: LevelPolicy,
    format: ArcSwap<Format>,
    separator: ArcSwap<String>,
    terminator: ArcSwap<String>,
    append: ArcSwap<Box<dyn Append>>,
    synchronous: AtomicBool,
    timezone: TimeZone,
    dispatcher: Dispatcher,
}

impl Default for Logger {
    fn default() -> Self {
        LoggerBuilder::new().build()
    }
}

impl Logger {
    /// Create a new [`LoggerBuilder`].
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Whether the logger is enabled.
    pub fn enabled(&self) -> bool {
        self.policy.enabled()
    }

    /// Enable or disable the logger.
    ///
    /// Files with a [registered](Logger::register_file) level keep logging while the logger is
    /// disabled.
    pub fn set_enabled(&self, enabled: bool) {
        self.policy.set_enabled(enabled);
    }

    /// The global minimum level.
    pub fn min_level(&self) -> Level {
        self.policy.min_level()
    }

    /// Set the global minimum level.
    pub fn set_min_level(&self, level: Level) {
        self.policy.set_min_level(level);
    }

    /// The format of log lines.
    pub fn format(&self) -> Arc<Format> {
        self.format.load_full()
    }

    /// Set the format of log lines.
    pub fn set_format(&self, format: Format) {
        self.format.store(Arc::new(format));
    }

    /// The separator placed between the parts of a message.
    pub fn separator(&self) -> Arc<String> {
        self.separator.load_full()
    }

    /// Set the separator placed between the parts of a message. Default to `", "`.
    pub fn set_separator(&self, separator: impl Into<String>) {
        self.separator.store(Arc::new(separator.into()));
    }

    /// The terminator appended to each log line.
    pub fn terminator(&self) -> Arc<String> {
        self.terminator.load_full()
    }

    /// Set the terminator appended to each log line. Default to `"\n"`.
    pub fn set_terminator(&self, terminator: impl Into<String>) {
        self.terminator.store(Arc::new(terminator.into()));
    }

    /// Set the minimum level for records issued from the file at `path`.
    ///
    /// Files are identified by their name without directories or extension. The registered level
    /// replaces both the global minimum level and the enabled flag for that file. Registering a
    /// file again overwrites its level.
    ///
    /// Use [`register_file!`](crate::register_file) to register the calling file.
    pub fn register_file(&self, level: Level, path: &str) {
        self.policy.register_file(level, path);
    }

    /// The minimum level registered for the file at `path`, if any.
    pub fn file_level(&self, path: &str) -> Option<Level> {
        self.policy.file_level(path)
    }

    /// Whether a record of `level` issued from the file at `path` would be written.
    pub fn admits(&self, level: Level, path: &str) -> bool {
        self.policy.admits(level, path)
    }

    /// Write log lines to `append` instead of the current destination.
    pub fn set_append(&self, append: impl Into<Box<dyn Append>>) {
        self.append.store(Arc::new(append.into()));
    }

    /// Write log lines to stdout again.
    pub fn reset_append(&self) {
        self.set_append(Stdout::default());
    }

    /// Whether records are written on the logging thread.
    pub fn synchronous(&self) -> bool {
        self.synchronous.load(Ordering::Relaxed)
    }

    /// Write records on the logging thread rather than on the dispatch thread.
    ///
    /// The call blocks until the line is written. Records queued before the switch may still be
    /// pending on the dispatch thread; call [`Logger::flush`] first when ordering across the switch
    /// matters. Intended for deterministic tests.
    pub fn set_synchronous(&self, synchronous: bool) {
        self.synchronous.store(synchronous, Ordering::Relaxed);
    }

    /// The time zone dates are rendered in.
    pub fn timezone(&self) -> &TimeZone {
        &self.timezone
    }

    /// Log a message made of `parts`, joined with the [separator](Logger::set_separator).
    ///
    /// Nothing is rendered unless the record is admitted. `level` should be one of `Debug`
    /// through `Fatal`.
    pub fn log(&self, level: Level, parts: &[&dyn fmt::Display], location: Location<'_>) {
        if !self.policy.admits(level, location.file()) {
            return;
        }

        let message = join(parts, &self.separator.load());
        let record = Record::new(level, location, message);
        let snapshot = self.snapshot();
        if self.synchronous() {
            self.dispatcher.execute(record, snapshot);
        } else {
            self.dispatcher.submit(record, snapshot);
        }
    }

    /// Log at the [`Level::Debug`] level.
    pub fn debug(&self, parts: &[&dyn fmt::Display], location: Location<'_>) {
        self.log(Level::Debug, parts, location);
    }

    /// Log at the [`Level::Trace`] level.
    pub fn trace(&self, parts: &[&dyn fmt::Display], location: Location<'_>) {
        self.log(Level::Trace, parts, location);
    }

    /// Log at the [`Level::Info`] level.
    pub fn info(&self, parts: &[&dyn fmt::Display], location: Location<'_>) {
        self.log(Level::Info, parts, location);
    }

    /// Log at the [`Level::Warn`] level.
    pub fn warn(&self, parts: &[&dyn fmt::Display], location: Location<'_>) {
        self.log(Level::Warn, parts, location);
    }

    /// Log at the [`Level::Error`] level.
    pub fn error(&self, parts: &[&dyn fmt::Display], location: Location<'_>) {
        self.log(Level::Error, parts, location);
    }

    /// Log at the [`Level::Fatal`] level.
    pub fn fatal(&self, parts: &[&dyn fmt::Display], location: Location<'_>) {
        self.log(Level::Fatal, parts, location);
    }

    /// Block until every record logged so far is written, then flush the destination.
    pub fn flush(&self) {
        self.dispatcher.flush(self.append.load_full());
    }

    #[cfg(feature = "bridge-log")]
    pub(crate) fn policy(&self) -> &LevelPolicy {
        &self.policy
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            format: self.format.load_full(),
            terminator: self.terminator.load_full(),
            append: self.append.load_full(),
            timezone: self.timezone.clone(),
        }
    }
}

fn join(parts: &[&dyn fmt::Display], separator: &str) -> String {
    let mut message = String::new();
    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            message.push_str(separator);
        }
        // a failing Display impl leaves its part truncated
        let _ = write!(message, "{part}");
    }
    message
}
