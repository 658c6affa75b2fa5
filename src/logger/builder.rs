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

use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use arc_swap::ArcSwap;
use jiff::tz::TimeZone;

use super::Logger;
use crate::Error;
use crate::Format;
use crate::Level;
use crate::Trap;
use crate::append::Append;
use crate::append::Stdout;
use crate::dispatch::Dispatcher;
use crate::filter::LevelPolicy;
use crate::trap::DefaultTrap;

const DEFAULT_THREAD_NAME: &str = "timberline-dispatch";

/// A builder for configuring a [`Logger`].
///
/// Every setting can also be changed after the logger is built.
///
/// # Examples
///
/// ```
/// use timberline::Attribute;
/// use timberline::Format;
/// use timberline::Level;
/// use timberline::Logger;
/// use timberline::append;
///
/// let logger = Logger::builder()
///     .min_level(Level::Info)
///     .format(Format::new("%@: %@", [Attribute::Level, Attribute::Message]))
///     .separator(" ")
///     .append(append::Stderr::default())
///     .register_file(Level::Debug, "src/net/client.rs")
///     .build();
/// ```
#[must_use = "call `build` to create the logger"]
#[derive(Debug)]
pub struct LoggerBuilder {
    enabled: bool,
    min_level: Level,
    format: Format,
    separator: String,
    terminator: String,
    append: Box<dyn Append>,
    synchronous: bool,
    timezone: TimeZone,
    thread_name: String,
    trap: Box<dyn Trap>,
    files: Vec<(Level, String)>,
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerBuilder {
    /// Create a new builder with the default settings: enabled, a minimum level of
    /// [`Level::Debug`], the [default format](Format::default), `", "` as separator, `"\n"` as
    /// terminator, and stdout as destination.
    pub fn new() -> Self {
        Self {
            enabled: true,
            min_level: Level::Debug,
            format: Format::default(),
            separator: ", ".to_owned(),
            terminator: "\n".to_owned(),
            append: Box::new(Stdout::default()),
            synchronous: false,
            timezone: TimeZone::system(),
            thread_name: DEFAULT_THREAD_NAME.to_owned(),
            trap: Box::new(DefaultTrap::default()),
            files: vec![],
        }
    }

    /// Set whether the logger starts enabled.
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Set the global minimum level.
    pub fn min_level(mut self, level: Level) -> Self {
        self.min_level = level;
        self
    }

    /// Read the global minimum level from the environment variable `key`, such as `APP_LOG=warn`.
    ///
    /// Keep the current minimum level if the variable is not set.
    ///
    /// # Errors
    ///
    /// Return an error if the variable is set but is not unicode or does not name a level.
    pub fn min_level_from_env(mut self, key: &str) -> Result<Self, Error> {
        match std::env::var(key) {
            Ok(value) => {
                self.min_level = value
                    .parse()
                    .map_err(|err: Error| err.with_context("env", key))?;
                Ok(self)
            }
            Err(std::env::VarError::NotPresent) => Ok(self),
            Err(err) => Err(Error::new("failed to read log level from env")
                .with_context("env", key)
                .with_source(err)),
        }
    }

    /// Set the format of log lines.
    pub fn format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    /// Set the separator placed between the parts of a message.
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Set the terminator appended to each log line.
    pub fn terminator(mut self, terminator: impl Into<String>) -> Self {
        self.terminator = terminator.into();
        self
    }

    /// Set the destination of log lines.
    pub fn append(mut self, append: impl Into<Box<dyn Append>>) -> Self {
        self.append = append.into();
        self
    }

    /// Write records on the logging thread. See [`Logger::set_synchronous`].
    pub fn synchronous(mut self, synchronous: bool) -> Self {
        self.synchronous = synchronous;
        self
    }

    /// Set the time zone dates are rendered in. Default to the system time zone.
    pub fn timezone(mut self, timezone: TimeZone) -> Self {
        self.timezone = timezone;
        self
    }

    /// Set the name of the dispatch thread.
    pub fn thread_name(mut self, thread_name: impl Into<String>) -> Self {
        self.thread_name = thread_name.into();
        self
    }

    /// Set the trap receiving errors raised while writing log lines. Default to [`DefaultTrap`].
    pub fn trap(mut self, trap: impl Into<Box<dyn Trap>>) -> Self {
        self.trap = trap.into();
        self
    }

    /// Set the minimum level for records issued from the file at `path`.
    ///
    /// See [`Logger::register_file`].
    pub fn register_file(mut self, level: Level, path: impl Into<String>) -> Self {
        self.files.push((level, path.into()));
        self
    }

    /// Build the logger and start its dispatch thread.
    pub fn build(self) -> Logger {
        let policy = LevelPolicy::new(self.min_level);
        policy.set_enabled(self.enabled);
        for (level, path) in &self.files {
            policy.register_file(*level, path);
        }

        let dispatcher = Dispatcher::new(self.thread_name, Arc::from(self.trap));

        Logger {
            policy,
            format: ArcSwap::from_pointee(self.format),
            separator: ArcSwap::from_pointee(self.separator),
            terminator: ArcSwap::from_pointee(self.terminator),
            append: ArcSwap::from_pointee(self.append),
            synchronous: AtomicBool::new(self.synchronous),
            timezone: self.timezone,
            dispatcher,
        }
    }
}
