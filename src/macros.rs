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

//! Macros capturing the call site of log requests.

/// Capture the current call site as a [`Location`](crate::Location).
///
/// # Examples
///
/// ```
/// fn handle() -> timberline::Location<'static> {
///     timberline::location!()
/// }
///
/// let location = handle();
/// assert_eq!(location.function(), "handle");
/// assert!(location.file().ends_with(".rs"));
/// ```
#[macro_export]
macro_rules! location {
    () => {
        $crate::Location::new(
            ::std::file!(),
            ::std::line!(),
            ::std::column!(),
            $crate::__function_name!(),
        )
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __function_name {
    () => {{
        fn f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        $crate::__trim_function_name(type_name_of(f))
    }};
}

/// Log a message at the given level.
///
/// The arguments may be any [`Display`](std::fmt::Display) values; they are joined with the
/// logger's separator. Without a `logger:` prefix, the [default logger](crate::default_logger)
/// is used.
///
/// # Examples
///
/// ```
/// use timberline::Level;
///
/// let logger = timberline::Logger::default();
/// timberline::log!(logger: logger, Level::Info; "user", 42, "signed in");
/// timberline::log!(Level::Warn; "disk almost full");
/// ```
#[macro_export]
macro_rules! log {
    (logger: $logger:expr, $level:expr; $($arg:expr),+ $(,)?) => {
        ($logger).log(
            $level,
            &[$(&$arg as &dyn ::std::fmt::Display),+],
            $crate::location!(),
        )
    };
    ($level:expr; $($arg:expr),+ $(,)?) => {
        $crate::log!(logger: $crate::default_logger(), $level; $($arg),+)
    };
}

/// Log a message at the [`Debug`](crate::Level::Debug) level.
///
/// # Examples
///
/// ```
/// let logger = timberline::Logger::default();
/// timberline::debug!(logger: logger; "cache miss", "user:42");
/// timberline::debug!("cache miss");
/// ```
#[macro_export]
macro_rules! debug {
    (logger: $logger:expr; $($arg:expr),+ $(,)?) => {
        $crate::log!(logger: $logger, $crate::Level::Debug; $($arg),+)
    };
    ($($arg:expr),+ $(,)?) => {
        $crate::log!($crate::Level::Debug; $($arg),+)
    };
}

/// Log a message at the [`Trace`](crate::Level::Trace) level.
///
/// # Examples
///
/// ```
/// let logger = timberline::Logger::default();
/// timberline::trace!(logger: logger; "polled", 3, "events");
/// ```
#[macro_export]
macro_rules! trace {
    (logger: $logger:expr; $($arg:expr),+ $(,)?) => {
        $crate::log!(logger: $logger, $crate::Level::Trace; $($arg),+)
    };
    ($($arg:expr),+ $(,)?) => {
        $crate::log!($crate::Level::Trace; $($arg),+)
    };
}

/// Log a message at the [`Info`](crate::Level::Info) level.
///
/// # Examples
///
/// ```
/// let logger = timberline::Logger::default();
/// timberline::info!(logger: logger; "listening on", 8080);
/// ```
#[macro_export]
macro_rules! info {
    (logger: $logger:expr; $($arg:expr),+ $(,)?) => {
        $crate::log!(logger: $logger, $crate::Level::Info; $($arg),+)
    };
    ($($arg:expr),+ $(,)?) => {
        $crate::log!($crate::Level::Info; $($arg),+)
    };
}

/// Log a message at the [`Warn`](crate::Level::Warn) level.
///
/// # Examples
///
/// ```
/// let logger = timberline::Logger::default();
/// timberline::warn!(logger: logger; "retrying in", 5, "seconds");
/// ```
#[macro_export]
macro_rules! warn {
    (logger: $logger:expr; $($arg:expr),+ $(,)?) => {
        $crate::log!(logger: $logger, $crate::Level::Warn; $($arg),+)
    };
    ($($arg:expr),+ $(,)?) => {
        $crate::log!($crate::Level::Warn; $($arg),+)
    };
}

/// Log a message at the [`Error`](crate::Level::Error) level.
///
/// # Examples
///
/// ```
/// let logger = timberline::Logger::default();
/// timberline::error!(logger: logger; "request failed", 503);
/// ```
#[macro_export]
macro_rules! error {
    (logger: $logger:expr; $($arg:expr),+ $(,)?) => {
        $crate::log!(logger: $logger, $crate::Level::Error; $($arg),+)
    };
    ($($arg:expr),+ $(,)?) => {
        $crate::log!($crate::Level::Error; $($arg),+)
    };
}

/// Log a message at the [`Fatal`](crate::Level::Fatal) level.
///
/// # Examples
///
/// ```
/// let logger = timberline::Logger::default();
/// timberline::fatal!(logger: logger; "out of memory");
/// ```
#[macro_export]
macro_rules! fatal {
    (logger: $logger:expr; $($arg:expr),+ $(,)?) => {
        $crate::log!(logger: $logger, $crate::Level::Fatal; $($arg),+)
    };
    ($($arg:expr),+ $(,)?) => {
        $crate::log!($crate::Level::Fatal; $($arg),+)
    };
}

/// Set the minimum level for records issued from the calling file.
///
/// # Examples
///
/// ```
/// use timberline::Level;
///
/// let logger = timberline::Logger::default();
/// timberline::register_file!(logger: logger, Level::Error);
/// assert_eq!(logger.file_level(file!()), Some(Level::Error));
///
/// timberline::register_file!(Level::Warn);
/// ```
#[macro_export]
macro_rules! register_file {
    (logger: $logger:expr, $level:expr) => {
        ($logger).register_file($level, ::std::file!())
    };
    ($level:expr) => {
        $crate::register_file!(logger: $crate::default_logger(), $level)
    };
}
