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

//! Timberline is a small leveled logger with per-file thresholds and templated output.
//!
//! # Overview
//!
//! Log requests carry a [`Level`], a message made of any number of displayable parts, and their
//! call site. A [`Logger`] admits a request when its level passes the threshold registered for its
//! source file, or else the global minimum level. Admitted records are rendered with a [`Format`]
//! and written, in order, by a dedicated thread to an [`Append`](append::Append).
//!
//! All settings can be changed at runtime from any thread. A process-wide default logger backs
//! the logging macros when no logger is given.
//!
//! # Examples
//!
//! Log to stdout with the default format:
//!
//! ```
//! timberline::info!("server started on port", 8080);
//! timberline::flush();
//! ```
//!
//! Configure a logger and raise the verbosity of a single file:
//!
//! ```
//! use timberline::Attribute;
//! use timberline::Format;
//! use timberline::Level;
//! use timberline::Logger;
//! use timberline::append;
//!
//! let logger = Logger::builder()
//!     .min_level(Level::Warn)
//!     .format(Format::new(
//!         "%@ [%@] %@",
//!         [Attribute::date("HH:mm:ss.SSS"), Attribute::Level, Attribute::Message],
//!     ))
//!     .append(append::Stderr::default())
//!     .build();
//! timberline::register_file!(logger: logger, Level::Debug);
//!
//! timberline::debug!(logger: logger; "written, this file is registered");
//! logger.flush();
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod append;
pub mod bridge;
pub mod filter;
pub mod trap;

mod dispatch;
mod error;
mod format;
mod formatter;
mod level;
mod logger;
mod macros;
mod record;

pub use self::error::Error;
pub use self::format::Attribute;
pub use self::format::Format;
pub use self::formatter::Formatter;
pub use self::formatter::file_name;
pub use self::level::Level;
pub use self::logger::*;
pub use self::record::Location;
pub use self::record::Record;
pub use self::trap::Trap;

#[doc(hidden)]
pub use self::record::__trim_function_name;
