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

//! The error type shared by configuration and sinks.
//!
//! Logging calls never return errors. An [`Error`] surfaces in two places only: synchronously to
//! code that configures a logger, and asynchronously to the logger's [`Trap`](crate::Trap) when a
//! line cannot be written or flushed. In the second case the message names the failed step and
//! the sink's own error is kept as a source:
//!
//! ```text
//! failed to write log line, sources: [failed to perform io, sources: [broken pipe]]
//! ```
//!
//! Configuration errors carry the offending input as context:
//!
//! ```
//! use timberline::Attribute;
//! use timberline::Format;
//!
//! let err = Format::try_new("%@ %@", [Attribute::Message]).unwrap_err();
//! assert_eq!(err.message(), "template placeholders do not match attributes");
//! assert!(err.to_string().contains("placeholders: 2, attributes: 1"));
//! ```

use std::fmt;
use std::io;

/// The error struct of timberline.
///
/// Errors never reach a thread that is merely logging. They are returned to whoever configures
/// a logger (building a [`Format`](crate::Format), parsing a [`Level`](crate::Level), installing
/// the default logger), and otherwise handed to the logger's [`Trap`](crate::Trap).
pub struct Error {
    message: String,
    sources: Vec<anyhow::Error>,
    context: Vec<(&'static str, String)>,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;

        if !self.context.is_empty() {
            write!(f, ", context: {{ ")?;
            for (i, (k, v)) in self.context.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{k}: {v}")?;
            }
            write!(f, " }}")?;
        }

        if !self.sources.is_empty() {
            write!(f, ", sources: [")?;
            for (i, source) in self.sources.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{source}")?;
            }
            write!(f, "]")?;
        }

        Ok(())
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            let mut de = f.debug_struct("Error");
            de.field("message", &self.message);
            de.field("context", &self.context);
            de.field("sources", &self.sources);
            return de.finish();
        }

        writeln!(f, "{}", self.message)?;

        if !self.context.is_empty() {
            writeln!(f)?;
            writeln!(f, "Context:")?;
            for (k, v) in self.context.iter() {
                writeln!(f, "   {k}: {v}")?;
            }
        }
        if !self.sources.is_empty() {
            writeln!(f)?;
            writeln!(f, "Sources:")?;
            for source in self.sources.iter() {
                writeln!(f, "   {source:#}")?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.sources.first().map(|v| v.as_ref())
    }
}

impl Error {
    /// Create a new Error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            sources: vec![],
            context: vec![],
        }
    }

    /// Add one more context in error.
    pub fn with_context(mut self, key: &'static str, value: impl ToString) -> Self {
        self.context.push((key, value.to_string()));
        self
    }

    /// Add one more source in error.
    pub fn with_source(mut self, src: impl Into<anyhow::Error>) -> Self {
        self.sources.push(src.into());
        self
    }

    /// Return the message of this error, without context or sources.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Return an iterator over all sources of this error.
    pub fn sources(&self) -> impl ExactSizeIterator<Item = &(dyn std::error::Error + 'static)> {
        self.sources.iter().map(|v| v.as_ref())
    }

    /// Default constructor for [`Error`] from [`io::Error`].
    pub fn from_io_error(err: io::Error) -> Error {
        Error::new("failed to perform io").with_source(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_with_context_and_sources() {
        let err = Error::new("failed to write log line")
            .with_context("append", "Stdout")
            .with_context("bytes", 42)
            .with_source(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"));

        assert_eq!(
            err.to_string(),
            "failed to write log line, context: { append: Stdout, bytes: 42 }, sources: [pipe closed]"
        );
        assert_eq!(err.message(), "failed to write log line");
        assert_eq!(err.sources().len(), 1);
    }

    #[test]
    fn test_from_io_error() {
        let err = Error::from_io_error(io::Error::other("disk full"));
        assert_eq!(err.to_string(), "failed to perform io, sources: [disk full]");
        assert!(std::error::Error::source(&err).is_some());
    }
}
