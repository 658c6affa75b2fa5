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

//! Log records and the call sites that produce them.

use jiff::Timestamp;

use crate::Level;

/// The call site of a log request.
///
/// Usually captured with the [`location!`](crate::location) macro, which the logging macros do
/// for you.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Location<'a> {
    file: &'a str,
    line: u32,
    column: u32,
    function: &'a str,
}

impl<'a> Location<'a> {
    /// Create a new location.
    pub const fn new(file: &'a str, line: u32, column: u32, function: &'a str) -> Self {
        Self {
            file,
            line,
            column,
            function,
        }
    }

    /// The path of the source file.
    pub fn file(&self) -> &'a str {
        self.file
    }

    /// The line in the source file.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// The column in the source file.
    pub fn column(&self) -> u32 {
        self.column
    }

    /// The enclosing function.
    pub fn function(&self) -> &'a str {
        self.function
    }
}

/// A single admitted log event.
///
/// The creation time is captured once, in [`Record::new`], so rendering the same record twice
/// always yields the same text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    level: Level,
    file: String,
    line: u32,
    column: u32,
    function: String,
    message: String,
    time: Timestamp,
}

impl Record {
    /// Create a record observed now.
    pub fn new(level: Level, location: Location<'_>, message: impl Into<String>) -> Self {
        Self {
            level,
            file: location.file.to_owned(),
            line: location.line,
            column: location.column,
            function: location.function.to_owned(),
            message: message.into(),
            time: Timestamp::now(),
        }
    }

    /// Replace the observed time of this record.
    pub fn with_time(mut self, time: Timestamp) -> Self {
        self.time = time;
        self
    }

    /// The level of the record.
    pub fn level(&self) -> Level {
        self.level
    }

    /// The path of the file that issued the record.
    pub fn file(&self) -> &str {
        &self.file
    }

    /// The line that issued the record.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// The column that issued the record.
    pub fn column(&self) -> u32 {
        self.column
    }

    /// The function that issued the record.
    pub fn function(&self) -> &str {
        &self.function
    }

    /// The joined message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The time the record was created.
    pub fn time(&self) -> Timestamp {
        self.time
    }

    /// The call site of the record.
    pub fn location(&self) -> Location<'_> {
        Location::new(&self.file, self.line, self.column, &self.function)
    }
}

/// Trim the type name of a nested `fn f() {}` down to the name of the function enclosing it.
#[doc(hidden)]
pub fn __trim_function_name(type_name: &'static str) -> &'static str {
    let mut name = type_name.strip_suffix("::f").unwrap_or(type_name);
    while let Some(outer) = name.strip_suffix("::{{closure}}") {
        name = outer;
    }
    name.rsplit("::").next().unwrap_or(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_keeps_location() {
        let location = Location::new("/src/app/main.rs", 21, 5, "run");
        let record = Record::new(Level::Info, location, "started");

        assert_eq!(record.level(), Level::Info);
        assert_eq!(record.file(), "/src/app/main.rs");
        assert_eq!(record.line(), 21);
        assert_eq!(record.column(), 5);
        assert_eq!(record.function(), "run");
        assert_eq!(record.message(), "started");
        assert_eq!(record.location(), location);
    }

    #[test]
    fn test_function_name() {
        assert_eq!(__trim_function_name("app::server::handle::f"), "handle");
        assert_eq!(__trim_function_name("app::server::handle::{{closure}}::f"), "handle");
        assert_eq!(
            __trim_function_name("app::main::{{closure}}::{{closure}}::f"),
            "main"
        );
        assert_eq!(__trim_function_name("main::f"), "main");
    }

    #[test]
    fn test_location_macro() {
        let location = crate::location!();
        assert!(location.file().ends_with("record.rs"));
        assert_eq!(location.function(), "test_location_macro");
        assert!(location.line() > 0);
        assert!(location.column() > 0);
    }
}
