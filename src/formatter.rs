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

use std::path::is_separator;

use jiff::tz::TimeZone;

use crate::Attribute;
use crate::Format;
use crate::Record;
use crate::format::PLACEHOLDER;
use crate::format::Segment;
use crate::format::Segments;
use crate::format::date;

/// Renders one [`Record`] according to a [`Format`].
///
/// # Examples
///
/// ```
/// use timberline::Attribute;
/// use timberline::Format;
/// use timberline::Formatter;
/// use timberline::Level;
/// use timberline::Location;
/// use timberline::Record;
///
/// let format = Format::new("%@ %@:%@ %@", [
///     Attribute::Level,
///     Attribute::file_name(false, true),
///     Attribute::Line,
///     Attribute::Message,
/// ]);
/// let location = Location::new("/app/src/main.rs", 7, 1, "main");
/// let record = Record::new(Level::Warn, location, "low disk space");
///
/// let line = Formatter::new(&format, &record, "\n").render();
/// assert_eq!(line, "WARN main.rs:7 low disk space\n");
/// ```
#[derive(Debug, Clone)]
pub struct Formatter<'a> {
    format: &'a Format,
    record: &'a Record,
    terminator: &'a str,
    timezone: TimeZone,
}

impl<'a> Formatter<'a> {
    /// Bind a format to a record, ending the rendered line with `terminator`.
    ///
    /// Dates are rendered in the system time zone unless [`Formatter::timezone`] says otherwise.
    pub fn new(format: &'a Format, record: &'a Record, terminator: &'a str) -> Self {
        Self {
            format,
            record,
            terminator,
            timezone: TimeZone::system(),
        }
    }

    /// Set the time zone used to render [`Attribute::Date`].
    pub fn timezone(mut self, timezone: TimeZone) -> Self {
        self.timezone = timezone;
        self
    }

    /// Render the log line.
    ///
    /// A format without attributes renders the bare message. Otherwise each `%@` of the template
    /// is replaced by the next attribute and the terminator is appended. Attributes left over
    /// once the template is exhausted are dropped, and placeholders left over once the attributes
    /// are exhausted are kept as `%@`.
    pub fn render(&self) -> String {
        let attributes = match self.format.attributes() {
            Some(attributes) if !attributes.is_empty() => attributes,
            _ => return self.record.message().to_owned(),
        };

        let mut attributes = attributes.iter();
        let mut line = String::with_capacity(self.format.template().len() + 64);
        for segment in Segments::new(self.format.template()) {
            match segment {
                Segment::Literal(text) => line.push_str(text),
                Segment::Placeholder => match attributes.next() {
                    Some(attribute) => line.push_str(&self.render_attribute(attribute)),
                    None => line.push_str(PLACEHOLDER),
                },
            }
        }
        line.push_str(self.terminator);
        line
    }

    /// Render a single attribute of the bound record.
    pub fn render_attribute(&self, attribute: &Attribute) -> String {
        let record = self.record;
        match attribute {
            Attribute::Level => record.level().as_str().to_owned(),
            Attribute::FileName {
                full_path,
                extension,
            } => file_name(record.file(), *full_path, *extension).to_owned(),
            Attribute::Line => record.line().to_string(),
            Attribute::Column => record.column().to_string(),
            Attribute::Function => record.function().to_owned(),
            Attribute::Message => record.message().to_owned(),
            Attribute::Date(pattern) => {
                let zoned = record.time().to_zoned(self.timezone.clone());
                date::render(pattern, &zoned)
            }
        }
    }
}

/// Reduce a file path for display.
///
/// Without `full_path` only the last segment of the path is kept; without `extension` the
/// trailing extension is stripped. The two reductions compose, in that order.
///
/// # Examples
///
/// ```
/// use timberline::file_name;
///
/// assert_eq!(file_name("/a/b/c.rs", true, true), "/a/b/c.rs");
/// assert_eq!(file_name("/a/b/c.rs", true, false), "/a/b/c");
/// assert_eq!(file_name("/a/b/c.rs", false, true), "c.rs");
/// assert_eq!(file_name("/a/b/c.rs", false, false), "c");
/// ```
pub fn file_name(path: &str, full_path: bool, extension: bool) -> &str {
    if full_path && extension {
        return path;
    }

    // trailing separators do not start a new segment
    let trimmed = path.trim_end_matches(is_separator);
    if trimmed.is_empty() {
        return path;
    }

    let segment = match trimmed.rfind(is_separator) {
        Some(i) => &trimmed[i + 1..],
        None => trimmed,
    };
    let name = if full_path { trimmed } else { segment };
    if extension {
        return name;
    }

    // a leading dot names a hidden file rather than an extension
    match segment.rfind('.') {
        Some(dot) if dot > 0 && segment != ".." => &name[..name.len() - (segment.len() - dot)],
        _ => name,
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;
    use crate::Level;
    use crate::Location;

    const FILE: &str = "/home/dev/project/src/handler.rs";
    const TERMINATOR: &str = ",<terminator>";
    const DATE_PATTERN: &str = "dd/MM/yyyy'T'HH:mm:ss Z";

    fn record(level: Level, message: &str) -> Record {
        let location = Location::new(FILE, 21, 13, "handle_request");
        let time: Timestamp = "2016-06-09T16:12:24Z".parse().unwrap();
        Record::new(level, location, message).with_time(time)
    }

    fn all_attributes() -> Format {
        Format::new(
            "[%@],[%@],[%@],[%@],[%@],[%@],[%@]",
            [
                Attribute::Column,
                Attribute::date(DATE_PATTERN),
                Attribute::file_name(false, false),
                Attribute::Function,
                Attribute::Level,
                Attribute::Line,
                Attribute::Message,
            ],
        )
    }

    #[test]
    fn test_render_all_attributes() {
        let format = all_attributes();
        let record = record(Level::All, "some_message goes here");
        let formatter = Formatter::new(&format, &record, TERMINATOR).timezone(TimeZone::UTC);

        assert_eq!(
            formatter.render(),
            "[13],[09/06/2016T16:12:24 +0000],[handler],[handle_request],[ALL],[21],[some_message goes here],<terminator>"
        );
    }

    #[test]
    fn test_render_is_idempotent() {
        let format = all_attributes();
        let record = Record::new(
            Level::Info,
            Location::new(FILE, 1, 1, "f"),
            "same output",
        );
        let formatter = Formatter::new(&format, &record, "\n");
        assert_eq!(formatter.render(), formatter.render());
    }

    #[test]
    fn test_render_default_format() {
        let format = Format::default();
        let record = record(Level::Fatal, "boom");
        let formatter = Formatter::new(&format, &record, "\n").timezone(TimeZone::UTC);
        assert_eq!(formatter.render(), "[FATAL 16:12:24 handler.rs:21] boom\n");
    }

    #[test]
    fn test_render_without_attributes() {
        let record = record(Level::Debug, "some message");

        let unstructured = Format::unstructured("");
        assert_eq!(Formatter::new(&unstructured, &record, "").render(), "some message");

        let empty = Format::new("", []);
        assert_eq!(Formatter::new(&empty, &record, "").render(), "some message");

        // template and terminator are ignored as well
        let ignored = Format::new("[%@]", []);
        assert_eq!(Formatter::new(&ignored, &record, "\n").render(), "some message");
    }

    #[test]
    fn test_render_arity_mismatch() {
        let record = record(Level::Warn, "boom");

        let surplus_attributes = Format::new("%@", [Attribute::Level, Attribute::Message]);
        assert_eq!(
            Formatter::new(&surplus_attributes, &record, "\n").render(),
            "WARN\n"
        );

        let surplus_placeholders = Format::new("%@ %@ %@", [Attribute::Level]);
        assert_eq!(
            Formatter::new(&surplus_placeholders, &record, "\n").render(),
            "WARN %@ %@\n"
        );

        let escaped = Format::new("%@ 100%%", [Attribute::Level]);
        assert_eq!(Formatter::new(&escaped, &record, "").render(), "WARN 100%");
    }

    #[test]
    fn test_render_attributes() {
        let record = record(Level::Error, "message");
        let format = Format::default();
        let formatter = Formatter::new(&format, &record, "\n").timezone(TimeZone::UTC);

        assert_eq!(formatter.render_attribute(&Attribute::Level), "ERROR");
        assert_eq!(formatter.render_attribute(&Attribute::Line), "21");
        assert_eq!(formatter.render_attribute(&Attribute::Column), "13");
        assert_eq!(formatter.render_attribute(&Attribute::Function), "handle_request");
        assert_eq!(formatter.render_attribute(&Attribute::Message), "message");
        assert_eq!(
            formatter.render_attribute(&Attribute::file_name(true, true)),
            FILE
        );
        assert_eq!(
            formatter.render_attribute(&Attribute::file_name(true, false)),
            "/home/dev/project/src/handler"
        );
        assert_eq!(
            formatter.render_attribute(&Attribute::date("yyyy-MM-dd")),
            "2016-06-09"
        );
    }

    #[test]
    fn test_file_name() {
        assert_eq!(file_name("/a/b/c.rs", false, false), "c");
        assert_eq!(file_name("/a/b/c.rs", true, true), "/a/b/c.rs");
        assert_eq!(file_name("/a/b/c.rs", false, true), "c.rs");
        assert_eq!(file_name("/a/b/c.rs", true, false), "/a/b/c");

        assert_eq!(file_name("main.rs", false, false), "main");
        assert_eq!(file_name("src/archive.tar.gz", false, false), "archive.tar");
        assert_eq!(file_name("/a/.hidden", false, false), ".hidden");
        assert_eq!(file_name("/a/b/Makefile", false, false), "Makefile");
        assert_eq!(file_name("", false, false), "");
        assert_eq!(file_name("/", false, false), "/");
        assert_eq!(file_name("a/..", false, false), "..");
        assert_eq!(file_name("name.", false, false), "name");
    }

    #[test]
    fn test_file_name_with_trailing_separators() {
        assert_eq!(file_name("/a/b.rs/", true, false), "/a/b");
        assert_eq!(file_name("/a/b.rs/", false, true), "b.rs");
        assert_eq!(file_name("/a/b.rs/", false, false), "b");
        assert_eq!(file_name("/a/b.rs/", true, true), "/a/b.rs/");

        // multibyte extensions are cut on the dot, never inside a char
        assert_eq!(file_name("x.\u{e9}//", true, false), "x");
        assert_eq!(file_name("dir/caf\u{e9}.r\u{e9}s", false, false), "caf\u{e9}");
        assert_eq!(file_name("d\u{e9}j\u{e0}/vu.txt", true, false), "d\u{e9}j\u{e0}/vu");
    }

    #[test]
    fn test_render_odd_paths() {
        let format = Format::new("%@", [Attribute::file_name(true, false)]);
        for (path, expected) in [("x.\u{e9}//", "x\n"), ("/a/b.rs/", "/a/b\n")] {
            let record = Record::new(Level::Info, Location::new(path, 1, 1, "f"), "m");
            assert_eq!(Formatter::new(&format, &record, "\n").render(), expected);
        }
    }
}
