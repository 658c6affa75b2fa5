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

//! The shape of a rendered log line.
//!
//! A [`Format`] pairs a template with an ordered list of [`Attribute`]s. Each `%@` placeholder in
//! the template is replaced, left to right, by the next rendered attribute. `%%` stands for a
//! literal `%`.

use crate::Error;

pub(crate) mod date;

/// The placeholder consumed by one attribute.
pub(crate) const PLACEHOLDER: &str = "%@";

/// A field that can be embedded in a log line.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Attribute {
    /// The uppercase level of the record, e.g. `FATAL`.
    Level,
    /// The file that issued the record.
    FileName {
        /// Whether to keep the directories of the path.
        full_path: bool,
        /// Whether to keep the extension of the file.
        extension: bool,
    },
    /// The line of the call site.
    Line,
    /// The column of the call site.
    Column,
    /// The function of the call site.
    Function,
    /// The joined message.
    Message,
    /// The time the record was created, rendered with the given pattern, e.g. `HH:mm:ss`.
    ///
    /// See [`Attribute::date`] for the supported tokens.
    Date(String),
}

impl Attribute {
    /// Create a [`Attribute::FileName`].
    pub fn file_name(full_path: bool, extension: bool) -> Attribute {
        Attribute::FileName {
            full_path,
            extension,
        }
    }

    /// Create a [`Attribute::Date`] with the given pattern.
    ///
    /// The pattern uses the usual date format tokens:
    ///
    /// | Token            | Meaning                                   |
    /// |------------------|-------------------------------------------|
    /// | `yyyy`, `yy`     | calendar year, two-digit year             |
    /// | `YYYY`, `YY`     | week-based year, two-digit week-based year |
    /// | `M`, `MM`        | month, zero padded month                  |
    /// | `MMM`, `MMMM`    | abbreviated and full month name           |
    /// | `d`, `dd`        | day of month                              |
    /// | `D`, `DDD`       | day of year                               |
    /// | `H`, `HH`        | hour (0-23)                               |
    /// | `h`, `hh`        | hour (1-12)                               |
    /// | `m`, `mm`        | minute                                    |
    /// | `s`, `ss`        | second                                    |
    /// | `S`..`SSSSSSSSS` | fraction of second                        |
    /// | `a`              | AM/PM                                     |
    /// | `E`..`EEEE`      | abbreviated and full weekday name         |
    /// | `Z`, `ZZZZZ`     | offset as `+0800` and `+08:00`            |
    /// | `z`              | time zone abbreviation                    |
    ///
    /// Text between single quotes is copied verbatim (`''` is a single quote), as is any other
    /// character.
    pub fn date(pattern: impl Into<String>) -> Attribute {
        Attribute::Date(pattern.into())
    }
}

/// The template and attributes that define how a log line looks.
///
/// Formats with no attributes, whether [unstructured](Format::unstructured) or built from an empty
/// list, render the bare message: both the template and the terminator are ignored.
///
/// # Examples
///
/// ```
/// use timberline::Attribute;
/// use timberline::Format;
///
/// let format = Format::new("%@ - %@", [Attribute::Level, Attribute::Message]);
/// assert_eq!(format.placeholders(), 2);
///
/// assert_ne!(Format::unstructured(""), Format::new("", []));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Format {
    template: String,
    attributes: Option<Vec<Attribute>>,
}

impl Default for Format {
    /// The default format, rendering lines such as:
    ///
    /// ```text
    /// [FATAL 16:12:24 handler.rs:21] boom
    /// ```
    fn default() -> Self {
        Format::new(
            "[%@ %@ %@:%@] %@",
            [
                Attribute::Level,
                Attribute::date("HH:mm:ss"),
                Attribute::file_name(false, true),
                Attribute::Line,
                Attribute::Message,
            ],
        )
    }
}

impl Format {
    /// Create a new format with the given template and attributes.
    ///
    /// The template should contain one `%@` per attribute. A mismatch does not fail here: surplus
    /// attributes are dropped and surplus placeholders are rendered as-is. Use
    /// [`Format::try_new`] to reject mismatched formats up front.
    pub fn new(template: impl Into<String>, attributes: impl IntoIterator<Item = Attribute>) -> Self {
        Self {
            template: template.into(),
            attributes: Some(attributes.into_iter().collect()),
        }
    }

    /// Create a new format, checking that the template consumes every attribute exactly once.
    ///
    /// # Errors
    ///
    /// Return an error if the number of `%@` placeholders differs from the number of attributes.
    pub fn try_new(
        template: impl Into<String>,
        attributes: impl IntoIterator<Item = Attribute>,
    ) -> Result<Self, Error> {
        let format = Format::new(template, attributes);
        let placeholders = format.placeholders();
        let attributes = format.attributes.as_ref().map_or(0, Vec::len);
        if placeholders != attributes {
            return Err(Error::new("template placeholders do not match attributes")
                .with_context("template", &format.template)
                .with_context("placeholders", placeholders)
                .with_context("attributes", attributes));
        }
        Ok(format)
    }

    /// Create a format without attributes. Records are rendered as their bare message.
    pub fn unstructured(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            attributes: None,
        }
    }

    /// The template string.
    pub fn template(&self) -> &str {
        &self.template
    }

    /// The attributes, or `None` for an [unstructured](Format::unstructured) format.
    pub fn attributes(&self) -> Option<&[Attribute]> {
        self.attributes.as_deref()
    }

    /// Count the `%@` placeholders of the template.
    pub fn placeholders(&self) -> usize {
        Segments::new(&self.template)
            .filter(|s| matches!(s, Segment::Placeholder))
            .count()
    }
}

/// A piece of a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Segment<'a> {
    Literal(&'a str),
    Placeholder,
}

/// Split a template into literal text and placeholders. `%%` yields a literal `%`.
pub(crate) struct Segments<'a> {
    rest: &'a str,
}

impl<'a> Segments<'a> {
    pub(crate) fn new(template: &'a str) -> Self {
        Self { rest: template }
    }
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }

        if let Some(rest) = self.rest.strip_prefix(PLACEHOLDER) {
            self.rest = rest;
            return Some(Segment::Placeholder);
        }
        if let Some(rest) = self.rest.strip_prefix("%%") {
            self.rest = rest;
            return Some(Segment::Literal("%"));
        }

        // a lone '%' is copied as-is, so search past the first char
        let first = self.rest.chars().next().map_or(1, char::len_utf8);
        let end = self.rest[first..]
            .find('%')
            .map_or(self.rest.len(), |i| i + first);
        let (literal, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(Segment::Literal(literal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_equality() {
        assert_eq!(Attribute::Level, Attribute::Level);
        assert_ne!(Attribute::Line, Attribute::Column);
        assert_eq!(Attribute::file_name(true, false), Attribute::file_name(true, false));
        assert_ne!(Attribute::file_name(true, false), Attribute::file_name(false, false));
        assert_ne!(Attribute::file_name(true, false), Attribute::file_name(true, true));
        assert_eq!(Attribute::date("HH:mm"), Attribute::date("HH:mm"));
        assert_ne!(Attribute::date("HH:mm"), Attribute::date("HH:mm:ss"));
    }

    #[test]
    fn test_format_equality() {
        let lhs = Format::new("%@ %@", [Attribute::Level, Attribute::Message]);
        let rhs = Format::new("%@ %@", [Attribute::Level, Attribute::Message]);
        assert_eq!(lhs, rhs);

        let reordered = Format::new("%@ %@", [Attribute::Message, Attribute::Level]);
        assert_ne!(lhs, reordered);

        let shorter = Format::new("%@ %@", [Attribute::Level]);
        assert_ne!(lhs, shorter);

        let other_template = Format::new("%@-%@", [Attribute::Level, Attribute::Message]);
        assert_ne!(lhs, other_template);

        assert_eq!(Format::default(), Format::default());
        assert_eq!(Format::unstructured(""), Format::unstructured(""));
        assert_ne!(Format::unstructured(""), Format::new("", []));
        assert_ne!(Format::new("", []), Format::new("", [Attribute::Message]));
    }

    #[test]
    fn test_default_format() {
        let format = Format::default();
        assert_eq!(format.template(), "[%@ %@ %@:%@] %@");
        assert_eq!(format.placeholders(), 5);
        assert_eq!(
            format.attributes().unwrap(),
            [
                Attribute::Level,
                Attribute::date("HH:mm:ss"),
                Attribute::file_name(false, true),
                Attribute::Line,
                Attribute::Message,
            ]
        );
    }

    #[test]
    fn test_segments() {
        let segments: Vec<_> = Segments::new("[%@] 100%% %d %@").collect();
        assert_eq!(
            segments,
            [
                Segment::Literal("["),
                Segment::Placeholder,
                Segment::Literal("] 100"),
                Segment::Literal("%"),
                Segment::Literal(" "),
                Segment::Literal("%d "),
                Segment::Placeholder,
            ]
        );
        assert_eq!(Segments::new("").count(), 0);
        assert_eq!(Segments::new("%").collect::<Vec<_>>(), [Segment::Literal("%")]);
    }

    #[test]
    fn test_try_new_checks_arity() {
        assert!(Format::try_new("%@:%@", [Attribute::Line, Attribute::Column]).is_ok());
        assert!(Format::try_new("no placeholders", []).is_ok());

        let err = Format::try_new("%@", [Attribute::Line, Attribute::Column]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "template placeholders do not match attributes, context: { template: %@, placeholders: 1, attributes: 2 }"
        );
        assert!(Format::try_new("%@ %@ 100%%", [Attribute::Message]).is_err());
    }
}
