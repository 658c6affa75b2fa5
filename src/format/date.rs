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

use jiff::Zoned;

/// Render `zoned` with a date pattern such as `dd/MM/yyyy HH:mm:ss Z`.
///
/// The pattern is translated to a [`jiff::fmt::strtime`] format first. Should jiff reject it, the
/// time is rendered as RFC 3339 instead.
pub(crate) fn render(pattern: &str, zoned: &Zoned) -> String {
    format_or_fallback(&to_strtime(pattern), zoned)
}

fn format_or_fallback(format: &str, zoned: &Zoned) -> String {
    jiff::fmt::strtime::format(format.as_bytes(), zoned)
        .unwrap_or_else(|_| zoned.timestamp().to_string())
}

/// Translate a date pattern to a strtime format.
pub(crate) fn to_strtime(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() * 2);
    let mut chars = pattern.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\'' => {
                if chars.peek() == Some(&'\'') {
                    chars.next();
                    out.push('\'');
                    continue;
                }
                // quoted literal, up to the closing quote or the end of the pattern
                while let Some(c) = chars.next() {
                    if c == '\'' {
                        if chars.peek() == Some(&'\'') {
                            chars.next();
                            out.push('\'');
                            continue;
                        }
                        break;
                    }
                    push_literal(&mut out, c);
                }
            }
            c if c.is_ascii_alphabetic() => {
                let mut width = 1;
                while chars.peek() == Some(&c) {
                    chars.next();
                    width += 1;
                }
                match specifier(c, width) {
                    Some(spec) => out.push_str(&spec),
                    None => (0..width).for_each(|_| push_literal(&mut out, c)),
                }
            }
            c => push_literal(&mut out, c),
        }
    }

    out
}

fn push_literal(out: &mut String, c: char) {
    if c == '%' {
        out.push_str("%%");
    } else {
        out.push(c);
    }
}

fn specifier(token: char, width: usize) -> Option<String> {
    let spec = match (token, width) {
        ('y', 2) => "%y",
        ('y', _) => "%Y",
        ('Y', 2) => "%g",
        ('Y', _) => "%G",
        ('M' | 'L', 1) => "%-m",
        ('M' | 'L', 2) => "%m",
        ('M' | 'L', 3) => "%b",
        ('M' | 'L', _) => "%B",
        ('d', 1) => "%-d",
        ('d', _) => "%d",
        ('D', 1) => "%-j",
        ('D', _) => "%j",
        ('H', 1) => "%-H",
        ('H', _) => "%H",
        ('h', 1) => "%-I",
        ('h', _) => "%I",
        ('m', 1) => "%-M",
        ('m', _) => "%M",
        ('s', 1) => "%-S",
        ('s', _) => "%S",
        ('S', n) => return Some(format!("%{}f", n.min(9))),
        ('a', _) => "%p",
        ('E', 1..=3) => "%a",
        ('E', _) => "%A",
        ('Z', 1..=3) => "%z",
        ('Z', _) => "%:z",
        ('z', _) => "%Z",
        _ => return None,
    };
    Some(spec.to_owned())
}
