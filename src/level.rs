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
use std::str::FromStr;

use crate::Error;

/// The severity of a log record.
///
/// Levels are totally ordered by their ordinal, from the most permissive to the most severe:
///
/// ```text
/// All < Debug < Trace < Info < Warn < Error < Fatal < Off
/// ```
///
/// A record of level `p` passes a threshold of level `q` if `p >= q`. `All` and `Off` only make
/// sense as thresholds: `All` lets everything through, `Off` silences a scope entirely.
///
/// # Examples
///
/// ```
/// use timberline::Level;
///
/// assert!(Level::Debug < Level::Trace);
/// assert_eq!(Level::from_ordinal(6), Some(Level::Fatal));
/// assert_eq!(Level::from_ordinal(8), None);
/// assert_eq!(Level::Warn.as_str(), "WARN");
/// assert_eq!(Level::Warn.to_string(), "Warn");
/// ```
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// All levels.
    All = 0,
    /// Fine-grained informational events that are most useful to debug an application.
    Debug = 1,
    /// Finer-grained informational events than `Debug`.
    Trace = 2,
    /// Informational messages that highlight the progress of the application.
    Info = 3,
    /// Potentially harmful situations.
    Warn = 4,
    /// Error events that might still allow the application to continue running.
    Error = 5,
    /// Very severe error events that will presumably lead the application to abort.
    Fatal = 6,
    /// The highest possible rank, turns logging off.
    Off = 7,
}

impl Level {
    const ALL: [Level; 8] = [
        Level::All,
        Level::Debug,
        Level::Trace,
        Level::Info,
        Level::Warn,
        Level::Error,
        Level::Fatal,
        Level::Off,
    ];

    /// Return the level with the given ordinal, or `None` if it is out of `0..=7`.
    pub fn from_ordinal(ordinal: usize) -> Option<Level> {
        Level::ALL.get(ordinal).copied()
    }

    /// Return the ordinal of this level.
    pub fn ordinal(self) -> usize {
        self as usize
    }

    /// Return the uppercase name of this level, as it appears in rendered log lines.
    pub fn as_str(self) -> &'static str {
        match self {
            Level::All => "ALL",
            Level::Debug => "DEBUG",
            Level::Trace => "TRACE",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
            Level::Fatal => "FATAL",
            Level::Off => "OFF",
        }
    }

    /// Return the description of this level.
    pub fn name(self) -> &'static str {
        match self {
            Level::All => "All",
            Level::Debug => "Debug",
            Level::Trace => "Trace",
            Level::Info => "Info",
            Level::Warn => "Warn",
            Level::Error => "Error",
            Level::Fatal => "Fatal",
            Level::Off => "Off",
        }
    }

    pub(crate) fn from_u8(value: u8) -> Level {
        Level::from_ordinal(value as usize).unwrap_or(Level::Off)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Level {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Level::ALL
            .iter()
            .find(|level| level.name().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or_else(|| Error::new("unknown log level").with_context("input", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_are_totally_ordered() {
        for (i, lhs) in Level::ALL.iter().enumerate() {
            for (j, rhs) in Level::ALL.iter().enumerate() {
                assert_eq!(lhs.cmp(rhs), i.cmp(&j), "{lhs} vs {rhs}");
            }
        }

        assert!(Level::All <= Level::All);
        assert!(Level::Off >= Level::All);
        assert!(Level::Debug < Level::Trace && Level::Trace < Level::Info);
        assert!(Level::Debug < Level::Info);
    }

    #[test]
    fn test_from_ordinal() {
        for ordinal in 0..8 {
            let level = Level::from_ordinal(ordinal).unwrap();
            assert_eq!(level.ordinal(), ordinal);
        }
        assert_eq!(Level::from_ordinal(8), None);
        assert_eq!(Level::from_ordinal(usize::MAX), None);
    }

    #[test]
    fn test_descriptions() {
        let names: Vec<String> = Level::ALL.iter().map(|l| l.to_string()).collect();
        assert_eq!(
            names,
            ["All", "Debug", "Trace", "Info", "Warn", "Error", "Fatal", "Off"]
        );
        assert_eq!(Level::Fatal.as_str(), "FATAL");
        assert_eq!(format!("{:>6}", Level::Warn), "  Warn");
    }

    #[test]
    fn test_parse() {
        assert_eq!("warn".parse::<Level>().unwrap(), Level::Warn);
        assert_eq!(" FATAL ".parse::<Level>().unwrap(), Level::Fatal);
        assert_eq!("Off".parse::<Level>().unwrap(), Level::Off);

        let err = "verbose".parse::<Level>().unwrap_err();
        assert!(err.to_string().contains("unknown log level"));
        assert!(err.to_string().contains("verbose"));
    }
}
