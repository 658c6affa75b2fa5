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

use std::collections::HashMap;
use std::sync::PoisonError;
use std::sync::RwLock;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::AtomicU8;
use std::sync::atomic::Ordering;

use crate::Level;
use crate::file_name;
use crate::filter::FilterResult;

/// Decides which records are written.
///
/// A record passes when its level is at least the minimum level of its source file, if the file
/// was [registered](LevelPolicy::register_file). A file registration replaces the global settings
/// entirely: neither the global minimum level nor the enabled flag is consulted for that file.
/// Records from any other file pass when the policy is enabled and their level is at least the
/// global minimum level.
///
/// Files are keyed by their stem, so `/src/net/client.rs` and `client.rs` share an entry.
///
/// # Examples
///
/// ```
/// use timberline::Level;
/// use timberline::filter::LevelPolicy;
///
/// let policy = LevelPolicy::new(Level::Fatal);
/// policy.register_file(Level::Error, "/app/src/net/client.rs");
///
/// assert!(policy.admits(Level::Error, "client.rs"));
/// assert!(!policy.admits(Level::Error, "/app/src/main.rs"));
/// ```
#[derive(Debug)]
pub struct LevelPolicy {
    enabled: AtomicBool,
    min_level: AtomicU8,
    files: RwLock<HashMap<String, Level>>,
}

impl Default for LevelPolicy {
    fn default() -> Self {
        LevelPolicy::new(Level::Debug)
    }
}

impl LevelPolicy {
    /// Create an enabled policy with the given global minimum level.
    pub fn new(min_level: Level) -> Self {
        Self {
            enabled: AtomicBool::new(true),
            min_level: AtomicU8::new(min_level as u8),
            files: RwLock::new(HashMap::new()),
        }
    }

    /// Whether records from unregistered files may pass.
    pub fn enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }

    /// Turn the policy on or off for unregistered files.
    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Relaxed);
    }

    /// The global minimum level.
    pub fn min_level(&self) -> Level {
        Level::from_u8(self.min_level.load(Ordering::Relaxed))
    }

    /// Set the global minimum level.
    pub fn set_min_level(&self, level: Level) {
        self.min_level.store(level as u8, Ordering::Relaxed);
    }

    /// Set the minimum level of the file at `path`, replacing any previous registration.
    pub fn register_file(&self, level: Level, path: &str) {
        let key = file_name(path, false, false).to_owned();
        let mut files = self.files.write().unwrap_or_else(PoisonError::into_inner);
        files.insert(key, level);
    }

    /// The minimum level registered for the file at `path`, if any.
    pub fn file_level(&self, path: &str) -> Option<Level> {
        let key = file_name(path, false, false);
        let files = self.files.read().unwrap_or_else(PoisonError::into_inner);
        files.get(key).copied()
    }

    /// Check a record against the registration of its file.
    ///
    /// Return [`FilterResult::Neutral`] if the file is not registered.
    pub fn check_file(&self, level: Level, path: &str) -> FilterResult {
        match self.file_level(path) {
            Some(file_level) if level >= file_level => FilterResult::Accept,
            Some(_) => FilterResult::Reject,
            None => FilterResult::Neutral,
        }
    }

    /// Whether a record of `level` issued from `path` should be written.
    pub fn admits(&self, level: Level, path: &str) -> bool {
        match self.check_file(level, path) {
            FilterResult::Accept => true,
            FilterResult::Reject => false,
            FilterResult::Neutral => self.enabled() && level >= self.min_level(),
        }
    }

    /// Whether a record of `level` could be written from some file.
    pub fn admits_any(&self, level: Level) -> bool {
        if self.enabled() && level >= self.min_level() {
            return true;
        }
        let files = self.files.read().unwrap_or_else(PoisonError::into_inner);
        files.values().any(|file_level| level >= *file_level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_threshold() {
        let policy = LevelPolicy::new(Level::Info);
        assert!(!policy.admits(Level::Debug, "main.rs"));
        assert!(!policy.admits(Level::Trace, "main.rs"));
        assert!(policy.admits(Level::Info, "main.rs"));
        assert!(policy.admits(Level::Fatal, "main.rs"));

        policy.set_min_level(Level::Off);
        assert!(!policy.admits(Level::Fatal, "main.rs"));

        policy.set_min_level(Level::All);
        assert!(policy.admits(Level::Debug, "main.rs"));
    }

    #[test]
    fn test_disabled_policy_rejects_unregistered_files() {
        let policy = LevelPolicy::default();
        policy.set_enabled(false);
        assert!(!policy.enabled());
        assert!(!policy.admits(Level::Fatal, "main.rs"));

        policy.set_enabled(true);
        assert!(policy.admits(Level::Fatal, "main.rs"));
    }

    #[test]
    fn test_file_level_overrides_global_threshold() {
        let policy = LevelPolicy::new(Level::Fatal);
        policy.register_file(Level::Error, "/a/b/handler.rs");

        assert_eq!(policy.check_file(Level::Error, "handler.rs"), FilterResult::Accept);
        assert!(policy.admits(Level::Error, "/other/dir/handler.rs"));
        assert!(!policy.admits(Level::Warn, "handler.rs"));
        assert!(!policy.admits(Level::Error, "model.rs"));
        assert!(policy.admits(Level::Fatal, "model.rs"));
    }

    #[test]
    fn test_file_level_can_be_stricter_than_global() {
        let policy = LevelPolicy::new(Level::Debug);
        policy.register_file(Level::Fatal, "/src/noisy.rs");

        assert_eq!(policy.check_file(Level::Error, "noisy.rs"), FilterResult::Reject);
        assert!(!policy.admits(Level::Error, "noisy.rs"));
        assert!(policy.admits(Level::Error, "quiet.rs"));
    }

    #[test]
    fn test_file_level_ignores_enabled_flag() {
        let policy = LevelPolicy::default();
        policy.register_file(Level::Warn, "worker.rs");
        policy.set_enabled(false);

        assert!(policy.admits(Level::Warn, "worker.rs"));
        assert!(!policy.admits(Level::Warn, "main.rs"));
    }

    #[test]
    fn test_register_file_last_write_wins() {
        let policy = LevelPolicy::default();
        assert_eq!(policy.file_level("a/b/c.rs"), None);

        policy.register_file(Level::Error, "a/b/c.rs");
        policy.register_file(Level::Error, "a/b/c.rs");
        assert_eq!(policy.file_level("c"), Some(Level::Error));

        policy.register_file(Level::Trace, "/elsewhere/c.txt");
        assert_eq!(policy.file_level("c.rs"), Some(Level::Trace));
        assert_eq!(policy.check_file(Level::Trace, "c.rs"), FilterResult::Accept);
    }

    #[test]
    fn test_admits_any() {
        let policy = LevelPolicy::new(Level::Error);
        assert!(policy.admits_any(Level::Error));
        assert!(!policy.admits_any(Level::Info));

        policy.register_file(Level::Info, "verbose.rs");
        assert!(policy.admits_any(Level::Info));
        assert!(!policy.admits_any(Level::Debug));

        policy.set_enabled(false);
        assert!(!policy.admits_any(Level::Trace));
        assert!(policy.admits_any(Level::Warn));
    }
}
