// Copyright 2026 GamePowerX
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

//! Log severity levels and the minimum-level filter.

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

/// The severity of a log record, from most to least verbose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    Trace,
    Debug,
    Information,
    Warning,
    Error,
    Critical,
}

impl Level {
    /// The level name as it appears in the `{Level}` placeholder.
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Trace => "Trace",
            Level::Debug => "Debug",
            Level::Information => "Information",
            Level::Warning => "Warning",
            Level::Error => "Error",
            Level::Critical => "Critical",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<log::Level> for Level {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => Level::Error,
            log::Level::Warn => Level::Warning,
            log::Level::Info => Level::Information,
            log::Level::Debug => Level::Debug,
            log::Level::Trace => Level::Trace,
        }
    }
}

/// The minimum severity a record must have to be written.
///
/// From least to most restrictive, the variants are `Trace`, `Debug`,
/// `Information`, `Warning`, `Error`, `Critical` and `Off`.
///
/// If the filter is set to `Information`, it will allow `Information`,
/// `Warning`, `Error`, and `Critical` records.
///
/// If the filter is set to `Off`, it will reject all records.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub enum LevelFilter {
    Trace,
    Debug,
    #[default]
    Information,
    Warning,
    Error,
    Critical,
    #[serde(alias = "None")]
    Off,
}

impl LevelFilter {
    /// Whether a record at `level` passes this filter.
    ///
    /// No side effects; callers check this before any formatting work.
    pub fn enabled(self, level: Level) -> bool {
        (level as u8) >= (self as u8)
    }
}

impl From<Level> for LevelFilter {
    fn from(level: Level) -> Self {
        match level {
            Level::Trace => LevelFilter::Trace,
            Level::Debug => LevelFilter::Debug,
            Level::Information => LevelFilter::Information,
            Level::Warning => LevelFilter::Warning,
            Level::Error => LevelFilter::Error,
            Level::Critical => LevelFilter::Critical,
        }
    }
}
