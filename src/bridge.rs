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

//! Bridge from the `log` crate facade into the file sink.
//!
//! Hosts that log through [`log`] macros rather than the provider API can
//! route everything into the sink with [`install`]. The record target
//! becomes the category; event ids, state, and exceptions have no `log`
//! crate equivalent and stay at their defaults.

use crate::Error;
use crate::EventId;
use crate::FileLoggerProvider;
use crate::LevelFilter;

/// A [`log::Log`] implementation backed by a [`FileLoggerProvider`].
#[derive(Debug)]
pub struct LogBridge {
    provider: FileLoggerProvider,
}

impl LogBridge {
    pub fn new(provider: FileLoggerProvider) -> LogBridge {
        LogBridge { provider }
    }
}

impl log::Log for LogBridge {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        self.provider
            .config()
            .log_level
            .enabled(metadata.level().into())
    }

    fn log(&self, record: &log::Record) {
        let logger = self.provider.create_logger(record.target());
        let message = record.args().to_string();
        let result = logger.log(
            record.level().into(),
            EventId::default(),
            message.as_str(),
            None,
            |state, _| state.to_string(),
        );
        if let Err(err) = result {
            handle_error(record, &err);
        }
    }

    fn flush(&self) {
        // Every append flushes before returning; nothing is buffered.
    }
}

fn handle_error(record: &log::Record, error: &Error) {
    eprintln!(
        "error performing logging.\n    attempted to log: {args}\n    error: {error}",
        args = record.args(),
    );
}

/// Sets up the `log` crate global logger to write into the file sink.
///
/// The global maximum level is derived from the configured minimum severity,
/// so disabled records are dropped inside the `log` macros already.
///
/// # Errors
///
/// Returns an error if the `log` crate global logger has already been set.
pub fn try_install(provider: FileLoggerProvider) -> Result<(), log::SetLoggerError> {
    let max_level = max_level(provider.config().log_level);
    log::set_boxed_logger(Box::new(LogBridge::new(provider)))?;
    log::set_max_level(max_level);
    Ok(())
}

/// Sets up the `log` crate global logger to write into the file sink.
///
/// # Panics
///
/// Panics if the `log` crate global logger has already been set.
pub fn install(provider: FileLoggerProvider) {
    try_install(provider)
        .expect("kekupload_file_logging::bridge::install must be called before the log crate global logger is initialized");
}

fn max_level(filter: LevelFilter) -> log::LevelFilter {
    match filter {
        LevelFilter::Trace => log::LevelFilter::Trace,
        LevelFilter::Debug => log::LevelFilter::Debug,
        LevelFilter::Information => log::LevelFilter::Info,
        LevelFilter::Warning => log::LevelFilter::Warn,
        // The log crate has no Critical level; Critical records arrive as
        // Error from the macros.
        LevelFilter::Error | LevelFilter::Critical => log::LevelFilter::Error,
        LevelFilter::Off => log::LevelFilter::Off,
    }
}
