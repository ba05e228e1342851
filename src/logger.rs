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

//! The per-category logger and the provider that creates them.

use std::fmt;
use std::fs;
use std::sync::Arc;

use jiff::Zoned;
use jiff::fmt::strtime;
use serde::Serialize;

use crate::Config;
use crate::Error;
use crate::EventId;
use crate::Level;
use crate::Record;
use crate::Scope;
use crate::append::FileAppend;
use crate::layout::TemplateLayout;

/// Creates [`FileLogger`]s that share one config and one file appender.
///
/// Construction is the load-time boundary: the log directory is created and
/// the configured date/time format is validated here, so per-record calls
/// only ever fail with [`Error::Write`].
///
/// # Examples
///
/// ```no_run
/// use kekupload_file_logging::Config;
/// use kekupload_file_logging::FileLoggerProvider;
/// use kekupload_file_logging::Level;
///
/// # fn main() -> Result<(), kekupload_file_logging::Error> {
/// let provider = FileLoggerProvider::new(Config::default())?;
/// let logger = provider.create_logger("UploadService");
/// logger.log_message(Level::Information, "upload finished")?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct FileLoggerProvider {
    config: Arc<Config>,
    append: Arc<FileAppend>,
}

impl FileLoggerProvider {
    /// Validates `config` and prepares the log directory.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when the date/time format string is not a
    /// valid `strftime` format, and [`Error::Io`] when the log directory
    /// cannot be created.
    pub fn new(config: Config) -> Result<FileLoggerProvider, Error> {
        if strtime::format(&config.date_time_format, &Zoned::now()).is_err() {
            return Err(Error::Config(format!(
                "unsupported date/time format: {}",
                config.date_time_format
            )));
        }
        fs::create_dir_all(&config.log_path)?;
        let append = Arc::new(FileAppend::new(&config));
        Ok(FileLoggerProvider {
            config: Arc::new(config),
            append,
        })
    }

    /// Creates a logger for the given category name. Loggers are cheap to
    /// create and clone; they share the provider's config and appender.
    pub fn create_logger(&self, category: impl Into<String>) -> FileLogger {
        FileLogger {
            category: category.into(),
            layout: TemplateLayout::new(self.config.clone()),
            config: self.config.clone(),
            append: self.append.clone(),
        }
    }

    /// The loaded configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }
}

/// Writes log records for one category through the
/// filter -> layout -> file pipeline.
#[derive(Debug, Clone)]
pub struct FileLogger {
    category: String,
    config: Arc<Config>,
    layout: TemplateLayout,
    append: Arc<FileAppend>,
}

impl FileLogger {
    /// Whether records at `level` would be written. Checked before any
    /// formatting work, both here and by callers that want to avoid
    /// building expensive state.
    pub fn is_enabled(&self, level: Level) -> bool {
        self.config.log_level.enabled(level)
    }

    /// Writes one log record.
    ///
    /// `formatter` produces the human-readable message from the state and
    /// the optional error; it runs only when `level` passes the filter.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Write`] when the append fails. The write is not
    /// retried and nothing is buffered.
    pub fn log<S, F>(
        &self,
        level: Level,
        event_id: EventId,
        state: &S,
        exception: Option<&(dyn std::error::Error + 'static)>,
        formatter: F,
    ) -> Result<(), Error>
    where
        S: fmt::Display + ?Sized,
        F: FnOnce(&S, Option<&(dyn std::error::Error + 'static)>) -> String,
    {
        if !self.is_enabled(level) {
            return Ok(());
        }
        let now = self.append.now();
        let message = formatter(state, exception);
        let record = Record {
            level,
            event_id: &event_id,
            category: &self.category,
            state: &state,
            exception,
            message: &message,
        };
        let line = self.layout.format(&record, &now);
        let path = self.append.file_path(&now);
        self.append.append(&path, &line)
    }

    /// Writes a plain message at `level` with a default event id and no
    /// state or error beyond the message itself.
    pub fn log_message(&self, level: Level, message: impl fmt::Display) -> Result<(), Error> {
        let text = message.to_string();
        self.log(level, EventId::default(), text.as_str(), None, |state, _| {
            state.to_string()
        })
    }

    /// Opens a nested logging scope around `state`.
    ///
    /// A synthetic `New Scope: <state>` record is written immediately at
    /// Information level; closing (or dropping) the returned scope writes a
    /// matching `Scope Ended (Disposed): <state>` record exactly once. With
    /// `FormatScopeAsJson` set, the state is rendered as pretty-printed JSON
    /// in both records.
    ///
    /// When `IncludeScope` is off, the `New Scope` record is still written
    /// but `Ok(None)` is returned, so no `Scope Ended` record can ever
    /// follow. This mirrors the original plugin's behavior.
    ///
    /// Write failures for the `New Scope` record surface here; a failure
    /// while writing the `Scope Ended` record happens during close or drop
    /// and is reported to stderr instead.
    pub fn begin_scope<T>(&self, state: T) -> Result<Option<Scope<T>>, Error>
    where
        T: fmt::Display + Serialize + Send + 'static,
    {
        let text = self.scope_text(&state);
        self.log(Level::Information, EventId::default(), &state, None, |_, _| {
            format!("New Scope: {text}")
        })?;

        if !self.config.include_scope {
            return Ok(None);
        }

        let logger = self.clone();
        Ok(Some(Scope::new(state, move |state: &T| {
            let text = logger.scope_text(state);
            let result = logger.log(Level::Information, EventId::default(), state, None, |_, _| {
                format!("Scope Ended (Disposed): {text}")
            });
            if let Err(err) = result {
                eprintln!("failed to write scope-ended record: {err}");
            }
        })))
    }

    fn scope_text<T: fmt::Display + Serialize>(&self, state: &T) -> String {
        if self.config.format_scope_as_json {
            serde_json::to_string_pretty(state).unwrap_or_else(|_| state.to_string())
        } else {
            state.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_date_time_format_rejected_at_load() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            log_path: dir.path().to_path_buf(),
            date_time_format: "%".to_string(),
            ..Config::default()
        };
        let err = FileLoggerProvider::new(config).unwrap_err();
        assert!(matches!(err, Error::Config(_)), "{err}");
    }

    #[test]
    fn test_provider_creates_log_directory() {
        let dir = tempfile::tempdir().unwrap();
        let log_path = dir.path().join("nested").join("logs");
        let config = Config {
            log_path: log_path.clone(),
            ..Config::default()
        };
        FileLoggerProvider::new(config).unwrap();
        assert!(log_path.is_dir());
    }

    #[test]
    fn test_is_enabled_follows_config_minimum() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            log_path: dir.path().to_path_buf(),
            log_level: crate::LevelFilter::Warning,
            ..Config::default()
        };
        let logger = FileLoggerProvider::new(config).unwrap().create_logger("T");
        assert!(!logger.is_enabled(Level::Information));
        assert!(logger.is_enabled(Level::Warning));
        assert!(logger.is_enabled(Level::Critical));
    }

    #[test]
    fn test_filtered_record_runs_no_formatter() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            log_path: dir.path().to_path_buf(),
            log_level: crate::LevelFilter::Error,
            ..Config::default()
        };
        let logger = FileLoggerProvider::new(config).unwrap().create_logger("T");
        logger
            .log(Level::Debug, EventId::default(), "state", None, |_, _| {
                panic!("formatter must not run for filtered records")
            })
            .unwrap();
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
