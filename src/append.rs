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

//! The date-named file appender.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Mutex;
use std::sync::PoisonError;

use jiff::Zoned;
use jiff::tz::TimeZone;

use crate::Config;
use crate::Error;
use crate::clock::Clock;

/// Appends rendered lines to date-named files in the log directory.
///
/// File names follow `<prefix><yyyyMMdd><suffix>.<extension>`; a new day
/// yields a new name, so rotation is implicit. No rollover event fires and
/// no old files are cleaned up.
///
/// Every append is open-write-flush-close under a mutex, so concurrent
/// loggers sharing one appender never interleave partial lines. There is no
/// buffering: a line is durable (or has failed) when the call returns.
#[derive(Debug)]
pub struct FileAppend {
    log_dir: PathBuf,
    prefix: String,
    suffix: String,
    extension: String,
    use_utc: bool,
    clock: Clock,
    write_lock: Mutex<()>,
}

impl FileAppend {
    pub fn new(config: &Config) -> FileAppend {
        FileAppend {
            log_dir: config.log_path.clone(),
            prefix: config.file_prefix.clone(),
            suffix: config.file_suffix.clone(),
            extension: config.file_extension.clone(),
            use_utc: config.use_utc,
            clock: Clock::DefaultClock,
            write_lock: Mutex::new(()),
        }
    }

    #[cfg(test)]
    fn with_clock(config: &Config, clock: Clock) -> FileAppend {
        FileAppend {
            clock,
            ..FileAppend::new(config)
        }
    }

    /// The timestamp used for both the line content and the file name of
    /// one logging call, in UTC or the system time zone per config.
    pub fn now(&self) -> Zoned {
        let now = self.clock.now();
        if self.use_utc {
            now.with_time_zone(TimeZone::UTC)
        } else {
            now
        }
    }

    /// The target file for a record observed at `now`.
    ///
    /// The date portion is always `%Y%m%d`, independent of the configured
    /// `DateTimeFormat` used inside line content.
    pub fn file_path(&self, now: &Zoned) -> PathBuf {
        let file_name = format!(
            "{}{}{}.{}",
            self.prefix,
            now.strftime("%Y%m%d"),
            self.suffix,
            self.extension
        );
        self.log_dir.join(file_name)
    }

    /// Appends `text` verbatim to the file at `path`, creating it if absent.
    /// The parent directory is created by the provider at load time; if it
    /// vanished since, the append fails.
    pub fn append(&self, path: &Path, text: &str) -> Result<(), Error> {
        let _guard = self
            .write_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let write = |path: &Path| {
            let mut file = OpenOptions::new().append(true).create(true).open(path)?;
            file.write_all(text.as_bytes())?;
            file.flush()
        };
        write(path).map_err(|source| Error::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::str::FromStr;

    use jiff::Zoned;

    use super::*;
    use crate::clock::ManualClock;

    fn zoned(s: &str) -> Zoned {
        Zoned::from_str(s).unwrap()
    }

    #[test]
    fn test_file_name_from_prefix_suffix_extension() {
        let config = Config {
            file_prefix: "P".to_string(),
            file_suffix: "S".to_string(),
            ..Config::default()
        };
        let append = FileAppend::new(&config);
        let path = append.file_path(&zoned("2024-03-07T01:02:03[UTC]"));
        assert_eq!(path, PathBuf::from("logs").join("PS20240307S.log"));
    }

    #[test]
    fn test_default_file_name() {
        let append = FileAppend::new(&Config::default());
        let path = append.file_path(&zoned("2024-03-07T23:59:59[UTC]"));
        assert_eq!(
            path.file_name().unwrap(),
            "KekUploadServerLog20240307.log"
        );
    }

    #[test]
    fn test_new_day_yields_new_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            log_path: dir.path().to_path_buf(),
            ..Config::default()
        };
        let clock = Clock::ManualClock(ManualClock::new(zoned("2024-03-07T23:59:59[UTC]")));
        let mut append = FileAppend::with_clock(&config, clock);

        let day_one = append.now();
        append.append(&append.file_path(&day_one), "last line of the day\n").unwrap();

        append.clock.set_now(zoned("2024-03-08T00:00:01[UTC]"));
        let day_two = append.now();
        append.append(&append.file_path(&day_two), "first line of the day\n").unwrap();

        let day_one_file = dir.path().join("KekUploadServerLog20240307.log");
        let day_two_file = dir.path().join("KekUploadServerLog20240308.log");
        assert_eq!(
            fs::read_to_string(day_one_file).unwrap(),
            "last line of the day\n"
        );
        assert_eq!(
            fs::read_to_string(day_two_file).unwrap(),
            "first line of the day\n"
        );
    }

    #[test]
    fn test_appends_accumulate() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.log");
        let append = FileAppend::new(&Config::default());

        append.append(&path, "one\n").unwrap();
        append.append(&path, "two\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "one\ntwo\n");
    }

    #[test]
    fn test_missing_directory_is_write_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vanished").join("a.log");
        let append = FileAppend::new(&Config::default());

        let err = append.append(&path, "line\n").unwrap_err();
        assert!(matches!(err, Error::Write { .. }), "{err}");
    }

    #[test]
    fn test_utc_flag_changes_date() {
        let config = Config {
            use_utc: true,
            ..Config::default()
        };
        // 23:30 in UTC-5 is already the next day in UTC.
        let clock = Clock::ManualClock(ManualClock::new(zoned("2024-03-07T23:30:00-05:00[-05:00]")));
        let append = FileAppend::with_clock(&config, clock);
        let now = append.now();
        assert_eq!(
            append.file_path(&now).file_name().unwrap(),
            "KekUploadServerLog20240308.log"
        );
    }
}
