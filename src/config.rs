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

//! Sink configuration and the JSON config-file bootstrap.

use std::fs;
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;

use crate::Error;
use crate::LevelFilter;

const README: &str = "This is the config for the KekUpload file logging sink, \
                      for help visit https://github.com/GamePowerX/kekupload-file-logging";

/// All formatting and filtering options of the sink.
///
/// Immutable after load: the provider shares it read-only across every
/// logger it creates, so no further synchronization is needed.
///
/// The JSON field names match the original plugin's `config.json`, so an
/// existing config file keeps working. `DateTimeFormat` is a `strftime`
/// format string, e.g. `%Y-%m-%d %H:%M:%S`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Config {
    /// Pointer for people editing the config file by hand.
    pub readme: String,
    /// Directory the date-named log files are written to.
    pub log_path: PathBuf,
    /// Minimum severity a record must have to be written.
    pub log_level: LevelFilter,
    /// Substitute `{DateTime}` with the record timestamp.
    pub include_date_time: bool,
    /// Substitute `{Level}` with the level name.
    pub include_level: bool,
    /// Substitute `{EventId}` with the event id.
    pub include_event_id: bool,
    /// Substitute `{State}` with the state value's text form.
    pub include_state: bool,
    /// Substitute `{Exception}` with the attached error, if any.
    pub include_exception: bool,
    /// Return scope handles from `begin_scope`, so "Scope Ended" records
    /// can be emitted when scopes close.
    pub include_scope: bool,
    /// Render scope state as pretty-printed JSON instead of its text form.
    pub format_scope_as_json: bool,
    /// Substitute `{Category}` with the logger's category name.
    pub include_category: bool,
    /// `strftime` format for the `{DateTime}` placeholder. Independent of
    /// the fixed `%Y%m%d` date in file names.
    pub date_time_format: String,
    /// The line template; see the crate docs for the recognized tokens.
    pub file_format: String,
    /// Log file extension, without the dot.
    pub file_extension: String,
    /// Log file name prefix, before the date.
    pub file_prefix: String,
    /// Log file name suffix, between the date and the extension.
    pub file_suffix: String,
    /// Take timestamps in UTC instead of the system time zone.
    pub use_utc: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            readme: README.to_string(),
            log_path: PathBuf::from("logs"),
            log_level: LevelFilter::Information,
            include_date_time: true,
            include_level: true,
            include_event_id: false,
            include_state: false,
            include_exception: false,
            include_scope: false,
            format_scope_as_json: false,
            include_category: false,
            date_time_format: "%Y-%m-%d %H:%M:%S".to_string(),
            file_format: "{DateTime} [{Level}] {Category}: {Message}{NewLine}{Exception}"
                .to_string(),
            file_extension: "log".to_string(),
            file_prefix: "KekUploadServerLog".to_string(),
            file_suffix: String::new(),
            use_utc: false,
        }
    }
}

impl Config {
    /// Reads the config from a JSON file, writing the default config there
    /// first when the file does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when the file holds malformed JSON, and
    /// [`Error::Io`] when it cannot be read or created.
    pub fn load_or_create(path: impl AsRef<Path>) -> Result<Config, Error> {
        let path = path.as_ref();
        if !path.exists() {
            let config = Config::default();
            let json = serde_json::to_string_pretty(&config)
                .map_err(|err| Error::Config(err.to_string()))?;
            fs::write(path, json)?;
            return Ok(config);
        }
        let text = fs::read_to_string(path)?;
        serde_json::from_str(&text).map_err(|err| Error::Config(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.log_path, PathBuf::from("logs"));
        assert_eq!(config.log_level, LevelFilter::Information);
        assert!(config.include_date_time);
        assert!(config.include_level);
        assert!(!config.include_event_id);
        assert!(!config.include_state);
        assert!(!config.include_exception);
        assert!(!config.include_scope);
        assert!(!config.format_scope_as_json);
        assert!(!config.include_category);
        assert_eq!(config.date_time_format, "%Y-%m-%d %H:%M:%S");
        assert_eq!(
            config.file_format,
            "{DateTime} [{Level}] {Category}: {Message}{NewLine}{Exception}"
        );
        assert_eq!(config.file_extension, "log");
        assert_eq!(config.file_prefix, "KekUploadServerLog");
        assert_eq!(config.file_suffix, "");
        assert!(!config.use_utc);
    }

    #[test]
    fn test_pascal_case_field_names() {
        let json = serde_json::to_string(&Config::default()).unwrap();
        for field in [
            "\"LogPath\"",
            "\"LogLevel\"",
            "\"IncludeDateTime\"",
            "\"FormatScopeAsJson\"",
            "\"DateTimeFormat\"",
            "\"FileFormat\"",
            "\"FilePrefix\"",
            "\"UseUtc\"",
        ] {
            assert!(json.contains(field), "missing {field} in {json}");
        }
    }

    #[test]
    fn test_partial_config_falls_back_to_defaults() {
        let config: Config =
            serde_json::from_str(r#"{"LogLevel": "Warning", "IncludeCategory": true}"#).unwrap();
        assert_eq!(config.log_level, LevelFilter::Warning);
        assert!(config.include_category);
        assert_eq!(config.file_prefix, "KekUploadServerLog");
    }

    #[test]
    fn test_load_or_create_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let created = Config::load_or_create(&path).unwrap();
        assert!(path.exists());
        assert_eq!(created.file_prefix, "KekUploadServerLog");

        let loaded = Config::load_or_create(&path).unwrap();
        assert_eq!(loaded.file_format, created.file_format);
    }

    #[test]
    fn test_malformed_config_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();

        let err = Config::load_or_create(&path).unwrap_err();
        assert!(matches!(err, Error::Config(_)), "{err}");
    }
}
