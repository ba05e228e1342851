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

//! A file log sink for KekUpload servers.
//!
//! The sink accepts structured log events (level, category, event id,
//! message, exception, scope) and appends them to date-named text files,
//! one rendered line per event. Lines are rendered from a configurable
//! template; a new day implicitly rotates to a new file.
//!
//! # Overview
//!
//! A [`FileLoggerProvider`] is built once from a [`Config`] and hands out a
//! [`FileLogger`] per category. Every logging call runs the same pipeline
//! synchronously: minimum-level filter, template substitution, date-named
//! file append. There is no queue and no background worker; when a call
//! returns, the line is on disk (or the call has failed with
//! [`Error::Write`]).
//!
//! # Examples
//!
//! ```no_run
//! use kekupload_file_logging::Config;
//! use kekupload_file_logging::FileLoggerProvider;
//! use kekupload_file_logging::Level;
//!
//! # fn main() -> Result<(), kekupload_file_logging::Error> {
//! let config = Config::load_or_create("config.json")?;
//! let provider = FileLoggerProvider::new(config)?;
//!
//! let logger = provider.create_logger("UploadService");
//! logger.log_message(Level::Information, "upload finished")?;
//!
//! let scope = logger.begin_scope("req-42")?;
//! logger.log_message(Level::Warning, "slow chunk")?;
//! drop(scope); // writes the "Scope Ended (Disposed)" record
//! # Ok(())
//! # }
//! ```
//!
//! Hosts that log through the `log` crate can route it into the sink:
//!
//! ```no_run
//! use kekupload_file_logging::Config;
//! use kekupload_file_logging::FileLoggerProvider;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let provider = FileLoggerProvider::new(Config::default())?;
//! kekupload_file_logging::bridge::install(provider);
//!
//! log::info!("this line ends up in the log file");
//! # Ok(())
//! # }
//! ```
//!
//! # Line templates
//!
//! The `FileFormat` template is rendered per record with literal token
//! substitution. Recognized tokens: `{DateTime}`, `{Level}`, `{EventId}`,
//! `{State}`, `{Exception}`, `{Scope}`, `{Category}`, `{Message}`,
//! `{NewLine}`. Each token is controlled by its include flag in [`Config`];
//! a disabled token renders as the empty string. Unknown tokens are left
//! verbatim, and substituted values are never rescanned for tokens.

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod append;
pub mod bridge;
pub mod layout;

mod clock;
mod config;
mod error;
mod level;
mod logger;
mod record;
mod scope;

pub use append::FileAppend;
pub use config::Config;
pub use error::Error;
pub use layout::TemplateLayout;
pub use level::Level;
pub use level::LevelFilter;
pub use logger::FileLogger;
pub use logger::FileLoggerProvider;
pub use record::EventId;
pub use record::Record;
pub use scope::Scope;
