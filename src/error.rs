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

use std::path::PathBuf;

/// Errors surfaced by the file log sink.
///
/// Formatter callbacks are caller-supplied and trusted; if one panics, the
/// panic propagates to the host unchanged.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The configuration is malformed or unusable. Surfaced once at load
    /// time; the host is expected to disable the sink rather than crash.
    #[error("invalid logging configuration: {0}")]
    Config(String),

    /// An I/O action outside the append path failed, e.g. reading the
    /// config file or creating the log directory.
    #[error("failed to perform IO action: {0}")]
    Io(#[from] std::io::Error),

    /// Appending a rendered line to the log file failed. Not retried;
    /// propagates synchronously to the caller of the logging call.
    #[error("failed to append to log file {}: {}", path.display(), source)]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}
