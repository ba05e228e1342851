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

use std::fs;

use kekupload_file_logging::Config;
use kekupload_file_logging::FileLoggerProvider;
use kekupload_file_logging::bridge;

// The log crate global logger can only be set once per process, so all
// bridge assertions live in this single test.
#[test]
fn test_log_crate_records_reach_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        log_path: dir.path().to_path_buf(),
        include_category: true,
        ..Config::default()
    };
    let provider = FileLoggerProvider::new(config).unwrap();
    bridge::try_install(provider).unwrap();

    log::info!(target: "Uploads", "upload {} finished", 7);
    log::warn!(target: "Storage", "disk almost full");
    log::debug!(target: "Uploads", "filtered below the Information minimum");

    let mut paths = fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .collect::<Vec<_>>();
    assert_eq!(paths.len(), 1, "{paths:?}");
    let content = fs::read_to_string(paths.remove(0)).unwrap();

    assert!(content.contains("[Information] Uploads: upload 7 finished"));
    assert!(content.contains("[Warning] Storage: disk almost full"));
    assert!(!content.contains("filtered below"));
}
