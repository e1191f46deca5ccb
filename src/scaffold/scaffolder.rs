// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut
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

//! Scaffolding run over the driver source listing
//!
//! For every entry in the source directory the scaffolder creates a
//! same-named directory under the unit-test root and writes the two
//! templates into it, the test file renamed after the driver. Entries are
//! independent: a conflict or failure on one never stops the others.
//!
//! Every file write is flushed to disk and length-checked before the run
//! moves on, so a reported `Created` entry is fully on disk.
//!
//! # Example
//!
//! ```no_run
//! use unitgen::scaffold::{ScaffoldConfig, Scaffolder};
//!
//! let scaffolder = Scaffolder::new("/work/firmware", &ScaffoldConfig::default()).unwrap();
//! let summary = scaffolder.run().unwrap();
//!
//! assert_eq!(summary.failed(), 0);
//! ```

use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use super::config::ScaffoldConfig;
use super::error::{Result, ScaffoldError};
use super::layout::{driver_identifier, test_file_name, TestLayout, CMAKE_FILE};
use super::template::TemplateSet;

/// Outcome of one source-listing entry
#[derive(Debug)]
pub enum EntryStatus {
    /// Directory created and both files written
    Created,

    /// Destination directory already existed; nothing was written
    Conflict,

    /// Directory creation or a file write failed
    Failed(ScaffoldError),
}

/// Per-entry report, keyed by the driver identifier
#[derive(Debug)]
pub struct EntryReport {
    pub identifier: String,
    pub status: EntryStatus,
}

/// Result of a full scaffolding run
#[derive(Debug, Default)]
pub struct RunSummary {
    pub entries: Vec<EntryReport>,
}

impl RunSummary {
    /// Number of entries whose directory and files were created
    pub fn created(&self) -> usize {
        self.count(|s| matches!(s, EntryStatus::Created))
    }

    /// Number of entries skipped because the directory already existed
    pub fn conflicts(&self) -> usize {
        self.count(|s| matches!(s, EntryStatus::Conflict))
    }

    /// Number of entries that failed
    pub fn failed(&self) -> usize {
        self.count(|s| matches!(s, EntryStatus::Failed(_)))
    }

    pub fn has_failures(&self) -> bool {
        self.failed() > 0
    }

    fn count(&self, pred: impl Fn(&EntryStatus) -> bool) -> usize {
        self.entries.iter().filter(|e| pred(&e.status)).count()
    }
}

/// One scaffolding run over a driver tree
///
/// Construction is the preflight step: it resolves the layout and loads both
/// templates, so a broken tree is rejected before any directory is created.
pub struct Scaffolder {
    layout: TestLayout,
    templates: TemplateSet,
}

impl Scaffolder {
    /// Resolve the layout against `root` and load the templates
    pub fn new(root: impl Into<PathBuf>, config: &ScaffoldConfig) -> Result<Self> {
        let layout = TestLayout::new(root, config);
        let templates = TemplateSet::load(&layout)?;

        Ok(Self { layout, templates })
    }

    pub fn layout(&self) -> &TestLayout {
        &self.layout
    }

    /// Scaffold a test directory for every entry in the source listing
    ///
    /// Returns the per-entry reports. `Err` is returned only when the source
    /// directory itself cannot be enumerated; per-entry failures are carried
    /// in the summary instead.
    pub fn run(&self) -> Result<RunSummary> {
        let mut summary = RunSummary::default();

        for name in self.source_listing()? {
            let identifier = driver_identifier(&name);
            let status = self.scaffold_entry(&identifier);

            match &status {
                EntryStatus::Created => {
                    log::info!("Created {}", self.layout.destination(&identifier).display());
                }
                EntryStatus::Conflict => {
                    log::warn!(
                        "Directory {} already exists",
                        self.layout.destination(&identifier).display()
                    );
                }
                EntryStatus::Failed(e) => {
                    log::error!("Failed to scaffold {}: {}", identifier, e);
                }
            }

            summary.entries.push(EntryReport { identifier, status });
        }

        Ok(summary)
    }

    /// Entry names of the source directory, in filesystem enumeration order
    fn source_listing(&self) -> Result<Vec<String>> {
        let dir = self.layout.source_dir();
        let entries = fs::read_dir(dir).map_err(|source| ScaffoldError::SourceDirUnreadable {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| ScaffoldError::SourceDirUnreadable {
                path: dir.to_path_buf(),
                source,
            })?;
            names.push(entry.file_name().to_string_lossy().into_owned());
        }

        Ok(names)
    }

    fn scaffold_entry(&self, identifier: &str) -> EntryStatus {
        let destination = self.layout.destination(identifier);

        // The destination must not exist yet; a pre-existing directory is
        // left untouched.
        match fs::create_dir(&destination) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                return EntryStatus::Conflict;
            }
            Err(source) => {
                return EntryStatus::Failed(ScaffoldError::CreateDir {
                    path: destination,
                    source,
                });
            }
        }

        match self.write_entry_files(identifier, &destination) {
            Ok(()) => EntryStatus::Created,
            Err(e) => EntryStatus::Failed(e),
        }
    }

    fn write_entry_files(&self, identifier: &str, destination: &Path) -> Result<()> {
        write_verified(&destination.join(CMAKE_FILE), &self.templates.cmake)?;
        write_verified(
            &destination.join(test_file_name(identifier)),
            &self.templates.test_source,
        )?;

        Ok(())
    }
}

/// Write `bytes` to `path`, flush to disk and verify the on-disk length
fn write_verified(path: &Path, bytes: &[u8]) -> Result<()> {
    let to_write_error = |source| ScaffoldError::WriteFile {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::create(path).map_err(to_write_error)?;
    file.write_all(bytes).map_err(to_write_error)?;
    file.sync_all().map_err(to_write_error)?;

    let got = file.metadata().map_err(to_write_error)?.len();
    let expected = bytes.len() as u64;
    if got != expected {
        return Err(ScaffoldError::ShortWrite {
            path: path.to_path_buf(),
            expected,
            got,
        });
    }

    Ok(())
}
