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

//! Filesystem layout of the driver test tree
//!
//! All paths are derived from an explicit root rather than the process
//! working directory, so a run can target any checkout.
//!
//! ```text
//! <root>/
//!   drivers/source/            driver sources, one test directory each
//!   drivers/tests/UNITTESTS/   unit-test root, receives the new directories
//!     AnalogIn/                template directory
//!       CMakeLists.txt
//!       test_analogin.cpp
//! ```

use std::path::{Path, PathBuf};

use super::config::ScaffoldConfig;

/// CMake file name, both in the template directory and in every destination
pub const CMAKE_FILE: &str = "CMakeLists.txt";

/// Test source file name inside the template directory
pub const TEMPLATE_TEST_FILE: &str = "test_analogin.cpp";

/// Resolved paths for one scaffolding run
#[derive(Debug, Clone)]
pub struct TestLayout {
    root: PathBuf,
    source_dir: PathBuf,
    test_root: PathBuf,
    template_dir: PathBuf,
}

impl TestLayout {
    /// Resolve the layout against an explicit root
    pub fn new(root: impl Into<PathBuf>, config: &ScaffoldConfig) -> Self {
        let root = root.into();
        let source_dir = root.join(&config.source_dir);
        let test_root = root.join(&config.test_root);
        let template_dir = test_root.join(&config.template_dir);

        Self {
            root,
            source_dir,
            test_root,
            template_dir,
        }
    }

    /// Root of the driver tree
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory whose listing drives the run
    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    /// Directory receiving one subdirectory per driver
    pub fn test_root(&self) -> &Path {
        &self.test_root
    }

    /// Path of the template CMake file
    pub fn template_cmake(&self) -> PathBuf {
        self.template_dir.join(CMAKE_FILE)
    }

    /// Path of the template test source file
    pub fn template_test(&self) -> PathBuf {
        self.template_dir.join(TEMPLATE_TEST_FILE)
    }

    /// Destination directory for one driver identifier
    pub fn destination(&self, identifier: &str) -> PathBuf {
        self.test_root.join(identifier)
    }
}

/// Driver identifier for a source entry name
///
/// The identifier is the entry name with its final extension stripped;
/// earlier dots are kept (`I2C.driver.cpp` becomes `I2C.driver`). Names
/// without an extension pass through unchanged.
pub fn driver_identifier(file_name: &str) -> String {
    Path::new(file_name)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or(file_name)
        .to_string()
}

/// Generated test file name for a driver identifier
///
/// The identifier is lowercased only here; the destination directory keeps
/// its original casing.
pub fn test_file_name(identifier: &str) -> String {
    format!("test_{}.cpp", identifier.to_lowercase())
}
