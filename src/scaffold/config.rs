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

//! Scaffolding configuration
//!
//! The layout paths are fixed by convention but can be overridden through a
//! small TOML file. Every key is optional and falls back to the conventional
//! location:
//!
//! ```toml
//! source_dir = "drivers/source"
//! test_root = "drivers/tests/UNITTESTS"
//! template_dir = "AnalogIn"
//! ```

use serde::Deserialize;
use std::path::Path;

use super::error::{Result, ScaffoldError};

/// Default driver source directory, relative to the root
pub const DEFAULT_SOURCE_DIR: &str = "drivers/source";

/// Default unit-test root, relative to the root
pub const DEFAULT_TEST_ROOT: &str = "drivers/tests/UNITTESTS";

/// Default template directory, relative to the unit-test root
pub const DEFAULT_TEMPLATE_DIR: &str = "AnalogIn";

/// Layout configuration for a scaffolding run
///
/// All paths are relative: `source_dir` and `test_root` to the run's root,
/// `template_dir` to the unit-test root. Unknown keys are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScaffoldConfig {
    /// Driver source directory, relative to the root
    #[serde(default = "default_source_dir")]
    pub source_dir: String,

    /// Unit-test root, relative to the root
    #[serde(default = "default_test_root")]
    pub test_root: String,

    /// Template directory, relative to the unit-test root
    #[serde(default = "default_template_dir")]
    pub template_dir: String,
}

fn default_source_dir() -> String {
    DEFAULT_SOURCE_DIR.to_string()
}

fn default_test_root() -> String {
    DEFAULT_TEST_ROOT.to_string()
}

fn default_template_dir() -> String {
    DEFAULT_TEMPLATE_DIR.to_string()
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            source_dir: default_source_dir(),
            test_root: default_test_root(),
            template_dir: default_template_dir(),
        }
    }
}

impl ScaffoldConfig {
    /// Parse configuration from TOML text
    ///
    /// # Example
    ///
    /// ```
    /// use unitgen::scaffold::ScaffoldConfig;
    ///
    /// let config = ScaffoldConfig::parse("source_dir = \"hal/source\"").unwrap();
    /// assert_eq!(config.source_dir, "hal/source");
    /// assert_eq!(config.test_root, "drivers/tests/UNITTESTS");
    /// ```
    pub fn parse(data: &str) -> Result<Self> {
        toml::from_str(data).map_err(|e| ScaffoldError::InvalidConfig(e.to_string()))
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path).map_err(|source| {
            ScaffoldError::ConfigUnreadable {
                path: path.to_path_buf(),
                source,
            }
        })?;
        Self::parse(&data)
    }
}
