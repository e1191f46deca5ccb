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

//! Template files for generated test directories
//!
//! Both templates are read into memory before the first entry is processed.
//! A missing template therefore aborts the run before any directory is
//! created, and every copy is a plain memory-to-disk write of the same
//! bytes.

use std::path::Path;

use super::error::{Result, ScaffoldError};
use super::layout::TestLayout;

/// The two template files, held in memory for the duration of a run
#[derive(Debug, Clone)]
pub struct TemplateSet {
    /// CMake build file, copied verbatim into every test directory
    pub cmake: Vec<u8>,

    /// Test source file, copied verbatim under the per-driver name
    pub test_source: Vec<u8>,
}

impl TemplateSet {
    /// Load both templates from the layout's template directory
    pub fn load(layout: &TestLayout) -> Result<Self> {
        Ok(Self {
            cmake: read_template(&layout.template_cmake())?,
            test_source: read_template(&layout.template_test())?,
        })
    }
}

fn read_template(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).map_err(|source| ScaffoldError::TemplateUnreadable {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scaffold::config::ScaffoldConfig;
    use std::fs;

    #[test]
    fn test_load_templates() {
        let dir = tempfile::tempdir().unwrap();
        let template_dir = dir.path().join("drivers/tests/UNITTESTS/AnalogIn");
        fs::create_dir_all(&template_dir).unwrap();
        fs::write(template_dir.join("CMakeLists.txt"), b"add_executable(t)\n").unwrap();
        fs::write(template_dir.join("test_analogin.cpp"), b"// test\n").unwrap();

        let layout = TestLayout::new(dir.path(), &ScaffoldConfig::default());
        let templates = TemplateSet::load(&layout).unwrap();

        assert_eq!(templates.cmake, b"add_executable(t)\n");
        assert_eq!(templates.test_source, b"// test\n");
    }

    #[test]
    fn test_missing_cmake_template() {
        let dir = tempfile::tempdir().unwrap();
        let template_dir = dir.path().join("drivers/tests/UNITTESTS/AnalogIn");
        fs::create_dir_all(&template_dir).unwrap();
        fs::write(template_dir.join("test_analogin.cpp"), b"// test\n").unwrap();

        let layout = TestLayout::new(dir.path(), &ScaffoldConfig::default());
        let result = TemplateSet::load(&layout);

        match result {
            Err(ScaffoldError::TemplateUnreadable { path, .. }) => {
                assert!(path.ends_with("CMakeLists.txt"));
            }
            other => panic!("expected TemplateUnreadable, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_test_template() {
        let dir = tempfile::tempdir().unwrap();
        let template_dir = dir.path().join("drivers/tests/UNITTESTS/AnalogIn");
        fs::create_dir_all(&template_dir).unwrap();
        fs::write(template_dir.join("CMakeLists.txt"), b"add_executable(t)\n").unwrap();

        let layout = TestLayout::new(dir.path(), &ScaffoldConfig::default());
        let result = TemplateSet::load(&layout);

        match result {
            Err(ScaffoldError::TemplateUnreadable { path, .. }) => {
                assert!(path.ends_with("test_analogin.cpp"));
            }
            other => panic!("expected TemplateUnreadable, got {:?}", other),
        }
    }
}
