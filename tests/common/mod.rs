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

//! Shared fixtures for scaffolder integration tests

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Template CMake file, as it would sit in a real driver test tree
pub const CMAKE_TEMPLATE: &str = r#"set(TEST_NAME analogin-unittest)

add_executable(${TEST_NAME})

target_sources(${TEST_NAME}
    PRIVATE
        test_analogin.cpp
)

target_link_libraries(${TEST_NAME}
    PRIVATE
        gtest_main
)

gtest_discover_tests(${TEST_NAME})
"#;

/// Template test source file
pub const TEST_TEMPLATE: &str = r#"#include "gtest/gtest.h"

class TestAnalogIn : public testing::Test {
protected:
    void SetUp() override {}
    void TearDown() override {}
};

TEST_F(TestAnalogIn, constructor)
{
    EXPECT_TRUE(true);
}
"#;

/// Create a driver tree with the default layout and the given source entries
pub fn driver_tree(sources: &[&str]) -> TempDir {
    driver_tree_at(sources, "drivers/source", "drivers/tests/UNITTESTS", "AnalogIn")
}

/// Create a driver tree with an arbitrary layout
pub fn driver_tree_at(
    sources: &[&str],
    source_dir: &str,
    test_root: &str,
    template_dir: &str,
) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();

    fs::create_dir_all(root.join(source_dir)).unwrap();
    let template_path = root.join(test_root).join(template_dir);
    fs::create_dir_all(&template_path).unwrap();
    fs::write(template_path.join("CMakeLists.txt"), CMAKE_TEMPLATE).unwrap();
    fs::write(template_path.join("test_analogin.cpp"), TEST_TEMPLATE).unwrap();

    for name in sources {
        fs::write(root.join(source_dir).join(name), b"// driver source\n").unwrap();
    }

    dir
}

/// Path of a generated test directory under the default unit-test root
#[allow(dead_code)]
pub fn unittest_dir(root: &Path, identifier: &str) -> PathBuf {
    root.join("drivers/tests/UNITTESTS").join(identifier)
}
