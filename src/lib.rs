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

//! Unit-test scaffolder for hardware driver test suites
//!
//! This library creates one unit-test directory per driver source file and
//! copies the fixed CMake and test-source templates into it, renaming the
//! test file after the driver.
//!
//! # Example
//!
//! ```no_run
//! use unitgen::scaffold::{ScaffoldConfig, Scaffolder};
//!
//! let config = ScaffoldConfig::default();
//! let scaffolder = Scaffolder::new(".", &config).unwrap();
//!
//! let summary = scaffolder.run().unwrap();
//! println!("{} test directories created", summary.created());
//! ```

pub mod scaffold;
