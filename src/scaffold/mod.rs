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

//! Driver test scaffolding components
//!
//! This module contains everything needed to scaffold a driver test tree:
//! - Config (layout paths, optional TOML override file)
//! - Layout (path derivation from an explicit root)
//! - Templates (the fixed CMake and test-source files, loaded up front)
//! - Scaffolder (the per-driver create-and-copy run)

pub mod config;
pub mod error;
pub mod layout;
pub mod scaffolder;
pub mod template;


// Re-export commonly used types
pub use config::ScaffoldConfig;
pub use error::{Result, ScaffoldError};
pub use layout::TestLayout;
pub use scaffolder::{EntryReport, EntryStatus, RunSummary, Scaffolder};
pub use template::TemplateSet;
