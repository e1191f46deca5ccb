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

/// Scaffolder error types
use std::path::PathBuf;
use thiserror::Error;

/// Result type for scaffolding operations
pub type Result<T> = std::result::Result<T, ScaffoldError>;

/// Main error type for the scaffolder
#[derive(Error, Debug)]
pub enum ScaffoldError {
    #[error("Config file not readable: {path}: {source}")]
    ConfigUnreadable { path: PathBuf, source: std::io::Error },

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Source directory not readable: {path}: {source}")]
    SourceDirUnreadable { path: PathBuf, source: std::io::Error },

    #[error("Template not readable: {path}: {source}")]
    TemplateUnreadable { path: PathBuf, source: std::io::Error },

    #[error("Cannot create directory {path}: {source}")]
    CreateDir { path: PathBuf, source: std::io::Error },

    #[error("Cannot write {path}: {source}")]
    WriteFile { path: PathBuf, source: std::io::Error },

    #[error("Short write to {path}: {got} bytes on disk (expected {expected})")]
    ShortWrite {
        path: PathBuf,
        expected: u64,
        got: u64,
    },

    #[error("{failed} of {total} entries failed to scaffold")]
    RunFailed { failed: usize, total: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
