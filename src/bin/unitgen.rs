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

use clap::Parser;
use log::{error, info};
use unitgen::scaffold::{Result, ScaffoldConfig, ScaffoldError, Scaffolder};

/// Driver unit-test scaffolder
#[derive(Parser)]
#[command(name = "unitgen")]
#[command(about = "Scaffold unit-test directories for driver sources", long_about = None)]
struct Args {
    /// Root of the driver tree (contains drivers/source and drivers/tests)
    #[arg(default_value = ".")]
    root: String,

    /// Path to a TOML file overriding the default layout
    #[arg(short = 'c', long)]
    config: Option<String>,
}

fn main() -> Result<()> {
    // Load .env if present; a missing file is fine
    let _ = dotenvy::dotenv();

    // Initialize logger with default level INFO
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("unitgen v{}", env!("CARGO_PKG_VERSION"));

    // Parse command line arguments
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => {
            info!("Loading layout config from: {}", path);
            ScaffoldConfig::load(std::path::Path::new(path)).map_err(|e| {
                error!("Failed to load config: {}", e);
                e
            })?
        }
        None => ScaffoldConfig::default(),
    };

    let scaffolder = Scaffolder::new(&args.root, &config).map_err(|e| {
        error!("Preflight failed: {}", e);
        e
    })?;

    info!(
        "Scaffolding {} into {}",
        scaffolder.layout().source_dir().display(),
        scaffolder.layout().test_root().display()
    );

    let summary = scaffolder.run().map_err(|e| {
        error!("Run aborted: {}", e);
        e
    })?;

    info!(
        "Done: {} created, {} already existed, {} failed",
        summary.created(),
        summary.conflicts(),
        summary.failed()
    );

    if summary.has_failures() {
        return Err(ScaffoldError::RunFailed {
            failed: summary.failed(),
            total: summary.entries.len(),
        });
    }

    Ok(())
}
