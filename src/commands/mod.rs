//! CLI command implementations.
//!
//! - **generate**: add types from manifests and write wrapper sources
//! - **plan**: print one type's generation plan
//! - **init**: write a default `.fluentgen.toml`

pub mod generate;
pub mod init;
pub mod plan;

pub use generate::{generate, GenerateConfig};
pub use init::init_config;
pub use plan::{plan, render_plan_terminal, PlanConfig};

use crate::cli::ConfigOverrides;
use crate::config::{self, GeneratorConfig};
use anyhow::{Context, Result};

/// Config file (explicit or discovered) with command-line overrides applied
pub fn resolve_config(overrides: &ConfigOverrides) -> Result<GeneratorConfig> {
    let base = match &overrides.config {
        Some(path) => config::load_config_from_path(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => config::load_config().context("Failed to load .fluentgen.toml")?,
    };
    Ok(apply_overrides(base, overrides))
}

/// Command-line values replace config values; ignored names are added.
pub fn apply_overrides(mut config: GeneratorConfig, overrides: &ConfigOverrides) -> GeneratorConfig {
    if let Some(root) = &overrides.root_package {
        config.root_package = root.clone();
    }
    if let Some(dir) = &overrides.target_dir {
        config.target_directory = dir.clone();
    }
    if let Some(pattern) = &overrides.pattern {
        config.filename_pattern = pattern.clone();
    }
    config
        .ignored_method_names
        .extend(overrides.ignore.iter().cloned());
    if overrides.no_generated_annotation {
        config.generated_annotation = false;
    }
    config
}
