use crate::config::CONFIG_FILE_NAME;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG: &str = r#"# fluentgen configuration

# Package for generated classes. Leave blank to keep each source type's package.
root_package = ""

# Where generated sources are written
target_directory = "target/generated-sources/java"

# Generated class name: first %s is the package, second the source simple name
filename_pattern = "%s.Fluent%s"

# Methods that never get a fluent wrapper
ignored_method_names = []

# Annotate generated classes with @Generated
generated_annotation = true
"#;

/// Write the default config into `dir`
pub fn init_config_in(dir: &Path, force: bool) -> Result<PathBuf> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    fs::write(&config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    Ok(config_path)
}

pub fn init_config(force: bool) -> Result<()> {
    init_config_in(Path::new("."), force)?;
    println!("Created {} configuration file", CONFIG_FILE_NAME);
    Ok(())
}
