use std::fs;
use std::path::{Path, PathBuf};

use super::GeneratorConfig;
use crate::errors::{Error, Result};

pub const CONFIG_FILE_NAME: &str = ".fluentgen.toml";
const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Parse and validate config from a TOML string
pub fn parse_and_validate_config(contents: &str) -> Result<GeneratorConfig> {
    let config = toml::from_str::<GeneratorConfig>(contents)
        .map_err(|e| Error::configuration(format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e)))?;
    config.validate()?;
    Ok(config)
}

/// Load configuration from an explicit file
pub fn load_config_from_path(path: &Path) -> Result<GeneratorConfig> {
    let contents = fs::read_to_string(path).map_err(|e| {
        Error::configuration(format!("Failed to read {}: {}", path.display(), e))
    })?;
    let config = parse_and_validate_config(&contents)?;
    log::debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// `None` when the file does not exist
fn try_load_config_from_path(path: &Path) -> Option<Result<GeneratorConfig>> {
    match fs::metadata(path) {
        Ok(meta) if meta.is_file() => Some(load_config_from_path(path)),
        Ok(_) => None,
        Err(e) => {
            if e.kind() != std::io::ErrorKind::NotFound {
                log::warn!("Failed to read config file {}: {}", path.display(), e);
            }
            None
        }
    }
}

/// Directories from `start` upwards, at most `max_depth` of them
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Nearest config file at or above `start`
pub fn find_config_file(start: PathBuf) -> Option<PathBuf> {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find(|path| path.is_file())
}

/// Load the nearest config at or above `start`, or defaults when there is none.
pub fn load_config_from(start: PathBuf) -> Result<GeneratorConfig> {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            Ok(GeneratorConfig::default())
        })
}

/// Load the nearest config above the current directory
pub fn load_config() -> Result<GeneratorConfig> {
    match std::env::current_dir() {
        Ok(dir) => load_config_from(dir),
        Err(e) => {
            log::warn!("Failed to get current directory: {}. Using default config.", e);
            Ok(GeneratorConfig::default())
        }
    }
}
