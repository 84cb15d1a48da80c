//! Generator configuration.
//!
//! Settings come from `.fluentgen.toml` (searched upwards from the current
//! directory), can be overridden on the command line, and are validated as a
//! whole before a generator is built.
//!
//! ```toml
//! root_package = "de.example.fluent"
//! target_directory = "target/generated-sources/java"
//! filename_pattern = "%s.Fluent%s"
//! ignored_method_names = ["setId"]
//! generated_annotation = true
//! ```

mod loader;
pub mod validation;

pub use loader::{
    directory_ancestors, find_config_file, load_config, load_config_from, load_config_from_path,
    parse_and_validate_config, CONFIG_FILE_NAME,
};
pub use validation::{validate_config, validate_config_result, ConfigValidation};

use crate::errors::Result;
use crate::naming::{NamingPattern, DEFAULT_FILENAME_PATTERN};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::PathBuf;

pub const DEFAULT_TARGET_DIRECTORY: &str = "target/generated-sources/java";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Package for generated classes; blank keeps each source type's package
    pub root_package: String,
    pub target_directory: PathBuf,
    /// Two `%s` placeholders: package, then source simple name
    pub filename_pattern: String,
    /// Method names never wrapped
    pub ignored_method_names: BTreeSet<String>,
    /// Annotate generated classes with `@Generated`
    pub generated_annotation: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            root_package: String::new(),
            target_directory: PathBuf::from(DEFAULT_TARGET_DIRECTORY),
            filename_pattern: DEFAULT_FILENAME_PATTERN.to_string(),
            ignored_method_names: BTreeSet::new(),
            generated_annotation: true,
        }
    }
}

impl GeneratorConfig {
    /// Check every setting, reporting all problems in one error
    pub fn validate(&self) -> Result<()> {
        validate_config_result(self)
    }

    /// The validated filename pattern
    pub fn naming_pattern(&self) -> Result<NamingPattern> {
        NamingPattern::new(self.filename_pattern.clone())
    }

    pub fn with_root_package(mut self, root_package: impl Into<String>) -> Self {
        self.root_package = root_package.into();
        self
    }

    pub fn with_target_directory(mut self, target_directory: impl Into<PathBuf>) -> Self {
        self.target_directory = target_directory.into();
        self
    }

    pub fn with_filename_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.filename_pattern = pattern.into();
        self
    }

    pub fn with_ignored_method_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignored_method_names
            .extend(names.into_iter().map(Into::into));
        self
    }

    pub fn with_generated_annotation(mut self, enabled: bool) -> Self {
        self.generated_annotation = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GeneratorConfig::default();
        assert_eq!(config.root_package, "");
        assert_eq!(config.target_directory, PathBuf::from("target/generated-sources/java"));
        assert_eq!(config.filename_pattern, "%s.Fluent%s");
        assert!(config.ignored_method_names.is_empty());
        assert!(config.generated_annotation);
    }

    #[test]
    fn test_toml_roundtrip_of_defaults() {
        let text = toml::to_string(&GeneratorConfig::default()).unwrap();
        let back: GeneratorConfig = toml::from_str(&text).unwrap();
        assert_eq!(back, GeneratorConfig::default());
    }

    #[test]
    fn test_with_methods() {
        let config = GeneratorConfig::default()
            .with_root_package("de.h")
            .with_ignored_method_names(["setId"])
            .with_generated_annotation(false);
        assert_eq!(config.root_package, "de.h");
        assert!(config.ignored_method_names.contains("setId"));
        assert!(!config.generated_annotation);
        assert!(config.naming_pattern().is_ok());
    }
}
