//! Configuration validation with error accumulation.
//!
//! Every check returns a stillwater `Validation`, so one run reports all
//! problems instead of stopping at the first.

use super::GeneratorConfig;
use crate::errors::{Error, Result};
use crate::naming;
use stillwater::{NonEmptyVec, Validation};

pub type ConfigValidation<T> = Validation<T, NonEmptyVec<String>>;

fn success() -> ConfigValidation<()> {
    Validation::Success(())
}

fn failure(message: impl Into<String>) -> ConfigValidation<()> {
    Validation::Failure(NonEmptyVec::new(message.into(), Vec::new()))
}

fn combine(validations: Vec<ConfigValidation<()>>) -> ConfigValidation<()> {
    let mut problems = Vec::new();
    for validation in validations {
        if let Validation::Failure(errors) = validation {
            problems.extend(errors);
        }
    }
    match NonEmptyVec::from_vec(problems) {
        Some(errors) => Validation::Failure(errors),
        None => success(),
    }
}

/// Validate every setting, accumulating all problems.
pub fn validate_config(config: &GeneratorConfig) -> ConfigValidation<()> {
    combine(vec![
        validate_target_directory(config),
        validate_filename_pattern(&config.filename_pattern),
        validate_root_package(&config.root_package),
        validate_ignored_names(config),
    ])
}

/// [`validate_config`] as a single `Configuration` error
pub fn validate_config_result(config: &GeneratorConfig) -> Result<()> {
    match validate_config(config) {
        Validation::Success(()) => Ok(()),
        Validation::Failure(errors) => {
            let messages: Vec<String> = errors.into_iter().collect();
            Err(Error::configuration(messages.join("; ")))
        }
    }
}

fn validate_target_directory(config: &GeneratorConfig) -> ConfigValidation<()> {
    if config.target_directory.as_os_str().to_string_lossy().trim().is_empty() {
        failure("target directory must not be blank")
    } else {
        success()
    }
}

fn validate_filename_pattern(pattern: &str) -> ConfigValidation<()> {
    match naming::pattern_problem(pattern) {
        Some(problem) => failure(problem),
        None => success(),
    }
}

/// Blank means "use the source type's package".
fn validate_root_package(root_package: &str) -> ConfigValidation<()> {
    if root_package.trim().is_empty() || naming::is_valid_package(root_package) {
        success()
    } else {
        failure(format!(
            "root package '{}' is not a dotted identifier",
            root_package
        ))
    }
}

fn validate_ignored_names(config: &GeneratorConfig) -> ConfigValidation<()> {
    let blanks = config
        .ignored_method_names
        .iter()
        .filter(|n| n.trim().is_empty())
        .count();
    if blanks > 0 {
        failure("ignored method names must not be blank")
    } else {
        success()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&GeneratorConfig::default()).is_success());
    }

    #[test]
    fn test_all_problems_reported_together() {
        let config = GeneratorConfig {
            root_package: "com..bad".into(),
            target_directory: PathBuf::from(" "),
            filename_pattern: "Fluent%s".into(),
            ignored_method_names: [String::new()].into_iter().collect(),
            generated_annotation: true,
        };
        match validate_config(&config) {
            Validation::Failure(errors) => {
                let errors: Vec<String> = errors.into_iter().collect();
                assert_eq!(errors.len(), 4);
            }
            Validation::Success(_) => panic!("expected failure"),
        }

        let err = validate_config_result(&config).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
        assert!(err.to_string().contains("root package 'com..bad'"));
        assert!(err.to_string().contains("target directory must not be blank"));
    }

    #[test]
    fn test_blank_root_package_allowed() {
        assert!(validate_root_package("").is_success());
        assert!(validate_root_package("de.holisticon.fluent").is_success());
        assert!(!validate_root_package("de.1x").is_success());
    }
}
