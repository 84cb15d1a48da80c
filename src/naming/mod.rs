//! Naming rules for generated wrappers.
//!
//! Every function here is a pure string transformation. The rules:
//!
//! | Source                          | Generated                          |
//! |---------------------------------|------------------------------------|
//! | type `TextField`                | field / factory `textField`        |
//! | `setValue(String)`              | `value(String value)`              |
//! | `addTag(String)`                | `addTags(String... tags)`, loop `tag` |
//! | `pkg`, `Point`, `"%s.Fluent%s"` | `pkg.FluentPoint`                  |
//!
//! Names are derived mechanically; nothing here checks that the result is a
//! legal identifier. That happens when a plan is declared (see [`is_valid_identifier`]).

use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const SET_PREFIX: &str = "set";
pub const ADD_PREFIX: &str = "add";
pub const GETTER_NAME: &str = "get";
pub const DEFAULT_FILENAME_PATTERN: &str = "%s.Fluent%s";
const PLACEHOLDER: &str = "%s";
const PLURAL_SUFFIX: &str = "s";

/// Lower-case the first character, leave the rest untouched (`URL` -> `uRL`).
pub fn uncapitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Strip `prefix` once if present
pub fn remove_start<'a>(s: &'a str, prefix: &str) -> &'a str {
    s.strip_prefix(prefix).unwrap_or(s)
}

/// Strip `suffix` once if present
pub fn remove_end<'a>(s: &'a str, suffix: &str) -> &'a str {
    s.strip_suffix(suffix).unwrap_or(s)
}

/// Delegate field name for a source type
pub fn field_name(simple_name: &str) -> String {
    uncapitalize(simple_name)
}

/// Static factories share the field name and differ by parameter list
pub fn factory_method_name(simple_name: &str) -> String {
    field_name(simple_name)
}

pub fn factory_argument_name(index: usize) -> String {
    format!("arg{}", index)
}

/// `setFooBar` -> `fooBar`
pub fn setter_wrapper_name(method_name: &str) -> String {
    uncapitalize(remove_start(method_name, SET_PREFIX))
}

/// `addFoo` -> `addFoos`; the prefix is kept.
pub fn adder_wrapper_name(method_name: &str) -> String {
    format!("{}{}", method_name, PLURAL_SUFFIX)
}

/// Varargs parameter of an adder wrapper: `addFoo` -> `foos`
pub fn adder_parameter_name(method_name: &str) -> String {
    let wrapper = adder_wrapper_name(method_name);
    uncapitalize(remove_start(&wrapper, ADD_PREFIX))
}

/// Loop variable for a varargs parameter: `foos` -> `foo`
pub fn adder_loop_variable(parameter_name: &str) -> String {
    remove_end(parameter_name, PLURAL_SUFFIX).to_string()
}

/// Package for generated classes: the root package unless it is blank.
pub fn resolve_package<'a>(root_package: &'a str, source_package: &'a str) -> &'a str {
    if root_package.trim().is_empty() {
        source_package
    } else {
        root_package
    }
}

/// Package plus simple name of a generated class
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct QualifiedName {
    pub package: String,
    pub simple_name: String,
}

impl QualifiedName {
    /// Split a dotted name at its last `.`
    pub fn from_dotted(name: &str) -> Self {
        match name.rsplit_once('.') {
            Some((package, simple)) => Self {
                package: package.to_string(),
                simple_name: simple.to_string(),
            },
            None => Self {
                package: String::new(),
                simple_name: name.to_string(),
            },
        }
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.package.is_empty() {
            f.write_str(&self.simple_name)
        } else {
            write!(f, "{}.{}", self.package, self.simple_name)
        }
    }
}

/// Validated generated-class name pattern with exactly two `%s` placeholders:
/// the package first, the source simple name second.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NamingPattern {
    pattern: String,
}

impl NamingPattern {
    pub fn new(pattern: impl Into<String>) -> Result<Self> {
        let pattern = pattern.into();
        if let Some(problem) = pattern_problem(&pattern) {
            return Err(Error::configuration(problem));
        }
        Ok(Self { pattern })
    }

    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    /// Fill the placeholders. An empty package drops the separator that follows it.
    pub fn apply(&self, package: &str, simple_name: &str) -> QualifiedName {
        let formatted = self
            .pattern
            .replacen(PLACEHOLDER, package, 1)
            .replacen(PLACEHOLDER, simple_name, 1);
        let formatted = if package.is_empty() {
            formatted.trim_start_matches('.').to_string()
        } else {
            formatted
        };
        QualifiedName::from_dotted(&formatted)
    }
}

impl Default for NamingPattern {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_FILENAME_PATTERN.to_string(),
        }
    }
}

impl fmt::Display for NamingPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}

/// Describe what is wrong with a pattern, if anything
pub fn pattern_problem(pattern: &str) -> Option<String> {
    if pattern.trim().is_empty() {
        return Some("filename pattern must not be blank".to_string());
    }
    let placeholders = pattern.matches(PLACEHOLDER).count();
    if placeholders != 2 {
        return Some(format!(
            "filename pattern '{}' must contain exactly two {} placeholders (package, simple name), found {}",
            pattern, PLACEHOLDER, placeholders
        ));
    }
    None
}

/// Reserved words of the generated language (Java), including literals.
pub const RESERVED_WORDS: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
    "continue", "default", "do", "double", "else", "enum", "extends", "final", "finally",
    "float", "for", "goto", "if", "implements", "import", "instanceof", "int", "interface",
    "long", "native", "new", "package", "private", "protected", "public", "return", "short",
    "static", "strictfp", "super", "switch", "synchronized", "this", "throw", "throws",
    "transient", "try", "void", "volatile", "while", "true", "false", "null", "_",
];

/// Whether `name` can be used as a field, method, parameter or variable name
pub fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let starts_ok = match chars.next() {
        Some(first) => first.is_alphabetic() || first == '_' || first == '$',
        None => false,
    };
    starts_ok
        && chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
        && !RESERVED_WORDS.contains(&name)
}

/// Whether every `.`-separated segment of a package name is a valid identifier
pub fn is_valid_package(package: &str) -> bool {
    package.split('.').all(is_valid_identifier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uncapitalize() {
        assert_eq!(uncapitalize("TextField"), "textField");
        assert_eq!(uncapitalize("URL"), "uRL");
        assert_eq!(uncapitalize("x"), "x");
        assert_eq!(uncapitalize(""), "");
    }

    #[test]
    fn test_setter_wrapper_name() {
        assert_eq!(setter_wrapper_name("setValue"), "value");
        assert_eq!(setter_wrapper_name("setX"), "x");
        assert_eq!(setter_wrapper_name("setImmediate"), "immediate");
        assert_eq!(setter_wrapper_name("set"), "");
    }

    #[test]
    fn test_adder_names_pluralize_full_method_name() {
        assert_eq!(adder_wrapper_name("addFoo"), "addFoos");
        assert_eq!(adder_parameter_name("addFoo"), "foos");
        assert_eq!(adder_loop_variable("foos"), "foo");
    }

    #[test]
    fn test_adder_names_for_plural_sounding_methods() {
        assert_eq!(adder_wrapper_name("addAddress"), "addAddresss");
        assert_eq!(adder_parameter_name("addAddress"), "addresss");
        assert_eq!(adder_loop_variable("addresss"), "address");
    }

    #[test]
    fn test_loop_variable_strips_single_s() {
        assert_eq!(adder_loop_variable("classess"), "classes");
        assert_eq!(adder_loop_variable("items"), "item");
        assert_eq!(adder_loop_variable("data"), "data");
    }

    #[test]
    fn test_field_and_factory_names() {
        assert_eq!(field_name("Point"), "point");
        assert_eq!(factory_method_name("TextField"), "textField");
        assert_eq!(factory_argument_name(0), "arg0");
    }

    #[test]
    fn test_default_pattern() {
        let pattern = NamingPattern::default();
        let name = pattern.apply("d.h", "TextField");
        assert_eq!(name.package, "d.h");
        assert_eq!(name.simple_name, "FluentTextField");
        assert_eq!(name.to_string(), "d.h.FluentTextField");
    }

    #[test]
    fn test_pattern_with_default_package() {
        let name = NamingPattern::default().apply("", "Point");
        assert_eq!(name.package, "");
        assert_eq!(name.to_string(), "FluentPoint");
    }

    #[test]
    fn test_custom_pattern_with_subpackage() {
        let pattern = NamingPattern::new("%s.fluent.%sBuilder").unwrap();
        let name = pattern.apply("com.example", "Point");
        assert_eq!(name.package, "com.example.fluent");
        assert_eq!(name.simple_name, "PointBuilder");
    }

    #[test]
    fn test_pattern_requires_two_placeholders() {
        assert!(NamingPattern::new("Fluent%s").is_err());
        assert!(NamingPattern::new("%s.%s.%s").is_err());
        assert!(NamingPattern::new("  ").is_err());
        assert!(NamingPattern::new("%s.Wrapped%s").is_ok());
    }

    #[test]
    fn test_resolve_package() {
        assert_eq!(resolve_package("", "com.example"), "com.example");
        assert_eq!(resolve_package("  ", "com.example"), "com.example");
        assert_eq!(resolve_package("d.h", "com.example"), "d.h");
    }

    #[test]
    fn test_identifier_validation() {
        assert!(is_valid_identifier("value"));
        assert!(is_valid_identifier("$x_1"));
        assert!(!is_valid_identifier(""));
        assert!(!is_valid_identifier("default"));
        assert!(!is_valid_identifier("1st"));
        assert!(is_valid_package("com.example.ui"));
        assert!(!is_valid_package("com..example"));
    }
}
