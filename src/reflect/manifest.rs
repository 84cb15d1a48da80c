//! Type manifests.
//!
//! A manifest describes source types in JSON or TOML:
//!
//! ```toml
//! [[types]]
//! name = "com.example.Point"
//!
//! [[types.constructors]]
//! parameters = ["int", "int"]
//!
//! [[types.methods]]
//! name = "setX"
//! parameters = ["int"]
//!
//! [[types.methods]]
//! name = "getX"
//! returns = "int"
//! ```
//!
//! Members default to public, void and not deprecated, synthetic or bridge.

use super::TypeRegistry;
use crate::core::{
    ConstructorDescriptor, MethodDescriptor, SourceType, TypeParseError, TypeRef, Visibility,
};
use crate::errors::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestFormat {
    Json,
    Toml,
}

impl ManifestFormat {
    /// Format by file extension; anything but `.toml` is read as JSON
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => ManifestFormat::Toml,
            _ => ManifestFormat::Json,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ManifestFile {
    #[serde(default)]
    types: Vec<TypeEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TypeEntry {
    name: String,
    #[serde(default)]
    constructors: Vec<ConstructorEntry>,
    #[serde(default)]
    methods: Vec<MethodEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConstructorEntry {
    #[serde(default)]
    parameters: Vec<String>,
    #[serde(default)]
    visibility: Visibility,
    #[serde(default)]
    synthetic: bool,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct MethodEntry {
    name: String,
    #[serde(default)]
    parameters: Vec<String>,
    #[serde(default)]
    visibility: Visibility,
    returns: Option<String>,
    #[serde(default)]
    deprecated: bool,
    #[serde(default)]
    synthetic: bool,
    #[serde(default)]
    bridge: bool,
}

fn parse_types(spellings: &[String]) -> std::result::Result<Vec<TypeRef>, TypeParseError> {
    spellings.iter().map(|s| TypeRef::parse(s)).collect()
}

fn convert(entry: TypeEntry, path: Option<&Path>) -> Result<SourceType> {
    let fail = |member: &str, e: TypeParseError| {
        Error::metadata(
            format!("{} {}: {}", entry.name, member, e),
            path.map(Path::to_path_buf),
        )
    };

    if TypeRef::parse(&entry.name).map_or(true, |t| !matches!(t, TypeRef::Class(_))) {
        return Err(Error::metadata(
            format!("'{}' is not a class name", entry.name),
            path.map(Path::to_path_buf),
        ));
    }

    let mut source = SourceType::new(entry.name.clone());
    for ctor in &entry.constructors {
        let types = parse_types(&ctor.parameters).map_err(|e| fail("constructor", e))?;
        let mut descriptor = ConstructorDescriptor::new(types).with_visibility(ctor.visibility);
        descriptor.synthetic = ctor.synthetic;
        source.constructors.push(descriptor);
    }
    for method in &entry.methods {
        let types = parse_types(&method.parameters).map_err(|e| fail(&method.name, e))?;
        let mut descriptor =
            MethodDescriptor::new(method.name.clone(), types).with_visibility(method.visibility);
        if let Some(returns) = method.returns.as_deref().filter(|r| r.trim() != "void") {
            TypeRef::parse(returns).map_err(|e| fail(&method.name, e))?;
            descriptor = descriptor.returning_value();
        }
        descriptor.deprecated = method.deprecated;
        descriptor.synthetic = method.synthetic;
        descriptor.bridge = method.bridge;
        source.methods.push(descriptor);
    }
    Ok(source)
}

/// Parse manifest content into source types, in file order
pub fn parse_manifest(content: &str, format: ManifestFormat) -> Result<Vec<SourceType>> {
    parse_manifest_at(content, format, None)
}

fn parse_manifest_at(
    content: &str,
    format: ManifestFormat,
    path: Option<&Path>,
) -> Result<Vec<SourceType>> {
    let owned_path = || path.map(Path::to_path_buf);
    let file: ManifestFile = match format {
        ManifestFormat::Json => serde_json::from_str(content)
            .map_err(|e| Error::metadata(format!("invalid JSON: {}", e), owned_path()))?,
        ManifestFormat::Toml => toml::from_str(content)
            .map_err(|e| Error::metadata(format!("invalid TOML: {}", e), owned_path()))?,
    };
    file.types.into_iter().map(|t| convert(t, path)).collect()
}

/// Load one manifest file into a registry
pub fn load_manifest(path: &Path) -> Result<TypeRegistry> {
    let content = fs::read_to_string(path)
        .map_err(|e| Error::metadata(format!("cannot read manifest: {}", e), Some(path.to_path_buf())))?;
    let types = parse_manifest_at(&content, ManifestFormat::from_path(path), Some(path))?;
    log::debug!("Loaded {} types from {}", types.len(), path.display());

    let mut registry = TypeRegistry::new();
    for source in types {
        registry.register(source);
    }
    Ok(registry)
}

/// Load several manifests; later files win on duplicate names.
pub fn load_manifests(paths: &[PathBuf]) -> Result<TypeRegistry> {
    let mut registry = TypeRegistry::new();
    for path in paths {
        registry.extend(load_manifest(path)?);
    }
    Ok(registry)
}
