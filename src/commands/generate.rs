use crate::assembler::FluentGenerator;
use crate::cli::ConfigOverrides;
use crate::errors::Error;
use crate::reflect::{self, MetadataProvider};
use anyhow::{Context, Result};
use colored::*;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct GenerateConfig {
    pub manifests: Vec<PathBuf>,
    /// Empty means every manifest type
    pub types: Vec<String>,
    pub overrides: ConfigOverrides,
}

/// Add the requested types and write their sources; returns written files.
///
/// A conflict or invalid identifier skips only the affected type. The other
/// types are still written, then the command fails naming the skipped ones.
pub fn generate(config: GenerateConfig) -> Result<Vec<PathBuf>> {
    let generator_config = super::resolve_config(&config.overrides)?;
    let registry = reflect::load_manifests(&config.manifests).context("Failed to load manifests")?;

    let types = if config.types.is_empty() {
        registry.known_types()
    } else {
        config.types.clone()
    };
    if types.is_empty() {
        anyhow::bail!("No types to generate: the manifests describe no types");
    }

    let mut generator =
        FluentGenerator::from_config(generator_config).context("Invalid generator configuration")?;
    let mut skipped: Vec<(String, Error)> = Vec::new();
    for name in &types {
        match generator.add_class_by_name(&registry, name) {
            Ok(_) => {}
            Err(err) if err.is_type_scoped() => {
                tracing::warn!(source = %name, error = %err, "Skipping type");
                eprintln!("{} {}: {}", "skipped".yellow().bold(), name, err);
                skipped.push((name.clone(), err));
            }
            Err(err) => return Err(err).with_context(|| format!("Failed to add {}", name)),
        }
    }

    let written = generator.generate_code().context("Failed to write sources")?;
    for path in &written {
        println!("{}", path.display());
    }

    let names: Vec<String> = skipped.iter().map(|(name, _)| name.clone()).collect();
    match skipped.into_iter().next() {
        None => Ok(written),
        Some((_, first)) => Err(anyhow::Error::new(first).context(format!(
            "Skipped {} of {} types: {}",
            names.len(),
            types.len(),
            names.join(", ")
        ))),
    }
}
