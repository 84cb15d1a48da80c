//! Class assembly: the public entry point of the generator.
//!
//! A [`FluentGenerator`] owns the configuration, a [`GenerationPlanner`] and a
//! [`CodeEmitter`]. Each `add_class` call plans one source type, declares the
//! plan in the emitter and registers the resulting handle. Once every type is
//! added, [`FluentGenerator::generate_code`] writes all sources at once.
//!
//! ```rust,no_run
//! use fluentgen::assembler::FluentGenerator;
//! use fluentgen::core::{ConstructorDescriptor, MethodDescriptor, PrimitiveType, SourceType, TypeRef};
//!
//! let int = TypeRef::Primitive(PrimitiveType::Int);
//! let point = SourceType::new("com.example.Point")
//!     .with_constructor(ConstructorDescriptor::new([int.clone(), int.clone()]))
//!     .with_method(MethodDescriptor::new("setX", [int.clone()]));
//!
//! let mut generator = FluentGenerator::builder()
//!     .root_package("com.example.fluent")
//!     .target_directory("target/generated-sources/java")
//!     .build()?;
//! generator.add_class(&point)?;
//! let written = generator.generate_code()?;
//! # Ok::<(), fluentgen::errors::Error>(())
//! ```

use crate::config::GeneratorConfig;
use crate::core::SourceType;
use crate::emit::{ClassHandle, CodeEmitter, CodeModel};
use crate::errors::{Error, Result};
use crate::filter::CandidateFilter;
use crate::planner::{GenerationPlan, GenerationPlanner};
use crate::reflect::MetadataProvider;
use std::collections::{BTreeSet, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

/// Make sure generated sources can be written below `dir`, creating it if needed.
pub fn prepare_target_directory(dir: &Path) -> Result<()> {
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| {
            Error::configuration(format!(
                "target directory '{}' could not be created: {}",
                dir.display(),
                e
            ))
        })?;
        log::debug!("Created target directory {}", dir.display());
    }
    let metadata = fs::metadata(dir).map_err(|e| {
        Error::configuration(format!("target directory '{}' is not accessible: {}", dir.display(), e))
    })?;
    if !metadata.is_dir() {
        return Err(Error::configuration(format!(
            "target directory '{}' is not a directory",
            dir.display()
        )));
    }
    // Permission bits say nothing about read-only mounts or foreign owners
    tempfile::NamedTempFile::new_in(dir).map_err(|e| {
        Error::configuration(format!(
            "target directory '{}' is not writable: {}",
            dir.display(),
            e
        ))
    })?;
    Ok(())
}

#[derive(Debug, Clone)]
struct Registration {
    handle: ClassHandle,
    plan: GenerationPlan,
}

/// Generates fluent wrappers for source types.
#[derive(Debug)]
pub struct FluentGenerator<E: CodeEmitter = CodeModel> {
    config: GeneratorConfig,
    planner: GenerationPlanner,
    emitter: E,
    /// Source qualified name -> registration, write-once
    registry: HashMap<String, Registration>,
    order: Vec<String>,
}

impl FluentGenerator<CodeModel> {
    pub fn builder() -> FluentGeneratorBuilder {
        FluentGeneratorBuilder::default()
    }

    /// Generator writing Java sources with the bundled [`CodeModel`]
    pub fn from_config(config: GeneratorConfig) -> Result<Self> {
        let model = if config.generated_annotation {
            CodeModel::new()
        } else {
            CodeModel::without_generated_annotation()
        };
        Self::with_emitter(config, model)
    }
}

impl<E: CodeEmitter> FluentGenerator<E> {
    /// Validate `config` and prepare the target directory.
    ///
    /// Nothing is returned unless every check passes.
    pub fn with_emitter(config: GeneratorConfig, emitter: E) -> Result<Self> {
        config.validate()?;
        let pattern = config.naming_pattern()?;
        prepare_target_directory(&config.target_directory)?;

        let filter = CandidateFilter::new(config.ignored_method_names.clone());
        let planner = GenerationPlanner::new(filter, pattern, config.root_package.trim());
        Ok(Self {
            config,
            planner,
            emitter,
            registry: HashMap::new(),
            order: Vec::new(),
        })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn target_directory(&self) -> &Path {
        &self.config.target_directory
    }

    /// Plan `source` without registering anything
    pub fn plan(&self, source: &SourceType) -> GenerationPlan {
        self.planner.plan(source)
    }

    /// Plan `source`, declare it in the emitter and register the handle.
    ///
    /// On error nothing is registered and the emitter is unchanged.
    pub fn add_class(&mut self, source: &SourceType) -> Result<ClassHandle> {
        let _span = tracing::debug_span!("add_class", source = %source.qualified_name).entered();

        let plan = self.planner.plan(source);
        let handle = self.emitter.define_class(&plan)?;
        tracing::info!(
            source = %source.qualified_name,
            generated = %handle,
            methods = plan.method_count(),
            "Added class"
        );

        self.order.push(source.qualified_name.clone());
        self.registry.insert(
            source.qualified_name.clone(),
            Registration {
                handle: handle.clone(),
                plan,
            },
        );
        Ok(handle)
    }

    /// Resolve `name` through `provider`, then [`add_class`](Self::add_class).
    pub fn add_class_by_name(
        &mut self,
        provider: &dyn MetadataProvider,
        name: &str,
    ) -> Result<ClassHandle> {
        let source = provider.resolve(name).map_err(|e| match e {
            resolution @ Error::TypeResolution { .. } => resolution,
            other => Error::type_resolution_caused_by(name, other),
        })?;
        self.add_class(&source)
    }

    /// Write every added class to the target directory
    pub fn generate_code(&self) -> Result<Vec<PathBuf>> {
        let written = self.emitter.build(&self.config.target_directory)?;
        tracing::info!(
            files = written.len(),
            target = %self.config.target_directory.display(),
            "Generated sources"
        );
        Ok(written)
    }

    fn registration(&self, name: &str) -> Result<&Registration> {
        self.registry
            .get(name)
            .ok_or_else(|| Error::NotRegistered(name.to_string()))
    }

    /// Handle of the class generated for source type `name`
    pub fn handle(&self, name: &str) -> Result<&ClassHandle> {
        self.registration(name).map(|r| &r.handle)
    }

    /// The class generated for source type `name`, for post-processing
    pub fn defined_class(&self, name: &str) -> Result<&E::Class> {
        let handle = self.handle(name)?;
        self.emitter
            .defined_class(handle)
            .ok_or_else(|| Error::NotRegistered(name.to_string()))
    }

    pub fn defined_class_mut(&mut self, name: &str) -> Result<&mut E::Class> {
        let handle = self.handle(name)?.clone();
        self.emitter
            .defined_class_mut(&handle)
            .ok_or_else(|| Error::NotRegistered(name.to_string()))
    }

    pub fn plan_for(&self, name: &str) -> Result<&GenerationPlan> {
        self.registration(name).map(|r| &r.plan)
    }

    /// Added source type names, in order
    pub fn registered(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn emitter(&self) -> &E {
        &self.emitter
    }

    pub fn emitter_mut(&mut self) -> &mut E {
        &mut self.emitter
    }
}

/// Builder for [`FluentGenerator`]; validation happens in `build`.
#[derive(Debug, Clone, Default)]
pub struct FluentGeneratorBuilder {
    config: GeneratorConfig,
}

impl FluentGeneratorBuilder {
    /// Start from an existing configuration
    pub fn config(mut self, config: GeneratorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn root_package(mut self, root_package: impl Into<String>) -> Self {
        self.config.root_package = root_package.into();
        self
    }

    pub fn target_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.target_directory = dir.into();
        self
    }

    pub fn filename_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.config.filename_pattern = pattern.into();
        self
    }

    pub fn ignore_method(mut self, name: impl Into<String>) -> Self {
        self.config.ignored_method_names.insert(name.into());
        self
    }

    /// Replace the ignored method names
    pub fn ignored_method_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.ignored_method_names = names.into_iter().map(Into::into).collect::<BTreeSet<_>>();
        self
    }

    pub fn generated_annotation(mut self, enabled: bool) -> Self {
        self.config.generated_annotation = enabled;
        self
    }

    pub fn build(self) -> Result<FluentGenerator> {
        FluentGenerator::from_config(self.config)
    }

    pub fn build_with_emitter<E: CodeEmitter>(self, emitter: E) -> Result<FluentGenerator<E>> {
        FluentGenerator::with_emitter(self.config, emitter)
    }
}
