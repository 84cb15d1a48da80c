//! Fluent wrapper generation.
//!
//! Given metadata about a class (constructors, methods, modifiers), fluentgen
//! plans and writes a wrapper class that holds the original as a delegate,
//! exposes a static factory per public constructor and a chainable method per
//! setter or adder.

// Export modules for library usage
pub mod assembler;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod emit;
pub mod errors;
pub mod filter;
pub mod naming;
pub mod observability;
pub mod planner;
pub mod reflect;
pub mod testkit;

// Re-export commonly used types
pub use crate::assembler::{FluentGenerator, FluentGeneratorBuilder};
pub use crate::config::GeneratorConfig;
pub use crate::core::{
    ConstructorDescriptor, MethodDescriptor, PrimitiveType, SourceType, TypeRef, Visibility,
};
pub use crate::emit::{ClassHandle, CodeEmitter, CodeModel};
pub use crate::errors::{Error, ErrorCode, Result};
pub use crate::filter::CandidateFilter;
pub use crate::planner::{GeneratedKind, GeneratedMember, GenerationPlan, GenerationPlanner};
pub use crate::reflect::{MetadataProvider, TypeRegistry};
