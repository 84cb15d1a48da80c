//! Code emission.
//!
//! The planner only describes classes. A [`CodeEmitter`] turns plans into
//! declared classes and finally into source files. [`CodeModel`] is the
//! bundled implementation, rendering Java.

pub mod java;
pub mod model;

pub use model::{ClassDeclaration, CodeModel, GeneratedAnnotation};

use crate::errors::Result;
use crate::naming::QualifiedName;
use crate::planner::GenerationPlan;
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// Handle to a class declared in an emitter
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ClassHandle {
    pub name: QualifiedName,
}

impl ClassHandle {
    pub fn new(name: QualifiedName) -> Self {
        Self { name }
    }
}

impl fmt::Display for ClassHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.name.fmt(f)
    }
}

/// Declares classes from plans and serializes them.
pub trait CodeEmitter {
    /// Declared class representation
    type Class;

    /// Declare the class described by `plan`.
    ///
    /// Either every member is declared or nothing is: on error the emitter is
    /// left exactly as it was.
    fn define_class(&mut self, plan: &GenerationPlan) -> Result<ClassHandle>;

    fn defined_class(&self, handle: &ClassHandle) -> Option<&Self::Class>;

    fn defined_class_mut(&mut self, handle: &ClassHandle) -> Option<&mut Self::Class>;

    /// Write every declared class below `dir`, returning the written files.
    fn build(&self, dir: &Path) -> Result<Vec<PathBuf>>;
}
