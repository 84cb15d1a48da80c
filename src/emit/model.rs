//! In-memory class model.
//!
//! A [`ClassDeclaration`] enforces the structural rules of a class as members
//! are declared: every identifier must be usable in source, and no two
//! members may share kind, name and erased parameter signature. [`CodeModel`]
//! holds the declarations and writes them out.

use super::{java, ClassHandle, CodeEmitter};
use crate::core::TypeRef;
use crate::errors::{Error, Result};
use crate::naming::{self, QualifiedName};
use crate::planner::{GeneratedMember, GenerationPlan, Statement};
use chrono::Utc;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

/// Value written into `@Generated(value = ...)`
pub const GENERATOR_NAME: &str = env!("CARGO_PKG_NAME");

/// Contents of the `@Generated` annotation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedAnnotation {
    pub value: String,
    pub date: String,
}

impl GeneratedAnnotation {
    /// Annotation dated now
    pub fn now() -> Self {
        Self::dated(Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string())
    }

    pub fn dated(date: impl Into<String>) -> Self {
        Self {
            value: GENERATOR_NAME.to_string(),
            date: date.into(),
        }
    }
}

/// Uniqueness key of a declared member
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum MemberKey {
    Field(String),
    Method(String, Vec<TypeRef>),
    Constructor(Vec<TypeRef>),
}

impl MemberKey {
    fn of(member: &GeneratedMember) -> Self {
        if member.kind.is_field() {
            MemberKey::Field(member.name.clone())
        } else if member.kind.is_constructor() {
            MemberKey::Constructor(member.signature())
        } else {
            MemberKey::Method(member.name.clone(), member.signature())
        }
    }
}

/// A declared generated class
#[derive(Debug, Clone)]
pub struct ClassDeclaration {
    name: QualifiedName,
    delegate_type: TypeRef,
    field_name: String,
    annotation: Option<GeneratedAnnotation>,
    members: Vec<GeneratedMember>,
    keys: HashSet<MemberKey>,
}

impl ClassDeclaration {
    /// Empty class wrapping `delegate_type` through the field `field_name`
    pub fn new(name: QualifiedName, delegate_type: TypeRef, field_name: &str) -> Result<Self> {
        let class = name.to_string();
        if !name.package.is_empty() && !naming::is_valid_package(&name.package) {
            return Err(Error::invalid_identifier(&class, &name.package, "package"));
        }
        if !naming::is_valid_identifier(&name.simple_name) {
            return Err(Error::invalid_identifier(&class, &name.simple_name, "class name"));
        }
        if !naming::is_valid_identifier(field_name) {
            return Err(Error::invalid_identifier(&class, field_name, "delegate field"));
        }
        Ok(Self {
            name,
            delegate_type,
            field_name: field_name.to_string(),
            annotation: None,
            members: Vec::new(),
            keys: HashSet::new(),
        })
    }

    pub fn name(&self) -> &QualifiedName {
        &self.name
    }

    pub fn delegate_type(&self) -> &TypeRef {
        &self.delegate_type
    }

    pub fn field_name(&self) -> &str {
        &self.field_name
    }

    pub fn annotation(&self) -> Option<&GeneratedAnnotation> {
        self.annotation.as_ref()
    }

    pub fn set_annotation(&mut self, annotation: Option<GeneratedAnnotation>) {
        self.annotation = annotation;
    }

    pub fn members(&self) -> &[GeneratedMember] {
        &self.members
    }

    /// Declare a member, rejecting bad identifiers and duplicate signatures.
    pub fn declare(&mut self, member: GeneratedMember) -> Result<()> {
        self.check_identifiers(&member)?;
        let key = MemberKey::of(&member);
        if self.keys.contains(&key) {
            return Err(Error::conflict(
                self.name.to_string(),
                member.signature_display(),
            ));
        }
        self.keys.insert(key);
        self.members.push(member);
        Ok(())
    }

    fn check_identifiers(&self, member: &GeneratedMember) -> Result<()> {
        let origin = member
            .origin
            .clone()
            .unwrap_or_else(|| member.kind.to_string());
        let invalid =
            |identifier: &str| Error::invalid_identifier(self.name.to_string(), identifier, &origin);

        if !member.kind.is_constructor() && !naming::is_valid_identifier(&member.name) {
            return Err(invalid(&member.name));
        }

        let mut seen = HashSet::new();
        for parameter in &member.parameters {
            if !naming::is_valid_identifier(&parameter.name) || !seen.insert(parameter.name.as_str()) {
                return Err(invalid(&parameter.name));
            }
        }

        for statement in &member.body {
            match statement {
                Statement::DelegateCall { method, .. } | Statement::ReturnSelfInvocation { method, .. }
                    if !naming::is_valid_identifier(method) =>
                {
                    return Err(invalid(method));
                }
                Statement::DelegateCallInLoop {
                    method, variable, ..
                } => {
                    if !naming::is_valid_identifier(method) {
                        return Err(invalid(method));
                    }
                    if !naming::is_valid_identifier(variable) || seen.contains(variable.as_str()) {
                        return Err(invalid(variable));
                    }
                }
                _ => {}
            }
        }
        Ok(())
    }
}

/// Collection of declared classes, rendered as Java
#[derive(Debug, Clone)]
pub struct CodeModel {
    classes: Vec<ClassDeclaration>,
    index: HashMap<QualifiedName, usize>,
    annotation: Option<GeneratedAnnotation>,
}

impl Default for CodeModel {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeModel {
    /// Model annotating classes with `@Generated`, dated once at creation
    pub fn new() -> Self {
        Self::with_annotation(Some(GeneratedAnnotation::now()))
    }

    pub fn without_generated_annotation() -> Self {
        Self::with_annotation(None)
    }

    pub fn with_annotation(annotation: Option<GeneratedAnnotation>) -> Self {
        Self {
            classes: Vec::new(),
            index: HashMap::new(),
            annotation,
        }
    }

    pub fn classes(&self) -> impl Iterator<Item = &ClassDeclaration> {
        self.classes.iter()
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Build the declaration for `plan` without touching the model
    pub fn stage(&self, plan: &GenerationPlan) -> Result<ClassDeclaration> {
        if self.index.contains_key(&plan.generated) {
            return Err(Error::conflict(plan.generated.to_string(), "class"));
        }
        let mut class =
            ClassDeclaration::new(plan.generated.clone(), plan.delegate_type.clone(), &plan.field_name)?;
        class.set_annotation(self.annotation.clone());
        for member in &plan.members {
            class.declare(member.clone())?;
        }
        Ok(class)
    }

    /// Path of a class's source file below `dir`
    pub fn source_path(dir: &Path, name: &QualifiedName) -> PathBuf {
        let mut path = dir.to_path_buf();
        if !name.package.is_empty() {
            path.extend(name.package.split('.'));
        }
        path.push(format!("{}.java", name.simple_name));
        path
    }
}

impl CodeEmitter for CodeModel {
    type Class = ClassDeclaration;

    fn define_class(&mut self, plan: &GenerationPlan) -> Result<ClassHandle> {
        let class = self.stage(plan)?;
        let handle = ClassHandle::new(class.name().clone());
        self.index.insert(handle.name.clone(), self.classes.len());
        self.classes.push(class);
        Ok(handle)
    }

    fn defined_class(&self, handle: &ClassHandle) -> Option<&ClassDeclaration> {
        self.index.get(&handle.name).map(|&i| &self.classes[i])
    }

    fn defined_class_mut(&mut self, handle: &ClassHandle) -> Option<&mut ClassDeclaration> {
        match self.index.get(&handle.name) {
            Some(&i) => self.classes.get_mut(i),
            None => None,
        }
    }

    fn build(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let mut written = Vec::with_capacity(self.classes.len());
        for class in &self.classes {
            let path = Self::source_path(dir, class.name());
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).map_err(|e| Error::emission_io(parent, e))?;
            }
            fs::write(&path, java::render(class)).map_err(|e| Error::emission_io(&path, e))?;
            log::debug!("Wrote {}", path.display());
            written.push(path);
        }
        Ok(written)
    }
}
