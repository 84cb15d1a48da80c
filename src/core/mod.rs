//! Metadata model for source types.
//!
//! A [`SourceType`] is what the metadata provider hands to the generator: the
//! type's name plus its constructors and methods in enumeration order. The
//! model is read-only input; nothing in the pipeline mutates it.

pub mod types;

pub use types::{PrimitiveType, TypeParseError, TypeRef};

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    Package,
    Private,
}

impl Visibility {
    /// Modifier keyword; package-private has none.
    pub fn keyword(self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Protected => "protected",
            Visibility::Package => "",
            Visibility::Private => "private",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParameterDescriptor {
    #[serde(rename = "type")]
    pub ty: TypeRef,
    pub position: usize,
}

impl ParameterDescriptor {
    pub fn new(ty: TypeRef, position: usize) -> Self {
        Self { ty, position }
    }
}

fn parameters_from(types: impl IntoIterator<Item = TypeRef>) -> Vec<ParameterDescriptor> {
    types
        .into_iter()
        .enumerate()
        .map(|(position, ty)| ParameterDescriptor::new(ty, position))
        .collect()
}

fn write_parameter_list(f: &mut fmt::Formatter<'_>, params: &[ParameterDescriptor]) -> fmt::Result {
    let rendered: Vec<String> = params.iter().map(|p| p.ty.to_string()).collect();
    write!(f, "({})", rendered.join(","))
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstructorDescriptor {
    pub parameters: Vec<ParameterDescriptor>,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default)]
    pub synthetic: bool,
}

impl ConstructorDescriptor {
    /// Public, non-synthetic constructor with the given parameter types
    pub fn new(types: impl IntoIterator<Item = TypeRef>) -> Self {
        Self {
            parameters: parameters_from(types),
            visibility: Visibility::Public,
            synthetic: false,
        }
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn synthetic(mut self) -> Self {
        self.synthetic = true;
        self
    }

    pub fn parameter_types(&self) -> impl Iterator<Item = &TypeRef> {
        self.parameters.iter().map(|p| &p.ty)
    }
}

impl fmt::Display for ConstructorDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<init>")?;
        write_parameter_list(f, &self.parameters)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDescriptor {
    pub name: String,
    #[serde(default)]
    pub visibility: Visibility,
    pub returns_void: bool,
    pub parameters: Vec<ParameterDescriptor>,
    #[serde(default)]
    pub deprecated: bool,
    #[serde(default)]
    pub synthetic: bool,
    #[serde(default)]
    pub bridge: bool,
}

impl MethodDescriptor {
    /// Public void method with the given parameter types
    pub fn new(name: impl Into<String>, types: impl IntoIterator<Item = TypeRef>) -> Self {
        Self {
            name: name.into(),
            visibility: Visibility::Public,
            returns_void: true,
            parameters: parameters_from(types),
            deprecated: false,
            synthetic: false,
            bridge: false,
        }
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Mark the method as returning a value
    pub fn returning_value(mut self) -> Self {
        self.returns_void = false;
        self
    }

    pub fn deprecated(mut self) -> Self {
        self.deprecated = true;
        self
    }

    pub fn synthetic(mut self) -> Self {
        self.synthetic = true;
        self
    }

    pub fn bridge(mut self) -> Self {
        self.bridge = true;
        self
    }

    /// Type of the only parameter, if the method has exactly one
    pub fn single_parameter_type(&self) -> Option<&TypeRef> {
        match self.parameters.as_slice() {
            [only] => Some(&only.ty),
            _ => None,
        }
    }
}

impl fmt::Display for MethodDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        write_parameter_list(f, &self.parameters)
    }
}

/// A type whose public surface drives generation
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceType {
    pub qualified_name: String,
    pub simple_name: String,
    #[serde(default)]
    pub constructors: Vec<ConstructorDescriptor>,
    #[serde(default)]
    pub methods: Vec<MethodDescriptor>,
}

impl SourceType {
    /// Create an empty source type from its binary name (`com.example.Point`)
    pub fn new(qualified_name: impl Into<String>) -> Self {
        let qualified_name = qualified_name.into();
        let simple_name = TypeRef::Class(qualified_name.clone()).simple_name();
        Self {
            qualified_name,
            simple_name,
            constructors: Vec::new(),
            methods: Vec::new(),
        }
    }

    pub fn with_constructor(mut self, constructor: ConstructorDescriptor) -> Self {
        self.constructors.push(constructor);
        self
    }

    pub fn with_method(mut self, method: MethodDescriptor) -> Self {
        self.methods.push(method);
        self
    }

    /// Package of the type; empty for the default package
    pub fn package(&self) -> &str {
        let top_level = self
            .qualified_name
            .split('$')
            .next()
            .unwrap_or(self.qualified_name.as_str());
        top_level.rsplit_once('.').map(|(p, _)| p).unwrap_or("")
    }

    /// The type itself as a reference, e.g. for the delegate field
    pub fn type_ref(&self) -> TypeRef {
        TypeRef::Class(self.qualified_name.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int() -> TypeRef {
        TypeRef::Primitive(PrimitiveType::Int)
    }

    #[test]
    fn test_source_type_names() {
        let ty = SourceType::new("com.vaadin.ui.TextField");
        assert_eq!(ty.simple_name, "TextField");
        assert_eq!(ty.package(), "com.vaadin.ui");

        let nested = SourceType::new("com.example.Outer$Inner");
        assert_eq!(nested.simple_name, "Inner");
        assert_eq!(nested.package(), "com.example");

        let default_pkg = SourceType::new("Point");
        assert_eq!(default_pkg.package(), "");
    }

    #[test]
    fn test_parameter_positions_follow_order() {
        let ctor = ConstructorDescriptor::new([int(), TypeRef::class("java.lang.String")]);
        let positions: Vec<usize> = ctor.parameters.iter().map(|p| p.position).collect();
        assert_eq!(positions, vec![0, 1]);
    }

    #[test]
    fn test_method_display() {
        let m = MethodDescriptor::new("setX", [int()]);
        assert_eq!(m.to_string(), "setX(int)");
        let c = ConstructorDescriptor::new([int(), int()]);
        assert_eq!(c.to_string(), "<init>(int,int)");
    }

    #[test]
    fn test_single_parameter_type() {
        let one = MethodDescriptor::new("setX", [int()]);
        assert_eq!(one.single_parameter_type(), Some(&int()));

        let two = MethodDescriptor::new("setXY", [int(), int()]);
        assert_eq!(two.single_parameter_type(), None);
    }

    #[test]
    fn test_builder_flags() {
        let m = MethodDescriptor::new("setX", [int()])
            .with_visibility(Visibility::Protected)
            .returning_value()
            .deprecated()
            .synthetic()
            .bridge();
        assert_eq!(m.visibility, Visibility::Protected);
        assert!(!m.returns_void);
        assert!(m.deprecated && m.synthetic && m.bridge);
    }
}
