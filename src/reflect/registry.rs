use super::MetadataProvider;
use crate::core::SourceType;
use crate::errors::{Error, Result};
use std::collections::HashMap;

/// In-memory metadata provider
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    types: Vec<SourceType>,
    index: HashMap<String, usize>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a type; a later registration of the same name replaces the earlier one.
    pub fn register(&mut self, source: SourceType) {
        match self.index.get(&source.qualified_name) {
            Some(&i) => {
                log::warn!("Replacing metadata for {}", source.qualified_name);
                self.types[i] = source;
            }
            None => {
                self.index.insert(source.qualified_name.clone(), self.types.len());
                self.types.push(source);
            }
        }
    }

    pub fn with_type(mut self, source: SourceType) -> Self {
        self.register(source);
        self
    }

    /// Merge another registry into this one
    pub fn extend(&mut self, other: TypeRegistry) {
        for source in other.types {
            self.register(source);
        }
    }

    /// Registered names in insertion order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.types.iter().map(|t| t.qualified_name.as_str())
    }

    pub fn get(&self, name: &str) -> Option<&SourceType> {
        self.index
            .get(name)
            .map(|&i| &self.types[i])
            .or_else(|| {
                // nested types may be requested with `.` instead of `$`
                self.types
                    .iter()
                    .find(|t| t.type_ref().canonical_name() == name)
            })
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl MetadataProvider for TypeRegistry {
    fn resolve(&self, name: &str) -> Result<SourceType> {
        self.get(name)
            .cloned()
            .ok_or_else(|| Error::type_resolution(name))
    }

    fn known_types(&self) -> Vec<String> {
        self.names().map(str::to_string).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{MethodDescriptor, PrimitiveType, TypeRef};

    #[test]
    fn test_resolve_registered_type() {
        let registry = TypeRegistry::new().with_type(SourceType::new("a.Point"));
        let resolved = registry.resolve("a.Point").unwrap();
        assert_eq!(resolved.simple_name, "Point");
    }

    #[test]
    fn test_unknown_type_is_resolution_error() {
        let err = TypeRegistry::new().resolve("a.Missing").unwrap_err();
        assert!(matches!(err, Error::TypeResolution { ref name, .. } if name == "a.Missing"));
    }

    #[test]
    fn test_nested_type_by_canonical_name() {
        let registry = TypeRegistry::new().with_type(SourceType::new("a.Outer$Inner"));
        assert!(registry.resolve("a.Outer.Inner").is_ok());
        assert!(registry.resolve("a.Outer$Inner").is_ok());
    }

    #[test]
    fn test_reregistering_replaces_in_place() {
        let int = TypeRef::Primitive(PrimitiveType::Int);
        let mut registry = TypeRegistry::new()
            .with_type(SourceType::new("a.A"))
            .with_type(SourceType::new("a.B"));
        registry.register(SourceType::new("a.A").with_method(MethodDescriptor::new("setX", [int])));
        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["a.A", "a.B"]);
        assert_eq!(registry.get("a.A").unwrap().methods.len(), 1);
    }
}
