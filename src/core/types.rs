//! Type references as reported by the metadata provider.
//!
//! Types are erased: generic arguments are dropped during parsing, which is
//! what a reflection layer reports for parameter types anyway.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Primitive value types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PrimitiveType {
    Boolean,
    Byte,
    Char,
    Short,
    Int,
    Long,
    Float,
    Double,
}

impl PrimitiveType {
    pub const ALL: [PrimitiveType; 8] = [
        PrimitiveType::Boolean,
        PrimitiveType::Byte,
        PrimitiveType::Char,
        PrimitiveType::Short,
        PrimitiveType::Int,
        PrimitiveType::Long,
        PrimitiveType::Float,
        PrimitiveType::Double,
    ];

    pub fn keyword(self) -> &'static str {
        match self {
            PrimitiveType::Boolean => "boolean",
            PrimitiveType::Byte => "byte",
            PrimitiveType::Char => "char",
            PrimitiveType::Short => "short",
            PrimitiveType::Int => "int",
            PrimitiveType::Long => "long",
            PrimitiveType::Float => "float",
            PrimitiveType::Double => "double",
        }
    }

    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.keyword() == keyword)
    }
}

/// Erased reference to a parameter or member type.
///
/// Class names are binary names: packages separated by `.`, nested types by `$`
/// (`com.example.Outer$Inner`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TypeRef {
    Primitive(PrimitiveType),
    Class(String),
    Array(Box<TypeRef>),
}

/// Error returned when a type spelling cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeParseError {
    pub input: String,
    pub reason: &'static str,
}

impl fmt::Display for TypeParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid type '{}': {}", self.input, self.reason)
    }
}

impl std::error::Error for TypeParseError {}

impl TypeRef {
    pub fn class(binary_name: impl Into<String>) -> Self {
        TypeRef::Class(binary_name.into())
    }

    pub fn array_of(element: TypeRef) -> Self {
        TypeRef::Array(Box::new(element))
    }

    /// Parse a Java-style spelling such as `int`, `java.lang.String[]` or
    /// `java.util.List<java.lang.String>` (generic arguments are erased).
    pub fn parse(input: &str) -> Result<Self, TypeParseError> {
        let error = |reason| TypeParseError {
            input: input.to_string(),
            reason,
        };

        let erased = erase_generics(input.trim()).ok_or_else(|| error("unbalanced '<' '>'"))?;
        let mut base = erased.trim();
        let mut dimensions = 0;
        while let Some(stripped) = base.strip_suffix("[]") {
            base = stripped.trim_end();
            dimensions += 1;
        }

        if base.is_empty() {
            return Err(error("empty type name"));
        }
        if base == "void" {
            return Err(error("void is not a value type"));
        }

        let mut ty = match PrimitiveType::from_keyword(base) {
            Some(primitive) => TypeRef::Primitive(primitive),
            None => {
                if !base.split('.').all(is_binary_name_segment) {
                    return Err(error("not a qualified class name"));
                }
                TypeRef::Class(base.to_string())
            }
        };

        for _ in 0..dimensions {
            ty = TypeRef::array_of(ty);
        }
        Ok(ty)
    }

    /// True only for the `boolean` primitive (the boxed type does not count).
    pub fn is_boolean_primitive(&self) -> bool {
        matches!(self, TypeRef::Primitive(PrimitiveType::Boolean))
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self, TypeRef::Primitive(_))
    }

    /// Component type of an array
    pub fn element(&self) -> Option<&TypeRef> {
        match self {
            TypeRef::Array(element) => Some(element),
            _ => None,
        }
    }

    /// Innermost non-array type
    pub fn base(&self) -> &TypeRef {
        match self {
            TypeRef::Array(element) => element.base(),
            other => other,
        }
    }

    /// Source-level qualified spelling (`a.Outer.Inner[]`)
    pub fn canonical_name(&self) -> String {
        match self {
            TypeRef::Primitive(p) => p.keyword().to_string(),
            TypeRef::Class(name) => name.replace('$', "."),
            TypeRef::Array(element) => format!("{}[]", element.canonical_name()),
        }
    }

    /// Unqualified spelling (`Inner[]`)
    pub fn simple_name(&self) -> String {
        match self {
            TypeRef::Primitive(p) => p.keyword().to_string(),
            TypeRef::Class(name) => name
                .rsplit(|c: char| c == '.' || c == '$')
                .next()
                .unwrap_or(name.as_str())
                .to_string(),
            TypeRef::Array(element) => format!("{}[]", element.simple_name()),
        }
    }

    /// Package of a class type; `None` for primitives and arrays, `Some("")`
    /// for the default package.
    pub fn package(&self) -> Option<&str> {
        match self {
            TypeRef::Class(name) => {
                let top_level = name.split('$').next().unwrap_or(name.as_str());
                Some(top_level.rsplit_once('.').map(|(p, _)| p).unwrap_or(""))
            }
            _ => None,
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Primitive(p) => f.write_str(p.keyword()),
            TypeRef::Class(name) => f.write_str(name),
            TypeRef::Array(element) => write!(f, "{}[]", element),
        }
    }
}

impl FromStr for TypeRef {
    type Err = TypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TypeRef::parse(s)
    }
}

impl TryFrom<String> for TypeRef {
    type Error = TypeParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        TypeRef::parse(&value)
    }
}

impl From<TypeRef> for String {
    fn from(value: TypeRef) -> Self {
        value.to_string()
    }
}

impl From<PrimitiveType> for TypeRef {
    fn from(value: PrimitiveType) -> Self {
        TypeRef::Primitive(value)
    }
}

/// Drop everything between balanced angle brackets
fn erase_generics(input: &str) -> Option<String> {
    let mut depth = 0usize;
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '<' => depth += 1,
            '>' => depth = depth.checked_sub(1)?,
            _ if depth == 0 => out.push(c),
            _ => {}
        }
    }
    (depth == 0).then_some(out)
}

fn is_binary_name_segment(segment: &str) -> bool {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' || first == '$' => {
            chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
        }
        _ => false,
    }
}
