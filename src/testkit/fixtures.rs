//! Source types shared by tests.

use crate::core::{
    ConstructorDescriptor, MethodDescriptor, PrimitiveType, SourceType, TypeRef, Visibility,
};

use super::Value;

pub fn int() -> TypeRef {
    TypeRef::Primitive(PrimitiveType::Int)
}

pub fn boolean() -> TypeRef {
    TypeRef::Primitive(PrimitiveType::Boolean)
}

pub fn string() -> TypeRef {
    TypeRef::class("java.lang.String")
}

/// `Point(int,int)` with `setX(int)`, `setY(int)` and `addTag(String)`
pub fn point() -> SourceType {
    SourceType::new("com.example.Point")
        .with_constructor(ConstructorDescriptor::new([int(), int()]))
        .with_method(MethodDescriptor::new("setX", [int()]))
        .with_method(MethodDescriptor::new("setY", [int()]))
        .with_method(MethodDescriptor::new("addTag", [string()]))
}

/// UI component with boolean setters and members that must be skipped
pub fn text_field() -> SourceType {
    SourceType::new("com.example.ui.TextField")
        .with_constructor(ConstructorDescriptor::new([]))
        .with_constructor(ConstructorDescriptor::new([string()]))
        .with_constructor(ConstructorDescriptor::new([string(), string()]).with_visibility(Visibility::Protected))
        .with_constructor(ConstructorDescriptor::new([int()]).synthetic())
        .with_method(MethodDescriptor::new("setValue", [string()]))
        .with_method(MethodDescriptor::new("setImmediate", [boolean()]))
        .with_method(MethodDescriptor::new("setEnabled", [TypeRef::class("java.lang.Boolean")]))
        .with_method(MethodDescriptor::new("addStyleName", [string()]))
        .with_method(MethodDescriptor::new("setId", [string()]))
        .with_method(MethodDescriptor::new("getValue", []).returning_value())
        .with_method(MethodDescriptor::new("setWidth", [int(), string()]))
        .with_method(MethodDescriptor::new("setCaption", [string()]).deprecated())
        .with_method(MethodDescriptor::new("setParent", [TypeRef::class("java.lang.Object")]).synthetic().bridge())
        .with_method(MethodDescriptor::new("setInternal", [int()]).with_visibility(Visibility::Protected))
        .with_method(MethodDescriptor::new("setComputed", [int()]).returning_value())
}

/// No public constructor: the wrapper has no factory
pub fn singleton() -> SourceType {
    SourceType::new("com.example.Registry")
        .with_constructor(ConstructorDescriptor::new([]).with_visibility(Visibility::Private))
        .with_method(MethodDescriptor::new("setName", [string()]))
}

/// A representative argument for a parameter type
pub fn sample_value(ty: &TypeRef, seed: i64) -> Value {
    if ty.is_boolean_primitive() {
        Value::Bool(seed % 2 == 0)
    } else if ty.is_primitive() {
        Value::Int(seed)
    } else {
        Value::Text(format!("v{}", seed))
    }
}
