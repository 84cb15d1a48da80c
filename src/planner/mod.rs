//! Generation planning.
//!
//! [`GenerationPlanner::plan`] turns a [`SourceType`] into a [`GenerationPlan`]:
//! a declarative, ordered list of members the wrapper class will have. The
//! plan is computed in one pass and never modified afterwards; emission only
//! reads it.
//!
//! Member order is fixed:
//!
//! 1. delegate field
//! 2. `get()` getter
//! 3. hidden constructor
//! 4. one factory per eligible constructor, in descriptor order
//! 5. setter wrappers (each followed by its boolean overload, if any) and
//!    adder wrappers, in filtered method order

pub mod templates;

use crate::core::{SourceType, TypeRef};
use crate::filter::{CandidateFilter, MemberKind};
use crate::naming::{self, NamingPattern, QualifiedName};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind tag of a generated member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GeneratedKind {
    Field,
    Getter,
    HiddenConstructor,
    Factory,
    SetterWrapper,
    BooleanDefaultOverload,
    AdderWrapper,
}

impl GeneratedKind {
    pub fn is_constructor(self) -> bool {
        self == GeneratedKind::HiddenConstructor
    }

    pub fn is_field(self) -> bool {
        self == GeneratedKind::Field
    }

    /// Wrappers chain: they end by returning the receiving instance.
    pub fn is_wrapper(self) -> bool {
        matches!(
            self,
            GeneratedKind::SetterWrapper
                | GeneratedKind::BooleanDefaultOverload
                | GeneratedKind::AdderWrapper
        )
    }
}

impl fmt::Display for GeneratedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GeneratedKind::Field => "FIELD",
            GeneratedKind::Getter => "GETTER",
            GeneratedKind::HiddenConstructor => "HIDDEN_CONSTRUCTOR",
            GeneratedKind::Factory => "FACTORY",
            GeneratedKind::SetterWrapper => "SETTER_WRAPPER",
            GeneratedKind::BooleanDefaultOverload => "BOOLEAN_DEFAULT_OVERLOAD",
            GeneratedKind::AdderWrapper => "ADDER_WRAPPER",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    Public,
    Private,
    Static,
    Final,
}

impl Modifier {
    pub fn keyword(self) -> &'static str {
        match self {
            Modifier::Public => "public",
            Modifier::Private => "private",
            Modifier::Static => "static",
            Modifier::Final => "final",
        }
    }
}

/// Type of a field or method result, relative to the generated class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberType {
    /// The generated wrapper class itself
    Wrapper,
    /// The wrapped source type
    Delegate,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GeneratedParameter {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeRef,
    /// `T...`; `ty` is the element type
    #[serde(default)]
    pub varargs: bool,
    #[serde(default, rename = "final")]
    pub is_final: bool,
}

impl GeneratedParameter {
    /// A `final` non-varargs parameter
    pub fn fixed(name: &str, ty: TypeRef) -> Self {
        Self {
            name: name.to_string(),
            ty,
            varargs: false,
            is_final: true,
        }
    }

    /// Erased signature type; varargs count as arrays.
    pub fn signature_type(&self) -> TypeRef {
        if self.varargs {
            TypeRef::array_of(self.ty.clone())
        } else {
            self.ty.clone()
        }
    }
}

/// Statement in a generated member body
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Statement {
    /// `this.<field> = <parameter>;`
    AssignField { parameter: String },
    /// `return this.<field>;`
    ReturnField,
    /// `this.<field>.<method>(<argument>);`
    DelegateCall { method: String, argument: String },
    /// `for (<element_type> <variable> : <parameter>) { this.<field>.<method>(<variable>); }`
    DelegateCallInLoop {
        method: String,
        element_type: TypeRef,
        variable: String,
        parameter: String,
    },
    /// `return new <Wrapper>(new <Delegate>(<arguments>));`
    ConstructAndWrap { arguments: Vec<String> },
    /// `return this;`
    ReturnSelf,
    /// `return this.<method>(<argument>);`
    ReturnSelfInvocation { method: String, argument: bool },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedMember {
    pub kind: GeneratedKind,
    /// Empty for constructors
    pub name: String,
    pub modifiers: Vec<Modifier>,
    /// `None` for constructors
    pub returns: Option<MemberType>,
    pub parameters: Vec<GeneratedParameter>,
    pub body: Vec<Statement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub javadoc: Option<String>,
    /// Source member this was derived from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
}

impl GeneratedMember {
    pub fn has_modifier(&self, modifier: Modifier) -> bool {
        self.modifiers.contains(&modifier)
    }

    /// Erased parameter signature used for conflict detection
    pub fn signature(&self) -> Vec<TypeRef> {
        self.parameters.iter().map(|p| p.signature_type()).collect()
    }

    /// `name(T1,T2...)`, or `<init>(...)` for constructors
    pub fn signature_display(&self) -> String {
        let params: Vec<String> = self
            .parameters
            .iter()
            .map(|p| {
                if p.varargs {
                    format!("{}...", p.ty)
                } else {
                    p.ty.to_string()
                }
            })
            .collect();
        let name = if self.kind.is_constructor() {
            "<init>"
        } else {
            self.name.as_str()
        };
        if self.kind.is_field() {
            name.to_string()
        } else {
            format!("{}({})", name, params.join(","))
        }
    }
}

/// Declarative description of one generated wrapper class
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationPlan {
    /// Qualified name of the wrapped source type
    pub source: String,
    pub generated: QualifiedName,
    pub field_name: String,
    pub delegate_type: TypeRef,
    pub members: Vec<GeneratedMember>,
}

impl GenerationPlan {
    pub fn members_of(&self, kind: GeneratedKind) -> impl Iterator<Item = &GeneratedMember> {
        self.members.iter().filter(move |m| m.kind == kind)
    }

    /// Generated methods and constructors, i.e. everything but the field
    pub fn method_count(&self) -> usize {
        self.members.iter().filter(|m| !m.kind.is_field()).count()
    }

    pub fn has_factories(&self) -> bool {
        self.members_of(GeneratedKind::Factory).next().is_some()
    }

    /// Members with the given name, in plan order
    pub fn find<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a GeneratedMember> + 'a {
        self.members.iter().filter(move |m| m.name == name)
    }
}

/// Builds plans for source types.
///
/// Holds the filter, the name pattern and the root package; no state changes
/// between calls, so planning the same type twice gives identical plans.
#[derive(Debug, Clone, Default)]
pub struct GenerationPlanner {
    filter: CandidateFilter,
    pattern: NamingPattern,
    root_package: String,
}

impl GenerationPlanner {
    pub fn new(filter: CandidateFilter, pattern: NamingPattern, root_package: impl Into<String>) -> Self {
        Self {
            filter,
            pattern,
            root_package: root_package.into(),
        }
    }

    pub fn filter(&self) -> &CandidateFilter {
        &self.filter
    }

    /// Generated class name for a source type
    pub fn generated_name(&self, source: &SourceType) -> QualifiedName {
        let package = naming::resolve_package(&self.root_package, source.package());
        self.pattern.apply(package, &source.simple_name)
    }

    pub fn plan(&self, source: &SourceType) -> GenerationPlan {
        let _span = tracing::debug_span!("plan", source = %source.qualified_name).entered();

        let generated = self.generated_name(source);
        let field_name = naming::field_name(&source.simple_name);
        let delegate_type = source.type_ref();

        let mut members = vec![
            templates::delegate_field(&field_name),
            templates::getter(),
            templates::hidden_constructor(&delegate_type, &field_name),
        ];

        let factory_name = naming::factory_method_name(&source.simple_name);
        for constructor in self.filter.select_constructors(source) {
            members.push(templates::factory(
                &factory_name,
                constructor.parameter_types(),
                constructor.to_string(),
            ));
        }

        for candidate in self.filter.select_methods(source) {
            let method = candidate.method;
            let Some(parameter_type) = method.single_parameter_type() else {
                continue;
            };
            match candidate.kind {
                MemberKind::Setter => {
                    let wrapper = templates::setter_wrapper(&method.name, parameter_type);
                    let overload = parameter_type
                        .is_boolean_primitive()
                        .then(|| templates::boolean_default_overload(&wrapper.name, &method.name));
                    members.push(wrapper);
                    members.extend(overload);
                }
                MemberKind::Adder => {
                    members.push(templates::adder_wrapper(&method.name, parameter_type));
                }
            }
        }

        for member in &members {
            tracing::debug!(kind = %member.kind, member = %member.signature_display(), "Planned member");
        }

        let plan = GenerationPlan {
            source: source.qualified_name.clone(),
            generated,
            field_name,
            delegate_type,
            members,
        };

        if !plan.has_factories() {
            tracing::warn!(
                source = %plan.source,
                generated = %plan.generated,
                "No public constructors; the wrapper can not be instantiated"
            );
        }

        plan
    }
}
