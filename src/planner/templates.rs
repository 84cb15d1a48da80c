//! Member templates.
//!
//! Each function builds one [`GeneratedMember`] from names and types only;
//! none of them looks at predicates or the source type.

use super::{
    GeneratedKind, GeneratedMember, GeneratedParameter, MemberType, Modifier, Statement,
};
use crate::core::TypeRef;
use crate::naming;

const FIELD_DOC: &str = "delegate";
const GETTER_DOC: &str = "@return the created instance";
const HIDDEN_CONSTRUCTOR_DOC: &str = "Hide constructor, use static factory methods.";

/// Private final delegate field
pub fn delegate_field(field_name: &str) -> GeneratedMember {
    GeneratedMember {
        kind: GeneratedKind::Field,
        name: field_name.to_string(),
        modifiers: vec![Modifier::Private, Modifier::Final],
        returns: Some(MemberType::Delegate),
        parameters: Vec::new(),
        body: Vec::new(),
        javadoc: Some(FIELD_DOC.to_string()),
        origin: None,
    }
}

/// `public final Delegate get()`
pub fn getter() -> GeneratedMember {
    GeneratedMember {
        kind: GeneratedKind::Getter,
        name: naming::GETTER_NAME.to_string(),
        modifiers: vec![Modifier::Public, Modifier::Final],
        returns: Some(MemberType::Delegate),
        parameters: Vec::new(),
        body: vec![Statement::ReturnField],
        javadoc: Some(GETTER_DOC.to_string()),
        origin: None,
    }
}

/// Private constructor taking the delegate
pub fn hidden_constructor(delegate: &TypeRef, field_name: &str) -> GeneratedMember {
    GeneratedMember {
        kind: GeneratedKind::HiddenConstructor,
        name: String::new(),
        modifiers: vec![Modifier::Private],
        returns: None,
        parameters: vec![GeneratedParameter::fixed(field_name, delegate.clone())],
        body: vec![Statement::AssignField {
            parameter: field_name.to_string(),
        }],
        javadoc: Some(HIDDEN_CONSTRUCTOR_DOC.to_string()),
        origin: None,
    }
}

/// Static factory mirroring one constructor's parameter list
pub fn factory<'a>(
    name: &str,
    parameter_types: impl IntoIterator<Item = &'a TypeRef>,
    origin: String,
) -> GeneratedMember {
    let parameters: Vec<GeneratedParameter> = parameter_types
        .into_iter()
        .enumerate()
        .map(|(i, ty)| GeneratedParameter {
            name: naming::factory_argument_name(i),
            ty: ty.clone(),
            varargs: false,
            is_final: false,
        })
        .collect();
    let arguments = parameters.iter().map(|p| p.name.clone()).collect();

    GeneratedMember {
        kind: GeneratedKind::Factory,
        name: name.to_string(),
        modifiers: vec![Modifier::Public, Modifier::Static],
        returns: Some(MemberType::Wrapper),
        parameters,
        body: vec![Statement::ConstructAndWrap { arguments }],
        javadoc: None,
        origin: Some(origin),
    }
}

/// `x(T x) { delegate.setX(x); return this; }`
pub fn setter_wrapper(method_name: &str, parameter_type: &TypeRef) -> GeneratedMember {
    let name = naming::setter_wrapper_name(method_name);
    GeneratedMember {
        kind: GeneratedKind::SetterWrapper,
        name: name.clone(),
        modifiers: vec![Modifier::Public],
        returns: Some(MemberType::Wrapper),
        parameters: vec![GeneratedParameter::fixed(&name, parameter_type.clone())],
        body: vec![
            Statement::DelegateCall {
                method: method_name.to_string(),
                argument: name,
            },
            Statement::ReturnSelf,
        ],
        javadoc: None,
        origin: Some(method_name.to_string()),
    }
}

/// Zero-argument overload of a boolean setter wrapper, equivalent to `name(true)`
pub fn boolean_default_overload(wrapper_name: &str, method_name: &str) -> GeneratedMember {
    GeneratedMember {
        kind: GeneratedKind::BooleanDefaultOverload,
        name: wrapper_name.to_string(),
        modifiers: vec![Modifier::Public],
        returns: Some(MemberType::Wrapper),
        parameters: Vec::new(),
        body: vec![Statement::ReturnSelfInvocation {
            method: wrapper_name.to_string(),
            argument: true,
        }],
        javadoc: Some(format!("@return #{}(true)", wrapper_name)),
        origin: Some(method_name.to_string()),
    }
}

/// `addXs(E... xs) { for (E x : xs) delegate.addX(x); return this; }`
pub fn adder_wrapper(method_name: &str, element_type: &TypeRef) -> GeneratedMember {
    let parameter = naming::adder_parameter_name(method_name);
    let variable = naming::adder_loop_variable(&parameter);
    GeneratedMember {
        kind: GeneratedKind::AdderWrapper,
        name: naming::adder_wrapper_name(method_name),
        modifiers: vec![Modifier::Public],
        returns: Some(MemberType::Wrapper),
        parameters: vec![GeneratedParameter {
            name: parameter.clone(),
            ty: element_type.clone(),
            varargs: true,
            is_final: false,
        }],
        body: vec![
            Statement::DelegateCallInLoop {
                method: method_name.to_string(),
                element_type: element_type.clone(),
                variable,
                parameter,
            },
            Statement::ReturnSelf,
        ],
        javadoc: None,
        origin: Some(method_name.to_string()),
    }
}
