//! Method eligibility predicates.
//!
//! Predicates are plain values: atomic checks are available as constants,
//! composites are built with [`MethodPredicate::and`], [`MethodPredicate::or`],
//! [`MethodPredicate::negate`], [`all_of`] and [`any_of`]. Every predicate
//! implements stillwater's [`Predicate`] so it can be evaluated with `check`.

use crate::core::{MethodDescriptor, Visibility};
use crate::naming::{ADD_PREFIX, SET_PREFIX};
use std::borrow::Cow;
use std::collections::BTreeSet;
use std::fmt;
use stillwater::predicate::Predicate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MethodPredicate {
    IsPublic,
    IsVoid,
    HasSingleParameter,
    IsDeprecated,
    NotDeprecated,
    IsSynthetic,
    NotSynthetic,
    IsBridge,
    NotBridge,
    /// Case-sensitive name prefix; `"set"` also matches `settle`.
    NameStartsWith(Cow<'static, str>),
    NameIn(BTreeSet<String>),
    Not(Box<MethodPredicate>),
    All(Vec<MethodPredicate>),
    Any(Vec<MethodPredicate>),
}

pub const IS_PUBLIC: MethodPredicate = MethodPredicate::IsPublic;
pub const IS_VOID: MethodPredicate = MethodPredicate::IsVoid;
pub const HAS_SINGLE_PARAMETER: MethodPredicate = MethodPredicate::HasSingleParameter;
pub const IS_DEPRECATED: MethodPredicate = MethodPredicate::IsDeprecated;
pub const NOT_DEPRECATED: MethodPredicate = MethodPredicate::NotDeprecated;
pub const IS_SYNTHETIC: MethodPredicate = MethodPredicate::IsSynthetic;
pub const NOT_SYNTHETIC: MethodPredicate = MethodPredicate::NotSynthetic;
pub const IS_BRIDGE: MethodPredicate = MethodPredicate::IsBridge;
pub const NOT_BRIDGE: MethodPredicate = MethodPredicate::NotBridge;
pub const STARTS_WITH_SET: MethodPredicate =
    MethodPredicate::NameStartsWith(Cow::Borrowed(SET_PREFIX));
pub const STARTS_WITH_ADD: MethodPredicate =
    MethodPredicate::NameStartsWith(Cow::Borrowed(ADD_PREFIX));

/// Conjunction; nested conjunctions are flattened.
pub fn all_of(predicates: impl IntoIterator<Item = MethodPredicate>) -> MethodPredicate {
    let mut flat = Vec::new();
    for predicate in predicates {
        match predicate {
            MethodPredicate::All(inner) => flat.extend(inner),
            other => flat.push(other),
        }
    }
    MethodPredicate::All(flat)
}

/// Disjunction; nested disjunctions are flattened.
pub fn any_of(predicates: impl IntoIterator<Item = MethodPredicate>) -> MethodPredicate {
    let mut flat = Vec::new();
    for predicate in predicates {
        match predicate {
            MethodPredicate::Any(inner) => flat.extend(inner),
            other => flat.push(other),
        }
    }
    MethodPredicate::Any(flat)
}

pub fn name_starts_with(prefix: impl Into<String>) -> MethodPredicate {
    MethodPredicate::NameStartsWith(Cow::Owned(prefix.into()))
}

pub fn name_in<I, S>(names: I) -> MethodPredicate
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    MethodPredicate::NameIn(names.into_iter().map(Into::into).collect())
}

/// Public, void, one parameter, name starts with `set`
pub fn is_setter() -> MethodPredicate {
    all_of([IS_PUBLIC, IS_VOID, HAS_SINGLE_PARAMETER, STARTS_WITH_SET])
}

/// Public, void, one parameter, name starts with `add`
pub fn is_adder() -> MethodPredicate {
    all_of([IS_PUBLIC, IS_VOID, HAS_SINGLE_PARAMETER, STARTS_WITH_ADD])
}

/// Methods that get a fluent wrapper
pub fn is_fluent_candidate() -> MethodPredicate {
    all_of([
        IS_PUBLIC,
        any_of([STARTS_WITH_ADD, STARTS_WITH_SET]),
        IS_VOID,
        HAS_SINGLE_PARAMETER,
        NOT_DEPRECATED,
        NOT_SYNTHETIC,
    ])
}

impl MethodPredicate {
    pub fn and(self, other: MethodPredicate) -> MethodPredicate {
        all_of([self, other])
    }

    pub fn or(self, other: MethodPredicate) -> MethodPredicate {
        any_of([self, other])
    }

    pub fn negate(self) -> MethodPredicate {
        match self {
            MethodPredicate::Not(inner) => *inner,
            other => MethodPredicate::Not(Box::new(other)),
        }
    }

    /// Keep matching methods, preserving their order
    pub fn filter<'a, I>(&self, methods: I) -> Vec<&'a MethodDescriptor>
    where
        I: IntoIterator<Item = &'a MethodDescriptor>,
    {
        methods.into_iter().filter(|m| self.check(m)).collect()
    }
}

impl Predicate<MethodDescriptor> for MethodPredicate {
    fn check(&self, method: &MethodDescriptor) -> bool {
        match self {
            MethodPredicate::IsPublic => method.visibility == Visibility::Public,
            MethodPredicate::IsVoid => method.returns_void,
            MethodPredicate::HasSingleParameter => method.parameters.len() == 1,
            MethodPredicate::IsDeprecated => method.deprecated,
            MethodPredicate::NotDeprecated => !method.deprecated,
            MethodPredicate::IsSynthetic => method.synthetic,
            MethodPredicate::NotSynthetic => !method.synthetic,
            MethodPredicate::IsBridge => method.bridge,
            MethodPredicate::NotBridge => !method.bridge,
            MethodPredicate::NameStartsWith(prefix) => method.name.starts_with(prefix.as_ref()),
            MethodPredicate::NameIn(names) => names.contains(&method.name),
            MethodPredicate::Not(inner) => !inner.check(method),
            MethodPredicate::All(all) => all.iter().all(|p| p.check(method)),
            MethodPredicate::Any(any) => any.iter().any(|p| p.check(method)),
        }
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, name: &str, items: &[MethodPredicate]) -> fmt::Result {
    let rendered: Vec<String> = items.iter().map(ToString::to_string).collect();
    write!(f, "{}({})", name, rendered.join(", "))
}

impl fmt::Display for MethodPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MethodPredicate::IsPublic => f.write_str("is_public"),
            MethodPredicate::IsVoid => f.write_str("is_void"),
            MethodPredicate::HasSingleParameter => f.write_str("has_single_parameter"),
            MethodPredicate::IsDeprecated => f.write_str("is_deprecated"),
            MethodPredicate::NotDeprecated => f.write_str("not_deprecated"),
            MethodPredicate::IsSynthetic => f.write_str("is_synthetic"),
            MethodPredicate::NotSynthetic => f.write_str("not_synthetic"),
            MethodPredicate::IsBridge => f.write_str("is_bridge"),
            MethodPredicate::NotBridge => f.write_str("not_bridge"),
            MethodPredicate::NameStartsWith(prefix) => write!(f, "name_starts_with({:?})", prefix),
            MethodPredicate::NameIn(names) => write!(f, "name_in({:?})", names),
            MethodPredicate::Not(inner) => write!(f, "not({})", inner),
            MethodPredicate::All(all) => write_list(f, "all", all),
            MethodPredicate::Any(any) => write_list(f, "any", any),
        }
    }
}
