//! Constructor eligibility predicates.

use crate::core::{ConstructorDescriptor, Visibility};
use std::fmt;
use stillwater::predicate::Predicate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstructorPredicate {
    IsPublic,
    IsSynthetic,
    NotSynthetic,
    Not(Box<ConstructorPredicate>),
    All(Vec<ConstructorPredicate>),
    Any(Vec<ConstructorPredicate>),
}

pub const IS_PUBLIC_CONSTRUCTOR: ConstructorPredicate = ConstructorPredicate::IsPublic;
pub const NOT_SYNTHETIC_CONSTRUCTOR: ConstructorPredicate = ConstructorPredicate::NotSynthetic;

/// Public and not compiler-generated
pub fn is_constructor_candidate() -> ConstructorPredicate {
    ConstructorPredicate::All(vec![NOT_SYNTHETIC_CONSTRUCTOR, IS_PUBLIC_CONSTRUCTOR])
}

impl ConstructorPredicate {
    pub fn and(self, other: ConstructorPredicate) -> ConstructorPredicate {
        match self {
            ConstructorPredicate::All(mut all) => {
                all.push(other);
                ConstructorPredicate::All(all)
            }
            first => ConstructorPredicate::All(vec![first, other]),
        }
    }

    pub fn or(self, other: ConstructorPredicate) -> ConstructorPredicate {
        match self {
            ConstructorPredicate::Any(mut any) => {
                any.push(other);
                ConstructorPredicate::Any(any)
            }
            first => ConstructorPredicate::Any(vec![first, other]),
        }
    }

    pub fn negate(self) -> ConstructorPredicate {
        match self {
            ConstructorPredicate::Not(inner) => *inner,
            other => ConstructorPredicate::Not(Box::new(other)),
        }
    }

    /// Keep matching constructors in declaration order
    pub fn filter<'a, I>(&self, constructors: I) -> Vec<&'a ConstructorDescriptor>
    where
        I: IntoIterator<Item = &'a ConstructorDescriptor>,
    {
        constructors.into_iter().filter(|c| self.check(c)).collect()
    }
}

impl Predicate<ConstructorDescriptor> for ConstructorPredicate {
    fn check(&self, constructor: &ConstructorDescriptor) -> bool {
        match self {
            ConstructorPredicate::IsPublic => constructor.visibility == Visibility::Public,
            ConstructorPredicate::IsSynthetic => constructor.synthetic,
            ConstructorPredicate::NotSynthetic => !constructor.synthetic,
            ConstructorPredicate::Not(inner) => !inner.check(constructor),
            ConstructorPredicate::All(all) => all.iter().all(|p| p.check(constructor)),
            ConstructorPredicate::Any(any) => any.iter().any(|p| p.check(constructor)),
        }
    }
}

impl fmt::Display for ConstructorPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let list = |items: &[ConstructorPredicate]| {
            items
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        };
        match self {
            ConstructorPredicate::IsPublic => f.write_str("is_public"),
            ConstructorPredicate::IsSynthetic => f.write_str("is_synthetic"),
            ConstructorPredicate::NotSynthetic => f.write_str("not_synthetic"),
            ConstructorPredicate::Not(inner) => write!(f, "not({})", inner),
            ConstructorPredicate::All(all) => write!(f, "all({})", list(all)),
            ConstructorPredicate::Any(any) => write!(f, "any({})", list(any)),
        }
    }
}
