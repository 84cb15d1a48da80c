//! Candidate filtering: decides which members of a source type get wrappers.
//!
//! Structural eligibility is expressed with the predicate values in
//! [`methods`] and [`constructors`]. [`CandidateFilter`] applies them to a
//! [`SourceType`], subtracts explicitly ignored method names, and classifies
//! each survivor once into a [`MemberKind`].

pub mod constructors;
pub mod methods;

pub use constructors::{is_constructor_candidate, ConstructorPredicate};
pub use methods::{
    all_of, any_of, is_adder, is_fluent_candidate, is_setter, name_in, name_starts_with,
    MethodPredicate,
};
pub use stillwater::predicate::Predicate;

use crate::core::{ConstructorDescriptor, MethodDescriptor, SourceType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Generation shape of an eligible method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberKind {
    Setter,
    Adder,
}

impl MemberKind {
    /// Setter takes precedence; `None` when the method is neither.
    pub fn classify(method: &MethodDescriptor) -> Option<MemberKind> {
        if is_setter().check(method) {
            Some(MemberKind::Setter)
        } else if is_adder().check(method) {
            Some(MemberKind::Adder)
        } else {
            None
        }
    }
}

/// An eligible method together with its generation shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifiedMethod<'a> {
    pub kind: MemberKind,
    pub method: &'a MethodDescriptor,
}

#[derive(Debug, Clone)]
pub struct CandidateFilter {
    methods: MethodPredicate,
    constructors: ConstructorPredicate,
    ignored: BTreeSet<String>,
}

impl Default for CandidateFilter {
    fn default() -> Self {
        Self::new(BTreeSet::new())
    }
}

impl CandidateFilter {
    pub fn new(ignored: BTreeSet<String>) -> Self {
        Self {
            methods: is_fluent_candidate(),
            constructors: is_constructor_candidate(),
            ignored,
        }
    }

    /// Replace the structural method predicate.
    ///
    /// Methods still have to classify as setter or adder to be kept.
    pub fn with_method_predicate(mut self, predicate: MethodPredicate) -> Self {
        self.methods = predicate;
        self
    }

    pub fn with_constructor_predicate(mut self, predicate: ConstructorPredicate) -> Self {
        self.constructors = predicate;
        self
    }

    pub fn method_predicate(&self) -> &MethodPredicate {
        &self.methods
    }

    pub fn ignored_names(&self) -> &BTreeSet<String> {
        &self.ignored
    }

    pub fn is_ignored(&self, method: &MethodDescriptor) -> bool {
        self.ignored.contains(&method.name)
    }

    /// Eligible methods of `source`, classified, in descriptor order
    pub fn select_methods<'a>(&self, source: &'a SourceType) -> Vec<ClassifiedMethod<'a>> {
        source
            .methods
            .iter()
            .filter(|method| self.methods.check(method))
            .filter(|method| {
                if self.is_ignored(method) {
                    tracing::info!(
                        source = %source.qualified_name,
                        method = %method,
                        "Skipping ignored method"
                    );
                    false
                } else {
                    true
                }
            })
            .filter_map(|method| {
                MemberKind::classify(method).map(|kind| ClassifiedMethod { kind, method })
            })
            .collect()
    }

    /// Eligible constructors of `source` in descriptor order
    pub fn select_constructors<'a>(&self, source: &'a SourceType) -> Vec<&'a ConstructorDescriptor> {
        self.constructors.filter(&source.constructors)
    }
}
