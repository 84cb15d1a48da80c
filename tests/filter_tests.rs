use fluentgen::core::{MethodDescriptor, SourceType, TypeRef, Visibility};
use fluentgen::filter::methods::{IS_DEPRECATED, NOT_BRIDGE};
use fluentgen::filter::{
    is_constructor_candidate, is_fluent_candidate, name_in, CandidateFilter, MemberKind,
    Predicate,
};
use fluentgen::testkit::fixtures;
use pretty_assertions::assert_eq;
use std::collections::BTreeSet;

fn selected(filter: &CandidateFilter, source: &SourceType) -> Vec<(MemberKind, String)> {
    filter
        .select_methods(source)
        .into_iter()
        .map(|c| (c.kind, c.method.name.clone()))
        .collect()
}

#[test]
fn test_text_field_candidates() {
    let filter = CandidateFilter::default();
    assert_eq!(
        selected(&filter, &fixtures::text_field()),
        vec![
            (MemberKind::Setter, "setValue".to_string()),
            (MemberKind::Setter, "setImmediate".to_string()),
            (MemberKind::Setter, "setEnabled".to_string()),
            (MemberKind::Adder, "addStyleName".to_string()),
            (MemberKind::Setter, "setId".to_string()),
        ]
    );
}

#[test]
fn test_ignored_names_are_subtracted() {
    let ignored: BTreeSet<String> = ["setId", "addStyleName"].iter().map(|s| s.to_string()).collect();
    let filter = CandidateFilter::new(ignored);
    let names: Vec<String> = selected(&filter, &fixtures::text_field())
        .into_iter()
        .map(|(_, name)| name)
        .collect();
    assert_eq!(names, vec!["setValue", "setImmediate", "setEnabled"]);
}

#[test]
fn test_ignoring_an_unknown_name_changes_nothing() {
    let ignored: BTreeSet<String> = ["setNothing".to_string()].into_iter().collect();
    assert_eq!(
        selected(&CandidateFilter::new(ignored), &fixtures::point()),
        selected(&CandidateFilter::default(), &fixtures::point())
    );
}

#[test]
fn test_excluded_shapes() {
    let source = SourceType::new("a.Shapes")
        .with_method(MethodDescriptor::new("setup", []))
        .with_method(MethodDescriptor::new("settle", [fixtures::int(), fixtures::int()]))
        .with_method(MethodDescriptor::new("setHidden", [fixtures::int()]).with_visibility(Visibility::Private))
        .with_method(MethodDescriptor::new("setOld", [fixtures::int()]).deprecated())
        .with_method(MethodDescriptor::new("addAll", [TypeRef::class("java.util.Collection")]).returning_value())
        .with_method(MethodDescriptor::new("address", [fixtures::string()]));

    // `address` starts with "add" and is otherwise eligible
    assert_eq!(
        selected(&CandidateFilter::default(), &source),
        vec![(MemberKind::Adder, "address".to_string())]
    );
}

#[test]
fn test_bridge_methods_count_as_synthetic_only_when_flagged() {
    let bridge_only = MethodDescriptor::new("setParent", [fixtures::string()]).bridge();
    assert!(is_fluent_candidate().check(&bridge_only));
    assert!(!NOT_BRIDGE.check(&bridge_only));

    let stricter = CandidateFilter::default().with_method_predicate(is_fluent_candidate().and(NOT_BRIDGE));
    let source = SourceType::new("a.B").with_method(bridge_only);
    assert!(stricter.select_methods(&source).is_empty());
}

#[test]
fn test_predicates_compose() {
    let deprecated_setters = is_fluent_candidate()
        .negate()
        .negate()
        .or(IS_DEPRECATED.and(name_in(["setCaption"])));
    let caption = MethodDescriptor::new("setCaption", [fixtures::string()]).deprecated();
    assert!(deprecated_setters.check(&caption));
    assert!(!is_fluent_candidate().check(&caption));
    assert_eq!(
        IS_DEPRECATED.and(name_in(["setCaption"])).to_string(),
        "all(is_deprecated, name_in({\"setCaption\"}))"
    );
}

#[test]
fn test_constructor_candidates() {
    let source = fixtures::text_field();
    let selected = CandidateFilter::default().select_constructors(&source);
    let arities: Vec<usize> = selected.iter().map(|c| c.parameters.len()).collect();
    assert_eq!(arities, vec![0, 1]);

    let private = fixtures::singleton();
    assert!(is_constructor_candidate().filter(&private.constructors).is_empty());
}
