use fluentgen::assert_plan_shape;
use fluentgen::core::{ConstructorDescriptor, MethodDescriptor, SourceType, TypeRef};
use fluentgen::filter::CandidateFilter;
use fluentgen::naming::NamingPattern;
use fluentgen::planner::{GeneratedKind, GenerationPlanner, Modifier, Statement};
use fluentgen::testkit::fixtures;
use pretty_assertions::assert_eq;
use std::collections::BTreeSet;

fn planner(root_package: &str, ignored: &[&str]) -> GenerationPlanner {
    let ignored: BTreeSet<String> = ignored.iter().map(|s| s.to_string()).collect();
    GenerationPlanner::new(
        CandidateFilter::new(ignored),
        NamingPattern::default(),
        root_package,
    )
}

#[test]
fn test_point_scenario_members() {
    let plan = planner("", &[]).plan(&fixtures::point());

    assert_eq!(plan.generated.to_string(), "com.example.FluentPoint");
    assert_eq!(plan.field_name, "point");
    assert_plan_shape!(
        plan,
        [
            (Field, "point"),
            (Getter, "get"),
            (HiddenConstructor, ""),
            (Factory, "point"),
            (SetterWrapper, "x"),
            (SetterWrapper, "y"),
            (AdderWrapper, "addTags"),
        ]
    );
    assert_eq!(plan.method_count(), 6);
}

#[test]
fn test_point_scenario_signatures() {
    let plan = planner("", &[]).plan(&fixtures::point());
    let signatures: Vec<String> = plan.members.iter().map(|m| m.signature_display()).collect();
    assert_eq!(
        signatures,
        vec![
            "point",
            "get()",
            "<init>(com.example.Point)",
            "point(int,int)",
            "x(int)",
            "y(int)",
            "addTags(java.lang.String...)",
        ]
    );

    let factory = plan.members_of(GeneratedKind::Factory).next().unwrap();
    assert!(factory.has_modifier(Modifier::Static));
    assert_eq!(factory.origin.as_deref(), Some("<init>(int,int)"));
}

#[test]
fn test_root_package_overrides_source_package() {
    let plan = planner("com.example.fluent", &[]).plan(&fixtures::point());
    assert_eq!(plan.generated.package, "com.example.fluent");
    assert_eq!(plan.generated.simple_name, "FluentPoint");
}

#[test]
fn test_custom_pattern() {
    let planner = GenerationPlanner::new(
        CandidateFilter::default(),
        NamingPattern::new("%s.gen.%sBuilder").unwrap(),
        "",
    );
    let plan = planner.plan(&fixtures::point());
    assert_eq!(plan.generated.to_string(), "com.example.gen.PointBuilder");
}

#[test]
fn test_mixed_members_are_filtered_and_classified() {
    let plan = planner("", &["setId"]).plan(&fixtures::text_field());

    // Protected and synthetic constructors produce no factory
    assert_eq!(plan.members_of(GeneratedKind::Factory).count(), 2);

    let wrappers: Vec<(GeneratedKind, &str)> = plan
        .members
        .iter()
        .filter(|m| m.kind.is_wrapper())
        .map(|m| (m.kind, m.name.as_str()))
        .collect();
    assert_eq!(
        wrappers,
        vec![
            (GeneratedKind::SetterWrapper, "value"),
            (GeneratedKind::SetterWrapper, "immediate"),
            (GeneratedKind::BooleanDefaultOverload, "immediate"),
            (GeneratedKind::SetterWrapper, "enabled"),
            (GeneratedKind::AdderWrapper, "addStyleNames"),
        ]
    );
}

#[test]
fn test_boxed_boolean_has_no_default_overload() {
    let source = SourceType::new("a.Flags")
        .with_method(MethodDescriptor::new("setOn", [TypeRef::class("java.lang.Boolean")]));
    let plan = planner("", &[]).plan(&source);
    assert_eq!(plan.members_of(GeneratedKind::BooleanDefaultOverload).count(), 0);
}

#[test]
fn test_overload_delegates_to_wrapper_with_true() {
    let plan = planner("", &[]).plan(&fixtures::text_field());
    let overload = plan
        .members_of(GeneratedKind::BooleanDefaultOverload)
        .next()
        .unwrap();
    assert!(overload.parameters.is_empty());
    assert_eq!(
        overload.body,
        vec![Statement::ReturnSelfInvocation {
            method: "immediate".into(),
            argument: true,
        }]
    );
}

#[test]
fn test_planning_is_deterministic() {
    let planner = planner("x.y", &["setY"]);
    let first = planner.plan(&fixtures::point());
    let second = planner.plan(&fixtures::point());
    assert_eq!(first, second);
    assert!(first.find("y").next().is_none());
}

#[test]
fn test_type_without_public_constructor_still_planned() {
    let plan = planner("", &[]).plan(&fixtures::singleton());
    assert!(!plan.has_factories());
    assert_plan_shape!(
        plan,
        [
            (Field, "registry"),
            (Getter, "get"),
            (HiddenConstructor, ""),
            (SetterWrapper, "name"),
        ]
    );
}

#[test]
fn test_plan_serializes_to_json() {
    let plan = planner("", &[]).plan(&fixtures::point());
    let json = serde_json::to_value(&plan).unwrap();
    assert_eq!(json["source"], "com.example.Point");
    assert_eq!(json["members"][3]["kind"], "FACTORY");
    assert_eq!(json["members"][6]["parameters"][0]["varargs"], true);

    let back: fluentgen::planner::GenerationPlan = serde_json::from_value(json).unwrap();
    assert_eq!(back, plan);
}

#[test]
fn test_constructor_descriptor_display() {
    let ctor = ConstructorDescriptor::new([fixtures::int(), fixtures::string()]);
    assert_eq!(ctor.to_string(), "<init>(int,java.lang.String)");
}
