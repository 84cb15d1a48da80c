use fluentgen::naming::{
    adder_loop_variable, adder_parameter_name, adder_wrapper_name, field_name,
    is_valid_identifier, setter_wrapper_name, NamingPattern,
};
use proptest::prelude::*;

/// Capitalized Java-ish name part, e.g. `FooBar1`
fn name_part() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{1,6}([A-Z][a-z0-9]{0,5}){0,2}"
}

proptest! {
    #[test]
    fn setter_name_drops_prefix_and_lowercases(part in name_part()) {
        let name = setter_wrapper_name(&format!("set{}", part));
        let mut expected = part.clone();
        expected.replace_range(0..1, &part[0..1].to_lowercase());
        prop_assert_eq!(&name, &expected);
    }

    #[test]
    fn adder_names_are_consistent(part in name_part()) {
        let method = format!("add{}", part);
        let wrapper = adder_wrapper_name(&method);
        let parameter = adder_parameter_name(&method);
        let variable = adder_loop_variable(&parameter);

        prop_assert_eq!(&wrapper, &format!("{}s", method));
        prop_assert_eq!(parameter.to_lowercase(), format!("{}s", part.to_lowercase()));
        prop_assert_eq!(variable.to_lowercase(), part.to_lowercase());
        prop_assert_ne!(&variable, &parameter);
    }

    #[test]
    fn default_pattern_prefixes_simple_name(package in "[a-z]{1,5}(\\.[a-z]{1,5}){0,3}", part in name_part()) {
        let name = NamingPattern::default().apply(&package, &part);
        prop_assert_eq!(&name.package, &package);
        prop_assert_eq!(name.simple_name, format!("Fluent{}", part));
    }

    #[test]
    fn field_name_is_uncapitalized_simple_name(part in name_part()) {
        let field = field_name(&part);
        prop_assert_eq!(field.len(), part.len());
        prop_assert!(field.starts_with(|c: char| c.is_lowercase()));
        prop_assert_eq!(&field[1..], &part[1..]);
    }
}

#[test]
fn test_scenario_names() {
    assert_eq!(setter_wrapper_name("setX"), "x");
    assert_eq!(adder_wrapper_name("addTag"), "addTags");
    assert_eq!(adder_parameter_name("addTag"), "tags");
    assert_eq!(adder_loop_variable("tags"), "tag");
    assert_eq!(field_name("Point"), "point");
}

#[test]
fn test_degenerate_names_are_not_identifiers() {
    assert!(!is_valid_identifier(&setter_wrapper_name("set")));
    assert!(!is_valid_identifier(&setter_wrapper_name("setDefault")));
    assert!(is_valid_identifier(&setter_wrapper_name("setURL")));
}

#[test]
fn test_empty_package_drops_separator() {
    let name = NamingPattern::default().apply("", "Point");
    assert_eq!(name.package, "");
    assert_eq!(name.to_string(), "FluentPoint");
}

#[test]
fn test_pattern_must_have_two_placeholders() {
    assert!(NamingPattern::new("%sFluent").is_err());
    assert!(NamingPattern::new("%s.%s.%s").is_err());
    assert!(NamingPattern::new("   ").is_err());
    assert!(NamingPattern::new("%s.gen.%sWrapper").is_ok());
}
