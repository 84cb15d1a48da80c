mod common;

use common::Workspace;
use fluentgen::assert_error_code;
use fluentgen::core::{MethodDescriptor, SourceType, TypeRef};
use fluentgen::emit::{java, CodeEmitter, CodeModel, GeneratedAnnotation};
use fluentgen::errors::ErrorCode;
use fluentgen::planner::GenerationPlanner;
use fluentgen::testkit::fixtures;
use indoc::indoc;
use pretty_assertions::assert_eq;

const FLUENT_POINT: &str = indoc! {r#"
    package com.example;

    public final class FluentPoint {

        /**
         * delegate
         */
        private final Point point;

        /**
         * @return the created instance
         */
        public final Point get() {
            return this.point;
        }

        /**
         * Hide constructor, use static factory methods.
         */
        private FluentPoint(final Point point) {
            this.point = point;
        }

        public static FluentPoint point(int arg0, int arg1) {
            return new FluentPoint(new Point(arg0, arg1));
        }

        public FluentPoint x(final int x) {
            this.point.setX(x);
            return this;
        }

        public FluentPoint y(final int y) {
            this.point.setY(y);
            return this;
        }

        public FluentPoint addTags(String... tags) {
            for (String tag : tags) {
                this.point.addTag(tag);
            }
            return this;
        }
    }
"#};

#[test]
fn test_render_point_wrapper() {
    let mut model = CodeModel::without_generated_annotation();
    let handle = model
        .define_class(&GenerationPlanner::default().plan(&fixtures::point()))
        .unwrap();
    let rendered = java::render(model.defined_class(&handle).unwrap());
    assert_eq!(rendered, FLUENT_POINT);
}

#[test]
fn test_build_writes_package_path() {
    let workspace = Workspace::new();
    let mut model = CodeModel::without_generated_annotation();
    model
        .define_class(&GenerationPlanner::default().plan(&fixtures::point()))
        .unwrap();

    let written = model.build(&workspace.output_dir()).unwrap();
    assert_eq!(
        written,
        vec![workspace.output_dir().join("com/example/FluentPoint.java")]
    );
    assert_eq!(workspace.read_output("com/example/FluentPoint.java"), FLUENT_POINT);
}

#[test]
fn test_rebuild_overwrites_identically() {
    let workspace = Workspace::new();
    let mut model = CodeModel::with_annotation(Some(GeneratedAnnotation::dated("2024-05-01T12:00:00Z")));
    model
        .define_class(&GenerationPlanner::default().plan(&fixtures::text_field()))
        .unwrap();

    model.build(&workspace.output_dir()).unwrap();
    let first = workspace.read_output("com/example/ui/FluentTextField.java");
    model.build(&workspace.output_dir()).unwrap();
    let second = workspace.read_output("com/example/ui/FluentTextField.java");

    assert_eq!(first, second);
    assert!(first.contains("@Generated(value = \"fluentgen\", date = \"2024-05-01T12:00:00Z\")"));
    assert!(first.contains("import javax.annotation.Generated;\n"));
}

#[test]
fn test_foreign_parameter_types_are_imported() {
    let source = SourceType::new("com.example.Event")
        .with_method(MethodDescriptor::new("setWhen", [TypeRef::class("java.time.Instant")]))
        .with_method(MethodDescriptor::new("addAttendee", [TypeRef::class("org.people.Person")]));
    let mut model = CodeModel::without_generated_annotation();
    let handle = model
        .define_class(&GenerationPlanner::default().plan(&source))
        .unwrap();
    let rendered = java::render(model.defined_class(&handle).unwrap());

    assert!(rendered.contains("import java.time.Instant;\nimport org.people.Person;\n\n"));
    assert!(rendered.contains("public FluentEvent addAttendees(Person... attendees) {"));
    assert!(rendered.contains("for (Person attendee : attendees) {"));
}

#[test]
fn test_same_class_twice_in_one_model_conflicts() {
    let mut model = CodeModel::new();
    let plan = GenerationPlanner::default().plan(&fixtures::point());
    model.define_class(&plan).unwrap();
    assert_error_code!(model.define_class(&plan), ErrorCode::GENERATION_CONFLICT);
    assert_eq!(model.len(), 1);
}

#[test]
fn test_build_into_file_path_fails_with_io_error() {
    let workspace = Workspace::new();
    let blocker = workspace.write("blocker", "not a directory");
    let mut model = CodeModel::new();
    model
        .define_class(&GenerationPlanner::default().plan(&fixtures::point()))
        .unwrap();

    let err = assert_error_code!(model.build(&blocker), ErrorCode::EMISSION_IO);
    assert!(err.to_string().contains("blocker"));
}
