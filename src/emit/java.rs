//! Java source rendering for declared classes.

use super::model::ClassDeclaration;
use crate::core::TypeRef;
use crate::planner::{GeneratedMember, MemberType, Statement};
use std::collections::{BTreeSet, HashMap};
use std::fmt::{self, Write as _};

const INDENT: &str = "    ";
const GENERATED_ANNOTATION: &str = "javax.annotation.Generated";
const JAVA_LANG: &str = "java.lang";

/// Which referenced types may be written by simple name
struct Imports {
    /// Canonical names rendered unqualified
    simple: BTreeSet<String>,
    /// Canonical names that need an import statement
    imported: BTreeSet<String>,
}

impl Imports {
    fn collect(class: &ClassDeclaration) -> Self {
        let mut referenced: BTreeSet<TypeRef> = BTreeSet::new();
        referenced.insert(class.delegate_type().base().clone());
        for member in class.members() {
            for parameter in &member.parameters {
                referenced.insert(parameter.ty.base().clone());
            }
            for statement in &member.body {
                if let Statement::DelegateCallInLoop { element_type, .. } = statement {
                    referenced.insert(element_type.base().clone());
                }
            }
        }

        // (canonical name, package) of every class type
        let mut candidates: Vec<(String, String)> = referenced
            .iter()
            .filter_map(|ty| {
                ty.package()
                    .map(|package| (ty.canonical_name(), package.to_string()))
            })
            .collect();
        if class.annotation().is_some() {
            candidates.push((GENERATED_ANNOTATION.to_string(), "javax.annotation".to_string()));
        }

        let mut by_simple: HashMap<String, usize> = HashMap::new();
        by_simple.insert(class.name().simple_name.clone(), 1);
        for (canonical, _) in &candidates {
            *by_simple.entry(simple_part(canonical).to_string()).or_default() += 1;
        }

        let mut simple = BTreeSet::new();
        let mut imported = BTreeSet::new();
        for (canonical, package) in candidates {
            if by_simple.get(simple_part(&canonical)).copied().unwrap_or(0) > 1 {
                continue;
            }
            let nested = canonical.len() > package.len() + 1
                && canonical[package.len()..].trim_start_matches('.').contains('.');
            let implicit = package.is_empty()
                || (!nested && (package == JAVA_LANG || package == class.name().package));
            if !implicit {
                imported.insert(canonical.clone());
            }
            simple.insert(canonical);
        }
        Self { simple, imported }
    }

    fn name_of(&self, ty: &TypeRef) -> String {
        match ty {
            TypeRef::Primitive(p) => p.keyword().to_string(),
            TypeRef::Class(_) => {
                let canonical = ty.canonical_name();
                if self.simple.contains(&canonical) {
                    simple_part(&canonical).to_string()
                } else {
                    canonical
                }
            }
            TypeRef::Array(element) => format!("{}[]", self.name_of(element)),
        }
    }

    fn annotation_name(&self) -> &str {
        if self.simple.contains(GENERATED_ANNOTATION) {
            simple_part(GENERATED_ANNOTATION)
        } else {
            GENERATED_ANNOTATION
        }
    }
}

fn simple_part(canonical: &str) -> &str {
    canonical.rsplit('.').next().unwrap_or(canonical)
}

fn write_javadoc(out: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
    writeln!(out, "{INDENT}/**")?;
    for line in text.lines() {
        writeln!(out, "{INDENT} * {line}")?;
    }
    writeln!(out, "{INDENT} */")
}

struct Renderer<'a> {
    class: &'a ClassDeclaration,
    imports: Imports,
}

impl Renderer<'_> {
    fn member_type(&self, ty: MemberType) -> String {
        match ty {
            MemberType::Wrapper => self.class.name().simple_name.clone(),
            MemberType::Delegate => self.imports.name_of(self.class.delegate_type()),
        }
    }

    fn parameters(&self, member: &GeneratedMember) -> String {
        let rendered: Vec<String> = member
            .parameters
            .iter()
            .map(|p| {
                let prefix = if p.is_final { "final " } else { "" };
                let ty = self.imports.name_of(&p.ty);
                let dots = if p.varargs { "..." } else { "" };
                format!("{prefix}{ty}{dots} {}", p.name)
            })
            .collect();
        rendered.join(", ")
    }

    fn statement(&self, out: &mut fmt::Formatter<'_>, statement: &Statement) -> fmt::Result {
        let field = self.class.field_name();
        let pad = format!("{INDENT}{INDENT}");
        match statement {
            Statement::AssignField { parameter } => {
                writeln!(out, "{pad}this.{field} = {parameter};")
            }
            Statement::ReturnField => writeln!(out, "{pad}return this.{field};"),
            Statement::DelegateCall { method, argument } => {
                writeln!(out, "{pad}this.{field}.{method}({argument});")
            }
            Statement::DelegateCallInLoop {
                method,
                element_type,
                variable,
                parameter,
            } => {
                let ty = self.imports.name_of(element_type);
                writeln!(out, "{pad}for ({ty} {variable} : {parameter}) {{")?;
                writeln!(out, "{pad}{INDENT}this.{field}.{method}({variable});")?;
                writeln!(out, "{pad}}}")
            }
            Statement::ConstructAndWrap { arguments } => {
                let wrapper = &self.class.name().simple_name;
                let delegate = self.imports.name_of(self.class.delegate_type());
                writeln!(
                    out,
                    "{pad}return new {wrapper}(new {delegate}({}));",
                    arguments.join(", ")
                )
            }
            Statement::ReturnSelf => writeln!(out, "{pad}return this;"),
            Statement::ReturnSelfInvocation { method, argument } => {
                writeln!(out, "{pad}return this.{method}({argument});")
            }
        }
    }

    fn member(&self, out: &mut fmt::Formatter<'_>, member: &GeneratedMember) -> fmt::Result {
        if let Some(doc) = &member.javadoc {
            write_javadoc(out, doc)?;
        }
        let modifiers: Vec<&str> = member.modifiers.iter().map(|m| m.keyword()).collect();
        let modifiers = modifiers.join(" ");

        if member.kind.is_field() {
            let ty = member
                .returns
                .map(|t| self.member_type(t))
                .unwrap_or_else(|| self.imports.name_of(self.class.delegate_type()));
            return writeln!(out, "{INDENT}{modifiers} {ty} {};", member.name);
        }

        let head = if member.kind.is_constructor() {
            self.class.name().simple_name.clone()
        } else {
            match member.returns {
                Some(ty) => format!("{} {}", self.member_type(ty), member.name),
                None => format!("void {}", member.name),
            }
        };
        writeln!(
            out,
            "{INDENT}{modifiers} {head}({}) {{",
            self.parameters(member)
        )?;
        for statement in &member.body {
            self.statement(out, statement)?;
        }
        writeln!(out, "{INDENT}}}")
    }

    fn render(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.class.name();

        if !name.package.is_empty() {
            writeln!(out, "package {};\n", name.package)?;
        }
        if !self.imports.imported.is_empty() {
            for import in &self.imports.imported {
                writeln!(out, "import {import};")?;
            }
            out.write_char('\n')?;
        }
        if let Some(annotation) = self.class.annotation() {
            writeln!(
                out,
                "@{}(value = \"{}\", date = \"{}\")",
                self.imports.annotation_name(),
                annotation.value,
                annotation.date
            )?;
        }
        writeln!(out, "public final class {} {{", name.simple_name)?;
        for member in self.class.members() {
            out.write_char('\n')?;
            self.member(out, member)?;
        }
        out.write_str("}\n")
    }
}

impl fmt::Display for Renderer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f)
    }
}

/// Render a declared class as a Java compilation unit
pub fn render(class: &ClassDeclaration) -> String {
    Renderer {
        class,
        imports: Imports::collect(class),
    }
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ConstructorDescriptor, MethodDescriptor, PrimitiveType, SourceType};
    use crate::emit::{CodeEmitter, CodeModel, GeneratedAnnotation};
    use crate::planner::GenerationPlanner;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    fn render_source(source: &SourceType, annotation: Option<GeneratedAnnotation>) -> String {
        let mut model = CodeModel::with_annotation(annotation);
        let handle = model
            .define_class(&GenerationPlanner::default().plan(source))
            .unwrap();
        render(model.defined_class(&handle).unwrap())
    }

    #[test]
    fn test_render_boolean_setter_with_overload() {
        let source = SourceType::new("com.example.ui.Button")
            .with_constructor(ConstructorDescriptor::new([]))
            .with_method(MethodDescriptor::new(
                "setVisible",
                [TypeRef::Primitive(PrimitiveType::Boolean)],
            ));
        let rendered = render_source(&source, Some(GeneratedAnnotation::dated("2024-01-01T00:00:00Z")));
        let header = indoc! {r#"
            package com.example.ui;

            import javax.annotation.Generated;

            @Generated(value = "fluentgen", date = "2024-01-01T00:00:00Z")
            public final class FluentButton {
        "#};
        assert_eq!(&rendered[..header.len()], header);
        assert!(rendered.ends_with(concat!(
            "    public FluentButton visible(final boolean visible) {\n",
            "        this.button.setVisible(visible);\n",
            "        return this;\n",
            "    }\n",
            "\n",
            "    /**\n",
            "     * @return #visible(true)\n",
            "     */\n",
            "    public FluentButton visible() {\n",
            "        return this.visible(true);\n",
            "    }\n",
            "}\n",
        )));
    }

    #[test]
    fn test_nested_and_clashing_types_are_qualified() {
        let source = SourceType::new("a.Form")
            .with_method(MethodDescriptor::new("setDate", [TypeRef::class("java.util.Date")]))
            .with_method(MethodDescriptor::new("setSqlDate", [TypeRef::class("java.sql.Date")]))
            .with_method(MethodDescriptor::new("setMode", [TypeRef::class("a.Form$Mode")]));
        let rendered = render_source(&source, None);
        assert!(rendered.contains("public FluentForm date(final java.util.Date date)"));
        assert!(rendered.contains("public FluentForm sqlDate(final java.sql.Date sqlDate)"));
        assert!(rendered.contains("import a.Form.Mode;\n"));
        assert!(rendered.contains("public FluentForm mode(final Mode mode)"));
        assert!(!rendered.contains("import java.util.Date;"));
    }

    #[test]
    fn test_default_package_has_no_package_clause() {
        let rendered = render_source(&SourceType::new("Point"), None);
        assert!(rendered.starts_with("public final class FluentPoint {"));
    }
}
