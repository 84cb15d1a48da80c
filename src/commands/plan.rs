use crate::cli::{ConfigOverrides, PlanFormat};
use crate::filter::CandidateFilter;
use crate::planner::{GeneratedMember, GenerationPlan, GenerationPlanner, MemberType};
use crate::reflect::{self, MetadataProvider};
use anyhow::{Context, Result};
use colored::*;
use std::io::IsTerminal;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct PlanConfig {
    pub manifests: Vec<PathBuf>,
    pub type_name: String,
    pub format: PlanFormat,
    pub overrides: ConfigOverrides,
}

/// Print the plan for one type. Nothing is written to disk.
pub fn plan(config: PlanConfig) -> Result<()> {
    let generator_config = super::resolve_config(&config.overrides)?;
    generator_config
        .validate()
        .context("Invalid generator configuration")?;
    let registry = reflect::load_manifests(&config.manifests).context("Failed to load manifests")?;
    let source = registry.resolve(&config.type_name)?;

    let planner = GenerationPlanner::new(
        CandidateFilter::new(generator_config.ignored_method_names.clone()),
        generator_config.naming_pattern()?,
        generator_config.root_package.trim(),
    );
    let plan = planner.plan(&source);

    match config.format {
        PlanFormat::Json => println!("{}", serde_json::to_string_pretty(&plan)?),
        PlanFormat::Terminal => {
            print!("{}", render_plan_terminal(&plan, std::io::stdout().is_terminal()))
        }
    }
    Ok(())
}

fn paint(text: &str, color: bool, style: fn(&str) -> ColoredString) -> String {
    if color {
        style(text).to_string()
    } else {
        text.to_string()
    }
}

fn member_line(plan: &GenerationPlan, member: &GeneratedMember) -> String {
    let modifiers: Vec<&str> = member.modifiers.iter().map(|m| m.keyword()).collect();
    let returns = match member.returns {
        Some(MemberType::Wrapper) => plan.generated.simple_name.clone(),
        Some(MemberType::Delegate) => plan.delegate_type.simple_name(),
        None => String::new(),
    };
    let mut line = modifiers.join(" ");
    if member.kind.is_constructor() {
        line.push_str(&format!(" {}", plan.generated.simple_name));
    } else {
        line.push_str(&format!(" {} {}", returns, member.name));
    }
    if !member.kind.is_field() {
        let params: Vec<String> = member
            .parameters
            .iter()
            .map(|p| {
                let dots = if p.varargs { "..." } else { "" };
                format!("{}{} {}", p.ty.simple_name(), dots, p.name)
            })
            .collect();
        line.push_str(&format!("({})", params.join(", ")));
    }
    line
}

/// Human-readable plan listing
pub fn render_plan_terminal(plan: &GenerationPlan, color: bool) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{} {} -> {}\n",
        paint("Plan", color, |s| s.blue().bold()),
        plan.source,
        paint(&plan.generated.to_string(), color, |s| s.green().bold())
    ));
    for member in &plan.members {
        let kind = format!("{:<24}", member.kind.to_string());
        out.push_str(&format!(
            "  {} {}",
            paint(&kind, color, |s| s.cyan()),
            member_line(plan, member)
        ));
        if let Some(origin) = &member.origin {
            out.push_str(&format!("  {}", paint(&format!("<- {}", origin), color, |s| s.dimmed())));
        }
        out.push('\n');
    }
    if !plan.has_factories() {
        out.push_str(&format!(
            "{}\n",
            paint(
                "warning: no public constructors, the wrapper has no factory",
                color,
                |s| s.yellow()
            )
        ));
    }
    out
}
