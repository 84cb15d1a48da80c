use anyhow::Result;
use clap::Parser;
use colored::*;
use fluentgen::cli::{Cli, Commands};
use fluentgen::commands::{self, GenerateConfig, PlanConfig};
use fluentgen::errors::Error;
use fluentgen::observability;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {}", "error:".red().bold(), describe(&err));
            if let Some(hint) = hint(&err) {
                eprintln!("{} {}", "hint:".cyan().bold(), hint);
            }
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Generate {
            input,
            overrides,
            verbosity,
        } => {
            observability::init_tracing(verbosity);
            commands::generate(GenerateConfig {
                manifests: input.manifests,
                types: input.types,
                overrides,
            })?;
            Ok(())
        }
        Commands::Plan {
            manifests,
            type_name,
            format,
            overrides,
            verbosity,
        } => {
            observability::init_tracing(verbosity);
            commands::plan(PlanConfig {
                manifests,
                type_name,
                format,
                overrides,
            })
        }
        Commands::Init { force } => {
            observability::init_tracing(0);
            commands::init_config(force)
        }
    }
}

// Context chain, prefixed with the generator error code when there is one
fn describe(err: &anyhow::Error) -> String {
    let chain = format!("{:#}", err);
    match err.chain().find_map(|cause| cause.downcast_ref::<Error>()) {
        Some(inner) => format!("[{}] {}", inner.code(), chain),
        None => chain,
    }
}

fn hint(err: &anyhow::Error) -> Option<&'static str> {
    let inner = err.chain().find_map(|cause| cause.downcast_ref::<Error>())?;
    if inner.is_type_scoped() {
        Some("the remaining types were generated; fix or ignore the listed members")
    } else if inner.is_user_fixable() {
        Some("check the manifests, .fluentgen.toml and command-line flags")
    } else {
        Some("check free space and permissions below the target directory")
    }
}
