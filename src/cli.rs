use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "fluentgen")]
#[command(about = "Generate fluent wrapper classes from type metadata", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate wrapper sources for types described in manifests
    Generate {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        overrides: ConfigOverrides,

        /// Increase verbosity (-v info, -vv debug, -vvv trace)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },

    /// Print the generation plan for one type without writing anything
    Plan {
        /// Manifest files (JSON or TOML) describing source types
        #[arg(short, long = "manifest", required = true, num_args = 1..)]
        manifests: Vec<PathBuf>,

        /// Source type to plan
        #[arg(short = 't', long = "type")]
        type_name: String,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: PlanFormat,

        #[command(flatten)]
        overrides: ConfigOverrides,

        /// Increase verbosity (-v info, -vv debug, -vvv trace)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },

    /// Initialize a .fluentgen.toml configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Manifest files (JSON or TOML) describing source types
    #[arg(short, long = "manifest", required = true, num_args = 1..)]
    pub manifests: Vec<PathBuf>,

    /// Types to generate (defaults to every type in the manifests)
    #[arg(short = 't', long = "type")]
    pub types: Vec<String>,
}

/// Settings that take precedence over the config file
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Configuration file (defaults to the nearest .fluentgen.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Package for generated classes (blank keeps the source package)
    #[arg(long)]
    pub root_package: Option<String>,

    /// Output directory for generated sources
    #[arg(long = "target-dir")]
    pub target_dir: Option<PathBuf>,

    /// Generated class name pattern: package, then simple name (e.g. "%s.Fluent%s")
    #[arg(long)]
    pub pattern: Option<String>,

    /// Method names to skip (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub ignore: Vec<String>,

    /// Do not annotate generated classes with @Generated
    #[arg(long = "no-generated-annotation")]
    pub no_generated_annotation: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PlanFormat {
    Terminal,
    Json,
}
