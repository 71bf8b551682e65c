//! Command-line interface definitions for xbeangen.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// xbeangen - XML Schema, HTML reference and discovery file generation for
/// xbean-annotated types
#[derive(Parser, Debug)]
#[command(name = "xbeangen")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to xbeangen.toml configuration file
    #[arg(short, long, global = true, env = "XBEANGEN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output (-v, -vv for increasing verbosity)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Log filter implied by the verbosity flags, if they set one.
    pub fn log_level(&self) -> Option<&'static str> {
        match (self.quiet, self.verbose) {
            (true, _) => Some("error"),
            (false, 0) => None,
            (false, 1) => Some("debug"),
            (false, _) => Some("trace"),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate discovery files, HTML reference and XSD (default)
    Generate(GenerateArgs),

    /// Check configuration and descriptors without writing files
    Validate(ValidateArgs),

    /// Display the namespaces and elements that would be generated
    Info(InfoArgs),

    /// Initialize a new xbeangen.toml configuration file
    Init(InitArgs),
}

// ============================================================================
// Generate Arguments
// ============================================================================

#[derive(Args, Debug, Clone, Default)]
pub struct GenerateArgs {
    /// Descriptor JSON file or directory (overrides config)
    #[arg(short, long)]
    pub descriptors: Option<PathBuf>,

    /// XSD destination; the HTML reference is written beside it (overrides config)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Root directory for META-INF discovery files (overrides config)
    #[arg(long)]
    pub meta_inf_dir: Option<PathBuf>,

    /// Namespace for types that do not declare one (overrides config)
    #[arg(long)]
    pub namespace: Option<String>,
}

// ============================================================================
// Validate Arguments
// ============================================================================

#[derive(Args, Debug, Clone)]
pub struct ValidateArgs {
    /// Validate configuration file only
    #[arg(long)]
    pub config_only: bool,
}

// ============================================================================
// Info Arguments
// ============================================================================

#[derive(Args, Debug, Clone)]
pub struct InfoArgs {
    /// Output format
    #[arg(long, value_enum, default_value = "pretty")]
    pub format: InfoFormat,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum InfoFormat {
    Pretty,
    Json,
}

// ============================================================================
// Init Arguments
// ============================================================================

#[derive(Args, Debug, Clone)]
pub struct InitArgs {
    /// Overwrite existing xbeangen.toml if present
    #[arg(short, long)]
    pub force: bool,

    /// Initialize with minimal configuration
    #[arg(long)]
    pub minimal: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand() {
        let cli = Cli::try_parse_from(["xbeangen"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.log_level(), None);
    }

    #[test]
    fn test_generate_overrides() {
        let cli = Cli::try_parse_from([
            "xbeangen",
            "generate",
            "--descriptors",
            "in.json",
            "-o",
            "out/schema.xsd",
            "--namespace",
            "urn:test",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Generate(args)) => {
                assert_eq!(args.descriptors, Some(PathBuf::from("in.json")));
                assert_eq!(args.output, Some(PathBuf::from("out/schema.xsd")));
                assert_eq!(args.namespace.as_deref(), Some("urn:test"));
                assert!(args.meta_inf_dir.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_verbosity_flags() {
        let cli = Cli::try_parse_from(["xbeangen", "-vv", "info"]).unwrap();
        assert_eq!(cli.log_level(), Some("trace"));

        let cli = Cli::try_parse_from(["xbeangen", "info", "-q", "-v"]).unwrap();
        assert_eq!(cli.log_level(), Some("error"));
    }

    #[test]
    fn test_info_json_format() {
        let cli = Cli::try_parse_from(["xbeangen", "info", "--format", "json"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Info(InfoArgs {
                format: InfoFormat::Json
            }))
        ));
    }
}
