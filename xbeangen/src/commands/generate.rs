//! Generate command - writes discovery files, HTML references and XSDs.

use super::load_config;
use crate::cli::{Cli, GenerateArgs};
use tracing::info;
use xbeangen_core::config::XbeanConfig;
use xbeangen_core::error::{Result, XbeanError};
use xbeangen_core::tooling::{GeneratorConfig, SchemaGenerator};

/// Runs the generate command.
pub fn run(cli: &Cli, args: &GenerateArgs) -> Result<bool> {
    info!("Starting xbeangen schema generation");

    let config = resolve_config(load_config(cli), args)?;
    let report = SchemaGenerator::new(config).generate()?;

    for file in &report.files {
        info!(
            "  {:<9} {} ({} bytes)",
            file.artifact_kind.to_string(),
            file.path.display(),
            file.bytes_written
        );
    }
    info!(
        "Scanned {} types, {} elements in {} namespace(s), wrote {} files",
        report.types_scanned,
        report.elements,
        report.namespaces,
        report.files.len()
    );

    Ok(true)
}

/// Applies the flags to a loaded configuration. Without a configuration
/// file the flags alone are used when they name the descriptors and the
/// output; any other load failure is returned as is.
pub fn resolve_config(loaded: Result<XbeanConfig>, args: &GenerateArgs) -> Result<GeneratorConfig> {
    match loaded {
        Ok(config) => Ok(apply_overrides(GeneratorConfig::from(config), args)),
        Err(e @ XbeanError::ConfigNotFound { .. }) => {
            let config = config_from_flags(args).ok_or(e)?;
            info!("No configuration file found, using command-line flags");
            Ok(config)
        }
        Err(e) => Err(e),
    }
}

/// A complete configuration from flags alone; needs at least the
/// descriptors and the output path.
pub fn config_from_flags(args: &GenerateArgs) -> Option<GeneratorConfig> {
    let config = GeneratorConfig::builder()
        .descriptors(args.descriptors.clone()?)
        .destination(args.output.clone()?)
        .build();
    Some(apply_overrides(config, args))
}

/// Command-line flags take precedence over the configuration file.
pub fn apply_overrides(mut config: GeneratorConfig, args: &GenerateArgs) -> GeneratorConfig {
    if let Some(descriptors) = &args.descriptors {
        config.descriptors = descriptors.clone();
    }
    if let Some(output) = &args.output {
        config.destination = output.clone();
    }
    if let Some(meta_inf_dir) = &args.meta_inf_dir {
        config.meta_inf_dir = meta_inf_dir.clone();
    }
    if let Some(namespace) = &args.namespace {
        config.default_namespace = namespace.clone();
    }
    config
}
