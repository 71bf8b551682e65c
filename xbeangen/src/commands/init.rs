//! Init command - initializes xbeangen.toml configuration.

use crate::cli::{Cli, InitArgs};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info};
use xbeangen_core::config::CONFIG_FILE_NAME;
use xbeangen_core::error::Result;

/// Runs the init command.
pub fn run(cli: &Cli, args: &InitArgs) -> Result<bool> {
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME));

    if !write_config(&config_path, args)? {
        error!(
            "{} already exists. Use --force to overwrite.",
            config_path.display()
        );
        return Ok(false);
    }

    info!("Created {}", config_path.display());
    info!("Next steps:");
    info!("  1. Point [schema] descriptors at your introspection provider output");
    info!("  2. Set [general] default_namespace for types without one");
    info!("  3. Run 'xbeangen generate'");
    Ok(true)
}

/// Writes the starter configuration. Returns `false` without touching the
/// file when it exists and `--force` was not given.
pub fn write_config(path: &Path, args: &InitArgs) -> Result<bool> {
    if path.exists() && !args.force {
        return Ok(false);
    }
    let content = if args.minimal {
        MINIMAL_CONFIG
    } else {
        FULL_CONFIG
    };
    fs::write(path, content)?;
    Ok(true)
}

const MINIMAL_CONFIG: &str = r#"[general]
default_namespace = ""

[schema]
descriptors = "./target/xbean/descriptors"
destination = "./target/xbean/schema.xsd"
"#;

const FULL_CONFIG: &str = r#"# xbeangen Configuration

[general]
# Namespace for annotated types that do not declare one
default_namespace = "${XBEAN_NAMESPACE:-}"

[schema]
# Descriptor JSON file, or directory scanned for *.json files
descriptors = "./target/xbean/descriptors"

# XSD output; the HTML reference is written to the same path plus .html.
# With several namespaces each gets <stem>-<namespace>.xsd beside it.
destination = "./target/xbean/schema.xsd"

# Root for META-INF/services/org/apache/xbean/spring/ discovery files
meta_inf_dir = "./target/classes/"

[editors]
# Extra types that can be written as attribute values
types = []
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use xbeangen_core::config::XbeanConfig;

    fn args(force: bool, minimal: bool) -> InitArgs {
        InitArgs { force, minimal }
    }

    #[test]
    fn test_starter_configs_parse() {
        for content in [MINIMAL_CONFIG, FULL_CONFIG] {
            let config = XbeanConfig::from_toml_str(content, Path::new("")).unwrap();
            assert_eq!(config.schema.destination, "./target/xbean/schema.xsd");
        }
    }

    #[test]
    fn test_refuses_to_overwrite_without_force() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "# existing").unwrap();

        assert!(!write_config(&path, &args(false, false)).unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), "# existing");

        assert!(write_config(&path, &args(true, true)).unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), MINIMAL_CONFIG);
    }

    #[test]
    fn test_creates_new_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        assert!(write_config(&path, &args(false, false)).unwrap());
        assert!(fs::read_to_string(&path).unwrap().contains("[editors]"));
    }
}
