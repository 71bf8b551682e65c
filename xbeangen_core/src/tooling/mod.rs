//! Tooling for running generation from build scripts and the CLI.
//!
//! ## Quick Start (in build.rs)
//!
//! ```rust,ignore
//! fn main() {
//!     xbeangen_core::tooling::generate().expect("Schema generation failed");
//!     println!("cargo:rerun-if-changed=xbeangen.toml");
//! }
//! ```

mod descriptors;
mod generator;

pub use descriptors::*;
pub use generator::*;

use crate::error::Result;

/// Generates all artifacts using configuration from `xbeangen.toml`.
///
/// # Errors
///
/// Returns `XbeanError` if:
/// - Configuration file cannot be found or parsed
/// - Descriptor files cannot be read
/// - Output files cannot be written
pub fn generate() -> Result<GenerationReport> {
    let config = GeneratorConfig::from_toml()?;
    SchemaGenerator::new(config).generate()
}

/// Generates all artifacts with a custom configuration.
pub fn generate_with_config(config: GeneratorConfig) -> Result<GenerationReport> {
    SchemaGenerator::new(config).generate()
}
