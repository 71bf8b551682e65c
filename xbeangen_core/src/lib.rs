// XBeanGen - XML Schema, HTML reference and discovery file generation for annotated beans

pub mod classifier;
pub mod config;
pub mod error;
pub mod introspect;
pub mod model;
pub mod namespace;
pub mod render;
pub mod resolver;
pub mod types;
pub mod xsd_type;

// Build-time and CLI entry points
pub mod tooling;

// Re-export commonly used items for convenience
pub use error::{Result, XbeanError};
pub use model::{ModelBuilder, SchemaElement, SchemaModel};
pub use tooling::{GenerationReport, GeneratorConfig, SchemaGenerator};
pub use types::{TypeCatalog, TypeDescriptor};
