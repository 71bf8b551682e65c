pub mod cli;
pub mod commands;

pub use xbeangen_core::{GenerationReport, GeneratorConfig, SchemaGenerator, XbeanError};
