//! Validate command - checks configuration and descriptors.

use super::load_config;
use crate::cli::{Cli, ValidateArgs};
use std::collections::BTreeMap;
use std::fmt;
use tracing::{error, info, warn};
use xbeangen_core::classifier::PropertyClassifier;
use xbeangen_core::error::Result;
use xbeangen_core::introspect::{StandardEditorRegistry, TypeLoader};
use xbeangen_core::model::{ModelBuilder, SchemaModel};
use xbeangen_core::tooling::DescriptorScanner;
use xbeangen_core::types::{Annotated, TypeCatalog, TypeDescriptor, XBEAN_ANNOTATION};

/// Something generation would accept but probably should not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Problem {
    /// Several types share one element name within a namespace.
    DuplicateElement {
        namespace: String,
        local_name: String,
        types: Vec<String>,
    },
    /// More than one type claims to be the root; only the last one is used.
    MultipleRoots { types: Vec<String> },
    /// A property's type is unknown to the descriptor set.
    UnresolvedType {
        element: String,
        property: String,
        type_name: String,
    },
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Problem::DuplicateElement {
                namespace,
                local_name,
                types,
            } => write!(
                f,
                "element '{}' in namespace '{}' is declared by {}",
                local_name,
                namespace,
                types.join(", ")
            ),
            Problem::MultipleRoots { types } => write!(
                f,
                "multiple root elements declared ({}); the last one wins",
                types.join(", ")
            ),
            Problem::UnresolvedType {
                element,
                property,
                type_name,
            } => write!(
                f,
                "property '{}' of element '{}' has unresolvable type {}",
                property, element, type_name
            ),
        }
    }
}

/// Runs the validate command.
pub fn run(cli: &Cli, args: &ValidateArgs) -> Result<bool> {
    info!("Validating xbeangen configuration and descriptors");

    info!("Checking configuration...");
    let config = match load_config(cli) {
        Ok(config) => {
            info!("  Configuration file: OK");
            info!("    Descriptors: {}", config.schema.descriptors);
            info!("    Destination: {}", config.schema.destination);
            info!("    META-INF root: {}", config.schema.meta_inf_dir);
            info!("    Default namespace: {:?}", config.general.default_namespace);
            config
        }
        Err(e) => {
            error!("  Configuration file: FAILED");
            error!("    Error: {}", e);
            return Ok(false);
        }
    };

    if args.config_only {
        info!("Validation passed");
        return Ok(true);
    }

    info!("Checking descriptors...");
    let descriptors = match DescriptorScanner::new(&config.schema.descriptors).scan() {
        Ok(descriptors) => descriptors,
        Err(e) => {
            error!("  Descriptors: FAILED");
            error!("    Error: {}", e);
            return Ok(false);
        }
    };

    let model = ModelBuilder::new(config.general.default_namespace.clone()).build(&descriptors);
    info!("  Descriptors: OK");
    info!("    Types scanned: {}", model.scanned());
    info!("    Elements: {}", model.all_elements().len());
    info!("    Namespaces: {}", model.namespace_count());

    let problems = find_problems(&descriptors, &model);
    if problems.is_empty() {
        info!("Validation passed");
        return Ok(true);
    }

    for problem in &problems {
        warn!("  {}", problem);
    }
    error!("Validation failed with {} problem(s)", problems.len());
    Ok(false)
}

/// Collects duplicate element names, competing roots and unresolvable
/// property types.
pub fn find_problems(descriptors: &[TypeDescriptor], model: &SchemaModel) -> Vec<Problem> {
    let mut problems = Vec::new();

    for (namespace, elements) in model.namespaces() {
        let mut by_name: BTreeMap<&str, Vec<String>> = BTreeMap::new();
        for element in elements {
            by_name
                .entry(element.local_name.as_str())
                .or_default()
                .push(element.ty.qualified_name.clone());
        }
        for (local_name, types) in by_name {
            if types.len() > 1 {
                problems.push(Problem::DuplicateElement {
                    namespace: namespace.to_string(),
                    local_name: local_name.to_string(),
                    types,
                });
            }
        }
    }

    let roots: Vec<String> = model
        .all_elements()
        .iter()
        .filter(|e| e.ty.bool_value(XBEAN_ANNOTATION, "rootElement") == Some(true))
        .map(|e| e.ty.qualified_name.clone())
        .collect();
    if roots.len() > 1 {
        problems.push(Problem::MultipleRoots { types: roots });
    }

    let catalog = TypeCatalog::with_descriptors(descriptors);
    let editors = StandardEditorRegistry::new();
    let classifier = PropertyClassifier::new(&catalog, &catalog, &editors);
    for element in model.all_elements() {
        for property in &element.ty.properties {
            if !classifier.is_valid_property(property) || property.type_name.ends_with(']') {
                continue;
            }
            if catalog.load_type(&property.type_name).is_err() {
                problems.push(Problem::UnresolvedType {
                    element: element.local_name.clone(),
                    property: property.name.clone(),
                    type_name: property.type_name.clone(),
                });
            }
        }
    }

    problems
}
