//! Info command - displays configuration and the element model.

use super::load_config;
use crate::cli::{Cli, InfoArgs, InfoFormat};
use serde_json::{Value, json};
use xbeangen_core::config::XbeanConfig;
use xbeangen_core::error::Result;
use xbeangen_core::model::{ModelBuilder, SchemaModel};
use xbeangen_core::tooling::DescriptorScanner;

/// Runs the info command.
pub fn run(cli: &Cli, args: &InfoArgs) -> Result<bool> {
    let config = load_config(cli)?;
    let descriptors = DescriptorScanner::new(&config.schema.descriptors).scan()?;
    let model = ModelBuilder::new(config.general.default_namespace.clone()).build(&descriptors);

    match args.format {
        InfoFormat::Pretty => print!("{}", render_pretty(&config, &model)),
        InfoFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&to_json(&config, &model))?)
        }
    }
    Ok(true)
}

fn render_pretty(config: &XbeanConfig, model: &SchemaModel) -> String {
    let mut output = String::from("\n=== Configuration ===\n\n");
    output.push_str(&format!("Descriptors:       {}\n", config.schema.descriptors));
    output.push_str(&format!("Destination:       {}\n", config.schema.destination));
    output.push_str(&format!("META-INF root:     {}\n", config.schema.meta_inf_dir));
    output.push_str(&format!(
        "Default namespace: {:?}\n",
        config.general.default_namespace
    ));
    if !config.editors.types.is_empty() {
        output.push_str(&format!("Extra editors:     {:?}\n", config.editors.types));
    }

    output.push_str("\n=== Elements ===\n\n");
    output.push_str(&format!(
        "Scanned {} types, {} elements\n",
        model.scanned(),
        model.all_elements().len()
    ));
    let root = model.root().map(|r| r.ty.qualified_name.as_str());
    for (namespace, elements) in model.namespaces() {
        output.push_str(&format!(
            "\n{} ({} elements)\n",
            display_namespace(namespace),
            elements.len()
        ));
        for element in elements {
            let marker = if root == Some(element.ty.qualified_name.as_str()) {
                "  [root]"
            } else {
                ""
            };
            output.push_str(&format!(
                "  {:<24} {}{}\n",
                element.local_name, element.ty.qualified_name, marker
            ));
        }
    }
    output
}

fn display_namespace(namespace: &str) -> &str {
    if namespace.is_empty() {
        "<no namespace>"
    } else {
        namespace
    }
}

fn to_json(config: &XbeanConfig, model: &SchemaModel) -> Value {
    let namespaces: Vec<Value> = model
        .namespaces()
        .map(|(namespace, elements)| {
            json!({
                "namespace": namespace,
                "elements": elements
                    .iter()
                    .map(|e| json!({
                        "local_name": e.local_name,
                        "type": e.ty.qualified_name,
                    }))
                    .collect::<Vec<_>>(),
            })
        })
        .collect();

    json!({
        "config": config,
        "types_scanned": model.scanned(),
        "root": model.root().map(|r| r.local_name.clone()),
        "namespaces": namespaces,
    })
}
