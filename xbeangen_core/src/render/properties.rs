//! Discovery metadata (`META-INF/services`) properties rendering.

use crate::model::{SchemaElement, decapitalise};
use crate::types::{Annotated, ConstructorDescriptor, PROPERTY_ANNOTATION, XBEAN_ANNOTATION};

/// Renders the discovery properties for one namespace.
///
/// Per element: the `localName = class` binding, an optional content
/// property, the parameter names of every constructor that takes
/// arguments, and any property aliases.
pub fn generate_properties_string(namespace: &str, elements: &[SchemaElement]) -> String {
    tracing::info!(
        namespace,
        element_count = elements.len(),
        "Generating discovery properties"
    );

    let mut output = String::new();
    output.push_str(&format!("# {}\n", super::GENERATED_NOTE));
    output.push('\n');
    output.push_str("# beans\n");

    for element in elements {
        output.push_str(&format!(
            "{} = {}\n",
            element.local_name, element.ty.qualified_name
        ));
        output.push_str(&generate_content_property(element));
        for constructor in &element.ty.constructors {
            output.push_str(&generate_constructor(element, constructor));
        }
        output.push_str(&generate_property_aliases(element));
    }

    output
}

fn generate_content_property(element: &SchemaElement) -> String {
    match element.ty.string_value(XBEAN_ANNOTATION, "contentProperty") {
        Some(value) => format!("{}.contentProperty = {}\n", element.local_name, value),
        None => String::new(),
    }
}

/// `Type(P1,P2).parameterNames = a b`; nothing for a no-argument constructor.
fn generate_constructor(element: &SchemaElement, constructor: &ConstructorDescriptor) -> String {
    if constructor.parameters.is_empty() {
        return String::new();
    }
    let types: Vec<&str> = constructor
        .parameters
        .iter()
        .map(|p| p.type_name.as_str())
        .collect();
    let names: String = constructor
        .parameters
        .iter()
        .map(|p| format!(" {}", p.name))
        .collect();
    format!(
        "{}({}).parameterNames ={}\n",
        element.ty.qualified_name,
        types.join(","),
        names
    )
}

fn generate_property_aliases(element: &SchemaElement) -> String {
    let mut output = String::new();
    for property in &element.ty.properties {
        if let Some(alias) = property.string_value(PROPERTY_ANNOTATION, "alias") {
            output.push_str(&format!(
                "{}.alias.{} = {}\n",
                element.local_name,
                alias,
                decapitalise(&property.name)
            ));
        }
    }
    output
}
