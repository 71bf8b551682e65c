//! XML Schema rendering.
//!
//! Every element becomes an `xs:element`/`xs:complexType` pair. Simple
//! properties are attributes; complex ones are optional child elements in a
//! sequence. Child elements are stubs: the candidate implementations listed
//! in the HTML reference are not expanded into the schema.

use super::{GENERATED_NOTE, RenderContext, escape_xml};
use crate::model::{SchemaElement, property_xml_name};
use crate::types::PropertyDescriptor;

pub const XML_SCHEMA_NS: &str = "http://www.w3.org/2001/XMLSchema";

/// Renders the schema document for one namespace.
pub fn generate_xsd_string(
    namespace: &str,
    elements: &[SchemaElement],
    ctx: &RenderContext<'_>,
) -> String {
    tracing::info!(
        namespace,
        element_count = elements.len(),
        "Generating XML Schema"
    );

    let namespace = escape_xml(namespace);
    let mut output = String::new();
    output.push_str("<?xml version='1.0'?>\n");
    output.push_str(&format!("<!-- {} -->\n\n", GENERATED_NOTE));
    output.push_str(&format!("<xs:schema xmlns:xs='{}'\n", XML_SCHEMA_NS));
    output.push_str(&format!("  xmlns:xsd='{}'\n", XML_SCHEMA_NS));
    output.push_str(&format!(
        "  xmlns:tns='{}' targetNamespace='{}'>\n",
        namespace, namespace
    ));

    for element in elements {
        output.push_str(&generate_schema_element(element, ctx));
    }

    output.push_str("\n</xs:schema>\n");

    tracing::debug!(output_length = output.len(), "XML Schema complete");
    output
}

fn generate_schema_element(element: &SchemaElement, ctx: &RenderContext<'_>) -> String {
    let local_name = escape_xml(&element.local_name);
    let (simple, complex) = ctx.classifier.partition(&element.ty.properties);

    let mut output = String::from("\n");
    output.push_str(&format!(
        "  <!-- element for type: {} -->\n",
        element.ty.qualified_name
    ));
    output.push_str(&format!(
        "  <xs:element name='{}' type='tns:{}'/>\n",
        local_name, local_name
    ));
    output.push_str(&format!("  <xs:complexType name='{}'>\n", local_name));

    if !complex.is_empty() {
        output.push_str("    <xs:sequence>\n");
        for property in &complex {
            output.push_str(&generate_complex_property(property));
        }
        output.push_str("    </xs:sequence>\n");
    }
    for property in &simple {
        output.push_str(&generate_simple_property(property, ctx));
    }

    output.push_str("  </xs:complexType>\n\n");
    output
}

fn generate_simple_property(property: &PropertyDescriptor, ctx: &RenderContext<'_>) -> String {
    format!(
        "    <xs:attribute name='{}' type='{}'/>\n",
        escape_xml(&property_xml_name(property)),
        ctx.xsd_types.xsd_type(&property.type_name)
    )
}

// TODO: list the candidate implementations as a choice and allow extension via xs:any
fn generate_complex_property(property: &PropertyDescriptor) -> String {
    format!(
        "      <xs:element name='{}' minOccurs='0' maxOccurs='1'/>\n",
        escape_xml(&property_xml_name(property))
    )
}
