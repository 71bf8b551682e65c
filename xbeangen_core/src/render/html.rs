//! HTML reference documentation rendering.

use super::{GENERATED_NOTE, RenderContext, escape_xml};
use crate::model::{SchemaElement, property_xml_name};
use crate::types::{Annotated, PropertyDescriptor};

/// Tag offered for every complex property regardless of candidates.
pub const BEAN_FALLBACK_TAG: &str = "<spring:bean/>";

/// Tag shown for collection-valued properties.
pub const LIST_TAG: &str = "<list/>";

/// Renders the reference document for one namespace.
pub fn generate_html_string(
    namespace: &str,
    elements: &[SchemaElement],
    ctx: &RenderContext<'_>,
) -> String {
    tracing::info!(
        namespace,
        element_count = elements.len(),
        "Generating HTML documentation"
    );

    let mut output = String::new();
    output.push_str(&format!("<!-- {} -->\n", GENERATED_NOTE));
    output.push_str("<html>\n");
    output.push_str("<head>\n");
    output.push_str(&format!(
        "<title>Schema for namespace: {}</title>\n",
        escape_xml(namespace)
    ));
    output.push_str("<link rel='stylesheet' href='style.css' type='text/css'>\n");
    output.push_str("</head>\n\n");
    output.push_str("<body>\n\n");

    if let Some(root) = ctx.model.root() {
        output.push_str("<h1>Root Element</h1>\n");
        output.push_str("<table>\n");
        output.push_str("  <tr><th>Element</th><th>Description</th><th>Class</th></tr>\n");
        output.push_str(&generate_element_summary(root));
        output.push_str("</table>\n\n");
    }

    output.push_str("<h1>Element Summary</h1>\n");
    output.push_str("<table>\n");
    output.push_str("  <tr><th>Element</th><th>Description</th><th>Class</th></tr>\n");
    for element in elements {
        output.push_str(&generate_element_summary(element));
    }
    output.push_str("</table>\n\n\n");

    output.push_str("<h1>Element Detail</h1>\n");
    for element in elements {
        output.push_str(&generate_element_detail(element, ctx));
    }

    output.push_str("\n</body>\n");
    output.push_str("</html>\n");

    tracing::debug!(output_length = output.len(), "HTML documentation complete");
    output
}

fn generate_element_summary(element: &SchemaElement) -> String {
    let local_name = escape_xml(&element.local_name);
    format!(
        "  <tr><td><a href='#{}'>{}</a></td><td>{}</td><td>{}</td></tr>\n",
        local_name,
        local_name,
        escape_xml(&element.ty.description()),
        escape_xml(&element.ty.qualified_name)
    )
}

fn generate_element_detail(element: &SchemaElement, ctx: &RenderContext<'_>) -> String {
    let local_name = escape_xml(&element.local_name);
    let (simple, complex) = ctx.classifier.partition(&element.ty.properties);

    let mut output = format!("<h2>Element: <a name='{}'>{}</a></h2>\n", local_name, local_name);

    output.push_str("<table>\n");
    output.push_str("  <tr><th>Attribute</th><th>Type</th><th>Description</th></tr>\n");
    for property in simple {
        output.push_str(&format!(
            "  <tr><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            escape_xml(&property_xml_name(property)),
            ctx.xsd_types.xsd_type(&property.type_name),
            escape_xml(&property.description())
        ));
    }
    output.push_str("</table>\n");

    output.push_str("<table>\n");
    output.push_str("  <tr><th>Element</th><th>Type</th><th>Description</th></tr>\n");
    for property in complex {
        output.push_str(&format!(
            "  <tr><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            escape_xml(&property_xml_name(property)),
            escape_xml(&complex_property_type(property, ctx)),
            escape_xml(&property.description())
        ));
    }
    output.push_str("</table>\n");
    output
}

/// `<list/>` for collections, otherwise every candidate element tag
/// followed by the generic bean reference, joined with ` | `.
pub fn complex_property_type(property: &PropertyDescriptor, ctx: &RenderContext<'_>) -> String {
    if ctx.classifier.is_collection(&property.type_name) {
        return LIST_TAG.to_string();
    }
    let mut tags: Vec<String> = ctx
        .classifier
        .resolver()
        .find_implementations_of(&property.type_name, ctx.model.all_elements())
        .into_iter()
        .map(|element| format!("<{}/>", element.local_name))
        .collect();
    tags.push(BEAN_FALLBACK_TAG.to_string());
    tags.join(" | ")
}
