//! Text renderers over a built [`SchemaModel`].
//!
//! Each renderer is a pure function of a namespace, its sorted elements and
//! a [`RenderContext`]; none of them touches the file system or mutates the
//! model.

pub mod html;
pub mod properties;
pub mod xsd;

pub use html::generate_html_string;
pub use properties::generate_properties_string;
pub use xsd::generate_xsd_string;

use crate::classifier::PropertyClassifier;
use crate::model::SchemaModel;
use crate::xsd_type::XsdTypeMap;

/// Banner text placed at the top of every generated artifact.
pub const GENERATED_NOTE: &str = "NOTE: this file is autogenerated by XBeans";

/// Everything a renderer may consult besides the elements it is given.
#[derive(Clone, Copy)]
pub struct RenderContext<'a> {
    pub model: &'a SchemaModel,
    pub classifier: PropertyClassifier<'a>,
    pub xsd_types: &'a XsdTypeMap,
}

impl<'a> RenderContext<'a> {
    pub fn new(
        model: &'a SchemaModel,
        classifier: PropertyClassifier<'a>,
        xsd_types: &'a XsdTypeMap,
    ) -> Self {
        Self {
            model,
            classifier,
            xsd_types,
        }
    }
}

/// Escapes text for use in XML/HTML content and single- or double-quoted
/// attribute values.
pub fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '\'' => escaped.push_str("&apos;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
