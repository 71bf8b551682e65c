//! Reflected type descriptors.
//!
//! These records are what an external introspection provider hands to the
//! generator: one [`TypeDescriptor`] per reflected type, carrying its bean
//! properties, constructors, inheritance edges, annotation metadata and doc
//! comments. They deserialize from the provider's JSON output and can be
//! assembled programmatically through their `builder()` methods.

mod builtin;
mod catalog;

pub use catalog::TypeCatalog;

use bon::Builder;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Marker annotation exposing a type (or hiding a setter) as configuration.
pub const XBEAN_ANNOTATION: &str = "org.xbean.XBean";

/// Property-level annotation carrying the `alias` attribute.
pub const PROPERTY_ANNOTATION: &str = "org.xbean.Property";

/// What sort of type a descriptor describes.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TypeKind {
    #[default]
    Class,
    Interface,
    Primitive,
    Array,
}

/// A single annotation attribute value.
///
/// Conversions are lenient in both directions, so a provider that emits
/// every attribute as a string still drives boolean switches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnnotationValue {
    Bool(bool),
    String(String),
}

impl AnnotationValue {
    pub fn as_string(&self) -> String {
        match self {
            AnnotationValue::Bool(b) => b.to_string(),
            AnnotationValue::String(s) => s.clone(),
        }
    }

    /// `true` only for a boolean `true` or the string `"true"` in any case.
    pub fn as_bool(&self) -> bool {
        match self {
            AnnotationValue::Bool(b) => *b,
            AnnotationValue::String(s) => s.eq_ignore_ascii_case("true"),
        }
    }
}

impl From<bool> for AnnotationValue {
    fn from(value: bool) -> Self {
        AnnotationValue::Bool(value)
    }
}

impl From<&str> for AnnotationValue {
    fn from(value: &str) -> Self {
        AnnotationValue::String(value.to_string())
    }
}

impl From<String> for AnnotationValue {
    fn from(value: String) -> Self {
        AnnotationValue::String(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    pub name: String,
    #[serde(default)]
    pub values: BTreeMap<String, AnnotationValue>,
}

impl Annotation {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: BTreeMap::new(),
        }
    }

    /// Adds an attribute, returning the annotation for chaining.
    pub fn with(mut self, attribute: impl Into<String>, value: impl Into<AnnotationValue>) -> Self {
        self.values.insert(attribute.into(), value.into());
        self
    }

    pub fn value(&self, attribute: &str) -> Option<&AnnotationValue> {
        self.values.get(attribute)
    }

    pub fn string_value(&self, attribute: &str) -> Option<String> {
        self.value(attribute).map(AnnotationValue::as_string)
    }

    pub fn bool_value(&self, attribute: &str) -> Option<bool> {
        self.value(attribute).map(AnnotationValue::as_bool)
    }
}

/// Access to annotation metadata and documentation on a reflected element.
pub trait Annotated {
    fn annotations(&self) -> &[Annotation];

    fn comment(&self) -> Option<&str>;

    fn annotation(&self, name: &str) -> Option<&Annotation> {
        self.annotations().iter().find(|a| a.name == name)
    }

    fn string_value(&self, annotation: &str, attribute: &str) -> Option<String> {
        self.annotation(annotation)
            .and_then(|a| a.string_value(attribute))
    }

    fn bool_value(&self, annotation: &str, attribute: &str) -> Option<bool> {
        self.annotation(annotation).and_then(|a| a.bool_value(attribute))
    }

    /// The marker's `description` attribute, else the doc comment, else empty.
    fn description(&self) -> String {
        if let Some(description) = self.string_value(XBEAN_ANNOTATION, "description") {
            return description;
        }
        self.comment().map(str::to_string).unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
pub struct TypeDescriptor {
    #[builder(into)]
    pub qualified_name: String,
    #[serde(default)]
    #[builder(default)]
    pub kind: TypeKind,
    #[serde(default)]
    #[builder(into)]
    pub superclass: Option<String>,
    #[serde(default)]
    #[builder(default)]
    pub interfaces: Vec<String>,
    #[serde(default)]
    #[builder(default)]
    pub annotations: Vec<Annotation>,
    #[serde(default)]
    #[builder(into)]
    pub comment: Option<String>,
    #[serde(default)]
    #[builder(default)]
    pub properties: Vec<PropertyDescriptor>,
    #[serde(default)]
    #[builder(default)]
    pub constructors: Vec<ConstructorDescriptor>,
}

impl TypeDescriptor {
    /// The unqualified name, with any enclosing type stripped.
    pub fn simple_name(&self) -> &str {
        let name = self
            .qualified_name
            .rsplit('.')
            .next()
            .unwrap_or(&self.qualified_name);
        name.rsplit('$').next().unwrap_or(name)
    }

    pub fn is_interface(&self) -> bool {
        self.kind == TypeKind::Interface
    }

    pub fn is_array(&self) -> bool {
        self.kind == TypeKind::Array
    }
}

impl Annotated for TypeDescriptor {
    fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
pub struct PropertyDescriptor {
    /// Bean property name as reflected, e.g. `Bar` for `setBar`.
    #[builder(into)]
    pub name: String,
    #[builder(into)]
    pub type_name: String,
    #[serde(default)]
    pub setter: Option<MethodDescriptor>,
    #[serde(default)]
    #[builder(default)]
    pub annotations: Vec<Annotation>,
}

impl PropertyDescriptor {
    /// Description taken from the setter; empty when there is none.
    pub fn description(&self) -> String {
        self.setter
            .as_ref()
            .map(Annotated::description)
            .unwrap_or_default()
    }
}

impl Annotated for PropertyDescriptor {
    fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    fn comment(&self) -> Option<&str> {
        self.setter.as_ref().and_then(|s| s.comment.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
pub struct MethodDescriptor {
    #[builder(into)]
    pub name: String,
    #[serde(default)]
    #[builder(default)]
    pub annotations: Vec<Annotation>,
    #[serde(default)]
    #[builder(into)]
    pub comment: Option<String>,
}

impl Annotated for MethodDescriptor {
    fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstructorDescriptor {
    #[serde(default)]
    pub parameters: Vec<ParameterDescriptor>,
}

impl ConstructorDescriptor {
    pub fn new(parameters: Vec<ParameterDescriptor>) -> Self {
        Self { parameters }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterDescriptor {
    pub name: String,
    pub type_name: String,
}

impl ParameterDescriptor {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_name_strips_package_and_outer_type() {
        let ty = TypeDescriptor::builder()
            .qualified_name("org.example.Outer$InnerFactoryBean")
            .build();
        assert_eq!(ty.simple_name(), "InnerFactoryBean");

        let ty = TypeDescriptor::builder().qualified_name("Bare").build();
        assert_eq!(ty.simple_name(), "Bare");
    }

    #[test]
    fn test_annotation_values_convert_leniently() {
        let annotation = Annotation::new(XBEAN_ANNOTATION)
            .with("rootElement", "TRUE")
            .with("hide", false)
            .with("element", "foo");

        assert_eq!(annotation.bool_value("rootElement"), Some(true));
        assert_eq!(annotation.bool_value("hide"), Some(false));
        assert_eq!(annotation.string_value("hide"), Some("false".to_string()));
        assert_eq!(annotation.bool_value("element"), Some(false));
        assert_eq!(annotation.string_value("missing"), None);
    }

    #[test]
    fn test_description_prefers_marker_attribute() {
        let ty = TypeDescriptor::builder()
            .qualified_name("org.example.Foo")
            .comment("From the doc comment")
            .annotations(vec![
                Annotation::new(XBEAN_ANNOTATION).with("description", "From the marker"),
            ])
            .build();
        assert_eq!(ty.description(), "From the marker");

        let ty = TypeDescriptor::builder()
            .qualified_name("org.example.Foo")
            .comment("From the doc comment")
            .build();
        assert_eq!(ty.description(), "From the doc comment");

        let ty = TypeDescriptor::builder().qualified_name("org.example.Foo").build();
        assert_eq!(ty.description(), "");
    }

    #[test]
    fn test_property_description_comes_from_setter() {
        let with_setter = PropertyDescriptor::builder()
            .name("Bar")
            .type_name("int")
            .setter(
                MethodDescriptor::builder()
                    .name("setBar")
                    .comment("Sets the bar")
                    .build(),
            )
            .build();
        assert_eq!(with_setter.description(), "Sets the bar");

        let without_setter = PropertyDescriptor::builder()
            .name("Bar")
            .type_name("int")
            .build();
        assert_eq!(without_setter.description(), "");
    }

    #[test]
    fn test_deserialize_descriptor_with_defaults() {
        let json = r#"{
            "qualified_name": "org.example.Foo",
            "annotations": [
                { "name": "org.xbean.XBean", "values": { "element": "foo", "rootElement": true } }
            ],
            "properties": [
                { "name": "Bar", "type_name": "int", "setter": { "name": "setBar" } }
            ],
            "constructors": [
                { "parameters": [ { "name": "bar", "type_name": "int" } ] }
            ]
        }"#;

        let ty: TypeDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(ty.kind, TypeKind::Class);
        assert_eq!(ty.superclass, None);
        assert_eq!(ty.string_value(XBEAN_ANNOTATION, "element"), Some("foo".to_string()));
        assert_eq!(ty.bool_value(XBEAN_ANNOTATION, "rootElement"), Some(true));
        assert_eq!(ty.properties[0].setter.as_ref().unwrap().name, "setBar");
        assert_eq!(ty.constructors[0].parameters[0].type_name, "int");
    }

    #[test]
    fn test_type_kind_display() {
        assert_eq!(TypeKind::Interface.to_string(), "interface");
        assert_eq!(TypeKind::Array.to_string(), "array");
    }
}
