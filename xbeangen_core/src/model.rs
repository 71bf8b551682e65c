//! The namespace-grouped element model one generation run renders.

use crate::types::{Annotated, PropertyDescriptor, TypeDescriptor, XBEAN_ANNOTATION};
use std::collections::BTreeMap;
use tracing::{debug, info};

/// A reflected type exposed as an XML element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaElement {
    pub ty: TypeDescriptor,
    pub local_name: String,
    pub namespace: String,
}

/// Elements grouped by namespace, plus the flat scan-order catalog and the
/// designated root element.
///
/// Built once per run by [`ModelBuilder`] and only read afterwards. Each
/// namespace's elements are sorted by local name (stable for duplicates).
#[derive(Debug, Clone, Default)]
pub struct SchemaModel {
    namespaces: BTreeMap<String, Vec<SchemaElement>>,
    all_elements: Vec<SchemaElement>,
    root: Option<SchemaElement>,
    scanned: usize,
}

impl SchemaModel {
    /// Namespaces in ascending order with their sorted elements.
    pub fn namespaces(&self) -> impl Iterator<Item = (&str, &[SchemaElement])> {
        self.namespaces
            .iter()
            .map(|(ns, elements)| (ns.as_str(), elements.as_slice()))
    }

    pub fn elements(&self, namespace: &str) -> Option<&[SchemaElement]> {
        self.namespaces.get(namespace).map(Vec::as_slice)
    }

    /// Every element across all namespaces, in scan order.
    pub fn all_elements(&self) -> &[SchemaElement] {
        &self.all_elements
    }

    pub fn root(&self) -> Option<&SchemaElement> {
        self.root.as_ref()
    }

    pub fn namespace_count(&self) -> usize {
        self.namespaces.len()
    }

    /// Number of descriptors scanned, annotated or not.
    pub fn scanned(&self) -> usize {
        self.scanned
    }

    pub fn is_empty(&self) -> bool {
        self.namespaces.is_empty()
    }
}

/// Scans descriptors for the marker annotation and builds a [`SchemaModel`].
#[derive(Debug, Clone)]
pub struct ModelBuilder {
    default_namespace: String,
}

impl ModelBuilder {
    pub fn new(default_namespace: impl Into<String>) -> Self {
        Self {
            default_namespace: default_namespace.into(),
        }
    }

    pub fn build<'a>(&self, types: impl IntoIterator<Item = &'a TypeDescriptor>) -> SchemaModel {
        let mut model = SchemaModel::default();

        for ty in types {
            model.scanned += 1;
            let Some(marker) = ty.annotation(XBEAN_ANNOTATION) else {
                debug!("No XML annotation found for type: {}", ty.qualified_name);
                continue;
            };

            let local_name = marker
                .string_value("element")
                .unwrap_or_else(|| type_xml_name(ty));
            let namespace = marker
                .string_value("namespace")
                .unwrap_or_else(|| self.default_namespace.clone());
            let root = marker.bool_value("rootElement").unwrap_or(false);

            debug!(
                type_name = %ty.qualified_name,
                local_name = %local_name,
                namespace = %namespace,
                root,
                "Adding XML element"
            );

            let element = SchemaElement {
                ty: ty.clone(),
                local_name,
                namespace: namespace.clone(),
            };
            model
                .namespaces
                .entry(namespace)
                .or_default()
                .push(element.clone());
            if root {
                model.root = Some(element.clone());
            }
            model.all_elements.push(element);
        }

        for elements in model.namespaces.values_mut() {
            elements.sort_by(|a, b| a.local_name.cmp(&b.local_name));
        }

        info!(
            scanned = model.scanned,
            elements = model.all_elements.len(),
            namespaces = model.namespaces.len(),
            root = model.root.as_ref().map(|r| r.local_name.as_str()),
            "Schema model built"
        );
        model
    }
}

/// Lower-cases the first character, leaving the rest unchanged.
pub fn decapitalise(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Element name derived from a type: the decapitalised simple name, with a
/// trailing `Bean` dropped from `…FactoryBean` names.
pub fn type_xml_name(ty: &TypeDescriptor) -> String {
    let mut name = decapitalise(ty.simple_name());
    if name.ends_with("FactoryBean") {
        name.truncate(name.len() - "Bean".len());
    }
    name
}

/// Attribute or child element name for a property.
pub fn property_xml_name(property: &PropertyDescriptor) -> String {
    decapitalise(&property.name)
}
