//! Decides how a bean property is represented in the generated schema.
//!
//! A *simple* property becomes an XML attribute, a *complex* one a nested
//! element. Classification is a pure function of the property and the
//! injected capabilities, so the detail and schema renderers recompute it
//! independently and always agree.

use crate::introspect::{EditorRegistry, TypeLoader};
use crate::resolver::TypeResolver;
use crate::types::{Annotated, PropertyDescriptor, TypeCatalog, XBEAN_ANNOTATION};
use tracing::{trace, warn};

/// Qualified name of the XML qualified-name value type, always simple.
pub const QNAME_TYPE: &str = "javax.xml.namespace.QName";

/// Supertype that marks a property type as a collection.
pub const COLLECTION_TYPE: &str = "java.util.Collection";

/// Property name every bean reflects from its class accessor.
const CLASS_PROPERTY: &str = "Class";

#[derive(Clone, Copy)]
pub struct PropertyClassifier<'a> {
    resolver: TypeResolver<'a>,
    loader: &'a dyn TypeLoader,
    editors: &'a dyn EditorRegistry,
}

impl<'a> PropertyClassifier<'a> {
    pub fn new(
        catalog: &'a TypeCatalog,
        loader: &'a dyn TypeLoader,
        editors: &'a dyn EditorRegistry,
    ) -> Self {
        Self {
            resolver: TypeResolver::new(catalog),
            loader,
            editors,
        }
    }

    pub fn resolver(&self) -> TypeResolver<'a> {
        self.resolver
    }

    /// Whether the property appears in generated artifacts at all.
    ///
    /// `Class` is never exposed and write-only access is required. When the
    /// setter's marker annotation carries a `hide` attribute, its value is
    /// the answer.
    pub fn is_valid_property(&self, property: &PropertyDescriptor) -> bool {
        if property.name == CLASS_PROPERTY {
            return false;
        }
        let Some(setter) = &property.setter else {
            return false;
        };
        match setter.bool_value(XBEAN_ANNOTATION, "hide") {
            Some(hide) => hide,
            None => true,
        }
    }

    /// Whether the property is written as an attribute.
    ///
    /// Primitives and qualified names are always simple. A name ending in
    /// `]` is treated as an array and never simple. Anything else is simple
    /// exactly when it resolves and has a registered editor; a type that
    /// fails to resolve is logged and treated as complex.
    pub fn is_simple_type(&self, property: &PropertyDescriptor) -> bool {
        let name = property.type_name.as_str();
        if self.resolver.catalog().is_primitive(name) || name == QNAME_TYPE {
            return true;
        }
        if name.ends_with(']') {
            return false;
        }
        match self.loader.load_type(name) {
            Ok(loaded) => {
                let editor = self.editors.find_editor(&loaded);
                trace!(type_name = name, editor = ?editor, "Editor lookup");
                editor.is_some()
            }
            Err(e) => {
                warn!(
                    type_name = name,
                    property = %property.name,
                    "Could not load type, treating property as complex: {}",
                    e
                );
                false
            }
        }
    }

    /// Whether values of `type_name` are arrays or collections.
    pub fn is_collection(&self, type_name: &str) -> bool {
        self.resolver.catalog().is_array(type_name)
            || self
                .resolver
                .type_implements_interface(type_name, COLLECTION_TYPE)
    }

    /// Valid properties of a type split into (simple, complex), in
    /// declaration order.
    pub fn partition<'p>(
        &self,
        properties: &'p [PropertyDescriptor],
    ) -> (Vec<&'p PropertyDescriptor>, Vec<&'p PropertyDescriptor>) {
        properties
            .iter()
            .filter(|p| self.is_valid_property(p))
            .partition(|p| self.is_simple_type(p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::XbeanError;
    use crate::introspect::{
        LoadedType, MockEditorRegistry, MockTypeLoader, StandardEditorRegistry,
    };
    use crate::types::{Annotation, MethodDescriptor};
    use mockall::predicate::eq;

    fn property(name: &str, type_name: &str) -> PropertyDescriptor {
        PropertyDescriptor::builder()
            .name(name)
            .type_name(type_name)
            .setter(MethodDescriptor::builder().name(format!("set{}", name)).build())
            .build()
    }

    fn hidden_property(name: &str, hide: bool) -> PropertyDescriptor {
        PropertyDescriptor::builder()
            .name(name)
            .type_name("int")
            .setter(
                MethodDescriptor::builder()
                    .name(format!("set{}", name))
                    .annotations(vec![Annotation::new(XBEAN_ANNOTATION).with("hide", hide)])
                    .build(),
            )
            .build()
    }

    #[test]
    fn test_class_property_is_never_valid() {
        let catalog = TypeCatalog::new();
        let editors = StandardEditorRegistry::new();
        let classifier = PropertyClassifier::new(&catalog, &catalog, &editors);

        assert!(!classifier.is_valid_property(&property("Class", "java.lang.Class")));
        assert!(!classifier.is_valid_property(&hidden_property("Class", true)));
        assert!(classifier.is_valid_property(&property("Classifier", "java.lang.String")));
    }

    #[test]
    fn test_property_without_setter_is_invalid() {
        let catalog = TypeCatalog::new();
        let editors = StandardEditorRegistry::new();
        let classifier = PropertyClassifier::new(&catalog, &catalog, &editors);

        let read_only = PropertyDescriptor::builder()
            .name("Size")
            .type_name("int")
            .build();
        assert!(!classifier.is_valid_property(&read_only));
    }

    #[test]
    fn test_hide_attribute_governs_visibility() {
        let catalog = TypeCatalog::new();
        let editors = StandardEditorRegistry::new();
        let classifier = PropertyClassifier::new(&catalog, &catalog, &editors);

        assert!(classifier.is_valid_property(&hidden_property("Flagged", true)));
        assert!(!classifier.is_valid_property(&hidden_property("Secret", false)));
        assert!(classifier.is_valid_property(&property("Unmarked", "int")));
    }

    #[test]
    fn test_primitives_and_qname_skip_the_probe() {
        let catalog = TypeCatalog::new();
        let mut loader = MockTypeLoader::new();
        loader.expect_load_type().never();
        let mut editors = MockEditorRegistry::new();
        editors.expect_find_editor().never();
        let classifier = PropertyClassifier::new(&catalog, &loader, &editors);

        for name in ["boolean", "byte", "char", "short", "int", "long", "float", "double"] {
            assert!(classifier.is_simple_type(&property("Value", name)), "{name}");
        }
        assert!(classifier.is_simple_type(&property("Name", QNAME_TYPE)));
        assert!(!classifier.is_simple_type(&property("Values", "int[]")));
        assert!(!classifier.is_simple_type(&property("Odd", "com.example.Weird]")));
    }

    #[test]
    fn test_editor_presence_decides_other_types() {
        let catalog = TypeCatalog::new();
        let mut loader = MockTypeLoader::new();
        loader
            .expect_load_type()
            .with(eq("com.example.Money"))
            .returning(|name| Ok(LoadedType::new(name)));
        loader
            .expect_load_type()
            .with(eq("com.example.Broker"))
            .returning(|name| Ok(LoadedType::new(name)));
        let mut editors = MockEditorRegistry::new();
        editors
            .expect_find_editor()
            .with(eq(LoadedType::new("com.example.Money")))
            .returning(|_| Some("MoneyEditor".to_string()));
        editors
            .expect_find_editor()
            .with(eq(LoadedType::new("com.example.Broker")))
            .returning(|_| None);
        let classifier = PropertyClassifier::new(&catalog, &loader, &editors);

        assert!(classifier.is_simple_type(&property("Price", "com.example.Money")));
        assert!(!classifier.is_simple_type(&property("Broker", "com.example.Broker")));
    }

    #[test]
    fn test_resolution_failure_is_complex() {
        let catalog = TypeCatalog::new();
        let mut loader = MockTypeLoader::new();
        loader
            .expect_load_type()
            .returning(|name| Err(XbeanError::type_not_found(name)));
        let mut editors = MockEditorRegistry::new();
        editors.expect_find_editor().never();
        let classifier = PropertyClassifier::new(&catalog, &loader, &editors);

        assert!(!classifier.is_simple_type(&property("Missing", "com.example.Missing")));
    }

    #[test]
    fn test_standard_registry_classification() {
        let catalog = TypeCatalog::new();
        let editors = StandardEditorRegistry::new();
        let classifier = PropertyClassifier::new(&catalog, &catalog, &editors);

        assert!(classifier.is_simple_type(&property("Name", "java.lang.String")));
        assert!(classifier.is_simple_type(&property("Port", "java.lang.Integer")));
        assert!(classifier.is_simple_type(&property("Location", "java.net.URI")));
        assert!(!classifier.is_simple_type(&property("Started", "java.util.Date")));
        assert!(!classifier.is_simple_type(&property("Items", "java.util.List")));
    }

    #[test]
    fn test_is_collection() {
        let catalog = TypeCatalog::new();
        let editors = StandardEditorRegistry::new();
        let classifier = PropertyClassifier::new(&catalog, &catalog, &editors);

        assert!(classifier.is_collection("java.util.List"));
        assert!(classifier.is_collection("java.util.ArrayList"));
        assert!(classifier.is_collection("java.util.HashSet"));
        assert!(classifier.is_collection("com.example.Thing[]"));
        assert!(!classifier.is_collection("java.util.Map"));
        assert!(!classifier.is_collection("java.lang.String"));
    }

    #[test]
    fn test_partition_keeps_declaration_order() {
        let catalog = TypeCatalog::new();
        let editors = StandardEditorRegistry::new();
        let classifier = PropertyClassifier::new(&catalog, &catalog, &editors);

        let properties = vec![
            property("Class", "java.lang.Class"),
            property("Port", "int"),
            property("Items", "java.util.List"),
            property("Name", "java.lang.String"),
            hidden_property("Secret", false),
            property("Started", "java.util.Date"),
            hidden_property("Flagged", true),
        ];
        let (simple, complex) = classifier.partition(&properties);
        let names = |ps: Vec<&PropertyDescriptor>| -> Vec<String> {
            ps.into_iter().map(|p| p.name.clone()).collect()
        };
        assert_eq!(names(simple), vec!["Port", "Name", "Flagged"]);
        assert_eq!(names(complex), vec!["Items", "Started"]);
    }
}
