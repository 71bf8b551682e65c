use super::{TypeDescriptor, builtin};
use crate::error::{Result, XbeanError};
use crate::introspect::{LoadedType, TypeLoader};
use std::collections::HashMap;

/// Every type known to one generation run, indexed by qualified name.
///
/// Seeded with platform stubs; descriptors supplied by the introspection
/// provider replace a stub of the same name.
#[derive(Debug, Clone)]
pub struct TypeCatalog {
    types: HashMap<String, TypeDescriptor>,
}

impl Default for TypeCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeCatalog {
    /// Creates a catalog holding only the platform stubs.
    pub fn new() -> Self {
        let types = builtin::platform_types()
            .into_iter()
            .map(|t| (t.qualified_name.clone(), t))
            .collect();
        Self { types }
    }

    /// Creates a catalog from provider descriptors layered over the stubs.
    pub fn with_descriptors<'a>(descriptors: impl IntoIterator<Item = &'a TypeDescriptor>) -> Self {
        let mut catalog = Self::new();
        for descriptor in descriptors {
            catalog.insert(descriptor.clone());
        }
        catalog
    }

    pub fn insert(&mut self, descriptor: TypeDescriptor) {
        self.types
            .insert(descriptor.qualified_name.clone(), descriptor);
    }

    pub fn get(&self, qualified_name: &str) -> Option<&TypeDescriptor> {
        self.types.get(qualified_name)
    }

    pub fn contains(&self, qualified_name: &str) -> bool {
        self.types.contains_key(qualified_name)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Whether `qualified_name` is one of the primitive value types.
    pub fn is_primitive(&self, qualified_name: &str) -> bool {
        builtin::PRIMITIVES.contains(&qualified_name)
    }

    /// Whether `qualified_name` names an array type, either by its
    /// descriptor or by its `[]` dimension suffix.
    pub fn is_array(&self, qualified_name: &str) -> bool {
        match self.get(qualified_name) {
            Some(descriptor) => descriptor.is_array(),
            None => qualified_name.ends_with("[]"),
        }
    }
}

impl TypeLoader for TypeCatalog {
    fn load_type(&self, qualified_name: &str) -> Result<LoadedType> {
        if self.contains(qualified_name) {
            Ok(LoadedType::new(qualified_name))
        } else {
            Err(XbeanError::type_not_found(qualified_name))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TypeKind;

    #[test]
    fn test_new_catalog_contains_platform_types() {
        let catalog = TypeCatalog::new();
        assert!(catalog.contains("java.lang.String"));
        assert!(catalog.contains("java.util.List"));
        assert!(catalog.contains("int"));
        assert_eq!(
            catalog.get("java.util.List").map(|t| t.kind),
            Some(TypeKind::Interface)
        );
    }

    #[test]
    fn test_provider_descriptor_replaces_stub() {
        let custom = TypeDescriptor::builder()
            .qualified_name("java.net.URI")
            .comment("provider copy")
            .build();
        let catalog = TypeCatalog::with_descriptors([&custom]);
        assert_eq!(
            catalog.get("java.net.URI").and_then(|t| t.comment.as_deref()),
            Some("provider copy")
        );
    }

    #[test]
    fn test_load_type_reports_unknown_names() {
        let catalog = TypeCatalog::new();
        assert_eq!(
            catalog.load_type("java.lang.String").unwrap().qualified_name,
            "java.lang.String"
        );
        assert!(matches!(
            catalog.load_type("com.example.Missing"),
            Err(XbeanError::TypeNotFound { .. })
        ));
    }

    #[test]
    fn test_primitive_and_array_checks() {
        let catalog = TypeCatalog::new();
        assert!(catalog.is_primitive("double"));
        assert!(!catalog.is_primitive("java.lang.Double"));
        assert!(catalog.is_array("java.lang.String[]"));
        assert!(!catalog.is_array("java.lang.String"));
    }
}
