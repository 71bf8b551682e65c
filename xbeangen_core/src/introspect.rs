//! Injected capabilities the classifier probes instead of a live runtime.
//!
//! A [`TypeLoader`] answers whether a type name resolves at all, and an
//! [`EditorRegistry`] answers whether a resolved type can be written as a
//! single attribute string. Both are handed to the classifier explicitly.

use crate::error::Result;
use std::collections::BTreeMap;
use tracing::debug;

/// A type that resolved through a [`TypeLoader`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LoadedType {
    pub qualified_name: String,
}

impl LoadedType {
    pub fn new(qualified_name: impl Into<String>) -> Self {
        Self {
            qualified_name: qualified_name.into(),
        }
    }
}

/// Resolves a type by qualified name.
#[cfg_attr(test, mockall::automock)]
pub trait TypeLoader {
    fn load_type(&self, qualified_name: &str) -> Result<LoadedType>;
}

/// Looks up a text editor (string converter) for a resolved type.
#[cfg_attr(test, mockall::automock)]
pub trait EditorRegistry {
    /// Returns the name of the editor registered for `ty`, if any.
    fn find_editor(&self, ty: &LoadedType) -> Option<String>;
}

/// Editor registry seeded with the editors a bean runtime provides out of
/// the box, plus the custom ones xbean registers.
#[derive(Debug, Clone)]
pub struct StandardEditorRegistry {
    editors: BTreeMap<String, String>,
}

const DEFAULT_EDITORS: [(&str, &str); 10] = [
    ("java.lang.String", "StringEditor"),
    ("java.lang.Boolean", "BooleanEditor"),
    ("java.lang.Byte", "ByteEditor"),
    ("java.lang.Short", "ShortEditor"),
    ("java.lang.Integer", "IntegerEditor"),
    ("java.lang.Long", "LongEditor"),
    ("java.lang.Float", "FloatEditor"),
    ("java.lang.Double", "DoubleEditor"),
    ("java.net.URI", "URIEditor"),
    ("javax.management.ObjectName", "ObjectNameEditor"),
];

impl Default for StandardEditorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl StandardEditorRegistry {
    pub fn new() -> Self {
        let editors = DEFAULT_EDITORS
            .iter()
            .map(|(ty, editor)| (ty.to_string(), editor.to_string()))
            .collect();
        Self { editors }
    }

    /// Creates the default registry plus a generic editor for each extra type.
    pub fn with_types<I, S>(types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut registry = Self::new();
        for ty in types {
            registry.register(ty, "ConfiguredEditor");
        }
        registry
    }

    pub fn register(&mut self, qualified_name: impl Into<String>, editor: impl Into<String>) {
        let qualified_name = qualified_name.into();
        debug!(type_name = %qualified_name, "Registering property editor");
        self.editors.insert(qualified_name, editor.into());
    }

    pub fn len(&self) -> usize {
        self.editors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.editors.is_empty()
    }
}

impl EditorRegistry for StandardEditorRegistry {
    fn find_editor(&self, ty: &LoadedType) -> Option<String> {
        self.editors.get(&ty.qualified_name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_editors() {
        let registry = StandardEditorRegistry::new();
        assert_eq!(
            registry.find_editor(&LoadedType::new("java.net.URI")),
            Some("URIEditor".to_string())
        );
        assert_eq!(registry.find_editor(&LoadedType::new("java.util.Date")), None);
    }

    #[test]
    fn test_configured_editor_types() {
        let registry = StandardEditorRegistry::with_types(["com.example.Money"]);
        assert!(registry
            .find_editor(&LoadedType::new("com.example.Money"))
            .is_some());
        assert_eq!(registry.len(), DEFAULT_EDITORS.len() + 1);
    }
}
