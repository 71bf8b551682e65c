use std::collections::HashMap;

/// Fallback for any value type without a dedicated XSD mapping.
pub const DEFAULT_XSD_TYPE: &str = "xsd:string";

/// Maps value type names to XSD built-in type names.
///
/// Built once per generation run and owned by it.
#[derive(Debug, Clone)]
pub struct XsdTypeMap {
    types: HashMap<&'static str, &'static str>,
}

const MAPPINGS: [(&str, &str); 18] = [
    ("java.lang.String", "xsd:string"),
    ("java.lang.Boolean", "xsd:boolean"),
    ("boolean", "xsd:boolean"),
    ("java.lang.Byte", "xsd:byte"),
    ("byte", "xsd:byte"),
    ("java.lang.Short", "xsd:short"),
    ("short", "xsd:short"),
    ("java.lang.Integer", "xsd:integer"),
    ("int", "xsd:integer"),
    ("java.lang.Long", "xsd:long"),
    ("long", "xsd:long"),
    ("java.lang.Float", "xsd:float"),
    ("float", "xsd:float"),
    ("java.lang.Double", "xsd:double"),
    ("double", "xsd:double"),
    ("java.util.Date", "xsd:date"),
    ("java.sql.Date", "xsd:date"),
    ("javax.xml.namespace.QName", "xsd:QName"),
];

impl Default for XsdTypeMap {
    fn default() -> Self {
        Self::new()
    }
}

impl XsdTypeMap {
    pub fn new() -> Self {
        tracing::trace!(mappings = MAPPINGS.len(), "Loading XSD type map");
        Self {
            types: MAPPINGS.into_iter().collect(),
        }
    }

    /// Returns the XSD type for `type_name`, defaulting to `xsd:string`.
    pub fn xsd_type(&self, type_name: &str) -> &'static str {
        self.types
            .get(type_name)
            .copied()
            .unwrap_or(DEFAULT_XSD_TYPE)
    }
}
