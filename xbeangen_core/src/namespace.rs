//! Turns namespace URIs into `META-INF/services` discovery paths.

/// Prefix under which discovery files are looked up on the class path.
pub const META_INF_PREFIX: &str = "META-INF/services/org/apache/xbean/spring/";

/// Path of the discovery file for `namespace`, relative to the metadata root.
///
/// `://`, `:` and spaces are not valid in every file system, so they become
/// `/`, `/` and `_` respectively.
pub fn create_discovery_path_name(namespace: &str) -> String {
    format!(
        "{}{}",
        META_INF_PREFIX,
        namespace.replace("://", "/").replace(':', "/").replace(' ', "_")
    )
}

/// Path of the discovery file for one element; just `local_name` when the
/// namespace is empty.
pub fn create_element_discovery_path_name(namespace: &str, local_name: &str) -> String {
    if is_empty(namespace) {
        return local_name.to_string();
    }
    format!("{}/{}", create_discovery_path_name(namespace), local_name)
}

pub fn is_empty(namespace: &str) -> bool {
    namespace.is_empty()
}
