//! The generation pipeline: descriptors in, artifacts on disk.

use super::DescriptorScanner;
use crate::classifier::PropertyClassifier;
use crate::config::XbeanConfig;
use crate::error::{Result, XbeanError};
use crate::introspect::StandardEditorRegistry;
use crate::model::{ModelBuilder, SchemaModel};
use crate::namespace;
use crate::render::{
    RenderContext, generate_html_string, generate_properties_string, generate_xsd_string,
};
use crate::types::{TypeCatalog, TypeDescriptor};
use crate::xsd_type::XsdTypeMap;
use bon::Builder;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Resolved settings for one generation run.
#[derive(Debug, Clone, Builder)]
pub struct GeneratorConfig {
    /// Descriptor JSON file or directory.
    #[builder(into)]
    pub descriptors: PathBuf,
    /// XSD destination; the HTML reference goes to the same path plus `.html`.
    #[builder(into)]
    pub destination: PathBuf,
    /// Root for `META-INF/services/...` discovery files.
    #[builder(into, default = PathBuf::from("target/classes/"))]
    pub meta_inf_dir: PathBuf,
    #[builder(into, default)]
    pub default_namespace: String,
    /// Extra types registered with a generic editor.
    #[builder(default)]
    pub editor_types: Vec<String>,
}

impl GeneratorConfig {
    /// Loads configuration from `xbeangen.toml`, searching upward from the
    /// current directory.
    pub fn from_toml() -> Result<Self> {
        XbeanConfig::new().map(Self::from)
    }

    /// Loads configuration from a specific `xbeangen.toml` file.
    pub fn from_toml_path(path: impl AsRef<Path>) -> Result<Self> {
        XbeanConfig::from_path(path).map(Self::from)
    }
}

impl From<XbeanConfig> for GeneratorConfig {
    fn from(config: XbeanConfig) -> Self {
        Self {
            descriptors: PathBuf::from(config.schema.descriptors),
            destination: PathBuf::from(config.schema.destination),
            meta_inf_dir: PathBuf::from(config.schema.meta_inf_dir),
            default_namespace: config.general.default_namespace,
            editor_types: config.editors.types,
        }
    }
}

/// The kind of artifact a generated file holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum ArtifactKind {
    /// Element-to-type discovery properties.
    Discovery,
    /// Human-readable element reference.
    Html,
    /// XML Schema document.
    Xsd,
}

/// Information about a generated file.
#[derive(Debug, Clone)]
pub struct GeneratedFile {
    pub path: PathBuf,
    pub bytes_written: usize,
    pub artifact_kind: ArtifactKind,
}

/// Report of the generation process.
#[derive(Debug, Clone, Default)]
pub struct GenerationReport {
    /// Files written, in write order.
    pub files: Vec<GeneratedFile>,
    /// Descriptors inspected.
    pub types_scanned: usize,
    /// Descriptors carrying the marker annotation.
    pub elements: usize,
    pub namespaces: usize,
}

impl GenerationReport {
    fn for_model(model: &SchemaModel) -> Self {
        Self {
            files: Vec::new(),
            types_scanned: model.scanned(),
            elements: model.all_elements().len(),
            namespaces: model.namespace_count(),
        }
    }

    fn add_file(&mut self, file: GeneratedFile) {
        self.files.push(file);
    }

    pub fn total_bytes(&self) -> usize {
        self.files.iter().map(|f| f.bytes_written).sum()
    }

    pub fn files_of(&self, kind: ArtifactKind) -> impl Iterator<Item = &GeneratedFile> {
        self.files.iter().filter(move |f| f.artifact_kind == kind)
    }
}

/// Generator for the discovery, HTML and XSD artifacts of every namespace.
pub struct SchemaGenerator {
    config: GeneratorConfig,
}

impl SchemaGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Loads the configured descriptors and writes all artifacts.
    pub fn generate(&self) -> Result<GenerationReport> {
        let descriptors = DescriptorScanner::new(&self.config.descriptors).scan()?;
        self.generate_from(&descriptors)
    }

    /// Writes all artifacts for descriptors already in memory.
    ///
    /// Namespaces are visited in ascending order. An I/O failure stops the
    /// run; files written before it stay on disk.
    pub fn generate_from(&self, descriptors: &[TypeDescriptor]) -> Result<GenerationReport> {
        info!("Starting schema generation");

        let catalog = TypeCatalog::with_descriptors(descriptors);
        let editors = StandardEditorRegistry::with_types(self.config.editor_types.iter().cloned());
        let xsd_types = XsdTypeMap::new();
        let model = ModelBuilder::new(self.config.default_namespace.clone()).build(descriptors);

        let mut report = GenerationReport::for_model(&model);
        if model.is_empty() {
            warn!("No XBean-annotated types found, no artifacts generated");
            return Ok(report);
        }

        let classifier = PropertyClassifier::new(&catalog, &catalog, &editors);
        let ctx = RenderContext::new(&model, classifier, &xsd_types);
        let namespaces: Vec<&str> = model.namespaces().map(|(namespace, _)| namespace).collect();
        let xsd_paths = self.xsd_paths(&namespaces);

        for ((namespace, elements), xsd_path) in model.namespaces().zip(xsd_paths) {
            debug!(
                "Processing namespace {:?} with {} elements",
                namespace,
                elements.len()
            );

            if namespace::is_empty(namespace) {
                debug!("Empty namespace, skipping discovery file");
            } else {
                let content = generate_properties_string(namespace, elements);
                let path = self.discovery_path(namespace);
                report.add_file(write_artifact(path, &content, ArtifactKind::Discovery)?);
            }

            let html_path = html_path_for(&xsd_path);

            let html = generate_html_string(namespace, elements, &ctx);
            report.add_file(write_artifact(html_path, &html, ArtifactKind::Html)?);

            let xsd = generate_xsd_string(namespace, elements, &ctx);
            report.add_file(write_artifact(xsd_path, &xsd, ArtifactKind::Xsd)?);
        }

        info!(
            "Generation complete. Generated {} files ({} bytes)",
            report.files.len(),
            report.total_bytes()
        );
        Ok(report)
    }

    /// Location of the discovery file for a non-empty namespace.
    pub fn discovery_path(&self, namespace: &str) -> PathBuf {
        self.config
            .meta_inf_dir
            .join(namespace::create_discovery_path_name(namespace))
    }

    /// XSD location for each of `namespaces`, in the same order.
    ///
    /// A single namespace uses the configured destination. Several get
    /// `<stem>-<slug>.<ext>` beside it; namespaces whose slugs coincide are
    /// told apart by their index, so no two namespaces share a file.
    pub fn xsd_paths(&self, namespaces: &[&str]) -> Vec<PathBuf> {
        if namespaces.len() <= 1 {
            return vec![self.config.destination.clone(); namespaces.len()];
        }

        let slugs: Vec<String> = namespaces.iter().map(|ns| namespace_slug(ns)).collect();
        let mut occurrences: HashMap<&str, usize> = HashMap::new();
        for slug in &slugs {
            *occurrences.entry(slug.as_str()).or_default() += 1;
        }

        let mut used = HashSet::new();
        slugs
            .iter()
            .enumerate()
            .map(|(index, slug)| {
                let mut unique = if occurrences[slug.as_str()] > 1 {
                    debug!("Namespace slug {:?} is shared, adding index {}", slug, index);
                    format!("{}_{}", slug, index)
                } else {
                    slug.clone()
                };
                while !used.insert(unique.clone()) {
                    unique.push('_');
                }
                self.destination_with_slug(&unique)
            })
            .collect()
    }

    fn destination_with_slug(&self, slug: &str) -> PathBuf {
        let destination = &self.config.destination;
        let stem = destination
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let file_name = match destination.extension() {
            Some(ext) => format!("{}-{}.{}", stem, slug, ext.to_string_lossy()),
            None => format!("{}-{}", stem, slug),
        };
        destination.with_file_name(file_name)
    }
}

/// The namespace with every non-alphanumeric character replaced by `_`.
pub fn namespace_slug(namespace: &str) -> String {
    namespace
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

fn html_path_for(xsd_path: &Path) -> PathBuf {
    let mut path = xsd_path.as_os_str().to_owned();
    path.push(".html");
    PathBuf::from(path)
}

fn write_artifact(path: PathBuf, content: &str, kind: ArtifactKind) -> Result<GeneratedFile> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| XbeanError::output(parent, e))?;
    }
    fs::write(&path, content).map_err(|e| XbeanError::output(&path, e))?;
    info!("{} written to {:?}", kind, path);

    Ok(GeneratedFile {
        bytes_written: content.len(),
        path,
        artifact_kind: kind,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generator(destination: &str) -> SchemaGenerator {
        SchemaGenerator::new(
            GeneratorConfig::builder()
                .descriptors("descriptors.json")
                .destination(destination)
                .meta_inf_dir("/out/classes")
                .build(),
        )
    }

    #[test]
    fn test_builder_defaults() {
        let config = GeneratorConfig::builder()
            .descriptors("d")
            .destination("s.xsd")
            .build();
        assert_eq!(config.meta_inf_dir, PathBuf::from("target/classes/"));
        assert_eq!(config.default_namespace, "");
        assert!(config.editor_types.is_empty());
    }

    #[test]
    fn test_single_namespace_uses_destination() {
        let generator = generator("/out/schema.xsd");
        let paths = generator.xsd_paths(&["urn:test"]);
        assert_eq!(paths, vec![PathBuf::from("/out/schema.xsd")]);
        assert_eq!(html_path_for(&paths[0]), PathBuf::from("/out/schema.xsd.html"));
    }

    #[test]
    fn test_multiple_namespaces_get_slugged_paths() {
        let generator = generator("/out/schema.xsd");
        assert_eq!(
            generator.xsd_paths(&["http://xbean.org/a", "urn:b"]),
            vec![
                PathBuf::from("/out/schema-http___xbean_org_a.xsd"),
                PathBuf::from("/out/schema-urn_b.xsd"),
            ]
        );
    }

    #[test]
    fn test_colliding_slugs_get_distinct_paths() {
        let generator = generator("/out/schema.xsd");
        assert_eq!(
            generator.xsd_paths(&["urn:a", "urn_a", "urn_a_0", "urn:b"]),
            vec![
                PathBuf::from("/out/schema-urn_a_0.xsd"),
                PathBuf::from("/out/schema-urn_a_1.xsd"),
                PathBuf::from("/out/schema-urn_a_0_.xsd"),
                PathBuf::from("/out/schema-urn_b.xsd"),
            ]
        );
    }

    #[test]
    fn test_slug_without_extension() {
        let generator = generator("/out/schema");
        assert_eq!(
            generator.xsd_paths(&["urn:a", "urn:b"]),
            vec![PathBuf::from("/out/schema-urn_a"), PathBuf::from("/out/schema-urn_b")]
        );
    }

    #[test]
    fn test_discovery_path() {
        let generator = generator("/out/schema.xsd");
        assert_eq!(
            generator.discovery_path("http://xbean.org/schemas/test"),
            PathBuf::from("/out/classes/META-INF/services/org/apache/xbean/spring/http/xbean.org/schemas/test")
        );
    }

    #[test]
    fn test_artifact_kind_display() {
        assert_eq!(ArtifactKind::Discovery.to_string(), "discovery");
        assert_eq!(ArtifactKind::Html.to_string(), "html");
        assert_eq!(ArtifactKind::Xsd.to_string(), "xsd");
    }

    #[test]
    fn test_config_from_toml_sections() {
        let toml_str = r#"
[general]
default_namespace = "urn:test"

[schema]
descriptors = "/in"
destination = "/out/s.xsd"

[editors]
types = ["com.example.Money"]
"#;
        let config: GeneratorConfig = XbeanConfig::from_toml_str(toml_str, Path::new(""))
            .unwrap()
            .into();
        assert_eq!(config.descriptors, PathBuf::from("/in"));
        assert_eq!(config.default_namespace, "urn:test");
        assert_eq!(config.editor_types, vec!["com.example.Money".to_string()]);
    }
}
