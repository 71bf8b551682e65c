//! Loading of introspection provider output.

use crate::error::{Result, XbeanError};
use crate::types::TypeDescriptor;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, trace};
use walkdir::WalkDir;

/// Reads `TypeDescriptor` arrays from a JSON file or a directory of them.
#[derive(Debug, Clone)]
pub struct DescriptorScanner {
    path: PathBuf,
}

impl DescriptorScanner {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns every descriptor in provider order.
    ///
    /// A directory is walked recursively; its `*.json` files are read in
    /// ascending path order so repeated runs see the same type order.
    pub fn scan(&self) -> Result<Vec<TypeDescriptor>> {
        info!("Scanning descriptors at {:?}", self.path);

        let files = self.descriptor_files()?;
        let mut descriptors = Vec::new();
        for file in &files {
            let mut loaded = Self::load_file(file)?;
            debug!("Loaded {} descriptors from {:?}", loaded.len(), file);
            descriptors.append(&mut loaded);
        }

        info!(
            "Loaded {} descriptors from {} file(s)",
            descriptors.len(),
            files.len()
        );
        Ok(descriptors)
    }

    fn descriptor_files(&self) -> Result<Vec<PathBuf>> {
        if self.path.is_file() {
            return Ok(vec![self.path.clone()]);
        }
        if !self.path.is_dir() {
            return Err(XbeanError::invalid_descriptor(
                &self.path,
                "no such file or directory",
            ));
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(&self.path) {
            let entry = entry.map_err(|e| {
                XbeanError::invalid_descriptor(
                    e.path().unwrap_or(self.path.as_path()),
                    e.to_string(),
                )
            })?;
            let path = entry.path();
            if entry.file_type().is_file()
                && path.extension().is_some_and(|ext| ext == "json")
            {
                trace!("Found descriptor file {:?}", path);
                files.push(path.to_path_buf());
            }
        }
        files.sort();
        Ok(files)
    }

    fn load_file(path: &Path) -> Result<Vec<TypeDescriptor>> {
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| XbeanError::invalid_descriptor(path, e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const FOO: &str = r#"[
        {
            "qualified_name": "org.example.Foo",
            "superclass": "java.lang.Object",
            "annotations": [{ "name": "org.xbean.XBean", "values": { "element": "foo" } }],
            "properties": [
                { "name": "Bar", "type_name": "int", "setter": { "name": "setBar" } }
            ]
        }
    ]"#;

    const IFACE: &str = r#"[{ "qualified_name": "org.example.Service", "kind": "interface" }]"#;

    #[test]
    fn test_scan_single_file() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("foo.json");
        fs::write(&file, FOO).unwrap();

        let descriptors = DescriptorScanner::new(&file).scan().unwrap();
        assert_eq!(descriptors.len(), 1);
        assert_eq!(descriptors[0].qualified_name, "org.example.Foo");
        assert_eq!(descriptors[0].properties[0].type_name, "int");
        assert!(descriptors[0].properties[0].setter.is_some());
    }

    #[test]
    fn test_scan_directory_in_path_order() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested/b.json"), FOO).unwrap();
        fs::write(dir.path().join("a.json"), IFACE).unwrap();
        fs::write(dir.path().join("notes.txt"), "not json").unwrap();

        let descriptors = DescriptorScanner::new(dir.path()).scan().unwrap();
        let names: Vec<_> = descriptors.iter().map(|d| d.qualified_name.as_str()).collect();
        assert_eq!(names, vec!["org.example.Service", "org.example.Foo"]);
        assert!(descriptors[0].is_interface());
    }

    #[test]
    fn test_malformed_file_names_the_file() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("broken.json");
        fs::write(&file, "{ not an array").unwrap();

        let err = DescriptorScanner::new(dir.path()).scan().unwrap_err();
        match err {
            XbeanError::InvalidDescriptor { file: reported, .. } => assert_eq!(reported, file),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_path() {
        let dir = TempDir::new().unwrap();
        let result = DescriptorScanner::new(dir.path().join("absent")).scan();
        assert!(matches!(result, Err(XbeanError::InvalidDescriptor { .. })));
    }
}
