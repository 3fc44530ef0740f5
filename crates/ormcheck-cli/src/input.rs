//! Analysis input files.
//!
//! A front end that understands the source language writes what it found
//! into JSON files of this shape:
//!
//! ```json
//! {
//!   "classes": [
//!     { "name": "App\\Entity\\Order", "file": "src/Entity/Order.php",
//!       "mapping": { "name": "App\\Entity\\Order", "associationMappings": { } },
//!       "properties": [ { "name": "customer", "type": "App\\Entity\\Customer", "line": 21 } ] }
//!   ],
//!   "hierarchy": [
//!     { "name": "App\\Entity\\Order", "parents": ["App\\Entity\\Base"], "final": false }
//!   ]
//! }
//! ```

use anyhow::{Context, Result, bail};
use ormcheck_metadata::ClassMetadata;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisInput {
    #[serde(default)]
    pub classes: Vec<InputClass>,
    #[serde(default)]
    pub hierarchy: Vec<HierarchyEntry>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InputClass {
    pub name: String,
    #[serde(default)]
    pub file: String,
    /// Static mapping data for the class, used when no bootstrap is set.
    #[serde(default)]
    pub mapping: Option<ClassMetadata>,
    #[serde(default)]
    pub properties: Vec<InputProperty>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InputProperty {
    pub name: String,
    /// Declared type expression, absent when unknown.
    #[serde(default, rename = "type")]
    pub declared_type: Option<String>,
    #[serde(default)]
    pub line: u32,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HierarchyEntry {
    pub name: String,
    #[serde(default)]
    pub parents: Vec<String>,
    #[serde(default)]
    pub interface: bool,
    #[serde(default, rename = "final")]
    pub is_final: bool,
}

impl AnalysisInput {
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("failed to parse {}", path.display()))
    }

    /// Append another input, keeping order.
    pub fn extend(&mut self, other: AnalysisInput) {
        self.classes.extend(other.classes);
        self.hierarchy.extend(other.hierarchy);
    }
}

/// Expand files and directories into the sorted list of input files.
///
/// Directories are searched recursively for `*.json`; explicit files are
/// taken as given.
pub fn discover_inputs(paths: &[PathBuf], cwd: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for path in paths {
        let path = if path.is_absolute() {
            path.clone()
        } else {
            cwd.join(path)
        };
        if path.is_dir() {
            let mut found: Vec<PathBuf> = WalkDir::new(&path)
                .into_iter()
                .filter_map(|entry| entry.ok())
                .filter(|entry| entry.file_type().is_file())
                .map(|entry| entry.into_path())
                .filter(|file| file.extension().is_some_and(|ext| ext == "json"))
                .collect();
            found.sort();
            files.extend(found);
        } else if path.is_file() {
            files.push(path);
        } else {
            bail!("input path {} does not exist", path.display());
        }
    }
    Ok(files)
}

/// Load and concatenate every input file, in order.
pub fn load_inputs(files: &[PathBuf]) -> Result<AnalysisInput> {
    let mut merged = AnalysisInput::default();
    for file in files {
        merged.extend(AnalysisInput::load(file)?);
    }
    Ok(merged)
}

#[cfg(test)]
#[path = "../tests/input_tests.rs"]
mod tests;
