use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer};
use std::path::{Path, PathBuf};

use crate::args::CliArgs;
use ormcheck_checker::RelationCheckOptions;
use ormcheck_metadata::ResolverConfig;

pub const CONFIG_FILE_NAME: &str = "ormcheck.json";

/// Boolean options accept both `true` and `"true"`.
fn deserialize_bool_or_string<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum BoolOrString {
        Bool(bool),
        String(String),
    }

    match Option::<BoolOrString>::deserialize(deserializer)? {
        None => Ok(None),
        Some(BoolOrString::Bool(b)) => Ok(Some(b)),
        Some(BoolOrString::String(s)) => match s.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(Some(true)),
            "false" | "0" | "no" | "off" => Ok(Some(false)),
            _ => Err(Error::custom(format!(
                "invalid boolean value: '{s}'. Expected true, false, 'true', or 'false'"
            ))),
        },
    }
}

/// Contents of `ormcheck.json`.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default, deserialize_with = "deserialize_bool_or_string")]
    pub allow_nullable_property_for_required_field: Option<bool>,
    #[serde(default)]
    pub object_manager_loader: Option<PathBuf>,
    #[serde(default)]
    pub bootstrap_interpreter: Option<String>,
    #[serde(default)]
    pub collection_interface: Option<String>,
}

impl ConfigFile {
    /// Parse a config file; relative paths resolve against its directory.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let mut config: ConfigFile = serde_json::from_str(&text)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        if let Some(base) = path.parent() {
            if let Some(loader) = config.object_manager_loader.take() {
                config.object_manager_loader = Some(resolve_relative(base, loader));
            }
        }
        Ok(config)
    }
}

fn resolve_relative(base: &Path, path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        base.join(path)
    }
}

/// Effective settings for a run: file values overridden by flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub options: RelationCheckOptions,
    pub resolver: ResolverConfig,
}

impl Settings {
    pub fn resolve(args: &CliArgs, cwd: &Path) -> Result<Self> {
        let config_path = match &args.config {
            Some(path) => Some(resolve_relative(cwd, path.clone())),
            None => Some(cwd.join(CONFIG_FILE_NAME)).filter(|path| path.is_file()),
        };
        let file = match &config_path {
            Some(path) => ConfigFile::load(path)?,
            None => ConfigFile::default(),
        };
        if let Some(path) = &config_path {
            tracing::debug!(config = %path.display(), "loaded configuration");
        }
        Ok(Self::merge(file, args, cwd))
    }

    pub fn merge(file: ConfigFile, args: &CliArgs, cwd: &Path) -> Self {
        let allow_nullable = args
            .allow_nullable_property_for_required_field
            .or(file.allow_nullable_property_for_required_field)
            .unwrap_or(false);
        let mut options = RelationCheckOptions::default()
            .with_allow_nullable_property_for_required_field(allow_nullable);
        if let Some(interface) = args.collection_interface.clone().or(file.collection_interface) {
            options = options.with_collection_interface(interface);
        }

        let resolver = ResolverConfig {
            object_manager_loader: args
                .object_manager_loader
                .clone()
                .map(|path| resolve_relative(cwd, path))
                .or(file.object_manager_loader),
            bootstrap_interpreter: args
                .bootstrap_interpreter
                .clone()
                .or(file.bootstrap_interpreter),
        };

        Self { options, resolver }
    }
}

#[cfg(test)]
#[path = "../tests/config_tests.rs"]
mod tests;
