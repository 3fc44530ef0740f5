//! Live mode: metadata produced by running the user's bootstrap.
//!
//! The bootstrap is an executable script (or a script plus interpreter)
//! that prints an object-manager snapshot as JSON on stdout:
//!
//! ```json
//! { "entities": { "App\\Entity\\User": { "name": "App\\Entity\\User", ... } } }
//! ```
//!
//! It runs at most once per run. Any failure is logged and leaves the run
//! without metadata.

use crate::mapping::ClassMetadata;
use crate::resolver::{MetadataCache, MetadataResolver};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::{Arc, OnceLock, RwLock};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("object manager loader {} does not exist", .0.display())]
    MissingScript(PathBuf),
    #[error("failed to run object manager loader {}: {source}", .script.display())]
    Spawn {
        script: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("object manager loader {} exited with {status}: {stderr}", .script.display())]
    Failed {
        script: PathBuf,
        status: String,
        stderr: String,
    },
    #[error("object manager loader {} printed invalid metadata: {source}", .script.display())]
    InvalidOutput {
        script: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Every entity the object manager knows about.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectManagerSnapshot {
    #[serde(default)]
    pub entities: IndexMap<String, ClassMetadata>,
}

impl ObjectManagerSnapshot {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Case-insensitive lookup, ignoring a leading `\`.
    pub fn get(&self, class: &str) -> Option<&ClassMetadata> {
        let class = class.trim_start_matches('\\');
        self.entities.get(class).or_else(|| {
            self.entities
                .iter()
                .find(|(name, _)| name.trim_start_matches('\\').eq_ignore_ascii_case(class))
                .map(|(_, metadata)| metadata)
        })
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

/// Runs the bootstrap and parses its output.
#[derive(Debug, Clone)]
pub struct BootstrapLoader {
    script: PathBuf,
    interpreter: Option<String>,
}

impl BootstrapLoader {
    pub fn new(script: impl Into<PathBuf>) -> Self {
        Self {
            script: script.into(),
            interpreter: None,
        }
    }

    /// Run the script through `interpreter` instead of executing it directly.
    pub fn with_interpreter(mut self, interpreter: impl Into<String>) -> Self {
        self.interpreter = Some(interpreter.into());
        self
    }

    pub fn script(&self) -> &Path {
        &self.script
    }

    pub fn load(&self) -> Result<ObjectManagerSnapshot, LoaderError> {
        let script = std::fs::canonicalize(&self.script)
            .map_err(|_| LoaderError::MissingScript(self.script.clone()))?;

        let mut command = match &self.interpreter {
            Some(interpreter) => {
                let mut command = Command::new(interpreter);
                command.arg(&script);
                command
            }
            None => Command::new(&script),
        };
        if let Some(dir) = script.parent() {
            command.current_dir(dir);
        }

        let output = command.output().map_err(|source| LoaderError::Spawn {
            script: self.script.clone(),
            source,
        })?;
        if !output.status.success() {
            return Err(LoaderError::Failed {
                script: self.script.clone(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        ObjectManagerSnapshot::from_json(&stdout).map_err(|source| LoaderError::InvalidOutput {
            script: self.script.clone(),
            source,
        })
    }
}

#[derive(Debug, Default)]
struct RunState {
    snapshot: OnceLock<Option<Arc<ObjectManagerSnapshot>>>,
    cache: MetadataCache,
}

/// Resolver backed by a bootstrap-produced object manager.
#[derive(Debug)]
pub struct LiveResolver {
    loader: BootstrapLoader,
    run: RwLock<Arc<RunState>>,
}

impl LiveResolver {
    pub fn new(loader: BootstrapLoader) -> Self {
        Self {
            loader,
            run: RwLock::new(Arc::new(RunState::default())),
        }
    }

    fn current_run(&self) -> Arc<RunState> {
        self.run
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// The snapshot for this run, loading it on first use.
    pub fn snapshot(&self) -> Option<Arc<ObjectManagerSnapshot>> {
        self.current_run().snapshot.get_or_init(|| self.load_snapshot()).clone()
    }

    fn load_snapshot(&self) -> Option<Arc<ObjectManagerSnapshot>> {
        let _span = tracing::debug_span!(
            "load_object_manager",
            script = %self.loader.script().display()
        )
        .entered();
        match self.loader.load() {
            Ok(snapshot) => {
                tracing::debug!(entities = snapshot.len(), "object manager loaded");
                Some(Arc::new(snapshot))
            }
            Err(err) => {
                tracing::warn!(error = %err, "object manager unavailable, skipping metadata checks");
                None
            }
        }
    }
}

impl MetadataResolver for LiveResolver {
    fn resolve(&self, class: &str) -> Option<Arc<ClassMetadata>> {
        let run = self.current_run();
        run.cache.get_or_resolve(class, || {
            let snapshot = run.snapshot.get_or_init(|| self.load_snapshot()).clone()?;
            let metadata = snapshot.get(class)?;
            if !metadata.is_entity() {
                tracing::debug!(class, "not an entity");
                return None;
            }
            Some(Arc::new(metadata.clone()))
        })
    }

    fn clear(&self) {
        let mut run = self.run.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        *run = Arc::new(RunState::default());
    }
}

#[cfg(test)]
#[path = "../tests/live_tests.rs"]
mod tests;
