//! Explicit controller registration.
//!
//! Hosting applications register each controller's route, argument and doc
//! tables here at composition time. The engine only reads them back through
//! [`MetadataSource`].

use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    error::{DocError, DocResult},
    models::metadata::ControllerMetadata,
};

/// Read access to registered controllers.
pub trait MetadataSource {
    /// Controller identifiers in registration order.
    fn controllers(&self) -> Vec<&str>;

    /// Metadata for a controller, or `None` when the class carries none.
    fn metadata(&self, controller: &str) -> Option<&ControllerMetadata>;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct RegisteredController {
    name: String,
    #[serde(default)]
    metadata: Option<ControllerMetadata>,
}

/// On-disk form of a registry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    controllers: Vec<RegisteredController>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ControllerRegistry {
    entries: Vec<RegisteredController>,
}

impl ControllerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a controller. Names must be unique and every `methodName`
    /// must be unique within the controller.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        metadata: ControllerMetadata,
    ) -> DocResult<&mut Self> {
        self.insert(name.into(), Some(metadata))
    }

    /// Registers a class that exposes no controller metadata at all.
    pub fn register_unannotated(&mut self, name: impl Into<String>) -> DocResult<&mut Self> {
        self.insert(name.into(), None)
    }

    fn insert(
        &mut self,
        name: String,
        metadata: Option<ControllerMetadata>,
    ) -> DocResult<&mut Self> {
        if self.entries.iter().any(|e| e.name == name) {
            return Err(DocError::DuplicateController(name));
        }
        if let Some(method_name) = metadata.as_ref().and_then(|m| m.duplicate_route()) {
            return Err(DocError::DuplicateRoute {
                controller: name,
                method_name: method_name.to_string(),
            });
        }
        debug!("registered controller '{name}'");
        self.entries.push(RegisteredController { name, metadata });
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn from_manifest(manifest: Manifest) -> DocResult<Self> {
        let mut registry = Self::new();
        for entry in manifest.controllers {
            registry.insert(entry.name, entry.metadata)?;
        }
        Ok(registry)
    }

    pub fn from_json_str(source: &str) -> DocResult<Self> {
        Self::from_manifest(serde_json::from_str(source)?)
    }

    pub fn from_yaml_str(source: &str) -> DocResult<Self> {
        Self::from_manifest(serde_yaml::from_str(source)?)
    }

    /// Loads a manifest, choosing the parser from the file extension.
    pub fn load_manifest(path: impl AsRef<Path>) -> DocResult<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        let source = std::fs::read_to_string(path)?;
        let registry = match extension.as_str() {
            "json" => Self::from_json_str(&source)?,
            "yaml" | "yml" => Self::from_yaml_str(&source)?,
            _ => return Err(DocError::UnsupportedManifest(path.display().to_string())),
        };
        debug!("loaded {} controller(s) from {}", registry.len(), path.display());
        Ok(registry)
    }

    pub fn to_manifest(&self) -> Manifest {
        Manifest {
            controllers: self.entries.clone(),
        }
    }
}

impl MetadataSource for ControllerRegistry {
    fn controllers(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.name.as_str()).collect()
    }

    fn metadata(&self, controller: &str) -> Option<&ControllerMetadata> {
        self.entries
            .iter()
            .find(|e| e.name == controller)
            .and_then(|e| e.metadata.as_ref())
    }
}

impl<S: MetadataSource + ?Sized> MetadataSource for &S {
    fn controllers(&self) -> Vec<&str> {
        (**self).controllers()
    }

    fn metadata(&self, controller: &str) -> Option<&ControllerMetadata> {
        (**self).metadata(controller)
    }
}
