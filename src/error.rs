//! Error type shared by the registry, the engine and the HTTP surface.

use derive_more::{Display, From};

#[derive(Debug, Display, From)]
pub enum DocError {
    #[display("IO Error: {_0}")]
    Io(std::io::Error),

    #[display("Invalid JSON manifest: {_0}")]
    Json(serde_json::Error),

    #[display("Invalid YAML manifest: {_0}")]
    Yaml(serde_yaml::Error),

    #[from(ignore)]
    #[display("Unsupported manifest format: {_0} (expected .json, .yaml or .yml)")]
    UnsupportedManifest(String),

    #[from(ignore)]
    #[display("Controller '{_0}' is registered more than once")]
    DuplicateController(String),

    #[from(ignore)]
    #[display("Controller '{controller}' declares route '{method_name}' more than once")]
    DuplicateRoute {
        controller: String,
        method_name: String,
    },

    /// Only raised under `ConflictPolicy::Reject`.
    #[from(ignore)]
    #[display("Operation {method} {path} is declared by more than one controller")]
    DuplicateOperation { path: String, method: String },
}

impl std::error::Error for DocError {}

pub type DocResult<T> = Result<T, DocError>;
