use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::models::OrderedMap;

/// OpenAPI version advertised by every generated document.
pub const OAS_VERSION: &str = "3.0.0";

/// Application version used when none is configured.
pub const APP_VERSION: &str = "1.0.0";

pub const DEFAULT_TITLE: &str = "Application";
pub const DEFAULT_DESCRIPTION: &str = "Generated API specification";

/// Full path → HTTP method → operation.
pub type Paths = OrderedMap<OrderedMap<Operation>>;

/// The assembled specification document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecDocument {
    pub openapi: String,
    pub info: Info,
    pub paths: Paths,
    pub components: Components,
}

impl SpecDocument {
    /// Indented JSON, fields in declaration order.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }

    pub fn operation(&self, path: &str, method: &str) -> Option<&Operation> {
        self.paths.get(path).and_then(|methods| methods.get(method))
    }

    pub fn operation_count(&self) -> usize {
        self.paths.values().map(|methods| methods.len()).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Info {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Default for Info {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.into(),
            version: APP_VERSION.into(),
            description: DEFAULT_DESCRIPTION.into(),
        }
    }
}

/// The documented unit for one path + method pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    pub description: String,
    pub responses: OrderedMap<ResponseEntry>,
    pub parameters: Vec<Parameter>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponseEntry {
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "in")]
    pub location: String,
    pub schema: ParameterSchema,
}

/// Primitive schema of a parameter. An unknown type serialises as `{}`.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParameterSchema {
    #[serde(rename = "type")]
    pub schema_type: Option<String>,
}

/// Extension sections, always emitted empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Components {
    pub schemas: OrderedMap<serde_json::Value>,
    pub responses: OrderedMap<serde_json::Value>,
    pub parameters: OrderedMap<serde_json::Value>,
    pub examples: OrderedMap<serde_json::Value>,
    pub request_bodies: OrderedMap<serde_json::Value>,
    pub headers: OrderedMap<serde_json::Value>,
    pub security_schemes: OrderedMap<serde_json::Value>,
    pub links: OrderedMap<serde_json::Value>,
    pub callbacks: OrderedMap<serde_json::Value>,
}

impl Components {
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
            && self.responses.is_empty()
            && self.parameters.is_empty()
            && self.examples.is_empty()
            && self.request_bodies.is_empty()
            && self.headers.is_empty()
            && self.security_schemes.is_empty()
            && self.links.is_empty()
            && self.callbacks.is_empty()
    }
}
