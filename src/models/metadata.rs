use std::collections::HashMap;

use actix_web::http::Method;
use serde::{Deserialize, Serialize};

use crate::models::RouteId;

/// `requestMethod` as written in manifests: the method name in any case,
/// normalised to uppercase so `"post"` and `"POST"` are the same route.
mod request_method {
    use std::borrow::Cow;

    use actix_web::http::Method;
    use serde::{de::Error, Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(method: &Method, serializer: S) -> Result<S::Ok, S::Error> {
        method.as_str().serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Method, D::Error> {
        let name = Cow::<'de, str>::deserialize(deserializer)?;
        Method::from_bytes(name.to_ascii_uppercase().as_bytes()).map_err(D::Error::custom)
    }
}

/// One HTTP-method-bound operation declared by a controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteDefinition {
    pub method_name: RouteId,
    /// Relative to the controller prefix, concatenated verbatim.
    pub path: String,
    #[serde(with = "request_method")]
    pub request_method: Method,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocModel {
    /// Empty when the doc entry carries no description; the route then
    /// falls back to its `methodName`.
    #[serde(default)]
    pub description: String,
}

/// Documentation attached to a route by its `methodName`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocDefinition {
    pub doc_for: RouteId,
    #[serde(default)]
    pub model: DocModel,
}

/// How a route handler argument is bound.
///
/// Kinds outside the known set are kept as `Other` with their label as
/// written, and are published under that label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ArgKind {
    Param,
    Query,
    Body,
    Context,
    Request,
    Response,
    Header,
    Cookie,
    Other(String),
}

impl ArgKind {
    pub fn label(&self) -> &str {
        match self {
            ArgKind::Param => "PARAM",
            ArgKind::Query => "QUERY",
            ArgKind::Body => "BODY",
            ArgKind::Context => "CONTEXT",
            ArgKind::Request => "REQUEST",
            ArgKind::Response => "RESPONSE",
            ArgKind::Header => "HEADER",
            ArgKind::Cookie => "COOKIE",
            ArgKind::Other(label) => label,
        }
    }

    /// The parameter location published for this binding, or `None` for
    /// bindings that are not surface-level parameters (body, framework
    /// context, raw request/response handles).
    pub fn location(&self) -> Option<String> {
        match self {
            ArgKind::Param => Some("path".to_string()),
            ArgKind::Body | ArgKind::Context | ArgKind::Request | ArgKind::Response => None,
            other => Some(other.label().to_ascii_lowercase()),
        }
    }
}

impl From<String> for ArgKind {
    fn from(label: String) -> Self {
        match label.to_ascii_uppercase().as_str() {
            "PARAM" => ArgKind::Param,
            "QUERY" => ArgKind::Query,
            "BODY" => ArgKind::Body,
            "CONTEXT" => ArgKind::Context,
            "REQUEST" => ArgKind::Request,
            "RESPONSE" => ArgKind::Response,
            "HEADER" => ArgKind::Header,
            "COOKIE" => ArgKind::Cookie,
            _ => ArgKind::Other(label),
        }
    }
}

impl From<ArgKind> for String {
    fn from(kind: ArgKind) -> Self {
        match kind {
            ArgKind::Other(label) => label,
            known => known.label().to_string(),
        }
    }
}

/// Binding of one handler argument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteArgument {
    pub arg_for: RouteId,
    #[serde(rename = "type")]
    pub kind: ArgKind,
    pub key: String,
    /// Primitive type label attached where the argument is declared.
    /// Takes precedence over the positional `argTypes` entry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<String>,
}

/// Everything a controller registers about itself.
///
/// `routes` is required when deserialised; every other table defaults to empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ControllerMetadata {
    /// `None` marks a class that is not a controller; it is skipped.
    #[serde(default)]
    pub prefix: Option<String>,
    pub routes: Vec<RouteDefinition>,
    #[serde(default)]
    pub docs: Vec<DocDefinition>,
    #[serde(default)]
    pub default_response_codes: HashMap<RouteId, u16>,
    #[serde(default)]
    pub args: Vec<RouteArgument>,
    /// Primitive type labels per route, aligned with that route's published arguments.
    #[serde(default)]
    pub arg_types: HashMap<RouteId, Vec<String>>,
}

impl ControllerMetadata {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: Some(prefix.into()),
            ..Self::default()
        }
    }

    /// Metadata for a class that carries route tables but no controller prefix.
    pub fn without_prefix() -> Self {
        Self::default()
    }

    pub fn route(
        mut self,
        method_name: impl Into<RouteId>,
        path: impl Into<String>,
        method: Method,
    ) -> Self {
        self.routes.push(RouteDefinition {
            method_name: method_name.into(),
            path: path.into(),
            request_method: method,
        });
        self
    }

    pub fn doc(mut self, method_name: impl Into<RouteId>, description: impl Into<String>) -> Self {
        self.docs.push(DocDefinition {
            doc_for: method_name.into(),
            model: DocModel {
                description: description.into(),
            },
        });
        self
    }

    pub fn response_code(mut self, method_name: impl Into<RouteId>, code: u16) -> Self {
        self.default_response_codes.insert(method_name.into(), code);
        self
    }

    pub fn arg(
        mut self,
        method_name: impl Into<RouteId>,
        kind: ArgKind,
        key: impl Into<String>,
    ) -> Self {
        self.args.push(RouteArgument {
            arg_for: method_name.into(),
            kind,
            key: key.into(),
            schema_type: None,
        });
        self
    }

    /// Declares an argument together with its primitive type label.
    pub fn typed_arg(
        mut self,
        method_name: impl Into<RouteId>,
        kind: ArgKind,
        key: impl Into<String>,
        schema_type: impl Into<String>,
    ) -> Self {
        self.args.push(RouteArgument {
            arg_for: method_name.into(),
            kind,
            key: key.into(),
            schema_type: Some(schema_type.into()),
        });
        self
    }

    pub fn arg_types<I, T>(mut self, method_name: impl Into<RouteId>, types: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.arg_types
            .insert(method_name.into(), types.into_iter().map(Into::into).collect());
        self
    }

    pub fn find_doc(&self, method_name: &str) -> Option<&DocDefinition> {
        self.docs.iter().find(|d| d.doc_for == method_name)
    }

    /// First `methodName` declared more than once, if any.
    pub fn duplicate_route(&self) -> Option<&str> {
        self.routes.iter().enumerate().find_map(|(i, route)| {
            self.routes[..i]
                .iter()
                .any(|earlier| earlier.method_name == route.method_name)
                .then_some(route.method_name.as_str())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arg_kind_locations() {
        assert_eq!(ArgKind::Param.location().as_deref(), Some("path"));
        assert_eq!(ArgKind::Query.location().as_deref(), Some("query"));
        assert_eq!(ArgKind::Header.location().as_deref(), Some("header"));
        for hidden in [ArgKind::Body, ArgKind::Context, ArgKind::Request, ArgKind::Response] {
            assert_eq!(hidden.location(), None, "{hidden:?} must not be published");
        }
    }

    #[test]
    fn test_route_deserialises_method_name() {
        let route: RouteDefinition = serde_json::from_value(serde_json::json!({
            "methodName": "create",
            "path": "/",
            "requestMethod": "post"
        }))
        .unwrap();
        assert_eq!(route.request_method, Method::POST);
        assert_eq!(serde_json::to_value(&route).unwrap()["requestMethod"], "POST");
    }

    #[test]
    fn test_controller_requires_routes() {
        let result: Result<ControllerMetadata, _> =
            serde_json::from_value(serde_json::json!({ "prefix": "/users" }));
        assert!(result.is_err(), "A controller without `routes` must be rejected");
    }

    #[test]
    fn test_controller_optional_tables_default_to_empty() {
        let meta: ControllerMetadata = serde_json::from_value(serde_json::json!({ "routes": [] }))
            .unwrap();
        assert_eq!(meta.prefix, None);
        assert!(meta.docs.is_empty());
        assert!(meta.args.is_empty());
        assert!(meta.default_response_codes.is_empty());
        assert!(meta.arg_types.is_empty());
    }

    #[test]
    fn test_argument_type_field_is_named_type() {
        let arg: RouteArgument = serde_json::from_value(serde_json::json!({
            "argFor": "find",
            "type": "QUERY",
            "key": "limit"
        }))
        .unwrap();
        assert_eq!(arg.kind, ArgKind::Query);
        assert_eq!(arg.schema_type, None);
    }

    #[test]
    fn test_unlisted_kind_keeps_its_label() {
        let arg: RouteArgument = serde_json::from_value(serde_json::json!({
            "argFor": "find",
            "type": "NEXT",
            "key": "next"
        }))
        .unwrap();
        assert_eq!(arg.kind, ArgKind::Other("NEXT".into()));
        assert_eq!(arg.kind.location().as_deref(), Some("next"));
        assert_eq!(serde_json::to_value(&arg).unwrap()["type"], "NEXT");
    }

    #[test]
    fn test_known_kinds_parse_in_any_case() {
        assert_eq!(ArgKind::from("query".to_string()), ArgKind::Query);
        assert_eq!(ArgKind::from("Body".to_string()), ArgKind::Body);
        assert_eq!(String::from(ArgKind::Header), "HEADER");
    }

    #[test]
    fn test_duplicate_route_detection() {
        let meta = ControllerMetadata::new("/users")
            .route("find", "/", Method::GET)
            .route("create", "/", Method::POST)
            .route("find", "/all", Method::GET);
        assert_eq!(meta.duplicate_route(), Some("find"));

        let unique = ControllerMetadata::new("/users").route("find", "/", Method::GET);
        assert_eq!(unique.duplicate_route(), None);
    }

    #[test]
    fn test_find_doc_joins_on_method_name() {
        let meta = ControllerMetadata::new("/users")
            .route("find", "/", Method::GET)
            .doc("other", "Dangling")
            .doc("find", "List users");
        assert_eq!(meta.find_doc("find").map(|d| d.model.description.as_str()), Some("List users"));
        assert!(meta.find_doc("missing").is_none());
    }
}
