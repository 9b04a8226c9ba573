use indexmap::IndexMap;

pub mod document;
pub mod metadata;

/// Identifier of a route handler within its controller (`methodName`).
pub type RouteId = String;

/// Ordered map used wherever output order must follow insertion order.
pub type OrderedMap<V> = IndexMap<String, V>;
