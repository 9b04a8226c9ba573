//! Assembles OpenAPI-style specification documents from controller metadata.
//!
//! Controllers are registered as plain data in a [`ControllerRegistry`]; a
//! [`DocumentBuilder`] walks them and produces a [`SpecDocument`].
//!
//! ```
//! use actix_web::http::Method;
//! use routedoc::{ArgKind, ControllerMetadata, ControllerRegistry, DocumentBuilder};
//!
//! let mut registry = ControllerRegistry::new();
//! registry
//!     .register(
//!         "UsersController",
//!         ControllerMetadata::new("/users")
//!             .route("get", "/:id", Method::GET)
//!             .doc("get", "Fetch one user")
//!             .arg("get", ArgKind::Param, "id")
//!             .arg_types("get", ["string"]),
//!     )
//!     .unwrap();
//!
//! let mut builder = DocumentBuilder::new(registry);
//! builder.set_title("Users API");
//! let doc = builder.build().unwrap();
//! assert_eq!(doc.paths["/users/:id"]["GET"].parameters[0].location, "path");
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod logic;
pub mod models;
pub mod registry;

pub use config::DocSettings;
pub use error::{DocError, DocResult};
pub use logic::{assembler::DocumentBuilder, paths::ConflictPolicy};
pub use models::{
    document::{Components, Info, Operation, Parameter, SpecDocument, APP_VERSION, OAS_VERSION},
    metadata::{ArgKind, ControllerMetadata, DocDefinition, RouteArgument, RouteDefinition},
};
pub use registry::{ControllerRegistry, MetadataSource};
