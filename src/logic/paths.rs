use log::debug;

use crate::{
    error::{DocError, DocResult},
    logic::{arguments::project_arguments, defaults::resolve_response_code},
    models::{
        document::{Operation, Paths, ResponseEntry},
        metadata::{ControllerMetadata, RouteDefinition},
        OrderedMap,
    },
    registry::MetadataSource,
};

/// What happens when two routes resolve to the same path and method.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConflictPolicy {
    /// The route processed last replaces the earlier entry.
    #[default]
    Overwrite,
    /// Fail the build with `DocError::DuplicateOperation`.
    Reject,
}

/// Builds the operation documenting a single route of a controller.
pub fn route_operation(controller: &ControllerMetadata, route: &RouteDefinition) -> Operation {
    let description = controller
        .find_doc(&route.method_name)
        .map(|doc| doc.model.description.clone())
        .filter(|description| !description.is_empty())
        .unwrap_or_else(|| route.method_name.clone());

    let explicit = controller.default_response_codes.get(&route.method_name).copied();
    let code = resolve_response_code(&route.request_method, explicit);

    let arg_types = controller
        .arg_types
        .get(&route.method_name)
        .map(Vec::as_slice)
        .unwrap_or_default();
    let parameters = project_arguments(&controller.args, &route.method_name, arg_types);

    let mut responses = OrderedMap::new();
    responses.insert(code.to_string(), ResponseEntry::default());

    Operation {
        description,
        responses,
        parameters,
    }
}

/// Merges every prefixed controller's routes into one path table.
///
/// Controllers and routes are visited in declaration order. Controllers with
/// no metadata or no prefix are skipped.
pub fn build_paths<S: MetadataSource + ?Sized>(
    source: &S,
    policy: ConflictPolicy,
) -> DocResult<Paths> {
    let mut paths = Paths::new();

    for name in source.controllers() {
        let Some(controller) = source.metadata(name) else {
            debug!("skipping '{name}': no controller metadata");
            continue;
        };
        let Some(prefix) = controller.prefix.as_deref() else {
            debug!("skipping '{name}': no prefix");
            continue;
        };

        for route in &controller.routes {
            let full_path = format!("{prefix}{}", route.path);
            let method = route.request_method.as_str().to_string();
            let operation = route_operation(controller, route);

            let methods = paths.entry(full_path.clone()).or_default();
            if methods.contains_key(&method) {
                match policy {
                    ConflictPolicy::Reject => {
                        return Err(DocError::DuplicateOperation {
                            path: full_path,
                            method,
                        })
                    }
                    ConflictPolicy::Overwrite => {
                        debug!("'{name}' overwrites {method} {full_path}");
                    }
                }
            }
            methods.insert(method, operation);
        }
    }

    Ok(paths)
}
