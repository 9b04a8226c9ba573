use crate::models::{
    document::{Parameter, ParameterSchema},
    metadata::RouteArgument,
};

/// Projects a route's argument bindings into published parameters.
///
/// Arguments bound to the body, the framework context or the raw
/// request/response are dropped. Retained arguments are zipped, in declaration
/// order, against `arg_types`; a missing label leaves the schema untyped. A
/// type declared on the argument itself takes precedence over its positional
/// label.
pub fn project_arguments(
    args: &[RouteArgument],
    route: &str,
    arg_types: &[String],
) -> Vec<Parameter> {
    let mut positional = arg_types.iter();
    args.iter()
        .filter(|arg| arg.arg_for == route)
        .filter_map(|arg| arg.kind.location().map(|location| (arg, location)))
        .map(|(arg, location)| {
            let label = positional.next();
            Parameter {
                name: arg.key.clone(),
                location,
                schema: ParameterSchema {
                    schema_type: arg.schema_type.clone().or_else(|| label.cloned()),
                },
            }
        })
        .collect()
}
