use actix_web::web;

use crate::api::handlers::{openapi_json, openapi_yaml};

/// Mounts the document endpoints. The caller registers a `SharedBuilder` as app data.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api-docs")
            .service(openapi_json)
            .service(openapi_yaml),
    );
}
