use actix_web::{get, web, HttpResponse, Responder};
use log::error;

use crate::{logic::assembler::DocumentBuilder, registry::ControllerRegistry};

/// Builder shared by every worker; each request assembles a fresh document.
pub type SharedBuilder = web::Data<DocumentBuilder<ControllerRegistry>>;

fn build_error(err: impl std::fmt::Display) -> HttpResponse {
    error!("document assembly failed: {err}");
    HttpResponse::Conflict().json(serde_json::json!({ "error": err.to_string() }))
}

/// GET /api-docs/openapi.json
#[get("/openapi.json")]
pub async fn openapi_json(builder: SharedBuilder) -> impl Responder {
    match builder.build() {
        Ok(document) => HttpResponse::Ok().json(document),
        Err(e) => build_error(e),
    }
}

/// GET /api-docs/openapi.yaml
#[get("/openapi.yaml")]
pub async fn openapi_yaml(builder: SharedBuilder) -> impl Responder {
    let yaml = match builder.build() {
        Ok(document) => document.to_yaml(),
        Err(e) => return build_error(e),
    };
    match yaml {
        Ok(body) => HttpResponse::Ok().content_type("application/yaml").body(body),
        Err(e) => {
            error!("YAML serialisation failed: {e}");
            HttpResponse::InternalServerError().json(serde_json::json!({ "error": e.to_string() }))
        }
    }
}
