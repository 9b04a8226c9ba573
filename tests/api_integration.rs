use actix_web::{http::Method, test, web, App};
use routedoc::{
    api::routes::configure, ConflictPolicy, ControllerMetadata, ControllerRegistry,
    DocumentBuilder, SpecDocument,
};

fn registry() -> ControllerRegistry {
    let mut registry = ControllerRegistry::new();
    registry
        .register(
            "UsersController",
            ControllerMetadata::new("/users")
                .route("find", "", Method::GET)
                .route("create", "", Method::POST)
                .doc("create", "Create a user"),
        )
        .unwrap()
        .register(
            "PingController",
            ControllerMetadata::new("").route("ping", "/users", Method::GET),
        )
        .unwrap();
    registry
}

fn build_app(
    builder: DocumentBuilder<ControllerRegistry>,
) -> actix_web::App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(builder))
        .configure(configure)
}

// ---------------------------------------------------------------------------
// GET /api-docs/openapi.json
// ---------------------------------------------------------------------------

#[actix_web::test]
async fn test_openapi_json_returns_200() {
    let app = test::init_service(build_app(DocumentBuilder::new(registry()))).await;
    let req = test::TestRequest::get().uri("/api-docs/openapi.json").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
}

#[actix_web::test]
async fn test_openapi_json_matches_build() {
    let mut builder = DocumentBuilder::new(registry());
    builder.set_title("Users API");
    let expected = builder.build().unwrap();

    let app = test::init_service(build_app(builder)).await;
    let req = test::TestRequest::get().uri("/api-docs/openapi.json").to_request();
    let body: SpecDocument = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, expected);
    assert_eq!(body.info.title, "Users API");
}

#[actix_web::test]
async fn test_openapi_json_shape() {
    let app = test::init_service(build_app(DocumentBuilder::new(registry()))).await;
    let req = test::TestRequest::get().uri("/api-docs/openapi.json").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    for field in ["openapi", "info", "paths", "components"] {
        assert!(body.get(field).is_some(), "Document must have a '{field}' field");
    }
    assert_eq!(body["paths"]["/users"]["POST"]["description"], "Create a user");
    assert!(body["paths"]["/users"]["POST"]["responses"]["201"].is_object());
    assert_eq!(
        body["paths"]["/users"]["GET"]["description"],
        "ping",
        "The later controller must overwrite GET /users"
    );
}

#[actix_web::test]
async fn test_strict_conflict_returns_409() {
    let mut builder = DocumentBuilder::new(registry());
    builder.set_conflict_policy(ConflictPolicy::Reject);
    let app = test::init_service(build_app(builder)).await;
    let req = test::TestRequest::get().uri("/api-docs/openapi.json").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 409);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap().contains("/users"));
}

// ---------------------------------------------------------------------------
// GET /api-docs/openapi.yaml
// ---------------------------------------------------------------------------

#[actix_web::test]
async fn test_openapi_yaml_matches_json() {
    let builder = DocumentBuilder::new(registry());
    let expected = builder.build().unwrap();
    let app = test::init_service(build_app(builder)).await;
    let req = test::TestRequest::get().uri("/api-docs/openapi.yaml").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("content-type").unwrap().to_str().unwrap(),
        "application/yaml"
    );
    let body = test::read_body(resp).await;
    let parsed: SpecDocument = serde_yaml::from_slice(&body).unwrap();
    assert_eq!(parsed, expected);
}

#[actix_web::test]
async fn test_unknown_route_returns_404() {
    let app = test::init_service(build_app(DocumentBuilder::new(registry()))).await;
    let req = test::TestRequest::get().uri("/api-docs/swagger.json").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}
