use actix_web::http::Method;

pub const CREATED: u16 = 201;
pub const OK: u16 = 200;

/// Effective response status for a route.
/// An explicit code always wins; otherwise POST answers 201 and everything else 200.
pub fn resolve_response_code(method: &Method, explicit: Option<u16>) -> u16 {
    match explicit {
        Some(code) => code,
        None if *method == Method::POST => CREATED,
        None => OK,
    }
}
