use actix_web::{
    http::{header, StatusCode},
    HttpResponse, HttpResponseBuilder,
};

/// Response builder carrying the relay's CORS headers.
///
/// The browser client is served from an arbitrary origin, so every response
/// the relay produces, success and error alike, carries permissive CORS
/// headers. Set explicitly rather than via middleware: CORS middleware only
/// decorates requests that carry an `Origin` header, and the contract here
/// is unconditional.
pub fn relay_response(status: StatusCode) -> HttpResponseBuilder {
    let mut builder = HttpResponse::build(status);
    builder
        .insert_header((header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"))
        .insert_header((header::ACCESS_CONTROL_ALLOW_HEADERS, "*"));
    builder
}
