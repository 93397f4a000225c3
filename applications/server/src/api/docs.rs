/// API documentation routes
///
/// The OpenAPI document is a checked-in static artifact, not generated at
/// runtime; the docs page is a thin HTML shell that loads Swagger UI from a
/// CDN and points it at `/openapi.json`.
use axum::{
    http::header,
    response::{Html, IntoResponse},
};

const OPENAPI_DOCUMENT: &str = include_str!("../../openapi.json");
const DOCS_PAGE: &str = include_str!("docs.html");

/// GET /openapi.json - static OpenAPI 3 document
pub async fn openapi_document() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/json")],
        OPENAPI_DOCUMENT,
    )
}

/// GET /docs - Swagger UI shell
pub async fn docs_page() -> Html<&'static str> {
    Html(DOCS_PAGE)
}
