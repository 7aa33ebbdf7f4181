use axum::response::{Html, IntoResponse};
use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::datamodel::{Author, AuthorInput, Book, BookInput};

use super::{authors, books};

pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Book CRUD API",
        version = "1.0.0",
        description = "API for managing books"
    ),
    paths(
        books::list_books,
        books::create_book,
        books::get_book,
        books::update_book,
        books::delete_book,
        authors::list_authors,
        authors::create_author,
        authors::get_author,
        authors::update_author,
        authors::delete_author,
    ),
    components(schemas(Book, BookInput, Author, AuthorInput)),
    tags(
        (name = "Books", description = "The books managing API"),
        (name = "Authors", description = "The authors managing API"),
    )
)]
pub struct ApiDoc;

async fn openapi_json() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}

// Swagger UI is loaded from a CDN and pointed at the generated document.
async fn swagger_ui() -> impl IntoResponse {
    Html(format!(
        r##"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <title>Book CRUD API</title>
  <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css" />
</head>
<body>
  <div id="swagger-ui"></div>
  <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js" crossorigin></script>
  <script>
    window.onload = () => {{
      window.ui = SwaggerUIBundle({{ url: "{OPENAPI_PATH}", dom_id: "#swagger-ui" }});
    }};
  </script>
</body>
</html>"##
    ))
}

pub fn routes() -> Router {
    Router::new()
        .route("/api-docs", get(swagger_ui))
        .route(OPENAPI_PATH, get(openapi_json))
}
