use axum::Router;
use tower_http::trace::TraceLayer;

mod authors;
mod books;
mod collection;
mod docs;
mod error;

/// Builds the whole service. Every call starts with empty collections.
pub fn make_app() -> Router {
    Router::new()
        .merge(books::routes())
        .merge(authors::routes())
        .merge(docs::routes())
        .layer(TraceLayer::new_for_http())
}
