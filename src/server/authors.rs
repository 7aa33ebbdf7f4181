use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};

use crate::datamodel::{Author, AuthorInput};

use super::collection::{Collection, Record};
use super::error::ApiError;

impl Record for Author {
    type Fields = AuthorInput;
    const KIND: &'static str = "Author";

    fn from_fields(id: u64, AuthorInput { name, bio }: AuthorInput) -> Self {
        Self { id, name, bio }
    }

    fn id(&self) -> u64 {
        self.id
    }

    fn overwrite(&mut self, fields: AuthorInput) {
        self.name = fields.name;
        self.bio = fields.bio;
    }
}

type Authors = State<Collection<Author>>;

/// Returns the list of all the authors
#[utoipa::path(
    get,
    path = "/authors",
    tag = "Authors",
    responses((status = 200, description = "The list of the authors", body = Vec<Author>))
)]
pub async fn list_authors(State(authors): Authors) -> Json<Vec<Author>> {
    Json(authors.list())
}

/// Create a new author
#[utoipa::path(
    post,
    path = "/authors",
    tag = "Authors",
    request_body = AuthorInput,
    responses((status = 201, description = "The author was successfully created", body = Author))
)]
pub async fn create_author(
    State(authors): Authors,
    Json(input): Json<AuthorInput>,
) -> (StatusCode, Json<Author>) {
    (StatusCode::CREATED, Json(authors.create(input)))
}

/// Get the author by id
#[utoipa::path(
    get,
    path = "/authors/{id}",
    tag = "Authors",
    params(("id" = String, Path, description = "The author id")),
    responses(
        (status = 200, description = "The author description by id", body = Author),
        (status = 404, description = "The author was not found", body = String, content_type = "text/plain"),
    )
)]
pub async fn get_author(
    State(authors): Authors,
    Path(id): Path<String>,
) -> Result<Json<Author>, ApiError> {
    authors.get(&id).map(Json)
}

/// Update the author by the id
#[utoipa::path(
    put,
    path = "/authors/{id}",
    tag = "Authors",
    params(("id" = String, Path, description = "The author id")),
    request_body = AuthorInput,
    responses(
        (status = 200, description = "The author was updated", body = Author),
        (status = 404, description = "The author was not found", body = String, content_type = "text/plain"),
    )
)]
pub async fn update_author(
    State(authors): Authors,
    Path(id): Path<String>,
    Json(input): Json<AuthorInput>,
) -> Result<Json<Author>, ApiError> {
    authors.update(&id, input).map(Json)
}

/// Remove the author by id
#[utoipa::path(
    delete,
    path = "/authors/{id}",
    tag = "Authors",
    params(("id" = String, Path, description = "The author id")),
    responses(
        (status = 200, description = "The author was deleted", body = String, content_type = "text/plain"),
        (status = 404, description = "The author was not found", body = String, content_type = "text/plain"),
    )
)]
pub async fn delete_author(
    State(authors): Authors,
    Path(id): Path<String>,
) -> Result<&'static str, ApiError> {
    authors.delete(&id)?;
    Ok("Author deleted")
}

pub fn routes() -> Router {
    Router::new()
        .route("/authors", get(list_authors).post(create_author))
        .route("/authors/", get(list_authors).post(create_author))
        .route(
            "/authors/{id}",
            get(get_author).put(update_author).delete(delete_author),
        )
        .with_state(Collection::<Author>::new())
}
