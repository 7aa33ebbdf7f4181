use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};

use crate::datamodel::{Book, BookInput};

use super::collection::{Collection, Record};
use super::error::ApiError;

impl Record for Book {
    type Fields = BookInput;
    const KIND: &'static str = "Book";

    fn from_fields(id: u64, fields: BookInput) -> Self {
        let BookInput {
            title,
            author_id,
            year,
        } = fields;
        Self {
            id,
            title,
            author_id,
            year,
        }
    }

    fn id(&self) -> u64 {
        self.id
    }

    fn overwrite(&mut self, fields: BookInput) {
        self.title = fields.title;
        self.author_id = fields.author_id;
        self.year = fields.year;
    }
}

type Books = State<Collection<Book>>;

/// Returns the list of all the books
#[utoipa::path(
    get,
    path = "/books",
    tag = "Books",
    responses((status = 200, description = "The list of the books", body = Vec<Book>))
)]
pub async fn list_books(State(books): Books) -> Json<Vec<Book>> {
    Json(books.list())
}

/// Create a new book
#[utoipa::path(
    post,
    path = "/books",
    tag = "Books",
    request_body = BookInput,
    responses((status = 201, description = "The book was successfully created", body = Book))
)]
pub async fn create_book(
    State(books): Books,
    Json(input): Json<BookInput>,
) -> (StatusCode, Json<Book>) {
    (StatusCode::CREATED, Json(books.create(input)))
}

/// Get the book by id
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "Books",
    params(("id" = String, Path, description = "The book id")),
    responses(
        (status = 200, description = "The book description by id", body = Book),
        (status = 404, description = "The book was not found", body = String, content_type = "text/plain"),
    )
)]
pub async fn get_book(State(books): Books, Path(id): Path<String>) -> Result<Json<Book>, ApiError> {
    books.get(&id).map(Json)
}

/// Update the book by the id
#[utoipa::path(
    put,
    path = "/books/{id}",
    tag = "Books",
    params(("id" = String, Path, description = "The book id")),
    request_body = BookInput,
    responses(
        (status = 200, description = "The book was updated", body = Book),
        (status = 404, description = "The book was not found", body = String, content_type = "text/plain"),
    )
)]
pub async fn update_book(
    State(books): Books,
    Path(id): Path<String>,
    Json(input): Json<BookInput>,
) -> Result<Json<Book>, ApiError> {
    books.update(&id, input).map(Json)
}

/// Remove the book by id
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "Books",
    params(("id" = String, Path, description = "The book id")),
    responses(
        (status = 200, description = "The book was deleted", body = String, content_type = "text/plain"),
        (status = 404, description = "The book was not found", body = String, content_type = "text/plain"),
    )
)]
pub async fn delete_book(
    State(books): Books,
    Path(id): Path<String>,
) -> Result<&'static str, ApiError> {
    books.delete(&id)?;
    Ok("Book deleted")
}

pub fn routes() -> Router {
    Router::new()
        .route("/books", get(list_books).post(create_book))
        .route("/books/", get(list_books).post(create_book))
        .route(
            "/books/{id}",
            get(get_book).put(update_book).delete(delete_book),
        )
        .with_state(Collection::<Book>::new())
}
