//! Book handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

use crate::api::extractors::{ValidatedJson, ValidatedPath};
use crate::api::AppState;
use crate::config::DEFAULT_BOOK_PAGES;
use crate::domain::validation::{self, Checks};
use crate::domain::{BookDraft, BookListResponse, BookResponse};
use crate::errors::AppResult;

fn default_pages() -> i32 {
    DEFAULT_BOOK_PAGES
}

/// Book creation request.
///
/// The page count travels as `count_pages` (`pages` is accepted too) and
/// falls back to the default when absent.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateBookRequest {
    #[schema(example = "Clean Architecture")]
    pub title: String,
    #[schema(example = "Robert Martin")]
    pub author: String,
    /// Publication year, 2020 or later
    #[schema(example = 2021, minimum = 2020)]
    pub year: i32,
    #[serde(rename = "count_pages", alias = "pages", default = "default_pages")]
    #[schema(example = 104, default = 150)]
    pub pages: i32,
    /// Must reference an existing seller
    #[schema(example = 1)]
    pub seller_id: i32,
}

impl Validate for CreateBookRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Checks::new()
            .check("year", validation::book_year(self.year))
            .finish()
    }
}

impl From<CreateBookRequest> for BookDraft {
    fn from(request: CreateBookRequest) -> Self {
        Self {
            title: request.title,
            author: request.author,
            year: request.year,
            pages: request.pages,
            seller_id: request.seller_id,
        }
    }
}

/// Book replacement request. A body `id` is ignored in favor of the path.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateBookRequest {
    #[serde(default)]
    pub id: Option<i32>,
    #[schema(example = "Clean Code")]
    pub title: String,
    #[schema(example = "Robert Martin")]
    pub author: String,
    #[schema(example = 2022, minimum = 2020)]
    pub year: i32,
    #[serde(alias = "count_pages")]
    #[schema(example = 464)]
    pub pages: i32,
    #[schema(example = 1)]
    pub seller_id: i32,
}

impl Validate for UpdateBookRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Checks::new()
            .check("year", validation::book_year(self.year))
            .finish()
    }
}

impl From<UpdateBookRequest> for BookDraft {
    fn from(request: UpdateBookRequest) -> Self {
        Self {
            title: request.title,
            author: request.author,
            year: request.year,
            pages: request.pages,
            seller_id: request.seller_id,
        }
    }
}

/// Create book routes
pub fn book_routes() -> Router<AppState> {
    // Collections answer with and without the trailing slash
    Router::new()
        .route("/books", post(create_book).get(list_books))
        .route("/books/", post(create_book).get(list_books))
        .route(
            "/books/:id",
            get(get_book).put(update_book).delete(delete_book),
        )
}

/// Create a book for an existing seller
#[utoipa::path(
    post,
    path = "/api/v1/books/",
    tag = "Books",
    request_body = CreateBookRequest,
    responses(
        (status = 201, description = "Book created", body = BookResponse),
        (status = 422, description = "Malformed body, year before 2020 or unknown seller")
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateBookRequest>,
) -> AppResult<(StatusCode, Json<BookResponse>)> {
    let book = state.book_service.create_book(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(BookResponse::from(book))))
}

/// List every book
#[utoipa::path(
    get,
    path = "/api/v1/books/",
    tag = "Books",
    responses(
        (status = 200, description = "All books in storage order", body = BookListResponse)
    )
)]
pub async fn list_books(State(state): State<AppState>) -> AppResult<Json<BookListResponse>> {
    let books = state.book_service.list_books().await?;
    Ok(Json(BookListResponse::from(books)))
}

/// Get a book by ID
#[utoipa::path(
    get,
    path = "/api/v1/books/{id}",
    tag = "Books",
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book", body = BookResponse),
        (status = 404, description = "Book not found"),
        (status = 422, description = "Id is not a valid integer")
    )
)]
pub async fn get_book(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<i32>,
) -> AppResult<Json<BookResponse>> {
    let book = state.book_service.get_book(id).await?;
    Ok(Json(BookResponse::from(book)))
}

/// Replace every writable field of a book
#[utoipa::path(
    put,
    path = "/api/v1/books/{id}",
    tag = "Books",
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    request_body = UpdateBookRequest,
    responses(
        (status = 200, description = "Book updated", body = BookResponse),
        (status = 404, description = "Book not found"),
        (status = 422, description = "Malformed id or body, year before 2020 or unknown seller")
    )
)]
pub async fn update_book(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateBookRequest>,
) -> AppResult<Json<BookResponse>> {
    let book = state.book_service.update_book(id, payload.into()).await?;
    Ok(Json(BookResponse::from(book)))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/api/v1/books/{id}",
    tag = "Books",
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    responses(
        (status = 204, description = "Book deleted"),
        (status = 404, description = "Book not found"),
        (status = 422, description = "Id is not a valid integer")
    )
)]
pub async fn delete_book(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<i32>,
) -> AppResult<StatusCode> {
    state.book_service.delete_book(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_create_request_page_aliases() {
        let request: CreateBookRequest = serde_json::from_value(json!({
            "title": "Clean Architecture",
            "author": "Robert Martin",
            "year": 2021,
            "count_pages": 104,
            "seller_id": 1
        }))
        .unwrap();
        assert_eq!(request.pages, 104);

        let request: CreateBookRequest = serde_json::from_value(json!({
            "title": "Clean Architecture",
            "author": "Robert Martin",
            "year": 2021,
            "pages": 300,
            "seller_id": 1
        }))
        .unwrap();
        assert_eq!(request.pages, 300);
    }

    #[test]
    fn test_create_request_defaults_pages() {
        let request: CreateBookRequest = serde_json::from_value(json!({
            "title": "Clean Architecture",
            "author": "Robert Martin",
            "year": 2021,
            "seller_id": 1
        }))
        .unwrap();

        assert_eq!(request.pages, DEFAULT_BOOK_PAGES);
    }

    #[test]
    fn test_create_request_rejects_old_year() {
        let request: CreateBookRequest = serde_json::from_value(json!({
            "title": "Old Book",
            "author": "Someone",
            "year": 1986,
            "seller_id": 1
        }))
        .unwrap();

        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("year"));
    }

    #[test]
    fn test_update_request_accepts_count_pages_and_ignores_id() {
        let request: UpdateBookRequest = serde_json::from_value(json!({
            "id": 42,
            "title": "Clean Code",
            "author": "Robert Martin",
            "year": 2022,
            "count_pages": 464,
            "seller_id": 3
        }))
        .unwrap();
        assert!(request.validate().is_ok());

        let draft = BookDraft::from(request);
        assert_eq!(draft.pages, 464);
        assert_eq!(draft.seller_id, 3);
    }

    #[test]
    fn test_update_request_requires_pages() {
        let result = serde_json::from_value::<UpdateBookRequest>(json!({
            "title": "Clean Code",
            "author": "Robert Martin",
            "year": 2022,
            "seller_id": 3
        }));

        assert!(result.is_err());
    }
}
