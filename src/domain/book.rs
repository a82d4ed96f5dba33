//! Book domain entity and its outbound shapes.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Book domain entity
#[derive(Debug, Clone, PartialEq)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub author: String,
    pub year: i32,
    pub pages: i32,
    pub seller_id: i32,
}

/// Every writable book field. Used for both insert and full replacement.
#[derive(Debug, Clone, PartialEq)]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    pub year: i32,
    pub pages: i32,
    pub seller_id: i32,
}

/// Book response including the owning seller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BookResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Eugeny Onegin")]
    pub title: String,
    #[schema(example = "Pushkin")]
    pub author: String,
    #[schema(example = 2024)]
    pub year: i32,
    #[schema(example = 400)]
    pub pages: i32,
    #[schema(example = 1)]
    pub seller_id: i32,
}

impl From<Book> for BookResponse {
    fn from(book: Book) -> Self {
        Self {
            id: book.id,
            title: book.title,
            author: book.author,
            year: book.year,
            pages: book.pages,
            seller_id: book.seller_id,
        }
    }
}

/// Book as nested under its seller; the seller reference is implied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NestedBookResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Mtziri")]
    pub title: String,
    #[schema(example = "Lermontov")]
    pub author: String,
    #[schema(example = 2024)]
    pub year: i32,
    #[schema(example = 510)]
    pub pages: i32,
}

impl From<Book> for NestedBookResponse {
    fn from(book: Book) -> Self {
        Self {
            id: book.id,
            title: book.title,
            author: book.author,
            year: book.year,
            pages: book.pages,
        }
    }
}

/// List wrapper: `{"books": [...]}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BookListResponse {
    pub books: Vec<BookResponse>,
}

impl From<Vec<Book>> for BookListResponse {
    fn from(books: Vec<Book>) -> Self {
        Self {
            books: books.into_iter().map(BookResponse::from).collect(),
        }
    }
}
