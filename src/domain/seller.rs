//! Seller domain entity and its outbound shapes.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::book::{Book, NestedBookResponse};

/// Seller domain entity.
///
/// Not serializable: only the response shapes below reach the wire, so the
/// credential hash cannot leak through a handler.
#[derive(Debug, Clone)]
pub struct Seller {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
}

/// Seller creation data transfer object (plain text password)
#[derive(Clone)]
pub struct CreateSeller {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for CreateSeller {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreateSeller")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Data needed to insert a seller; the password is already hashed.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSeller {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
}

/// Fields an update may overwrite. Identity and credential are never touched.
#[derive(Debug, Clone, PartialEq)]
pub struct SellerChanges {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// A seller together with every book it owns.
#[derive(Debug, Clone)]
pub struct SellerWithBooks {
    pub seller: Seller,
    pub books: Vec<Book>,
}

/// Seller response (safe to return to client)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SellerResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Rustam")]
    pub first_name: String,
    #[schema(example = "Aminov")]
    pub last_name: String,
    #[schema(example = "ru123@mail.com")]
    pub email: String,
}

impl From<Seller> for SellerResponse {
    fn from(seller: Seller) -> Self {
        Self {
            id: seller.id,
            first_name: seller.first_name,
            last_name: seller.last_name,
            email: seller.email,
        }
    }
}

/// Seller with nested books; each book omits the seller reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SellerWithBooksResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Rustam")]
    pub first_name: String,
    #[schema(example = "Aminov")]
    pub last_name: String,
    #[schema(example = "ru123@mail.com")]
    pub email: String,
    pub books: Vec<NestedBookResponse>,
}

impl From<SellerWithBooks> for SellerWithBooksResponse {
    fn from(value: SellerWithBooks) -> Self {
        let SellerWithBooks { seller, books } = value;
        Self {
            id: seller.id,
            first_name: seller.first_name,
            last_name: seller.last_name,
            email: seller.email,
            books: books.into_iter().map(NestedBookResponse::from).collect(),
        }
    }
}

/// List wrapper: `{"sellers": [...]}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SellerListResponse {
    pub sellers: Vec<SellerResponse>,
}

impl From<Vec<Seller>> for SellerListResponse {
    fn from(sellers: Vec<Seller>) -> Self {
        Self {
            sellers: sellers.into_iter().map(SellerResponse::from).collect(),
        }
    }
}
