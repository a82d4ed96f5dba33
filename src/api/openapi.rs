//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::{book_handler, seller_handler};
use crate::domain::{
    BookListResponse, BookResponse, NestedBookResponse, SellerListResponse, SellerResponse,
    SellerWithBooksResponse,
};

/// OpenAPI documentation for the Bookstore API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bookstore API",
        version = "0.1.0",
        description = "Sellers and the books they own, built with Axum and SeaORM",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8000", description = "Local development server")
    ),
    paths(
        // Seller endpoints
        seller_handler::create_seller,
        seller_handler::list_sellers,
        seller_handler::get_seller,
        seller_handler::update_seller,
        seller_handler::delete_seller,
        // Book endpoints
        book_handler::create_book,
        book_handler::list_books,
        book_handler::get_book,
        book_handler::update_book,
        book_handler::delete_book,
    ),
    components(
        schemas(
            // Response shapes
            SellerResponse,
            SellerWithBooksResponse,
            SellerListResponse,
            BookResponse,
            NestedBookResponse,
            BookListResponse,
            // Request shapes
            seller_handler::CreateSellerRequest,
            seller_handler::UpdateSellerRequest,
            book_handler::CreateBookRequest,
            book_handler::UpdateBookRequest,
        )
    ),
    tags(
        (name = "Sellers", description = "Seller management operations"),
        (name = "Books", description = "Book management operations")
    )
)]
pub struct ApiDoc;
