//! Seller handlers.

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
use crate::domain::validation::{self, Checks};
use crate::domain::{
    CreateSeller, SellerChanges, SellerListResponse, SellerResponse, SellerWithBooksResponse,
};
use crate::errors::AppResult;

/// Seller registration request
#[derive(Deserialize, ToSchema)]
pub struct CreateSellerRequest {
    #[schema(example = "Steve")]
    pub first_name: String,
    #[schema(example = "Jobs")]
    pub last_name: String,
    /// Must look like `local@domain.tld`
    #[schema(example = "ru123@mail.com")]
    pub email: String,
    /// Stored only as a hash, never returned
    #[schema(example = "kskfls", min_length = 1)]
    pub password: String,
}

impl Validate for CreateSellerRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Checks::new()
            .check("email", validation::email(&self.email))
            .check("password", validation::password(&self.password))
            .finish()
    }
}

impl From<CreateSellerRequest> for CreateSeller {
    fn from(request: CreateSellerRequest) -> Self {
        Self {
            first_name: request.first_name,
            last_name: request.last_name,
            email: request.email,
            password: request.password,
        }
    }
}

/// Seller update request.
///
/// `id` and `password` are accepted for compatibility and ignored: the path
/// decides which seller changes and the credential is never rewritten here.
#[derive(Deserialize, ToSchema)]
pub struct UpdateSellerRequest {
    #[serde(default)]
    pub id: Option<i32>,
    #[schema(example = "Steve")]
    pub first_name: String,
    #[schema(example = "Wozniak")]
    pub last_name: String,
    #[schema(example = "woz@mail.com")]
    pub email: String,
    #[serde(default)]
    pub password: Option<String>,
}

impl Validate for UpdateSellerRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Checks::new()
            .check("email", validation::email(&self.email))
            .finish()
    }
}

impl From<UpdateSellerRequest> for SellerChanges {
    fn from(request: UpdateSellerRequest) -> Self {
        Self {
            first_name: request.first_name,
            last_name: request.last_name,
            email: request.email,
        }
    }
}

/// Create seller routes
pub fn seller_routes() -> Router<AppState> {
    // Collections answer with and without the trailing slash
    Router::new()
        .route("/sellers", post(create_seller).get(list_sellers))
        .route("/sellers/", post(create_seller).get(list_sellers))
        .route(
            "/sellers/:id",
            get(get_seller).put(update_seller).delete(delete_seller),
        )
}

/// Register a new seller
#[utoipa::path(
    post,
    path = "/api/v1/sellers/",
    tag = "Sellers",
    request_body = CreateSellerRequest,
    responses(
        (status = 201, description = "Seller created", body = SellerResponse),
        (status = 422, description = "Malformed body or invalid email")
    )
)]
pub async fn create_seller(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateSellerRequest>,
) -> AppResult<(StatusCode, Json<SellerResponse>)> {
    let seller = state.seller_service.create_seller(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(SellerResponse::from(seller))))
}

/// List every seller
#[utoipa::path(
    get,
    path = "/api/v1/sellers/",
    tag = "Sellers",
    responses(
        (status = 200, description = "All sellers in storage order", body = SellerListResponse)
    )
)]
pub async fn list_sellers(State(state): State<AppState>) -> AppResult<Json<SellerListResponse>> {
    let sellers = state.seller_service.list_sellers().await?;
    Ok(Json(SellerListResponse::from(sellers)))
}

/// Get a seller together with the books they own
#[utoipa::path(
    get,
    path = "/api/v1/sellers/{id}",
    tag = "Sellers",
    params(
        ("id" = i32, Path, description = "Seller ID")
    ),
    responses(
        (status = 200, description = "Seller with nested books", body = SellerWithBooksResponse),
        (status = 404, description = "Seller not found"),
        (status = 422, description = "Id is not a valid integer")
    )
)]
pub async fn get_seller(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<i32>,
) -> AppResult<Json<SellerWithBooksResponse>> {
    let seller = state.seller_service.get_seller_with_books(id).await?;
    Ok(Json(SellerWithBooksResponse::from(seller)))
}

/// Replace a seller's names and email
#[utoipa::path(
    put,
    path = "/api/v1/sellers/{id}",
    tag = "Sellers",
    params(
        ("id" = i32, Path, description = "Seller ID")
    ),
    request_body = UpdateSellerRequest,
    responses(
        (status = 200, description = "Seller updated", body = SellerResponse),
        (status = 404, description = "Seller not found"),
        (status = 422, description = "Malformed id or body, or invalid email")
    )
)]
pub async fn update_seller(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateSellerRequest>,
) -> AppResult<Json<SellerResponse>> {
    let seller = state
        .seller_service
        .update_seller(id, payload.into())
        .await?;

    Ok(Json(SellerResponse::from(seller)))
}

/// Delete a seller and, through the foreign key, their books
#[utoipa::path(
    delete,
    path = "/api/v1/sellers/{id}",
    tag = "Sellers",
    params(
        ("id" = i32, Path, description = "Seller ID")
    ),
    responses(
        (status = 204, description = "Seller deleted"),
        (status = 404, description = "Seller not found"),
        (status = 422, description = "Id is not a valid integer")
    )
)]
pub async fn delete_seller(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<i32>,
) -> AppResult<StatusCode> {
    state.seller_service.delete_seller(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_request(email: &str, password: &str) -> CreateSellerRequest {
        CreateSellerRequest {
            first_name: "Steve".to_string(),
            last_name: "Jobs".to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_create_request_validation() {
        assert!(create_request("ru123@mail.com", "kskfls").validate().is_ok());

        let errors = create_request("abracadabra", "").validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("password"));
    }

    #[test]
    fn test_update_request_ignores_id_and_password() {
        let request: UpdateSellerRequest = serde_json::from_value(serde_json::json!({
            "id": 99,
            "first_name": "Steve",
            "last_name": "Wozniak",
            "email": "woz@mail.com",
            "password": "new-secret"
        }))
        .unwrap();
        assert!(request.validate().is_ok());

        let changes = SellerChanges::from(request);
        assert_eq!(
            changes,
            SellerChanges {
                first_name: "Steve".to_string(),
                last_name: "Wozniak".to_string(),
                email: "woz@mail.com".to_string(),
            }
        );
    }

    #[test]
    fn test_update_request_rejects_bad_email() {
        let request: UpdateSellerRequest = serde_json::from_value(serde_json::json!({
            "first_name": "Steve",
            "last_name": "Wozniak",
            "email": "not-an-email"
        }))
        .unwrap();

        assert!(request.validate().is_err());
    }
}
