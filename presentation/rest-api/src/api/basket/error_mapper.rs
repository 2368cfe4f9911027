use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::basket::errors::BasketError;
use business::domain::errors::RepositoryError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for BasketError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            BasketError::Unauthenticated => (
                StatusCode::UNAUTHORIZED,
                "Unauthenticated",
                "basket.unauthenticated".to_string(),
            ),
            BasketError::NotFound(buyer_id) => (
                StatusCode::NOT_FOUND,
                "NotFound",
                format!("Basket with buyer id {buyer_id} does not exist"),
            ),
            BasketError::Repository(RepositoryError::Unavailable) => (
                StatusCode::SERVICE_UNAVAILABLE,
                "Unavailable",
                "repository.unavailable".to_string(),
            ),
            BasketError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence".to_string(),
            ),
        };

        (status, Json(ErrorResponse::new(name, message)))
    }
}
