//! HTTP error boundary.
//!
//! Every handler returns `Result<_, ApiError>`; the variant decides both the status
//! code and which of the two error payloads is sent.

use crate::catalog::{CatalogError, EntityKind};
use crate::serialization::{ErrorBody, ErrorsBody};
use crate::validation::ValidationError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// 404 `{"error": "<Entity> not found"}`
    #[error("{entity} not found")]
    NotFound { entity: EntityKind },

    /// 400 `{"errors": [...]}`
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// 400 `{"errors": [...]}` for a body that could not be read as JSON.
    #[error("{0}")]
    MalformedBody(String),

    /// 500 `{"error": "..."}`
    #[error("Internal server error: {message}")]
    Internal { message: String },
}

impl ApiError {
    pub fn not_found(entity: EntityKind) -> Self {
        Self::NotFound { entity }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Validation(_) | Self::MalformedBody(_) => StatusCode::BAD_REQUEST,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<CatalogError> for ApiError {
    fn from(e: CatalogError) -> Self {
        match e {
            CatalogError::NotFound { entity, .. }
            | CatalogError::ReferenceNotFound { entity, .. } => Self::not_found(entity),
            other => Self::internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();
        match self {
            Self::Validation(e) => {
                (status_code, Json(ErrorsBody { errors: e.messages() })).into_response()
            }
            Self::MalformedBody(message) => {
                (status_code, Json(ErrorsBody { errors: vec![message] })).into_response()
            }
            other => {
                if status_code.is_server_error() {
                    tracing::error!(error = %other, "Request failed");
                }
                let error = other.to_string();
                (status_code, Json(ErrorBody { error })).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pizza_actor::PizzaError;
    use crate::restaurant_actor::RestaurantError;
    use http_body_util::BodyExt;
    use serde_json::{json, Value};

    async fn body_json(error: ApiError) -> (StatusCode, Value) {
        let response = error.into_response();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_not_found_payload() {
        let error = ApiError::from(CatalogError::NotFound {
            entity: EntityKind::Restaurant,
            id: "restaurant_999".into(),
        });
        assert_eq!(
            body_json(error).await,
            (StatusCode::NOT_FOUND, json!({"error": "Restaurant not found"}))
        );
    }

    #[tokio::test]
    async fn test_reference_not_found_is_404() {
        let error = ApiError::from(CatalogError::ReferenceNotFound {
            entity: EntityKind::Pizza,
            id: "pizza_7".into(),
        });
        assert_eq!(
            body_json(error).await,
            (StatusCode::NOT_FOUND, json!({"error": "Pizza not found"}))
        );
    }

    #[tokio::test]
    async fn test_validation_payload_lists_errors() {
        let error = ApiError::from(ValidationError::MissingField(vec!["price", "pizza_id"]));
        assert_eq!(
            body_json(error).await,
            (
                StatusCode::BAD_REQUEST,
                json!({"errors": ["price is required", "pizza_id is required"]})
            )
        );

        let (status, body) = body_json(ApiError::from(ValidationError::InvalidPrice)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["errors"].as_array().map(Vec::len), Some(1));
    }

    #[tokio::test]
    async fn test_store_failures_are_500() {
        let error = ApiError::from(CatalogError::Restaurant(
            RestaurantError::ActorCommunicationError("Actor closed".into()),
        ));
        let (status, body) = body_json(error).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["error"].as_str().unwrap().contains("Actor closed"));

        let error = ApiError::from(CatalogError::Pizza(PizzaError::ValidationError("blank".into())));
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let error = ApiError::from(CatalogError::from(crate::model::PriceOutOfRange(0)));
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
