//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use drivehub_domain::error::{DriveHubError, NotFoundError, ValidationErrors};

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    fields: Vec<FieldError>,
}

/// One rejected field inside [`ErrorBody`].
#[derive(Serialize)]
struct FieldError {
    field: &'static str,
    message: String,
}

impl FieldError {
    fn collect(errors: &ValidationErrors) -> Vec<Self> {
        errors
            .iter()
            .map(|err| Self {
                field: err.field(),
                message: err.to_string(),
            })
            .collect()
    }
}

/// Maps [`DriveHubError`] to a JSON response with appropriate status code.
#[derive(Debug)]
pub struct ApiError(DriveHubError);

impl From<DriveHubError> for ApiError {
    fn from(err: DriveHubError) -> Self {
        Self(err)
    }
}

impl From<NotFoundError> for ApiError {
    fn from(err: NotFoundError) -> Self {
        Self(err.into())
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        Self(errors.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self.0 {
            DriveHubError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    error: errors.to_string(),
                    fields: FieldError::collect(errors),
                },
            ),
            DriveHubError::NotFound(err) => (
                StatusCode::NOT_FOUND,
                ErrorBody {
                    error: err.to_string(),
                    fields: Vec::new(),
                },
            ),
            DriveHubError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody {
                        error: "internal server error".to_string(),
                        fields: Vec::new(),
                    },
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use drivehub_domain::error::ValidationError;
    use http_body_util::BodyExt;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn should_map_validation_to_bad_request_with_fields() {
        let mut errors = ValidationErrors::new();
        errors.push(ValidationError::BlankName);
        errors.push(ValidationError::VinLength {
            expected: 17,
            actual: 5,
        });

        let response = ApiError::from(errors).into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["fields"][0]["field"], "name");
        assert_eq!(body["fields"][1]["field"], "vin");
    }

    #[tokio::test]
    async fn should_map_not_found_to_404_without_fields() {
        let response = ApiError::from(NotFoundError {
            entity: "Driver",
            id: "9".to_string(),
        })
        .into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Driver 9 not found");
        assert!(body.get("fields").is_none());
    }

    #[tokio::test]
    async fn should_hide_storage_details_behind_500() {
        let source: Box<dyn std::error::Error + Send + Sync> = "disk on fire".into();
        let response = ApiError::from(DriveHubError::Storage(source)).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["error"], "internal server error");
    }
}
