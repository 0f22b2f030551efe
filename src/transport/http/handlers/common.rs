use crate::app::error::{Resource, ServiceError};
use crate::domain::validation::ValidationError;
use crate::transport::http::types::{
    ErrorBody, ValidationErrorsBody, GENERIC_INTERNAL_ERROR, GENERIC_VALIDATION_ERROR,
};
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::{debug, error};

impl ServiceError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
            ServiceError::Database(_) | ServiceError::Migration(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

/// Validation detail is logged, never returned. Internal errors are logged
/// and replaced with a fixed message.
impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            ServiceError::NotFound(resource) => (
                status,
                Json(ErrorBody {
                    error: format!("{} not found", resource),
                }),
            )
                .into_response(),
            ServiceError::Validation(e) => {
                debug!(error = %e, "request rejected");
                (
                    status,
                    Json(ValidationErrorsBody {
                        errors: vec![GENERIC_VALIDATION_ERROR.to_string()],
                    }),
                )
                    .into_response()
            }
            other => {
                error!(error = %other, "request failed");
                (
                    status,
                    Json(ErrorBody {
                        error: GENERIC_INTERNAL_ERROR.to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}

/// Ids are integers; anything else cannot name an existing record.
pub fn path_id(
    path: Result<Path<i64>, PathRejection>,
    resource: Resource,
) -> Result<i64, ServiceError> {
    path.map(|Path(id)| id)
        .map_err(|_| ServiceError::NotFound(resource))
}

/// Unwraps a JSON body, turning a missing, malformed or mistyped body into a
/// validation failure.
pub fn json_body<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, ServiceError> {
    body.map(|Json(v)| v).map_err(rejected_body)
}

fn rejected_body(rejection: JsonRejection) -> ServiceError {
    ServiceError::Validation(ValidationError::MalformedBody(rejection.body_text()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_the_taxonomy() {
        assert_eq!(
            ServiceError::NotFound(Resource::Customer).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ServiceError::Validation(ValidationError::InvalidEmail).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ServiceError::Database(sqlx::Error::PoolTimedOut).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
