use salvo::http::StatusCode;
use salvo::writing::Json;
use serde::Serialize;
use thiserror::Error;

use parkside_service::error::ServiceError;

/// Application-level errors (HTTP layer)
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    ServiceError(#[from] parkside_service::error::ServiceError),

    #[error(transparent)]
    DatabaseError(#[from] parkside_db::error::DbError),

    #[error(transparent)]
    CoreError(#[from] parkside_core::error::CoreError),
}

pub type AppResult<T> = std::result::Result<T, AppError>;

/// ## Summary
/// Error response payload
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// ## Summary
/// Renders a service error as the corresponding HTTP status and JSON payload.
///
/// Duplicate-name conflicts surface as 404, not 409; that is the published
/// wire contract and is kept as-is.
pub fn render_service_error(res: &mut salvo::Response, err: &ServiceError) {
    let (status, message) = match err {
        ServiceError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
        ServiceError::InvalidCredentials => (
            StatusCode::BAD_REQUEST,
            "Username or password is incorrect".to_string(),
        ),
        ServiceError::DuplicateUsername => (
            StatusCode::BAD_REQUEST,
            "Username already exists".to_string(),
        ),
        ServiceError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
        ServiceError::Conflict(msg) => (StatusCode::NOT_FOUND, msg.clone()),
        ServiceError::NotAuthenticated => (
            StatusCode::UNAUTHORIZED,
            "Authentication required".to_string(),
        ),
        ServiceError::AuthorizationError(_) => (
            StatusCode::FORBIDDEN,
            "Insufficient permissions".to_string(),
        ),
        _ => {
            tracing::error!(error = ?err, "Request failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            )
        }
    };

    res.status_code(status);
    res.render(Json(ErrorResponse { error: message }));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_for(err: &ServiceError) -> StatusCode {
        let mut res = salvo::Response::new();
        render_service_error(&mut res, err);
        res.status_code.expect("status set")
    }

    #[test_log::test]
    fn error_taxonomy_maps_to_expected_statuses() {
        assert_eq!(
            status_for(&ServiceError::ValidationError("bad".into())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_for(&ServiceError::NotFound("missing".into())),
            StatusCode::NOT_FOUND
        );
        // Duplicates keep the 404 contract rather than 409.
        assert_eq!(
            status_for(&ServiceError::Conflict("dup".into())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_for(&ServiceError::NotAuthenticated),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            status_for(&ServiceError::AuthorizationError("no".into())),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            status_for(&ServiceError::InvalidCredentials),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_for(&ServiceError::DuplicateUsername),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_for(&ServiceError::InvariantViolation("boom")),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
