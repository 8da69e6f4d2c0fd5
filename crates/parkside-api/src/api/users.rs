use salvo::{Depot, Request, Response, Router, handler, http::StatusCode, writing::Json};
use serde::Deserialize;
use tracing::error;

use crate::config::get_config_from_depot;
use crate::db_handler::get_db_from_depot;
use crate::error::{ErrorResponse, render_service_error};
use parkside_core::constants::USERS_ROUTE_COMPONENT;
use parkside_core::types::Role;
use parkside_service::account;

#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    pub username: String,
    pub password: String,
}

/// ## Summary
/// POST /api/v1/users/authenticate - Exchange credentials for a bearer token.
///
/// ## Errors
/// Returns HTTP 400 with a generic message on any credential mismatch.
#[handler]
async fn authenticate_handler(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let body: CredentialsRequest = match req.parse_json().await {
        Ok(b) => b,
        Err(e) => {
            error!(error = ?e, "Failed to parse credentials payload");
            res.status_code(StatusCode::BAD_REQUEST);
            res.render(Json(ErrorResponse {
                error: "Invalid request body".to_string(),
            }));
            return;
        }
    };

    let config = match get_config_from_depot(depot) {
        Ok(c) => c,
        Err(e) => {
            error!(error = ?e, "Failed to get configuration");
            res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
            res.render(Json(ErrorResponse {
                error: "Internal server error".to_string(),
            }));
            return;
        }
    };

    let provider = match get_db_from_depot(depot) {
        Ok(p) => p,
        Err(e) => {
            error!(error = ?e, "Failed to get database provider");
            res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
            res.render(Json(ErrorResponse {
                error: "Internal server error".to_string(),
            }));
            return;
        }
    };

    let mut conn = match provider.get_connection().await {
        Ok(c) => c,
        Err(e) => {
            error!(error = ?e, "Failed to get database connection");
            res.status_code(StatusCode::SERVICE_UNAVAILABLE);
            res.render(Json(ErrorResponse {
                error: "Database unavailable".to_string(),
            }));
            return;
        }
    };

    match account::authenticate(&mut conn, &config.auth.secret, &body.username, &body.password)
        .await
    {
        Ok(token) => res.render(Json(token)),
        Err(e) => render_service_error(res, &e),
    }
}

/// ## Summary
/// POST /api/v1/users/register - Create a standard user account.
///
/// New accounts always get the non-privileged role; admin accounts are only
/// created through the configured seed.
///
/// ## Errors
/// Returns HTTP 400 if the username is taken or a field is empty.
#[handler]
async fn register_handler(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let body: CredentialsRequest = match req.parse_json().await {
        Ok(b) => b,
        Err(e) => {
            error!(error = ?e, "Failed to parse credentials payload");
            res.status_code(StatusCode::BAD_REQUEST);
            res.render(Json(ErrorResponse {
                error: "Invalid request body".to_string(),
            }));
            return;
        }
    };

    let provider = match get_db_from_depot(depot) {
        Ok(p) => p,
        Err(e) => {
            error!(error = ?e, "Failed to get database provider");
            res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
            res.render(Json(ErrorResponse {
                error: "Internal server error".to_string(),
            }));
            return;
        }
    };

    let mut conn = match provider.get_connection().await {
        Ok(c) => c,
        Err(e) => {
            error!(error = ?e, "Failed to get database connection");
            res.status_code(StatusCode::SERVICE_UNAVAILABLE);
            res.render(Json(ErrorResponse {
                error: "Database unavailable".to_string(),
            }));
            return;
        }
    };

    match account::register(&mut conn, &body.username, &body.password, Role::User).await {
        Ok(_user) => {
            res.status_code(StatusCode::OK);
            res.render(Json(serde_json::json!({})));
        }
        Err(
            e @ (parkside_service::error::ServiceError::DuplicateUsername
            | parkside_service::error::ServiceError::ValidationError(_)),
        ) => render_service_error(res, &e),
        // Registration reports any other failure as a client-visible 400
        // with no detail, matching the published contract.
        Err(e) => {
            error!(error = ?e, "Registration failed");
            res.status_code(StatusCode::BAD_REQUEST);
            res.render(Json(ErrorResponse {
                error: "Error while registering".to_string(),
            }));
        }
    }
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path(USERS_ROUTE_COMPONENT)
        .push(Router::with_path("authenticate").post(authenticate_handler))
        .push(Router::with_path("register").post(register_handler))
}
