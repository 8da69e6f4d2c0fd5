use salvo::{Depot, Request, Response, Router, handler, http::StatusCode, writing::Json};
use serde::Deserialize;
use tracing::error;

use crate::db_handler::get_db_from_depot;
use crate::error::{ErrorResponse, render_service_error};
use parkside_core::constants::{PARKS_ROUTE_COMPONENT, PARKS_ROUTE_PREFIX};
use parkside_service::auth::{ADMIN_ONLY, EndpointPolicy, authorize, get_principal_from_depot};
use parkside_service::catalog::park::{self, ParkDraft};

/// ## Summary
/// Park create/update request payload. The id is absent on create and must
/// match the path id on update.
#[derive(Debug, Deserialize)]
pub struct ParkUpsertRequest {
    pub id: Option<uuid::Uuid>,
    pub name: String,
    pub state: String,
    pub established: chrono::NaiveDate,
    #[serde(default)]
    pub picture: Option<Vec<u8>>,
}

impl ParkUpsertRequest {
    fn draft(&self) -> ParkDraft<'_> {
        ParkDraft {
            name: &self.name,
            state: &self.state,
            established: self.established,
            picture: self.picture.as_deref(),
        }
    }
}

/// ## Summary
/// GET /api/v1/nationalparks - List all national parks (public).
#[handler]
async fn get_parks_handler(depot: &mut Depot, res: &mut Response) {
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

    match park::list_parks(&mut conn).await {
        Ok(parks) => res.render(Json(parks)),
        Err(e) => render_service_error(res, &e),
    }
}

/// ## Summary
/// GET /api/v1/nationalparks/{id} - Fetch a single park (any valid token).
///
/// ## Errors
/// Returns HTTP 401 without a valid token, 404 if the id is unknown.
#[handler]
async fn get_park_handler(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    if let Err(e) = authorize(EndpointPolicy::Authenticated, &get_principal_from_depot(depot)) {
        render_service_error(res, &e);
        return;
    }

    let Some(id_str) = req.param::<String>("id") else {
        res.status_code(StatusCode::BAD_REQUEST);
        res.render(Json(ErrorResponse {
            error: "Park ID required".to_string(),
        }));
        return;
    };

    let Ok(id) = uuid::Uuid::parse_str(&id_str) else {
        res.status_code(StatusCode::BAD_REQUEST);
        res.render(Json(ErrorResponse {
            error: "Invalid park ID format".to_string(),
        }));
        return;
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

    match park::get_park(&mut conn, id).await {
        Ok(dto) => res.render(Json(dto)),
        Err(e) => render_service_error(res, &e),
    }
}

/// ## Summary
/// POST /api/v1/nationalparks - Create a park (admin only).
///
/// ## Errors
/// Returns HTTP 401/403 per the role gate, 404 if the name already exists,
/// 400 on a malformed body, 500 on store failure.
#[handler]
async fn create_park_handler(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    if let Err(e) = authorize(ADMIN_ONLY, &get_principal_from_depot(depot)) {
        render_service_error(res, &e);
        return;
    }

    let body: ParkUpsertRequest = match req.parse_json().await {
        Ok(b) => b,
        Err(e) => {
            error!(error = ?e, "Failed to parse park payload");
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

    match park::create_park(&mut conn, &body.draft()).await {
        Ok(dto) => {
            let location = format!("{PARKS_ROUTE_PREFIX}/{}", dto.id);
            if let Err(e) = res.add_header("Location", location, true) {
                error!(error = ?e, "Failed to set Location header");
            }
            res.status_code(StatusCode::CREATED);
            res.render(Json(dto));
        }
        Err(e) => render_service_error(res, &e),
    }
}

/// ## Summary
/// PATCH /api/v1/nationalparks/{id} - Replace a park's fields (admin only).
///
/// ## Errors
/// Returns HTTP 400 if the body id does not match the path id, 404 if the id
/// is unknown, 500 on store failure.
#[handler]
async fn update_park_handler(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    if let Err(e) = authorize(ADMIN_ONLY, &get_principal_from_depot(depot)) {
        render_service_error(res, &e);
        return;
    }

    let Some(id_str) = req.param::<String>("id") else {
        res.status_code(StatusCode::BAD_REQUEST);
        res.render(Json(ErrorResponse {
            error: "Park ID required".to_string(),
        }));
        return;
    };

    let Ok(id) = uuid::Uuid::parse_str(&id_str) else {
        res.status_code(StatusCode::BAD_REQUEST);
        res.render(Json(ErrorResponse {
            error: "Invalid park ID format".to_string(),
        }));
        return;
    };

    let body: ParkUpsertRequest = match req.parse_json().await {
        Ok(b) => b,
        Err(e) => {
            error!(error = ?e, "Failed to parse park payload");
            res.status_code(StatusCode::BAD_REQUEST);
            res.render(Json(ErrorResponse {
                error: "Invalid request body".to_string(),
            }));
            return;
        }
    };

    if body.id != Some(id) {
        res.status_code(StatusCode::BAD_REQUEST);
        res.render(Json(ErrorResponse {
            error: "Body id does not match path id".to_string(),
        }));
        return;
    }

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

    match park::update_park(&mut conn, id, &body.draft()).await {
        Ok(()) => {
            res.status_code(StatusCode::NO_CONTENT);
        }
        Err(e) => render_service_error(res, &e),
    }
}

/// ## Summary
/// DELETE /api/v1/nationalparks/{id} - Delete a park (admin only).
///
/// ## Errors
/// Returns HTTP 404 if the id is unknown, 500 on store failure.
#[handler]
async fn delete_park_handler(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    if let Err(e) = authorize(ADMIN_ONLY, &get_principal_from_depot(depot)) {
        render_service_error(res, &e);
        return;
    }

    let Some(id_str) = req.param::<String>("id") else {
        res.status_code(StatusCode::BAD_REQUEST);
        res.render(Json(ErrorResponse {
            error: "Park ID required".to_string(),
        }));
        return;
    };

    let Ok(id) = uuid::Uuid::parse_str(&id_str) else {
        res.status_code(StatusCode::BAD_REQUEST);
        res.render(Json(ErrorResponse {
            error: "Invalid park ID format".to_string(),
        }));
        return;
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

    match park::delete_park(&mut conn, id).await {
        Ok(()) => {
            res.status_code(StatusCode::NO_CONTENT);
        }
        Err(e) => render_service_error(res, &e),
    }
}

/// ## Summary
/// GET /api/v2/nationalparks - Narrowed contract for newer clients: returns
/// only the first park record.
#[handler]
async fn get_first_park_handler(depot: &mut Depot, res: &mut Response) {
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

    match park::first_park(&mut conn).await {
        Ok(first) => res.render(Json(first)),
        Err(e) => render_service_error(res, &e),
    }
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path(PARKS_ROUTE_COMPONENT)
        .get(get_parks_handler)
        .post(create_park_handler)
        .push(
            Router::with_path("<id>")
                .get(get_park_handler)
                .patch(update_park_handler)
                .delete(delete_park_handler),
        )
}

#[must_use]
pub fn routes_v2() -> Router {
    Router::with_path(PARKS_ROUTE_COMPONENT).get(get_first_park_handler)
}
