use salvo::{Depot, Request, Response, Router, handler, http::StatusCode, writing::Json};
use serde::Deserialize;
use tracing::error;

use crate::db_handler::get_db_from_depot;
use crate::error::{ErrorResponse, render_service_error};
use parkside_core::constants::{TRAIL_ROUTE_COMPONENT, TRAIL_ROUTE_PREFIX};
use parkside_core::types::Difficulty;
use parkside_service::auth::{ADMIN_ONLY, authorize, get_principal_from_depot};
use parkside_service::catalog::trail::{self, TrailDraft};

/// ## Summary
/// Trail create/update request payload. The id is absent on create and must
/// match the path id on update.
#[derive(Debug, Deserialize)]
pub struct TrailUpsertRequest {
    pub id: Option<uuid::Uuid>,
    pub name: String,
    pub distance_km: f64,
    pub elevation_gain_m: f64,
    pub difficulty: Difficulty,
    pub national_park_id: uuid::Uuid,
}

impl TrailUpsertRequest {
    fn draft(&self) -> TrailDraft<'_> {
        TrailDraft {
            name: &self.name,
            distance_km: self.distance_km,
            elevation_gain_m: self.elevation_gain_m,
            difficulty: self.difficulty,
            national_park_id: self.national_park_id,
        }
    }
}

/// ## Summary
/// GET /api/v1/trail - List all trails with their parent park names (public).
#[handler]
async fn get_trails_handler(depot: &mut Depot, res: &mut Response) {
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

    match trail::list_trails(&mut conn).await {
        Ok(trails) => res.render(Json(trails)),
        Err(e) => render_service_error(res, &e),
    }
}

/// ## Summary
/// GET /api/v1/trail/{id} - Fetch a single trail (admin only).
///
/// ## Errors
/// Returns HTTP 401/403 per the role gate, 404 if the id is unknown.
#[handler]
async fn get_trail_handler(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    if let Err(e) = authorize(ADMIN_ONLY, &get_principal_from_depot(depot)) {
        render_service_error(res, &e);
        return;
    }

    let Some(id_str) = req.param::<String>("id") else {
        res.status_code(StatusCode::BAD_REQUEST);
        res.render(Json(ErrorResponse {
            error: "Trail ID required".to_string(),
        }));
        return;
    };

    let Ok(id) = uuid::Uuid::parse_str(&id_str) else {
        res.status_code(StatusCode::BAD_REQUEST);
        res.render(Json(ErrorResponse {
            error: "Invalid trail ID format".to_string(),
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

    match trail::get_trail(&mut conn, id).await {
        Ok(dto) => res.render(Json(dto)),
        Err(e) => render_service_error(res, &e),
    }
}

/// ## Summary
/// GET /api/v1/trail/GetTrailInNationalPark/{park_id} - List the trails
/// belonging to one park (public).
#[handler]
async fn get_trails_in_park_handler(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let Some(park_id_str) = req.param::<String>("park_id") else {
        res.status_code(StatusCode::BAD_REQUEST);
        res.render(Json(ErrorResponse {
            error: "Park ID required".to_string(),
        }));
        return;
    };

    let Ok(park_id) = uuid::Uuid::parse_str(&park_id_str) else {
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

    match trail::trails_in_park(&mut conn, park_id).await {
        Ok(trails) => res.render(Json(trails)),
        Err(e) => render_service_error(res, &e),
    }
}

/// ## Summary
/// POST /api/v1/trail - Create a trail (admin only).
///
/// ## Errors
/// Returns HTTP 404 if the name already exists, 400 on a malformed body,
/// 500 on store failure.
#[handler]
async fn create_trail_handler(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    if let Err(e) = authorize(ADMIN_ONLY, &get_principal_from_depot(depot)) {
        render_service_error(res, &e);
        return;
    }

    let body: TrailUpsertRequest = match req.parse_json().await {
        Ok(b) => b,
        Err(e) => {
            error!(error = ?e, "Failed to parse trail payload");
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

    match trail::create_trail(&mut conn, &body.draft()).await {
        Ok(dto) => {
            let location = format!("{TRAIL_ROUTE_PREFIX}/{}", dto.id);
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
/// PATCH /api/v1/trail/{id} - Replace a trail's fields (admin only).
///
/// ## Errors
/// Returns HTTP 400 if the body id does not match the path id, 404 if the id
/// is unknown, 500 on store failure.
#[handler]
async fn update_trail_handler(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    if let Err(e) = authorize(ADMIN_ONLY, &get_principal_from_depot(depot)) {
        render_service_error(res, &e);
        return;
    }

    let Some(id_str) = req.param::<String>("id") else {
        res.status_code(StatusCode::BAD_REQUEST);
        res.render(Json(ErrorResponse {
            error: "Trail ID required".to_string(),
        }));
        return;
    };

    let Ok(id) = uuid::Uuid::parse_str(&id_str) else {
        res.status_code(StatusCode::BAD_REQUEST);
        res.render(Json(ErrorResponse {
            error: "Invalid trail ID format".to_string(),
        }));
        return;
    };

    let body: TrailUpsertRequest = match req.parse_json().await {
        Ok(b) => b,
        Err(e) => {
            error!(error = ?e, "Failed to parse trail payload");
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

    match trail::update_trail(&mut conn, id, &body.draft()).await {
        Ok(()) => {
            res.status_code(StatusCode::NO_CONTENT);
        }
        Err(e) => render_service_error(res, &e),
    }
}

/// ## Summary
/// DELETE /api/v1/trail/{id} - Delete a trail (admin only).
///
/// ## Errors
/// Returns HTTP 404 if the id is unknown, 500 on store failure.
#[handler]
async fn delete_trail_handler(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    if let Err(e) = authorize(ADMIN_ONLY, &get_principal_from_depot(depot)) {
        render_service_error(res, &e);
        return;
    }

    let Some(id_str) = req.param::<String>("id") else {
        res.status_code(StatusCode::BAD_REQUEST);
        res.render(Json(ErrorResponse {
            error: "Trail ID required".to_string(),
        }));
        return;
    };

    let Ok(id) = uuid::Uuid::parse_str(&id_str) else {
        res.status_code(StatusCode::BAD_REQUEST);
        res.render(Json(ErrorResponse {
            error: "Invalid trail ID format".to_string(),
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

    match trail::delete_trail(&mut conn, id).await {
        Ok(()) => {
            res.status_code(StatusCode::NO_CONTENT);
        }
        Err(e) => render_service_error(res, &e),
    }
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path(TRAIL_ROUTE_COMPONENT)
        .get(get_trails_handler)
        .post(create_trail_handler)
        .push(Router::with_path("GetTrailInNationalPark/<park_id>").get(get_trails_in_park_handler))
        .push(
            Router::with_path("<id>")
                .get(get_trail_handler)
                .patch(update_trail_handler)
                .delete(delete_trail_handler),
        )
}
