mod healthcheck;
mod nationalparks;
mod trail;
mod users;

use salvo::Router;

use crate::middleware::auth::AuthMiddleware;

// Re-export route constants from core
pub use parkside_core::constants::{
    API_ROUTE_COMPONENT, API_ROUTE_PREFIX, PARKS_ROUTE_PREFIX, TRAIL_ROUTE_PREFIX,
    USERS_ROUTE_PREFIX, V1_ROUTE_COMPONENT, V2_ROUTE_COMPONENT,
};

/// ## Summary
/// Constructs the main API router with all versioned handlers.
#[must_use]
pub fn routes() -> Router {
    Router::with_path(API_ROUTE_COMPONENT)
        .hoop(AuthMiddleware)
        .push(healthcheck::routes())
        .push(
            Router::with_path(V1_ROUTE_COMPONENT)
                .push(nationalparks::routes())
                .push(trail::routes())
                .push(users::routes()),
        )
        .push(Router::with_path(V2_ROUTE_COMPONENT).push(nationalparks::routes_v2()))
}
