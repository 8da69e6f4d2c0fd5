use salvo::Depot;
use salvo::http::header::AUTHORIZATION;
use tracing::error;

use crate::config::get_config_from_depot;
use parkside_service::auth::{RequestPrincipal, depot_keys, verify_token};

/// ## Summary
/// Extracts the bearer token from the `Authorization` header, if present.
fn bearer_token(req: &salvo::Request) -> Option<&str> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

/// ## Summary
/// Authentication middleware that verifies the bearer token and stores the
/// request principal in the depot. A missing, malformed, or wrongly-signed
/// token yields the public principal; non-public endpoint policies then
/// reject it with 401 at the handler.
///
/// ## Side Effects
/// Inserts the request principal into the depot for downstream handlers.
#[salvo::async_trait]
impl salvo::Handler for AuthMiddleware {
    #[tracing::instrument(skip(self, req, depot, res, ctrl), fields(
        method = %req.method(),
        path = %req.uri().path()
    ))]
    async fn handle(
        &self,
        req: &mut salvo::Request,
        depot: &mut Depot,
        res: &mut salvo::Response,
        ctrl: &mut salvo::FlowCtrl,
    ) {
        tracing::trace!("Authenticating request");

        if req.method() == salvo::http::Method::OPTIONS {
            depot.insert(depot_keys::REQUEST_PRINCIPAL, RequestPrincipal::Public);
            return;
        }

        let config = match get_config_from_depot(depot) {
            Ok(cfg) => cfg,
            Err(e) => {
                error!(error = ?e, "Failed to get config from depot");
                res.status_code(salvo::http::StatusCode::INTERNAL_SERVER_ERROR);
                ctrl.skip_rest();
                return;
            }
        };

        let Some(token) = bearer_token(req) else {
            tracing::trace!("No bearer token presented");
            depot.insert(depot_keys::REQUEST_PRINCIPAL, RequestPrincipal::Public);
            return;
        };

        match verify_token(&config.auth.secret, token) {
            Ok(claims) => {
                tracing::debug!(user = %claims.sub, role = %claims.role, "Token verified");
                depot.insert(
                    depot_keys::REQUEST_PRINCIPAL,
                    RequestPrincipal::Authenticated(claims),
                );
            }
            Err(_invalid) => {
                tracing::debug!("Token failed verification, treating as public");
                depot.insert(depot_keys::REQUEST_PRINCIPAL, RequestPrincipal::Public);
            }
        }
    }
}

/// ## Summary
/// Middleware handler for authentication.
/// Use this as a handler in routes to attach the request principal.
pub struct AuthMiddleware;
