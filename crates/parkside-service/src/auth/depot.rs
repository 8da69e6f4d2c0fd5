//! Depot helpers for extracting the request principal from Salvo requests.

use crate::auth::token::TokenClaims;

pub mod depot_keys {
    pub const REQUEST_PRINCIPAL: &str = "__request_principal";
}

/// Represents the verified caller of a request, or public access.
#[derive(Debug, Clone)]
pub enum RequestPrincipal {
    /// Verified token claims.
    Authenticated(TokenClaims),
    /// No token, or a token that failed verification.
    Public,
}

/// Get the request principal from the depot.
///
/// A missing entry means the auth middleware did not run; treat it as public
/// rather than failing the request.
#[must_use]
pub fn get_principal_from_depot(depot: &salvo::Depot) -> RequestPrincipal {
    depot
        .get::<RequestPrincipal>(depot_keys::REQUEST_PRINCIPAL)
        .cloned()
        .unwrap_or(RequestPrincipal::Public)
}
