//! Per-endpoint authorization policies.
//!
//! Every endpoint declares one of three policies. Enforcement happens inside
//! the handler against the request principal the auth middleware placed in
//! the depot: missing/invalid credentials on a non-public endpoint fail with
//! `NotAuthenticated` (401), a valid principal outside the allow-set fails
//! with `AuthorizationError` (403).

use parkside_core::types::Role;

use crate::auth::depot::RequestPrincipal;
use crate::error::{ServiceError, ServiceResult};

/// Authorization policy declared per endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointPolicy {
    /// No credentials required.
    Public,
    /// Any verified token.
    Authenticated,
    /// A verified token whose role is in the allow-set.
    RoleRestricted(&'static [Role]),
}

/// Mutation endpoints are restricted to administrators.
pub const ADMIN_ONLY: EndpointPolicy = EndpointPolicy::RoleRestricted(&[Role::Admin]);

/// ## Summary
/// Checks the request principal against an endpoint policy.
///
/// ## Errors
/// Returns `NotAuthenticated` if the policy requires a token and none was
/// presented or verified, and `AuthorizationError` if the token is valid but
/// its role is not in the allow-set.
pub fn authorize(policy: EndpointPolicy, principal: &RequestPrincipal) -> ServiceResult<()> {
    match policy {
        EndpointPolicy::Public => Ok(()),
        EndpointPolicy::Authenticated => match principal {
            RequestPrincipal::Authenticated(_) => Ok(()),
            RequestPrincipal::Public => Err(ServiceError::NotAuthenticated),
        },
        EndpointPolicy::RoleRestricted(allowed) => match principal {
            RequestPrincipal::Authenticated(claims) if allowed.contains(&claims.role) => Ok(()),
            RequestPrincipal::Authenticated(claims) => {
                tracing::warn!(user = %claims.sub, role = %claims.role, "Role not permitted");
                Err(ServiceError::AuthorizationError(format!(
                    "Role {} is not permitted here",
                    claims.role
                )))
            }
            RequestPrincipal::Public => Err(ServiceError::NotAuthenticated),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::token::TokenClaims;

    fn principal(role: Role) -> RequestPrincipal {
        RequestPrincipal::Authenticated(TokenClaims {
            sub: "somebody".to_string(),
            role,
            iat: 0,
        })
    }

    #[test_log::test]
    fn public_endpoints_accept_anyone() {
        assert!(authorize(EndpointPolicy::Public, &RequestPrincipal::Public).is_ok());
        assert!(authorize(EndpointPolicy::Public, &principal(Role::User)).is_ok());
    }

    #[test_log::test]
    fn authenticated_endpoints_reject_missing_tokens() {
        let result = authorize(EndpointPolicy::Authenticated, &RequestPrincipal::Public);
        assert!(matches!(result, Err(ServiceError::NotAuthenticated)));

        assert!(authorize(EndpointPolicy::Authenticated, &principal(Role::User)).is_ok());
        assert!(authorize(EndpointPolicy::Authenticated, &principal(Role::Admin)).is_ok());
    }

    #[test_log::test]
    fn role_restricted_endpoints_distinguish_401_from_403() {
        // No token at all: not authenticated.
        let result = authorize(ADMIN_ONLY, &RequestPrincipal::Public);
        assert!(matches!(result, Err(ServiceError::NotAuthenticated)));

        // Valid token, wrong role: authorization error.
        let result = authorize(ADMIN_ONLY, &principal(Role::User));
        assert!(matches!(result, Err(ServiceError::AuthorizationError(_))));

        // Correct role: allowed.
        assert!(authorize(ADMIN_ONLY, &principal(Role::Admin)).is_ok());
    }
}
