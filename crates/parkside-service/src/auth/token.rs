//! Bearer token issuance and verification.
//!
//! Tokens are HS256-signed with a symmetric secret shared between issuance
//! and the API's verification middleware. Claims carry the username and role;
//! there is no `exp` claim and no server-side revocation, so a token stays
//! valid until the secret rotates.

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use parkside_core::types::Role;

use crate::error::{ServiceError, ServiceResult};

/// Claims embedded in an issued token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Username the token was issued to.
    pub sub: String,
    /// Role at issuance time; not re-checked against live user state.
    pub role: Role,
    /// Issuance time, seconds since the epoch.
    pub iat: u64,
}

fn unix_now() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}

/// ## Summary
/// Issues a signed token embedding the given username and role.
///
/// ## Errors
/// Returns an error if token encoding fails.
pub fn issue_token(secret: &str, username: &str, role: Role) -> ServiceResult<String> {
    let claims = TokenClaims {
        sub: username.to_string(),
        role,
        iat: unix_now(),
    };

    jsonwebtoken::encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| ServiceError::InvalidConfiguration(format!("Failed to sign token: {e}")))
}

/// ## Summary
/// Verifies a token's signature and structure and returns its claims.
///
/// Expiry validation is disabled deliberately: issued tokens carry no `exp`
/// claim and remain valid until the signing secret changes.
///
/// ## Errors
/// Returns `NotAuthenticated` for any malformed, tampered, or wrongly-signed
/// token; the reason is not distinguished to the caller.
pub fn verify_token(secret: &str, token: &str) -> ServiceResult<TokenClaims> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = false;
    validation.required_spec_claims.clear();

    jsonwebtoken::decode::<TokenClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|err| {
        tracing::trace!(error = %err, "Token verification failed");
        ServiceError::NotAuthenticated
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "unit-test-signing-secret";

    #[test_log::test]
    fn issued_token_round_trips_claims() {
        let token = issue_token(SECRET, "ranger", Role::Admin).expect("issue");
        let claims = verify_token(SECRET, &token).expect("verify");

        assert_eq!(claims.sub, "ranger");
        assert_eq!(claims.role, Role::Admin);
        assert!(claims.iat > 0);
    }

    #[test_log::test]
    fn role_claim_matches_issued_role() {
        for role in [Role::Admin, Role::User] {
            let token = issue_token(SECRET, "somebody", role).expect("issue");
            let claims = verify_token(SECRET, &token).expect("verify");
            assert_eq!(claims.role, role);
        }
    }

    #[test_log::test]
    fn wrong_secret_is_rejected() {
        let token = issue_token(SECRET, "ranger", Role::User).expect("issue");
        let result = verify_token("some-other-secret", &token);
        assert!(matches!(result, Err(ServiceError::NotAuthenticated)));
    }

    #[test_log::test]
    fn garbage_token_is_rejected() {
        for garbage in ["", "not.a.token", "aaaa.bbbb.cccc"] {
            let result = verify_token(SECRET, garbage);
            assert!(matches!(result, Err(ServiceError::NotAuthenticated)));
        }
    }

    #[test_log::test]
    fn tokens_without_expiry_stay_valid() {
        // A token minted long ago must still verify; there is no exp claim.
        let claims = TokenClaims {
            sub: "ranger".to_string(),
            role: Role::User,
            iat: 1,
        };
        let token = jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .expect("encode");

        let verified = verify_token(SECRET, &token).expect("verify");
        assert_eq!(verified, claims);
    }
}
