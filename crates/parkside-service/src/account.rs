//! Account operations: credential verification, token issuance, registration.

use serde::{Deserialize, Serialize};

use parkside_core::config::Settings;
use parkside_core::types::Role;
use parkside_db::db::connection::DbConnection;
use parkside_db::db::query;
use parkside_db::model::user::{NewUser, User};

use crate::auth::{password, token};
use crate::error::{ServiceError, ServiceResult};

/// Payload returned on successful authentication.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthTokenResponse {
    pub token: String,
    pub username: String,
    pub role: Role,
}

/// ## Summary
/// Verifies credentials and issues a signed token embedding username and role.
///
/// Username lookup is case-sensitive. An unknown username and a wrong
/// password produce the identical error so callers cannot enumerate accounts.
///
/// ## Errors
/// Returns `InvalidCredentials` on any mismatch, or database errors.
#[tracing::instrument(skip(conn, secret, password))]
pub async fn authenticate(
    conn: &mut DbConnection<'_>,
    secret: &str,
    username: &str,
    password: &str,
) -> ServiceResult<AuthTokenResponse> {
    let Some(user) = query::user::find_by_username(conn, username).await? else {
        tracing::debug!("Unknown username");
        return Err(ServiceError::InvalidCredentials);
    };

    if password::verify_password(password, &user.password_hash).is_err() {
        tracing::debug!(user = %user.username, "Password mismatch");
        return Err(ServiceError::InvalidCredentials);
    }

    let role = Role::from(user.role);
    let token = token::issue_token(secret, &user.username, role)?;

    tracing::info!(user = %user.username, %role, "User authenticated");

    Ok(AuthTokenResponse {
        token,
        username: user.username,
        role,
    })
}

/// ## Summary
/// Registers a new account with a hashed password.
///
/// The username pre-check is case-sensitive; the storage unique constraint
/// backstops a concurrent registration slipping past it, and both paths
/// surface as the same duplicate error.
///
/// ## Errors
/// Returns `DuplicateUsername` if the username is taken, `ValidationError`
/// for empty fields, or database errors.
#[tracing::instrument(skip(conn, password))]
pub async fn register(
    conn: &mut DbConnection<'_>,
    username: &str,
    password: &str,
    role: Role,
) -> ServiceResult<User> {
    if username.is_empty() || password.is_empty() {
        return Err(ServiceError::ValidationError(
            "Username and password are required".to_string(),
        ));
    }

    if query::user::username_exists(conn, username).await? {
        return Err(ServiceError::DuplicateUsername);
    }

    let password_hash = password::hash_password(password)?;

    let new_user = NewUser {
        id: uuid::Uuid::now_v7(),
        username,
        password_hash: &password_hash,
        role: role.into(),
    };

    let user = match query::user::insert(conn, &new_user).await {
        Ok(u) => u,
        Err(e) if e.is_unique_violation() => return Err(ServiceError::DuplicateUsername),
        Err(e) => return Err(e.into()),
    };

    tracing::info!(user = %user.username, %role, "User registered");

    Ok(user)
}

/// ## Summary
/// Seeds the configured admin account if it does not exist yet.
///
/// ## Errors
/// Returns an error if the seed registration fails for any reason other than
/// the account already existing.
#[tracing::instrument(skip(conn, settings))]
pub async fn ensure_admin(conn: &mut DbConnection<'_>, settings: &Settings) -> ServiceResult<()> {
    let Some(admin) = &settings.auth.admin else {
        tracing::debug!("No admin seed configured");
        return Ok(());
    };

    if query::user::username_exists(conn, &admin.username).await? {
        tracing::debug!(user = %admin.username, "Admin account already present");
        return Ok(());
    }

    tracing::info!(user = %admin.username, "Seeding admin account");

    match register(conn, &admin.username, &admin.password, Role::Admin).await {
        Ok(_) | Err(ServiceError::DuplicateUsername) => Ok(()),
        Err(e) => Err(e),
    }
}
