//! Cookie-session storage for the relayed bearer token and the displayed
//! account identity. The two entries are written together at login but read
//! independently: the token is what the API trusts, the account entry only
//! drives page rendering and navigation gates.

use salvo::Depot;
use salvo::session::SessionDepotExt;
use serde::{Deserialize, Serialize};

use crate::error::{WebError, WebResult};
use crate::model::AuthToken;
use parkside_core::types::Role;

pub mod keys {
    pub const TOKEN: &str = "api_token";
    pub const ACCOUNT: &str = "account";
}

/// Identity snapshot taken from the authenticate response, for rendering and
/// the front-end's mirror of the API's role gates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionAccount {
    pub username: String,
    pub role: Role,
}

impl SessionAccount {
    #[must_use]
    pub fn is_admin(&self) -> bool {
        matches!(self.role, Role::Admin)
    }
}

/// Returns the relayed token, treating the post-logout empty string as
/// absent.
#[must_use]
pub fn current_token(depot: &Depot) -> Option<String> {
    depot
        .session()
        .and_then(|s| s.get::<String>(keys::TOKEN))
        .filter(|t| !t.is_empty())
}

#[must_use]
pub fn current_account(depot: &Depot) -> Option<SessionAccount> {
    depot
        .session()
        .and_then(|s| s.get::<SessionAccount>(keys::ACCOUNT))
}

/// ## Summary
/// Stores the issued token and the account identity in the session.
///
/// ## Errors
/// Returns an error if no session is attached or serialization fails.
pub fn store_login(depot: &mut Depot, auth: &AuthToken) -> WebResult<()> {
    let session = depot.session_mut().ok_or(WebError::SessionUnavailable)?;
    session
        .insert(keys::TOKEN, &auth.token)
        .map_err(|e| WebError::SessionWrite(e.to_string()))?;
    session
        .insert(
            keys::ACCOUNT,
            SessionAccount {
                username: auth.username.clone(),
                role: auth.role,
            },
        )
        .map_err(|e| WebError::SessionWrite(e.to_string()))?;
    Ok(())
}

/// ## Summary
/// Clears the account entry and blanks the token entry. The token itself
/// stays valid on the API side; there is nothing to revoke.
///
/// ## Errors
/// Returns an error if no session is attached or serialization fails.
pub fn clear_login(depot: &mut Depot) -> WebResult<()> {
    let session = depot.session_mut().ok_or(WebError::SessionUnavailable)?;
    session.remove(keys::ACCOUNT);
    session
        .insert(keys::TOKEN, String::new())
        .map_err(|e| WebError::SessionWrite(e.to_string()))?;
    Ok(())
}
