//! Authentication and authorization flow.
//!
//! ## Module Organization
//!
//! - `password`: Password hashing and verification with Argon2
//! - `token`: Bearer token issuance and verification (HS256, shared secret)
//! - `policy`: Per-endpoint authorization policies and enforcement
//! - `depot`: Helpers for extracting the request principal from Salvo requests

pub mod depot;
pub mod password;
pub mod policy;
pub mod token;

// Re-export commonly used types at module level
pub use depot::{RequestPrincipal, depot_keys, get_principal_from_depot};
pub use policy::{ADMIN_ONLY, EndpointPolicy, authorize};
pub use token::{TokenClaims, issue_token, verify_token};
