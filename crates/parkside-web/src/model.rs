//! Client-side views of the API's wire types. Kept independent of the API
//! crate so the front-end only couples to the JSON contract.

use serde::{Deserialize, Serialize};

use parkside_core::types::{Difficulty, Role};

#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Response body of `POST /api/v1/users/authenticate`.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthToken {
    pub token: String,
    pub username: String,
    pub role: Role,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NationalPark {
    pub id: uuid::Uuid,
    pub name: String,
    pub state: String,
    pub established: chrono::NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture: Option<Vec<u8>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trail {
    pub id: uuid::Uuid,
    pub name: String,
    pub distance_km: f64,
    pub elevation_gain_m: f64,
    pub difficulty: Difficulty,
    pub national_park_id: uuid::Uuid,
}

/// Create/update payload for parks. The id must match the path id on update.
#[derive(Debug, Clone, Serialize)]
pub struct ParkPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<uuid::Uuid>,
    pub name: String,
    pub state: String,
    pub established: chrono::NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picture: Option<Vec<u8>>,
}

/// Create/update payload for trails.
#[derive(Debug, Clone, Serialize)]
pub struct TrailPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<uuid::Uuid>,
    pub name: String,
    pub distance_km: f64,
    pub elevation_gain_m: f64,
    pub difficulty: Difficulty,
    pub national_park_id: uuid::Uuid,
}
