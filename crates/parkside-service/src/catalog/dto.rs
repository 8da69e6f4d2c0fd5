//! Wire-facing representations of persisted entities.
//!
//! Mapping between storage rows and DTOs is hand-written and bidirectional at
//! the field level; the storage schema never leaks onto the wire directly.

use serde::{Deserialize, Serialize};

use parkside_core::types::Difficulty;
use parkside_db::model::park::NationalPark;
use parkside_db::model::trail::Trail;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NationalParkDto {
    pub id: uuid::Uuid,
    pub name: String,
    pub state: String,
    pub established: chrono::NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture: Option<Vec<u8>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrailDto {
    pub id: uuid::Uuid,
    pub name: String,
    pub distance_km: f64,
    pub elevation_gain_m: f64,
    pub difficulty: Difficulty,
    pub national_park_id: uuid::Uuid,
}

#[must_use]
pub fn park_to_dto(park: &NationalPark) -> NationalParkDto {
    NationalParkDto {
        id: park.id,
        name: park.name.clone(),
        state: park.state.clone(),
        established: park.established,
        picture: park.picture.clone(),
    }
}

#[must_use]
pub fn trail_to_dto(trail: &Trail) -> TrailDto {
    TrailDto {
        id: trail.id,
        name: trail.name.clone(),
        distance_km: trail.distance_km,
        elevation_gain_m: trail.elevation_gain_m,
        difficulty: trail.difficulty.into(),
        national_park_id: trail.national_park_id,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parkside_db::db::enums::TrailDifficulty;

    #[test]
    fn park_maps_field_for_field() {
        let park = NationalPark {
            id: uuid::Uuid::now_v7(),
            name: "Yellowstone".to_string(),
            state: "Wyoming".to_string(),
            established: chrono::NaiveDate::from_ymd_opt(1872, 3, 1).expect("valid date"),
            picture: Some(vec![1, 2, 3]),
            created_at: chrono::Utc::now(),
        };

        let dto = park_to_dto(&park);
        assert_eq!(dto.id, park.id);
        assert_eq!(dto.name, park.name);
        assert_eq!(dto.state, park.state);
        assert_eq!(dto.established, park.established);
        assert_eq!(dto.picture, park.picture);
    }

    #[test]
    fn trail_maps_field_for_field() {
        let park_id = uuid::Uuid::now_v7();
        let trail = Trail {
            id: uuid::Uuid::now_v7(),
            name: "Mist Trail".to_string(),
            distance_km: 4.8,
            elevation_gain_m: 600.0,
            difficulty: TrailDifficulty::Difficult,
            national_park_id: park_id,
            created_at: chrono::Utc::now(),
        };

        let dto = trail_to_dto(&trail);
        assert_eq!(dto.id, trail.id);
        assert_eq!(dto.name, trail.name);
        assert_eq!(dto.difficulty, Difficulty::Difficult);
        assert_eq!(dto.national_park_id, park_id);
    }
}
