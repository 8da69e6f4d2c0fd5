use diesel::{pg::Pg, prelude::*};

use crate::db::enums::TrailDifficulty;
use crate::db::schema;
use crate::model::park::NationalPark;

#[derive(Debug, Clone, PartialEq, Identifiable, Queryable, Selectable, Associations)]
#[diesel(table_name = schema::trail)]
#[diesel(check_for_backend(Pg))]
#[diesel(belongs_to(NationalPark, foreign_key = national_park_id))]
pub struct Trail {
    pub id: uuid::Uuid,
    pub name: String,
    pub distance_km: f64,
    pub elevation_gain_m: f64,
    pub difficulty: TrailDifficulty,
    pub national_park_id: uuid::Uuid,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = schema::trail)]
pub struct NewTrail<'a> {
    pub id: uuid::Uuid,
    pub name: &'a str,
    pub distance_km: f64,
    pub elevation_gain_m: f64,
    pub difficulty: TrailDifficulty,
    pub national_park_id: uuid::Uuid,
}

/// Full-row replacement used by update.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = schema::trail)]
pub struct TrailChangeset<'a> {
    pub name: &'a str,
    pub distance_km: f64,
    pub elevation_gain_m: f64,
    pub difficulty: TrailDifficulty,
    pub national_park_id: uuid::Uuid,
}
