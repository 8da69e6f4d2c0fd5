use diesel::{pg::Pg, prelude::*};

use crate::db::schema;

#[derive(Debug, Clone, PartialEq, Eq, Identifiable, Queryable, Selectable)]
#[diesel(table_name = schema::national_park)]
#[diesel(check_for_backend(Pg))]
pub struct NationalPark {
    pub id: uuid::Uuid,
    pub name: String,
    pub state: String,
    pub established: chrono::NaiveDate,
    pub picture: Option<Vec<u8>>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = schema::national_park)]
pub struct NewNationalPark<'a> {
    pub id: uuid::Uuid,
    pub name: &'a str,
    pub state: &'a str,
    pub established: chrono::NaiveDate,
    pub picture: Option<&'a [u8]>,
}

/// Full-row replacement used by update; `picture: None` clears the column.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = schema::national_park)]
#[diesel(treat_none_as_null = true)]
pub struct ParkChangeset<'a> {
    pub name: &'a str,
    pub state: &'a str,
    pub established: chrono::NaiveDate,
    pub picture: Option<&'a [u8]>,
}
