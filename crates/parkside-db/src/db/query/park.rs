//! Query functions for national parks.

use diesel::dsl::exists;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use parkside_core::types::normalize_name;

use super::{btrim, lower};
use crate::db::connection::DbConnection;
use crate::db::schema::national_park;
use crate::error::DbResult;
use crate::model::park::{NationalPark, NewNationalPark, ParkChangeset};

/// ## Summary
/// Lists all parks ordered by name.
///
/// ## Errors
/// Returns a database error if the query fails.
pub async fn list(conn: &mut DbConnection<'_>) -> DbResult<Vec<NationalPark>> {
    let parks = national_park::table
        .order(national_park::name.asc())
        .select(NationalPark::as_select())
        .load::<NationalPark>(conn)
        .await?;
    Ok(parks)
}

/// ## Summary
/// Returns the first park by name order, if any.
///
/// ## Errors
/// Returns a database error if the query fails.
pub async fn first(conn: &mut DbConnection<'_>) -> DbResult<Option<NationalPark>> {
    let park = national_park::table
        .order(national_park::name.asc())
        .select(NationalPark::as_select())
        .first::<NationalPark>(conn)
        .await
        .optional()?;
    Ok(park)
}

/// ## Summary
/// Finds a park by id.
///
/// ## Errors
/// Returns a database error if the query fails.
pub async fn find(conn: &mut DbConnection<'_>, id: uuid::Uuid) -> DbResult<Option<NationalPark>> {
    let park = national_park::table
        .filter(national_park::id.eq(id))
        .select(NationalPark::as_select())
        .first::<NationalPark>(conn)
        .await
        .optional()?;
    Ok(park)
}

/// ## Summary
/// Whether a park with the given id exists.
///
/// ## Errors
/// Returns a database error if the query fails.
pub async fn exists_by_id(conn: &mut DbConnection<'_>, id: uuid::Uuid) -> DbResult<bool> {
    let found = diesel::select(exists(
        national_park::table.filter(national_park::id.eq(id)),
    ))
    .get_result::<bool>(conn)
    .await?;
    Ok(found)
}

/// ## Summary
/// Whether a park with the given name exists, compared case-insensitively
/// with surrounding whitespace ignored.
///
/// ## Errors
/// Returns a database error if the query fails.
pub async fn name_exists(conn: &mut DbConnection<'_>, name: &str) -> DbResult<bool> {
    let found = diesel::select(exists(
        national_park::table.filter(lower(btrim(national_park::name)).eq(normalize_name(name))),
    ))
    .get_result::<bool>(conn)
    .await?;
    Ok(found)
}

/// ## Summary
/// Inserts a park and returns the stored row.
///
/// ## Errors
/// Returns a database error if the query fails.
pub async fn insert(
    conn: &mut DbConnection<'_>,
    new_park: &NewNationalPark<'_>,
) -> DbResult<NationalPark> {
    let park = diesel::insert_into(national_park::table)
        .values(new_park)
        .returning(NationalPark::as_select())
        .get_result::<NationalPark>(conn)
        .await?;
    Ok(park)
}

/// ## Summary
/// Replaces a park row; returns the number of rows updated.
///
/// ## Errors
/// Returns a database error if the query fails.
pub async fn update(
    conn: &mut DbConnection<'_>,
    id: uuid::Uuid,
    changeset: &ParkChangeset<'_>,
) -> DbResult<usize> {
    let rows = diesel::update(national_park::table.filter(national_park::id.eq(id)))
        .set(changeset)
        .execute(conn)
        .await?;
    Ok(rows)
}

/// ## Summary
/// Deletes a park by id; returns the number of rows deleted.
///
/// ## Errors
/// Returns a database error if the query fails.
pub async fn delete(conn: &mut DbConnection<'_>, id: uuid::Uuid) -> DbResult<usize> {
    let rows = diesel::delete(national_park::table.filter(national_park::id.eq(id)))
        .execute(conn)
        .await?;
    Ok(rows)
}
