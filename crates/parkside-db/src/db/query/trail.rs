//! Query functions for trails.

use diesel::dsl::exists;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use parkside_core::types::normalize_name;

use super::{btrim, lower};
use crate::db::connection::DbConnection;
use crate::db::schema::trail;
use crate::error::DbResult;
use crate::model::trail::{NewTrail, Trail, TrailChangeset};

/// ## Summary
/// Lists all trails ordered by name.
///
/// ## Errors
/// Returns a database error if the query fails.
pub async fn list(conn: &mut DbConnection<'_>) -> DbResult<Vec<Trail>> {
    let trails = trail::table
        .order(trail::name.asc())
        .select(Trail::as_select())
        .load::<Trail>(conn)
        .await?;
    Ok(trails)
}

/// ## Summary
/// Finds a trail by id.
///
/// ## Errors
/// Returns a database error if the query fails.
pub async fn find(conn: &mut DbConnection<'_>, id: uuid::Uuid) -> DbResult<Option<Trail>> {
    let found = trail::table
        .filter(trail::id.eq(id))
        .select(Trail::as_select())
        .first::<Trail>(conn)
        .await
        .optional()?;
    Ok(found)
}

/// ## Summary
/// Lists trails belonging to the given park, ordered by name.
///
/// ## Errors
/// Returns a database error if the query fails.
pub async fn list_in_park(
    conn: &mut DbConnection<'_>,
    national_park_id: uuid::Uuid,
) -> DbResult<Vec<Trail>> {
    let trails = trail::table
        .filter(trail::national_park_id.eq(national_park_id))
        .order(trail::name.asc())
        .select(Trail::as_select())
        .load::<Trail>(conn)
        .await?;
    Ok(trails)
}

/// ## Summary
/// Whether a trail with the given id exists.
///
/// ## Errors
/// Returns a database error if the query fails.
pub async fn exists_by_id(conn: &mut DbConnection<'_>, id: uuid::Uuid) -> DbResult<bool> {
    let found = diesel::select(exists(trail::table.filter(trail::id.eq(id))))
        .get_result::<bool>(conn)
        .await?;
    Ok(found)
}

/// ## Summary
/// Whether a trail with the given name exists, compared case-insensitively
/// with surrounding whitespace ignored.
///
/// ## Errors
/// Returns a database error if the query fails.
pub async fn name_exists(conn: &mut DbConnection<'_>, name: &str) -> DbResult<bool> {
    let found = diesel::select(exists(
        trail::table.filter(lower(btrim(trail::name)).eq(normalize_name(name))),
    ))
    .get_result::<bool>(conn)
    .await?;
    Ok(found)
}

/// ## Summary
/// Inserts a trail and returns the stored row.
///
/// ## Errors
/// Returns a database error if the query fails.
pub async fn insert(conn: &mut DbConnection<'_>, new_trail: &NewTrail<'_>) -> DbResult<Trail> {
    let stored = diesel::insert_into(trail::table)
        .values(new_trail)
        .returning(Trail::as_select())
        .get_result::<Trail>(conn)
        .await?;
    Ok(stored)
}

/// ## Summary
/// Replaces a trail row; returns the number of rows updated.
///
/// ## Errors
/// Returns a database error if the query fails.
pub async fn update(
    conn: &mut DbConnection<'_>,
    id: uuid::Uuid,
    changeset: &TrailChangeset<'_>,
) -> DbResult<usize> {
    let rows = diesel::update(trail::table.filter(trail::id.eq(id)))
        .set(changeset)
        .execute(conn)
        .await?;
    Ok(rows)
}

/// ## Summary
/// Deletes a trail by id; returns the number of rows deleted.
///
/// ## Errors
/// Returns a database error if the query fails.
pub async fn delete(conn: &mut DbConnection<'_>, id: uuid::Uuid) -> DbResult<usize> {
    let rows = diesel::delete(trail::table.filter(trail::id.eq(id)))
        .execute(conn)
        .await?;
    Ok(rows)
}
