//! Trail catalog operations: list, fetch, filter by park, create, update, delete.

use parkside_core::types::Difficulty;
use parkside_db::db::connection::DbConnection;
use parkside_db::db::query;
use parkside_db::model::trail::{NewTrail, TrailChangeset};

use crate::catalog::dto::{TrailDto, trail_to_dto};
use crate::error::{ServiceError, ServiceResult};

/// Fields accepted when creating or replacing a trail.
#[derive(Debug, Clone)]
pub struct TrailDraft<'a> {
    pub name: &'a str,
    pub distance_km: f64,
    pub elevation_gain_m: f64,
    pub difficulty: Difficulty,
    pub national_park_id: uuid::Uuid,
}

impl TrailDraft<'_> {
    fn validate(&self) -> ServiceResult<()> {
        if self.name.trim().is_empty() {
            return Err(ServiceError::ValidationError(
                "Trail name is required".to_string(),
            ));
        }
        if self.distance_km <= 0.0 {
            return Err(ServiceError::ValidationError(
                "Trail distance must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// ## Summary
/// Lists all trails as DTOs.
///
/// ## Errors
/// Returns database errors.
pub async fn list_trails(conn: &mut DbConnection<'_>) -> ServiceResult<Vec<TrailDto>> {
    let trails = query::trail::list(conn).await?;
    Ok(trails.iter().map(trail_to_dto).collect())
}

/// ## Summary
/// Fetches one trail by id.
///
/// ## Errors
/// Returns `NotFound` if no trail has the given id.
pub async fn get_trail(conn: &mut DbConnection<'_>, id: uuid::Uuid) -> ServiceResult<TrailDto> {
    let trail = query::trail::find(conn, id)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("Trail {id}")))?;
    Ok(trail_to_dto(&trail))
}

/// ## Summary
/// Lists trails belonging to the given park.
///
/// ## Errors
/// Returns database errors.
pub async fn trails_in_park(
    conn: &mut DbConnection<'_>,
    national_park_id: uuid::Uuid,
) -> ServiceResult<Vec<TrailDto>> {
    let trails = query::trail::list_in_park(conn, national_park_id).await?;
    Ok(trails.iter().map(trail_to_dto).collect())
}

/// ## Summary
/// Creates a trail after checking name uniqueness.
///
/// The referenced park is not pre-checked; a dangling reference fails at the
/// foreign key and surfaces as a store error.
///
/// ## Errors
/// Returns `Conflict` on a duplicate name, `ValidationError` on bad fields,
/// or database errors.
#[tracing::instrument(skip(conn, draft), fields(name = %draft.name))]
pub async fn create_trail(
    conn: &mut DbConnection<'_>,
    draft: &TrailDraft<'_>,
) -> ServiceResult<TrailDto> {
    draft.validate()?;

    if query::trail::name_exists(conn, draft.name).await? {
        return Err(ServiceError::Conflict(format!(
            "Trail {} already exists",
            draft.name
        )));
    }

    let new_trail = NewTrail {
        id: uuid::Uuid::now_v7(),
        name: draft.name,
        distance_km: draft.distance_km,
        elevation_gain_m: draft.elevation_gain_m,
        difficulty: draft.difficulty.into(),
        national_park_id: draft.national_park_id,
    };

    let trail = match query::trail::insert(conn, &new_trail).await {
        Ok(t) => t,
        Err(e) if e.is_unique_violation() => {
            return Err(ServiceError::Conflict(format!(
                "Trail {} already exists",
                draft.name
            )));
        }
        Err(e) => return Err(e.into()),
    };

    tracing::info!(trail_id = %trail.id, name = %trail.name, "Trail created");

    Ok(trail_to_dto(&trail))
}

/// ## Summary
/// Replaces an existing trail's fields.
///
/// ## Errors
/// Returns `NotFound` if the id does not exist, `ValidationError` on bad
/// fields, or database errors.
#[tracing::instrument(skip(conn, draft), fields(name = %draft.name))]
pub async fn update_trail(
    conn: &mut DbConnection<'_>,
    id: uuid::Uuid,
    draft: &TrailDraft<'_>,
) -> ServiceResult<()> {
    draft.validate()?;

    if !query::trail::exists_by_id(conn, id).await? {
        return Err(ServiceError::NotFound(format!("Trail {id}")));
    }

    let changeset = TrailChangeset {
        name: draft.name,
        distance_km: draft.distance_km,
        elevation_gain_m: draft.elevation_gain_m,
        difficulty: draft.difficulty.into(),
        national_park_id: draft.national_park_id,
    };

    query::trail::update(conn, id, &changeset).await?;

    tracing::info!(trail_id = %id, "Trail updated");

    Ok(())
}

/// ## Summary
/// Deletes a trail after checking it exists.
///
/// ## Errors
/// Returns `NotFound` if the id does not exist, or database errors.
#[tracing::instrument(skip(conn))]
pub async fn delete_trail(conn: &mut DbConnection<'_>, id: uuid::Uuid) -> ServiceResult<()> {
    if !query::trail::exists_by_id(conn, id).await? {
        return Err(ServiceError::NotFound(format!("Trail {id}")));
    }

    query::trail::delete(conn, id).await?;

    tracing::info!(trail_id = %id, "Trail deleted");

    Ok(())
}
