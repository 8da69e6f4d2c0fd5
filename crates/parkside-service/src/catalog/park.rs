//! Park catalog operations: list, fetch, create, update, delete.

use parkside_db::db::connection::DbConnection;
use parkside_db::db::query;
use parkside_db::model::park::{NewNationalPark, ParkChangeset};

use crate::catalog::dto::{NationalParkDto, park_to_dto};
use crate::error::{ServiceError, ServiceResult};

/// Fields accepted when creating or replacing a park.
#[derive(Debug, Clone)]
pub struct ParkDraft<'a> {
    pub name: &'a str,
    pub state: &'a str,
    pub established: chrono::NaiveDate,
    pub picture: Option<&'a [u8]>,
}

impl ParkDraft<'_> {
    fn validate(&self) -> ServiceResult<()> {
        if self.name.trim().is_empty() {
            return Err(ServiceError::ValidationError(
                "Park name is required".to_string(),
            ));
        }
        if self.state.trim().is_empty() {
            return Err(ServiceError::ValidationError(
                "Park state is required".to_string(),
            ));
        }
        Ok(())
    }
}

/// ## Summary
/// Lists all parks as DTOs.
///
/// ## Errors
/// Returns database errors.
pub async fn list_parks(conn: &mut DbConnection<'_>) -> ServiceResult<Vec<NationalParkDto>> {
    let parks = query::park::list(conn).await?;
    Ok(parks.iter().map(park_to_dto).collect())
}

/// ## Summary
/// Returns only the first park by name order. Narrowed contract served to the
/// second API version.
///
/// ## Errors
/// Returns database errors.
pub async fn first_park(conn: &mut DbConnection<'_>) -> ServiceResult<Option<NationalParkDto>> {
    let park = query::park::first(conn).await?;
    Ok(park.as_ref().map(park_to_dto))
}

/// ## Summary
/// Fetches one park by id.
///
/// ## Errors
/// Returns `NotFound` if no park has the given id.
pub async fn get_park(conn: &mut DbConnection<'_>, id: uuid::Uuid) -> ServiceResult<NationalParkDto> {
    let park = query::park::find(conn, id)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("National park {id}")))?;
    Ok(park_to_dto(&park))
}

/// ## Summary
/// Creates a park after checking name uniqueness.
///
/// The existence check and the insert are separate round trips; the storage
/// unique index catches a concurrent create, and both paths surface as the
/// same conflict error.
///
/// ## Errors
/// Returns `Conflict` on a duplicate name, `ValidationError` on empty fields,
/// or database errors.
#[tracing::instrument(skip(conn, draft), fields(name = %draft.name))]
pub async fn create_park(
    conn: &mut DbConnection<'_>,
    draft: &ParkDraft<'_>,
) -> ServiceResult<NationalParkDto> {
    draft.validate()?;

    if query::park::name_exists(conn, draft.name).await? {
        return Err(ServiceError::Conflict(format!(
            "National park {} already exists",
            draft.name
        )));
    }

    let new_park = NewNationalPark {
        id: uuid::Uuid::now_v7(),
        name: draft.name,
        state: draft.state,
        established: draft.established,
        picture: draft.picture,
    };

    let park = match query::park::insert(conn, &new_park).await {
        Ok(p) => p,
        Err(e) if e.is_unique_violation() => {
            return Err(ServiceError::Conflict(format!(
                "National park {} already exists",
                draft.name
            )));
        }
        Err(e) => return Err(e.into()),
    };

    tracing::info!(park_id = %park.id, name = %park.name, "National park created");

    Ok(park_to_dto(&park))
}

/// ## Summary
/// Replaces an existing park's fields.
///
/// ## Errors
/// Returns `NotFound` if the id does not exist, `ValidationError` on empty
/// fields, or database errors.
#[tracing::instrument(skip(conn, draft), fields(name = %draft.name))]
pub async fn update_park(
    conn: &mut DbConnection<'_>,
    id: uuid::Uuid,
    draft: &ParkDraft<'_>,
) -> ServiceResult<()> {
    draft.validate()?;

    if !query::park::exists_by_id(conn, id).await? {
        return Err(ServiceError::NotFound(format!("National park {id}")));
    }

    let changeset = ParkChangeset {
        name: draft.name,
        state: draft.state,
        established: draft.established,
        picture: draft.picture,
    };

    query::park::update(conn, id, &changeset).await?;

    tracing::info!(park_id = %id, "National park updated");

    Ok(())
}

/// ## Summary
/// Deletes a park after checking it exists.
///
/// ## Errors
/// Returns `NotFound` if the id does not exist, or database errors.
#[tracing::instrument(skip(conn))]
pub async fn delete_park(conn: &mut DbConnection<'_>, id: uuid::Uuid) -> ServiceResult<()> {
    if !query::park::exists_by_id(conn, id).await? {
        return Err(ServiceError::NotFound(format!("National park {id}")));
    }

    query::park::delete(conn, id).await?;

    tracing::info!(park_id = %id, "National park deleted");

    Ok(())
}
