//! Query functions for user accounts.

use diesel::dsl::exists;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::connection::DbConnection;
use crate::db::schema::app_user;
use crate::error::DbResult;
use crate::model::user::{NewUser, User};

/// ## Summary
/// Finds a user by username. The lookup is case-sensitive.
///
/// ## Errors
/// Returns a database error if the query fails.
pub async fn find_by_username(
    conn: &mut DbConnection<'_>,
    username: &str,
) -> DbResult<Option<User>> {
    let user = app_user::table
        .filter(app_user::username.eq(username))
        .select(User::as_select())
        .first::<User>(conn)
        .await
        .optional()?;
    Ok(user)
}

/// ## Summary
/// Whether a user with the given username exists. Case-sensitive.
///
/// ## Errors
/// Returns a database error if the query fails.
pub async fn username_exists(conn: &mut DbConnection<'_>, username: &str) -> DbResult<bool> {
    let found = diesel::select(exists(
        app_user::table.filter(app_user::username.eq(username)),
    ))
    .get_result::<bool>(conn)
    .await?;
    Ok(found)
}

/// ## Summary
/// Inserts a user and returns the stored row.
///
/// ## Errors
/// Returns a database error if the query fails.
pub async fn insert(conn: &mut DbConnection<'_>, new_user: &NewUser<'_>) -> DbResult<User> {
    let user = diesel::insert_into(app_user::table)
        .values(new_user)
        .returning(User::as_select())
        .get_result::<User>(conn)
        .await?;
    Ok(user)
}
