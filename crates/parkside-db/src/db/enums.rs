//! Database enum types with Diesel serialization.
//!
//! This module provides type-safe enum wrappers for database CHECK constraints.
//! Each enum implements `ToSql` and `FromSql` for automatic conversion between Rust and `PostgreSQL`.

use diesel::deserialize::{self, FromSql, FromSqlRow};
use diesel::expression::AsExpression;
use diesel::pg::{Pg, PgValue};
use diesel::serialize::{self, IsNull, Output, ToSql};
use diesel::sql_types::Text;
use std::fmt;
use std::io::Write;

/// Account role.
///
/// Maps to `app_user.role` CHECK constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsExpression, FromSqlRow)]
#[diesel(sql_type = Text)]
pub enum UserRole {
    Admin,
    User,
}

impl ToSql<Text, Pg> for UserRole {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        let s = match self {
            Self::Admin => "admin",
            Self::User => "user",
        };
        out.write_all(s.as_bytes())?;
        Ok(IsNull::No)
    }
}

impl FromSql<Text, Pg> for UserRole {
    fn from_sql(bytes: PgValue<'_>) -> deserialize::Result<Self> {
        match bytes.as_bytes() {
            b"admin" => Ok(Self::Admin),
            b"user" => Ok(Self::User),
            _ => Err("Unrecognized enum variant".into()),
        }
    }
}

impl UserRole {
    /// Returns the database string representation of this role.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::User => "user",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<UserRole> for parkside_core::types::Role {
    fn from(db_role: UserRole) -> Self {
        match db_role {
            UserRole::Admin => Self::Admin,
            UserRole::User => Self::User,
        }
    }
}

impl From<parkside_core::types::Role> for UserRole {
    fn from(core_role: parkside_core::types::Role) -> Self {
        match core_role {
            parkside_core::types::Role::Admin => Self::Admin,
            parkside_core::types::Role::User => Self::User,
        }
    }
}

/// Trail difficulty grade.
///
/// Maps to `trail.difficulty` CHECK constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsExpression, FromSqlRow)]
#[diesel(sql_type = Text)]
pub enum TrailDifficulty {
    Trek,
    Moderate,
    Difficult,
    Expert,
}

impl ToSql<Text, Pg> for TrailDifficulty {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        let s = match self {
            Self::Trek => "trek",
            Self::Moderate => "moderate",
            Self::Difficult => "difficult",
            Self::Expert => "expert",
        };
        out.write_all(s.as_bytes())?;
        Ok(IsNull::No)
    }
}

impl FromSql<Text, Pg> for TrailDifficulty {
    fn from_sql(bytes: PgValue<'_>) -> deserialize::Result<Self> {
        match bytes.as_bytes() {
            b"trek" => Ok(Self::Trek),
            b"moderate" => Ok(Self::Moderate),
            b"difficult" => Ok(Self::Difficult),
            b"expert" => Ok(Self::Expert),
            _ => Err("Unrecognized enum variant".into()),
        }
    }
}

impl TrailDifficulty {
    /// Returns the database string representation of this difficulty.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trek => "trek",
            Self::Moderate => "moderate",
            Self::Difficult => "difficult",
            Self::Expert => "expert",
        }
    }
}

impl fmt::Display for TrailDifficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<TrailDifficulty> for parkside_core::types::Difficulty {
    fn from(db_type: TrailDifficulty) -> Self {
        match db_type {
            TrailDifficulty::Trek => Self::Trek,
            TrailDifficulty::Moderate => Self::Moderate,
            TrailDifficulty::Difficult => Self::Difficult,
            TrailDifficulty::Expert => Self::Expert,
        }
    }
}

impl From<parkside_core::types::Difficulty> for TrailDifficulty {
    fn from(core_type: parkside_core::types::Difficulty) -> Self {
        match core_type {
            parkside_core::types::Difficulty::Trek => Self::Trek,
            parkside_core::types::Difficulty::Moderate => Self::Moderate,
            parkside_core::types::Difficulty::Difficult => Self::Difficult,
            parkside_core::types::Difficulty::Expert => Self::Expert,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parkside_core::types::{Difficulty, Role};

    #[test_log::test]
    fn user_role_converts_to_core_role_and_back() {
        assert_eq!(Role::from(UserRole::Admin), Role::Admin);
        assert_eq!(UserRole::from(Role::User), UserRole::User);
    }

    #[test_log::test]
    fn trail_difficulty_converts_to_core_difficulty_and_back() {
        for (db, core) in [
            (TrailDifficulty::Trek, Difficulty::Trek),
            (TrailDifficulty::Moderate, Difficulty::Moderate),
            (TrailDifficulty::Difficult, Difficulty::Difficult),
            (TrailDifficulty::Expert, Difficulty::Expert),
        ] {
            assert_eq!(Difficulty::from(db), core);
            assert_eq!(TrailDifficulty::from(core), db);
        }
    }
}
