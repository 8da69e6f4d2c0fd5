//! Shared domain types used across crates.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Account role carried in token claims and checked by endpoint policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    User,
}

impl Role {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::User => "user",
        }
    }

    /// Parse the database/wire representation of a role.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "admin" => Some(Self::Admin),
            "user" => Some(Self::User),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trail difficulty grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Trek,
    Moderate,
    Difficult,
    Expert,
}

impl Difficulty {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trek => "trek",
            Self::Moderate => "moderate",
            Self::Difficult => "difficult",
            Self::Expert => "expert",
        }
    }

    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "trek" => Some(Self::Trek),
            "moderate" => Some(Self::Moderate),
            "difficult" => Some(Self::Difficult),
            "expert" => Some(Self::Expert),
            _ => None,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical form of an entity name for uniqueness checks.
///
/// Names are compared case-insensitively with surrounding whitespace ignored,
/// so "Yellowstone" and "  yellowstone " refer to the same record.
#[must_use]
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trips_through_strings() {
        for role in [Role::Admin, Role::User] {
            assert_eq!(Role::parse(role.as_str()), Some(role));
        }
        assert_eq!(Role::parse("superuser"), None);
    }

    #[test]
    fn difficulty_round_trips_through_strings() {
        for d in [
            Difficulty::Trek,
            Difficulty::Moderate,
            Difficulty::Difficult,
            Difficulty::Expert,
        ] {
            assert_eq!(Difficulty::parse(d.as_str()), Some(d));
        }
        assert_eq!(Difficulty::parse("easy"), None);
    }

    #[test]
    fn normalize_name_collapses_case_and_whitespace() {
        assert_eq!(normalize_name("  Yellowstone "), "yellowstone");
        assert_eq!(normalize_name("YELLOWSTONE"), normalize_name("yellowstone"));
        assert_ne!(normalize_name("Yosemite"), normalize_name("Yellowstone"));
    }
}
