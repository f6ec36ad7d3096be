use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use super::{PersonId, TreeId};

/// Gender recorded for a person.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    #[default]
    Unknown,
}

impl Gender {
    /// Return the wire representation.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = &'static str;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            "unknown" => Ok(Self::Unknown),
            _ => Err("gender must be one of: male, female, unknown"),
        }
    }
}

/// Request body for `POST /trees/{tree_id}/persons`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PersonCreate {
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub gender: Gender,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<NaiveDate>,
}

impl PersonCreate {
    /// A person with the placeholder `unknown` gender and no birth date.
    pub fn named(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            gender: Gender::Unknown,
            birth_date: None,
        }
    }
}

/// A person record as returned by the server.
///
/// Only `id`, `first_name` and `last_name` are required; everything else
/// falls back to defaults so minimal payloads still decode.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PersonResponse {
    pub id: PersonId,
    #[serde(default)]
    pub tree_id: Option<TreeId>,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub gender: Gender,
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
}
