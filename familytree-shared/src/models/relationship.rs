use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use super::{PersonId, RelationshipId, TreeId};

/// Kind of link between two people in a tree.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RelationshipType {
    Parent,
    Spouse,
}

impl RelationshipType {
    /// Return the wire representation.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Parent => "parent",
            Self::Spouse => "spouse",
        }
    }
}

impl fmt::Display for RelationshipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RelationshipType {
    type Err = &'static str;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "parent" => Ok(Self::Parent),
            "spouse" => Ok(Self::Spouse),
            _ => Err("relationship type must be one of: parent, spouse"),
        }
    }
}

/// Request body for `POST /trees/{tree_id}/relationships`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RelationshipCreate {
    pub person_a_id: PersonId,
    pub person_b_id: PersonId,
    #[serde(rename = "type")]
    pub kind: RelationshipType,
}

/// A relationship as returned by the server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RelationshipResponse {
    pub id: RelationshipId,
    #[serde(default)]
    pub tree_id: Option<TreeId>,
    pub person_a_id: PersonId,
    pub person_b_id: PersonId,
    #[serde(rename = "type")]
    pub kind: RelationshipType,
}
