use entity::{person, team};
use serde::{Deserialize, Serialize};

use crate::types::team::Team;

/// Read-only projection of a person row. `team` is derived from a join and
/// never persisted; `team_id` keeps the wire convention where 0 means "no
/// team" even though the column itself is nullable.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Person {
    pub id: i32,
    pub uid: String,
    pub name: String,
    pub age: i32,
    pub team_id: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<Team>,
}

impl Person {
    pub fn from_row(row: person::Model) -> Self {
        Self::from_joined(row, None)
    }

    /// One left-join row: the team side is absent when the person has no
    /// membership (or the referenced row is gone).
    pub fn from_joined(row: person::Model, joined: Option<team::Model>) -> Self {
        Person {
            id: row.id,
            uid: row.uid,
            name: row.name,
            age: row.age,
            team_id: row.team_id.unwrap_or(0),
            team: joined.map(Team::from_row),
        }
    }

    /// Collapses an ordered sequence of left-join rows into nested
    /// projections, preserving the input row order. Shared by the filtered
    /// (one team's members) and unfiltered listings.
    pub fn assemble(rows: Vec<(person::Model, Option<team::Model>)>) -> Vec<Person> {
        rows.into_iter()
            .map(|(p, t)| Person::from_joined(p, t))
            .collect()
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct RPersonCreate {
    pub name: String,
    #[serde(default)]
    pub age: i32,
    #[serde(default)]
    pub team_id: i32,
}

/// Update payload. Fields left out decode to their zero value, which the
/// patch resolver reads as "not sent".
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct RPersonUpdate {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub age: i32,
    #[serde(default)]
    pub team_id: i32,
}

/// The fields an update will actually write.
#[derive(Debug, Default, PartialEq)]
pub struct PersonPatch {
    pub name: Option<String>,
    pub age: Option<i32>,
    pub team_id: Option<i32>,
}

impl PersonPatch {
    /// A field is written only when the proposed value is non-zero on the
    /// wire AND differs from what is stored. Consequence: a zero value is
    /// indistinguishable from an omitted field, so an update can never
    /// clear a name, set age to 0, or drop a team membership.
    pub fn resolve(current: &person::Model, proposed: &RPersonUpdate) -> PersonPatch {
        let mut patch = PersonPatch::default();
        if !proposed.name.is_empty() && proposed.name != current.name {
            patch.name = Some(proposed.name.clone());
        }
        if proposed.age != 0 && proposed.age != current.age {
            patch.age = Some(proposed.age);
        }
        if proposed.team_id != 0 && Some(proposed.team_id) != current.team_id {
            patch.team_id = Some(proposed.team_id);
        }
        patch
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.age.is_none() && self.team_id.is_none()
    }
}
