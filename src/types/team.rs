use serde::{Deserialize, Serialize};

/// Read-only projection of a team row as embedded in person responses.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Team {
    pub id: i32,
    pub name: String,
}

impl Team {
    pub fn from_row(row: entity::team::Model) -> Self {
        Team {
            id: row.id,
            name: row.name,
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct RTeamCreate {
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct TeamCreateRes {
    pub id: i32,
    pub message: String,
}
