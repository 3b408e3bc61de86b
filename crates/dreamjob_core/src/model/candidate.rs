//! Candidate record.

use super::entity::{Entity, EntityId};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Job seeker profile. Shares vacancy storage semantics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub id: EntityId,
    pub name: String,
    pub description: String,
    pub creation_date: NaiveDateTime,
    pub visible: bool,
    pub city_id: EntityId,
    /// Profile photo reference; `0` means none.
    pub file_id: EntityId,
}

impl Candidate {
    /// Creates an unsaved, visible candidate without photo.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        creation_date: NaiveDateTime,
        city_id: EntityId,
    ) -> Self {
        Self {
            id: 0,
            name: name.into(),
            description: description.into(),
            creation_date,
            visible: true,
            city_id,
            file_id: 0,
        }
    }
}

impl Entity for Candidate {
    const KIND: &'static str = "candidate";

    fn id(&self) -> EntityId {
        self.id
    }

    fn with_id(self, id: EntityId) -> Self {
        Self { id, ..self }
    }
}
