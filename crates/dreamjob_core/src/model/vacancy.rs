//! Vacancy record.
//!
//! # Invariants
//! - `id` is `0` until a repository assigns one.
//! - `file_id == 0` means the vacancy has no attached file.

use super::entity::{Entity, EntityId};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Job vacancy published on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vacancy {
    pub id: EntityId,
    pub title: String,
    pub description: String,
    pub creation_date: NaiveDateTime,
    /// Whether the vacancy is shown in public listings.
    pub visible: bool,
    /// References a `City`; not validated by in-memory storage.
    pub city_id: EntityId,
    /// References a `File`; `0` means no attachment.
    pub file_id: EntityId,
}

impl Vacancy {
    /// Creates an unsaved, visible vacancy without attachment.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        creation_date: NaiveDateTime,
        city_id: EntityId,
    ) -> Self {
        Self {
            id: 0,
            title: title.into(),
            description: description.into(),
            creation_date,
            visible: true,
            city_id,
            file_id: 0,
        }
    }

    /// Returns whether a file is attached.
    pub fn has_attachment(&self) -> bool {
        self.file_id != 0
    }
}

impl Entity for Vacancy {
    const KIND: &'static str = "vacancy";

    fn id(&self) -> EntityId {
        self.id
    }

    fn with_id(self, id: EntityId) -> Self {
        Self { id, ..self }
    }
}
