//! Stored file metadata.
//!
//! Only the name and storage path are tracked; file bytes live outside core.

use super::entity::{Entity, EntityId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct File {
    pub id: EntityId,
    /// Original upload name shown to users.
    pub name: String,
    /// Location of the stored bytes.
    pub path: String,
}

impl File {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
            path: path.into(),
        }
    }
}

impl Entity for File {
    const KIND: &'static str = "file";

    fn id(&self) -> EntityId {
        self.id
    }

    fn with_id(self, id: EntityId) -> Self {
        Self { id, ..self }
    }
}
