//! City reference data.

use super::entity::EntityId;
use serde::{Deserialize, Serialize};

/// Read-only lookup record referenced by `city_id` fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    pub id: EntityId,
    pub name: String,
}

impl City {
    pub fn new(id: EntityId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
