//! Identity capability shared by stored records.

/// Integer identifier assigned by a repository.
///
/// Matches the SQLite `INTEGER PRIMARY KEY` column width used by the
/// persistent variant.
pub type EntityId = i32;

/// Record with a repository-assigned integer identity.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Stable record name used in log events, e.g. `vacancy`.
    const KIND: &'static str;

    /// Returns the current identifier (`0` before the first save).
    fn id(&self) -> EntityId;

    /// Returns a new value carrying `id`; every other field is kept.
    fn with_id(self, id: EntityId) -> Self;
}
