//! Repository contracts and their memory/SQLite implementations.
//!
//! # Responsibility
//! - Define the five-operation storage contract shared by every variant.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Repositories assign ids on `save`; caller-provided ids are ignored.
//! - "Not found" is a return value (`false`/`None`), never an error.

use crate::db::DbError;
use crate::model::candidate::Candidate;
use crate::model::entity::{Entity, EntityId};
use crate::model::file::File;
use crate::model::vacancy::Vacancy;
use thiserror::Error;

pub mod candidate_repo;
pub mod city_repo;
pub mod file_repo;
pub mod memory;
pub mod seed;
pub mod vacancy_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for persistence transport and decoding failures.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error(transparent)]
    Db(#[from] DbError),
    #[error("invalid persisted data: {0}")]
    InvalidData(String),
    /// Every positive id of a memory store has been issued.
    #[error("no {kind} ids left to assign")]
    IdsExhausted { kind: &'static str },
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// CRUD contract shared by in-memory and persistent storage.
pub trait Repository<E: Entity>: Send + Sync {
    /// Stores `entity` under a freshly assigned id and returns it.
    fn save(&self, entity: E) -> RepoResult<E>;
    /// Returns `true` iff a stored entity was removed.
    fn delete_by_id(&self, id: EntityId) -> RepoResult<bool>;
    /// Replaces every non-id field of an existing entity.
    ///
    /// Returns `false` when `entity.id()` is not stored.
    fn update(&self, entity: &E) -> RepoResult<bool>;
    fn find_by_id(&self, id: EntityId) -> RepoResult<Option<E>>;
    fn find_all(&self) -> RepoResult<Vec<E>>;
}

pub type VacancyRepository = dyn Repository<Vacancy>;
pub type CandidateRepository = dyn Repository<Candidate>;
pub type FileRepository = dyn Repository<File>;

impl<E: Entity, R: Repository<E> + ?Sized> Repository<E> for Box<R> {
    fn save(&self, entity: E) -> RepoResult<E> {
        (**self).save(entity)
    }

    fn delete_by_id(&self, id: EntityId) -> RepoResult<bool> {
        (**self).delete_by_id(id)
    }

    fn update(&self, entity: &E) -> RepoResult<bool> {
        (**self).update(entity)
    }

    fn find_by_id(&self, id: EntityId) -> RepoResult<Option<E>> {
        (**self).find_by_id(id)
    }

    fn find_all(&self) -> RepoResult<Vec<E>> {
        (**self).find_all()
    }
}

pub(crate) fn bool_to_int(value: bool) -> i64 {
    if value {
        1
    } else {
        0
    }
}

pub(crate) fn parse_bool(value: i64, column: &str) -> RepoResult<bool> {
    match value {
        0 => Ok(false),
        1 => Ok(true),
        other => Err(RepoError::InvalidData(format!(
            "invalid boolean value `{other}` in {column}"
        ))),
    }
}

/// Maps the in-memory "no reference" marker `0` to SQL NULL.
pub(crate) fn optional_ref(id: EntityId) -> Option<EntityId> {
    (id != 0).then_some(id)
}

/// Narrows a SQLite rowid to an `EntityId`.
pub(crate) fn entity_id(rowid: i64, table: &str) -> RepoResult<EntityId> {
    EntityId::try_from(rowid).map_err(|_| {
        RepoError::InvalidData(format!("rowid `{rowid}` in {table} exceeds the id range"))
    })
}
