//! Backend-selected repository bundle.
//!
//! # Responsibility
//! - Build every repository of one process from `StorageConfig`.
//! - Hide which variant backs the `Repository` contract from callers.
//!
//! # Invariants
//! - SQLite repositories of one bundle share a single connection.
//! - Memory bundles start with the seeded vacancy and city data.

use crate::config::StorageConfig;
use crate::db::{open_db, open_db_in_memory, share, SharedConnection};
use crate::model::candidate::Candidate;
use crate::model::file::File;
use crate::repo::candidate_repo::SqliteCandidateRepository;
use crate::repo::city_repo::{CityRepository, MemoryCityRepository, SqliteCityRepository};
use crate::repo::file_repo::SqliteFileRepository;
use crate::repo::memory::MemoryStore;
use crate::repo::seed::seeded_vacancy_repository;
use crate::repo::vacancy_repo::SqliteVacancyRepository;
use crate::repo::{CandidateRepository, FileRepository, RepoResult, VacancyRepository};
use log::info;

pub struct Repositories {
    pub vacancies: Box<VacancyRepository>,
    pub candidates: Box<CandidateRepository>,
    pub files: Box<FileRepository>,
    pub cities: Box<dyn CityRepository>,
}

impl Repositories {
    /// Opens the repositories for the configured backend.
    pub fn open(config: &StorageConfig) -> RepoResult<Self> {
        let repositories = match config {
            StorageConfig::Memory => Self::in_memory(),
            StorageConfig::Sqlite { path } => Self::sqlite(share(open_db(path)?)),
        };
        info!(
            "event=store_open module=store status=ok backend={}",
            backend_name(config)
        );
        Ok(repositories)
    }

    /// Seeded in-memory repositories.
    pub fn in_memory() -> Self {
        Self {
            vacancies: Box::new(seeded_vacancy_repository()),
            candidates: Box::new(MemoryStore::<Candidate>::new()),
            files: Box::new(MemoryStore::<File>::new()),
            cities: Box::new(MemoryCityRepository::new()),
        }
    }

    /// SQLite repositories over a private in-memory database.
    pub fn sqlite_in_memory() -> RepoResult<Self> {
        Ok(Self::sqlite(share(open_db_in_memory()?)))
    }

    /// SQLite repositories over an already migrated connection.
    pub fn sqlite(conn: SharedConnection) -> Self {
        Self {
            vacancies: Box::new(SqliteVacancyRepository::new(conn.clone())),
            candidates: Box::new(SqliteCandidateRepository::new(conn.clone())),
            files: Box::new(SqliteFileRepository::new(conn.clone())),
            cities: Box::new(SqliteCityRepository::new(conn)),
        }
    }
}

fn backend_name(config: &StorageConfig) -> &'static str {
    match config {
        StorageConfig::Memory => "memory",
        StorageConfig::Sqlite { .. } => "sqlite",
    }
}
