//! Storage core for the DreamJob job board.
//! Repositories here are the single source of truth for id assignment and
//! entity lifecycle.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod store;

pub use config::{ConfigError, CoreConfig, LoggingConfig, StorageConfig};
pub use logging::{
    default_log_level, init_from_config, init_logging, logging_status, LoggingError,
};
pub use model::candidate::Candidate;
pub use model::city::City;
pub use model::entity::{Entity, EntityId};
pub use model::file::File;
pub use model::vacancy::Vacancy;
pub use repo::candidate_repo::SqliteCandidateRepository;
pub use repo::city_repo::{CityRepository, MemoryCityRepository, SqliteCityRepository};
pub use repo::file_repo::SqliteFileRepository;
pub use repo::memory::MemoryStore;
pub use repo::seed::{seeded_vacancy_repository, vacancy_seed, MemoryVacancyRepository};
pub use repo::vacancy_repo::SqliteVacancyRepository;
pub use repo::{
    CandidateRepository, FileRepository, RepoError, RepoResult, Repository, VacancyRepository,
};
pub use service::vacancy_service::VacancyService;
pub use store::Repositories;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
