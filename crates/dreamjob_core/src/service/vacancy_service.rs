//! Vacancy use-case service.
//!
//! # Invariants
//! - Service APIs never bypass the repository contract.
//! - Service layer remains storage-agnostic.

use crate::model::entity::EntityId;
use crate::model::vacancy::Vacancy;
use crate::repo::{RepoResult, Repository};

/// Use-case wrapper around any vacancy repository.
pub struct VacancyService<R: Repository<Vacancy>> {
    repo: R,
}

impl<R: Repository<Vacancy>> VacancyService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Publishes a vacancy and returns it with its assigned id.
    pub fn create(&self, vacancy: Vacancy) -> RepoResult<Vacancy> {
        self.repo.save(vacancy)
    }

    /// Returns `false` when the vacancy no longer exists.
    pub fn update(&self, vacancy: &Vacancy) -> RepoResult<bool> {
        self.repo.update(vacancy)
    }

    pub fn delete_by_id(&self, id: EntityId) -> RepoResult<bool> {
        self.repo.delete_by_id(id)
    }

    pub fn find_by_id(&self, id: EntityId) -> RepoResult<Option<Vacancy>> {
        self.repo.find_by_id(id)
    }

    /// Returns every vacancy ordered by id.
    pub fn find_all(&self) -> RepoResult<Vec<Vacancy>> {
        let mut vacancies = self.repo.find_all()?;
        vacancies.sort_by_key(|vacancy| vacancy.id);
        Ok(vacancies)
    }

    /// Returns publicly listed vacancies ordered by id.
    pub fn find_all_visible(&self) -> RepoResult<Vec<Vacancy>> {
        let mut vacancies = self.find_all()?;
        vacancies.retain(|vacancy| vacancy.visible);
        Ok(vacancies)
    }
}
