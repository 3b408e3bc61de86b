//! Fixed example data loaded into in-memory repositories.

use super::memory::MemoryStore;
use crate::model::city::City;
use crate::model::entity::EntityId;
use crate::model::vacancy::Vacancy;
use chrono::{NaiveDate, NaiveDateTime};

/// In-memory vacancy repository.
pub type MemoryVacancyRepository = MemoryStore<Vacancy>;

/// (title, description, (year, month, day, hour, minute), city_id)
type VacancySeed = (&'static str, &'static str, (i32, u32, u32, u32, u32), EntityId);

const VACANCY_SEED: &[VacancySeed] = &[
    ("Intern Java Developer", "description1", (2023, 1, 10, 12, 30), 1),
    ("Junior Java Developer", "description2", (2023, 2, 11, 12, 38), 2),
    ("Junior+ Java Developer", "description3", (2023, 4, 3, 15, 30), 1),
    ("Middle Java Developer", "description4", (2023, 5, 1, 12, 36), 2),
    ("Middle+ Java Developer", "description5", (2023, 5, 10, 10, 10), 3),
    ("Senior Java Developer", "description6", (2023, 5, 22, 17, 20), 2),
];

const CITY_SEED: &[(EntityId, &str)] = &[
    (1, "Moscow"),
    (2, "Saint Petersburg"),
    (3, "Yekaterinburg"),
];

/// Returns the six example vacancies, unsaved, in publication order.
pub fn vacancy_seed() -> Vec<Vacancy> {
    VACANCY_SEED
        .iter()
        .map(|&(title, description, (year, month, day, hour, minute), city_id)| {
            Vacancy::new(
                title,
                description,
                timestamp(year, month, day, hour, minute),
                city_id,
            )
        })
        .collect()
}

/// Returns the reference cities with their fixed ids.
pub fn city_seed() -> Vec<City> {
    CITY_SEED
        .iter()
        .map(|&(id, name)| City::new(id, name))
        .collect()
}

/// Creates a vacancy store with the example vacancies at ids `1..=6`.
pub fn seeded_vacancy_repository() -> MemoryVacancyRepository {
    MemoryStore::with_seed(vacancy_seed())
}

fn timestamp(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    // Seed values are compile-time constants, all valid calendar dates.
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, 0))
        .unwrap_or_default()
}
