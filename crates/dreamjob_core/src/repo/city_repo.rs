//! Read-only city lookups.
//!
//! Cities are reference data: the memory variant is fixed at construction
//! and the SQLite variant reads rows inserted by the initial migration.

use super::seed::city_seed;
use super::RepoResult;
use crate::db::SharedConnection;
use crate::model::city::City;
use crate::model::entity::EntityId;
use rusqlite::OptionalExtension;

pub trait CityRepository: Send + Sync {
    /// Returns every city ordered by id.
    fn find_all(&self) -> RepoResult<Vec<City>>;
    fn find_by_id(&self, id: EntityId) -> RepoResult<Option<City>>;
}

/// Immutable in-memory city list.
#[derive(Debug, Clone)]
pub struct MemoryCityRepository {
    cities: Vec<City>,
}

impl MemoryCityRepository {
    /// Creates a repository holding the reference cities.
    pub fn new() -> Self {
        Self::with_cities(city_seed())
    }

    pub fn with_cities(mut cities: Vec<City>) -> Self {
        cities.sort_by_key(|city| city.id);
        Self { cities }
    }
}

impl Default for MemoryCityRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl CityRepository for MemoryCityRepository {
    fn find_all(&self) -> RepoResult<Vec<City>> {
        Ok(self.cities.clone())
    }

    fn find_by_id(&self, id: EntityId) -> RepoResult<Option<City>> {
        Ok(self.cities.iter().find(|city| city.id == id).cloned())
    }
}

pub struct SqliteCityRepository {
    conn: SharedConnection,
}

impl SqliteCityRepository {
    pub fn new(conn: SharedConnection) -> Self {
        Self { conn }
    }
}

impl CityRepository for SqliteCityRepository {
    fn find_all(&self) -> RepoResult<Vec<City>> {
        let conn = self.conn.lock();
        let mut stmt = conn.prepare("SELECT id, name FROM cities ORDER BY id ASC;")?;
        let cities = stmt
            .query_map([], |row| Ok(City::new(row.get(0)?, row.get::<_, String>(1)?)))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(cities)
    }

    fn find_by_id(&self, id: EntityId) -> RepoResult<Option<City>> {
        let city = self
            .conn
            .lock()
            .query_row("SELECT id, name FROM cities WHERE id = ?1;", [id], |row| {
                Ok(City::new(row.get(0)?, row.get::<_, String>(1)?))
            })
            .optional()?;
        Ok(city)
    }
}
