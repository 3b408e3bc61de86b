//! SQLite-backed vacancy repository.
//!
//! # Invariants
//! - Ids come from the `vacancies` AUTOINCREMENT key and are never reused.
//! - `file_id == 0` is stored as NULL so the files foreign key holds.

use super::{bool_to_int, entity_id, optional_ref, parse_bool, RepoResult, Repository};
use crate::db::SharedConnection;
use crate::model::entity::{Entity, EntityId};
use crate::model::vacancy::Vacancy;
use rusqlite::{params, Row};

const VACANCY_SELECT_SQL: &str = "SELECT
    id,
    title,
    description,
    creation_date,
    visible,
    city_id,
    file_id
FROM vacancies";

pub struct SqliteVacancyRepository {
    conn: SharedConnection,
}

impl SqliteVacancyRepository {
    /// Wraps a connection returned by `open_db`/`open_db_in_memory`.
    pub fn new(conn: SharedConnection) -> Self {
        Self { conn }
    }
}

impl Repository<Vacancy> for SqliteVacancyRepository {
    fn save(&self, vacancy: Vacancy) -> RepoResult<Vacancy> {
        let conn = self.conn.lock();
        conn.execute(
            "INSERT INTO vacancies (
                title,
                description,
                creation_date,
                visible,
                city_id,
                file_id
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
            params![
                vacancy.title.as_str(),
                vacancy.description.as_str(),
                vacancy.creation_date,
                bool_to_int(vacancy.visible),
                vacancy.city_id,
                optional_ref(vacancy.file_id),
            ],
        )?;

        let id = entity_id(conn.last_insert_rowid(), "vacancies")?;
        Ok(vacancy.with_id(id))
    }

    fn delete_by_id(&self, id: EntityId) -> RepoResult<bool> {
        let changed = self
            .conn
            .lock()
            .execute("DELETE FROM vacancies WHERE id = ?1;", [id])?;
        Ok(changed > 0)
    }

    fn update(&self, vacancy: &Vacancy) -> RepoResult<bool> {
        let changed = self.conn.lock().execute(
            "UPDATE vacancies
             SET
                title = ?1,
                description = ?2,
                creation_date = ?3,
                visible = ?4,
                city_id = ?5,
                file_id = ?6
             WHERE id = ?7;",
            params![
                vacancy.title.as_str(),
                vacancy.description.as_str(),
                vacancy.creation_date,
                bool_to_int(vacancy.visible),
                vacancy.city_id,
                optional_ref(vacancy.file_id),
                vacancy.id,
            ],
        )?;
        Ok(changed > 0)
    }

    fn find_by_id(&self, id: EntityId) -> RepoResult<Option<Vacancy>> {
        let conn = self.conn.lock();
        let mut stmt = conn.prepare(&format!("{VACANCY_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_vacancy_row(row)?));
        }

        Ok(None)
    }

    fn find_all(&self) -> RepoResult<Vec<Vacancy>> {
        let conn = self.conn.lock();
        let mut stmt = conn.prepare(&format!("{VACANCY_SELECT_SQL} ORDER BY id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut vacancies = Vec::new();

        while let Some(row) = rows.next()? {
            vacancies.push(parse_vacancy_row(row)?);
        }

        Ok(vacancies)
    }
}

fn parse_vacancy_row(row: &Row<'_>) -> RepoResult<Vacancy> {
    Ok(Vacancy {
        id: row.get("id")?,
        title: row.get("title")?,
        description: row.get("description")?,
        creation_date: row.get("creation_date")?,
        visible: parse_bool(row.get("visible")?, "vacancies.visible")?,
        city_id: row.get("city_id")?,
        file_id: row.get::<_, Option<EntityId>>("file_id")?.unwrap_or(0),
    })
}
