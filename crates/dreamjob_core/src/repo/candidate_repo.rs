//! SQLite-backed candidate repository.
//!
//! # Invariants
//! - Ids come from the `candidates` AUTOINCREMENT key and are never reused.
//! - A candidate without photo (`file_id == 0`) stores NULL in `file_id`.

use super::{bool_to_int, entity_id, optional_ref, parse_bool, RepoResult, Repository};
use crate::db::SharedConnection;
use crate::model::candidate::Candidate;
use crate::model::entity::{Entity, EntityId};
use rusqlite::{params, Row};

const CANDIDATE_SELECT_SQL: &str = "SELECT
    id,
    name,
    description,
    creation_date,
    visible,
    city_id,
    file_id
FROM candidates";

pub struct SqliteCandidateRepository {
    conn: SharedConnection,
}

impl SqliteCandidateRepository {
    /// Wraps a connection returned by `open_db`/`open_db_in_memory`.
    pub fn new(conn: SharedConnection) -> Self {
        Self { conn }
    }
}

impl Repository<Candidate> for SqliteCandidateRepository {
    fn save(&self, candidate: Candidate) -> RepoResult<Candidate> {
        let conn = self.conn.lock();
        conn.execute(
            "INSERT INTO candidates (
                name,
                description,
                creation_date,
                visible,
                city_id,
                file_id
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
            params![
                candidate.name.as_str(),
                candidate.description.as_str(),
                candidate.creation_date,
                bool_to_int(candidate.visible),
                candidate.city_id,
                optional_ref(candidate.file_id),
            ],
        )?;

        let id = entity_id(conn.last_insert_rowid(), "candidates")?;
        Ok(candidate.with_id(id))
    }

    fn delete_by_id(&self, id: EntityId) -> RepoResult<bool> {
        let changed = self
            .conn
            .lock()
            .execute("DELETE FROM candidates WHERE id = ?1;", [id])?;
        Ok(changed > 0)
    }

    fn update(&self, candidate: &Candidate) -> RepoResult<bool> {
        let changed = self.conn.lock().execute(
            "UPDATE candidates
             SET
                name = ?1,
                description = ?2,
                creation_date = ?3,
                visible = ?4,
                city_id = ?5,
                file_id = ?6
             WHERE id = ?7;",
            params![
                candidate.name.as_str(),
                candidate.description.as_str(),
                candidate.creation_date,
                bool_to_int(candidate.visible),
                candidate.city_id,
                optional_ref(candidate.file_id),
                candidate.id,
            ],
        )?;
        Ok(changed > 0)
    }

    fn find_by_id(&self, id: EntityId) -> RepoResult<Option<Candidate>> {
        let conn = self.conn.lock();
        let mut stmt = conn.prepare(&format!("{CANDIDATE_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_candidate_row(row)?));
        }

        Ok(None)
    }

    fn find_all(&self) -> RepoResult<Vec<Candidate>> {
        let conn = self.conn.lock();
        let mut stmt = conn.prepare(&format!("{CANDIDATE_SELECT_SQL} ORDER BY id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut candidates = Vec::new();

        while let Some(row) = rows.next()? {
            candidates.push(parse_candidate_row(row)?);
        }

        Ok(candidates)
    }
}

fn parse_candidate_row(row: &Row<'_>) -> RepoResult<Candidate> {
    Ok(Candidate {
        id: row.get("id")?,
        name: row.get("name")?,
        description: row.get("description")?,
        creation_date: row.get("creation_date")?,
        visible: parse_bool(row.get("visible")?, "candidates.visible")?,
        city_id: row.get("city_id")?,
        file_id: row.get::<_, Option<EntityId>>("file_id")?.unwrap_or(0),
    })
}
