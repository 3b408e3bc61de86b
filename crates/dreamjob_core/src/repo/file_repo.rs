//! SQLite-backed file metadata repository.

use super::{entity_id, RepoResult, Repository};
use crate::db::SharedConnection;
use crate::model::entity::{Entity, EntityId};
use crate::model::file::File;
use rusqlite::{params, OptionalExtension};

pub struct SqliteFileRepository {
    conn: SharedConnection,
}

impl SqliteFileRepository {
    pub fn new(conn: SharedConnection) -> Self {
        Self { conn }
    }
}

impl Repository<File> for SqliteFileRepository {
    fn save(&self, file: File) -> RepoResult<File> {
        let conn = self.conn.lock();
        conn.execute(
            "INSERT INTO files (name, path) VALUES (?1, ?2);",
            params![file.name.as_str(), file.path.as_str()],
        )?;

        let id = entity_id(conn.last_insert_rowid(), "files")?;
        Ok(file.with_id(id))
    }

    /// Fails with a foreign key error while a vacancy or candidate still
    /// references the file.
    fn delete_by_id(&self, id: EntityId) -> RepoResult<bool> {
        let changed = self
            .conn
            .lock()
            .execute("DELETE FROM files WHERE id = ?1;", [id])?;
        Ok(changed > 0)
    }

    fn update(&self, file: &File) -> RepoResult<bool> {
        let changed = self.conn.lock().execute(
            "UPDATE files SET name = ?1, path = ?2 WHERE id = ?3;",
            params![file.name.as_str(), file.path.as_str(), file.id],
        )?;
        Ok(changed > 0)
    }

    fn find_by_id(&self, id: EntityId) -> RepoResult<Option<File>> {
        let file = self
            .conn
            .lock()
            .query_row(
                "SELECT id, name, path FROM files WHERE id = ?1;",
                [id],
                |row| {
                    Ok(File {
                        id: row.get(0)?,
                        name: row.get(1)?,
                        path: row.get(2)?,
                    })
                },
            )
            .optional()?;
        Ok(file)
    }

    fn find_all(&self) -> RepoResult<Vec<File>> {
        let conn = self.conn.lock();
        let mut stmt = conn.prepare("SELECT id, name, path FROM files ORDER BY id ASC;")?;
        let files = stmt
            .query_map([], |row| {
                Ok(File {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    path: row.get(2)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(files)
    }
}
