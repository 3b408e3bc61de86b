//! Thread-safe, id-assigning in-memory entity store.
//!
//! # Responsibility
//! - Hold entities keyed by a generated integer id under concurrent access.
//! - Serve as the in-memory variant of the `Repository` contract.
//!
//! # Invariants
//! - Ids are issued by one atomic counter: first id is `1`, strictly
//!   increasing, never reused after deletion.
//! - Every write is a per-key atomic operation on the map; there is no
//!   global lock.
//! - Updates swap in a new value; stored values are never mutated in place.

use super::{RepoError, RepoResult, Repository};
use crate::model::entity::{Entity, EntityId};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use log::{debug, error};
use std::sync::atomic::{AtomicI32, Ordering};

/// Concurrent in-memory store for one entity type.
#[derive(Debug)]
pub struct MemoryStore<E: Entity> {
    next_id: AtomicI32,
    entries: DashMap<EntityId, E>,
}

impl<E: Entity> MemoryStore<E> {
    /// Creates an empty store whose first issued id is `1`.
    pub fn new() -> Self {
        Self {
            next_id: AtomicI32::new(0),
            entries: DashMap::new(),
        }
    }

    /// Creates a store and loads `seed` before returning it.
    pub fn with_seed(seed: impl IntoIterator<Item = E>) -> Self {
        let store = Self::new();
        store.load_seed(seed);
        store
    }

    /// Saves every seed entity in iteration order.
    ///
    /// Seeds go through the regular id counter, so on a fresh store they
    /// receive ids `1..=n`.
    pub fn load_seed(&self, seed: impl IntoIterator<Item = E>) {
        let loaded = seed.into_iter().map(|entity| self.save(entity)).count();
        debug!(
            "event=store_seed module=repo kind={} status=ok count={loaded}",
            E::KIND
        );
    }

    /// Assigns the next id to `entity` and stores it.
    ///
    /// # Panics
    /// Panics once all `i32::MAX` positive ids have been issued; use
    /// `try_save` to handle exhaustion instead.
    pub fn save(&self, entity: E) -> E {
        match self.try_save(entity) {
            Some(saved) => saved,
            None => panic!("{} id space exhausted", E::KIND),
        }
    }

    /// Like `save`, but returns `None` when no positive id is left.
    ///
    /// The counter never wraps, so an exhausted store keeps rejecting saves
    /// instead of issuing negative or repeated ids.
    pub fn try_save(&self, entity: E) -> Option<E> {
        let Ok(previous) = self
            .next_id
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_add(1))
        else {
            error!(
                "event=store_save module=repo kind={} status=error error_code=ids_exhausted",
                E::KIND
            );
            return None;
        };
        let id = previous + 1;
        let entity = entity.with_id(id);
        match self.entries.entry(id) {
            Entry::Vacant(slot) => {
                slot.insert(entity.clone());
            }
            Entry::Occupied(_) => {
                debug!(
                    "event=store_save module=repo kind={} status=skipped reason=id_taken id={id}",
                    E::KIND
                );
                return Some(entity);
            }
        }
        debug!("event=store_save module=repo kind={} status=ok id={id}", E::KIND);
        Some(entity)
    }

    /// Removes the entity stored under `id`.
    pub fn delete_by_id(&self, id: EntityId) -> bool {
        let removed = self.entries.remove(&id).is_some();
        debug!(
            "event=store_delete module=repo kind={} id={id} removed={removed}",
            E::KIND
        );
        removed
    }

    /// Replaces the stored value for `entity.id()` if, and only if, it is
    /// present while the key's shard lock is held.
    pub fn update(&self, entity: &E) -> bool {
        let updated = match self.entries.get_mut(&entity.id()) {
            Some(mut slot) => {
                let id = *slot.key();
                *slot = entity.clone().with_id(id);
                true
            }
            None => false,
        };
        debug!(
            "event=store_update module=repo kind={} id={} updated={updated}",
            E::KIND,
            entity.id()
        );
        updated
    }

    pub fn find_by_id(&self, id: EntityId) -> Option<E> {
        self.entries.get(&id).map(|entry| entry.value().clone())
    }

    /// Returns a snapshot of every stored entity in unspecified order.
    pub fn find_all(&self) -> Vec<E> {
        self.entries
            .iter()
            .map(|entry| entry.value().clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<E: Entity> Default for MemoryStore<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Entity> Repository<E> for MemoryStore<E> {
    fn save(&self, entity: E) -> RepoResult<E> {
        self.try_save(entity).ok_or(RepoError::IdsExhausted { kind: E::KIND })
    }

    fn delete_by_id(&self, id: EntityId) -> RepoResult<bool> {
        Ok(MemoryStore::delete_by_id(self, id))
    }

    fn update(&self, entity: &E) -> RepoResult<bool> {
        Ok(MemoryStore::update(self, entity))
    }

    fn find_by_id(&self, id: EntityId) -> RepoResult<Option<E>> {
        Ok(MemoryStore::find_by_id(self, id))
    }

    fn find_all(&self) -> RepoResult<Vec<E>> {
        Ok(MemoryStore::find_all(self))
    }
}

#[cfg(test)]
mod tests {
    use super::MemoryStore;
    use crate::model::file::File;
    use crate::repo::{RepoError, Repository};
    use dashmap::DashMap;
    use std::collections::HashSet;
    use std::sync::atomic::AtomicI32;
    use std::sync::Arc;
    use std::thread;

    fn store_near_id_limit() -> MemoryStore<File> {
        MemoryStore {
            next_id: AtomicI32::new(i32::MAX - 1),
            entries: DashMap::new(),
        }
    }

    #[test]
    fn first_issued_id_is_one() {
        let store = MemoryStore::new();
        let saved = store.save(File::new("cv.pdf", "files/cv.pdf"));
        assert_eq!(saved.id, 1);
    }

    #[test]
    fn try_save_stops_at_the_last_positive_id() {
        let store = store_near_id_limit();

        let last = store.try_save(File::new("last", "files/last")).unwrap();
        assert_eq!(last.id, i32::MAX);

        assert!(store.try_save(File::new("over", "files/over")).is_none());
        assert!(store.try_save(File::new("over", "files/over")).is_none());
        assert_eq!(store.len(), 1);
        assert!(store.find_all().iter().all(|file| file.id > 0));
    }

    #[test]
    fn repository_save_reports_exhausted_ids() {
        let store = store_near_id_limit();
        Repository::save(&store, File::new("last", "files/last")).unwrap();

        let err = Repository::save(&store, File::new("over", "files/over")).unwrap_err();
        assert!(matches!(err, RepoError::IdsExhausted { kind: "file" }));
    }

    #[test]
    #[should_panic(expected = "file id space exhausted")]
    fn save_panics_when_ids_run_out() {
        let store = store_near_id_limit();
        store.save(File::new("last", "files/last"));
        store.save(File::new("over", "files/over"));
    }

    #[test]
    fn save_overwrites_caller_supplied_id() {
        let store = MemoryStore::new();
        let mut file = File::new("a", "files/a");
        file.id = 42;

        let saved = store.save(file);

        assert_eq!(saved.id, 1);
        assert!(store.find_by_id(42).is_none());
    }

    #[test]
    fn update_keeps_stored_id_and_replaces_fields() {
        let store = MemoryStore::new();
        let saved = store.save(File::new("a", "files/a"));

        let replacement = File {
            id: saved.id,
            name: "b".to_string(),
            path: "files/b".to_string(),
        };
        assert!(store.update(&replacement));
        assert_eq!(store.find_by_id(saved.id), Some(replacement));
    }

    #[test]
    fn update_does_not_resurrect_deleted_id() {
        let store = MemoryStore::new();
        let saved = store.save(File::new("a", "files/a"));
        assert!(store.delete_by_id(saved.id));

        assert!(!store.update(&saved));
        assert!(store.is_empty());
    }

    #[test]
    fn concurrent_saves_never_share_an_id() {
        let store = Arc::new(MemoryStore::<File>::new());
        let handles: Vec<_> = (0..8)
            .map(|worker| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    (0..250)
                        .map(|n| store.save(File::new(format!("{worker}-{n}"), "p")).id)
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut ids = HashSet::new();
        for handle in handles {
            let issued = handle.join().unwrap();
            assert!(issued.windows(2).all(|pair| pair[0] < pair[1]));
            ids.extend(issued);
        }

        assert_eq!(ids.len(), 2000);
        assert_eq!(store.len(), 2000);
        assert_eq!(ids.iter().max(), Some(&2000));
    }

    #[test]
    fn concurrent_update_and_delete_leave_no_ghost_entry() {
        let store = Arc::new(MemoryStore::<File>::new());
        let saved: Vec<_> = (0..200)
            .map(|n| store.save(File::new(format!("f{n}"), "p")))
            .collect();

        thread::scope(|scope| {
            scope.spawn(|| {
                for file in &saved {
                    store.delete_by_id(file.id);
                }
            });
            scope.spawn(|| {
                for file in &saved {
                    let mut renamed = file.clone();
                    renamed.name.push_str("-renamed");
                    store.update(&renamed);
                }
            });
        });

        assert!(store.is_empty());
    }
}
