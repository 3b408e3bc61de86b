use chrono::{NaiveDate, NaiveDateTime};
use dreamjob_core::{seeded_vacancy_repository, MemoryVacancyRepository, Vacancy};
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

fn at(day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2023, 7, day)
        .unwrap()
        .and_hms_opt(8, 0, 0)
        .unwrap()
}

fn vacancy(title: &str) -> Vacancy {
    Vacancy::new(title, format!("{title} description"), at(1), 2)
}

#[test]
fn fresh_store_is_empty_until_seed_is_loaded() {
    let repo = MemoryVacancyRepository::new();
    assert!(repo.is_empty());

    repo.load_seed(dreamjob_core::vacancy_seed());
    assert_eq!(repo.len(), 6);
}

#[test]
fn save_returns_strictly_increasing_ids() {
    let repo = seeded_vacancy_repository();

    let ids: Vec<_> = ["a", "b", "c", "d"]
        .into_iter()
        .map(|title| repo.save(vacancy(title)).id)
        .collect();

    assert_eq!(ids, vec![7, 8, 9, 10]);
}

#[test]
fn save_three_then_find_all_contains_exactly_them() {
    let repo = MemoryVacancyRepository::new();
    let a = repo.save(vacancy("a"));
    let b = repo.save(vacancy("b"));
    let c = repo.save(vacancy("c"));

    assert_eq!((b.id, c.id), (a.id + 1, a.id + 2));

    let mut all = repo.find_all();
    all.sort_by_key(|item| item.id);
    assert_eq!(all, vec![a, b, c]);
}

#[test]
fn delete_is_true_exactly_once() {
    let repo = seeded_vacancy_repository();

    assert!(repo.delete_by_id(3));
    assert!(!repo.delete_by_id(3));
    assert_eq!(repo.find_by_id(3), None);
    assert_eq!(repo.len(), 5);
}

#[test]
fn id_is_not_reused_after_delete() {
    let repo = MemoryVacancyRepository::new();
    let first = repo.save(vacancy("first"));
    assert!(repo.delete_by_id(first.id));

    let second = repo.save(vacancy("second"));
    assert_ne!(second.id, first.id);
}

#[test]
fn update_replaces_fields_and_keeps_id() {
    let repo = seeded_vacancy_repository();
    let mut changed = repo.find_by_id(2).unwrap();
    changed.title = "Junior Rust Developer".to_string();
    changed.visible = false;
    changed.creation_date = at(15);
    changed.file_id = 11;

    assert!(repo.update(&changed));
    assert_eq!(repo.find_by_id(2), Some(changed));
}

#[test]
fn never_issued_id_is_absent_everywhere() {
    let repo = seeded_vacancy_repository();
    let mut ghost = vacancy("ghost");
    ghost.id = 0;

    assert_eq!(repo.find_by_id(0), None);
    assert!(!repo.update(&ghost));
    assert!(!repo.delete_by_id(0));
    assert_eq!(repo.len(), 6);
}

#[test]
fn parallel_saves_after_seed_get_unique_ids() {
    let repo = Arc::new(seeded_vacancy_repository());

    let handles: Vec<_> = (0..4)
        .map(|worker| {
            let repo = Arc::clone(&repo);
            thread::spawn(move || {
                (0..100)
                    .map(|n| repo.save(vacancy(&format!("w{worker}-{n}"))).id)
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let ids: HashSet<_> = handles
        .into_iter()
        .flat_map(|handle| handle.join().unwrap())
        .collect();

    assert_eq!(ids.len(), 400);
    assert!(ids.iter().all(|id| (7..=406).contains(id)));
    assert_eq!(repo.len(), 406);
}

#[test]
fn readers_never_observe_partial_updates() {
    let repo = Arc::new(MemoryVacancyRepository::new());
    let saved = repo.save(vacancy("v0"));

    thread::scope(|scope| {
        scope.spawn(|| {
            for n in 1..500 {
                let mut next = saved.clone();
                next.title = format!("v{n}");
                next.description = format!("v{n} description");
                assert!(repo.update(&next));
            }
        });
        scope.spawn(|| {
            for _ in 0..500 {
                let current = repo.find_by_id(saved.id).unwrap();
                assert_eq!(current.description, format!("{} description", current.title));
            }
        });
    });
}
