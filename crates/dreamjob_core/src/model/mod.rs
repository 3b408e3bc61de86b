//! Domain records stored by DreamJob repositories.
//!
//! # Responsibility
//! - Define the canonical records shared by memory and SQLite storage.
//! - Expose the `Entity` capability used by id-assigning stores.
//!
//! # Invariants
//! - A stored record's `id` is assigned by its repository, never by callers.
//! - Foreign keys (`city_id`, `file_id`) are plain integers; `0` means unset.

pub mod candidate;
pub mod city;
pub mod entity;
pub mod file;
pub mod vacancy;
