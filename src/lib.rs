//! `orm-drills` - CRUD and aggregate query drills over `SeaORM`
//!
//! This crate collects small data-access operations against a `SQLite` schema:
//! standalone records (pets, artifacts, locations, cars, tasks, hotel rooms,
//! characters) and related entities (authors/books, artists/songs,
//! products/reviews, drivers/licenses, owners/cars/registrations).

// Deny the most critical lints that could lead to bugs or security issues
#![deny(
    // Security and correctness
    unsafe_code,
    unsafe_op_in_unsafe_fn,

    // Code quality - things that are almost always bugs
    unreachable_code,
    unreachable_patterns,
    unused_must_use,

    // Documentation - broken links are bugs
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
)]
// Warn on things that should be fixed but aren't necessarily bugs
#![warn(
    missing_docs,
    future_incompatible,
    rust_2018_idioms,

    // Clippy groups
    clippy::all,
    clippy::pedantic,
    clippy::nursery,

    // Restriction lints the groups above leave out
    clippy::clone_on_ref_ptr,
    clippy::dbg_macro,
    clippy::exit,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used,
)]
// Every query returns `Result`, and the error enum documents the failure modes
#![allow(clippy::missing_errors_doc, clippy::module_name_repetitions)]

// Note: `missing_docs` is set to `warn` instead of `deny` because
// `DeriveEntityModel` generates undocumented `Column`/`PrimaryKey` items.

/// Configuration management for database and seed data
pub mod config;
/// Core query operations - framework-agnostic record and relation operations
pub mod core;
/// SeaORM entity definitions for database tables
pub mod entities;
/// Unified error types and result handling
pub mod errors;
/// Database population from seed data
pub mod seed;

#[cfg(test)]
pub mod test_utils;
