//! # Local Connect Core
//!
//! The directory engine, organised the same way as the rest of the
//! workspace:
//!
//! * **[`application`]**: the use cases (listing, searching, reviewing, aggregating).
//! * **[`ports`]**: traits the use cases depend on.
//! * **[`adapters`]**: concrete implementations of the ports (SQLite).
//!
//! Domain models live in `localconnect-common` so the CLI can share them.

pub mod adapters;
pub mod application;
pub mod ports;

pub use adapters::sqlite::SqliteStore;
pub use application::services::query::QueryEngine;
pub use application::services::rating::RatingAggregator;
pub use application::services::review::{
    Resolution, ReviewOutcome, ReviewRequest, ReviewWorkflow,
};
pub use ports::outbound::directory_store::DirectoryStore;
pub use ports::outbound::review_prompter::ReviewPrompter;
