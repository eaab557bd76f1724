//! # Adapters Layer (Infrastructure)
//!
//! Concrete implementations of [`crate::ports`].
//!
//! * **[`sqlite`]**: the [`crate::ports::outbound::directory_store::DirectoryStore`] backed by a local SQLite file.
//!
//! The terminal-side [`crate::ports::outbound::review_prompter::ReviewPrompter`]
//! lives in the CLI crate.

pub mod sqlite;
