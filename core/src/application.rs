//! # Application Layer (Service Layer)
//!
//! Orchestrates the directory use cases. Services receive a
//! [`crate::ports::outbound::directory_store::DirectoryStore`] from the caller
//! and never reach for storage on their own.
//!
//! ## Contents
//! * **[`services`]**: one service per use case.

pub mod services;
