//! # Outbound Ports (Driven Actors)
//!
//! Contracts for interactions the application initiates:
//!
//! * [`directory_store::DirectoryStore`]: durable business and review storage.
//! * [`review_prompter::ReviewPrompter`]: asks the operator to confirm a
//!   business and supply a rating and comment.
pub mod directory_store;
pub mod review_prompter;
