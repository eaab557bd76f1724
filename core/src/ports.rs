//! # Ports Layer (Boundaries)
//!
//! Traits that isolate the directory use cases from storage and from the
//! terminal. The application depends on these; adapters implement them.

pub mod outbound;
