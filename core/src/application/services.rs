//! # Application Services
//!
//! * [`rating::RatingAggregator`]: computes and caches a business's average rating.
//! * [`query::QueryEngine`]: registers, lists and searches businesses.
//! * [`review::ReviewWorkflow`]: resolves a business from loose text and records a review.

pub mod query;
pub mod rating;
pub mod review;
