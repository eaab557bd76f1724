//! # Directory Models
//!
//! * [`business::Business`]: a directory entry, with its cached average rating.
//! * [`review::Review`]: a rating plus comment attached to exactly one business.
//! * [`rating::Rating`] / [`rating::AverageRating`]: validated scores and their aggregate.

pub mod business;
pub mod rating;
pub mod review;
