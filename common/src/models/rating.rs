//! # Ratings
//!
//! A [`Rating`] is a single reviewer's score and can only hold 1 through 5.
//! An [`AverageRating`] is the aggregate over all of a business's reviews,
//! with a dedicated [`AverageRating::NoRatings`] state for a business nobody
//! has reviewed yet.

use std::fmt;
use std::str::FromStr;

use crate::error::DirectoryError;

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

pub const NO_RATINGS_LABEL: &str = "No ratings yet";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rating(u8);

impl Rating {
    pub fn new(value: u8) -> Result<Self, DirectoryError> {
        if (MIN_RATING..=MAX_RATING).contains(&value) {
            Ok(Self(value))
        } else {
            Err(DirectoryError::InvalidRating {
                input: value.to_string(),
            })
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl FromStr for Rating {
    type Err = DirectoryError;

    /// Parses operator input such as `" 4 "`.
    ///
    /// Anything that is not a plain integer in range is rejected, including
    /// decimals (`"4.5"`), signs (`"-1"`) and empty input.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let invalid = || DirectoryError::InvalidRating {
            input: trimmed.to_string(),
        };

        let value: i64 = trimmed.parse().map_err(|_| invalid())?;
        u8::try_from(value)
            .ok()
            .and_then(|v| Rating::new(v).ok())
            .ok_or_else(invalid)
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Mean rating of a business, rounded to one decimal place.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum AverageRating {
    #[default]
    NoRatings,
    Score(f64),
}

impl AverageRating {
    pub fn from_ratings(ratings: &[Rating]) -> Self {
        if ratings.is_empty() {
            return AverageRating::NoRatings;
        }
        let sum: u32 = ratings.iter().map(|r| u32::from(r.value())).sum();
        let mean = f64::from(sum) / ratings.len() as f64;
        AverageRating::Score(round_one_decimal(mean))
    }

    /// Maps the nullable `avg_rating` column.
    pub fn from_column(value: Option<f64>) -> Self {
        value.map_or(AverageRating::NoRatings, AverageRating::Score)
    }

    pub fn to_column(self) -> Option<f64> {
        match self {
            AverageRating::NoRatings => None,
            AverageRating::Score(score) => Some(score),
        }
    }

    pub fn is_rated(self) -> bool {
        matches!(self, AverageRating::Score(_))
    }
}

impl fmt::Display for AverageRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AverageRating::NoRatings => f.write_str(NO_RATINGS_LABEL),
            AverageRating::Score(score) => write!(f, "{score:.1}"),
        }
    }
}

/// Rounds the exact binary value to one decimal with ties to even, so a
/// mean of 2.25 becomes 2.2 and 3.75 becomes 3.8.
fn round_one_decimal(value: f64) -> f64 {
    format!("{value:.1}").parse().unwrap_or(value)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;

    fn ratings(values: &[u8]) -> Vec<Rating> {
        values.iter().map(|v| Rating::new(*v).unwrap()).collect()
    }

    #[test]
    fn rating_accepts_every_value_in_range() {
        for value in 1..=5u8 {
            assert_eq!(Rating::new(value).unwrap().value(), value);
            assert_eq!(value.to_string().parse::<Rating>().unwrap().value(), value);
        }
    }

    #[test]
    fn rating_rejects_out_of_range_values() {
        assert!(Rating::new(0).is_err());
        assert!(Rating::new(6).is_err());
        assert!(Rating::new(u8::MAX).is_err());
    }

    #[test]
    fn rating_parse_rejects_non_numeric_input() {
        for input in ["", "   ", "four", "4.5", "-1", "0", "6", "99999999999999999999", "3 stars"] {
            let err = input.parse::<Rating>().unwrap_err();
            assert!(err.is_validation(), "expected validation error for {input:?}");
        }
    }

    #[test]
    fn rating_parse_trims_whitespace() {
        assert_eq!(" 4\n".parse::<Rating>().unwrap().value(), 4);
    }

    #[test]
    fn average_of_no_reviews_is_marker_not_zero() {
        let avg = AverageRating::from_ratings(&[]);
        assert_eq!(avg, AverageRating::NoRatings);
        assert_eq!(avg.to_column(), None);
        assert_eq!(avg.to_string(), "No ratings yet");
    }

    #[test]
    fn average_is_rounded_to_one_decimal() {
        assert_eq!(AverageRating::from_ratings(&ratings(&[4, 2])), AverageRating::Score(3.0));
        assert_eq!(AverageRating::from_ratings(&ratings(&[5, 4, 4])), AverageRating::Score(4.3));
        assert_eq!(AverageRating::from_ratings(&ratings(&[1, 2, 2])), AverageRating::Score(1.7));
        assert_eq!(AverageRating::from_ratings(&ratings(&[5])), AverageRating::Score(5.0));
    }

    #[test]
    fn average_ties_round_to_even() {
        assert_eq!(AverageRating::from_ratings(&ratings(&[1, 2, 3, 3])), AverageRating::Score(2.2));
        assert_eq!(AverageRating::from_ratings(&ratings(&[4, 4, 4, 5])), AverageRating::Score(4.2));
        assert_eq!(AverageRating::from_ratings(&ratings(&[3, 4, 4, 4])), AverageRating::Score(3.8));

        let mut mixed = vec![2u8; 17];
        mixed.extend([3, 3, 3]);
        assert_eq!(AverageRating::from_ratings(&ratings(&mixed)), AverageRating::Score(2.1));
    }

    #[test]
    fn average_display_always_shows_one_decimal() {
        assert_eq!(AverageRating::Score(3.0).to_string(), "3.0");
        assert_eq!(AverageRating::Score(4.3).to_string(), "4.3");
    }

    #[test]
    fn average_column_mapping_keeps_marker_distinct() {
        assert_eq!(AverageRating::from_column(None), AverageRating::NoRatings);
        assert_eq!(AverageRating::from_column(Some(0.0)), AverageRating::Score(0.0));
        assert_eq!(AverageRating::NoRatings.to_column(), None);
    }
}
