//! Leaving a review.
//!
//! The operator names a business loosely ("joe", "springfield"), picks the
//! right one out of every match, then rates it. Nothing is written until the
//! rating has been validated. The review row and the refreshed average are
//! two separate commits; if the process dies in between, the cached average
//! stays stale until the next review, and [`QueryEngine::list`] still shows
//! the correct value because it recomputes.
//!
//! [`QueryEngine::list`]: crate::application::services::query::QueryEngine::list

use localconnect_common::error::DirectoryResult;
use localconnect_common::models::business::Business;
use localconnect_common::models::rating::{AverageRating, Rating};
use localconnect_common::models::review::{NewReview, Review};
use tracing::{debug, info, warn};

use crate::application::services::rating::RatingAggregator;
use crate::ports::outbound::directory_store::DirectoryStore;
use crate::ports::outbound::review_prompter::ReviewPrompter;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewRequest {
    pub reviewer_name: String,
    pub name_hint: String,
    pub location_hint: String,
}

impl ReviewRequest {
    pub fn new(reviewer_name: &str, name_hint: &str, location_hint: &str) -> Self {
        Self {
            reviewer_name: reviewer_name.trim().to_string(),
            name_hint: name_hint.trim().to_lowercase(),
            location_hint: location_hint.trim().to_lowercase(),
        }
    }
}

/// Every business matching a name/location hint.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    NotFound,
    Unique(Business),
    /// More than one match. The caller has to pick; none is chosen for it.
    Ambiguous(Vec<Business>),
}

impl Resolution {
    fn from_matches(mut matches: Vec<Business>) -> Self {
        match matches.len() {
            0 => Resolution::NotFound,
            1 => Resolution::Unique(matches.remove(0)),
            _ => Resolution::Ambiguous(matches),
        }
    }

    pub fn candidates(&self) -> &[Business] {
        match self {
            Resolution::NotFound => &[],
            Resolution::Unique(business) => std::slice::from_ref(business),
            Resolution::Ambiguous(businesses) => businesses,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ReviewOutcome {
    NotFound,
    Cancelled,
    Recorded {
        review: Review,
        business: Business,
        average: AverageRating,
    },
}

pub struct ReviewWorkflow<'a> {
    store: &'a dyn DirectoryStore,
}

impl<'a> ReviewWorkflow<'a> {
    pub fn new(store: &'a dyn DirectoryStore) -> Self {
        Self { store }
    }

    pub fn resolve(&self, name_hint: &str, location_hint: &str) -> DirectoryResult<Resolution> {
        let matches = self.store.find_businesses(name_hint, location_hint)?;
        debug!(name_hint, location_hint, matches = matches.len(), "resolved business");
        Ok(Resolution::from_matches(matches))
    }

    /// Runs the whole review flow against `prompter`.
    ///
    /// An invalid rating is returned as [`DirectoryError::InvalidRating`]
    /// with nothing written.
    ///
    /// [`DirectoryError::InvalidRating`]: localconnect_common::error::DirectoryError::InvalidRating
    pub fn leave_review(
        &self,
        request: &ReviewRequest,
        prompter: &mut dyn ReviewPrompter,
    ) -> DirectoryResult<ReviewOutcome> {
        let resolution = self.resolve(&request.name_hint, &request.location_hint)?;
        let candidates = resolution.candidates();
        if candidates.is_empty() {
            return Ok(ReviewOutcome::NotFound);
        }

        let Some(business) = prompter
            .choose(candidates)?
            .and_then(|idx| candidates.get(idx))
        else {
            debug!("review cancelled at confirmation");
            return Ok(ReviewOutcome::Cancelled);
        };

        let rating = prompter.rating()?.parse::<Rating>().inspect_err(|err| {
            warn!(business = %business.id, "{err}");
        })?;
        let comment = prompter.comment()?;

        let review = self
            .store
            .insert_review(&NewReview::new(business.id, &request.reviewer_name, rating, comment))?;
        info!(business = %business.id, reviewer = %review.reviewer_name, %rating, "review recorded");

        let average = RatingAggregator::new(self.store).refresh(business.id)?;

        Ok(ReviewOutcome::Recorded {
            review,
            business: Business {
                average_rating: average,
                ..business.clone()
            },
            average,
        })
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
