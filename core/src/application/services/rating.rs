use localconnect_common::error::DirectoryResult;
use localconnect_common::models::business::BusinessId;
use localconnect_common::models::rating::AverageRating;
use tracing::{debug, info};

use crate::ports::outbound::directory_store::DirectoryStore;

pub struct RatingAggregator<'a> {
    store: &'a dyn DirectoryStore,
}

impl<'a> RatingAggregator<'a> {
    pub fn new(store: &'a dyn DirectoryStore) -> Self {
        Self { store }
    }

    /// Live average over the business's reviews. An unknown business has no
    /// reviews and therefore no ratings.
    pub fn average(&self, id: BusinessId) -> DirectoryResult<AverageRating> {
        let ratings = self.store.ratings_for(id)?;
        let average = AverageRating::from_ratings(&ratings);
        debug!(business = %id, reviews = ratings.len(), %average, "computed average rating");
        Ok(average)
    }

    /// Recomputes the average and writes it onto the business.
    pub fn refresh(&self, id: BusinessId) -> DirectoryResult<AverageRating> {
        let average = self.average(id)?;
        self.store.set_average_rating(id, average)?;
        info!(business = %id, %average, "average rating refreshed");
        Ok(average)
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
