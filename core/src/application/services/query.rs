use localconnect_common::error::DirectoryResult;
use localconnect_common::models::business::{Business, BusinessId, BusinessListing, NewBusiness, SearchFilter};
use localconnect_common::models::review::Review;
use tracing::{debug, info};

use crate::application::services::rating::RatingAggregator;
use crate::ports::outbound::directory_store::DirectoryStore;

/// Registers businesses and answers listing and search requests.
///
/// Results come back in insertion order. That is an artefact of the store,
/// not a promise.
pub struct QueryEngine<'a> {
    store: &'a dyn DirectoryStore,
}

impl<'a> QueryEngine<'a> {
    pub fn new(store: &'a dyn DirectoryStore) -> Self {
        Self { store }
    }

    pub fn add(&self, business: &NewBusiness) -> DirectoryResult<Business> {
        let created = self.store.insert_business(business)?;
        info!(id = %created.id, name = %created.name, "business added");
        Ok(created)
    }

    /// Every business with its average computed from the reviews right now,
    /// so a stale cached value is never shown here.
    pub fn list(&self) -> DirectoryResult<Vec<BusinessListing>> {
        let aggregator = RatingAggregator::new(self.store);
        let businesses = self.store.all_businesses()?;
        let mut listings = Vec::with_capacity(businesses.len());
        for business in businesses {
            let live = aggregator.average(business.id)?;
            listings.push(BusinessListing::with_rating(business, live));
        }
        Ok(listings)
    }

    /// Businesses matching the filter, with their cached average.
    pub fn search(&self, filter: &SearchFilter) -> DirectoryResult<Vec<BusinessListing>> {
        let matches = self.store.search_businesses(filter)?;
        debug!(
            location = %filter.location,
            category = filter.category.as_deref().unwrap_or("*"),
            matches = matches.len(),
            "search"
        );
        Ok(matches.into_iter().map(BusinessListing::from).collect())
    }

    pub fn reviews(&self, id: BusinessId) -> DirectoryResult<Vec<Review>> {
        self.store.reviews_for(id)
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
