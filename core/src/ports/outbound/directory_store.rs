use localconnect_common::error::DirectoryResult;
use localconnect_common::models::business::{Business, BusinessId, NewBusiness, SearchFilter};
use localconnect_common::models::rating::{AverageRating, Rating};
use localconnect_common::models::review::{NewReview, Review};

/// Durable storage for businesses and their reviews.
///
/// Implementations must not hold state between calls; each method acquires
/// access to the store, does its work, commits, and releases it.
pub trait DirectoryStore {
    /// Creates the tables if they are missing. Safe to call repeatedly.
    fn initialize(&self) -> DirectoryResult<()>;

    fn insert_business(&self, business: &NewBusiness) -> DirectoryResult<Business>;

    fn business(&self, id: BusinessId) -> DirectoryResult<Option<Business>>;

    /// Every business in insertion order.
    fn all_businesses(&self) -> DirectoryResult<Vec<Business>>;

    /// Businesses whose location contains `filter.location` and, when set,
    /// whose category contains `filter.category`. Case-insensitive.
    fn search_businesses(&self, filter: &SearchFilter) -> DirectoryResult<Vec<Business>>;

    /// Businesses whose name and location contain the given hints.
    /// Case-insensitive.
    fn find_businesses(&self, name_hint: &str, location_hint: &str) -> DirectoryResult<Vec<Business>>;

    /// Fails if `review.business_id` does not reference a stored business.
    fn insert_review(&self, review: &NewReview) -> DirectoryResult<Review>;

    fn reviews_for(&self, id: BusinessId) -> DirectoryResult<Vec<Review>>;

    fn ratings_for(&self, id: BusinessId) -> DirectoryResult<Vec<Rating>>;

    /// Overwrites the cached average of a business.
    fn set_average_rating(&self, id: BusinessId, average: AverageRating) -> DirectoryResult<()>;
}
