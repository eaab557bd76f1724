//! SQLite-backed directory store.
//!
//! The store is nothing more than a path. Each operation opens a fresh
//! connection, runs in SQLite's autocommit mode, and closes the connection
//! when it returns, so a failed operation never poisons the next one.

mod business_queries;
mod review_queries;
mod schema;

use std::path::{Path, PathBuf};

use rusqlite::Connection;
use tracing::debug;

use localconnect_common::config::Config;
use localconnect_common::error::DirectoryResult;
use localconnect_common::models::business::{Business, BusinessId, NewBusiness, SearchFilter};
use localconnect_common::models::rating::{AverageRating, Rating};
use localconnect_common::models::review::{NewReview, Review};

use crate::ports::outbound::directory_store::DirectoryStore;

#[derive(Debug, Clone)]
pub struct SqliteStore {
    db_path: PathBuf,
}

impl SqliteStore {
    pub fn new(config: &Config) -> Self {
        Self::open(&config.db_path)
    }

    pub fn open(db_path: &Path) -> Self {
        Self {
            db_path: db_path.to_path_buf(),
        }
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    fn connect(&self) -> DirectoryResult<Connection> {
        let conn = Connection::open(&self.db_path)?;
        schema::apply_pragmas(&conn)?;
        debug!(path = %self.db_path.display(), "opened store connection");
        Ok(conn)
    }

    fn with_conn<F, T>(&self, f: F) -> DirectoryResult<T>
    where
        F: FnOnce(&Connection) -> rusqlite::Result<T>,
    {
        let conn = self.connect()?;
        Ok(f(&conn)?)
    }
}

impl DirectoryStore for SqliteStore {
    fn initialize(&self) -> DirectoryResult<()> {
        self.with_conn(schema::create_tables)
    }

    fn insert_business(&self, business: &NewBusiness) -> DirectoryResult<Business> {
        self.with_conn(|conn| business_queries::insert(conn, business))
    }

    fn business(&self, id: BusinessId) -> DirectoryResult<Option<Business>> {
        self.with_conn(|conn| business_queries::get(conn, id))
    }

    fn all_businesses(&self) -> DirectoryResult<Vec<Business>> {
        self.with_conn(business_queries::all)
    }

    fn search_businesses(&self, filter: &SearchFilter) -> DirectoryResult<Vec<Business>> {
        self.with_conn(|conn| business_queries::search(conn, filter))
    }

    fn find_businesses(&self, name_hint: &str, location_hint: &str) -> DirectoryResult<Vec<Business>> {
        self.with_conn(|conn| business_queries::find_by_name_and_location(conn, name_hint, location_hint))
    }

    fn insert_review(&self, review: &NewReview) -> DirectoryResult<Review> {
        self.with_conn(|conn| review_queries::insert(conn, review))
    }

    fn reviews_for(&self, id: BusinessId) -> DirectoryResult<Vec<Review>> {
        self.with_conn(|conn| review_queries::for_business(conn, id))
    }

    fn ratings_for(&self, id: BusinessId) -> DirectoryResult<Vec<Rating>> {
        self.with_conn(|conn| review_queries::ratings_for_business(conn, id))
    }

    fn set_average_rating(&self, id: BusinessId, average: AverageRating) -> DirectoryResult<()> {
        self.with_conn(|conn| business_queries::set_average_rating(conn, id, average))
    }
}

/// Unicode case-insensitive substring test. Wildcard characters have no
/// special meaning.
pub(crate) fn contains_folded(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
