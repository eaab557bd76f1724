#![cfg(test)]
use localconnect_common::config::Config;
use localconnect_common::models::business::{BusinessId, NewBusiness};
use localconnect_common::models::rating::{AverageRating, Rating};
use localconnect_common::models::review::NewReview;
use localconnect_core::{DirectoryStore, QueryEngine, RatingAggregator, SqliteStore};

fn config(dir: &tempfile::TempDir) -> Config {
    Config::with_db_path(dir.path().join("persist.db"))
}

#[test]
fn data_survives_reinitialization_and_new_handles() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = config(&dir);

    let id = {
        let store = SqliteStore::new(&cfg);
        store.initialize().unwrap();
        let created = QueryEngine::new(&store)
            .add(&NewBusiness::new("Moe's Tavern", "Bar", "Springfield", "555-0000", None))
            .unwrap();
        created.id
    };

    let store = SqliteStore::new(&cfg);
    store.initialize().unwrap();
    store.initialize().unwrap();

    let listings = QueryEngine::new(&store).list().unwrap();
    assert_eq!(listings.len(), 1);
    assert_eq!(listings[0].id, id);
    assert_eq!(listings[0].name, "Moe's Tavern");
    assert_eq!(listings[0].category, "Bar");
    assert_eq!(listings[0].location, "springfield");
    assert_eq!(listings[0].contact, "555-0000");
    assert_eq!(listings[0].rating, AverageRating::NoRatings);
}

/// A review committed without the follow-up average refresh (a crash between
/// the two commits) leaves the cache stale; listing still shows the truth and
/// the next refresh repairs the cache.
#[test]
fn stale_cache_window_is_visible_only_to_search() {
    let dir = tempfile::tempdir().unwrap();
    let store = SqliteStore::new(&config(&dir));
    store.initialize().unwrap();
    let engine = QueryEngine::new(&store);
    let moes = engine
        .add(&NewBusiness::new("Moe's Tavern", "Bar", "Springfield", "555-0000", None))
        .unwrap();

    store
        .insert_review(&NewReview::new(moes.id, "barney", Rating::new(5).unwrap(), "duff"))
        .unwrap();

    assert_eq!(engine.list().unwrap()[0].rating, AverageRating::Score(5.0));
    assert_eq!(store.business(moes.id).unwrap().unwrap().average_rating, AverageRating::NoRatings);

    RatingAggregator::new(&store).refresh(moes.id).unwrap();
    assert_eq!(store.business(moes.id).unwrap().unwrap().average_rating, AverageRating::Score(5.0));
}

#[test]
fn storage_failure_is_reported_per_operation() {
    let dir = tempfile::tempdir().unwrap();
    let missing_parent = dir.path().join("no-such-dir").join("db.sqlite");
    let broken = SqliteStore::new(&Config::with_db_path(missing_parent));
    assert!(broken.initialize().is_err());
    assert!(broken.all_businesses().is_err());

    let working = SqliteStore::new(&config(&dir));
    working.initialize().unwrap();
    assert!(working.business(BusinessId(1)).unwrap().is_none());
}
