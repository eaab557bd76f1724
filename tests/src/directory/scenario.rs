#![cfg(test)]
use localconnect_common::config::Config;
use localconnect_common::error::{DirectoryError, DirectoryResult};
use localconnect_common::models::business::{Business, BusinessListing, NewBusiness, SearchFilter};
use localconnect_common::models::rating::AverageRating;
use localconnect_core::{
    DirectoryStore, QueryEngine, RatingAggregator, ReviewOutcome, ReviewPrompter, ReviewRequest,
    ReviewWorkflow, SqliteStore,
};

/// Accepts the first candidate and answers with queued ratings.
struct Operator {
    ratings: Vec<&'static str>,
}

impl ReviewPrompter for Operator {
    fn choose(&mut self, _candidates: &[Business]) -> DirectoryResult<Option<usize>> {
        Ok(Some(0))
    }

    fn rating(&mut self) -> DirectoryResult<String> {
        Ok(self.ratings.remove(0).to_string())
    }

    fn comment(&mut self) -> DirectoryResult<String> {
        Ok(String::new())
    }
}

fn open_store(dir: &tempfile::TempDir) -> SqliteStore {
    let cfg = Config::with_db_path(dir.path().join("local_connect.db"));
    let store = SqliteStore::new(&cfg);
    store.initialize().expect("schema");
    store
}

fn add_sample_businesses(store: &SqliteStore) {
    let engine = QueryEngine::new(store);
    engine
        .add(&NewBusiness::new("Joe's Diner", "Restaurant", "Springfield", "555-1234", Some("")))
        .unwrap();
    engine
        .add(&NewBusiness::new("Jane's Cafe", "Cafe", "Shelbyville", "555-9999", Some("")))
        .unwrap();
}

fn find<'a>(listings: &'a [BusinessListing], name: &str) -> &'a BusinessListing {
    listings
        .iter()
        .find(|l| l.name == name)
        .unwrap_or_else(|| panic!("{name} missing from listing"))
}

/// Two reviews (4 then 2) for Joe's Diner average to 3.0, while Jane's Cafe
/// stays unrated.
#[test]
fn two_reviews_average_to_three() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&dir);
    add_sample_businesses(&store);

    let workflow = ReviewWorkflow::new(&store);
    let request = ReviewRequest::new("Homer", "Joe's Diner", "Springfield");
    let mut operator = Operator { ratings: vec!["4", "2"] };

    let first = workflow.leave_review(&request, &mut operator).unwrap();
    assert!(matches!(first, ReviewOutcome::Recorded { average: AverageRating::Score(a), .. } if a == 4.0));
    let second = workflow.leave_review(&request, &mut operator).unwrap();
    let joes_id = match second {
        ReviewOutcome::Recorded { business, average, .. } => {
            assert_eq!(average, AverageRating::Score(3.0));
            business.id
        }
        other => panic!("expected recorded review, got {other:?}"),
    };

    assert_eq!(
        RatingAggregator::new(&store).average(joes_id).unwrap(),
        AverageRating::Score(3.0)
    );

    let listings = QueryEngine::new(&store).list().unwrap();
    assert_eq!(listings.len(), 2);
    assert_eq!(find(&listings, "Joe's Diner").rating.to_string(), "3.0");
    assert_eq!(find(&listings, "Jane's Cafe").rating.to_string(), "No ratings yet");
}

#[test]
fn search_filters_by_location_then_category() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&dir);
    add_sample_businesses(&store);
    let engine = QueryEngine::new(&store);
    engine
        .add(&NewBusiness::new("Springfield Grounds", "Coffee Cafe", "springfield", "555-0001", None))
        .unwrap();

    let springfield = engine.search(&SearchFilter::location("springfield")).unwrap();
    assert_eq!(springfield.len(), 2);
    assert!(springfield.iter().all(|b| b.location.contains("springfield")));

    let cafes = engine
        .search(&SearchFilter::location("spring").with_category("cafe"))
        .unwrap();
    assert_eq!(cafes.len(), 1);
    assert_eq!(cafes[0].name, "Springfield Grounds");

    assert!(engine.search(&SearchFilter::location("ogdenville")).unwrap().is_empty());
}

#[test]
fn rejected_ratings_never_touch_the_store() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&dir);
    add_sample_businesses(&store);
    let workflow = ReviewWorkflow::new(&store);
    let request = ReviewRequest::new("Lisa", "jane", "shelby");

    let mut operator = Operator {
        ratings: vec!["0", "6", "3.5", "great", "-2"],
    };
    for _ in 0..5 {
        let err = workflow.leave_review(&request, &mut operator).unwrap_err();
        assert!(matches!(err, DirectoryError::InvalidRating { .. }));
    }

    let janes = store.find_businesses("jane", "shelby").unwrap().remove(0);
    assert!(store.reviews_for(janes.id).unwrap().is_empty());
    assert_eq!(janes.average_rating, AverageRating::NoRatings);
}
