//! Review inserts and per-business reads.

use rusqlite::{params, Connection, Row};

use localconnect_common::models::business::BusinessId;
use localconnect_common::models::rating::Rating;
use localconnect_common::models::review::{NewReview, Review, ReviewId};

fn rating_from_column(row: &Row<'_>, idx: usize) -> rusqlite::Result<Rating> {
    let raw: i64 = row.get(idx)?;
    u8::try_from(raw)
        .ok()
        .and_then(|value| Rating::new(value).ok())
        .ok_or(rusqlite::Error::IntegralValueOutOfRange(idx, raw))
}

fn row_to_review(row: &Row<'_>) -> rusqlite::Result<Review> {
    Ok(Review {
        id: ReviewId(row.get(0)?),
        business_id: BusinessId(row.get(1)?),
        reviewer_name: row.get(2)?,
        rating: rating_from_column(row, 3)?,
        comment: row.get(4)?,
    })
}

pub fn insert(conn: &Connection, review: &NewReview) -> rusqlite::Result<Review> {
    conn.execute(
        "INSERT INTO reviews (business_id, reviewer_name, rating, comment)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            review.business_id.0,
            review.reviewer_name,
            review.rating.value(),
            review.comment,
        ],
    )?;
    let id = ReviewId(conn.last_insert_rowid());
    tracing::debug!(business = %review.business_id, rating = %review.rating, "inserted review");

    Ok(Review {
        id,
        business_id: review.business_id,
        reviewer_name: review.reviewer_name.clone(),
        rating: review.rating,
        comment: review.comment.clone(),
    })
}

pub fn for_business(conn: &Connection, id: BusinessId) -> rusqlite::Result<Vec<Review>> {
    let mut stmt = conn.prepare(
        "SELECT id, business_id, reviewer_name, rating, comment
         FROM reviews WHERE business_id = ?1 ORDER BY id",
    )?;
    let rows = stmt.query_map(params![id.0], row_to_review)?;
    rows.collect()
}

pub fn ratings_for_business(conn: &Connection, id: BusinessId) -> rusqlite::Result<Vec<Rating>> {
    let mut stmt = conn.prepare("SELECT rating FROM reviews WHERE business_id = ?1")?;
    let rows = stmt.query_map(params![id.0], |row| rating_from_column(row, 0))?;
    rows.collect()
}
