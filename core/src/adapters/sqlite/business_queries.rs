//! Business CRUD and lookups.

use rusqlite::{params, Connection, OptionalExtension, Row};

use localconnect_common::models::business::{Business, BusinessId, NewBusiness, SearchFilter};
use localconnect_common::models::rating::AverageRating;

use super::contains_folded;

const BUSINESS_COLUMNS: &str = "id, name, category, location, contact, website, avg_rating";

fn row_to_business(row: &Row<'_>) -> rusqlite::Result<Business> {
    Ok(Business {
        id: BusinessId(row.get(0)?),
        name: row.get(1)?,
        category: row.get(2)?,
        location: row.get(3)?,
        contact: row.get(4)?,
        website: row.get(5)?,
        average_rating: AverageRating::from_column(row.get(6)?),
    })
}

pub fn insert(conn: &Connection, business: &NewBusiness) -> rusqlite::Result<Business> {
    conn.execute(
        "INSERT INTO businesses (name, category, location, contact, website)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            business.name,
            business.category,
            business.location,
            business.contact,
            business.website,
        ],
    )?;
    let id = BusinessId(conn.last_insert_rowid());
    tracing::debug!(id = %id, name = %business.name, "inserted business");

    Ok(Business {
        id,
        name: business.name.clone(),
        category: business.category.clone(),
        location: business.location.clone(),
        contact: business.contact.clone(),
        website: business.website.clone(),
        average_rating: AverageRating::NoRatings,
    })
}

pub fn get(conn: &Connection, id: BusinessId) -> rusqlite::Result<Option<Business>> {
    let sql = format!("SELECT {BUSINESS_COLUMNS} FROM businesses WHERE id = ?1");
    conn.query_row(&sql, params![id.0], row_to_business).optional()
}

pub fn all(conn: &Connection) -> rusqlite::Result<Vec<Business>> {
    let sql = format!("SELECT {BUSINESS_COLUMNS} FROM businesses ORDER BY id");
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map([], row_to_business)?;
    rows.collect()
}

/// Location and category are matched as case-insensitive substrings.
///
/// Folding is done in Rust; SQLite's `LOWER()` only folds ASCII.
pub fn search(conn: &Connection, filter: &SearchFilter) -> rusqlite::Result<Vec<Business>> {
    let businesses: Vec<Business> = all(conn)?
        .into_iter()
        .filter(|b| contains_folded(&b.location, &filter.location))
        .filter(|b| {
            filter
                .category
                .as_deref()
                .is_none_or(|category| contains_folded(&b.category, category))
        })
        .collect();
    tracing::debug!(matches = businesses.len(), "business search finished");
    Ok(businesses)
}

pub fn find_by_name_and_location(
    conn: &Connection,
    name_hint: &str,
    location_hint: &str,
) -> rusqlite::Result<Vec<Business>> {
    let name = name_hint.trim();
    let location = location_hint.trim();
    Ok(all(conn)?
        .into_iter()
        .filter(|b| contains_folded(&b.name, name) && contains_folded(&b.location, location))
        .collect())
}

pub fn set_average_rating(
    conn: &Connection,
    id: BusinessId,
    average: AverageRating,
) -> rusqlite::Result<()> {
    let updated = conn.execute(
        "UPDATE businesses SET avg_rating = ?1 WHERE id = ?2",
        params![average.to_column(), id.0],
    )?;
    if updated == 0 {
        tracing::debug!(id = %id, "no business to update average rating on");
    }
    Ok(())
}
