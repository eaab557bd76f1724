use colored::*;

use crate::terminal::colors;
use localconnect_common::models::business::BusinessListing;
use localconnect_common::models::rating::AverageRating;
use localconnect_common::models::review::Review;
use localconnect_common::utils::text::title_case;

pub type Detail = (String, ColoredString);

pub fn rating_to_colored(rating: AverageRating) -> ColoredString {
    match rating {
        AverageRating::NoRatings => rating.to_string().color(colors::NO_RATING).italic(),
        AverageRating::Score(score) if score >= 4.0 => format!("⭐ {rating}").color(colors::RATING_HIGH).bold(),
        AverageRating::Score(score) if score >= 2.5 => format!("⭐ {rating}").color(colors::RATING_MID),
        AverageRating::Score(_) => format!("⭐ {rating}").color(colors::RATING_LOW),
    }
}

pub fn listing_to_details(listing: &BusinessListing) -> Vec<Detail> {
    vec![
        ("Category".to_string(), listing.category.normal()),
        ("Location".to_string(), title_case(&listing.location).normal()),
        ("Contact".to_string(), listing.contact.normal()),
        ("Rating".to_string(), rating_to_colored(listing.rating)),
    ]
}

pub fn review_to_details(review: &Review) -> Vec<Detail> {
    let stars: String = "★".repeat(usize::from(review.rating.value()));
    let mut details: Vec<Detail> = vec![(
        "Rating".to_string(),
        format!("{stars} ({})", review.rating).color(colors::ACCENT),
    )];
    if !review.comment.trim().is_empty() {
        details.push(("Comment".to_string(), review.comment.normal()));
    }
    details
}

/// One-line rendering used in quiet mode.
pub fn listing_to_line(listing: &BusinessListing) -> String {
    format!(
        "ID: {} | Name: {} | Category: {} | Location: {} | Contact: {} | {}",
        listing.id,
        listing.name,
        listing.category,
        title_case(&listing.location),
        listing.contact,
        rating_to_colored(listing.rating)
    )
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
