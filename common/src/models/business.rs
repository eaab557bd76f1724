use std::fmt;

use crate::models::rating::AverageRating;
use crate::utils::text::{self, normalize_location};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BusinessId(pub i64);

impl fmt::Display for BusinessId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stored directory entry.
///
/// `average_rating` is a cache of the mean over the business's reviews. It is
/// refreshed after every recorded review and is never the source of truth.
#[derive(Debug, Clone, PartialEq)]
pub struct Business {
    pub id: BusinessId,
    pub name: String,
    pub category: String,
    pub location: String,
    pub contact: String,
    pub website: Option<String>,
    pub average_rating: AverageRating,
}

impl Business {
    pub fn display_name(&self) -> String {
        text::title_case(&self.name)
    }

    pub fn display_location(&self) -> String {
        text::title_case(&self.location)
    }
}

/// Input for registering a business.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBusiness {
    pub name: String,
    pub category: String,
    pub location: String,
    pub contact: String,
    pub website: Option<String>,
}

impl NewBusiness {
    /// Location is stored lowercased; a blank website is stored as absent.
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        location: &str,
        contact: impl Into<String>,
        website: Option<&str>,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            location: normalize_location(location),
            contact: contact.into(),
            website: website.and_then(text::non_empty),
        }
    }
}

/// One row of a listing or search result.
#[derive(Debug, Clone, PartialEq)]
pub struct BusinessListing {
    pub id: BusinessId,
    pub name: String,
    pub category: String,
    pub location: String,
    pub contact: String,
    pub rating: AverageRating,
}

impl BusinessListing {
    pub fn with_rating(business: Business, rating: AverageRating) -> Self {
        Self {
            id: business.id,
            name: business.name,
            category: business.category,
            location: business.location,
            contact: business.contact,
            rating,
        }
    }
}

impl From<Business> for BusinessListing {
    fn from(business: Business) -> Self {
        let rating = business.average_rating;
        Self::with_rating(business, rating)
    }
}

/// Location is required, category is optional. Both are case-insensitive
/// substring filters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilter {
    pub location: String,
    pub category: Option<String>,
}

impl SearchFilter {
    pub fn location(location: &str) -> Self {
        Self {
            location: normalize_location(location),
            category: None,
        }
    }

    pub fn with_category(mut self, category: &str) -> Self {
        self.category = Some(category.trim().to_lowercase());
        self
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
