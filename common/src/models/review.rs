use crate::models::business::BusinessId;
use crate::models::rating::Rating;
use crate::utils::text::title_case;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReviewId(pub i64);

/// A recorded review. The owning business is fixed at creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    pub id: ReviewId,
    pub business_id: BusinessId,
    pub reviewer_name: String,
    pub rating: Rating,
    pub comment: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReview {
    pub business_id: BusinessId,
    pub reviewer_name: String,
    pub rating: Rating,
    pub comment: String,
}

impl NewReview {
    pub fn new(business_id: BusinessId, reviewer_name: &str, rating: Rating, comment: impl Into<String>) -> Self {
        Self {
            business_id,
            reviewer_name: title_case(reviewer_name.trim()),
            rating,
            comment: comment.into(),
        }
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
