use crate::modules::catalog::model::ReviewRecord;

const REVIEWS: &[ReviewRecord] = &[
    ReviewRecord {
        id: 1,
        user: "Ron",
        comment: "Great product!",
        rating: 5,
    },
    ReviewRecord {
        id: 2,
        user: "Ana",
        comment: "Not bad",
        rating: 3,
    },
];

/// Read-only placeholder review source, fixed at compile time.
pub struct ReviewCrud;

impl ReviewCrud {
    pub fn find_all() -> &'static [ReviewRecord] {
        REVIEWS
    }

    pub fn count() -> usize {
        REVIEWS.len()
    }
}
