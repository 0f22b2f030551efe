use crate::domain::validation::{self, ValidationError};

/// A persisted review joined with the names of both parents.
///
/// Parents are referenced by id only; the names come from the read query,
/// never from a stored back-pointer.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Review {
    pub id: i64,
    pub rating: i64,
    pub comment: String,
    pub customer_id: i64,
    pub restaurant_id: i64,
    pub customer_name: String,
    pub restaurant_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReview {
    pub rating: i64,
    pub comment: String,
    pub customer_id: i64,
    pub restaurant_id: i64,
}

impl NewReview {
    pub fn new(
        rating: i64,
        comment: Option<&str>,
        customer_id: i64,
        restaurant_id: i64,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            rating: validation::rating(rating)?,
            comment: validation::comment(comment)?,
            customer_id,
            restaurant_id,
        })
    }
}
