//! Development seed data.

use crate::app::database_service::DatabaseService;
use crate::domain::model::{NewCustomer, NewRestaurant, NewReview};
use tracing::info;

/// Row counts written by [`run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub restaurants: usize,
    pub customers: usize,
    pub reviews: usize,
}

const RESTAURANTS: [(&str, &str, i64); 3] = [
    ("The Gourmet Spot", "123 Main Street, Downtown", 3),
    ("Pizza Palace", "456 Oak Avenue, Midtown", 2),
    ("Fine Dining Experience", "789 Elite Boulevard, Uptown", 4),
];

const CUSTOMERS: [(&str, &str); 3] = [
    ("John Doe", "john@example.com"),
    ("Jane Smith", "jane@example.com"),
    ("Bob Johnson", "bob@example.com"),
];

/// `(rating, comment)`; the n-th review links the n-th customer and restaurant.
const REVIEWS: [(i64, &str); 3] = [
    (5, "Excellent food and service!"),
    (4, "Great pizza, will come back!"),
    (3, "Good but overpriced"),
];

/// Wipes all three tables and inserts the fixed development data set.
pub async fn run(db: &DatabaseService) -> anyhow::Result<SeedSummary> {
    db.clear_db().await?;

    let mut restaurants = Vec::with_capacity(RESTAURANTS.len());
    for (name, address, price_range) in RESTAURANTS {
        let new = NewRestaurant::new(name, address, Some(price_range))?;
        restaurants.push(db.create_restaurant(new).await?);
    }

    let mut customers = Vec::with_capacity(CUSTOMERS.len());
    for (name, email) in CUSTOMERS {
        customers.push(db.create_customer(NewCustomer::new(name, email)?).await?);
    }

    let mut reviews = 0;
    for (((rating, comment), customer), restaurant) in
        REVIEWS.iter().zip(&customers).zip(&restaurants)
    {
        let new = NewReview::new(*rating, Some(*comment), customer.id, restaurant.id)?;
        db.create_review(new).await?;
        reviews += 1;
    }

    let summary = SeedSummary {
        restaurants: restaurants.len(),
        customers: customers.len(),
        reviews,
    };
    info!(?summary, "database seeded");
    Ok(summary)
}
