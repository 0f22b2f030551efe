//! Record types for restaurants, customers and reviews.
//!
//! `New*` values are validated at construction; persisted rows only change
//! through validating setters, so an invalid value never reaches storage.

pub mod customer;
pub mod restaurant;
pub mod review;

pub use customer::{Customer, CustomerChanges, NewCustomer};
pub use restaurant::{NewRestaurant, Restaurant, RestaurantChanges};
pub use review::{NewReview, Review};
