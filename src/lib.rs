pub mod app;
pub mod domain;
pub mod infra;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::database_service::DatabaseService;
pub use app::error::{Resource, ServiceError, ServiceResult};
pub use domain::model::{
    Customer, CustomerChanges, NewCustomer, NewRestaurant, NewReview, Restaurant,
    RestaurantChanges, Review,
};
pub use domain::validation::ValidationError;
