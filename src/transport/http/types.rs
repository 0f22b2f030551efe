use crate::app::database_service::DatabaseService;
use crate::domain::model::{Customer, Restaurant, RestaurantChanges, Review};
use crate::domain::validation::ValidationError;
use serde::{Deserialize, Deserializer, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use utoipa::ToSchema;

/// Shared handler state. The mutex makes each request run to completion
/// against the store before the next one starts.
#[derive(Clone)]
pub struct AppState {
    pub db_service: Arc<Mutex<DatabaseService>>,
}

impl AppState {
    pub fn new(db_service: DatabaseService) -> Self {
        Self {
            db_service: Arc::new(Mutex::new(db_service)),
        }
    }
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

/// Keeps an explicit `null` apart from an absent key: absent is `None`,
/// `null` is `Some(None)`.
fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// An absent key is fine; a key explicitly set to `null` is not a value.
fn reject_null<T>(
    field: Option<Option<T>>,
    name: &'static str,
) -> Result<Option<T>, ValidationError> {
    match field {
        None => Ok(None),
        Some(None) => Err(ValidationError::NullField(name)),
        Some(Some(value)) => Ok(Some(value)),
    }
}

#[derive(Deserialize, Debug, ToSchema)]
pub struct CreateRestaurantRequest {
    pub name: String,
    pub address: String,
    /// One of 1..=4. Defaults to 1 when omitted; `null` is rejected.
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<i64>)]
    pub price_range: Option<Option<i64>>,
}

impl CreateRestaurantRequest {
    pub fn price_range(&self) -> Result<Option<i64>, ValidationError> {
        reject_null(self.price_range, "price_range")
    }
}

/// Partial restaurant update. Only these keys are accepted; any other key
/// (including `id`) rejects the whole request, and so does a `null` value.
#[derive(Deserialize, Debug, Default, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct RestaurantPatch {
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub address: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<i64>)]
    pub price_range: Option<Option<i64>>,
}

impl TryFrom<RestaurantPatch> for RestaurantChanges {
    type Error = ValidationError;

    fn try_from(patch: RestaurantPatch) -> Result<Self, Self::Error> {
        Ok(RestaurantChanges {
            name: reject_null(patch.name, "name")?,
            address: reject_null(patch.address, "address")?,
            price_range: reject_null(patch.price_range, "price_range")?,
        })
    }
}

#[derive(Deserialize, Debug, ToSchema)]
pub struct CreateCustomerRequest {
    pub name: String,
    pub email: String,
}

#[derive(Deserialize, Debug, ToSchema)]
pub struct CreateReviewRequest {
    /// One of 1..=5.
    pub rating: i64,
    /// At most 500 characters after trimming. Stored as `""` when absent.
    #[serde(default)]
    pub comment: Option<String>,
    pub customer_id: i64,
    pub restaurant_id: i64,
}

// ---------------------------------------------------------------------------
// Responses
//
// Each endpoint has its own explicit shape. Nested reviews never carry the
// parent they are nested under, and parents embedded in a review are only
// `{id, name}`, so no shape can recurse.
// ---------------------------------------------------------------------------

#[derive(Serialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct ParentRef {
    pub id: i64,
    pub name: String,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct RestaurantSummary {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub price_range: i64,
}

impl From<&Restaurant> for RestaurantSummary {
    fn from(r: &Restaurant) -> Self {
        Self {
            id: r.id,
            name: r.name.clone(),
            address: r.address.clone(),
            price_range: r.price_range,
        }
    }
}

#[derive(Serialize, Debug, ToSchema)]
pub struct RestaurantDetail {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub price_range: i64,
    pub reviews: Vec<RestaurantReview>,
}

impl RestaurantDetail {
    pub fn new(r: &Restaurant, reviews: &[Review]) -> Self {
        Self {
            id: r.id,
            name: r.name.clone(),
            address: r.address.clone(),
            price_range: r.price_range,
            reviews: reviews.iter().map(RestaurantReview::from).collect(),
        }
    }
}

/// A review as listed under its restaurant.
#[derive(Serialize, Debug, ToSchema)]
pub struct RestaurantReview {
    pub id: i64,
    pub rating: i64,
    pub comment: String,
    pub customer_id: i64,
    pub restaurant_id: i64,
    pub customer: ParentRef,
}

impl From<&Review> for RestaurantReview {
    fn from(r: &Review) -> Self {
        Self {
            id: r.id,
            rating: r.rating,
            comment: r.comment.clone(),
            customer_id: r.customer_id,
            restaurant_id: r.restaurant_id,
            customer: ParentRef {
                id: r.customer_id,
                name: r.customer_name.clone(),
            },
        }
    }
}

#[derive(Serialize, Debug, ToSchema)]
pub struct CustomerSummary {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl From<&Customer> for CustomerSummary {
    fn from(c: &Customer) -> Self {
        Self {
            id: c.id,
            name: c.name.clone(),
            email: c.email.clone(),
        }
    }
}

#[derive(Serialize, Debug, ToSchema)]
pub struct CustomerDetail {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub reviews: Vec<CustomerReview>,
}

impl CustomerDetail {
    pub fn new(c: &Customer, reviews: &[Review]) -> Self {
        Self {
            id: c.id,
            name: c.name.clone(),
            email: c.email.clone(),
            reviews: reviews.iter().map(CustomerReview::from).collect(),
        }
    }
}

/// A review as listed under its customer.
#[derive(Serialize, Debug, ToSchema)]
pub struct CustomerReview {
    pub id: i64,
    pub rating: i64,
    pub comment: String,
    pub customer_id: i64,
    pub restaurant_id: i64,
    pub restaurant: ParentRef,
}

impl From<&Review> for CustomerReview {
    fn from(r: &Review) -> Self {
        Self {
            id: r.id,
            rating: r.rating,
            comment: r.comment.clone(),
            customer_id: r.customer_id,
            restaurant_id: r.restaurant_id,
            restaurant: ParentRef {
                id: r.restaurant_id,
                name: r.restaurant_name.clone(),
            },
        }
    }
}

/// A standalone review with both parents summarized.
#[derive(Serialize, Debug, ToSchema)]
pub struct ReviewView {
    pub id: i64,
    pub rating: i64,
    pub comment: String,
    pub customer_id: i64,
    pub restaurant_id: i64,
    pub customer: ParentRef,
    pub restaurant: ParentRef,
}

impl From<&Review> for ReviewView {
    fn from(r: &Review) -> Self {
        Self {
            id: r.id,
            rating: r.rating,
            comment: r.comment.clone(),
            customer_id: r.customer_id,
            restaurant_id: r.restaurant_id,
            customer: ParentRef {
                id: r.customer_id,
                name: r.customer_name.clone(),
            },
            restaurant: ParentRef {
                id: r.restaurant_id,
                name: r.restaurant_name.clone(),
            },
        }
    }
}

#[derive(Serialize, Debug, ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Body of every 400 response. The list is deliberately generic.
#[derive(Serialize, Debug, ToSchema)]
pub struct ValidationErrorsBody {
    pub errors: Vec<String>,
}

/// Body of 404 and 500 responses.
#[derive(Serialize, Debug, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

pub const GENERIC_VALIDATION_ERROR: &str = "validation errors";
pub const GENERIC_INTERNAL_ERROR: &str = "internal server error";
