use crate::transport::http::handlers::{customers, health, restaurants, reviews};
use crate::transport::http::types::{
    AppState, CreateCustomerRequest, CreateRestaurantRequest, CreateReviewRequest, CustomerDetail,
    CustomerReview, CustomerSummary, ErrorBody, HealthResponse, ParentRef, RestaurantDetail,
    RestaurantPatch, RestaurantReview, RestaurantSummary, ReviewView, ValidationErrorsBody,
};
use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthcheck_handler,
        restaurants::list_restaurants_handler,
        restaurants::get_restaurant_handler,
        restaurants::create_restaurant_handler,
        restaurants::update_restaurant_handler,
        restaurants::delete_restaurant_handler,
        customers::list_customers_handler,
        customers::get_customer_handler,
        customers::create_customer_handler,
        reviews::list_reviews_handler,
        reviews::get_review_handler,
        reviews::create_review_handler,
        reviews::delete_review_handler
    ),
    components(schemas(
        CreateRestaurantRequest,
        RestaurantPatch,
        CreateCustomerRequest,
        CreateReviewRequest,
        ParentRef,
        RestaurantSummary,
        RestaurantDetail,
        RestaurantReview,
        CustomerSummary,
        CustomerDetail,
        CustomerReview,
        ReviewView,
        HealthResponse,
        ValidationErrorsBody,
        ErrorBody
    ))
)]
pub struct ApiDoc;

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::healthcheck_handler))
        .route(
            "/restaurants",
            get(restaurants::list_restaurants_handler).post(restaurants::create_restaurant_handler),
        )
        .route(
            "/restaurants/:id",
            get(restaurants::get_restaurant_handler)
                .patch(restaurants::update_restaurant_handler)
                .delete(restaurants::delete_restaurant_handler),
        )
        .route(
            "/customers",
            get(customers::list_customers_handler).post(customers::create_customer_handler),
        )
        .route("/customers/:id", get(customers::get_customer_handler))
        .route(
            "/reviews",
            get(reviews::list_reviews_handler).post(reviews::create_review_handler),
        )
        .route(
            "/reviews/:id",
            get(reviews::get_review_handler).delete(reviews::delete_review_handler),
        )
        .with_state(app_state)
}

/// The router plus Swagger UI, CORS and request tracing, as served by the binary.
pub fn create_app(app_state: AppState) -> Router {
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);
    create_router(app_state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_lists_every_resource_path() {
        let doc = ApiDoc::openapi();
        for path in [
            "/health",
            "/restaurants",
            "/restaurants/{id}",
            "/customers",
            "/customers/{id}",
            "/reviews",
            "/reviews/{id}",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
    }
}
