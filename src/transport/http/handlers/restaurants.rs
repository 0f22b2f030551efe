use crate::app::error::{Resource, ServiceError};
use crate::domain::model::{NewRestaurant, RestaurantChanges};
use crate::transport::http::handlers::common::{json_body, path_id};
use crate::transport::http::types::{
    AppState, CreateRestaurantRequest, ErrorBody, RestaurantDetail, RestaurantPatch,
    RestaurantSummary, ValidationErrorsBody,
};
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

#[utoipa::path(
    get,
    path = "/restaurants",
    responses(
        (status = 200, description = "All restaurants, without reviews", body = [RestaurantSummary])
    )
)]
pub async fn list_restaurants_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<RestaurantSummary>>, ServiceError> {
    let db_service = state.db_service.lock().await;
    let restaurants = db_service.list_restaurants().await?;
    Ok(Json(restaurants.iter().map(RestaurantSummary::from).collect()))
}

#[utoipa::path(
    get,
    path = "/restaurants/{id}",
    params(("id" = i64, Path, description = "Restaurant id")),
    responses(
        (status = 200, description = "Restaurant with its reviews", body = RestaurantDetail),
        (status = 404, description = "Restaurant not found", body = ErrorBody)
    )
)]
pub async fn get_restaurant_handler(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<RestaurantDetail>, ServiceError> {
    let id = path_id(path, Resource::Restaurant)?;
    let db_service = state.db_service.lock().await;
    let restaurant = db_service.get_restaurant(id).await?;
    let reviews = db_service.restaurant_reviews(id).await?;
    Ok(Json(RestaurantDetail::new(&restaurant, &reviews)))
}

#[utoipa::path(
    post,
    path = "/restaurants",
    request_body = CreateRestaurantRequest,
    responses(
        (status = 201, description = "Restaurant created", body = RestaurantSummary),
        (status = 400, description = "Validation failed", body = ValidationErrorsBody)
    )
)]
pub async fn create_restaurant_handler(
    State(state): State<AppState>,
    body: Result<Json<CreateRestaurantRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<RestaurantSummary>), ServiceError> {
    let request = json_body(body)?;
    let new = NewRestaurant::new(&request.name, &request.address, request.price_range()?)?;

    let db_service = state.db_service.lock().await;
    let restaurant = db_service.create_restaurant(new).await?;
    Ok((StatusCode::CREATED, Json(RestaurantSummary::from(&restaurant))))
}

#[utoipa::path(
    patch,
    path = "/restaurants/{id}",
    params(("id" = i64, Path, description = "Restaurant id")),
    request_body = RestaurantPatch,
    responses(
        (status = 200, description = "Restaurant updated", body = RestaurantSummary),
        (
            status = 400,
            description = "Validation failed, field not patchable or set to null",
            body = ValidationErrorsBody
        ),
        (status = 404, description = "Restaurant not found", body = ErrorBody)
    )
)]
pub async fn update_restaurant_handler(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    body: Result<Json<RestaurantPatch>, JsonRejection>,
) -> Result<Json<RestaurantSummary>, ServiceError> {
    let id = path_id(path, Resource::Restaurant)?;
    let db_service = state.db_service.lock().await;

    let changes = json_body(body)
        .and_then(|patch| RestaurantChanges::try_from(patch).map_err(ServiceError::from));

    // A missing record wins over a bad body.
    let changes = match changes {
        Ok(changes) => changes,
        Err(e) => {
            db_service.get_restaurant(id).await?;
            return Err(e);
        }
    };

    let restaurant = db_service.update_restaurant(id, &changes).await?;
    Ok(Json(RestaurantSummary::from(&restaurant)))
}

#[utoipa::path(
    delete,
    path = "/restaurants/{id}",
    params(("id" = i64, Path, description = "Restaurant id")),
    responses(
        (status = 204, description = "Restaurant and its reviews deleted"),
        (status = 404, description = "Restaurant not found", body = ErrorBody)
    )
)]
pub async fn delete_restaurant_handler(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, ServiceError> {
    let id = path_id(path, Resource::Restaurant)?;
    let db_service = state.db_service.lock().await;
    db_service.delete_restaurant(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
