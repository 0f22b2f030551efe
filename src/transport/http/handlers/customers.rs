use crate::app::error::{Resource, ServiceError};
use crate::domain::model::NewCustomer;
use crate::transport::http::handlers::common::{json_body, path_id};
use crate::transport::http::types::{
    AppState, CreateCustomerRequest, CustomerDetail, CustomerSummary, ErrorBody,
    ValidationErrorsBody,
};
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

#[utoipa::path(
    get,
    path = "/customers",
    responses(
        (status = 200, description = "All customers, without reviews", body = [CustomerSummary])
    )
)]
pub async fn list_customers_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<CustomerSummary>>, ServiceError> {
    let db_service = state.db_service.lock().await;
    let customers = db_service.list_customers().await?;
    Ok(Json(customers.iter().map(CustomerSummary::from).collect()))
}

#[utoipa::path(
    get,
    path = "/customers/{id}",
    params(("id" = i64, Path, description = "Customer id")),
    responses(
        (status = 200, description = "Customer with their reviews", body = CustomerDetail),
        (status = 404, description = "Customer not found", body = ErrorBody)
    )
)]
pub async fn get_customer_handler(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<CustomerDetail>, ServiceError> {
    let id = path_id(path, Resource::Customer)?;
    let db_service = state.db_service.lock().await;
    let customer = db_service.get_customer(id).await?;
    let reviews = db_service.customer_reviews(id).await?;
    Ok(Json(CustomerDetail::new(&customer, &reviews)))
}

#[utoipa::path(
    post,
    path = "/customers",
    request_body = CreateCustomerRequest,
    responses(
        (status = 201, description = "Customer created", body = CustomerSummary),
        (
            status = 400,
            description = "Validation failed or email taken",
            body = ValidationErrorsBody
        )
    )
)]
pub async fn create_customer_handler(
    State(state): State<AppState>,
    body: Result<Json<CreateCustomerRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CustomerSummary>), ServiceError> {
    let request = json_body(body)?;
    let new = NewCustomer::new(&request.name, &request.email)?;

    let db_service = state.db_service.lock().await;
    let customer = db_service.create_customer(new).await?;
    Ok((StatusCode::CREATED, Json(CustomerSummary::from(&customer))))
}
