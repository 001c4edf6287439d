use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    error::Error,
    model::{
        api::ErrorDto,
        app::AppState,
        order::{SalesOrderDto, SalesOrderFormDto},
    },
    service::order::OrderService,
};

pub static ORDER_TAG: &str = "order";

/// Record a sales order for an organization
#[utoipa::path(
    post,
    path = "/api/orgs/{org_id}/orders",
    tag = ORDER_TAG,
    params(
        ("org_id" = i32, Path, description = "Owning organization ID")
    ),
    request_body = SalesOrderFormDto,
    responses(
        (status = 201, description = "Order recorded", body = SalesOrderDto),
        (status = 400, description = "A status field holds a value outside its vocabulary", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_order(
    State(state): State<AppState>,
    Path(org_id): Path<i32>,
    Json(form): Json<SalesOrderFormDto>,
) -> Result<impl IntoResponse, Error> {
    let order_service = OrderService::new(&state.db);

    let order = order_service.create(org_id, form).await?;

    Ok((StatusCode::CREATED, Json(order)))
}

/// Get all sales orders of an organization
#[utoipa::path(
    get,
    path = "/api/orgs/{org_id}/orders",
    tag = ORDER_TAG,
    params(
        ("org_id" = i32, Path, description = "Owning organization ID")
    ),
    responses(
        (status = 200, description = "Success when retrieving orders", body = Vec<SalesOrderDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_orders(
    State(state): State<AppState>,
    Path(org_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let order_service = OrderService::new(&state.db);

    let orders = order_service.list(org_id).await?;

    Ok((StatusCode::OK, Json(orders)))
}

/// Get one sales order
#[utoipa::path(
    get,
    path = "/api/orders/{id}",
    tag = ORDER_TAG,
    params(
        ("id" = i32, Path, description = "Sales order ID")
    ),
    responses(
        (status = 200, description = "Success when retrieving the order", body = SalesOrderDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let order_service = OrderService::new(&state.db);

    let order = order_service.get(id).await?;

    Ok((StatusCode::OK, Json(order)))
}

/// Replace a sales order's form fields
#[utoipa::path(
    put,
    path = "/api/orders/{id}",
    tag = ORDER_TAG,
    params(
        ("id" = i32, Path, description = "Sales order ID")
    ),
    request_body = SalesOrderFormDto,
    responses(
        (status = 200, description = "Order updated", body = SalesOrderDto),
        (status = 400, description = "A status field holds a value outside its vocabulary", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_order(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(form): Json<SalesOrderFormDto>,
) -> Result<impl IntoResponse, Error> {
    let order_service = OrderService::new(&state.db);

    let order = order_service.update(id, form).await?;

    Ok((StatusCode::OK, Json(order)))
}

/// Remove a sales order
#[utoipa::path(
    delete,
    path = "/api/orders/{id}",
    tag = ORDER_TAG,
    params(
        ("id" = i32, Path, description = "Sales order ID")
    ),
    responses(
        (status = 204, description = "Order removed"),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_order(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let order_service = OrderService::new(&state.db);

    order_service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
