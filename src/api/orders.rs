//! `/orders` handlers.

use crate::api::extract::{ApiJson, ApiPath};
use crate::api::{ApiError, AppState};
use crate::framework::ResourceHandle;
use crate::hypermedia::{CollectionModel, EntityModel, ORDERS};
use crate::lifecycle::Action;
use crate::model::{Order, OrderCreate, OrderId};
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Json},
};

fn to_model(state: &AppState, order: Order) -> EntityModel<Order> {
    let links = state.links.links_for(&order);
    EntityModel::new(order, links)
}

/// GET /orders
pub async fn all(State(state): State<AppState>) -> Result<Json<CollectionModel<Order>>, ApiError> {
    let orders = state.orders.list().await?;
    let items = orders.into_iter().map(|o| to_model(&state, o)).collect();
    Ok(Json(CollectionModel::new(
        ORDERS,
        items,
        vec![state.links.collection_link(ORDERS)],
    )))
}

/// GET /orders/{id}
pub async fn one(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<OrderId>,
) -> Result<Json<EntityModel<Order>>, ApiError> {
    let order = state.orders.find(id).await?;
    Ok(Json(to_model(&state, order)))
}

/// POST /orders. New orders always start `IN_PROGRESS`.
pub async fn create(
    State(state): State<AppState>,
    ApiJson(params): ApiJson<OrderCreate>,
) -> Result<impl IntoResponse, ApiError> {
    let order = state.orders.create_order(params).await?;
    let model = to_model(&state, order);
    let location = model.self_href().unwrap_or_default();
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(model)))
}

/// PUT /orders/{id}/complete
pub async fn complete(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<OrderId>,
) -> Result<Json<EntityModel<Order>>, ApiError> {
    transition(&state, id, Action::Complete).await
}

/// DELETE /orders/{id}/cancel
pub async fn cancel(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<OrderId>,
) -> Result<Json<EntityModel<Order>>, ApiError> {
    transition(&state, id, Action::Cancel).await
}

async fn transition(
    state: &AppState,
    id: OrderId,
    action: Action,
) -> Result<Json<EntityModel<Order>>, ApiError> {
    let order = state.orders.transition(id, action).await?;
    Ok(Json(to_model(state, order)))
}
