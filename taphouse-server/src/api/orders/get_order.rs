use crate::api::ApiError;
use crate::api::model::BeerOrderDto;
use crate::state::AppState;
use axum::Json;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use uuid::Uuid;

/// `GET /customers/{customer_id}/orders/{order_id}` — fetch one order.
pub(super) async fn get_order(
    State(state): State<AppState>,
    Path((customer_id, order_id)): Path<(Uuid, Uuid)>,
) -> Result<impl IntoResponse, ApiError> {
    let order = state.orders.get_order(customer_id, order_id).await?;
    Ok(Json(BeerOrderDto::from(&order)))
}
