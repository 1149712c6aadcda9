use crate::api::ApiError;
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use uuid::Uuid;

/// `PUT /customers/{customer_id}/orders/{order_id}/pickup` — mark an order
/// picked up. Publishes the status-change event as a side effect.
pub(super) async fn pickup_order(
    State(state): State<AppState>,
    Path((customer_id, order_id)): Path<(Uuid, Uuid)>,
) -> Result<impl IntoResponse, ApiError> {
    state.orders.pickup_order(customer_id, order_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
