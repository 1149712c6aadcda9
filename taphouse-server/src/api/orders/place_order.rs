use crate::api::ApiError;
use crate::api::model::{BeerOrderDto, CreateBeerOrderRequest};
use crate::services::{NewBeerOrder, NewBeerOrderLine};
use crate::state::AppState;
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use uuid::Uuid;

/// `POST /customers/{customer_id}/orders` — place a new order.
///
/// The order starts in status `NEW`; no event is published for creation since
/// there is no prior status to transition from.
pub(super) async fn place_order(
    State(state): State<AppState>,
    Path(customer_id): Path<Uuid>,
    Json(request): Json<CreateBeerOrderRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let new_order = NewBeerOrder {
        customer_ref: request.customer_ref,
        order_status_callback_url: request.order_status_callback_url,
        order_lines: request
            .beer_order_lines
            .into_iter()
            .map(|l| NewBeerOrderLine {
                beer_id: l.beer_id,
                order_quantity: l.order_quantity,
            })
            .collect(),
    };

    let order = state.orders.place_order(customer_id, new_order).await?;
    Ok((StatusCode::CREATED, Json(BeerOrderDto::from(&order))))
}
