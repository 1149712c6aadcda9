use crate::api::model::{BeerOrderDto, PagedList};
use crate::services::PageRequest;
use crate::state::AppState;
use axum::Json;
use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct ListOrdersParams {
    page_number: Option<usize>,
    page_size: Option<usize>,
}

/// `GET /customers/{customer_id}/orders` — paged order listing, newest first.
pub(super) async fn list_orders(
    State(state): State<AppState>,
    Path(customer_id): Path<Uuid>,
    Query(params): Query<ListOrdersParams>,
) -> impl IntoResponse {
    let page_request = PageRequest::new(params.page_number, params.page_size);
    let page = state.orders.list_orders(customer_id, page_request).await;
    Json(PagedList::from_page(page, page_request, |order| {
        BeerOrderDto::from(order)
    }))
}
