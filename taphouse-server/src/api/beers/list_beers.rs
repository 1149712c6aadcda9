use crate::api::model::{BeerDto, PagedList};
use crate::services::{BeerFilter, PageRequest};
use crate::state::AppState;
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use taphouse_core::entities::beer::BeerStyle;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct ListBeersParams {
    page_number: Option<usize>,
    page_size: Option<usize>,
    beer_name: Option<String>,
    beer_style: Option<BeerStyle>,
    show_inventory_on_hand: Option<bool>,
}

/// `GET /beer` — paged catalog listing with optional name/style filters.
pub(super) async fn list_beers(
    State(state): State<AppState>,
    Query(params): Query<ListBeersParams>,
) -> impl IntoResponse {
    let page_request = PageRequest::new(params.page_number, params.page_size);
    let filter = BeerFilter {
        beer_name: params.beer_name,
        beer_style: params.beer_style,
    };
    let show_inventory = params.show_inventory_on_hand.unwrap_or(false);

    let page = state.beers.list_beers(filter, page_request).await;

    Json(PagedList::from_page(page, page_request, |beer| {
        BeerDto::from_beer(beer, show_inventory)
    }))
}
