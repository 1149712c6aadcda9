use crate::api::ApiError;
use crate::api::model::BeerDto;
use crate::state::AppState;
use axum::Json;
use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct GetBeerParams {
    show_inventory_on_hand: Option<bool>,
}

/// `GET /beer/{beer_id}` — fetch one beer.
pub(super) async fn get_beer(
    State(state): State<AppState>,
    Path(beer_id): Path<Uuid>,
    Query(params): Query<GetBeerParams>,
) -> Result<impl IntoResponse, ApiError> {
    let beer = state.beers.get_beer(beer_id).await?;
    let show_inventory = params.show_inventory_on_hand.unwrap_or(false);
    Ok(Json(BeerDto::from_beer(&beer, show_inventory)))
}
