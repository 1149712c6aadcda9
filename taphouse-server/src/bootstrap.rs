//! Startup catalog data.

use crate::services::BeerService;
use rust_decimal::Decimal;
use taphouse_core::entities::beer::{Beer, BeerStyle};
use time::OffsetDateTime;
use tracing::info;
use uuid::Uuid;

const BEER_1_UPC: &str = "0631234200036";
const BEER_2_UPC: &str = "0631234300019";
const BEER_3_UPC: &str = "0083783375213";

/// Seed the beer catalog so a fresh process is immediately usable.
pub async fn seed_catalog(beers: &BeerService) {
    let seed = [
        ("Mango Bobs", BeerStyle::Ale, BEER_1_UPC, Decimal::new(1295, 2)),
        ("Galaxy Cat", BeerStyle::PaleAle, BEER_2_UPC, Decimal::new(1195, 2)),
        ("Pinball Porter", BeerStyle::Porter, BEER_3_UPC, Decimal::new(1395, 2)),
    ];

    let now = OffsetDateTime::now_utc();
    for (name, style, upc, price) in seed {
        beers
            .add_beer(Beer {
                id: Uuid::new_v4(),
                version: 1,
                beer_name: name.to_string(),
                beer_style: style,
                upc: upc.to_string(),
                price,
                quantity_on_hand: 120,
                created_date: now,
                last_modified_date: now,
            })
            .await;
    }

    info!("Seeded beer catalog");
}
