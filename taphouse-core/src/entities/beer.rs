use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

/// A beer in the brewery catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Beer {
    pub id: Uuid,
    pub version: u64,
    pub beer_name: String,
    pub beer_style: BeerStyle,
    /// Universal product code printed on the can.
    pub upc: String,
    pub price: Decimal,
    pub quantity_on_hand: i32,
    pub created_date: OffsetDateTime,
    pub last_modified_date: OffsetDateTime,
}

/// Beer style classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BeerStyle {
    Lager,
    Pilsner,
    Stout,
    Gose,
    Porter,
    Ale,
    Wheat,
    Ipa,
    PaleAle,
    Saison,
}

impl std::fmt::Display for BeerStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BeerStyle::Lager => write!(f, "LAGER"),
            BeerStyle::Pilsner => write!(f, "PILSNER"),
            BeerStyle::Stout => write!(f, "STOUT"),
            BeerStyle::Gose => write!(f, "GOSE"),
            BeerStyle::Porter => write!(f, "PORTER"),
            BeerStyle::Ale => write!(f, "ALE"),
            BeerStyle::Wheat => write!(f, "WHEAT"),
            BeerStyle::Ipa => write!(f, "IPA"),
            BeerStyle::PaleAle => write!(f, "PALE_ALE"),
            BeerStyle::Saison => write!(f, "SAISON"),
        }
    }
}
