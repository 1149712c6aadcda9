//! Beer catalog service.

use super::{Page, PageRequest, ServiceError, paginate};
use std::collections::HashMap;
use std::sync::Arc;
use taphouse_core::entities::beer::{Beer, BeerStyle};
use tokio::sync::RwLock;
use uuid::Uuid;

/// Optional filters for listing beers.
#[derive(Debug, Clone, Default)]
pub struct BeerFilter {
    /// Case-insensitive exact match on the beer name.
    pub beer_name: Option<String>,
    pub beer_style: Option<BeerStyle>,
}

/// Read-mostly catalog of beers.
#[derive(Clone)]
pub struct BeerService {
    beers: Arc<RwLock<HashMap<Uuid, Beer>>>,
}

impl BeerService {
    pub fn new() -> Self {
        Self {
            beers: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Add a beer to the catalog. Used by the startup loader.
    pub async fn add_beer(&self, beer: Beer) {
        let mut beers = self.beers.write().await;
        beers.insert(beer.id, beer);
    }

    /// List beers matching the filter, sorted by name.
    pub async fn list_beers(&self, filter: BeerFilter, page: PageRequest) -> Page<Beer> {
        let beers = self.beers.read().await;
        let mut matching: Vec<Beer> = beers
            .values()
            .filter(|b| match &filter.beer_name {
                Some(name) => b.beer_name.eq_ignore_ascii_case(name),
                None => true,
            })
            .filter(|b| match filter.beer_style {
                Some(style) => b.beer_style == style,
                None => true,
            })
            .cloned()
            .collect();
        matching.sort_by(|a, b| a.beer_name.cmp(&b.beer_name).then_with(|| a.id.cmp(&b.id)));
        paginate(matching, page)
    }

    pub async fn get_beer(&self, beer_id: Uuid) -> Result<Beer, ServiceError> {
        let beers = self.beers.read().await;
        beers
            .get(&beer_id)
            .cloned()
            .ok_or(ServiceError::BeerNotFound(beer_id))
    }
}

impl Default for BeerService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use time::OffsetDateTime;

    fn beer(name: &str, style: BeerStyle) -> Beer {
        let now = OffsetDateTime::now_utc();
        Beer {
            id: Uuid::new_v4(),
            version: 1,
            beer_name: name.to_string(),
            beer_style: style,
            upc: "0631234200036".to_string(),
            price: Decimal::new(1295, 2),
            quantity_on_hand: 120,
            created_date: now,
            last_modified_date: now,
        }
    }

    #[tokio::test]
    async fn filters_by_name_and_style() {
        let service = BeerService::new();
        service.add_beer(beer("Mango Bobs", BeerStyle::Ale)).await;
        service.add_beer(beer("Galaxy Cat", BeerStyle::PaleAle)).await;
        service.add_beer(beer("Pinball Porter", BeerStyle::Porter)).await;

        let by_name = service
            .list_beers(
                BeerFilter {
                    beer_name: Some("mango bobs".to_string()),
                    beer_style: None,
                },
                PageRequest::new(None, None),
            )
            .await;
        assert_eq!(by_name.content.len(), 1);
        assert_eq!(by_name.content[0].beer_name, "Mango Bobs");

        let by_style = service
            .list_beers(
                BeerFilter {
                    beer_name: None,
                    beer_style: Some(BeerStyle::Porter),
                },
                PageRequest::new(None, None),
            )
            .await;
        assert_eq!(by_style.content.len(), 1);
        assert_eq!(by_style.content[0].beer_style, BeerStyle::Porter);
    }

    #[tokio::test]
    async fn unknown_beer_is_not_found() {
        let service = BeerService::new();
        assert!(matches!(
            service.get_beer(Uuid::new_v4()).await,
            Err(ServiceError::BeerNotFound(_))
        ));
    }
}
