//! Wire types for the REST API.
//!
//! Everything serializes camelCase, matching the callback payload emitted by
//! the webhook dispatcher.

use crate::services::{Page, PageRequest};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use taphouse_core::entities::beer::{Beer, BeerStyle};
use taphouse_core::entities::beer_order::{BeerOrder, BeerOrderLine, OrderStatus};
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BeerDto {
    pub id: Uuid,
    pub version: u64,
    pub beer_name: String,
    pub beer_style: BeerStyle,
    pub upc: String,
    pub price: Decimal,
    /// Present only when the caller asked to see inventory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity_on_hand: Option<i32>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_date: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub last_modified_date: OffsetDateTime,
}

impl BeerDto {
    pub fn from_beer(beer: &Beer, show_inventory_on_hand: bool) -> Self {
        Self {
            id: beer.id,
            version: beer.version,
            beer_name: beer.beer_name.clone(),
            beer_style: beer.beer_style,
            upc: beer.upc.clone(),
            price: beer.price,
            quantity_on_hand: show_inventory_on_hand.then_some(beer.quantity_on_hand),
            created_date: beer.created_date,
            last_modified_date: beer.last_modified_date,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BeerOrderDto {
    pub id: Uuid,
    pub version: u64,
    pub customer_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_ref: Option<String>,
    pub beer_order_lines: Vec<BeerOrderLineDto>,
    pub order_status: OrderStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_status_callback_url: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_date: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub last_modified_date: OffsetDateTime,
}

impl From<&BeerOrder> for BeerOrderDto {
    fn from(order: &BeerOrder) -> Self {
        Self {
            id: order.id,
            version: order.version,
            customer_id: order.customer_id,
            customer_ref: order.customer_ref.clone(),
            beer_order_lines: order.order_lines.iter().map(Into::into).collect(),
            order_status: order.order_status,
            order_status_callback_url: order.order_status_callback_url.clone(),
            created_date: order.created_date,
            last_modified_date: order.last_modified_date,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BeerOrderLineDto {
    pub id: Uuid,
    pub beer_id: Uuid,
    pub order_quantity: i32,
}

impl From<&BeerOrderLine> for BeerOrderLineDto {
    fn from(line: &BeerOrderLine) -> Self {
        Self {
            id: line.id,
            beer_id: line.beer_id,
            order_quantity: line.order_quantity,
        }
    }
}

/// Request body for placing an order.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBeerOrderRequest {
    #[serde(default)]
    pub customer_ref: Option<String>,
    #[serde(default)]
    pub order_status_callback_url: Option<String>,
    #[serde(default)]
    pub beer_order_lines: Vec<CreateBeerOrderLine>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBeerOrderLine {
    pub beer_id: Uuid,
    pub order_quantity: i32,
}

/// Page window echoed back in paged responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub page_number: usize,
    pub page_size: usize,
}

/// A page of DTOs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedList<T> {
    pub content: Vec<T>,
    pub pageable: PageInfo,
    pub total_elements: usize,
}

impl<T> PagedList<T> {
    pub fn from_page<S>(page: Page<S>, request: PageRequest, map: impl Fn(&S) -> T) -> Self {
        Self {
            content: page.content.iter().map(map).collect(),
            pageable: PageInfo {
                page_number: request.page_number,
                page_size: request.page_size,
            },
            total_elements: page.total_elements,
        }
    }
}
