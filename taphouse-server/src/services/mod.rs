//! In-memory services backing the HTTP API.
//!
//! Storage is a plain `HashMap` behind a `tokio::sync::RwLock`; the order
//! service owns the one code path that mutates order status and publishes
//! the matching `StatusChangeEvent`.

pub mod beer_order_service;
pub mod beer_service;

pub use beer_order_service::{BeerOrderService, NewBeerOrder, NewBeerOrderLine};
pub use beer_service::{BeerFilter, BeerService};

use thiserror::Error;
use uuid::Uuid;

/// Default page number when the request carries none.
pub const DEFAULT_PAGE_NUMBER: usize = 0;
/// Default page size when the request carries none.
pub const DEFAULT_PAGE_SIZE: usize = 25;

/// Errors surfaced by the service layer.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("order {0} not found")]
    OrderNotFound(Uuid),

    #[error("beer {0} not found")]
    BeerNotFound(Uuid),

    #[error("order {0} has already been picked up")]
    AlreadyPickedUp(Uuid),

    #[error("order must contain at least one order line")]
    EmptyOrder,

    #[error("order quantity must be positive")]
    InvalidQuantity,
}

/// Page window requested by a caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page_number: usize,
    pub page_size: usize,
}

impl PageRequest {
    pub fn new(page_number: Option<usize>, page_size: Option<usize>) -> Self {
        Self {
            page_number: page_number.unwrap_or(DEFAULT_PAGE_NUMBER),
            // A zero page size would make every page empty; fall back to the
            // default instead.
            page_size: match page_size {
                Some(size) if size > 0 => size,
                _ => DEFAULT_PAGE_SIZE,
            },
        }
    }
}

/// One page of results plus the total element count before paging.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_elements: usize,
}

/// Apply a page window to an already-filtered, already-sorted result set.
pub(crate) fn paginate<T>(items: Vec<T>, page: PageRequest) -> Page<T> {
    let total_elements = items.len();
    let content = items
        .into_iter()
        .skip(page.page_number.saturating_mul(page.page_size))
        .take(page.page_size)
        .collect();
    Page {
        content,
        total_elements,
    }
}
