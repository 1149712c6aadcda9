//! Application state shared across all request handlers.

use crate::services::{BeerOrderService, BeerService};
use taphouse_core::events::EventPublisher;

/// Application state that is shared across all request handlers.
///
/// Cloneable and cheap to pass around (the services are Arc-backed).
#[derive(Clone)]
pub struct AppState {
    pub beers: BeerService,
    pub orders: BeerOrderService,
}

impl AppState {
    /// Wire up the services over the given event publisher.
    pub fn new(publisher: EventPublisher) -> Self {
        Self {
            beers: BeerService::new(),
            orders: BeerOrderService::new(publisher),
        }
    }
}
