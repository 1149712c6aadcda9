//! Event type definitions.

use crate::entities::beer_order::{BeerOrder, OrderStatus};
use time::OffsetDateTime;
use uuid::Uuid;

/// Immutable record of an order's status transition.
///
/// Constructed at the moment the status mutation is committed and handed to
/// the bus by value; subscribers each receive their own clone, so no mutable
/// state is ever shared between publisher and handlers.
#[derive(Debug, Clone)]
pub struct StatusChangeEvent {
    pub order_id: Uuid,
    pub previous_status: OrderStatus,
    pub new_status: OrderStatus,
    /// Webhook target registered on the order, if any.
    pub callback_url: Option<String>,
    pub occurred_at: OffsetDateTime,
}

impl StatusChangeEvent {
    /// Build an event from the just-mutated order and the status it held
    /// before the mutation.
    pub fn new(order: &BeerOrder, previous_status: OrderStatus) -> Self {
        Self {
            order_id: order.id,
            previous_status,
            new_status: order.order_status,
            callback_url: order.order_status_callback_url.clone(),
            occurred_at: OffsetDateTime::now_utc(),
        }
    }
}
