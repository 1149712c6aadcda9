use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

/// A customer's beer order.
///
/// `order_status_callback_url` is the optional per-order webhook target that
/// receives status-change notifications. Orders without one are valid and
/// simply never generate outbound calls.
#[derive(Debug, Clone, PartialEq)]
pub struct BeerOrder {
    pub id: Uuid,
    pub version: u64,
    pub customer_id: Uuid,
    pub customer_ref: Option<String>,
    pub order_lines: Vec<BeerOrderLine>,
    pub order_status: OrderStatus,
    pub order_status_callback_url: Option<String>,
    pub created_date: OffsetDateTime,
    pub last_modified_date: OffsetDateTime,
}

/// A single line item on a beer order.
#[derive(Debug, Clone, PartialEq)]
pub struct BeerOrderLine {
    pub id: Uuid,
    pub beer_id: Uuid,
    pub order_quantity: i32,
}

/// Order lifecycle status.
///
/// Which transitions are legal is the order service's concern; the
/// notification core accepts any (previous, new) pair without judgment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    New,
    ValidationPending,
    Validated,
    ValidationException,
    AllocationPending,
    Allocated,
    AllocationException,
    PendingInventory,
    Ready,
    PickedUp,
    Delivered,
    DeliveryException,
    Cancelled,
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderStatus::New => write!(f, "NEW"),
            OrderStatus::ValidationPending => write!(f, "VALIDATION_PENDING"),
            OrderStatus::Validated => write!(f, "VALIDATED"),
            OrderStatus::ValidationException => write!(f, "VALIDATION_EXCEPTION"),
            OrderStatus::AllocationPending => write!(f, "ALLOCATION_PENDING"),
            OrderStatus::Allocated => write!(f, "ALLOCATED"),
            OrderStatus::AllocationException => write!(f, "ALLOCATION_EXCEPTION"),
            OrderStatus::PendingInventory => write!(f, "PENDING_INVENTORY"),
            OrderStatus::Ready => write!(f, "READY"),
            OrderStatus::PickedUp => write!(f, "PICKED_UP"),
            OrderStatus::Delivered => write!(f, "DELIVERED"),
            OrderStatus::DeliveryException => write!(f, "DELIVERY_EXCEPTION"),
            OrderStatus::Cancelled => write!(f, "CANCELLED"),
        }
    }
}
