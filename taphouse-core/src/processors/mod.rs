//! Event processors.
//!
//! - `WebhookDispatcher`: receives `StatusChangeEvent`, delivers webhooks

pub mod webhook_dispatcher;

pub use webhook_dispatcher::{
    DEFAULT_WEBHOOK_TIMEOUT, DeliveryError, OrderStatusUpdate, WebhookDispatcher,
};
