//! WebhookDispatcher processor.
//!
//! The WebhookDispatcher is responsible for:
//! - Receiving `StatusChangeEvent` from the bus
//! - Skipping orders that carry no callback URL
//! - Sending a single HTTP POST notification to the callback URL
//! - Reporting delivery failures through logs
//!
//! Delivery is best-effort: exactly one attempt per event, no retry, no
//! dead-letter queue. A non-2xx response or a transport error is a logged
//! failure that never reaches the publisher.

use crate::events::bus::{HandlerError, StatusChangeHandler};
use crate::events::types::StatusChangeEvent;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use time::OffsetDateTime;
use tracing::{debug, info, warn};
use url::Url;
use uuid::Uuid;

/// Upper bound on one outbound notification, connect included. Keeps a dead
/// or slow webhook endpoint from pinning a dispatcher worker indefinitely.
pub const DEFAULT_WEBHOOK_TIMEOUT: Duration = Duration::from_secs(5);

/// Errors that can occur during webhook delivery.
#[derive(Debug, Error)]
pub enum DeliveryError {
    /// The order's callback URL does not parse
    #[error("invalid callback URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// HTTP request error (connect failure, timeout, etc.)
    #[error("HTTP request error: {0}")]
    Request(#[from] reqwest::Error),

    /// The endpoint answered with a non-2xx status
    #[error("webhook rejected with status {status}: {body}")]
    Rejected { status: u16, body: String },
}

/// JSON body POSTed to the order's callback URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderStatusUpdate {
    pub order_id: Uuid,
    pub previous_status: crate::entities::OrderStatus,
    pub new_status: crate::entities::OrderStatus,
    #[serde(with = "time::serde::rfc3339")]
    pub occurred_at: OffsetDateTime,
}

impl From<&StatusChangeEvent> for OrderStatusUpdate {
    fn from(event: &StatusChangeEvent) -> Self {
        Self {
            order_id: event.order_id,
            previous_status: event.previous_status,
            new_status: event.new_status,
            occurred_at: event.occurred_at,
        }
    }
}

/// Delivers status-change notifications to per-order callback URLs.
///
/// Stateless between events; holds only the reusable HTTP client.
pub struct WebhookDispatcher {
    http_client: reqwest::Client,
}

impl WebhookDispatcher {
    /// Create a dispatcher with [`DEFAULT_WEBHOOK_TIMEOUT`].
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_WEBHOOK_TIMEOUT)
    }

    /// Create a dispatcher with an explicit request timeout.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            http_client: reqwest::Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
        }
    }

    /// Issue the single POST attempt for this event.
    async fn deliver(&self, url: &str, event: &StatusChangeEvent) -> Result<(), DeliveryError> {
        let target = Url::parse(url)?;
        let payload = OrderStatusUpdate::from(event);

        let response = self.http_client.post(target).json(&payload).send().await?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(DeliveryError::Rejected {
                status: status.as_u16(),
                body,
            })
        }
    }
}

impl Default for WebhookDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StatusChangeHandler for WebhookDispatcher {
    fn name(&self) -> &'static str {
        "webhook-dispatcher"
    }

    async fn handle(&self, event: StatusChangeEvent) -> Result<(), HandlerError> {
        let Some(url) = event
            .callback_url
            .as_deref()
            .filter(|u| !u.trim().is_empty())
        else {
            // Silence is intentional: orders without a callback are common.
            debug!(order_id = %event.order_id, "Order has no callback URL, skipping notification");
            return Ok(());
        };

        match self.deliver(url, &event).await {
            Ok(()) => {
                info!(
                    order_id = %event.order_id,
                    new_status = %event.new_status,
                    url,
                    "Webhook delivered"
                );
            }
            Err(e) => {
                // Single attempt only; the failure stops here.
                warn!(
                    order_id = %event.order_id,
                    new_status = %event.new_status,
                    url,
                    error = %e,
                    "Webhook delivery failed"
                );
            }
        }

        Ok(())
    }
}
