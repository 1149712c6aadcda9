//! In-process publish/subscribe bus for status-change events.
//!
//! Each subscriber owns a bounded mpsc channel and a dedicated worker task.
//! `publish` clones the event into every channel, which preserves per-handler
//! FIFO order while keeping the publisher decoupled from handler latency. A
//! handler that returns an error is logged and skipped; it never affects the
//! other subscribers or the publisher.

use super::types::StatusChangeEvent;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

/// Buffer size for each subscriber channel.
///
/// Bounded so a stalled handler cannot grow memory without limit; `publish`
/// awaits only when a subscriber is this many events behind.
pub const DEFAULT_CHANNEL_BUFFER: usize = 256;

/// Error type handlers may surface to the bus. Only ever logged.
pub type HandlerError = Box<dyn std::error::Error + Send + Sync>;

/// A subscriber to status-change events.
#[async_trait]
pub trait StatusChangeHandler: Send + Sync + 'static {
    /// Stable name used in log output.
    fn name(&self) -> &'static str;

    /// Process one event. Errors are reported by the bus worker and
    /// swallowed; returning one never stops event consumption.
    async fn handle(&self, event: StatusChangeEvent) -> Result<(), HandlerError>;
}

/// Registration side of the bus.
///
/// Built once during process start-up: construct, `subscribe` every handler,
/// then hand [`EventPublisher`] clones to the components that mutate order
/// status. Subscriptions after `publisher()` has been called are not seen by
/// the handles already given out.
pub struct EventBus {
    subscribers: Vec<mpsc::Sender<StatusChangeEvent>>,
    workers: Vec<JoinHandle<()>>,
    shutdown_rx: watch::Receiver<bool>,
}

impl EventBus {
    /// Create a bus whose workers stop when `shutdown_rx` flips to `true`.
    pub fn new(shutdown_rx: watch::Receiver<bool>) -> Self {
        Self {
            subscribers: Vec::new(),
            workers: Vec::new(),
            shutdown_rx,
        }
    }

    /// Register a handler. Spawns the worker task that drains the handler's
    /// channel in FIFO order.
    pub fn subscribe(&mut self, handler: Arc<dyn StatusChangeHandler>) {
        let (tx, rx) = mpsc::channel(DEFAULT_CHANNEL_BUFFER);
        let shutdown_rx = self.shutdown_rx.clone();

        info!(handler = handler.name(), "Subscribed status-change handler");
        self.subscribers.push(tx);
        self.workers.push(tokio::spawn(subscriber_loop(
            handler,
            rx,
            shutdown_rx,
        )));
    }

    /// Get a cheap clonable publish handle over the current subscribers.
    pub fn publisher(&self) -> EventPublisher {
        EventPublisher {
            senders: self.subscribers.clone(),
        }
    }

    /// Wait for all worker tasks to finish.
    ///
    /// Drops the bus-held senders first so workers whose channels are empty
    /// observe channel closure even if the shutdown flag never flips.
    pub async fn shutdown(self) {
        drop(self.subscribers);
        for worker in self.workers {
            if let Err(e) = worker.await {
                error!(error = %e, "Event bus worker panicked");
            }
        }
    }
}

/// Publish handle held by status-mutating code.
#[derive(Clone)]
pub struct EventPublisher {
    senders: Vec<mpsc::Sender<StatusChangeEvent>>,
}

impl EventPublisher {
    /// Deliver the event to every subscriber channel.
    ///
    /// Fire-and-forget: the caller never learns whether any handler
    /// succeeded. A closed subscriber channel is logged and skipped.
    pub async fn publish(&self, event: StatusChangeEvent) {
        debug!(
            order_id = %event.order_id,
            previous_status = %event.previous_status,
            new_status = %event.new_status,
            "Publishing status-change event"
        );

        for sender in &self.senders {
            if sender.send(event.clone()).await.is_err() {
                warn!(
                    order_id = %event.order_id,
                    "Subscriber channel closed; dropping event for that handler"
                );
            }
        }
    }
}

async fn subscriber_loop(
    handler: Arc<dyn StatusChangeHandler>,
    mut rx: mpsc::Receiver<StatusChangeEvent>,
    mut shutdown_rx: watch::Receiver<bool>,
) {
    loop {
        tokio::select! {
            biased;

            changed = shutdown_rx.changed() => {
                // A dropped shutdown sender counts as shutdown.
                if changed.is_err() || *shutdown_rx.borrow() {
                    debug!(handler = handler.name(), "Handler worker shutting down");
                    break;
                }
            }

            maybe_event = rx.recv() => {
                let Some(event) = maybe_event else {
                    debug!(handler = handler.name(), "Event channel closed");
                    break;
                };

                if let Err(e) = handler.handle(event).await {
                    error!(
                        handler = handler.name(),
                        error = %e,
                        "Status-change handler failed"
                    );
                }
            }
        }
    }
}
