//! Status-change event system.
//!
//! A state-mutating operation in the order service publishes a
//! [`StatusChangeEvent`] after committing a status change. The [`EventBus`]
//! fans the event out to every registered [`StatusChangeHandler`] over a
//! per-subscriber bounded channel, so publisher latency is never coupled to
//! handler latency (in particular to outbound webhook calls).
//!
//! Events are ephemeral: delivered at most once, never persisted or replayed.

pub mod bus;
pub mod types;

pub use bus::{DEFAULT_CHANNEL_BUFFER, EventBus, EventPublisher, StatusChangeHandler};
pub use types::StatusChangeEvent;
