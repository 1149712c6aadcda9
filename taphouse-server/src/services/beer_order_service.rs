//! Beer-order service: the sole producer of status-change events.

use super::{Page, PageRequest, ServiceError, paginate};
use std::collections::HashMap;
use std::sync::Arc;
use taphouse_core::entities::beer_order::{BeerOrder, BeerOrderLine, OrderStatus};
use taphouse_core::events::{EventPublisher, StatusChangeEvent};
use time::OffsetDateTime;
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

/// Input for placing a new order.
#[derive(Debug, Clone)]
pub struct NewBeerOrder {
    pub customer_ref: Option<String>,
    pub order_status_callback_url: Option<String>,
    pub order_lines: Vec<NewBeerOrderLine>,
}

/// One requested line on a new order.
#[derive(Debug, Clone)]
pub struct NewBeerOrderLine {
    pub beer_id: Uuid,
    pub order_quantity: i32,
}

/// Order CRUD plus the status-mutation path.
///
/// Every status change goes through [`BeerOrderService::update_order_status`],
/// which persists the new status first and then publishes the event — the
/// publisher never learns whether any notification succeeded.
#[derive(Clone)]
pub struct BeerOrderService {
    orders: Arc<RwLock<HashMap<Uuid, BeerOrder>>>,
    publisher: EventPublisher,
}

impl BeerOrderService {
    pub fn new(publisher: EventPublisher) -> Self {
        Self {
            orders: Arc::new(RwLock::new(HashMap::new())),
            publisher,
        }
    }

    /// List a customer's orders, newest first.
    pub async fn list_orders(&self, customer_id: Uuid, page: PageRequest) -> Page<BeerOrder> {
        let orders = self.orders.read().await;
        let mut matching: Vec<BeerOrder> = orders
            .values()
            .filter(|o| o.customer_id == customer_id)
            .cloned()
            .collect();
        // Tie-break on id so paging is stable for orders created in the same
        // instant.
        matching.sort_by(|a, b| {
            b.created_date
                .cmp(&a.created_date)
                .then_with(|| a.id.cmp(&b.id))
        });
        paginate(matching, page)
    }

    /// Fetch one order; an order owned by another customer is not found.
    pub async fn get_order(
        &self,
        customer_id: Uuid,
        order_id: Uuid,
    ) -> Result<BeerOrder, ServiceError> {
        let orders = self.orders.read().await;
        orders
            .get(&order_id)
            .filter(|o| o.customer_id == customer_id)
            .cloned()
            .ok_or(ServiceError::OrderNotFound(order_id))
    }

    /// Place a new order with status `NEW`.
    pub async fn place_order(
        &self,
        customer_id: Uuid,
        new_order: NewBeerOrder,
    ) -> Result<BeerOrder, ServiceError> {
        if new_order.order_lines.is_empty() {
            return Err(ServiceError::EmptyOrder);
        }
        if new_order.order_lines.iter().any(|l| l.order_quantity <= 0) {
            return Err(ServiceError::InvalidQuantity);
        }

        let now = OffsetDateTime::now_utc();
        let order = BeerOrder {
            id: Uuid::new_v4(),
            version: 1,
            customer_id,
            customer_ref: new_order.customer_ref,
            order_lines: new_order
                .order_lines
                .into_iter()
                .map(|l| BeerOrderLine {
                    id: Uuid::new_v4(),
                    beer_id: l.beer_id,
                    order_quantity: l.order_quantity,
                })
                .collect(),
            order_status: OrderStatus::New,
            order_status_callback_url: new_order.order_status_callback_url,
            created_date: now,
            last_modified_date: now,
        };

        let mut orders = self.orders.write().await;
        orders.insert(order.id, order.clone());
        info!(order_id = %order.id, customer_id = %customer_id, "Order placed");

        Ok(order)
    }

    /// Mark an order picked up.
    ///
    /// An order can be picked up only once; a repeat pickup is rejected
    /// without touching the order or publishing anything.
    pub async fn pickup_order(
        &self,
        customer_id: Uuid,
        order_id: Uuid,
    ) -> Result<(), ServiceError> {
        self.commit_status(customer_id, order_id, OrderStatus::PickedUp, |order| {
            if order.order_status == OrderStatus::PickedUp {
                return Err(ServiceError::AlreadyPickedUp(order.id));
            }
            Ok(())
        })
        .await
    }

    /// Commit a status change and publish the matching event.
    ///
    /// Transition-agnostic: any status may follow any other. Callers that
    /// need a legality rule go through an operation like
    /// [`BeerOrderService::pickup_order`] instead.
    pub async fn update_order_status(
        &self,
        customer_id: Uuid,
        order_id: Uuid,
        new_status: OrderStatus,
    ) -> Result<(), ServiceError> {
        self.commit_status(customer_id, order_id, new_status, |_| Ok(()))
            .await
    }

    /// Look up the order, run `precheck` on it, then mutate — all under one
    /// write lock, so a concurrent caller cannot slip between check and
    /// commit.
    ///
    /// The event carries the status the order held before the mutation; it is
    /// published after the write lock is released so a slow subscriber queue
    /// can never hold up readers.
    async fn commit_status(
        &self,
        customer_id: Uuid,
        order_id: Uuid,
        new_status: OrderStatus,
        precheck: impl FnOnce(&BeerOrder) -> Result<(), ServiceError>,
    ) -> Result<(), ServiceError> {
        let event = {
            let mut orders = self.orders.write().await;
            let order = orders
                .get_mut(&order_id)
                .filter(|o| o.customer_id == customer_id)
                .ok_or(ServiceError::OrderNotFound(order_id))?;
            precheck(order)?;

            let previous_status = order.order_status;
            order.order_status = new_status;
            order.version += 1;
            order.last_modified_date = OffsetDateTime::now_utc();

            info!(
                order_id = %order_id,
                previous_status = %previous_status,
                new_status = %new_status,
                "Order status updated"
            );
            StatusChangeEvent::new(order, previous_status)
        };

        self.publisher.publish(event).await;
        Ok(())
    }
}
