//! # Order Client
//!
//! Domain API over `ResourceClient<Order>`. Customer validation happens inside
//! the actor's `on_create` hook, not here.

use crate::clients::actor_client::{impl_actor_client, ActorClient};
use crate::framework::ResourceClient;
use crate::model::{CustomerId, Order, OrderCreate, OrderId, OrderStatus};
use std::collections::HashSet;
use crate::order_actor::{OrderAction, OrderError};
use tracing::{debug, info, instrument};

/// Client for interacting with the Order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn place_order(&self, params: OrderCreate) -> Result<OrderId, OrderError> {
        info!("Sending place_order to actor");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn complete_order(&self, id: OrderId) -> Result<OrderStatus, OrderError> {
        debug!("Sending request");
        self.inner
            .perform_action(id, OrderAction::Complete)
            .await
            .map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn cancel_order(&self, id: OrderId) -> Result<OrderStatus, OrderError> {
        debug!("Sending request");
        self.inner
            .perform_action(id, OrderAction::Cancel)
            .await
            .map_err(Self::map_error)
    }

    /// Every stored order, in id order.
    #[instrument(skip(self))]
    pub async fn list_orders(&self) -> Result<Vec<Order>, OrderError> {
        debug!("Sending request");
        self.inner.list(0, None).await.map_err(Self::map_error)
    }

    /// Orders of the given customers, in id order. With `statuses` non-empty,
    /// only orders in one of those statuses. Selection happens in the actor.
    #[instrument(skip_all)]
    pub async fn list_for_customers(
        &self,
        customers: impl IntoIterator<Item = CustomerId>,
        statuses: &[OrderStatus],
    ) -> Result<Vec<Order>, OrderError> {
        let customers: HashSet<CustomerId> = customers.into_iter().collect();
        let statuses = statuses.to_vec();
        debug!(customers = customers.len(), ?statuses, "Sending request");
        self.inner
            .filter(move |order: &Order| {
                customers.contains(&order.customer_id)
                    && (statuses.is_empty() || statuses.contains(&order.status))
            })
            .await
            .map_err(Self::map_error)
    }
}

impl_actor_client!(Order);
