//! [`ActorEntity`] implementation for [`Order`].
//!
//! The order actor runs with a [`CustomerClient`] as its context, injected at
//! `run()`, and uses it in `on_create` to refuse orders for unknown customers.

use super::actions::OrderAction;
use super::error::OrderError;
use crate::clients::{ActorClient, CustomerClient};
use crate::framework::ActorEntity;
use crate::model::{Order, OrderCreate, OrderId, OrderStatus};
use async_trait::async_trait;
use tracing::debug;

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Action = OrderAction;
    type ActionResult = OrderStatus;
    type Context = CustomerClient;
    type Error = OrderError;

    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, Self::Error> {
        if !params.total.is_finite() || params.total < 0.0 {
            return Err(OrderError::ValidationError(format!(
                "total must be a non-negative amount, got {}",
                params.total
            )));
        }
        Ok(Self::new(id, params.customer_id, params.total))
    }

    async fn on_create(&mut self, customers: &CustomerClient) -> Result<(), Self::Error> {
        debug!(customer_id = %self.customer_id, "Validating customer");
        match customers.get(self.customer_id).await {
            Ok(Some(_)) => Ok(()),
            Ok(None) => Err(OrderError::InvalidCustomer(self.customer_id)),
            Err(e) => Err(OrderError::ActorCommunicationError(e.to_string())),
        }
    }

    /// Only `Pending` orders can be completed or canceled.
    async fn handle_action(
        &mut self,
        action: OrderAction,
        _ctx: &CustomerClient,
    ) -> Result<OrderStatus, Self::Error> {
        let target = match action {
            OrderAction::Complete => OrderStatus::Complete,
            OrderAction::Cancel => OrderStatus::Canceled,
        };
        if self.status != OrderStatus::Pending {
            return Err(OrderError::InvalidTransition {
                from: self.status,
                to: target,
            });
        }
        self.status = target;
        Ok(target)
    }
}
