//! # Order Actor
//!
//! Holds every order. Its context is a [`CustomerClient`], so it must be
//! started after the customer actor exists:
//!
//! ```rust,ignore
//! let (customer_actor, customer_client) = customer_actor::new(32);
//! let (order_actor, order_client) = order_actor::new(32);
//!
//! tokio::spawn(customer_actor.run(()));
//! tokio::spawn(order_actor.run(customer_client.clone()));
//! ```

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::OrderClient;
use crate::framework::ResourceActor;
use crate::model::Order;

/// Creates a new Order actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Order>, OrderClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, OrderClient::new(generic_client))
}
