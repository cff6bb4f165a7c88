//! # Customer Actor
//!
//! Holds every registered customer. The grid pages through this actor, and
//! the order actor asks it whether a customer exists before accepting an order.
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`Customer`]
//! - [`error`] - [`CustomerError`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ```rust,ignore
//! let (actor, client) = customer_actor::new(32);
//! tokio::spawn(actor.run(()));
//!
//! let id = client.create_customer(CustomerCreate::new("Alice", "alice@example.com")).await?;
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::CustomerClient;
use crate::framework::ResourceActor;
use crate::model::Customer;

/// Creates a new Customer actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Customer>, CustomerClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, CustomerClient::new(generic_client))
}
