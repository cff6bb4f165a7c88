//! [`ActorEntity`] implementation for [`Customer`].
//!
//! Customers have no dependencies and no custom actions; all the work is the
//! validation done while constructing them.

use super::error::CustomerError;
use crate::framework::ActorEntity;
use crate::model::{Customer, CustomerCreate, CustomerId};
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for Customer {
    type Id = CustomerId;
    type Create = CustomerCreate;
    type Action = ();
    type ActionResult = ();
    type Context = ();
    type Error = CustomerError;

    /// Rejects blank names and emails without an `@`.
    fn from_create_params(id: CustomerId, params: CustomerCreate) -> Result<Self, Self::Error> {
        let name = params.name.trim();
        if name.is_empty() {
            return Err(CustomerError::ValidationError(
                "name must not be empty".to_string(),
            ));
        }
        let email = params.email.trim();
        if !email.contains('@') {
            return Err(CustomerError::InvalidEmail(params.email));
        }
        Ok(Self {
            id,
            name: name.to_string(),
            email: email.to_string(),
        })
    }

    async fn handle_action(&mut self, _action: (), _ctx: &()) -> Result<(), Self::Error> {
        Ok(())
    }
}
