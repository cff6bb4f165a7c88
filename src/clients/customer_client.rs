//! # Customer Client
//!
//! Domain API over `ResourceClient<Customer>`: registration and grid paging.

use crate::clients::actor_client::{impl_actor_client, ActorClient};
use crate::customer_actor::CustomerError;
use crate::framework::ResourceClient;
use crate::model::{Customer, CustomerCreate, CustomerId};
use tracing::{debug, instrument};

/// Client for interacting with the Customer actor.
#[derive(Clone)]
pub struct CustomerClient {
    inner: ResourceClient<Customer>,
}

impl CustomerClient {
    pub fn new(inner: ResourceClient<Customer>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_customer(&self, params: CustomerCreate) -> Result<CustomerId, CustomerError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Returns page `page` (1-based) of at most `page_size` customers, in id order.
    /// Pages past the end come back empty.
    #[instrument(skip(self))]
    pub async fn list_page(&self, page: usize, page_size: usize) -> Result<Vec<Customer>, CustomerError> {
        if page == 0 {
            return Err(CustomerError::InvalidPage(page));
        }
        let offset = (page - 1).saturating_mul(page_size);
        debug!(offset, "Sending request");
        self.inner
            .list(offset, Some(page_size))
            .await
            .map_err(Self::map_error)
    }
}

impl_actor_client!(Customer);
