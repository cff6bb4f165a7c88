//! # Customer Grid
//!
//! [`CustomerGridLoader`] turns one page of customers into a
//! [`CustomerCollection`] and then runs every registered [`AfterLoadPlugin`]
//! over it, in registration order, each awaited before the next starts.
//!
//! ```rust,ignore
//! let grid = CustomerGridLoader::new(customer_client, 20)
//!     .with_plugin(Arc::new(OrderCountEnricher::new(store, &config)));
//!
//! let page = grid.load(1).await?;
//! ```

use crate::clients::CustomerClient;
use crate::customer_actor::CustomerError;
use crate::model::{CustomerCollection, CustomerRecord};
use crate::store::StoreQueryError;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, instrument, warn};

#[derive(Debug, Clone, Error, PartialEq)]
pub enum GridError {
    #[error("Invalid page size: {0}")]
    InvalidPageSize(usize),

    #[error(transparent)]
    Customer(#[from] CustomerError),

    #[error(transparent)]
    Store(#[from] StoreQueryError),
}

/// Hook run on every collection right after it is loaded.
///
/// Plugins may be invoked more than once on the same collection (a host may
/// re-run its post-load pass); use collection flags to stay idempotent.
#[async_trait]
pub trait AfterLoadPlugin: Send + Sync {
    fn name(&self) -> &'static str;

    async fn after_load(&self, collection: &mut CustomerCollection) -> Result<(), GridError>;
}

/// Loads customer grid pages and runs the post-load plugins on them.
#[derive(Clone)]
pub struct CustomerGridLoader {
    customers: CustomerClient,
    page_size: usize,
    plugins: Vec<Arc<dyn AfterLoadPlugin>>,
}

impl CustomerGridLoader {
    pub fn new(customers: CustomerClient, page_size: usize) -> Self {
        Self {
            customers,
            page_size,
            plugins: Vec::new(),
        }
    }

    /// Registers a plugin after those already registered.
    pub fn with_plugin(mut self, plugin: Arc<dyn AfterLoadPlugin>) -> Self {
        self.plugins.push(plugin);
        self
    }

    /// Loads page `page` (1-based) and runs the plugins on it.
    #[instrument(skip(self), fields(page_size = self.page_size))]
    pub async fn load(&self, page: usize) -> Result<CustomerCollection, GridError> {
        if self.page_size == 0 {
            return Err(GridError::InvalidPageSize(self.page_size));
        }
        let customers = self.customers.list_page(page, self.page_size).await?;
        let mut collection: CustomerCollection =
            customers.into_iter().map(CustomerRecord::from).collect();
        debug!(rows = collection.len(), "Page loaded");

        self.after_load(&mut collection).await?;
        Ok(collection)
    }

    /// Runs every plugin over `collection`. Stops at the first failure.
    pub async fn after_load(&self, collection: &mut CustomerCollection) -> Result<(), GridError> {
        for plugin in &self.plugins {
            debug!(plugin = plugin.name(), "Running after_load");
            if let Err(e) = plugin.after_load(collection).await {
                warn!(plugin = plugin.name(), error = %e, "after_load failed");
                return Err(e);
            }
        }
        Ok(())
    }
}
