//! The order store as seen by the enricher.
//!
//! [`OrderStore`] is the only thing [`OrderCountEnricher`](crate::enricher::OrderCountEnricher)
//! knows about where orders live: it resolves logical table names and runs one
//! grouped count. [`ActorOrderStore`] answers it from the order actor.

pub mod actor_store;
pub mod select;

pub use actor_store::ActorOrderStore;
pub use select::{CountSelect, SqlParam};

use crate::model::CustomerId;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// Logical name of the orders table.
pub const ORDERS_TABLE: &str = "sales_order";

/// Column linking an order to its customer; the grouping key.
pub const CUSTOMER_ID_COLUMN: &str = "customer_id";

/// `customer_id -> number of orders`. Customers without orders are absent.
pub type OrderCountResult = HashMap<CustomerId, u64>;

/// Why a count query failed. Callers get it unchanged; nothing retries.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StoreQueryError {
    /// The store could not be reached.
    #[error("Order store unavailable: {0}")]
    Unavailable(String),

    /// The store did not answer in time.
    #[error("Order store query timed out after {0:?}")]
    Timeout(Duration),

    /// The store refused the query itself.
    #[error("Malformed order count query: {0}")]
    Malformed(String),
}

/// Connection to wherever orders are kept.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Physical name of a logical table (e.g. with an installation prefix).
    fn table_name(&self, logical: &str) -> String;

    /// Runs a grouped count and returns `key -> count` pairs.
    async fn fetch_pairs(&self, select: &CountSelect) -> Result<OrderCountResult, StoreQueryError>;
}

#[async_trait]
impl<S: OrderStore + ?Sized> OrderStore for Arc<S> {
    fn table_name(&self, logical: &str) -> String {
        (**self).table_name(logical)
    }

    async fn fetch_pairs(&self, select: &CountSelect) -> Result<OrderCountResult, StoreQueryError> {
        (**self).fetch_pairs(select).await
    }
}
