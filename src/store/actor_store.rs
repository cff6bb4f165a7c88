use super::{
    CountSelect, OrderCountResult, OrderStore, StoreQueryError, CUSTOMER_ID_COLUMN,
};
use crate::clients::OrderClient;
use crate::config::GridConfig;
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// [`OrderStore`] backed by the order actor.
///
/// The physical orders table is `table_prefix + orders_table` from the config;
/// queries against any other table, or grouped by anything but `customer_id`,
/// are rejected as malformed. The order actor selects the orders matching the
/// id list and status filter; only those are sent back and counted.
#[derive(Clone)]
pub struct ActorOrderStore {
    orders: OrderClient,
    table_prefix: String,
    orders_table: String,
    timeout: Option<Duration>,
}

impl ActorOrderStore {
    pub fn new(orders: OrderClient, config: &GridConfig) -> Self {
        Self {
            orders,
            table_prefix: config.table_prefix.clone(),
            orders_table: config.orders_table.clone(),
            timeout: config.query_timeout(),
        }
    }

    fn check(&self, select: &CountSelect) -> Result<(), StoreQueryError> {
        let expected = self.table_name(&self.orders_table);
        if select.table() != expected {
            return Err(StoreQueryError::Malformed(format!(
                "unknown table {}, expected {expected}",
                select.table()
            )));
        }
        if select.key_column() != CUSTOMER_ID_COLUMN {
            return Err(StoreQueryError::Malformed(format!(
                "cannot group orders by {}",
                select.key_column()
            )));
        }
        if select.ids().is_empty() {
            return Err(StoreQueryError::Malformed("empty IN list".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl OrderStore for ActorOrderStore {
    fn table_name(&self, logical: &str) -> String {
        format!("{}{logical}", self.table_prefix)
    }

    #[instrument(skip_all, fields(table = select.table(), ids = select.ids().len()))]
    async fn fetch_pairs(&self, select: &CountSelect) -> Result<OrderCountResult, StoreQueryError> {
        self.check(select)?;
        debug!(sql = %select.to_sql(), "Counting orders");

        let listing = self
            .orders
            .list_for_customers(select.ids().iter().copied(), select.statuses());
        let listed = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, listing).await.map_err(|_| {
                warn!(?limit, "Order store timed out");
                StoreQueryError::Timeout(limit)
            })?,
            None => listing.await,
        };
        let orders = listed.map_err(|e| StoreQueryError::Unavailable(e.to_string()))?;

        let mut counts = OrderCountResult::new();
        for order in &orders {
            *counts.entry(order.customer_id).or_insert(0) += 1;
        }

        debug!(customers_with_orders = counts.len(), "Counted orders");
        Ok(counts)
    }
}
