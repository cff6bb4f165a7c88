//! # Orders Count Enrichment
//!
//! Adds `orders_count` to every row of a loaded customer page with a single
//! grouped count against the order store:
//!
//! 1. A collection already carrying the [`ORDERS_COUNT_FLAG`] is returned untouched.
//! 2. The flag is raised.
//! 3. The distinct customer ids are gathered; no ids, no query.
//! 4. One [`CountSelect`] goes to the store.
//! 5. Each row gets its count, or 0 when the store returned none for it.
//!
//! The flag goes up *before* the query. If the store fails, the error reaches
//! the caller and the same collection instance will not be enriched again;
//! its rows keep whatever `orders_count` they had. Reload the page to retry.

use crate::config::GridConfig;
use crate::grid::{AfterLoadPlugin, GridError};
use crate::model::{CustomerCollection, CustomerId, OrderStatus};
use crate::store::{CountSelect, OrderStore, StoreQueryError, CUSTOMER_ID_COLUMN};
use async_trait::async_trait;
use std::collections::BTreeSet;
use tracing::{debug, info, instrument};

/// Collection flag marking that order counts were already added.
pub const ORDERS_COUNT_FLAG: &str = "orders_count_column_added";

/// Post-load enrichment that writes per-customer order counts onto grid rows.
pub struct OrderCountEnricher<S> {
    store: S,
    orders_table: String,
    counted_statuses: Vec<OrderStatus>,
}

impl<S: OrderStore> OrderCountEnricher<S> {
    pub fn new(store: S, config: &GridConfig) -> Self {
        Self {
            store,
            orders_table: config.orders_table.clone(),
            counted_statuses: config.counted_statuses.clone(),
        }
    }

    /// Enriches `collection` in place and hands it back for chaining.
    #[instrument(skip_all, fields(rows = collection.len()))]
    pub async fn enrich<'c>(
        &self,
        collection: &'c mut CustomerCollection,
    ) -> Result<&'c mut CustomerCollection, StoreQueryError> {
        if collection.flag(ORDERS_COUNT_FLAG) {
            debug!("Orders count already added");
            return Ok(collection);
        }
        collection.set_flag(ORDERS_COUNT_FLAG, true);

        let ids: BTreeSet<CustomerId> = collection.iter().map(|record| record.entity_id).collect();
        if ids.is_empty() {
            debug!("No customers loaded");
            return Ok(collection);
        }

        let table = self.store.table_name(&self.orders_table);
        let select = CountSelect::new(table, CUSTOMER_ID_COLUMN)
            .where_in(ids)
            .with_statuses(self.counted_statuses.iter().copied());
        let counts = self.store.fetch_pairs(&select).await?;

        for record in collection.iter_mut() {
            record.orders_count = counts.get(&record.entity_id).copied().unwrap_or(0);
        }

        info!(customers = select.ids().len(), with_orders = counts.len(), "Orders count added");
        Ok(collection)
    }
}

#[async_trait]
impl<S: OrderStore + 'static> AfterLoadPlugin for OrderCountEnricher<S> {
    fn name(&self) -> &'static str {
        "orders_count"
    }

    async fn after_load(&self, collection: &mut CustomerCollection) -> Result<(), GridError> {
        self.enrich(collection).await?;
        Ok(())
    }
}
