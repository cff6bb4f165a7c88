use crate::clients::{CustomerClient, OrderClient};
use crate::config::{ConfigError, GridConfig};
use crate::customer_actor;
use crate::enricher::OrderCountEnricher;
use crate::grid::CustomerGridLoader;
use crate::order_actor;
use crate::store::ActorOrderStore;
use std::sync::Arc;
use tokio::task::{JoinError, JoinHandle};
use tracing::{error, info};

/// Starts, wires and stops everything the customer grid needs.
///
/// - **Customer actor**: no dependencies.
/// - **Order actor**: receives a [`CustomerClient`] as context to validate orders.
/// - **Grid**: pages through customers and runs the [`OrderCountEnricher`]
///   (over an [`ActorOrderStore`]) as its after-load plugin.
///
/// ```rust,ignore
/// let system = GridSystem::new(&GridConfig::default())?;
/// let alice = system.customer_client.create_customer(CustomerCreate::new("Alice", "alice@example.com")).await?;
/// system.order_client.place_order(OrderCreate { customer_id: alice, total: 10.0 }).await?;
///
/// let page = system.grid.load(1).await?;
/// system.shutdown().await?;
/// ```
pub struct GridSystem {
    pub customer_client: CustomerClient,
    pub order_client: OrderClient,
    pub grid: CustomerGridLoader,
    handles: Vec<JoinHandle<()>>,
}

impl GridSystem {
    /// Spawns both actors on the current Tokio runtime.
    ///
    /// The config is validated first; a zero page or buffer size is refused
    /// before anything is started.
    pub fn new(config: &GridConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let (customer_actor, customer_client) = customer_actor::new(config.buffer_size);
        let (order_actor, order_client) = order_actor::new(config.buffer_size);

        let customer_handle = tokio::spawn(customer_actor.run(()));
        let order_handle = tokio::spawn(order_actor.run(customer_client.clone()));

        let store = ActorOrderStore::new(order_client.clone(), config);
        let enricher = Arc::new(OrderCountEnricher::new(store, config));
        let grid =
            CustomerGridLoader::new(customer_client.clone(), config.page_size).with_plugin(enricher);

        info!(page_size = config.page_size, table_prefix = %config.table_prefix, "Grid system started");

        Ok(Self {
            customer_client,
            order_client,
            grid,
            handles: vec![customer_handle, order_handle],
        })
    }

    /// Drops every client and waits for the actors to drain.
    ///
    /// The order actor holds a customer client in its context, so the customer
    /// actor only stops once the order actor has.
    pub async fn shutdown(self) -> Result<(), JoinError> {
        info!("Shutting down grid system...");
        drop(self.grid);
        drop(self.order_client);
        drop(self.customer_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Actor task failed");
                return Err(e);
            }
        }

        info!("Grid system shutdown complete.");
        Ok(())
    }
}
