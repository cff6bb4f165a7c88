//! Demo: seeds a few customers and orders, loads the first grid page and
//! prints every row with its orders count.

use customer_orders_count::config::GridConfig;
use customer_orders_count::lifecycle::{setup_tracing, GridSystem};
use customer_orders_count::model::{CustomerCreate, OrderCreate};
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let config = GridConfig::from_env()?;
    info!(?config, "Starting customer grid");
    let system = GridSystem::new(&config)?;

    let seeding = async {
        let alice = system
            .customer_client
            .create_customer(CustomerCreate::new("Alice", "alice@example.com"))
            .await?;
        let bob = system
            .customer_client
            .create_customer(CustomerCreate::new("Bob", "bob@example.com"))
            .await?;
        system
            .customer_client
            .create_customer(CustomerCreate::new("Carol", "carol@example.com"))
            .await?;

        for (customer_id, total) in [(alice, 42.0), (alice, 19.5), (bob, 7.25)] {
            let order_id = system
                .order_client
                .place_order(OrderCreate { customer_id, total })
                .await?;
            system.order_client.complete_order(order_id).await?;
        }
        let pending = system
            .order_client
            .place_order(OrderCreate {
                customer_id: alice,
                total: 3.0,
            })
            .await?;
        info!(order_id = %pending, "Left one order pending");
        Ok::<_, Box<dyn std::error::Error>>(())
    };
    seeding.instrument(tracing::info_span!("seeding")).await?;

    let page = system
        .grid
        .load(1)
        .instrument(tracing::info_span!("grid_load"))
        .await;

    match page {
        Ok(page) => {
            for row in &page {
                println!(
                    "{:<12} {:<8} {:<20} {}",
                    row.entity_id.to_string(),
                    row.name,
                    row.email,
                    row.orders_count
                );
            }
        }
        Err(e) => error!(error = %e, "Grid load failed"),
    }

    system.shutdown().await?;
    info!("Done");
    Ok(())
}
