//! # Observability
//!
//! Structured logging via `tracing`. Actors log their lifecycle at `info` and
//! each request at `debug`; the enricher logs one `info` line per enriched
//! page and the rendered SQL at `debug`.
//!
//! ```bash
//! RUST_LOG=info cargo run                                   # one line per step
//! RUST_LOG=debug cargo run                                  # payloads and SQL
//! RUST_LOG=customer_orders_count::enricher=debug cargo run  # only the enricher
//! ```
//!
//! With `RUST_LOG=debug` a page load reads roughly:
//!
//! ```text
//! DEBUG load: List entity_type="Customer" offset=0 limit=Some(20) returned=3
//! DEBUG load:enrich:fetch_pairs: Counting orders sql=SELECT customer_id, COUNT(*) AS orders_count FROM sales_order WHERE customer_id IN (?, ?, ?) GROUP BY customer_id
//! INFO  load:enrich: Orders count added customers=3 with_orders=2
//! ```

/// Installs the global subscriber, filtered by `RUST_LOG`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // entity_type and span names already say where a line came from
        .compact()
        .init();
}
