//! # Customer Orders Count
//!
//! > **An `orders_count` column for the customer grid, computed with one query per page.**
//!
//! The customer grid loads a page of customers; right after that, the
//! [`OrderCountEnricher`](enricher::OrderCountEnricher) asks the order store for
//! `COUNT(*) ... GROUP BY customer_id` over exactly the ids on the page and writes
//! the result onto each row, 0 for customers without orders. A flag on the
//! collection keeps the enrichment from running twice on the same page.
//!
//! ## 🏗️ Architecture
//!
//! Customers and orders each live in a resource actor: a Tokio task owning every
//! entity of one type, reached through a cloneable, type-safe client. The grid,
//! the order store adapter and the enricher are plain async code on top.
//!
//! ```text
//!  CustomerGridLoader ── list_page ──▶ customer actor
//!        │
//!        └─ after_load ─▶ OrderCountEnricher ─ fetch_pairs ─▶ ActorOrderStore ─ filter ─▶ order actor
//! ```
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! Generic [`ResourceActor`](framework::ResourceActor), [`ResourceClient`](framework::ResourceClient)
//! and the [`ActorEntity`](framework::ActorEntity) contract, plus a mock client for tests.
//!
//! ### 2. The Resources ([`customer_actor`], [`order_actor`], [`model`], [`clients`])
//! Entities, their validation and actions, and the domain clients wrapping the generic one.
//!
//! ### 3. The Feature ([`enricher`], [`store`], [`grid`])
//! - [`store::OrderStore`]: table-name resolution and the grouped count.
//! - [`enricher::OrderCountEnricher`]: the one-shot enrichment.
//! - [`grid::CustomerGridLoader`]: page loading and the after-load plugin chain.
//!
//! ### 4. The Orchestrator ([`lifecycle`], [`config`])
//! [`GridSystem`](lifecycle::GridSystem) starts and wires everything from a
//! [`GridConfig`](config::GridConfig); `setup_tracing` installs logging.
//!
//! ## 🚀 Running
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ORDERS_COUNT_STATUSES=complete RUST_LOG=debug cargo run
//! cargo test
//! ```

pub mod clients;
pub mod config;
pub mod customer_actor;
pub mod enricher;
pub mod framework;
pub mod grid;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod store;
