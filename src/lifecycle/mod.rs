//! # System Lifecycle
//!
//! Creates the actors, wires their dependencies, and shuts them down.
//!
//! Actors are built first and receive their dependencies only when started
//! (`run(context)`), so the order actor can depend on the customer client
//! without construction-order tangles. Shutdown is channel driven: once every
//! client is dropped, each actor's receive loop ends; [`GridSystem::shutdown`]
//! drops the clients it owns and awaits the tasks.

pub mod grid_system;
pub mod tracing;

pub use grid_system::*;
pub use self::tracing::setup_tracing;
