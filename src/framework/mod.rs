//! Generic actor framework for resource management.
//!
//! Every stored resource (customers, orders) lives inside its own
//! [`ResourceActor`], a Tokio task that owns the entities and serves
//! Create / Get / List / Action requests one at a time.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait that resource types implement to be managed by actors
//! - [`ResourceActor`] - Generic actor that manages entities
//! - [`ResourceClient`] - Type-safe, cloneable handle used to talk to an actor
//! - [`FrameworkError`] - Plumbing failures (closed channel, missing entity)
//!
//! # Testing
//!
//! See [`mock`] for a client that answers from scripted expectations.

pub mod actor;
pub mod client;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{Predicate, ResourceRequest, Response};
