//! Plain data: stored entities, their create payloads and the grid rows.

pub mod collection;
pub mod customer;
pub mod order;

pub use collection::*;
pub use customer::*;
pub use order::*;
