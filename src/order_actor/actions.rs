//! Custom actions for the Order actor.
//!
//! Both actions move a `Pending` order to a final state and return the new
//! [`OrderStatus`](crate::model::OrderStatus).

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderAction {
    /// Marks the order as fulfilled.
    Complete,
    /// Cancels the order.
    Cancel,
}
