//! One loaded page of the customer grid.
//!
//! A [`CustomerCollection`] is owned by whoever loaded it; post-load plugins
//! borrow it mutably, edit the rows in place and leave named flags behind so a
//! second pass over the same instance can tell the work was already done.

use crate::model::{Customer, CustomerId};
use std::collections::HashMap;

/// A single grid row.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerRecord {
    pub entity_id: CustomerId,
    pub name: String,
    pub email: String,
    /// Number of orders placed by this customer. Zero until enriched.
    pub orders_count: u64,
}

impl CustomerRecord {
    pub fn new(entity_id: CustomerId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            entity_id,
            name: name.into(),
            email: email.into(),
            orders_count: 0,
        }
    }
}

impl From<Customer> for CustomerRecord {
    fn from(customer: Customer) -> Self {
        Self::new(customer.id, customer.name, customer.email)
    }
}

/// Ordered rows plus a bag of named one-shot flags.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomerCollection {
    items: Vec<CustomerRecord>,
    flags: HashMap<String, bool>,
}

impl CustomerCollection {
    pub fn new(items: Vec<CustomerRecord>) -> Self {
        Self {
            items,
            flags: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CustomerRecord> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, CustomerRecord> {
        self.items.iter_mut()
    }

    /// First row with the given id.
    pub fn get(&self, id: CustomerId) -> Option<&CustomerRecord> {
        self.items.iter().find(|record| record.entity_id == id)
    }

    /// Value of a named flag; unset flags read as `false`.
    pub fn flag(&self, name: &str) -> bool {
        self.flags.get(name).copied().unwrap_or(false)
    }

    pub fn set_flag(&mut self, name: impl Into<String>, value: bool) {
        self.flags.insert(name.into(), value);
    }
}

impl From<Vec<CustomerRecord>> for CustomerCollection {
    fn from(items: Vec<CustomerRecord>) -> Self {
        Self::new(items)
    }
}

impl FromIterator<CustomerRecord> for CustomerCollection {
    fn from_iter<I: IntoIterator<Item = CustomerRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a CustomerCollection {
    type Item = &'a CustomerRecord;
    type IntoIter = std::slice::Iter<'a, CustomerRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &'a mut CustomerCollection {
    type Item = &'a mut CustomerRecord;
    type IntoIter = std::slice::IterMut<'a, CustomerRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_flags_read_false() {
        let mut collection = CustomerCollection::default();
        assert!(!collection.flag("orders_count_column_added"));

        collection.set_flag("orders_count_column_added", true);
        assert!(collection.flag("orders_count_column_added"));
        assert!(!collection.flag("something_else"));
    }

    #[test]
    fn records_built_from_customers_start_at_zero() {
        let record = CustomerRecord::from(Customer {
            id: CustomerId(7),
            name: "Ada".into(),
            email: "ada@example.com".into(),
        });
        assert_eq!(record.entity_id, CustomerId(7));
        assert_eq!(record.orders_count, 0);

        let collection: CustomerCollection = vec![record].into_iter().collect();
        assert_eq!(collection.get(CustomerId(7)).map(|r| r.name.as_str()), Some("Ada"));
        assert!(collection.get(CustomerId(8)).is_none());
    }
}
