//! The grouped count query issued by the enricher.
//!
//! [`CountSelect`] is structured data first and SQL second: stores that talk
//! to a database render it with [`CountSelect::to_sql`] and bind
//! [`CountSelect::params`]; the actor-backed store reads the fields directly.

use crate::model::{CustomerId, OrderStatus};
use std::collections::BTreeSet;
use std::fmt::Display;

/// Column holding the order status, used by the optional status filter.
pub const STATUS_COLUMN: &str = "status";

/// Alias of the aggregate column in the rendered SQL.
pub const COUNT_ALIAS: &str = "orders_count";

/// `SELECT <key>, COUNT(*) AS orders_count FROM <table> WHERE <key> IN (...) GROUP BY <key>`
///
/// Ids and statuses are kept deduplicated and ascending, so the same set of
/// customers always renders the same statement.
#[derive(Debug, Clone, PartialEq)]
pub struct CountSelect {
    table: String,
    key_column: String,
    ids: Vec<CustomerId>,
    statuses: Vec<OrderStatus>,
}

/// A value bound to one `?` placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SqlParam {
    Int(u32),
    Text(&'static str),
}

impl Display for SqlParam {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Text(v) => write!(f, "'{v}'"),
        }
    }
}

impl CountSelect {
    pub fn new(table: impl Into<String>, key_column: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            key_column: key_column.into(),
            ids: Vec::new(),
            statuses: Vec::new(),
        }
    }

    /// Restricts the count to these customers. Duplicates are dropped.
    pub fn where_in(mut self, ids: impl IntoIterator<Item = CustomerId>) -> Self {
        let ids: BTreeSet<CustomerId> = self.ids.drain(..).chain(ids).collect();
        self.ids = ids.into_iter().collect();
        self
    }

    /// Counts only orders in one of these statuses. Empty means every status.
    pub fn with_statuses(mut self, statuses: impl IntoIterator<Item = OrderStatus>) -> Self {
        let statuses: BTreeSet<OrderStatus> = self.statuses.drain(..).chain(statuses).collect();
        self.statuses = statuses.into_iter().collect();
        self
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn key_column(&self) -> &str {
        &self.key_column
    }

    pub fn ids(&self) -> &[CustomerId] {
        &self.ids
    }

    pub fn statuses(&self) -> &[OrderStatus] {
        &self.statuses
    }

    /// Renders the statement with `?` placeholders, in [`params`](Self::params) order.
    pub fn to_sql(&self) -> String {
        let key = &self.key_column;
        let mut sql = format!(
            "SELECT {key}, COUNT(*) AS {COUNT_ALIAS} FROM {} WHERE {key} IN ({})",
            self.table,
            placeholders(self.ids.len())
        );
        if !self.statuses.is_empty() {
            sql.push_str(&format!(
                " AND {STATUS_COLUMN} IN ({})",
                placeholders(self.statuses.len())
            ));
        }
        sql.push_str(&format!(" GROUP BY {key}"));
        sql
    }

    pub fn params(&self) -> Vec<SqlParam> {
        self.ids
            .iter()
            .map(|id| SqlParam::Int(id.0))
            .chain(self.statuses.iter().map(|s| SqlParam::Text(s.as_str())))
            .collect()
    }
}

fn placeholders(n: usize) -> String {
    vec!["?"; n].join(", ")
}
