//! CREATE INDEX statement builder.

use serde::{Deserialize, Serialize};

use crate::ast::identifier::{Identifier, NodeKind};
use crate::ast::schema_objects::IndexedColumn;
use crate::ast::{Expression, Schema};

/// `CREATE [UNIQUE] INDEX [IF NOT EXISTS] name ON table (...) [WHERE ...]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct StatementCreateIndex {
    pub(crate) unique: bool,
    pub(crate) if_not_exists: bool,
    pub(crate) schema: Option<Schema>,
    pub(crate) index: Option<String>,
    pub(crate) table: Option<String>,
    pub(crate) columns: Vec<IndexedColumn>,
    pub(crate) condition: Option<Expression>,
}

impl StatementCreateIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_index(mut self, index: impl Into<String>) -> Self {
        self.index = Some(index.into());
        self
    }

    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    pub fn if_not_exists(mut self) -> Self {
        self.if_not_exists = true;
        self
    }

    pub fn of(mut self, schema: impl Into<Schema>) -> Self {
        self.schema = Some(schema.into());
        self
    }

    pub fn on(mut self, table: impl Into<String>) -> Self {
        self.table = Some(table.into());
        self
    }

    /// Append indexed columns. An empty collection is a no-op.
    pub fn indexed<I, C>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<IndexedColumn>,
    {
        self.columns.extend(columns.into_iter().map(Into::into));
        self
    }

    /// Partial-index WHERE condition.
    pub fn filter(mut self, condition: impl Into<Expression>) -> Self {
        self.condition = Some(condition.into());
        self
    }
}

impl Identifier for StatementCreateIndex {
    fn kind(&self) -> NodeKind {
        NodeKind::CreateIndexStmt
    }
}
