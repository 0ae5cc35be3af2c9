//! CREATE VIRTUAL TABLE statement builder.

use serde::{Deserialize, Serialize};

use crate::ast::identifier::{Identifier, NodeKind};
use crate::ast::Schema;

/// `CREATE VIRTUAL TABLE [IF NOT EXISTS] table USING module(args)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct StatementCreateVirtualTable {
    pub(crate) if_not_exists: bool,
    pub(crate) schema: Option<Schema>,
    pub(crate) table: Option<String>,
    pub(crate) module: Option<String>,
    pub(crate) arguments: Vec<String>,
}

impl StatementCreateVirtualTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_virtual_table(mut self, table: impl Into<String>) -> Self {
        self.table = Some(table.into());
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

    pub fn using(mut self, module: impl Into<String>) -> Self {
        self.module = Some(module.into());
        self
    }

    /// Append module arguments, passed through verbatim. An empty collection
    /// is a no-op.
    pub fn arguments<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.arguments.extend(args.into_iter().map(Into::into));
        self
    }
}

impl Identifier for StatementCreateVirtualTable {
    fn kind(&self) -> NodeKind {
        NodeKind::CreateVirtualTableStmt
    }
}
