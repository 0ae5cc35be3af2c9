//! CREATE TABLE statement builder.

use serde::{Deserialize, Serialize};

use crate::ast::identifier::{Identifier, NodeKind};
use crate::ast::schema_objects::{ColumnDef, TableConstraint};
use crate::ast::stmt::StatementSelect;
use crate::ast::Schema;

/// `CREATE [TEMP] TABLE [IF NOT EXISTS] table (...) | AS select`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct StatementCreateTable {
    pub(crate) temp: bool,
    pub(crate) if_not_exists: bool,
    pub(crate) schema: Option<Schema>,
    pub(crate) table: Option<String>,
    pub(crate) columns: Vec<ColumnDef>,
    pub(crate) constraints: Vec<TableConstraint>,
    pub(crate) without_rowid: bool,
    pub(crate) as_select: Option<Box<StatementSelect>>,
}

impl StatementCreateTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_table(mut self, table: impl Into<String>) -> Self {
        self.table = Some(table.into());
        self
    }

    pub fn temp(mut self) -> Self {
        self.temp = true;
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

    pub fn define(mut self, column: ColumnDef) -> Self {
        self.columns.push(column);
        self
    }

    /// Append column definitions. An empty collection is a no-op.
    pub fn define_all<I>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = ColumnDef>,
    {
        self.columns.extend(columns);
        self
    }

    pub fn constraint(mut self, constraint: TableConstraint) -> Self {
        self.constraints.push(constraint);
        self
    }

    /// Append table constraints. An empty collection is a no-op.
    pub fn constraints<I>(mut self, constraints: I) -> Self
    where
        I: IntoIterator<Item = TableConstraint>,
    {
        self.constraints.extend(constraints);
        self
    }

    pub fn without_rowid(mut self) -> Self {
        self.without_rowid = true;
        self
    }

    /// `CREATE TABLE ... AS select`; replaces any column definitions.
    pub fn as_select(mut self, select: StatementSelect) -> Self {
        self.as_select = Some(Box::new(select));
        self
    }
}

impl Identifier for StatementCreateTable {
    fn kind(&self) -> NodeKind {
        NodeKind::CreateTableStmt
    }
}
