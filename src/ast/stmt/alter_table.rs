//! ALTER TABLE statement builder.

use serde::{Deserialize, Serialize};

use crate::ast::identifier::{Identifier, NodeKind};
use crate::ast::schema_objects::ColumnDef;
use crate::ast::{Column, Schema};

/// The single alteration an ALTER TABLE performs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) enum Alteration {
    RenameTo(String),
    RenameColumn { from: Column, to: Column },
    AddColumn(ColumnDef),
    DropColumn(Column),
}

/// `ALTER TABLE table RENAME TO ... | RENAME COLUMN ... | ADD COLUMN ... |
/// DROP COLUMN ...`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct StatementAlterTable {
    pub(crate) schema: Option<Schema>,
    pub(crate) table: Option<String>,
    pub(crate) alteration: Option<Alteration>,
}

impl StatementAlterTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alter_table(mut self, table: impl Into<String>) -> Self {
        self.table = Some(table.into());
        self
    }

    pub fn of(mut self, schema: impl Into<Schema>) -> Self {
        self.schema = Some(schema.into());
        self
    }

    pub fn rename_to(mut self, table: impl Into<String>) -> Self {
        self.alteration = Some(Alteration::RenameTo(table.into()));
        self
    }

    pub fn rename_column(mut self, from: impl Into<Column>, to: impl Into<Column>) -> Self {
        self.alteration = Some(Alteration::RenameColumn {
            from: from.into(),
            to: to.into(),
        });
        self
    }

    pub fn add_column(mut self, column: ColumnDef) -> Self {
        self.alteration = Some(Alteration::AddColumn(column));
        self
    }

    pub fn drop_column(mut self, column: impl Into<Column>) -> Self {
        self.alteration = Some(Alteration::DropColumn(column.into()));
        self
    }
}

impl Identifier for StatementAlterTable {
    fn kind(&self) -> NodeKind {
        NodeKind::AlterTableStmt
    }
}
