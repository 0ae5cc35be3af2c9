//! Column and schema leaves.

use serde::{Deserialize, Serialize};

use crate::ast::identifier::{Identifier, NodeKind};

/// A column reference, optionally qualified by a table name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub(crate) name: String,
    pub(crate) table: Option<String>,
}

impl Column {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            table: None,
        }
    }

    /// The rowid pseudo-column.
    pub fn rowid() -> Self {
        Self::new("rowid")
    }

    /// Qualify this column with a table name (`table.column`).
    pub fn in_table(mut self, table: impl Into<String>) -> Self {
        self.table = Some(table.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Identifier for Column {
    fn kind(&self) -> NodeKind {
        NodeKind::Column
    }
}

impl From<&str> for Column {
    fn from(name: &str) -> Self {
        Column::new(name)
    }
}

impl From<String> for Column {
    fn from(name: String) -> Self {
        Column::new(name)
    }
}

/// A database schema name. `main` is the default schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    pub(crate) name: String,
}

impl Schema {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The main (default) schema.
    pub fn main() -> Self {
        Self::new("main")
    }

    /// The schema holding temporary objects.
    pub fn temp() -> Self {
        Self::new("temp")
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Identifier for Schema {
    fn kind(&self) -> NodeKind {
        NodeKind::Schema
    }
}

impl From<&str> for Schema {
    fn from(name: &str) -> Self {
        Schema::new(name)
    }
}

impl From<String> for Schema {
    fn from(name: String) -> Self {
        Schema::new(name)
    }
}
