//! REINDEX statement builder.

use serde::{Deserialize, Serialize};

use crate::ast::identifier::{Identifier, NodeKind};
use crate::ast::Schema;

/// What a REINDEX applies to. Collations cannot be schema-qualified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) enum ReindexTarget {
    Collation(String),
    Table(String),
    Index(String),
}

/// `REINDEX [collation | [schema.]table | [schema.]index]`.
///
/// Each configuration method maps to exactly one textual form; bare
/// `StatementReindex::new()` renders `REINDEX`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct StatementReindex {
    pub(crate) schema: Option<Schema>,
    pub(crate) target: Option<ReindexTarget>,
}

impl StatementReindex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn collation(mut self, name: impl Into<String>) -> Self {
        self.target = Some(ReindexTarget::Collation(name.into()));
        self
    }

    pub fn table(mut self, name: impl Into<String>) -> Self {
        self.target = Some(ReindexTarget::Table(name.into()));
        self
    }

    pub fn index(mut self, name: impl Into<String>) -> Self {
        self.target = Some(ReindexTarget::Index(name.into()));
        self
    }

    /// Schema qualifier for a table or index target.
    pub fn of(mut self, schema: impl Into<Schema>) -> Self {
        self.schema = Some(schema.into());
        self
    }
}

impl Identifier for StatementReindex {
    fn kind(&self) -> NodeKind {
        NodeKind::ReindexStmt
    }
}
