//! ANALYZE statement builder.

use serde::{Deserialize, Serialize};

use crate::ast::identifier::{Identifier, NodeKind};
use crate::ast::Schema;

/// `ANALYZE [schema[.table] | table | index]`.
///
/// Minimally configured it renders bare `ANALYZE`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct StatementAnalyze {
    pub(crate) schema: Option<Schema>,
    pub(crate) table: Option<String>,
    pub(crate) index: Option<String>,
}

impl StatementAnalyze {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schema(mut self, schema: impl Into<Schema>) -> Self {
        self.schema = Some(schema.into());
        self
    }

    pub fn table(mut self, table: impl Into<String>) -> Self {
        self.table = Some(table.into());
        self.index = None;
        self
    }

    pub fn index(mut self, index: impl Into<String>) -> Self {
        self.index = Some(index.into());
        self.table = None;
        self
    }
}

impl Identifier for StatementAnalyze {
    fn kind(&self) -> NodeKind {
        NodeKind::AnalyzeStmt
    }
}
